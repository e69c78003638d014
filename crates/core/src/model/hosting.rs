use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::ids::{GroupId, HostingType};

/// The cloud / local / not-sure checkbox trio.
///
/// `not_sure` excludes the other two; `cloud` and `local` may be combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostingSelection {
    cloud: bool,
    local: bool,
    not_sure: bool,
}

/// What a toggle asks of the surrounding page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleEffect {
    pub open_guidance: bool,
}

impl HostingSelection {
    #[must_use]
    pub fn cloud(&self) -> bool {
        self.cloud
    }

    #[must_use]
    pub fn local(&self) -> bool {
        self.local
    }

    #[must_use]
    pub fn not_sure(&self) -> bool {
        self.not_sure
    }

    #[must_use]
    pub fn is_selected(&self, kind: HostingType) -> bool {
        match kind {
            HostingType::Cloud => self.cloud,
            HostingType::Local => self.local,
            HostingType::NotSure => self.not_sure,
        }
    }

    /// Flip one checkbox and apply the gating rule.
    pub fn toggle(&mut self, kind: HostingType) -> ToggleEffect {
        match kind {
            HostingType::NotSure => {
                self.not_sure = !self.not_sure;
                self.cloud = false;
                self.local = false;
                ToggleEffect {
                    open_guidance: true,
                }
            }
            HostingType::Cloud => {
                self.cloud = !self.cloud;
                self.not_sure = false;
                ToggleEffect {
                    open_guidance: false,
                }
            }
            HostingType::Local => {
                self.local = !self.local;
                self.not_sure = false;
                ToggleEffect {
                    open_guidance: false,
                }
            }
        }
    }

    /// Booleans in a stable order, for progress counting.
    #[must_use]
    pub fn flags(&self) -> [bool; 3] {
        [self.cloud, self.local, self.not_sure]
    }
}

/// Question groups revealed by the current hosting choice.
///
/// `not_sure` reveals guidance, not questions, so it contributes nothing here.
#[must_use]
pub fn visible_groups(hosting: &HostingSelection) -> BTreeSet<GroupId> {
    let mut groups = BTreeSet::new();
    if hosting.cloud {
        groups.insert(GroupId::Cloud);
    }
    if hosting.local {
        groups.insert(GroupId::Local);
    }
    groups
}
