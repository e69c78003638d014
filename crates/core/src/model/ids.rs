use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Identifies one planning page of the questionnaire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    DataManagement,
    Regulations,
}

impl PageId {
    pub const ALL: [PageId; 2] = [PageId::DataManagement, PageId::Regulations];

    /// URL slug used by routes and the catalog.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            PageId::DataManagement => "data-management",
            PageId::Regulations => "regulations",
        }
    }
}

/// A conditionally revealed block of questions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupId {
    Cloud,
    Local,
}

impl GroupId {
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            GroupId::Cloud => "cloud",
            GroupId::Local => "local",
        }
    }
}

/// One checkbox of the hosting question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostingType {
    Cloud,
    Local,
    NotSure,
}

impl HostingType {
    pub const ALL: [HostingType; 3] = [HostingType::Cloud, HostingType::Local, HostingType::NotSure];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            HostingType::Cloud => "cloud",
            HostingType::Local => "local",
            HostingType::NotSure => "not-sure",
        }
    }
}

/// Key of a free-text question, stable per page.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldKey(String);

impl FieldKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FieldKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl fmt::Display for HostingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for parsing an id from its slug
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
    raw: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from {:?}", self.kind, self.raw)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for PageId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|page| page.slug() == s)
            .ok_or_else(|| ParseIdError {
                kind: "PageId",
                raw: s.to_string(),
            })
    }
}

impl FromStr for GroupId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cloud" => Ok(GroupId::Cloud),
            "local" => Ok(GroupId::Local),
            _ => Err(ParseIdError {
                kind: "GroupId",
                raw: s.to_string(),
            }),
        }
    }
}

impl FromStr for HostingType {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HostingType::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| ParseIdError {
                kind: "HostingType",
                raw: s.to_string(),
            })
    }
}
