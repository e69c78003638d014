use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use planning_core::model::PageId;
use services::PlanningService;

pub trait UiApp: Send + Sync {
    fn planning(&self) -> Arc<PlanningService>;
    fn start_page(&self) -> Option<PageId>;
}

#[derive(Clone)]
pub struct AppContext {
    planning: Arc<PlanningService>,
    start_page: Option<PageId>,
    start_page_pending: Arc<AtomicBool>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let start_page = app.start_page();
        Self {
            planning: app.planning(),
            start_page,
            start_page_pending: Arc::new(AtomicBool::new(start_page.is_some())),
        }
    }

    #[must_use]
    pub fn planning(&self) -> Arc<PlanningService> {
        Arc::clone(&self.planning)
    }

    /// The configured start page, handed out once per launch.
    #[must_use]
    pub fn take_start_page(&self) -> Option<PageId> {
        if self.start_page_pending.swap(false, Ordering::AcqRel) {
            self.start_page
        } else {
            None
        }
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
