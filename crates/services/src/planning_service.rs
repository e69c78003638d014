use std::sync::Arc;

use log::debug;
use planning_core::model::{PageId, PageSchema, Questionnaire};

use crate::catalog::Catalog;
use crate::error::{CatalogError, PlanningError};

/// Index entry for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub id: PageId,
    pub title: String,
    pub question_count: usize,
}

/// Hands out fresh per-page answer state built from the catalog.
#[derive(Debug, Clone)]
pub struct PlanningService {
    catalog: Catalog,
}

impl PlanningService {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded catalog is invalid.
    pub fn builtin() -> Result<Self, CatalogError> {
        Catalog::builtin().map(Self::new)
    }

    #[must_use]
    pub fn pages(&self) -> Vec<PageSummary> {
        self.catalog
            .pages()
            .map(|page| PageSummary {
                id: page.id,
                title: page.title.clone(),
                question_count: page.total_questions(),
            })
            .collect()
    }

    #[must_use]
    pub fn page(&self, id: PageId) -> Option<Arc<PageSchema>> {
        self.catalog.page(id)
    }

    /// Empty answers for `id`, as when the page is first opened.
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::UnknownPage` if the catalog has no such page.
    pub fn start_page(&self, id: PageId) -> Result<Questionnaire, PlanningError> {
        let schema = self.page(id).ok_or(PlanningError::UnknownPage(id))?;
        debug!("starting page {id}");
        Ok(Questionnaire::new(schema))
    }
}
