use std::collections::HashSet;
use std::sync::Arc;

use log::info;
use planning_core::model::{PageId, PageSchema};

use crate::error::CatalogError;

const DATA_MANAGEMENT: &str = include_str!("../catalog/data_management.json");
const REGULATIONS: &str = include_str!("../catalog/regulations.json");

/// Validated page configurations, in display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    pages: Vec<Arc<PageSchema>>,
}

impl Catalog {
    /// The pages shipped with the application.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if an embedded page fails to parse or validate.
    pub fn builtin() -> Result<Self, CatalogError> {
        let pages = [DATA_MANAGEMENT, REGULATIONS]
            .into_iter()
            .map(serde_json::from_str::<PageSchema>)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_pages(pages)
    }

    /// Load a catalog from a JSON array of pages.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for malformed JSON, invalid pages, duplicates or an empty list.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let pages: Vec<PageSchema> = serde_json::from_str(text)?;
        Self::from_pages(pages)
    }

    /// # Errors
    ///
    /// Returns `CatalogError` for invalid pages, duplicates or an empty list.
    pub fn from_pages(pages: Vec<PageSchema>) -> Result<Self, CatalogError> {
        if pages.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for page in &pages {
            page.validate()?;
            if !seen.insert(page.id) {
                return Err(CatalogError::DuplicatePage(page.id));
            }
        }

        info!("catalog loaded with {} pages", pages.len());
        Ok(Self {
            pages: pages.into_iter().map(Arc::new).collect(),
        })
    }

    #[must_use]
    pub fn page(&self, id: PageId) -> Option<Arc<PageSchema>> {
        self.pages.iter().find(|page| page.id == id).cloned()
    }

    pub fn pages(&self) -> impl Iterator<Item = &Arc<PageSchema>> {
        self.pages.iter()
    }
}

#[cfg(test)]
mod tests {
    use planning_core::model::{GroupId, SchemaError};

    use super::*;

    #[test]
    fn builtin_pages_load() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let ids: Vec<_> = catalog.pages().map(|page| page.id).collect();
        assert_eq!(ids, vec![PageId::DataManagement, PageId::Regulations]);
    }

    #[test]
    fn data_management_has_expected_shape() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let page = catalog.page(PageId::DataManagement).expect("page");
        assert_eq!(page.top_level().count(), 4);
        assert_eq!(page.group(GroupId::Cloud).count(), 8);
        assert_eq!(page.group(GroupId::Local).count(), 7);
        assert_eq!(page.total_questions(), 19);
        assert!(page.hosting.is_some());
    }

    #[test]
    fn regulations_has_three_questions() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let page = catalog.page(PageId::Regulations).expect("page");
        assert_eq!(page.total_questions(), 3);
        assert!(page.hosting.is_none());
    }

    #[test]
    fn duplicate_pages_are_rejected() {
        let page = r#"{"id":"regulations","title":"R","questions":[{"key":"a","prompt":"A?"}]}"#;
        let err = Catalog::from_json(&format!("[{page},{page}]")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicatePage(PageId::Regulations)));
    }

    #[test]
    fn invalid_page_is_rejected() {
        let json = r#"[{"id":"regulations","title":"R","questions":[
            {"key":"a","prompt":"A?"},{"key":"a","prompt":"Again?"}]}]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Schema(SchemaError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn empty_and_malformed_catalogs_fail() {
        assert!(matches!(Catalog::from_json("[]"), Err(CatalogError::Empty)));
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Json(_))
        ));
    }
}
