//! Shared error types for the services crate.

use thiserror::Error;

use planning_core::model::{PageId, SchemaError};

/// Errors emitted while loading the question catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("page {0} appears more than once in the catalog")]
    DuplicatePage(PageId),
    #[error("catalog has no pages")]
    Empty,
}

/// Errors emitted by `PlanningService`.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlanningError {
    #[error("page {0} is not in the catalog")]
    UnknownPage(PageId),
}
