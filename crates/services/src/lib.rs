#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod planning_service;

pub use catalog::Catalog;
pub use error::{CatalogError, PlanningError};
pub use planning_service::{PageSummary, PlanningService};
