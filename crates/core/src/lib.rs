#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod progress;
pub mod tooltip;

pub use error::Error;
pub use progress::{ProgressMetric, compute_progress, count_answered, count_questions_answered};
pub use tooltip::{TooltipLine, TooltipNode};
