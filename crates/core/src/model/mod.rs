mod answers;
mod hosting;
mod ids;
mod questionnaire;
pub(crate) mod schema;

pub use answers::{AnswerError, AnswerSet, AnswerValue};
pub use hosting::{HostingSelection, ToggleEffect, visible_groups};
pub use ids::{FieldKey, GroupId, HostingType, PageId, ParseIdError};
pub use questionnaire::Questionnaire;
pub use schema::{HostingPrompt, PageSchema, Question, SchemaError};
