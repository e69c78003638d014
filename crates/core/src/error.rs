use thiserror::Error;

use crate::model::{AnswerError, ParseIdError, SchemaError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
}
