use std::collections::BTreeMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::hosting::{HostingSelection, ToggleEffect};
use crate::model::ids::{FieldKey, HostingType};
use crate::model::schema::PageSchema;

/// A single captured answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerValue<'a> {
    Text(&'a str),
    Toggle(bool),
}

impl AnswerValue<'_> {
    /// Non-empty text or a checked box.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        match self {
            AnswerValue::Text(text) => !text.is_empty(),
            AnswerValue::Toggle(checked) => *checked,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("question key {0} is not part of this page")]
    UnknownField(String),
    #[error("this page has no hosting question")]
    NoHostingQuestion,
}

/// Answers for one page, keyed by the page's fixed question keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    text: BTreeMap<FieldKey, String>,
    hosting: Option<HostingSelection>,
}

impl AnswerSet {
    /// Empty answers for every key of `schema`.
    #[must_use]
    pub fn for_schema(schema: &PageSchema) -> Self {
        let text = schema
            .questions
            .iter()
            .map(|q| (q.key.clone(), String::new()))
            .collect();
        let hosting = schema.hosting.as_ref().map(|_| HostingSelection::default());
        Self { text, hosting }
    }

    /// Replace the answer stored under `key`. Any string, including empty, is accepted.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::UnknownField` if `key` is not one of the page's keys.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> Result<(), AnswerError> {
        let Some(slot) = self.text.get_mut(key) else {
            warn!("rejected answer for unknown key {key}");
            return Err(AnswerError::UnknownField(key.to_string()));
        };
        *slot = value.into();
        debug!("answer {key} set ({} chars)", slot.chars().count());
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `AnswerError::NoHostingQuestion` on pages without the hosting question.
    pub fn toggle_hosting(&mut self, kind: HostingType) -> Result<ToggleEffect, AnswerError> {
        let hosting = self
            .hosting
            .as_mut()
            .ok_or(AnswerError::NoHostingQuestion)?;
        let effect = hosting.toggle(kind);
        debug!("hosting {kind} toggled, now {hosting:?}");
        Ok(effect)
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.text.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn hosting(&self) -> Option<&HostingSelection> {
        self.hosting.as_ref()
    }

    /// Every text answer plus every hosting flag, hidden groups included.
    pub fn values(&self) -> impl Iterator<Item = AnswerValue<'_>> {
        let text = self.text.values().map(|value| AnswerValue::Text(value.as_str()));
        let flags = self
            .hosting
            .iter()
            .flat_map(|hosting| hosting.flags())
            .map(AnswerValue::Toggle);
        text.chain(flags)
    }
}
