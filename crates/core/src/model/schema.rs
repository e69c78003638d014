use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{FieldKey, GroupId, PageId};

//
// ─── PAGE CONFIGURATION ────────────────────────────────────────────────────────
//

/// A free-text question as supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub key: FieldKey,
    pub prompt: String,
    /// Raw tooltip text in the lightweight markup understood by `tooltip::format`.
    #[serde(default)]
    pub tooltip: String,
    /// `None` for top-level questions, which are always shown.
    #[serde(default)]
    pub group: Option<GroupId>,
}

/// The multi-select hosting question and its informational dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostingPrompt {
    pub prompt: String,
    #[serde(default)]
    pub guidance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSchema {
    pub id: PageId,
    pub title: String,
    #[serde(default)]
    pub hosting: Option<HostingPrompt>,
    /// Fixed progress denominator. Defaults to the number of text questions.
    #[serde(default)]
    pub total_questions: Option<usize>,
    pub questions: Vec<Question>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    #[error("page {page} has a question with an empty key")]
    EmptyKey { page: PageId },
    #[error("page {page} declares question key {key} more than once")]
    DuplicateKey { page: PageId, key: FieldKey },
    #[error("page {page} has a zero progress denominator")]
    ZeroTotal { page: PageId },
}

impl PageSchema {
    /// Check the fixed key set before any answer state is built from it.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` for empty or duplicate keys and for a zero denominator.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::with_capacity(self.questions.len());
        for question in &self.questions {
            if question.key.as_str().trim().is_empty() {
                return Err(SchemaError::EmptyKey { page: self.id });
            }
            if !seen.insert(&question.key) {
                return Err(SchemaError::DuplicateKey {
                    page: self.id,
                    key: question.key.clone(),
                });
            }
        }

        if self.total_questions() == 0 {
            return Err(SchemaError::ZeroTotal { page: self.id });
        }

        Ok(())
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.total_questions.unwrap_or(self.questions.len())
    }

    #[must_use]
    pub fn question(&self, key: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.key.as_str() == key)
    }

    pub fn top_level(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| q.group.is_none())
    }

    pub fn group(&self, group: GroupId) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| q.group == Some(group))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    fn question(key: &str, group: Option<GroupId>) -> Question {
        Question {
            key: FieldKey::new(key),
            prompt: format!("Prompt for {key}?"),
            tooltip: String::new(),
            group,
        }
    }

    /// Mirrors the data management page: 4 top-level, 8 cloud, 7 local.
    pub(crate) fn data_management() -> PageSchema {
        let mut questions = vec![
            question("data_plans", None),
            question("data_sufficiency", None),
            question("data_deletion", None),
            question("data_end_of_life", None),
        ];
        questions.extend((1..=8).map(|n| question(&format!("cloud_{n}"), Some(GroupId::Cloud))));
        questions.extend((1..=7).map(|n| question(&format!("local_{n}"), Some(GroupId::Local))));

        PageSchema {
            id: PageId::DataManagement,
            title: "Collecting, storing, and/or processing data".to_string(),
            hosting: Some(HostingPrompt {
                prompt: "Will you use cloud or local server(s) or both to host data?".to_string(),
                guidance: "Compare both options:\n• Cloud\n• Local".to_string(),
            }),
            total_questions: Some(19),
            questions,
        }
    }

    pub(crate) fn regulations() -> PageSchema {
        PageSchema {
            id: PageId::Regulations,
            title: "Sustainability: Workforce and Regulations".to_string(),
            hosting: None,
            total_questions: None,
            questions: vec![
                question("guidelines", None),
                question("capacity", None),
                question("training", None),
            ],
        }
    }
}
