use std::collections::BTreeSet;
use std::sync::Arc;

use log::debug;

use crate::model::answers::{AnswerError, AnswerSet};
use crate::model::hosting::visible_groups;
use crate::model::ids::{GroupId, HostingType, PageId};
use crate::model::schema::{PageSchema, Question};
use crate::progress::ProgressMetric;
use crate::tooltip::{self, TooltipLine};

/// Answer state for one open page. Dropped when the page is left.
#[derive(Debug, Clone, PartialEq)]
pub struct Questionnaire {
    schema: Arc<PageSchema>,
    answers: AnswerSet,
    guidance_open: bool,
}

impl Questionnaire {
    #[must_use]
    pub fn new(schema: Arc<PageSchema>) -> Self {
        let answers = AnswerSet::for_schema(&schema);
        debug!(
            "questionnaire {} opened with {} questions",
            schema.id,
            schema.questions.len()
        );
        Self {
            schema,
            answers,
            guidance_open: false,
        }
    }

    #[must_use]
    pub fn page_id(&self) -> PageId {
        self.schema.id
    }

    #[must_use]
    pub fn schema(&self) -> &PageSchema {
        &self.schema
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// # Errors
    ///
    /// Returns `AnswerError::UnknownField` if `key` is not on this page.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> Result<(), AnswerError> {
        self.answers.set_field(key, value)
    }

    /// Apply a hosting checkbox click. Answers in groups that become hidden are kept.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::NoHostingQuestion` on pages without the hosting question.
    pub fn toggle_hosting(&mut self, kind: HostingType) -> Result<(), AnswerError> {
        let effect = self.answers.toggle_hosting(kind)?;
        if effect.open_guidance {
            self.guidance_open = true;
        }
        Ok(())
    }

    pub fn open_guidance(&mut self) {
        self.guidance_open = true;
    }

    pub fn close_guidance(&mut self) {
        self.guidance_open = false;
    }

    #[must_use]
    pub fn guidance_open(&self) -> bool {
        self.guidance_open
    }

    #[must_use]
    pub fn progress(&self) -> ProgressMetric {
        ProgressMetric::from_answers(&self.answers, self.schema.total_questions())
    }

    #[must_use]
    pub fn visible_groups(&self) -> BTreeSet<GroupId> {
        self.answers
            .hosting()
            .map(visible_groups)
            .unwrap_or_default()
    }

    /// Top-level questions plus those of visible groups, in catalog order.
    #[must_use]
    pub fn visible_questions(&self) -> Vec<&Question> {
        let groups = self.visible_groups();
        self.schema
            .questions
            .iter()
            .filter(|q| q.group.is_none_or(|group| groups.contains(&group)))
            .collect()
    }

    /// Formatted tooltip for `key`, or `None` if the page has no such question.
    #[must_use]
    pub fn tooltip(&self, key: &str) -> Option<Vec<TooltipLine>> {
        self.schema.question(key).map(|q| tooltip::format(&q.tooltip))
    }

    /// Formatted hosting guidance; empty on pages without the hosting question.
    #[must_use]
    pub fn guidance(&self) -> Vec<TooltipLine> {
        self.schema
            .hosting
            .as_ref()
            .map(|hosting| tooltip::format(&hosting.guidance))
            .unwrap_or_default()
    }
}
