//! Completion percentage over a page's fixed question count.
//!
//! The denominator never shrinks when a group is hidden: an unanswered hidden
//! question still counts against it, and answers left in a hidden group still
//! count towards it.

use crate::model::{AnswerSet, AnswerValue};

/// Answered vs. total question count for one page.
///
/// `answered` drives the percentage and includes checked hosting boxes;
/// `questions_answered` counts text answers only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressMetric {
    pub answered: usize,
    pub questions_answered: usize,
    pub total: usize,
}

impl ProgressMetric {
    #[must_use]
    pub fn from_answers(answers: &AnswerSet, total: usize) -> Self {
        Self {
            answered: count_answered(answers),
            questions_answered: count_questions_answered(answers),
            total,
        }
    }

    /// Percentage in `[0, 100]`.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        percentage(self.answered, self.total)
    }

    /// Every question has a text answer. Hosting boxes do not count here.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.questions_answered >= self.total
    }
}

/// Non-empty text answers plus checked hosting boxes.
#[must_use]
pub fn count_answered(answers: &AnswerSet) -> usize {
    answers.values().filter(|value| value.is_answered()).count()
}

/// Non-empty text answers only.
#[must_use]
pub fn count_questions_answered(answers: &AnswerSet) -> usize {
    answers
        .values()
        .filter(|value| matches!(value, AnswerValue::Text(_)) && value.is_answered())
        .count()
}

#[must_use]
pub fn compute_progress(answers: &AnswerSet, total: usize) -> f64 {
    percentage(count_answered(answers), total)
}

// Hosting flags are counted but not part of `total`, so the raw ratio can pass 100.
#[allow(clippy::cast_precision_loss)]
fn percentage(answered: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((answered as f64 / total as f64) * 100.0).clamp(0.0, 100.0)
}
