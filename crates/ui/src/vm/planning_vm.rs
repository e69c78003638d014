use planning_core::TooltipLine;
use planning_core::model::{GroupId, HostingSelection, PageId, Question, Questionnaire};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub key: String,
    pub prompt: String,
    pub value: String,
    pub tooltip: Vec<TooltipLine>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionGroupVm {
    pub id: GroupId,
    pub heading: &'static str,
    pub questions: Vec<QuestionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostingVm {
    pub prompt: String,
    pub selection: HostingSelection,
    pub guidance_open: bool,
    pub guidance: Vec<TooltipLine>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlanningPageVm {
    pub page_id: PageId,
    pub title: String,
    pub progress_percent: f64,
    pub progress_label: String,
    pub answered_label: String,
    pub top_level: Vec<QuestionVm>,
    pub hosting: Option<HostingVm>,
    pub groups: Vec<QuestionGroupVm>,
}

#[must_use]
pub fn map_planning_page(questionnaire: &Questionnaire) -> PlanningPageVm {
    let schema = questionnaire.schema();
    let progress = questionnaire.progress();
    let percent = progress.percentage();

    let top_level = schema
        .top_level()
        .map(|question| map_question(questionnaire, question))
        .collect();

    let hosting = schema.hosting.as_ref().map(|prompt| HostingVm {
        prompt: prompt.prompt.clone(),
        selection: questionnaire
            .answers()
            .hosting()
            .copied()
            .unwrap_or_default(),
        guidance_open: questionnaire.guidance_open(),
        guidance: questionnaire.guidance(),
    });

    let groups = questionnaire
        .visible_groups()
        .into_iter()
        .map(|group| QuestionGroupVm {
            id: group,
            heading: group_heading(group),
            questions: schema
                .group(group)
                .map(|question| map_question(questionnaire, question))
                .collect(),
        })
        .collect();

    PlanningPageVm {
        page_id: questionnaire.page_id(),
        title: schema.title.clone(),
        progress_percent: percent,
        progress_label: format_percent(percent),
        answered_label: format!(
            "{} of {} answered",
            progress.questions_answered.min(progress.total),
            progress.total
        ),
        top_level,
        hosting,
        groups,
    }
}

fn map_question(questionnaire: &Questionnaire, question: &Question) -> QuestionVm {
    let key = question.key.as_str();
    QuestionVm {
        key: key.to_string(),
        prompt: question.prompt.clone(),
        value: questionnaire
            .answers()
            .field(key)
            .unwrap_or_default()
            .to_string(),
        tooltip: questionnaire.tooltip(key).unwrap_or_default(),
    }
}

fn group_heading(group: GroupId) -> &'static str {
    match group {
        GroupId::Cloud => "Additional Questions for Cloud Hosting",
        GroupId::Local => "Additional Questions for Local Server Hosting",
    }
}

/// Whole-number percentage label, e.g. `"42%"`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_percent(percent: f64) -> String {
    let rounded = percent.clamp(0.0, 100.0).round() as u32;
    format!("{rounded}%")
}
