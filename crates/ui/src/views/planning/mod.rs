mod components;
mod tooltip;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use log::warn;
use planning_core::model::{HostingType, PageId, Questionnaire};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::map_planning_page;

use components::{GuidanceDialog, HostingPicker, ProgressBar, QuestionInput};

#[component]
pub fn PlanningView(page: PageId) -> Element {
    let ctx = use_context::<AppContext>();

    match ctx.planning().start_page(page) {
        // Keyed by page so switching pages starts from empty answers.
        Ok(questionnaire) => rsx! {
            PlanningForm { key: "{page}", initial: questionnaire }
        },
        Err(_) => rsx! {
            div { class: "page",
                p { class: "page-error", "{ViewError::PageNotFound.message()}" }
            }
        },
    }
}

/// A user action on the open page.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum PlanningIntent {
    EditField { key: String, value: String },
    ToggleHosting(HostingType),
    OpenGuidance,
    CloseGuidance,
}

/// One questionnaire page. Owns its answers until unmounted.
#[component]
pub fn PlanningForm(initial: Questionnaire) -> Element {
    let mut state = use_signal(|| initial);
    let vm = map_planning_page(&state.read());

    let dispatch = use_callback(move |intent: PlanningIntent| match intent {
        PlanningIntent::EditField { key, value } => {
            if let Err(err) = state.write().set_field(&key, value) {
                warn!("ignored input: {err}");
            }
        }
        PlanningIntent::ToggleHosting(kind) => {
            if let Err(err) = state.write().toggle_hosting(kind) {
                warn!("ignored hosting toggle: {err}");
            }
        }
        PlanningIntent::OpenGuidance => state.write().open_guidance(),
        PlanningIntent::CloseGuidance => state.write().close_guidance(),
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PlanningTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let on_field = move |(key, value): (String, String)| {
        dispatch.call(PlanningIntent::EditField { key, value });
    };
    let on_toggle = move |kind: HostingType| dispatch.call(PlanningIntent::ToggleHosting(kind));

    rsx! {
        div { class: "page planning-page",
            div { class: "planning-header",
                h1 { class: "planning-title", "{vm.title}" }
            }

            ProgressBar {
                percent: vm.progress_percent,
                label: vm.progress_label.clone(),
                detail: vm.answered_label.clone(),
            }

            div { class: "planning-questions",
                for question in vm.top_level {
                    QuestionInput {
                        key: "{question.key}",
                        question: question.clone(),
                        on_change: on_field,
                    }
                }

                if let Some(hosting) = vm.hosting {
                    HostingPicker {
                        prompt: hosting.prompt.clone(),
                        selection: hosting.selection,
                        on_toggle,
                        on_help: move |_| dispatch.call(PlanningIntent::OpenGuidance),
                    }

                    if hosting.guidance_open {
                        GuidanceDialog {
                            lines: hosting.guidance.clone(),
                            on_close: move |_| dispatch.call(PlanningIntent::CloseGuidance),
                        }
                    }
                }

                for group in vm.groups {
                    div { key: "{group.id}", class: "planning-group planning-group--{group.id}",
                        h4 { class: "planning-group__heading", "{group.heading}" }
                        for question in group.questions {
                            QuestionInput {
                                key: "{question.key}",
                                question: question.clone(),
                                on_change: on_field,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PlanningTestHandles {
    dispatch: Rc<RefCell<Option<Callback<PlanningIntent>>>>,
}

#[cfg(test)]
impl PlanningTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<PlanningIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<PlanningIntent> {
        (*self.dispatch.borrow()).expect("planning dispatch registered")
    }
}
