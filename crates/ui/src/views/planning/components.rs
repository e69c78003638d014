use dioxus::prelude::*;
use planning_core::TooltipLine;
use planning_core::model::{HostingSelection, HostingType};

use super::tooltip::{QuestionTooltip, TooltipContent};
use crate::vm::QuestionVm;

const HOSTING_OPTIONS: [(HostingType, &str); 3] = [
    (HostingType::Cloud, "Cloud"),
    (HostingType::Local, "Local Server(s)"),
    (HostingType::NotSure, "Not sure"),
];

#[component]
pub(super) fn ProgressBar(percent: f64, label: String, detail: String) -> Element {
    rsx! {
        div { class: "progress",
            div { class: "progress__meta",
                span { class: "progress__label", "Progress: {label}" }
                span { class: "progress__detail", "{detail}" }
            }
            div {
                class: "progress__track",
                role: "progressbar",
                aria_valuemin: "0",
                aria_valuemax: "100",
                aria_valuenow: "{percent:.0}",
                div { class: "progress__fill", style: "width: {percent}%" }
            }
        }
    }
}

#[component]
pub(super) fn QuestionInput(
    question: QuestionVm,
    on_change: Callback<(String, String)>,
) -> Element {
    let input_id = format!("question-{}", question.key);
    let key = question.key.clone();

    rsx! {
        div { class: "question",
            div { class: "question__label",
                label { r#for: "{input_id}", "{question.prompt}" }
                if !question.tooltip.is_empty() {
                    QuestionTooltip { lines: question.tooltip.clone() }
                }
            }
            textarea {
                id: "{input_id}",
                class: "question__input",
                rows: "4",
                value: "{question.value}",
                oninput: move |evt| on_change.call((key.clone(), evt.value())),
            }
        }
    }
}

#[component]
pub(super) fn HostingPicker(
    prompt: String,
    selection: HostingSelection,
    on_toggle: Callback<HostingType>,
    on_help: Callback<()>,
) -> Element {
    rsx! {
        div { class: "hosting",
            div { class: "hosting__label",
                h4 { "{prompt}" }
                button {
                    class: "hosting__help",
                    r#type: "button",
                    aria_label: "More information",
                    onclick: move |_| on_help.call(()),
                    "?"
                }
            }
            div { class: "hosting__options",
                for (kind, text) in HOSTING_OPTIONS {
                    label { key: "{kind}", class: "hosting__option",
                        input {
                            r#type: "checkbox",
                            name: "hosting-{kind}",
                            checked: selection.is_selected(kind),
                            onchange: move |_| on_toggle.call(kind),
                        }
                        span { "{text}" }
                    }
                }
            }
        }
    }
}

#[component]
pub(super) fn GuidanceDialog(lines: Vec<TooltipLine>, on_close: Callback<()>) -> Element {
    rsx! {
        div { class: "dialog-backdrop",
            div { class: "dialog", role: "dialog",
                button {
                    class: "dialog__close",
                    r#type: "button",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                div { class: "dialog__body",
                    TooltipContent { lines }
                }
            }
        }
    }
}
