use dioxus::prelude::*;
use planning_core::{TooltipLine, TooltipNode};

/// Help icon with the formatted tooltip shown on hover.
#[component]
pub(super) fn QuestionTooltip(lines: Vec<TooltipLine>) -> Element {
    rsx! {
        span { class: "question-tooltip",
            button {
                class: "question-tooltip__trigger",
                r#type: "button",
                aria_label: "View more information",
                "?"
            }
            div { class: "question-tooltip__content", role: "tooltip",
                TooltipContent { lines }
            }
        }
    }
}

#[component]
pub(super) fn TooltipContent(lines: Vec<TooltipLine>) -> Element {
    rsx! {
        div { class: "tooltip-content",
            for (index, line) in lines.into_iter().enumerate() {
                Fragment { key: "{index}",
                    {render_node(line.node)}
                    if line.line_break {
                        br {}
                    }
                }
            }
        }
    }
}

fn render_node(node: TooltipNode) -> Element {
    match node {
        TooltipNode::ListItem { text, ordered } => rsx! {
            li {
                class: if ordered { "tooltip-item tooltip-item--ordered" } else { "tooltip-item" },
                "{text}"
            }
        },
        TooltipNode::Header { text } => rsx! {
            h4 { class: "tooltip-header", "{text}" }
        },
        TooltipNode::Link { text, url } => rsx! {
            a {
                class: "tooltip-link",
                href: "{url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{text}"
            }
        },
        TooltipNode::PlainLine { text } => rsx! { "{text}" },
    }
}
