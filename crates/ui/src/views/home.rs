use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use log::warn;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let pages = ctx.planning().pages();

    let launch_ctx = ctx.clone();
    use_effect(move || {
        if let Some(page) = launch_ctx.take_start_page() {
            if let Some(err) = navigator.replace(Route::Planning { page }) {
                warn!("start page {page} not opened: {err:?}");
            }
        }
    });

    rsx! {
        div { class: "page",
            h2 { "Sustainability planning" }
            p { "Work through each section. Answers stay on this screen only and are not saved." }
            ul { class: "page-index",
                for page in pages {
                    li { key: "{page.id}",
                        Link { class: "page-index__link", to: Route::Planning { page: page.id },
                            span { class: "page-index__title", "{page.title}" }
                            span { class: "page-index__count", "{page.question_count} questions" }
                        }
                    }
                }
            }
        }
    }
}
