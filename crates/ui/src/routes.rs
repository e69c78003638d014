use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use planning_core::model::PageId;

use crate::context::AppContext;
use crate::views::{HomeView, PlanningView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/planning/:page", PlanningView)] Planning { page: PageId },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let pages = ctx.planning().pages();

    rsx! {
        nav { class: "sidebar",
            h1 { "Planning" }
            ul {
                li { Link { to: Route::Home {}, "Overview" } }
                for page in pages {
                    li { key: "{page.id}",
                        Link { to: Route::Planning { page: page.id }, "{page.title}" }
                    }
                }
            }
        }
    }
}
