use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use planning_core::model::{PageId, Questionnaire};
use services::PlanningService;

use crate::context::{UiApp, build_app_context};
use crate::views::planning::{PlanningIntent, PlanningTestHandles};
use crate::views::{HomeView, PlanningForm, PlanningView};

#[derive(Clone)]
struct TestApp {
    planning: Arc<PlanningService>,
}

impl UiApp for TestApp {
    fn planning(&self) -> Arc<PlanningService> {
        Arc::clone(&self.planning)
    }

    fn start_page(&self) -> Option<PageId> {
        None
    }
}

#[derive(Clone, PartialEq)]
pub enum ViewKind {
    Home,
    Planning(PageId),
    /// A form seeded with prepared answers.
    Form(Questionnaire),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    planning_handles: Option<PlanningTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    if let Some(handles) = props.planning_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Planning(page) => rsx! { PlanningView { page } },
        ViewKind::Form(initial) => rsx! { PlanningForm { initial } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub planning_handles: Option<PlanningTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: PlanningIntent) {
        let handles = self
            .planning_handles
            .as_ref()
            .expect("planning handles for a planning view");
        handles.dispatch().call(intent);
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn builtin_service() -> Arc<PlanningService> {
    Arc::new(PlanningService::builtin().expect("builtin catalog"))
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_service(view, builtin_service())
}

pub fn setup_view_harness_with_service(
    view: ViewKind,
    planning: Arc<PlanningService>,
) -> ViewHarness {
    let planning_handles = match view {
        ViewKind::Planning(_) | ViewKind::Form(_) => Some(PlanningTestHandles::default()),
        ViewKind::Home => None,
    };
    let app = Arc::new(TestApp { planning });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            planning_handles: planning_handles.clone(),
        },
    );
    ViewHarness {
        dom,
        planning_handles,
    }
}
