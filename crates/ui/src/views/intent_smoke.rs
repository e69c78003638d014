use planning_core::model::{HostingType, PageId};

use super::planning::PlanningIntent;
use super::test_harness::{ViewHarness, ViewKind, setup_view_harness};

fn data_management() -> ViewHarness {
    let mut harness = setup_view_harness(ViewKind::Planning(PageId::DataManagement));
    harness.rebuild();
    harness
}

#[test]
fn field_edit_updates_progress() {
    let mut harness = data_management();
    assert!(harness.render().contains("Progress: 0%"));

    harness.dispatch(PlanningIntent::EditField {
        key: "data_plans".to_string(),
        value: "Interview transcripts".to_string(),
    });

    let html = harness.render();
    assert!(html.contains("Progress: 5%"), "missing progress in {html}");
    assert!(html.contains("1 of 19 answered"), "missing detail in {html}");
    assert!(html.contains("Interview transcripts"), "missing answer in {html}");
}

#[test]
fn unknown_field_edit_is_ignored() {
    let mut harness = data_management();
    harness.dispatch(PlanningIntent::EditField {
        key: "budget".to_string(),
        value: "lots".to_string(),
    });
    assert!(harness.render().contains("Progress: 0%"));
}

#[test]
fn cloud_click_reveals_cloud_group() {
    let mut harness = data_management();
    assert!(!harness.render().contains("Additional Questions for Cloud Hosting"));

    harness.dispatch(PlanningIntent::ToggleHosting(HostingType::Cloud));

    let html = harness.render();
    assert!(html.contains("Additional Questions for Cloud Hosting"), "in {html}");
    assert!(!html.contains("Additional Questions for Local Server Hosting"));
    assert_eq!(html.matches("question__input").count(), 12);
    assert!(!html.contains("dialog__close"));

    harness.dispatch(PlanningIntent::ToggleHosting(HostingType::Cloud));
    assert!(!harness.render().contains("planning-group__heading"));
}

#[test]
fn not_sure_click_opens_guidance_until_closed() {
    let mut harness = data_management();
    harness.dispatch(PlanningIntent::ToggleHosting(HostingType::Cloud));
    harness.dispatch(PlanningIntent::ToggleHosting(HostingType::NotSure));

    let html = harness.render();
    assert!(html.contains("dialog__close"), "missing dialog in {html}");
    assert!(!html.contains("planning-group__heading"));

    harness.dispatch(PlanningIntent::CloseGuidance);
    assert!(!harness.render().contains("dialog__close"));
}

#[test]
fn help_button_reopens_guidance() {
    let mut harness = data_management();
    harness.dispatch(PlanningIntent::OpenGuidance);
    assert!(harness.render().contains("dialog__close"));

    harness.dispatch(PlanningIntent::CloseGuidance);
    assert!(!harness.render().contains("dialog__close"));
}
