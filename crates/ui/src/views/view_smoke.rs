use planning_core::model::{HostingType, PageId};

use super::test_harness::{ViewKind, builtin_service, setup_view_harness};

fn rendered(view: ViewKind) -> String {
    let mut harness = setup_view_harness(view);
    harness.rebuild();
    harness.render()
}

#[test]
fn home_view_smoke_lists_pages() {
    let html = rendered(ViewKind::Home);
    assert!(html.contains("Sustainability planning"), "missing heading in {html}");
    assert!(html.contains("Workforce and Regulations"), "missing page title in {html}");
    assert!(html.contains("3 questions"), "missing regulations count in {html}");
}

#[test]
fn data_management_smoke_hides_hosting_groups() {
    let html = rendered(ViewKind::Planning(PageId::DataManagement));
    assert_eq!(html.matches("question__input").count(), 4, "in {html}");
    assert!(html.contains("Not sure"), "missing hosting option in {html}");
    assert!(!html.contains("Additional Questions for Cloud Hosting"));
    assert!(html.contains("0 of 19 answered"), "missing progress detail in {html}");
}

#[test]
fn seeded_hosting_shows_both_groups() {
    let mut page = builtin_service()
        .start_page(PageId::DataManagement)
        .expect("start page");
    page.toggle_hosting(HostingType::Cloud).expect("cloud");
    page.toggle_hosting(HostingType::Local).expect("local");
    page.set_field("data_plans", "Survey data").expect("answer");

    let html = rendered(ViewKind::Form(page));
    assert!(html.contains("Additional Questions for Cloud Hosting"), "in {html}");
    assert!(html.contains("Additional Questions for Local Server Hosting"), "in {html}");
    assert_eq!(html.matches("question__input").count(), 19);
    assert!(html.contains("Survey data"), "missing answer in {html}");
    assert!(html.contains("Progress: 16%"), "missing progress in {html}");
}

#[test]
fn not_sure_smoke_opens_guidance() {
    let mut page = builtin_service()
        .start_page(PageId::DataManagement)
        .expect("start page");
    page.toggle_hosting(HostingType::NotSure).expect("not sure");

    let html = rendered(ViewKind::Form(page));
    assert!(html.contains("dialog__close"), "missing dialog in {html}");
    assert!(html.contains("target=\"_blank\""), "missing external link in {html}");
    assert!(html.contains("rel=\"noopener noreferrer\""), "in {html}");
    assert!(!html.contains("planning-group__heading"));
}

#[test]
fn regulations_smoke_has_no_hosting_question() {
    let html = rendered(ViewKind::Planning(PageId::Regulations));
    assert_eq!(html.matches("question__input").count(), 3, "in {html}");
    assert!(!html.contains("hosting__options"));
    assert!(html.contains("Progress: 0%"), "missing progress in {html}");
}

#[test]
fn tooltip_smoke_renders_markup() {
    let html = rendered(ViewKind::Planning(PageId::DataManagement));
    assert!(html.contains("tooltip-header"), "missing header in {html}");
    assert!(html.contains("<li"), "missing list item in {html}");
}
