mod common;

use course_page::form::{FieldError, RegistrationForm};
use course_page::models::FormField;
use course_page::view::render::{self, PanelInfo};
use course_page::view::{LOAD_ERROR_MESSAGE, ViewState};

fn body(state: &ViewState) -> String {
    render::detail_body(state, &render::initial_reveal(0.1)).into_string()
}

#[test]
fn loading_renders_full_viewport_spinner() {
    let html = body(&ViewState::Loading);
    assert!(html.contains("loading-screen"));
    assert!(html.contains("min-height: 100vh"));
    assert!(html.contains("spinner"));
    assert!(!html.contains("<form"));
}

#[test]
fn error_renders_message_without_retry() {
    let html = body(&ViewState::Error(LOAD_ERROR_MESSAGE.to_string()));
    assert!(html.contains(LOAD_ERROR_MESSAGE));
    assert!(!html.contains("<button"));
    assert!(!html.contains("<form"));
}

#[test]
fn intro_course_scenario() {
    let html = body(&ViewState::Loaded(common::intro_course()));

    assert!(html.contains("Intro to X"));
    assert!(html.contains("<span class=\"price\">Free</span>"));
    assert!(html.contains("<span class=\"batch-date\">Coming soon</span>"));
    assert_eq!(html.matches("class=\"learn-item\"").count(), 2);
    assert_eq!(html.matches("class=\"module\"").count(), 0);
    assert_eq!(html.matches("class=\"requirement\"").count(), 0);
    assert_eq!(html.matches("class=\"description-paragraph\"").count(), 0);
}

#[test]
fn learn_items_keep_their_order() {
    let course = common::full_course();
    let html = body(&ViewState::Loaded(course.clone()));

    assert_eq!(
        html.matches("class=\"learn-item\"").count(),
        course.what_you_will_learn.len()
    );
    let positions: Vec<usize> = course
        .what_you_will_learn
        .iter()
        .map(|item| html.find(&format!("<li class=\"learn-item\">{}</li>", item)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn loaded_course_renders_every_section() {
    let html = body(&ViewState::Loaded(common::full_course()));

    assert!(html.contains("$49.99"));
    assert!(html.contains("March 15, 2024"));
    assert!(html.contains("src=\"https://cdn.example.com/rust.png\""));
    assert_eq!(html.matches("class=\"module\"").count(), 2);
    assert_eq!(html.matches("class=\"module-point\"").count(), 3);
    assert_eq!(html.matches("class=\"requirement\"").count(), 1);
    assert_eq!(html.matches("class=\"description-paragraph\"").count(), 2);
    assert!(html.contains("action=\"/courses/rust-101/register\""));
}

#[test]
fn side_panel_hides_prefilled_course_field() {
    let html = body(&ViewState::Loaded(common::full_course()));

    assert!(html.contains(
        "<input type=\"hidden\" name=\"course\" value=\"Rust for Backend Engineers\">"
    ));
    assert!(html.contains("name=\"email\" value=\"\" required"));
    assert!(html.contains("<option value=\"\" disabled selected>Select your objective</option>"));
    assert!(html.contains("type=\"radio\" name=\"learning_approach\""));
}

#[test]
fn panel_without_title_offers_course_text_field() {
    let form = RegistrationForm::new(None);
    let info = PanelInfo {
        course_id: "abc123",
        title: None,
        price: None,
        batch_start_date: None,
    };
    let errors = vec![FieldError {
        field: FormField::Phone,
        message: "Please fill out this field.".to_string(),
    }];
    let html = render::registration_panel(info, &form, &errors).into_string();

    assert!(html.contains("type=\"text\" name=\"course\""));
    assert!(!html.contains("type=\"hidden\""));
    assert!(!html.contains("register-price"));
    assert!(html.contains("<span class=\"field-error\">Please fill out this field.</span>"));
}

#[test]
fn course_text_is_escaped() {
    let mut course = common::intro_course();
    course.title = "<script>alert(1)</script>".to_string();
    let html = body(&ViewState::Loaded(course));

    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn page_carries_reveal_threshold() {
    let html = render::detail_page(&ViewState::Loading, 0.25).into_string();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("data-reveal-threshold=\"0.25\""));
}

#[test]
fn only_the_hero_starts_revealed() {
    let html = body(&ViewState::Loaded(common::full_course()));

    assert!(html.contains("id=\"hero\" class=\"hero reveal revealed\""));
    assert!(html.contains("id=\"learn\" class=\"learn reveal\""));
    assert!(html.contains("id=\"register\" class=\"side-panel reveal\""));
}

#[test]
fn retry_page_keeps_course_facts_and_locked_course() {
    let course = common::full_course();
    let mut form = RegistrationForm::new(Some(course.title.as_str()));
    form.input(FormField::Email, "ada@example.com");
    form.input(FormField::Course, "Something else");
    let errors = form.validate().unwrap_err();

    let html = render::registration_retry_page(&course.id, Some(&course), &form, &errors, 0.1)
        .into_string();

    assert!(html.contains(
        "<input type=\"hidden\" name=\"course\" value=\"Rust for Backend Engineers\">"
    ));
    assert!(html.contains("<p class=\"register-price\">$49.99</p>"));
    assert!(html.contains("March 15, 2024"));
    assert!(html.contains("value=\"ada@example.com\""));
    assert!(html.contains("class=\"side-panel reveal revealed\""));
}
