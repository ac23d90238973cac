use maud::{DOCTYPE, Markup, html};

use crate::form::{FieldError, RegistrationForm, SubmissionStatus};
use crate::models::{CourseRecord, FormField, LearningApproach, OBJECTIVE_PLACEHOLDER, Objective};
use crate::view::format::{format_date, format_price};
use crate::view::reveal::{RevealTracker, Section};
use crate::view::state::ViewState;

/// Read-only course facts handed to the registration panel.
#[derive(Debug, Clone, Copy)]
pub struct PanelInfo<'a> {
    pub course_id: &'a str,
    pub title: Option<&'a str>,
    pub price: Option<f64>,
    pub batch_start_date: Option<&'a str>,
}

impl<'a> PanelInfo<'a> {
    pub fn from_course(course: &'a CourseRecord) -> Self {
        Self {
            course_id: &course.id,
            title: Some(course.title.as_str()),
            price: course.price,
            batch_start_date: course.batch_start_date.as_deref(),
        }
    }
}

pub fn register_action(course_id: &str) -> String {
    format!("/courses/{}/register", course_id)
}

fn layout(title: &str, reveal_threshold: f64, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href="/static/course.css";
                script src="/static/reveal.js" defer {}
            }
            body data-reveal-threshold=(reveal_threshold.to_string()) {
                (body)
            }
        }
    }
}

/// Reveal state a freshly loaded page starts with: the hero is above the
/// fold, everything else waits for the scroll observer.
pub fn initial_reveal(reveal_threshold: f64) -> RevealTracker {
    let mut reveal = RevealTracker::new(reveal_threshold);
    reveal.observe(Section::Hero, 1.0);
    reveal
}

fn section_class(base: &str, section: Section, reveal: &RevealTracker) -> String {
    if reveal.is_revealed(section) {
        format!("{} reveal revealed", base)
    } else {
        format!("{} reveal", base)
    }
}

/// Full detail page for whatever state the view is in.
pub fn detail_page(state: &ViewState, reveal_threshold: f64) -> Markup {
    let title = match state {
        ViewState::Loaded(course) => course.title.as_str(),
        _ => "Course details",
    };
    let reveal = initial_reveal(reveal_threshold);
    layout(title, reveal_threshold, detail_body(state, &reveal))
}

pub fn detail_body(state: &ViewState, reveal: &RevealTracker) -> Markup {
    match state {
        ViewState::Loading => html! {
            div.loading-screen style="min-height: 100vh" role="status" aria-live="polite" {
                div.spinner {}
                span.visually-hidden { "Loading..." }
            }
        },
        ViewState::Error(message) => html! {
            div.load-error role="alert" {
                p { (message) }
            }
        },
        ViewState::Loaded(course) => {
            let form = RegistrationForm::new(Some(course.title.as_str()));
            course_layout(course, &form, &[], reveal)
        }
    }
}

/// Loaded layout with an explicit form state, used when re-rendering after a
/// rejected submission.
pub fn course_layout(
    course: &CourseRecord,
    form: &RegistrationForm,
    errors: &[FieldError],
    reveal: &RevealTracker,
) -> Markup {
    html! {
        main.course-detail {
            section id=(Section::Hero.anchor()) class=(section_class("hero", Section::Hero, reveal)) {
                @if let Some(image) = &course.image {
                    img.hero-image src=(image) alt=(course.title);
                }
                h1 { (course.title) }
                div.hero-meta {
                    span.price { (format_price(course.price)) }
                    span.batch-date { (format_date(course.batch_start_date.as_deref())) }
                }
                p.summary { (course.summary) }
            }
            div.course-columns {
                div.course-content {
                    section id=(Section::Learn.anchor()) class=(section_class("learn", Section::Learn, reveal)) {
                        h2 { "What you'll learn" }
                        ul.learn-grid {
                            @for item in &course.what_you_will_learn {
                                li class="learn-item" { (item) }
                            }
                        }
                    }
                    section id=(Section::Modules.anchor()) class=(section_class("modules", Section::Modules, reveal)) {
                        h2 { "Course modules" }
                        ol.module-list {
                            @for module in &course.modules {
                                li class="module" {
                                    h3 { (module.title) }
                                    ul {
                                        @for point in &module.points {
                                            li class="module-point" { (point) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    section id=(Section::Requirements.anchor()) class=(section_class("requirements", Section::Requirements, reveal)) {
                        h2 { "Requirements" }
                        ul {
                            @for requirement in &course.requirements {
                                li class="requirement" { (requirement) }
                            }
                        }
                    }
                    section id=(Section::Description.anchor()) class=(section_class("description", Section::Description, reveal)) {
                        h2 { "Description" }
                        @for paragraph in &course.description {
                            p class="description-paragraph" { (paragraph) }
                        }
                    }
                }
                aside id=(Section::Register.anchor()) class=(section_class("side-panel", Section::Register, reveal)) {
                    (registration_panel(PanelInfo::from_course(course), form, errors))
                }
            }
        }
    }
}

pub fn registration_panel(info: PanelInfo<'_>, form: &RegistrationForm, errors: &[FieldError]) -> Markup {
    let fields = form.fields();
    let error_for = |field: FormField| errors.iter().find(|e| e.field == field).map(|e| e.message.as_str());

    html! {
        div.register-card {
            @if let Some(title) = info.title {
                h2 { (title) }
                p.register-price { (format_price(info.price)) }
                p.register-date { "Batch starts: " (format_date(info.batch_start_date)) }
            }

            form.registration-form method="post" action=(register_action(info.course_id)) {
                (text_input(FormField::Email, "email", fields.get(FormField::Email), error_for(FormField::Email)))
                (text_input(FormField::FirstName, "text", fields.get(FormField::FirstName), error_for(FormField::FirstName)))
                (text_input(FormField::LastName, "text", fields.get(FormField::LastName), error_for(FormField::LastName)))
                div.phone-row {
                    (text_input(FormField::CountryCode, "text", fields.get(FormField::CountryCode), error_for(FormField::CountryCode)))
                    (text_input(FormField::Phone, "tel", fields.get(FormField::Phone), error_for(FormField::Phone)))
                }
                @if form.course_is_locked() {
                    input type="hidden" name=(FormField::Course.wire_name()) value=(fields.get(FormField::Course));
                } @else {
                    (text_input(FormField::Course, "text", fields.get(FormField::Course), error_for(FormField::Course)))
                }
                (objective_select(fields.get(FormField::Objective), error_for(FormField::Objective)))
                (text_input(FormField::Batch, "text", fields.get(FormField::Batch), error_for(FormField::Batch)))
                (approach_radios(fields.get(FormField::LearningApproach), error_for(FormField::LearningApproach)))
                button type="submit" { "Register now" }
            }
        }
    }
}

fn text_input(field: FormField, kind: &str, value: &str, error: Option<&str>) -> Markup {
    let name = field.wire_name();
    html! {
        label.form-field for=(name) {
            span { (field.label()) }
            input id=(name) type=(kind) name=(name) value=(value) required[field.is_required()];
            @if let Some(message) = error {
                span.field-error { (message) }
            }
        }
    }
}

fn objective_select(current: &str, error: Option<&str>) -> Markup {
    let name = FormField::Objective.wire_name();
    html! {
        label.form-field for=(name) {
            span { (FormField::Objective.label()) }
            select id=(name) name=(name) required {
                option value=(OBJECTIVE_PLACEHOLDER) disabled selected[Objective::parse(current).is_none()] {
                    "Select your objective"
                }
                @for objective in Objective::ALL {
                    option value=(objective.value()) selected[current == objective.value()] {
                        (objective.value())
                    }
                }
            }
            @if let Some(message) = error {
                span.field-error { (message) }
            }
        }
    }
}

fn approach_radios(current: &str, error: Option<&str>) -> Markup {
    let name = FormField::LearningApproach.wire_name();
    html! {
        fieldset.form-field {
            legend { (FormField::LearningApproach.label()) }
            @for approach in LearningApproach::ALL {
                label {
                    input type="radio" name=(name) value=(approach.value()) required checked[current == approach.value()];
                    " " (approach.value())
                }
            }
            @if let Some(message) = error {
                span.field-error { (message) }
            }
        }
    }
}

/// Page shown after a relay attempt.
pub fn submission_page(course_id: &str, status: &SubmissionStatus, reveal_threshold: f64) -> Markup {
    let body = html! {
        main.submission-result {
            @match status {
                SubmissionStatus::Succeeded(receipt) => {
                    h1 { "Thanks for registering!" }
                    p { "We'll be in touch shortly." }
                    p.receipt { "Reference: " (receipt.id.to_string()) }
                }
                SubmissionStatus::Failed(message) => {
                    h1 { "Registration not sent" }
                    p role="alert" { (message) }
                }
                SubmissionStatus::Pending => {
                    h1 { "Sending your registration..." }
                }
                SubmissionStatus::Idle => {
                    h1 { "Nothing submitted yet" }
                }
            }
            a href=(format!("/courses/{}", course_id)) { "Back to course" }
        }
    };
    layout("Registration", reveal_threshold, body)
}

/// Re-render after a rejected submission, keeping the entered values and
/// flagging the fields that need fixing. With the course at hand this is
/// the full course layout scrolled to the form; otherwise just the panel.
pub fn registration_retry_page(
    course_id: &str,
    course: Option<&CourseRecord>,
    form: &RegistrationForm,
    errors: &[FieldError],
    reveal_threshold: f64,
) -> Markup {
    match course {
        Some(course) => {
            let mut reveal = initial_reveal(reveal_threshold);
            reveal.observe(Section::Register, 1.0);
            layout(&course.title, reveal_threshold, course_layout(course, form, errors, &reveal))
        }
        None => {
            let info = PanelInfo {
                course_id,
                title: None,
                price: None,
                batch_start_date: None,
            };
            let body = html! {
                main.registration-retry {
                    h1 { "Please check your details" }
                    (registration_panel(info, form, errors))
                }
            };
            layout("Registration", reveal_threshold, body)
        }
    }
}
