pub mod pending;
pub mod submit;

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::error::AppError;
use crate::models::{FormField, LearningApproach, Objective, TRACKING_FIELDS};

pub use pending::{PendingGuard, PendingSubmissions};
pub use submit::{
    LeadHttpSubmitter, LeadSubmission, LeadSubmitter, SubmissionReceipt, SubmissionTarget,
};

pub const SUBMIT_FAILED_MESSAGE: &str =
    "We couldn't submit your registration. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl FieldError {
    fn new(field: FormField, message: &str) -> Self {
        Self { field, message: message.to_string() }
    }
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(Vec<FieldError>),

    #[error("a submission is already in progress")]
    AlreadySubmitting,
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        let message = err.to_string();
        match err {
            FormError::Invalid(fields) => AppError::Validation(fields),
            FormError::AlreadySubmitting => AppError::Conflict(message),
        }
    }
}

/// Current value of every registration field.
///
/// Never mutated in place: [`FormFieldSet::with`] returns a new set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldSet {
    values: BTreeMap<FormField, String>,
}

impl Default for FormFieldSet {
    fn default() -> Self {
        Self::seeded(None)
    }
}

impl FormFieldSet {
    pub fn seeded(course_title: Option<&str>) -> Self {
        let values = FormField::ALL
            .into_iter()
            .map(|field| {
                let value = match field {
                    FormField::Course => course_title.unwrap_or_default().to_string(),
                    _ => String::new(),
                };
                (field, value)
            })
            .collect();
        Self { values }
    }

    pub fn get(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    #[must_use]
    pub fn with(&self, field: FormField, value: impl Into<String>) -> Self {
        let mut values = self.values.clone();
        values.insert(field, value.into());
        Self { values }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum SubmissionStatus {
    Idle,
    Pending,
    Succeeded(SubmissionReceipt),
    Failed(String),
}

/// The side-panel registration form.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    fields: FormFieldSet,
    course_locked: bool,
    status: SubmissionStatus,
}

impl RegistrationForm {
    /// A provided course title pre-fills the course field and locks it.
    pub fn new(course_title: Option<&str>) -> Self {
        let course_title = course_title.filter(|t| !t.trim().is_empty());
        Self {
            fields: FormFieldSet::seeded(course_title),
            course_locked: course_title.is_some(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn fields(&self) -> &FormFieldSet {
        &self.fields
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn course_is_locked(&self) -> bool {
        self.course_locked
    }

    pub fn input(&mut self, field: FormField, value: impl Into<String>) {
        if field == FormField::Course && self.course_locked {
            debug!("ignoring edit of pre-filled course field");
            return;
        }
        self.fields = self.fields.with(field, value);
    }

    /// Applies raw `(wire name, value)` pairs; unknown names are skipped.
    pub fn input_pairs<'a>(&mut self, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) {
        for (name, value) in pairs {
            match FormField::from_wire_name(name) {
                Some(field) => self.input(field, value),
                None => debug!("skipping unknown form field {:?}", name),
            }
        }
    }

    /// Native-constraint validation: required fields, email shape, and the
    /// fixed-choice selectors.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        for field in FormField::ALL {
            let value = self.fields.get(field).trim();
            if field.is_required() && value.is_empty() {
                let message = match field {
                    FormField::Objective => "Please select an item in the list.",
                    FormField::LearningApproach => "Please select one of these options.",
                    _ => "Please fill out this field.",
                };
                errors.push(FieldError::new(field, message));
                continue;
            }
            if value.is_empty() {
                continue;
            }
            match field {
                FormField::Email if !is_email_shaped(value) => {
                    errors.push(FieldError::new(field, "Please enter an email address."));
                }
                FormField::Objective if Objective::parse(value).is_none() => {
                    errors.push(FieldError::new(field, "Please select an item in the list."));
                }
                FormField::LearningApproach if LearningApproach::parse(value).is_none() => {
                    errors.push(FieldError::new(field, "Please select one of these options."));
                }
                _ => {}
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Validates and moves to `Pending`, returning what to send.
    pub fn prepare(&mut self, target: &SubmissionTarget) -> Result<LeadSubmission, FormError> {
        if self.status == SubmissionStatus::Pending {
            warn!("duplicate registration submit ignored");
            return Err(FormError::AlreadySubmitting);
        }
        self.validate().map_err(FormError::Invalid)?;

        let mut fields = vec![
            (submit::ACCOUNT_ID_FIELD.to_string(), target.account_id.clone()),
            (submit::FORM_ID_FIELD.to_string(), target.form_id.clone()),
        ];
        fields.extend(
            self.fields
                .iter()
                .map(|(field, value)| (field.wire_name().to_string(), value.trim().to_string())),
        );
        fields.extend(TRACKING_FIELDS.iter().map(|name| (name.to_string(), String::new())));

        self.status = SubmissionStatus::Pending;
        Ok(LeadSubmission {
            endpoint: target.endpoint.clone(),
            fields,
        })
    }

    /// Records the outcome of a prepared submission.
    pub fn complete(&mut self, outcome: Result<SubmissionReceipt, AppError>) {
        if self.status != SubmissionStatus::Pending {
            warn!("submission outcome arrived with no submission pending");
            return;
        }
        self.status = match outcome {
            Ok(receipt) => SubmissionStatus::Succeeded(receipt),
            Err(e) => {
                error!("registration submission failed: {}", e);
                SubmissionStatus::Failed(SUBMIT_FAILED_MESSAGE.to_string())
            }
        };
    }

    pub async fn submit(
        &mut self,
        submitter: &dyn LeadSubmitter,
        target: &SubmissionTarget,
    ) -> Result<&SubmissionStatus, FormError> {
        let submission = self.prepare(target)?;
        let outcome = submitter.submit(&submission).await;
        self.complete(outcome);
        Ok(&self.status)
    }
}

/// Mirrors the browser's `type="email"` check: `local@domain`, no spaces,
/// no empty domain labels.
pub fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.split('.').all(|label| !label.is_empty())
}
