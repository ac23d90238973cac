#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use course_page::error::AppError;
use course_page::form::{LeadSubmission, LeadSubmitter, SubmissionReceipt, SubmissionTarget};
use course_page::models::{CourseModule, CourseRecord};

pub fn intro_course() -> CourseRecord {
    CourseRecord {
        id: "abc123".to_string(),
        title: "Intro to X".to_string(),
        summary: "Everything you need to get going with X.".to_string(),
        price: Some(0.0),
        batch_start_date: None,
        image: None,
        what_you_will_learn: vec!["A".to_string(), "B".to_string()],
        modules: vec![],
        requirements: vec![],
        description: vec![],
    }
}

pub fn full_course() -> CourseRecord {
    CourseRecord {
        id: "rust-101".to_string(),
        title: "Rust for Backend Engineers".to_string(),
        summary: "Build services you can trust.".to_string(),
        price: Some(49.99),
        batch_start_date: Some("2024-03-15".to_string()),
        image: Some("https://cdn.example.com/rust.png".to_string()),
        what_you_will_learn: vec![
            "Ownership".to_string(),
            "Async I/O".to_string(),
            "Error handling".to_string(),
        ],
        modules: vec![
            CourseModule {
                title: "Foundations".to_string(),
                points: vec!["Borrowing".to_string(), "Lifetimes".to_string()],
            },
            CourseModule {
                title: "Services".to_string(),
                points: vec!["axum".to_string()],
            },
        ],
        requirements: vec!["A laptop".to_string()],
        description: vec!["First paragraph.".to_string(), "Second paragraph.".to_string()],
    }
}

pub fn target() -> SubmissionTarget {
    SubmissionTarget {
        endpoint: "https://forms.test/submit".to_string(),
        account_id: "acct-42".to_string(),
        form_id: "course-leads".to_string(),
    }
}

/// Accepts every submission and keeps a copy.
#[derive(Default)]
pub struct RecordingSubmitter {
    pub submissions: Mutex<Vec<LeadSubmission>>,
    pub calls: AtomicUsize,
}

impl RecordingSubmitter {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last(&self) -> Option<LeadSubmission> {
        self.submissions.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LeadSubmitter for RecordingSubmitter {
    async fn submit(&self, submission: &LeadSubmission) -> Result<SubmissionReceipt, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.submissions.lock().unwrap().push(submission.clone());
        Ok(SubmissionReceipt {
            id: uuid::Uuid::new_v4(),
            status: 200,
            submitted_at: chrono::Utc::now().to_rfc3339(),
        })
    }
}

/// Rejects every submission as the external service would on an outage.
pub struct FailingSubmitter;

#[async_trait]
impl LeadSubmitter for FailingSubmitter {
    async fn submit(&self, _submission: &LeadSubmission) -> Result<SubmissionReceipt, AppError> {
        Err(AppError::Upstream {
            status: 503,
            body: "service unavailable".to_string(),
        })
    }
}
