use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use reqwest::multipart::Form;
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppError;

pub const ACCOUNT_ID_FIELD: &str = "account_id";
pub const FORM_ID_FIELD: &str = "form_id";

/// Where registrations are relayed and which account/form they belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTarget {
    pub endpoint: String,
    pub account_id: String,
    pub form_id: String,
}

/// A fully assembled submission: every field keyed by its wire name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadSubmission {
    pub endpoint: String,
    pub fields: Vec<(String, String)>,
}

impl LeadSubmission {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub status: u16,
    pub submitted_at: String,
}

#[async_trait]
pub trait LeadSubmitter: Send + Sync {
    async fn submit(&self, submission: &LeadSubmission) -> Result<SubmissionReceipt, AppError>;
}

/// Posts submissions as `multipart/form-data`, the way a browser form would.
pub struct LeadHttpSubmitter {
    client: Client,
}

impl LeadHttpSubmitter {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl LeadSubmitter for LeadHttpSubmitter {
    async fn submit(&self, submission: &LeadSubmission) -> Result<SubmissionReceipt, AppError> {
        let form = submission
            .fields
            .iter()
            .fold(Form::new(), |form, (name, value)| {
                form.text(name.clone(), value.clone())
            });

        let response = self.client
            .post(&submission.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream { status: status.as_u16(), body });
        }

        let receipt = SubmissionReceipt {
            id: Uuid::new_v4(),
            status: status.as_u16(),
            submitted_at: Utc::now().to_rfc3339(),
        };
        tracing::info!("registration relayed to {} ({})", submission.endpoint, receipt.id);
        Ok(receipt)
    }
}
