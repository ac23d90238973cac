use std::env;
use std::net::SocketAddr;

use crate::error::AppError;
use crate::form::SubmissionTarget;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_LEAD_FORM_ENDPOINT: &str = "https://forms.leadrelay.io/v1/submit";
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub catalog_base_url: String,
    pub submission: SubmissionTarget,
    pub reveal_threshold: f64,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("BIND_ADDR is invalid: {}", e)))?;
        let catalog_base_url = env::var("CATALOG_BASE_URL")
            .map_err(|_| AppError::Config("CATALOG_BASE_URL is not set".to_string()))?;
        let endpoint = env::var("LEAD_FORM_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_LEAD_FORM_ENDPOINT.to_string());
        let account_id = env::var("LEAD_ACCOUNT_ID")
            .map_err(|_| AppError::Config("LEAD_ACCOUNT_ID is not set".to_string()))?;
        let form_id = env::var("LEAD_FORM_ID")
            .map_err(|_| AppError::Config("LEAD_FORM_ID is not set".to_string()))?;
        let reveal_threshold = match env::var("REVEAL_THRESHOLD") {
            Ok(raw) => parse_threshold(&raw)?,
            Err(_) => DEFAULT_REVEAL_THRESHOLD,
        };

        Ok(Self {
            bind_addr,
            catalog_base_url: catalog_base_url.trim_end_matches('/').to_string(),
            submission: SubmissionTarget {
                endpoint,
                account_id,
                form_id,
            },
            reveal_threshold,
        })
    }
}

/// Accepts a fraction in `(0, 1]`.
pub fn parse_threshold(raw: &str) -> Result<f64, AppError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| AppError::Config(format!("REVEAL_THRESHOLD is invalid: {}", e)))?;
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(AppError::Config(format!(
            "REVEAL_THRESHOLD must be in (0, 1], got {}",
            value
        )))
    }
}
