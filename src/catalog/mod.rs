use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::AppError;
use crate::models::CourseRecord;

#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn fetch_course(&self, id: &str) -> Result<CourseRecord, AppError>;
}

/// Reads course records from the upstream course-data API.
pub struct CatalogHttpClient {
    client: Client,
    base_url: String,
}

impl CatalogHttpClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn course_url(&self, id: &str) -> String {
        format!("{}/courses/{}", self.base_url, id)
    }
}

#[async_trait]
impl CatalogClient for CatalogHttpClient {
    async fn fetch_course(&self, id: &str) -> Result<CourseRecord, AppError> {
        let url = self.course_url(id);
        tracing::debug!("GET {}", url);

        let response = self.client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream { status: status.as_u16(), body });
        }

        let body_text = response.text().await?;
        serde_json::from_str::<CourseRecord>(&body_text)
            .map_err(|e| {
                tracing::error!("Failed to parse course {}: {}", id, e);
                AppError::Upstream {
                    status: status.as_u16(),
                    body: format!("unparseable course record: {}", e),
                }
            })
    }
}

/// Serves records from memory; unknown ids are `NotFound`.
#[derive(Default)]
pub struct InMemoryCatalogClient {
    courses: HashMap<String, CourseRecord>,
}

impl InMemoryCatalogClient {
    pub fn new(courses: impl IntoIterator<Item = CourseRecord>) -> Self {
        Self {
            courses: courses.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }
}

#[async_trait]
impl CatalogClient for InMemoryCatalogClient {
    async fn fetch_course(&self, id: &str) -> Result<CourseRecord, AppError> {
        self.courses.get(id).cloned().ok_or(AppError::NotFound)
    }
}
