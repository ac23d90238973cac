use std::sync::Arc;

use crate::catalog::CatalogClient;
use crate::form::{LeadSubmitter, PendingSubmissions, SubmissionTarget};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogClient>,
    pub submitter: Arc<dyn LeadSubmitter>,
    pub submission: SubmissionTarget,
    pub reveal_threshold: f64,
    pub pending: PendingSubmissions,
}
