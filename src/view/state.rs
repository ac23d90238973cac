use serde::Serialize;
use tracing::{debug, error};

use crate::error::AppError;
use crate::models::CourseRecord;

/// Shown for every load failure; the cause only goes to the log.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load course details. Please try again later.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum ViewState {
    Loading,
    Error(String),
    Loaded(CourseRecord),
}

impl ViewState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ViewState::Loading)
    }
}

/// Identifies one fetch issued by a [`DetailView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub course_id: String,
    pub generation: u64,
}

/// Lifecycle of the course detail view for one identifier at a time.
///
/// Every identifier change bumps the generation; outcomes carrying an older
/// ticket are dropped, so a slow response for a previous course never
/// overwrites the current one.
#[derive(Debug)]
pub struct DetailView {
    course_id: Option<String>,
    generation: u64,
    state: ViewState,
}

impl Default for DetailView {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailView {
    pub fn new() -> Self {
        Self {
            course_id: None,
            generation: 0,
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn course_id(&self) -> Option<&str> {
        self.course_id.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Switches to `id` and returns the ticket for the fetch to issue.
    /// Returns `None` when `id` is already the current identifier.
    pub fn navigate(&mut self, id: &str) -> Option<FetchTicket> {
        if self.course_id.as_deref() == Some(id) {
            return None;
        }

        self.generation += 1;
        self.course_id = Some(id.to_string());
        self.state = ViewState::Loading;

        Some(FetchTicket {
            course_id: id.to_string(),
            generation: self.generation,
        })
    }

    /// Applies a fetch outcome. Returns `false` if it was discarded.
    pub fn resolve(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<CourseRecord, AppError>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "discarding stale response for {} (generation {} < {})",
                ticket.course_id, ticket.generation, self.generation
            );
            return false;
        }
        if self.state.is_terminal() {
            debug!("view for {} already settled", ticket.course_id);
            return false;
        }

        self.state = match outcome {
            Ok(course) => ViewState::Loaded(course),
            Err(e) => {
                error!("failed to load course {}: {}", ticket.course_id, e);
                ViewState::Error(LOAD_ERROR_MESSAGE.to_string())
            }
        };
        true
    }
}
