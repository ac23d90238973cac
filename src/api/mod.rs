use std::collections::HashMap;

use axum::extract::{Form, Path};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router, extract::State, http::StatusCode, http::header, routing::get};
use tracing::{info, warn};

use crate::error::AppError;
use crate::form::{FormError, PendingSubmissions, RegistrationForm, SubmissionStatus};
use crate::models::FormField;
use crate::services::DetailController;
use crate::state::AppState;
use crate::view::{ViewState, assets, render};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/courses/{id}", get(course_page))
        .route("/courses/{id}/register", post(register))
        .route("/api/courses/{id}", get(course_view))
        .route("/static/course.css", get(course_css))
        .route("/static/reveal.js", get(reveal_js))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn load_view(state: &AppState, id: &str) -> ViewState {
    DetailController::new(state.catalog.clone()).open(id).await
}

async fn course_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Html<String> {
    let view = load_view(&state, &id).await;
    Html(render::detail_page(&view, state.reveal_threshold).into_string())
}

async fn course_view(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ViewState> {
    Json(load_view(&state, &id).await)
}

async fn register(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(params): Form<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let course = match state.catalog.fetch_course(&id).await {
        Ok(course) => Some(course),
        Err(e) => {
            warn!("registration for {} without course details: {}", id, e);
            None
        }
    };

    let mut form = RegistrationForm::new(course.as_ref().map(|c| c.title.as_str()));
    form.input_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    if form.fields().get(FormField::Course).trim().is_empty() {
        form.input(FormField::Course, id.clone());
    }

    let Some(_claim) = state.pending.try_begin(PendingSubmissions::key_for(form.fields())) else {
        return Err(FormError::AlreadySubmitting.into());
    };

    let outcome = form
        .submit(state.submitter.as_ref(), &state.submission)
        .await
        .cloned();

    match outcome {
        Ok(status) => {
            let code = match status {
                SubmissionStatus::Failed(_) => StatusCode::BAD_GATEWAY,
                _ => StatusCode::OK,
            };
            info!("registration for {} finished: {:?}", id, code);
            let page = render::submission_page(&id, &status, state.reveal_threshold);
            Ok((code, Html(page.into_string())).into_response())
        }
        Err(FormError::Invalid(errors)) => {
            info!("registration for {} rejected: {} field(s)", id, errors.len());
            let page = render::registration_retry_page(
                &id,
                course.as_ref(),
                &form,
                &errors,
                state.reveal_threshold,
            );
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page.into_string())).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

async fn course_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], assets::COURSE_CSS)
}

async fn reveal_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript; charset=utf-8")], assets::REVEAL_JS)
}
