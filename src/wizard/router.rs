use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::media::MediaSession;
use super::record::ApplicationRecord;
use super::submit::{to_submission_payload, SubmissionError, SubmissionGateway};
use super::validate::first_incomplete_step;

/// Router builder exposing the HTTP intake surface for fully assembled
/// application records.
pub fn application_router<G>(gateway: Arc<G>) -> Router
where
    G: SubmissionGateway + 'static,
{
    Router::new()
        .route("/api/v1/coach/applications", post(submit_handler::<G>))
        .route("/healthz", get(healthz))
        .with_state(gateway)
}

pub(crate) async fn submit_handler<G>(
    State(gateway): State<Arc<G>>,
    axum::Json(record): axum::Json<ApplicationRecord>,
) -> Response
where
    G: SubmissionGateway + 'static,
{
    // HTTP submissions carry no preview session; the photo requirement is
    // satisfied through photoUrl alone.
    let media = MediaSession::default();
    if let Some(step) = first_incomplete_step(&record, &media) {
        let payload = json!({
            "error": "please complete all required fields",
            "step": step.index(),
            "stepLabel": step.label(),
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    }

    match gateway.submit(&to_submission_payload(&record)) {
        Ok(()) => {
            let payload = json!({ "status": "submitted" });
            (StatusCode::ACCEPTED, axum::Json(payload)).into_response()
        }
        Err(SubmissionError::Rejected(message)) => {
            let payload = json!({ "error": message });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(error @ SubmissionError::Unavailable(_)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
    }
}

async fn healthz() -> Response {
    (StatusCode::OK, axum::Json(json!({ "status": "ok" }))).into_response()
}
