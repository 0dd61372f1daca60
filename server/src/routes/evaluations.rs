//! Test evaluation routes.

#[cfg(test)]
#[path = "evaluations_test.rs"]
mod evaluations_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::{EvaluationReceipt, StoredEvaluation, TestSubmission};

use crate::services::evaluation::{self, EvaluationError};
use crate::state::AppState;

/// `POST /api/v1/evaluations/tests`: store one submission.
pub async fn submit_tests(
    State(state): State<AppState>,
    Json(body): Json<TestSubmission>,
) -> Result<Json<EvaluationReceipt>, StatusCode> {
    let receipt = evaluation::record(&state, body)
        .await
        .map_err(evaluation_error_to_status)?;
    Ok(Json(receipt))
}

/// `GET /api/v1/evaluations`: everything received so far.
pub async fn list_evaluations(State(state): State<AppState>) -> Json<Vec<StoredEvaluation>> {
    Json(evaluation::list(&state).await)
}

pub(crate) fn evaluation_error_to_status(err: EvaluationError) -> StatusCode {
    match err {
        EvaluationError::Empty | EvaluationError::DuplicateId(_) | EvaluationError::BlankName(_) => {
            tracing::warn!(error = %err, "rejected test evaluation");
            StatusCode::UNPROCESSABLE_ENTITY
        }
        EvaluationError::Clock(_) => {
            tracing::error!(error = %err, "test evaluation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
