//! Patient list and dashboard counter routes.

#[cfg(test)]
#[path = "patients_test.rs"]
mod patients_test;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::{DashboardStats, PatientRecord};
use serde::Deserialize;

use crate::services::patient::{self, PatientError};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

/// `GET /api/v1/patients?skip=&limit=`: one window of the patient list.
pub async fn list_patients(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Json<Vec<PatientRecord>> {
    let skip = query.skip.unwrap_or(0);
    let limit = query.limit.unwrap_or(patient::DEFAULT_LIMIT);
    Json(patient::list(&state, skip, limit).await)
}

/// `GET /api/v1/patients/:id`: a single patient.
pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<PatientRecord>, StatusCode> {
    let record = patient::get(&state, id).await.map_err(patient_error_to_status)?;
    Ok(Json(record))
}

/// `GET /api/v1/dashboard/stats`: counters for the current month.
pub async fn dashboard_stats(State(state): State<AppState>) -> Json<DashboardStats> {
    Json(patient::stats(&state, &patient::current_month()).await)
}

pub(crate) fn patient_error_to_status(err: PatientError) -> StatusCode {
    match err {
        PatientError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}
