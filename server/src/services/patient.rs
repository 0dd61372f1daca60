//! Patient list and dashboard counters.

#[cfg(test)]
#[path = "patient_test.rs"]
mod patient_test;

use client::net::types::{DashboardStats, PatientRecord};
use client::state::patients::compute_stats;
use time::OffsetDateTime;
use time::macros::format_description;

use crate::state::AppState;

pub const DEFAULT_LIMIT: usize = 50;

#[derive(Debug, thiserror::Error)]
pub enum PatientError {
    #[error("patient not found: {0}")]
    NotFound(u32),
}

/// Records in `[skip, skip + limit)`, clipped to the list.
pub async fn list(state: &AppState, skip: usize, limit: usize) -> Vec<PatientRecord> {
    state.patients.read().await.iter().skip(skip).take(limit).cloned().collect()
}

/// # Errors
///
/// Returns [`PatientError::NotFound`] for an unknown id.
pub async fn get(state: &AppState, id: u32) -> Result<PatientRecord, PatientError> {
    state
        .patients
        .read()
        .await
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .ok_or(PatientError::NotFound(id))
}

/// Counters for `month` (`YYYY-MM`).
pub async fn stats(state: &AppState, month: &str) -> DashboardStats {
    compute_stats(&state.patients.read().await, month)
}

/// Current UTC month as `YYYY-MM`.
#[must_use]
pub fn current_month() -> String {
    OffsetDateTime::now_utc()
        .format(format_description!("[year]-[month]"))
        .unwrap_or_default()
}
