//! Test evaluation intake.
//!
//! DESIGN
//! ======
//! Submissions are validated, stamped with a UUID and a server receive time,
//! and appended to the in-memory log. The receipt echoes the id so the
//! summary step can show a reference.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures are returned before anything is stored, so a rejected
//! submission leaves the log untouched.

#[cfg(test)]
#[path = "evaluation_test.rs"]
mod evaluation_test;

use std::collections::{HashSet, VecDeque};

use client::net::types::{EvaluationReceipt, StoredEvaluation, TestSubmission};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;
use uuid::Uuid;

use crate::state::AppState;

pub const RECEIPT_STATUS_OK: &str = "ok";

/// Submissions kept in memory; older ones are evicted.
pub const MAX_STORED_EVALUATIONS: usize = 1000;

#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("submission contains no tests")]
    Empty,
    #[error("duplicate test id: {0}")]
    DuplicateId(u32),
    #[error("test {0} has a blank name")]
    BlankName(u32),
    #[error("timestamp formatting failed: {0}")]
    Clock(#[from] time::error::Format),
}

/// Check a submission before it is stored.
///
/// # Errors
///
/// Returns the first problem found, in test order.
pub fn validate(submission: &TestSubmission) -> Result<(), EvaluationError> {
    if submission.tests.is_empty() {
        return Err(EvaluationError::Empty);
    }
    let mut seen = HashSet::with_capacity(submission.tests.len());
    for test in &submission.tests {
        if !seen.insert(test.id) {
            return Err(EvaluationError::DuplicateId(test.id));
        }
        if test.name.trim().is_empty() {
            return Err(EvaluationError::BlankName(test.id));
        }
    }
    Ok(())
}

/// Validate and store a submission.
///
/// # Errors
///
/// Returns a validation error, or [`EvaluationError::Clock`] if the receive
/// time cannot be formatted.
pub async fn record(state: &AppState, submission: TestSubmission) -> Result<EvaluationReceipt, EvaluationError> {
    validate(&submission)?;

    let id = Uuid::new_v4().to_string();
    let received_at = OffsetDateTime::now_utc().format(&Rfc3339)?;
    let test_count = submission.tests.len();
    let selected = submission.tests.iter().filter(|t| t.selected).count();

    let entry = StoredEvaluation { id: id.clone(), received_at: received_at.clone(), submission };
    push_capped(&mut *state.evaluations.write().await, entry, MAX_STORED_EVALUATIONS);

    info!(evaluation_id = %id, test_count, selected, "test evaluation stored");
    Ok(EvaluationReceipt { status: RECEIPT_STATUS_OK.to_owned(), id, received_at, test_count })
}

/// Every stored submission, oldest first.
pub async fn list(state: &AppState) -> Vec<StoredEvaluation> {
    state.evaluations.read().await.iter().cloned().collect()
}

/// Append `entry`, evicting from the front so at most `cap` remain.
fn push_capped(log: &mut VecDeque<StoredEvaluation>, entry: StoredEvaluation, cap: usize) {
    log.push_back(entry);
    while log.len() > cap {
        log.pop_front();
    }
}
