//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server depends on this crate, so both sides serialize the same types
//! and the JSON shapes cannot drift apart.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::rating::{GradeCard, Safety};

// =============================================================================
// TEST EVALUATION SUBMISSION
// =============================================================================

/// One graded test as sent to the evaluation endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestEntry {
    pub id: u32,
    pub name: String,
    pub selected: bool,
    pub ratings: GradeCard,
    pub safety: Safety,
}

/// Body of `POST /api/v1/evaluations/tests`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSubmission {
    pub tests: Vec<TestEntry>,
    /// ISO-8601 time the clinician pressed submit.
    pub timestamp: String,
}

/// Success response of the evaluation endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationReceipt {
    pub status: String,
    pub id: String,
    pub received_at: String,
    pub test_count: usize,
}

/// A submission as stored by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEvaluation {
    pub id: String,
    pub received_at: String,
    pub submission: TestSubmission,
}

// =============================================================================
// PATIENTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatientStatus {
    Active,
    #[serde(rename = "Under Review")]
    UnderReview,
    Completed,
}

impl PatientStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::UnderReview => "Under Review",
            Self::Completed => "Completed",
        }
    }

    /// Badge modifier used by the patient table.
    #[must_use]
    pub fn badge_tone(self) -> &'static str {
        match self {
            Self::Active => "success",
            Self::UnderReview => "warning",
            Self::Completed => "secondary",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub status: PatientStatus,
    /// `YYYY-MM-DD`.
    pub last_visit: String,
}

/// Response of `GET /api/v1/dashboard/stats`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_patients: usize,
    pub active_records: usize,
    pub this_month: usize,
}
