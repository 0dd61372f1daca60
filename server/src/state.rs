//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Everything lives in memory: the patient list is seeded at startup and
//! evaluation submissions are appended as they arrive, up to a fixed cap.
//! Nothing survives a restart.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::VecDeque;
use std::sync::Arc;

use client::net::types::{PatientRecord, StoredEvaluation};
use client::state::patients::mock_patients;
use tokio::sync::RwLock;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    pub patients: Arc<RwLock<Vec<PatientRecord>>>,
    /// Received test evaluations in arrival order, oldest dropped first once
    /// the log is full.
    pub evaluations: Arc<RwLock<VecDeque<StoredEvaluation>>>,
}

impl AppState {
    #[must_use]
    pub fn new(patients: Vec<PatientRecord>) -> Self {
        Self { patients: Arc::new(RwLock::new(patients)), evaluations: Arc::default() }
    }

    /// State with the sample patient list the dashboard ships with.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(mock_patients())
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
