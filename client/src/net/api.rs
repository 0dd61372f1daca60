//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Dashboard fetches return `Option` so a missing server degrades to the
//! seeded records. Submission returns a typed [`SubmitError`] because the
//! test step has to distinguish "show the failure notice" from success.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{DashboardStats, PatientRecord, TestSubmission};

pub const TEST_EVALUATIONS_ENDPOINT: &str = "/api/v1/evaluations/tests";
pub const PATIENTS_ENDPOINT: &str = "/api/v1/patients";
pub const DASHBOARD_STATS_ENDPOINT: &str = "/api/v1/dashboard/stats";

/// Failure modes of the test evaluation submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The response body was not JSON.
    #[error("response parse failed: {0}")]
    Decode(String),
    /// Submission attempted outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Map an HTTP status to the submission outcome it implies.
///
/// # Errors
///
/// Returns [`SubmitError::Status`] for anything outside `200..=299`.
pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(SubmitError::Status(status)) }
}

/// Destination for a completed test evaluation.
///
/// The page talks to this seam rather than to `gloo-net` directly so the
/// submit/navigate/alert flow can be driven by a fake in tests.
pub trait EvaluationSink {
    /// Send the payload and return the server's JSON response unchanged.
    fn submit(&self, payload: &TestSubmission) -> impl Future<Output = Result<serde_json::Value, SubmitError>>;
}

/// Posts evaluations to [`TEST_EVALUATIONS_ENDPOINT`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpEvaluationSink;

impl EvaluationSink for HttpEvaluationSink {
    async fn submit(&self, payload: &TestSubmission) -> Result<serde_json::Value, SubmitError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(TEST_EVALUATIONS_ENDPOINT)
                .json(payload)
                .map_err(|e| SubmitError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmitError::Transport(e.to_string()))?;
            check_status(resp.status())?;
            let body: serde_json::Value = resp.json().await.map_err(|e| SubmitError::Decode(e.to_string()))?;
            log::info!("evaluation submitted: {body}");
            Ok(body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(SubmitError::Unavailable)
        }
    }
}

/// Current time as an ISO-8601 string from the browser clock.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn now_iso8601() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn patients_page_endpoint(skip: usize, limit: usize) -> String {
    format!("{PATIENTS_ENDPOINT}?skip={skip}&limit={limit}")
}

/// Fetch patient records from the server.
/// Returns `None` on failure or on the server.
pub async fn fetch_patients(skip: usize, limit: usize) -> Option<Vec<PatientRecord>> {
    #[cfg(feature = "hydrate")]
    {
        let url = patients_page_endpoint(skip, limit);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            log::warn!("patient list request failed: {}", resp.status());
            return None;
        }
        resp.json::<Vec<PatientRecord>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (skip, limit);
        None
    }
}

/// Fetch dashboard counters from [`DASHBOARD_STATS_ENDPOINT`].
pub async fn fetch_dashboard_stats() -> Option<DashboardStats> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(DASHBOARD_STATS_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<DashboardStats>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
