//! Wizard step order and the data handed between steps.
//!
//! DESIGN
//! ======
//! Steps never reach into each other's state. A step's output is parked in
//! `WizardHandoff` on navigation and the next step's constructor takes it as
//! an explicit argument; an empty slot means the step seeds mock data.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use super::diagnosis::DiagnosisHandoff;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    Diagnosis,
    Tests,
    Summary,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [Self::Diagnosis, Self::Tests, Self::Summary];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Diagnosis => "/diagnosis",
            Self::Tests => "/tests",
            Self::Summary => "/summary",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Diagnosis => "AI Differential Diagnosis",
            Self::Tests => "AI Exam / Test Suggestions",
            Self::Summary => "Summary",
        }
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Diagnosis => Some(Self::Tests),
            Self::Tests => Some(Self::Summary),
            Self::Summary => None,
        }
    }

    #[must_use]
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Diagnosis => None,
            Self::Tests => Some(Self::Diagnosis),
            Self::Summary => Some(Self::Tests),
        }
    }

    /// One-based position for the progress indicator.
    #[must_use]
    pub fn ordinal(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).map_or(0, |i| i + 1)
    }
}

/// Route the "Finish" button returns to.
pub const HOME_PATH: &str = "/";

/// Output of completed steps, held by the app root for the next step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WizardHandoff {
    /// Set when the clinician leaves the diagnosis step with "Next".
    pub diagnoses: Option<DiagnosisHandoff>,
    /// Response of the test submission, forwarded verbatim.
    pub receipt: Option<serde_json::Value>,
}

impl WizardHandoff {
    /// Start a fresh case; anything from a previous run is dropped.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
