//! Suggested exam/test step state and the submission contract.
//!
//! DESIGN
//! ======
//! Grades and the safety call live on each `TestCandidate`, mirroring the
//! wire entry one-to-one. Inline rename keeps a single optional draft so at
//! most one row is ever in edit mode.
//!
//! The submission is split in two halves around the network call:
//! `begin_submission` hands out the payload and takes the in-flight lock,
//! `finish_submission` releases it and tells the page what to do next. The
//! page owns the await in between.

#[cfg(test)]
#[path = "suggested_tests_test.rs"]
mod suggested_tests_test;

use super::diagnosis::{CandidateId, DiagnosisHandoff};
use super::rating::{Criterion, Grade, GradeCard, Safety};
use super::wizard::WizardStep;
use crate::net::api::SubmitError;
use crate::net::types::{TestEntry, TestSubmission};

pub const TEST_NARRATIVE: &str = "Patients on a ketogenic diet are at risk for dehydration and electrolyte disturbances due to osmotic diuresis and reduced fluid intake. Initial assessment should include evaluation for volume depletion (orthostatic hypotension, tachycardia), serum electrolytes, renal function, and acid-base status. Management involves isotonic fluid resuscitation, correction of sodium, potassium, magnesium, and phosphate deficits, close monitoring of vital signs and ECG, and dietary counseling to ensure adequate hydration and electrolyte intake.";

/// Placeholder name for a freshly added row; the row opens in edit mode.
pub const NEW_TEST_NAME: &str = "New Test";

/// Generic notice shown when the submission fails for any reason.
pub const SUBMIT_FAILED_NOTICE: &str = "Failed to submit test suggestions. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCandidate {
    /// Stable row id; also the id sent to the server.
    pub id: CandidateId,
    /// Display name; editable inline.
    pub name: String,
    /// Whether the clinician would order this test.
    pub selected: bool,
    /// Qualitative grade per criterion.
    pub ratings: GradeCard,
    /// Safety call; empty until one is picked.
    pub safety: Safety,
}

impl TestCandidate {
    #[must_use]
    pub fn new(id: CandidateId, name: impl Into<String>, selected: bool) -> Self {
        Self { id, name: name.into(), selected, ratings: GradeCard::default(), safety: Safety::Unset }
    }

    #[must_use]
    pub fn to_entry(&self) -> TestEntry {
        TestEntry {
            id: self.id,
            name: self.name.clone(),
            selected: self.selected,
            ratings: self.ratings,
            safety: self.safety,
        }
    }
}

/// In-progress rename of one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameDraft {
    /// Row being renamed.
    pub id: CandidateId,
    /// Current contents of the rename input.
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    /// Last attempt failed; the user may retry manually.
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestsState {
    /// Rationale shown above the test list.
    pub narrative: String,
    /// Suggested and manually added tests, in display order.
    pub candidates: Vec<TestCandidate>,
    /// Row whose rating form is shown, if any.
    pub expanded: Option<CandidateId>,
    /// Rename in progress; at most one row is edited at a time.
    pub editing: Option<NameDraft>,
    /// Lifecycle of the last submit press.
    pub submission: SubmissionStatus,
    /// Output of the diagnosis step, when it was handed over.
    pub prior: Option<DiagnosisHandoff>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TestsAction {
    AddTest,
    ToggleSelection(CandidateId),
    ToggleRatings(CandidateId),
    SetGrade { id: CandidateId, criterion: Criterion, grade: Grade },
    SetSafety { id: CandidateId, safety: Safety },
    StartEditing(CandidateId),
    EditDraft(String),
    SaveName,
    CancelEditing,
}

/// What the page must do once the submission settles.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitEffect {
    /// Forward `receipt` to the completion hook and go to `route`.
    Navigate { route: &'static str, receipt: serde_json::Value },
    /// Show a blocking notice and stay on the page.
    Alert(&'static str),
}

impl TestsState {
    /// Mock suggestions, optionally carrying the diagnosis step's output.
    #[must_use]
    pub fn seeded(prior: Option<DiagnosisHandoff>) -> Self {
        Self {
            narrative: TEST_NARRATIVE.to_owned(),
            candidates: vec![TestCandidate::new(1, "Orthostatic vital signs", true)],
            prior,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, action: TestsAction) {
        match action {
            TestsAction::AddTest => {
                let id = self.next_id();
                self.candidates.push(TestCandidate::new(id, NEW_TEST_NAME, false));
                self.editing = Some(NameDraft { id, text: NEW_TEST_NAME.to_owned() });
            }
            TestsAction::ToggleSelection(id) => {
                if let Some(t) = self.candidate_mut(id) {
                    t.selected = !t.selected;
                }
            }
            TestsAction::ToggleRatings(id) => {
                if self.expanded == Some(id) {
                    self.expanded = None;
                } else if self.candidate(id).is_some() {
                    self.expanded = Some(id);
                }
            }
            TestsAction::SetGrade { id, criterion, grade } => {
                if let Some(t) = self.candidate_mut(id) {
                    t.ratings.set(criterion, grade);
                }
            }
            TestsAction::SetSafety { id, safety } => {
                if let Some(t) = self.candidate_mut(id) {
                    t.safety = safety;
                }
            }
            TestsAction::StartEditing(id) => {
                if let Some(t) = self.candidate(id) {
                    self.editing = Some(NameDraft { id, text: t.name.clone() });
                }
            }
            TestsAction::EditDraft(text) => {
                if let Some(draft) = self.editing.as_mut() {
                    draft.text = text;
                }
            }
            TestsAction::SaveName => {
                if let Some(NameDraft { id, text }) = self.editing.take() {
                    let name = text.trim();
                    if !name.is_empty() {
                        if let Some(t) = self.candidate_mut(id) {
                            t.name = name.to_owned();
                        }
                    }
                }
            }
            TestsAction::CancelEditing => self.editing = None,
        }
    }

    #[must_use]
    pub fn next_id(&self) -> CandidateId {
        self.candidates.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
    }

    #[must_use]
    pub fn candidate(&self, id: CandidateId) -> Option<&TestCandidate> {
        self.candidates.iter().find(|t| t.id == id)
    }

    fn candidate_mut(&mut self, id: CandidateId) -> Option<&mut TestCandidate> {
        self.candidates.iter_mut().find(|t| t.id == id)
    }

    #[must_use]
    pub fn is_editing(&self, id: CandidateId) -> bool {
        self.editing.as_ref().is_some_and(|d| d.id == id)
    }

    /// Submit and back buttons are disabled while a request is in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.submission != SubmissionStatus::Pending
    }

    /// Serialize every row, selected or not.
    #[must_use]
    pub fn payload(&self, timestamp: impl Into<String>) -> TestSubmission {
        TestSubmission {
            tests: self.candidates.iter().map(TestCandidate::to_entry).collect(),
            timestamp: timestamp.into(),
        }
    }

    /// Take the in-flight lock and build the payload. Returns `None` while a
    /// previous submission is still pending.
    pub fn begin_submission(&mut self, timestamp: impl Into<String>) -> Option<TestSubmission> {
        if !self.can_submit() {
            return None;
        }
        self.submission = SubmissionStatus::Pending;
        Some(self.payload(timestamp))
    }

    /// Release the lock and decide the follow-up. Edits are kept either way.
    pub fn finish_submission(&mut self, outcome: Result<serde_json::Value, SubmitError>) -> SubmitEffect {
        match outcome {
            Ok(receipt) => {
                self.submission = SubmissionStatus::Idle;
                SubmitEffect::Navigate { route: WizardStep::Summary.path(), receipt }
            }
            Err(e) => {
                self.submission = SubmissionStatus::Failed(e.to_string());
                SubmitEffect::Alert(SUBMIT_FAILED_NOTICE)
            }
        }
    }
}

/// Pure form of [`TestsState::apply`].
#[must_use]
pub fn reduce(mut state: TestsState, action: TestsAction) -> TestsState {
    state.apply(action);
    state
}
