//! Differential-diagnosis step state.
//!
//! DESIGN
//! ======
//! Each candidate carries its own selection flag, scores, and comment, so
//! there are no id-keyed side tables that could outlive a candidate. The
//! expanded rating panel is a single optional id rather than a per-row flag,
//! which makes "only one panel open" structural instead of a convention.
//!
//! All transitions go through [`DiagnosisState::apply`]; [`reduce`] is the
//! value-in/value-out form used by tests and by callers that hold the state
//! immutably.

#[cfg(test)]
#[path = "diagnosis_test.rs"]
mod diagnosis_test;

use serde::{Deserialize, Serialize};

use super::rating::{Criterion, Score, ScoreCard};

/// Identifier of a candidate within its list.
pub type CandidateId = u32;

pub const CASE_DESCRIPTION: &str = "A 25-year-old woman on a ketogenic diet with no regular exercise presents with headache and nausea in the context of stress and anxiety. Her presentation raises concern for diet-related metabolic changes and tension-type headache as well as possible migraine triggers.";

const SEED_DIAGNOSES: [&str; 5] = [
    "Dehydration and electrolyte imbalance from ketogenic diet",
    "Keto flu (dietary adaptation symptoms)",
    "Tension-type headache related to stress and inactivity",
    "Migraine headache",
    "Hypoglycemia",
];

/// A diagnosis offered for clinician review.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisCandidate {
    /// Stable row id, unique within one case.
    pub id: CandidateId,
    /// Display name of the condition.
    pub name: String,
    /// Whether the clinician marked this diagnosis as plausible.
    pub selected: bool,
    /// Per-criterion scores; unscored criteria read as the default.
    pub scores: ScoreCard,
    /// Free-text observations, stored as typed.
    pub comment: String,
}

impl DiagnosisCandidate {
    #[must_use]
    pub fn new(id: CandidateId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), selected: false, scores: ScoreCard::default(), comment: String::new() }
    }
}

/// The "add diagnosis" modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddDialog {
    /// Whether the modal is shown.
    pub open: bool,
    /// Text typed so far; cleared when the modal closes.
    pub draft: String,
}

impl AddDialog {
    /// The confirm button is disabled for blank drafts.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosisState {
    /// Narrative of the case under review.
    pub case_description: String,
    /// Suggested and manually added diagnoses, in display order.
    pub candidates: Vec<DiagnosisCandidate>,
    /// Candidate whose rating panel is open, if any.
    pub expanded: Option<CandidateId>,
    /// State of the "add diagnosis" modal.
    pub add_dialog: AddDialog,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosisAction {
    OpenAddDialog,
    /// Close the modal and discard the draft.
    CloseAddDialog,
    EditDraft(String),
    /// Add the current draft; the modal closes only if something was added.
    SubmitDraft,
    Add(String),
    ToggleSelection(CandidateId),
    ToggleExpansion(CandidateId),
    SetScore { id: CandidateId, criterion: Criterion, score: Score },
    SetComment { id: CandidateId, text: String },
}

/// Everything the diagnosis step hands to the next step.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisHandoff {
    /// Narrative the candidates were rated against.
    pub case_description: String,
    /// Every candidate, selected or not, with its ratings and comment.
    pub candidates: Vec<DiagnosisCandidate>,
}

impl DiagnosisHandoff {
    pub fn selected(&self) -> impl Iterator<Item = &DiagnosisCandidate> {
        self.candidates.iter().filter(|c| c.selected)
    }
}

impl DiagnosisState {
    /// Mock case and AI suggestions used until a real suggestion source exists.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(CASE_DESCRIPTION, SEED_DIAGNOSES)
    }

    #[must_use]
    pub fn new<I, S>(case_description: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = Self { case_description: case_description.to_owned(), ..Self::default() };
        for name in names {
            state.add(name.into());
        }
        state
    }

    pub fn apply(&mut self, action: DiagnosisAction) {
        match action {
            DiagnosisAction::OpenAddDialog => self.add_dialog.open = true,
            DiagnosisAction::CloseAddDialog => self.add_dialog = AddDialog::default(),
            DiagnosisAction::EditDraft(text) => self.add_dialog.draft = text,
            DiagnosisAction::SubmitDraft => {
                let draft = self.add_dialog.draft.clone();
                if self.add(draft).is_some() {
                    self.add_dialog = AddDialog::default();
                }
            }
            DiagnosisAction::Add(name) => {
                self.add(name);
            }
            DiagnosisAction::ToggleSelection(id) => {
                if let Some(c) = self.candidate_mut(id) {
                    c.selected = !c.selected;
                }
            }
            DiagnosisAction::ToggleExpansion(id) => {
                if self.expanded == Some(id) {
                    self.expanded = None;
                } else if self.candidate(id).is_some() {
                    self.expanded = Some(id);
                }
            }
            DiagnosisAction::SetScore { id, criterion, score } => {
                if let Some(c) = self.candidate_mut(id) {
                    c.scores.set(criterion, score);
                }
            }
            DiagnosisAction::SetComment { id, text } => {
                if let Some(c) = self.candidate_mut(id) {
                    c.comment = text;
                }
            }
        }
    }

    /// Append a candidate; blank names are dropped. Returns the new id.
    fn add(&mut self, name: String) -> Option<CandidateId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = self.next_id();
        self.candidates.push(DiagnosisCandidate::new(id, name));
        Some(id)
    }

    /// One past the largest id in use, so ids stay unique even if
    /// candidates are ever removed.
    #[must_use]
    pub fn next_id(&self) -> CandidateId {
        self.candidates.iter().map(|c| c.id).max().map_or(1, |max| max + 1)
    }

    #[must_use]
    pub fn candidate(&self, id: CandidateId) -> Option<&DiagnosisCandidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    fn candidate_mut(&mut self, id: CandidateId) -> Option<&mut DiagnosisCandidate> {
        self.candidates.iter_mut().find(|c| c.id == id)
    }

    #[must_use]
    pub fn is_expanded(&self, id: CandidateId) -> bool {
        self.expanded == Some(id)
    }

    /// Snapshot for the test step. Proceeding never requires ratings.
    #[must_use]
    pub fn handoff(&self) -> DiagnosisHandoff {
        DiagnosisHandoff { case_description: self.case_description.clone(), candidates: self.candidates.clone() }
    }
}

/// Pure form of [`DiagnosisState::apply`].
#[must_use]
pub fn reduce(mut state: DiagnosisState, action: DiagnosisAction) -> DiagnosisState {
    state.apply(action);
    state
}
