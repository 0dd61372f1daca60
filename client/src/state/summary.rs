//! Read-only summary projection.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use super::diagnosis::{CandidateId, DiagnosisHandoff};
use super::rating::{Criterion, Score, ScoreCard};

pub const SUMMARY_NARRATIVE: &str = "For suspected urinary tract infection (UTI), initial evaluation focuses on confirming infection and identifying the causative organism to guide therapy. A urinalysis with dipstick and microscopic examination helps detect pyuria and bacteriuria; a urine culture and sensitivity test identifies the pathogen and its antibiotic susceptibilities. In uncomplicated cases, these are usually sufficient. Additional blood tests and imaging studies are reserved for complicated, recurrent, or atypical presentations, or when obstruction or anatomic abnormalities are suspected.";

/// One row of the evaluation table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryRow {
    pub id: CandidateId,
    pub name: String,
    /// Selected rows are highlighted.
    pub selected: bool,
    /// Only criteria with a value to show; the rest render blank.
    pub scores: ScoreCard,
    /// Trimmed comment; absent when blank.
    pub comment: Option<String>,
}

impl SummaryRow {
    #[must_use]
    pub fn score(&self, criterion: Criterion) -> Option<Score> {
        self.scores.recorded(criterion)
    }
}

/// Row background in the evaluation table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowTone {
    Highlighted,
    Striped,
    Plain,
}

impl RowTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Highlighted => "summary-row summary-row--selected",
            Self::Striped => "summary-row summary-row--striped",
            Self::Plain => "summary-row",
        }
    }
}

/// Selected rows are highlighted; other rows alternate, odd indexes striped.
#[must_use]
pub fn row_tone(index: usize, selected: bool) -> RowTone {
    if selected {
        RowTone::Highlighted
    } else if index % 2 == 1 {
        RowTone::Striped
    } else {
        RowTone::Plain
    }
}

/// Render an optional cell value; absent values are blank.
#[must_use]
pub fn cell<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryState {
    /// Case narrative shown above the table.
    pub narrative: String,
    /// One row per diagnosis candidate, in step order.
    pub rows: Vec<SummaryRow>,
    /// Response from the test submission, if the wizard forwarded one.
    pub receipt: Option<serde_json::Value>,
}

impl SummaryState {
    /// Fixed recap shown when no earlier step handed anything over.
    #[must_use]
    pub fn seeded() -> Self {
        let full = || {
            let mut card = ScoreCard::default();
            for c in Criterion::ALL {
                card.set(c, Score::default());
            }
            card
        };
        let row = |id, name: &str, selected, scores, comment: Option<&str>| SummaryRow {
            id,
            name: name.to_owned(),
            selected,
            scores,
            comment: comment.map(str::to_owned),
        };
        Self {
            narrative: SUMMARY_NARRATIVE.to_owned(),
            rows: vec![
                row(1, "Dehydration and electrolyte imbalance secondary to ketogenic diet", false, ScoreCard::default(), None),
                row(2, "Urinary tract infection", true, full(), Some("none")),
                row(3, "Benign prostatic hyperplasia", false, ScoreCard::default(), None),
                row(
                    4,
                    "Neurogenic bladder from a neurological disorder (e.g., multiple sclerosis or spinal cord lesion)",
                    false,
                    ScoreCard::default(),
                    None,
                ),
                row(5, "Diabetic ketoacidosis or uncontrolled diabetes mellitus", false, ScoreCard::default(), None),
            ],
            receipt: None,
        }
    }

    /// Project the diagnosis step's output.
    ///
    /// Selected candidates show every criterion, using the read-time default
    /// the clinician saw in the picker; unselected candidates only show what
    /// was explicitly scored. Blank comments are absent.
    #[must_use]
    pub fn from_handoff(handoff: &DiagnosisHandoff, receipt: Option<serde_json::Value>) -> Self {
        let rows = handoff
            .candidates
            .iter()
            .map(|c| {
                let scores = if c.selected {
                    let mut card = ScoreCard::default();
                    for criterion in Criterion::ALL {
                        card.set(criterion, c.scores.get(criterion));
                    }
                    card
                } else {
                    c.scores.clone()
                };
                let comment = Some(c.comment.trim()).filter(|s| !s.is_empty()).map(str::to_owned);
                SummaryRow { id: c.id, name: c.name.clone(), selected: c.selected, scores, comment }
            })
            .collect();
        Self { narrative: handoff.case_description.clone(), rows, receipt }
    }
}
