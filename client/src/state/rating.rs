//! Rating vocabulary shared by the diagnosis and test steps.
//!
//! DESIGN
//! ======
//! Diagnoses are scored numerically (1-10) and tests are graded on a
//! qualitative scale, but both use the same four criteria. Keeping the
//! vocabulary in one module lets the summary projection and the wire schema
//! agree on keys and labels without string juggling in the pages.

#[cfg(test)]
#[path = "rating_test.rs"]
mod rating_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One axis of clinical judgment applied to a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    Accuracy,
    Relevance,
    Usefulness,
    Coherence,
}

impl Criterion {
    /// All criteria in display order.
    pub const ALL: [Criterion; 4] = [Self::Accuracy, Self::Relevance, Self::Usefulness, Self::Coherence];

    /// Lowercase key used on the wire and in form element ids.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accuracy => "accuracy",
            Self::Relevance => "relevance",
            Self::Usefulness => "usefulness",
            Self::Coherence => "coherence",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Accuracy => "Accuracy",
            Self::Relevance => "Relevance",
            Self::Usefulness => "Usefulness",
            Self::Coherence => "Coherence",
        }
    }

    #[must_use]
    pub fn from_key(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

// =============================================================================
// NUMERIC SCORES (diagnoses)
// =============================================================================

/// A numeric score in `1..=10`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Build a score, rejecting values outside `1..=10`.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Parse a select-box value. Whitespace is trimmed; anything that is not an
    /// integer in range is rejected rather than clamped.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u8>().ok().and_then(Self::new)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Picker options, highest first.
    pub fn options() -> impl Iterator<Item = Score> {
        (Self::MIN..=Self::MAX).rev().map(Self)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Score {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("score out of range: {value}"))
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

/// Per-candidate numeric scores. Criteria that were never written read as
/// [`Score::default`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    scores: BTreeMap<Criterion, Score>,
}

impl ScoreCard {
    #[must_use]
    pub fn get(&self, criterion: Criterion) -> Score {
        self.scores.get(&criterion).copied().unwrap_or_default()
    }

    pub fn set(&mut self, criterion: Criterion, score: Score) {
        self.scores.insert(criterion, score);
    }

    /// Whether a value was explicitly written for `criterion`.
    #[must_use]
    pub fn is_rated(&self, criterion: Criterion) -> bool {
        self.scores.contains_key(&criterion)
    }

    /// The explicitly written score, without read-time defaulting.
    #[must_use]
    pub fn recorded(&self, criterion: Criterion) -> Option<Score> {
        self.scores.get(&criterion).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

// =============================================================================
// QUALITATIVE GRADES (tests)
// =============================================================================

/// Qualitative grade for a suggested test.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[default]
    #[serde(rename = "Not Rated")]
    NotRated,
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Grade {
    pub const ALL: [Grade; 5] = [Self::NotRated, Self::Poor, Self::Fair, Self::Good, Self::Excellent];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NotRated => "Not Rated",
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }

    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.label() == raw)
    }
}

/// All four criteria graded for one test. Every criterion is always present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeCard {
    pub accuracy: Grade,
    pub relevance: Grade,
    pub usefulness: Grade,
    pub coherence: Grade,
}

impl GradeCard {
    #[must_use]
    pub fn get(&self, criterion: Criterion) -> Grade {
        match criterion {
            Criterion::Accuracy => self.accuracy,
            Criterion::Relevance => self.relevance,
            Criterion::Usefulness => self.usefulness,
            Criterion::Coherence => self.coherence,
        }
    }

    pub fn set(&mut self, criterion: Criterion, grade: Grade) {
        let slot = match criterion {
            Criterion::Accuracy => &mut self.accuracy,
            Criterion::Relevance => &mut self.relevance,
            Criterion::Usefulness => &mut self.usefulness,
            Criterion::Coherence => &mut self.coherence,
        };
        *slot = grade;
    }
}

/// Safety judgment for a suggested test. `Unset` serializes as `""`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Safety {
    #[default]
    #[serde(rename = "")]
    Unset,
    Safe,
    #[serde(rename = "Needs Review")]
    NeedsReview,
    Unsafe,
}

impl Safety {
    /// Choices offered by the radio group; `Unset` is not selectable.
    pub const CHOICES: [Safety; 3] = [Self::Safe, Self::NeedsReview, Self::Unsafe];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Safe => "Safe",
            Self::NeedsReview => "Needs Review",
            Self::Unsafe => "Unsafe",
        }
    }

    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        match raw {
            "" => Some(Self::Unset),
            "Safe" => Some(Self::Safe),
            "Needs Review" => Some(Self::NeedsReview),
            "Unsafe" => Some(Self::Unsafe),
            _ => None,
        }
    }
}
