//! Patient dashboard list state.
//!
//! DESIGN
//! ======
//! The list is read-only here: paging moves a window over `records`, and
//! "Add Patient" only reports where to navigate. Records are replaced
//! wholesale when the server list arrives.

#[cfg(test)]
#[path = "patients_test.rs"]
mod patients_test;

use crate::net::types::{DashboardStats, PatientRecord, PatientStatus};

use super::wizard::WizardStep;

pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Mock records used until the server answers (or when it cannot).
#[must_use]
pub fn mock_patients() -> Vec<PatientRecord> {
    let record = |id, name: &str, age, gender: &str, status, last_visit: &str| PatientRecord {
        id,
        name: name.to_owned(),
        age,
        gender: gender.to_owned(),
        status,
        last_visit: last_visit.to_owned(),
    };
    vec![
        record(1, "John Doe", 45, "Male", PatientStatus::Active, "2025-10-28"),
        record(2, "Maria Gonzalez", 34, "Female", PatientStatus::UnderReview, "2025-10-15"),
        record(3, "Arjun Patel", 29, "Male", PatientStatus::Completed, "2025-09-30"),
        record(4, "Sophia Lee", 52, "Female", PatientStatus::Active, "2025-10-29"),
    ]
}

/// Counters shown above the patient table. `month` is `YYYY-MM`.
#[must_use]
pub fn compute_stats(records: &[PatientRecord], month: &str) -> DashboardStats {
    DashboardStats {
        total_patients: records.len(),
        active_records: records.iter().filter(|r| r.status == PatientStatus::Active).count(),
        this_month: records.iter().filter(|r| visit_month(&r.last_visit) == Some(month)).count(),
    }
}

fn visit_month(date: &str) -> Option<&str> {
    date.get(..7).filter(|m| m.as_bytes().get(4) == Some(&b'-'))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardState {
    /// Full patient list, in server order.
    pub records: Vec<PatientRecord>,
    /// Rows per page, never zero.
    pub page_size: usize,
    /// Zero-based page being shown. May point past the last page.
    pub page_index: usize,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(mock_patients(), DEFAULT_PAGE_SIZE)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardAction {
    Paginate(usize),
    ReplaceRecords(Vec<PatientRecord>),
}

impl DashboardState {
    /// A zero page size is treated as one row per page.
    #[must_use]
    pub fn new(records: Vec<PatientRecord>, page_size: usize) -> Self {
        Self { records, page_size: page_size.max(1), page_index: 0 }
    }

    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::Paginate(page) => self.page_index = page,
            DashboardAction::ReplaceRecords(records) => {
                self.records = records;
                self.page_index = 0;
            }
        }
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.records.len().div_ceil(self.page_size)
    }

    /// Rows in `[page * size, page * size + size)`, clipped to the list.
    /// Pages past the end are empty.
    #[must_use]
    pub fn page(&self, page: usize) -> &[PatientRecord] {
        let start = page.saturating_mul(self.page_size).min(self.records.len());
        let end = start.saturating_add(self.page_size).min(self.records.len());
        &self.records[start..end]
    }

    #[must_use]
    pub fn current_page(&self) -> &[PatientRecord] {
        self.page(self.page_index)
    }

    /// Absolute row number (1-based) of the first row on the current page.
    #[must_use]
    pub fn first_row_number(&self) -> usize {
        self.page_index.saturating_mul(self.page_size).saturating_add(1)
    }

    #[must_use]
    pub fn has_patients(&self) -> bool {
        !self.records.is_empty()
    }

    /// Navigation target of "Add Patient". The list is not touched.
    #[must_use]
    pub fn add_patient_route(&self) -> &'static str {
        WizardStep::Diagnosis.path()
    }
}

/// Notice for the per-row "View" action.
#[must_use]
pub fn view_patient_notice(record: &PatientRecord) -> String {
    format!("Viewing {}", record.name)
}

/// Pure form of [`DashboardState::apply`].
#[must_use]
pub fn reduce(mut state: DashboardState, action: DashboardAction) -> DashboardState {
    state.apply(action);
    state
}
