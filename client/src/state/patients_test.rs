use super::*;

fn ids(rows: &[PatientRecord]) -> Vec<u32> {
    rows.iter().map(|r| r.id).collect()
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn four_records_page_size_three_split_three_and_one() {
    let state = DashboardState::new(mock_patients(), 3);
    assert_eq!(state.page_count(), 2);
    assert_eq!(ids(state.page(0)), vec![1, 2, 3]);
    assert_eq!(ids(state.page(1)), vec![4]);
}

#[test]
fn paginate_moves_current_window() {
    let state = reduce(DashboardState::default(), DashboardAction::Paginate(1));
    assert_eq!(state.page_index, 1);
    assert_eq!(ids(state.current_page()), vec![4]);
    assert_eq!(state.first_row_number(), 4);
}

#[test]
fn page_past_end_is_empty() {
    let state = DashboardState::default();
    assert!(state.page(2).is_empty());
    assert!(state.page(usize::MAX).is_empty());
}

#[test]
fn empty_list_has_no_pages() {
    let state = DashboardState::new(Vec::new(), 3);
    assert_eq!(state.page_count(), 0);
    assert!(state.current_page().is_empty());
    assert!(!state.has_patients());
}

#[test]
fn zero_page_size_is_clamped_to_one() {
    let state = DashboardState::new(mock_patients(), 0);
    assert_eq!(state.page_size, 1);
    assert_eq!(state.page_count(), 4);
}

#[test]
fn replace_records_resets_to_first_page() {
    let mut state = reduce(DashboardState::default(), DashboardAction::Paginate(1));
    let mut records = mock_patients();
    records.truncate(2);
    state.apply(DashboardAction::ReplaceRecords(records));
    assert_eq!(state.page_index, 0);
    assert_eq!(ids(state.current_page()), vec![1, 2]);
}

// =============================================================
// Add / view
// =============================================================

#[test]
fn add_patient_is_navigation_only() {
    let state = DashboardState::default();
    let before = state.clone();
    assert_eq!(state.add_patient_route(), "/diagnosis");
    assert_eq!(state, before);
}

#[test]
fn view_notice_names_patient() {
    let records = mock_patients();
    assert_eq!(view_patient_notice(&records[2]), "Viewing Arjun Patel");
}

// =============================================================
// Stats
// =============================================================

#[test]
fn stats_count_active_and_month_visits() {
    let stats = compute_stats(&mock_patients(), "2025-10");
    assert_eq!(stats.total_patients, 4);
    assert_eq!(stats.active_records, 2);
    assert_eq!(stats.this_month, 3);
}

#[test]
fn stats_ignore_malformed_dates() {
    let mut records = mock_patients();
    records[0].last_visit = "28/10/2025".to_owned();
    let stats = compute_stats(&records, "2025-10");
    assert_eq!(stats.this_month, 2);
}

#[test]
fn far_page_index_saturates_row_number() {
    let state = reduce(DashboardState::default(), DashboardAction::Paginate(usize::MAX / 2));
    assert!(state.current_page().is_empty());
    assert_eq!(state.first_row_number(), usize::MAX);
}
