use super::*;

#[tokio::test]
async fn seeded_state_holds_sample_patients_and_no_evaluations() {
    let state = AppState::seeded();
    assert_eq!(state.patients.read().await.len(), 4);
    assert!(state.evaluations.read().await.is_empty());
}

#[tokio::test]
async fn clones_share_storage() {
    let state = AppState::new(Vec::new());
    let other = state.clone();
    other.patients.write().await.extend(mock_patients());
    assert_eq!(state.patients.read().await.len(), 4);
}
