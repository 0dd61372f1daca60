use super::*;
use crate::state::test_helpers;

#[test]
fn validate_accepts_sample() {
    assert!(validate(&test_helpers::sample_submission()).is_ok());
}

#[test]
fn validate_rejects_empty_submission() {
    let mut submission = test_helpers::sample_submission();
    submission.tests.clear();
    assert!(matches!(validate(&submission), Err(EvaluationError::Empty)));
}

#[test]
fn validate_rejects_duplicate_ids() {
    let mut submission = test_helpers::sample_submission();
    submission.tests.push(test_helpers::test_entry(2, "Renal panel"));
    assert!(matches!(validate(&submission), Err(EvaluationError::DuplicateId(2))));
}

#[test]
fn validate_rejects_blank_names() {
    let mut submission = test_helpers::sample_submission();
    submission.tests[1].name = "   ".to_owned();
    let err = validate(&submission).unwrap_err();
    assert_eq!(err.to_string(), "test 2 has a blank name");
}

#[tokio::test]
async fn record_stores_and_returns_receipt() {
    let state = test_helpers::test_app_state();
    let receipt = record(&state, test_helpers::sample_submission()).await.unwrap();

    assert_eq!(receipt.status, RECEIPT_STATUS_OK);
    assert_eq!(receipt.test_count, 2);
    assert!(Uuid::parse_str(&receipt.id).is_ok());
    assert!(OffsetDateTime::parse(&receipt.received_at, &Rfc3339).is_ok());

    let stored = list(&state).await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, receipt.id);
    assert_eq!(stored[0].submission, test_helpers::sample_submission());
}

#[tokio::test]
async fn record_rejects_without_storing() {
    let state = test_helpers::test_app_state();
    let mut submission = test_helpers::sample_submission();
    submission.tests.clear();
    assert!(record(&state, submission).await.is_err());
    assert!(list(&state).await.is_empty());
}

#[tokio::test]
async fn list_keeps_arrival_order() {
    let state = test_helpers::test_app_state();
    let first = record(&state, test_helpers::sample_submission()).await.unwrap();
    let second = record(&state, test_helpers::sample_submission()).await.unwrap();
    let ids: Vec<_> = list(&state).await.into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[test]
fn push_capped_evicts_oldest() {
    let stored = |id: &str| StoredEvaluation {
        id: id.to_owned(),
        received_at: "2025-10-29T12:00:00Z".to_owned(),
        submission: test_helpers::sample_submission(),
    };
    let mut log = VecDeque::new();
    for id in ["a", "b", "c"] {
        push_capped(&mut log, stored(id), 2);
    }
    let ids: Vec<_> = log.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c"]);
}
