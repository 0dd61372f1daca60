use super::*;
use crate::state::rating::{Criterion, Grade};

// =============================================================
// TestSubmission
// =============================================================

#[test]
fn test_submission_matches_wire_shape() {
    let mut ratings = GradeCard::default();
    ratings.set(Criterion::Accuracy, Grade::Excellent);
    let submission = TestSubmission {
        tests: vec![TestEntry {
            id: 1,
            name: "Orthostatic vital signs".to_owned(),
            selected: true,
            ratings,
            safety: Safety::Unset,
        }],
        timestamp: "2025-11-02T10:00:00.000Z".to_owned(),
    };

    let json = serde_json::to_value(&submission).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "tests": [{
                "id": 1,
                "name": "Orthostatic vital signs",
                "selected": true,
                "ratings": {
                    "accuracy": "Excellent",
                    "relevance": "Not Rated",
                    "usefulness": "Not Rated",
                    "coherence": "Not Rated",
                },
                "safety": "",
            }],
            "timestamp": "2025-11-02T10:00:00.000Z",
        })
    );
}

#[test]
fn test_submission_rejects_unknown_grade() {
    let raw = r#"{"tests":[{"id":1,"name":"x","selected":false,
        "ratings":{"accuracy":"Superb","relevance":"Poor","usefulness":"Poor","coherence":"Poor"},
        "safety":"Safe"}],"timestamp":"t"}"#;
    assert!(serde_json::from_str::<TestSubmission>(raw).is_err());
}

#[test]
fn test_submission_rejects_unknown_safety() {
    let raw = r#"{"tests":[{"id":1,"name":"x","selected":false,
        "ratings":{"accuracy":"Poor","relevance":"Poor","usefulness":"Poor","coherence":"Poor"},
        "safety":"Maybe"}],"timestamp":"t"}"#;
    assert!(serde_json::from_str::<TestSubmission>(raw).is_err());
}

// =============================================================
// Patients
// =============================================================

#[test]
fn patient_status_uses_display_labels_on_wire() {
    let json = serde_json::to_value(PatientStatus::UnderReview).unwrap();
    assert_eq!(json, serde_json::json!("Under Review"));
    let parsed: PatientStatus = serde_json::from_value(serde_json::json!("Completed")).unwrap();
    assert_eq!(parsed, PatientStatus::Completed);
}

#[test]
fn patient_status_badge_tones_are_distinct() {
    assert_eq!(PatientStatus::Active.badge_tone(), "success");
    assert_eq!(PatientStatus::UnderReview.badge_tone(), "warning");
    assert_eq!(PatientStatus::Completed.badge_tone(), "secondary");
}

#[test]
fn patient_record_deserializes() {
    let raw = r#"{"id":2,"name":"Maria Gonzalez","age":34,"gender":"Female","status":"Under Review","last_visit":"2025-10-15"}"#;
    let record: PatientRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.status, PatientStatus::UnderReview);
    assert_eq!(record.last_visit, "2025-10-15");
}
