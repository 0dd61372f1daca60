use super::*;

#[test]
fn steps_chain_forward_and_back() {
    assert_eq!(WizardStep::Diagnosis.next(), Some(WizardStep::Tests));
    assert_eq!(WizardStep::Tests.next(), Some(WizardStep::Summary));
    assert_eq!(WizardStep::Summary.next(), None);
    assert_eq!(WizardStep::Summary.previous(), Some(WizardStep::Tests));
    assert_eq!(WizardStep::Diagnosis.previous(), None);
}

#[test]
fn step_paths_are_distinct() {
    let paths: Vec<_> = WizardStep::ALL.iter().map(|s| s.path()).collect();
    assert_eq!(paths, vec!["/diagnosis", "/tests", "/summary"]);
}

#[test]
fn ordinal_is_one_based() {
    assert_eq!(WizardStep::Diagnosis.ordinal(), 1);
    assert_eq!(WizardStep::Summary.ordinal(), 3);
}

#[test]
fn reset_clears_handoff() {
    let mut handoff = WizardHandoff {
        diagnoses: Some(DiagnosisHandoff::default()),
        receipt: Some(serde_json::json!({ "status": "ok" })),
    };
    handoff.reset();
    assert_eq!(handoff, WizardHandoff::default());
}
