use banco_transfer_core::{submit_transition, SubmitAction, SubmitState};

#[test]
fn submit_round_trip_transitions() {
    let (s1, t1) = submit_transition(SubmitState::Idle, SubmitAction::Begin).expect("idle -> begin");
    assert_eq!(s1, SubmitState::Submitting);
    assert_eq!(t1.from, SubmitState::Idle);
    assert_eq!(t1.to, SubmitState::Submitting);

    let (s2, t2) = submit_transition(s1, SubmitAction::Finish).expect("submitting -> finish");
    assert_eq!(s2, SubmitState::Idle);
    assert_eq!(t2.from, SubmitState::Submitting);
    assert_eq!(t2.to, SubmitState::Idle);
}

#[test]
fn finish_without_begin_is_rejected() {
    let err = submit_transition(SubmitState::Idle, SubmitAction::Finish).expect_err("must fail");
    assert!(err.to_string().contains("illegal submit transition"));
}

#[test]
fn begin_while_submitting_is_rejected() {
    let err =
        submit_transition(SubmitState::Submitting, SubmitAction::Begin).expect_err("must fail");
    assert!(err.to_string().contains("illegal submit transition"));
}

#[test]
fn default_state_is_idle() {
    assert_eq!(SubmitState::default(), SubmitState::Idle);
}
