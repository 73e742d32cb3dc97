use thiserror::Error;

/// Submission state of a single form instance. The flag guards against
/// duplicate concurrent submissions; there are no other states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    Begin,
    Finish,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTransition {
    pub from: SubmitState,
    pub to: SubmitState,
    pub reason: &'static str,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("illegal submit transition: {from:?} on {action:?}")]
pub struct TransitionError {
    pub from: SubmitState,
    pub action: SubmitAction,
}

pub fn submit_transition(
    from: SubmitState,
    action: SubmitAction,
) -> Result<(SubmitState, StateTransition), TransitionError> {
    let (to, reason) = match (from, action) {
        (SubmitState::Idle, SubmitAction::Begin) => (SubmitState::Submitting, "submit dispatched"),
        (SubmitState::Submitting, SubmitAction::Finish) => (SubmitState::Idle, "submit settled"),
        _ => return Err(TransitionError { from, action }),
    };
    Ok((to, StateTransition { from, to, reason }))
}
