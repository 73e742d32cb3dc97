pub mod controller;
pub mod domain;
pub mod form;
pub mod ports;
pub mod state_machine;

pub use controller::{TransferController, DEFAULT_REDIRECT_DELAY_MS};
pub use domain::{
    AccountId, Amount, AmountParseError, Route, TimestampMs, TransferOutcome, TransferReceipt,
    TransferRequest,
};
pub use form::{
    TransferFormState, CURRENCY_SYMBOL, MSG_INVALID_AMOUNT, MSG_MISSING_FIELDS, MSG_TRANSFER_RETRY,
};
pub use ports::{
    ClockPort, NavigatorPort, PortError, RedirectHandle, RedirectSchedulerPort,
    TransferServicePort,
};
pub use state_machine::{
    submit_transition, StateTransition, SubmitAction, SubmitState, TransitionError,
};
