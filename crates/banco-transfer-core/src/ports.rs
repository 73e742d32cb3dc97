use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::{Route, TransferOutcome, TransferRequest};

#[derive(Debug, Error)]
pub enum PortError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("validation error: {0}")]
    Validation(String),
}

/// The external capability that attempts to move funds between two accounts.
/// `Ok(Declined)` is a business failure; `Err` is a transport fault.
pub trait TransferServicePort {
    fn transfer_money(&self, request: &TransferRequest) -> Result<TransferOutcome, PortError>;
}

/// Abstract routing capability.
pub trait NavigatorPort {
    fn navigate_to(&self, route: &Route) -> Result<(), PortError>;
}

/// Deferred navigation. The returned handle cancels the pending redirect;
/// dropping the handle without cancelling leaves the redirect armed.
pub trait RedirectSchedulerPort {
    fn schedule(&self, route: Route, delay_ms: u64) -> Result<RedirectHandle, PortError>;
}

pub trait ClockPort {
    fn now_ms(&self) -> Result<u64, PortError>;
}

/// Cancellation handle for a scheduled redirect.
pub struct RedirectHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl RedirectHandle {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn noop() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for RedirectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedirectHandle")
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

impl<T: TransferServicePort + ?Sized> TransferServicePort for Arc<T> {
    fn transfer_money(&self, request: &TransferRequest) -> Result<TransferOutcome, PortError> {
        (**self).transfer_money(request)
    }
}

impl<T: NavigatorPort + ?Sized> NavigatorPort for Arc<T> {
    fn navigate_to(&self, route: &Route) -> Result<(), PortError> {
        (**self).navigate_to(route)
    }
}

impl<T: RedirectSchedulerPort + ?Sized> RedirectSchedulerPort for Arc<T> {
    fn schedule(&self, route: Route, delay_ms: u64) -> Result<RedirectHandle, PortError> {
        (**self).schedule(route, delay_ms)
    }
}

impl<T: ClockPort + ?Sized> ClockPort for Arc<T> {
    fn now_ms(&self) -> Result<u64, PortError> {
        (**self).now_ms()
    }
}
