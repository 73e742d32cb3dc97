use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampMs(pub u64);

/// Opaque account identifier as entered by the user or carried in a route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AmountParseError {
    #[error("amount is not a number")]
    NotANumber,
    #[error("amount must be greater than zero")]
    NotPositive,
}

/// A transfer amount. Only constructible through [`Amount::parse`], which
/// enforces the invariant: finite and strictly greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    pub fn parse(raw: &str) -> Result<Self, AmountParseError> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| AmountParseError::NotANumber)?;
        if !value.is_finite() {
            return Err(AmountParseError::NotANumber);
        }
        if value <= 0.0 {
            return Err(AmountParseError::NotPositive);
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// The request handed to the transfer service. Derived from form state at
/// submit time, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub source_account: AccountId,
    pub destination_account: AccountId,
    pub amount: Amount,
    pub description: String,
}

/// What the transfer service reported. Transport faults are not an outcome;
/// they surface as `PortError` from the service port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransferOutcome {
    Completed,
    Declined { reason: String },
}

/// Local record of the last completed transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub destination_account: AccountId,
    pub amount: Amount,
    pub completed_at_ms: TimestampMs,
}

/// Navigation target. The client only ever routes to the dashboard view for
/// a given account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Dashboard(AccountId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard(account) => format!("/dashboard/{account}"),
        }
    }
}
