//! Backend operations the view triggers.
//!
//! The view never talks to a backend directly: it is handed an
//! `Arc<dyn AccountService>` and calls it from a worker thread. The only
//! implementation shipped here is [`SimulatedAccountService`], which sleeps a
//! fixed delay and then succeeds (or fails with a configured error).

use std::fmt;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::config::DEFAULT_SERVICE_DELAY;
use crate::models::AccountId;

/// Outcome of a failed service call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("rejected: {0}")]
    Validation(String),
    #[error("not authorized")]
    Unauthorized,
}

/// A point transfer request built by the send-points form.
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub sender: AccountId,
    pub recipient: AccountId,
    pub amount: Decimal,
}

/// Account operations with real side effects.
///
/// Calls block; callers run them off the UI thread.
pub trait AccountService: Send + Sync {
    /// Deletes the account and its signing key.
    fn delete_account(&self, account: &AccountId) -> Result<(), ServiceError>;

    /// Sends points to another account.
    fn send_points(&self, transfer: &Transfer) -> Result<(), ServiceError>;
}

/// Error kind a [`SimulatedAccountService`] can be told to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Validation,
    Unauthorized,
}

impl FailureKind {
    fn to_error(self) -> ServiceError {
        match self {
            FailureKind::Network => ServiceError::Network("bank did not respond".to_string()),
            FailureKind::Validation => {
                ServiceError::Validation("account has pending transactions".to_string())
            }
            FailureKind::Unauthorized => ServiceError::Unauthorized,
        }
    }
}

impl FromStr for FailureKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "network" => Ok(FailureKind::Network),
            "validation" => Ok(FailureKind::Validation),
            "unauthorized" => Ok(FailureKind::Unauthorized),
            other => Err(format!(
                "unknown failure kind '{}' (expected network, validation or unauthorized)",
                other
            )),
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureKind::Network => "network",
            FailureKind::Validation => "validation",
            FailureKind::Unauthorized => "unauthorized",
        };
        f.write_str(s)
    }
}

/// Stand-in backend: waits `delay`, then succeeds unless a failure is configured.
#[derive(Debug, Clone)]
pub struct SimulatedAccountService {
    delay: Duration,
    delete_failure: Option<FailureKind>,
    transfer_failure: Option<FailureKind>,
}

impl Default for SimulatedAccountService {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_DELAY)
    }
}

impl SimulatedAccountService {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            delete_failure: None,
            transfer_failure: None,
        }
    }

    /// Makes every `delete_account` call fail with `kind`.
    pub fn fail_deletes(mut self, kind: FailureKind) -> Self {
        self.delete_failure = Some(kind);
        self
    }

    /// Makes every `send_points` call fail with `kind`.
    pub fn fail_transfers(mut self, kind: FailureKind) -> Self {
        self.transfer_failure = Some(kind);
        self
    }

    fn settle(&self, failure: Option<FailureKind>) -> Result<(), ServiceError> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        match failure {
            Some(kind) => Err(kind.to_error()),
            None => Ok(()),
        }
    }
}

impl AccountService for SimulatedAccountService {
    fn delete_account(&self, account: &AccountId) -> Result<(), ServiceError> {
        debug!(account = %account.short(12), delay = ?self.delay, "simulated delete");
        self.settle(self.delete_failure)
    }

    fn send_points(&self, transfer: &Transfer) -> Result<(), ServiceError> {
        debug!(
            recipient = %transfer.recipient.short(12),
            amount = %transfer.amount,
            "simulated transfer"
        );
        self.settle(self.transfer_failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn account() -> AccountId {
        AccountId::new("0cdd4ba04456ca169baca3d66eace869520c62fe84421329086e03d91a68acdb")
    }

    #[test]
    fn succeeds_by_default() {
        let service = SimulatedAccountService::new(Duration::ZERO);
        assert_eq!(service.delete_account(&account()), Ok(()));
    }

    #[test]
    fn configured_failure_is_returned() {
        let service =
            SimulatedAccountService::new(Duration::ZERO).fail_deletes(FailureKind::Unauthorized);
        assert_eq!(
            service.delete_account(&account()),
            Err(ServiceError::Unauthorized)
        );

        let transfer = Transfer {
            sender: account(),
            recipient: account(),
            amount: Decimal::ONE,
        };
        // Delete failure does not leak into transfers.
        assert_eq!(service.send_points(&transfer), Ok(()));
    }

    #[test]
    fn waits_for_the_configured_delay() {
        let service = SimulatedAccountService::new(Duration::from_millis(20));
        let start = Instant::now();
        service.delete_account(&account()).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn failure_kind_parses_case_insensitively() {
        assert_eq!("Network".parse::<FailureKind>(), Ok(FailureKind::Network));
        assert_eq!("validation".parse::<FailureKind>(), Ok(FailureKind::Validation));
        assert_eq!(
            "UNAUTHORIZED".parse::<FailureKind>(),
            Ok(FailureKind::Unauthorized)
        );
        assert!("timeout".parse::<FailureKind>().is_err());
    }

    #[test]
    fn error_messages_are_user_readable() {
        assert_eq!(
            FailureKind::Network.to_error().to_string(),
            "network error: bank did not respond"
        );
        assert_eq!(ServiceError::Unauthorized.to_string(), "not authorized");
    }
}
