use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AccountId;

/// One ledger entry touching the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub sender: AccountId,
    pub recipient: AccountId,
    pub amount: Decimal,
    pub created: DateTime<Utc>,
}

/// Direction of a transaction relative to the viewed account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Incoming,
    Outgoing,
    /// Sender and recipient are both the viewed account.
    SelfTransfer,
    /// Neither side is the viewed account.
    Unrelated,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Incoming => "IN",
            Direction::Outgoing => "OUT",
            Direction::SelfTransfer => "SELF",
            Direction::Unrelated => "-",
        }
    }
}

impl Transaction {
    pub fn direction(&self, account: &AccountId) -> Direction {
        match (&self.sender == account, &self.recipient == account) {
            (true, true) => Direction::SelfTransfer,
            (true, false) => Direction::Outgoing,
            (false, true) => Direction::Incoming,
            (false, false) => Direction::Unrelated,
        }
    }
}
