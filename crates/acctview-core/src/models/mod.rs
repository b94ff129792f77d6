//! Account data shown by the view.
//!
//! Everything here is read-only from the view's point of view: the account
//! snapshot and the transaction list are handed in at startup and never
//! mutated by UI state transitions.

mod account;
mod sample;
mod transaction;

pub use account::*;
pub use sample::sample_data;
pub use transaction::*;

use serde::{Deserialize, Serialize};

/// Account snapshot plus its transaction history, as loaded from a data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountData {
    pub account: AccountSnapshot,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}
