use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Length of an account number in hex characters.
pub const ACCOUNT_NUMBER_LEN: usize = 64;

/// Hex-encoded account number (public key).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parses a user-supplied account number, trimming whitespace and
    /// lowercasing. Returns `None` unless it is exactly 64 hex characters.
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim();
        if s.len() == ACCOUNT_NUMBER_LEN && s.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(Self(s.to_ascii_lowercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `n` characters, used for compact display in titles.
    pub fn short(&self, n: usize) -> &str {
        match self.0.char_indices().nth(n) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Secret signing key. Never printed, not even through `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SigningKey(String);

impl SigningKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// True for accounts that have no signing key on this device.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(***)")
    }
}

/// Bank the account is registered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankInfo {
    pub network_id: String,
    pub account_number: String,
    pub protocol: String,
}

/// Point-in-time account details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    /// User-facing account name shown in the page header.
    pub nickname: String,
    pub balance: Decimal,
    pub account_number: AccountId,
    pub signing_key: SigningKey,
    pub bank: BankInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: &str = "0cdd4ba04456ca169baca3d66eace869520c62fe84421329086e03d91a68acdb";

    #[test]
    fn parse_accepts_64_hex_and_normalizes() {
        let id = AccountId::parse(&format!("  {}  ", HEX.to_uppercase())).unwrap();
        assert_eq!(id.as_str(), HEX);
    }

    #[test]
    fn parse_rejects_wrong_length_or_alphabet() {
        assert!(AccountId::parse(&HEX[..63]).is_none());
        assert!(AccountId::parse(&format!("{}0", HEX)).is_none());
        assert!(AccountId::parse(&HEX.replace('c', "x")).is_none());
        assert!(AccountId::parse("").is_none());
    }

    #[test]
    fn short_truncates_without_panicking() {
        let id = AccountId::new(HEX);
        assert_eq!(id.short(6), "0cdd4b");
        assert_eq!(AccountId::new("abc").short(6), "abc");
    }

    #[test]
    fn signing_key_debug_is_redacted() {
        let key = SigningKey::new("deadbeef");
        assert_eq!(format!("{:?}", key), "SigningKey(***)");
    }
}
