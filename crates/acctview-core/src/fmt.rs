//! Shared formatting helpers for points, keys and timestamps.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Mask shown instead of the signing key.
pub const SIGNING_KEY_MASK: &str = "**************************";

/// Formats a points amount with two decimals: `184.35`.
pub fn format_points(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM` (UTC).
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Shortens a long key to `head…tail` when it exceeds `max` chars.
pub fn elide_middle(s: &str, max: usize) -> String {
    let len = s.chars().count();
    if len <= max || max < 3 {
        return s.to_string();
    }
    let keep = max - 1;
    let head = keep.div_ceil(2);
    let tail = keep - head;
    let start: String = s.chars().take(head).collect();
    let end: String = s.chars().skip(len - tail).collect();
    format!("{}…{}", start, end)
}
