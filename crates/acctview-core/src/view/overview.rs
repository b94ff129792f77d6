//! Overview tab: account and bank detail panels.

use crate::fmt::{SIGNING_KEY_MASK, format_points};
use crate::models::AccountSnapshot;
use crate::view::common::{DetailItem, DetailPanel};

/// Builds the "Account Info" and "Bank Info" panels.
pub fn build_overview(account: &AccountSnapshot) -> [DetailPanel; 2] {
    let account_number = account.account_number.as_str();
    let signing_key = if account.signing_key.is_empty() {
        "(none)"
    } else {
        SIGNING_KEY_MASK
    };
    [
        DetailPanel {
            title: "Account Info",
            items: vec![
                DetailItem::text("Balance", format_points(account.balance)),
                DetailItem::text("Account Number", account_number),
                DetailItem::text("Signing Key", signing_key),
                DetailItem::qr("QR Code", account_number),
            ],
        },
        DetailPanel {
            title: "Bank Info",
            items: vec![
                DetailItem::text("Network ID", account.bank.network_id.as_str()),
                DetailItem::text("Account Number", account.bank.account_number.as_str()),
                DetailItem::text("Protocol", account.bank.protocol.as_str()),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SigningKey, sample_data};
    use crate::view::common::DetailValue;

    #[test]
    fn two_panels_with_expected_keys() {
        let [account, bank] = build_overview(&sample_data().account);
        assert_eq!(account.title, "Account Info");
        assert_eq!(
            account.keys(),
            ["Balance", "Account Number", "Signing Key", "QR Code"]
        );
        assert_eq!(bank.title, "Bank Info");
        assert_eq!(bank.keys(), ["Network ID", "Account Number", "Protocol"]);
    }

    #[test]
    fn values_come_from_the_snapshot() {
        let data = sample_data();
        let [account, bank] = build_overview(&data.account);
        assert_eq!(account.items[0].value, DetailValue::Text("184.35".into()));
        assert_eq!(
            account.items[3].value,
            DetailValue::Qr(data.account.account_number.to_string())
        );
        assert_eq!(bank.items[2].value, DetailValue::Text("http".into()));
    }

    #[test]
    fn signing_key_is_masked() {
        let data = sample_data();
        let [account, _] = build_overview(&data.account);
        assert_eq!(
            account.items[2].value,
            DetailValue::Text(SIGNING_KEY_MASK.into())
        );
        let rendered = format!("{:?}", account);
        assert!(!rendered.contains("6f812a35643b55a7"));
    }

    #[test]
    fn missing_signing_key_is_shown_as_none() {
        let mut snapshot = sample_data().account;
        snapshot.signing_key = SigningKey::new("");
        let [account, _] = build_overview(&snapshot);
        assert_eq!(account.items[2].value, DetailValue::Text("(none)".into()));
    }
}
