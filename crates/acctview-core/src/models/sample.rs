//! Built-in sample account used when no data file is given.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::{AccountData, AccountId, AccountSnapshot, BankInfo, SigningKey, Transaction};

const ACCOUNT_NUMBER: &str = "0cdd4ba04456ca169baca3d66eace869520c62fe84421329086e03d91a68acdb";
const SIGNING_KEY: &str = "6f812a35643b55a77f71c3b722504fbc5918e83ec72965f7fd33865ed0be8f81";
const BANK_NETWORK_ID: &str = "0cdd4ba04456ca169baca3d66eace869520c62fe84421329086e03d91a68acdb";
const BANK_ACCOUNT_NUMBER: &str =
    "5e12967707909e62b2bb2036c209085a784fabbc3deccefee70052b6181c8ed8";

const COUNTERPARTIES: &[&str] = &[
    "a37e2836805975f334108b55523634c995bd2a4db610062f404510617e83126f",
    "dfddf07ec15cbf363ecb52eedd7133b70b3ec896b488460bcecaba63e8e36be5",
    "4d2e4b89be4e8f9bd3ed1d1b2a4f12e58764ffd1c8a1ec62fea0d3e0b9cfa4b2",
    "9c1f0b3dbd01f8e2a86ad3cb0a54c2b9e0e7bd4d5b1d8f6b0c2d4e6f8a0b2c4d",
];

/// First sample transaction timestamp: 2020-09-01 12:00:00 UTC.
const FIRST_TIMESTAMP: i64 = 1_598_961_600;

/// Number of generated sample transactions.
const SAMPLE_TRANSACTIONS: u64 = 24;

/// Returns the sample account with a deterministic transaction history.
pub fn sample_data() -> AccountData {
    let me = AccountId::new(ACCOUNT_NUMBER);

    let transactions = (0..SAMPLE_TRANSACTIONS)
        .map(|i| {
            let other = AccountId::new(COUNTERPARTIES[i as usize % COUNTERPARTIES.len()]);
            let (sender, recipient) = if i % 3 == 0 {
                (me.clone(), other)
            } else {
                (other, me.clone())
            };
            // 1.25 to 31.24 points
            let amount = Decimal::new(125 + (i as i64 * 731) % 3000, 2);
            let created = DateTime::<Utc>::from_timestamp(FIRST_TIMESTAMP + i as i64 * 5_400, 0)
                .unwrap_or_default();
            Transaction {
                id: i + 1,
                sender,
                recipient,
                amount,
                created,
            }
        })
        .collect();

    AccountData {
        account: AccountSnapshot {
            nickname: "Donations".to_string(),
            balance: Decimal::new(18435, 2),
            account_number: me,
            signing_key: SigningKey::new(SIGNING_KEY),
            bank: BankInfo {
                network_id: BANK_NETWORK_ID.to_string(),
                account_number: BANK_ACCOUNT_NUMBER.to_string(),
                protocol: "http".to_string(),
            },
        },
        transactions,
    }
}
