//! Transactions tab view model.

use crate::fmt::{elide_middle, format_points, format_timestamp};
use crate::models::{AccountSnapshot, Direction, Transaction};
use crate::tui::table::PagedTable;
use crate::view::common::{PaginationView, RowStyleClass, ViewRow};

const HEADERS: &[&str] = &["ID", "DATE", "DIR", "AMOUNT", "COUNTERPARTY"];
const WIDTHS: &[u16] = &[6, 17, 5, 12];
const COUNTERPARTY_MAX: usize = 32;

/// Transaction table ready to be rendered.
pub struct TransactionsView<'a> {
    /// Full collection, across all pages.
    pub items: &'a [Transaction],
    pub headers: &'static [&'static str],
    /// Fixed widths for all but the last column.
    pub widths: &'static [u16],
    /// Rows of the current page.
    pub rows: Vec<ViewRow>,
    /// Selected row within `rows`; `None` on an empty page.
    pub selected: Option<usize>,
    pub pagination: PaginationView,
}

pub fn build_transactions_view<'a>(
    account: &AccountSnapshot,
    table: &'a PagedTable<Transaction>,
) -> TransactionsView<'a> {
    let me = &account.account_number;
    let rows = table
        .page_items()
        .iter()
        .map(|tx| {
            let direction = tx.direction(me);
            let (counterparty, sign, style) = match direction {
                Direction::Incoming => (tx.sender.as_str(), "+", RowStyleClass::Positive),
                Direction::Outgoing => (tx.recipient.as_str(), "-", RowStyleClass::Negative),
                Direction::SelfTransfer => (me.as_str(), "", RowStyleClass::Dimmed),
                Direction::Unrelated => (tx.recipient.as_str(), "", RowStyleClass::Normal),
            };
            ViewRow {
                cells: vec![
                    tx.id.to_string(),
                    format_timestamp(tx.created),
                    direction.label().to_string(),
                    format!("{}{}", sign, format_points(tx.amount)),
                    elide_middle(counterparty, COUNTERPARTY_MAX),
                ],
                style,
            }
        })
        .collect();

    TransactionsView {
        items: table.items(),
        headers: HEADERS,
        widths: WIDTHS,
        rows,
        selected: table.selected_item().map(|_| table.selected()),
        pagination: PaginationView {
            page: table.page(),
            page_count: table.page_count(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_data;

    #[test]
    fn surfaces_full_collection_and_current_page() {
        let data = sample_data();
        let table = PagedTable::new(data.transactions.clone(), 10);
        let vm = build_transactions_view(&data.account, &table);

        assert_eq!(vm.items, &data.transactions[..]);
        assert_eq!(vm.rows.len(), 10);
        assert_eq!(vm.selected, Some(0));
        assert_eq!(vm.pagination.page_count, 3);
        assert_eq!(vm.headers.len(), vm.widths.len() + 1);
        assert!(vm.rows.iter().all(|r| r.cells.len() == vm.headers.len()));
    }

    #[test]
    fn direction_drives_sign_and_style() {
        let data = sample_data();
        let table = PagedTable::new(data.transactions.clone(), 10);
        let vm = build_transactions_view(&data.account, &table);

        // Sample: every third transaction (starting with the first) is outgoing.
        let out = &vm.rows[0];
        assert_eq!(out.cells[2], "OUT");
        assert!(out.cells[3].starts_with('-'));
        assert_eq!(out.style, RowStyleClass::Negative);

        let incoming = &vm.rows[1];
        assert_eq!(incoming.cells[2], "IN");
        assert!(incoming.cells[3].starts_with('+'));
        assert_eq!(incoming.style, RowStyleClass::Positive);
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let data = sample_data();
        let table = PagedTable::new(Vec::new(), 10);
        let vm = build_transactions_view(&data.account, &table);
        assert!(vm.items.is_empty());
        assert!(vm.rows.is_empty());
        assert_eq!(vm.selected, None);
        assert_eq!(vm.pagination.page_count, 1);
    }
}
