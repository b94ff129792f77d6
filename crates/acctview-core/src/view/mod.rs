//! View models derived from [`AppState`](crate::tui::AppState).
//!
//! Pure functions of state: nothing here mutates or renders. Widgets in
//! `tui::widgets` map these to ratatui primitives.

pub mod common;
pub mod header;
pub mod overview;
pub mod transactions;

use crate::tui::state::{AppState, Tab};

use common::DetailPanel;
use transactions::TransactionsView;

/// Content area for the active tab.
pub enum TabContent<'a> {
    /// Account and bank detail panels.
    Overview([DetailPanel; 2]),
    /// Transaction table plus pagination control.
    Transactions(TransactionsView<'a>),
}

/// Builds the content for `tab`.
pub fn build_tab_content(state: &AppState, tab: Tab) -> TabContent<'_> {
    match tab {
        Tab::Overview => TabContent::Overview(overview::build_overview(&state.account)),
        Tab::Transactions => TabContent::Transactions(transactions::build_transactions_view(
            &state.account,
            &state.transactions,
        )),
    }
}

/// Builds the content for the active tab.
pub fn build_active_content(state: &AppState) -> TabContent<'_> {
    build_tab_content(state, state.current_tab)
}

/// Builds the content for the tab named `name`; unknown names render nothing.
pub fn build_tab_content_by_name<'a>(state: &'a AppState, name: &str) -> Option<TabContent<'a>> {
    Tab::from_name(name).map(|tab| build_tab_content(state, tab))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_data;

    #[test]
    fn dispatch_matches_tab() {
        let state = AppState::new(sample_data(), 10);
        assert!(matches!(
            build_tab_content(&state, Tab::Overview),
            TabContent::Overview(_)
        ));
        assert!(matches!(
            build_tab_content(&state, Tab::Transactions),
            TabContent::Transactions(_)
        ));
        assert!(matches!(build_active_content(&state), TabContent::Overview(_)));
    }

    #[test]
    fn unknown_tab_name_renders_nothing() {
        let state = AppState::new(sample_data(), 10);
        assert!(build_tab_content_by_name(&state, "Settings").is_none());
        assert!(matches!(
            build_tab_content_by_name(&state, "Transactions"),
            Some(TabContent::Transactions(_))
        ));
    }
}
