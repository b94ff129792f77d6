//! Main application state.

use tracing::{debug, info, warn};

use crate::config::DEFAULT_PAGE_SIZE;
use crate::models::{AccountData, AccountSnapshot, Transaction};
use crate::service::{ServiceError, Transfer};
use crate::tui::table::PagedTable;

use super::{
    DeleteFlow, DeleteOutcome, MENU_OPTIONS, MenuAction, SendPointsForm, SendPointsOutcome, Tab,
    Ticket,
};

/// State of one account view, from mount to unmount.
#[derive(Debug)]
pub struct AppState {
    /// Current active tab.
    pub current_tab: Tab,
    /// Delete confirmation modal.
    pub delete: DeleteFlow,
    /// Send-points modal; `Some` while visible.
    pub send_points: Option<SendPointsForm>,
    /// Dropdown menu; `Some(selected option)` while unfolded.
    pub menu: Option<usize>,
    /// Account details (read-only).
    pub account: AccountSnapshot,
    /// Transaction list with pagination.
    pub transactions: PagedTable<Transaction>,
    /// Temporary status message shown in the header.
    pub status_message: Option<String>,
    next_ticket: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(crate::models::sample_data(), DEFAULT_PAGE_SIZE)
    }
}

impl AppState {
    pub fn new(data: AccountData, page_size: usize) -> Self {
        Self {
            current_tab: Tab::Overview,
            delete: DeleteFlow::Closed,
            send_points: None,
            menu: None,
            account: data.account,
            transactions: PagedTable::new(data.transactions, page_size),
            status_message: None,
            next_ticket: 0,
        }
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }

    /// Returns true if any modal or the dropdown menu is open.
    pub fn any_modal_open(&self) -> bool {
        self.delete.is_visible() || self.send_points.is_some() || self.menu.is_some()
    }

    // ------------------------------------------------------------------
    // Tabs
    // ------------------------------------------------------------------

    /// Switches to `tab`. Returns true if the active tab changed.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if self.current_tab == tab {
            return false;
        }
        debug!(from = self.current_tab.name(), to = tab.name(), "tab switch");
        self.current_tab = tab;
        true
    }

    /// Switches to the tab named `name`; unknown names are ignored.
    pub fn select_tab_by_name(&mut self, name: &str) -> bool {
        match Tab::from_name(name) {
            Some(tab) => self.select_tab(tab),
            None => {
                debug!(name, "ignoring unknown tab");
                false
            }
        }
    }

    // ------------------------------------------------------------------
    // Dropdown menu
    // ------------------------------------------------------------------

    pub fn open_menu(&mut self) {
        self.menu = Some(0);
    }

    pub fn close_menu(&mut self) {
        self.menu = None;
    }

    pub fn menu_up(&mut self) {
        if let Some(sel) = self.menu.as_mut() {
            *sel = sel.saturating_sub(1);
        }
    }

    pub fn menu_down(&mut self) {
        if let Some(sel) = self.menu.as_mut() {
            *sel = (*sel + 1).min(MENU_OPTIONS.len() - 1);
        }
    }

    /// Activates the highlighted menu option and folds the menu.
    pub fn activate_menu_selection(&mut self) {
        if let Some(option) = self.menu.take().and_then(|sel| MENU_OPTIONS.get(sel)) {
            self.run_menu_action(option.action);
        }
    }

    pub fn run_menu_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::Edit => {}
            MenuAction::DeleteAccount => self.open_delete_modal(),
        }
    }

    // ------------------------------------------------------------------
    // Delete account
    // ------------------------------------------------------------------

    pub fn open_delete_modal(&mut self) {
        self.delete.open();
    }

    /// Closes the delete modal. Refused while the deletion is in flight.
    pub fn close_delete_modal(&mut self) -> bool {
        if self.delete.is_submitting() {
            self.status_message = Some("Deletion in progress, please wait".to_string());
            return false;
        }
        self.delete.close()
    }

    /// Confirms deletion. Returns the ticket of the request to start, or
    /// `None` if the modal is not open or a request is already in flight.
    pub fn confirm_delete(&mut self) -> Option<Ticket> {
        if !self.delete.is_visible() || self.delete.is_submitting() {
            return None;
        }
        let ticket = self.issue_ticket();
        self.delete.submit(ticket);
        info!(%ticket, account = %self.account.account_number.short(12), "deleting account");
        Some(ticket)
    }

    /// Applies the result of deletion request `ticket`.
    pub fn complete_delete(
        &mut self,
        ticket: Ticket,
        result: Result<(), ServiceError>,
    ) -> DeleteOutcome {
        let outcome = self.delete.finish(ticket, result);
        match (&outcome, self.delete.error()) {
            (DeleteOutcome::Deleted, _) => {
                info!(%ticket, "account deleted");
                self.status_message = Some("Account deleted".to_string());
            }
            (DeleteOutcome::Failed, Some(error)) => {
                warn!(%ticket, %error, "account deletion failed");
                // The modal shows the error; drop any "in progress" notice.
                self.status_message = None;
            }
            (DeleteOutcome::Stale, _) => {
                debug!(%ticket, "dropping stale delete completion");
            }
            (DeleteOutcome::Failed, None) => {}
        }
        outcome
    }

    // ------------------------------------------------------------------
    // Send points
    // ------------------------------------------------------------------

    pub fn open_send_points_modal(&mut self) {
        if self.send_points.is_none() {
            self.send_points = Some(SendPointsForm::new(
                self.account.account_number.clone(),
                self.account.balance,
            ));
        }
    }

    pub fn close_send_points_modal(&mut self) {
        self.send_points = None;
    }

    /// Applies a close request coming from the send-points modal.
    pub fn apply_send_points_outcome(&mut self, outcome: SendPointsOutcome) {
        if outcome == SendPointsOutcome::Close {
            self.close_send_points_modal();
        }
    }

    /// Submits the send-points form. Returns the transfer to dispatch.
    pub fn submit_send_points(&mut self) -> Option<(Ticket, Transfer)> {
        self.send_points.as_ref()?;
        let ticket = self.issue_ticket();
        let form = self.send_points.as_mut()?;
        let transfer = form.begin_submit(ticket)?;
        info!(%ticket, amount = %transfer.amount, recipient = %transfer.recipient.short(12), "sending points");
        Some((ticket, transfer))
    }

    /// Applies the result of transfer request `ticket`.
    pub fn complete_transfer(&mut self, ticket: Ticket, result: Result<(), ServiceError>) {
        let Some(form) = self.send_points.as_mut() else {
            debug!(%ticket, "send-points modal gone, dropping transfer completion");
            return;
        };
        if let Err(error) = &result {
            warn!(%ticket, %error, "transfer failed");
        }
        let succeeded = result.is_ok();
        let outcome = form.finish(ticket, result);
        if succeeded && outcome == SendPointsOutcome::Close {
            info!(%ticket, "points sent");
            self.status_message = Some("Points sent".to_string());
        }
        self.apply_send_points_outcome(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_data;

    fn state() -> AppState {
        AppState::new(sample_data(), 10)
    }

    /// Snapshot of everything except the active tab.
    fn non_tab_state(s: &AppState) -> (DeleteFlow, bool, Option<usize>, Option<String>, usize) {
        (
            s.delete.clone(),
            s.send_points.is_some(),
            s.menu,
            s.status_message.clone(),
            s.transactions.page(),
        )
    }

    #[test]
    fn initial_state() {
        let s = state();
        assert_eq!(s.current_tab, Tab::Overview);
        assert!(!s.delete.is_visible());
        assert!(!s.delete.is_submitting());
        assert!(s.send_points.is_none());
        assert!(s.menu.is_none());
        assert!(!s.any_modal_open());
    }

    #[test]
    fn select_tab_changes_only_the_tab() {
        for tab in Tab::all() {
            let mut s = state();
            let before = non_tab_state(&s);
            s.select_tab(*tab);
            assert_eq!(s.current_tab, *tab);
            assert_eq!(non_tab_state(&s), before);
        }
    }

    #[test]
    fn selecting_active_tab_is_noop() {
        let mut s = state();
        assert!(s.select_tab(Tab::Transactions));
        assert!(!s.select_tab(Tab::Transactions));
        assert!(!s.select_tab(Tab::Transactions));
        assert_eq!(s.current_tab, Tab::Transactions);
    }

    #[test]
    fn unknown_tab_name_is_noop() {
        let mut s = state();
        assert!(!s.select_tab_by_name("Settings"));
        assert_eq!(s.current_tab, Tab::Overview);
        assert!(s.select_tab_by_name("Transactions"));
        assert_eq!(s.current_tab, Tab::Transactions);
    }

    #[test]
    fn delete_from_menu_opens_modal_not_submitting() {
        let mut s = state();
        s.open_menu();
        s.menu_down();
        s.activate_menu_selection();
        assert!(s.menu.is_none());
        assert_eq!(s.delete, DeleteFlow::Open);
        assert!(!s.delete.is_submitting());
    }

    #[test]
    fn edit_menu_option_does_nothing() {
        let mut s = state();
        s.open_menu();
        s.activate_menu_selection();
        assert!(s.menu.is_none());
        assert_eq!(s.delete, DeleteFlow::Closed);
        assert!(s.send_points.is_none());
    }

    #[test]
    fn menu_selection_is_clamped() {
        let mut s = state();
        s.open_menu();
        s.menu_up();
        assert_eq!(s.menu, Some(0));
        for _ in 0..5 {
            s.menu_down();
        }
        assert_eq!(s.menu, Some(MENU_OPTIONS.len() - 1));
    }

    #[test]
    fn confirm_then_complete_closes_after_submitting() {
        let mut s = state();
        s.open_delete_modal();
        let ticket = s.confirm_delete().unwrap();

        // Synchronously submitting, still visible.
        assert!(s.delete.is_submitting());
        assert!(s.delete.is_visible());

        assert_eq!(s.complete_delete(ticket, Ok(())), DeleteOutcome::Deleted);
        assert!(!s.delete.is_submitting());
        assert!(!s.delete.is_visible());
        assert_eq!(s.status_message.as_deref(), Some("Account deleted"));
    }

    #[test]
    fn confirm_requires_open_modal_and_is_not_reentrant() {
        let mut s = state();
        assert_eq!(s.confirm_delete(), None);

        s.open_delete_modal();
        let first = s.confirm_delete();
        assert!(first.is_some());
        assert_eq!(s.confirm_delete(), None);
    }

    #[test]
    fn cancel_leaves_account_untouched() {
        let mut s = state();
        let account = s.account.clone();
        s.open_delete_modal();
        assert!(s.close_delete_modal());
        assert!(!s.delete.is_visible());
        assert!(!s.delete.is_submitting());
        assert_eq!(s.account, account);
        assert_eq!(s.transactions.items().len(), sample_data().transactions.len());
    }

    #[test]
    fn cancel_refused_while_submitting() {
        let mut s = state();
        s.open_delete_modal();
        let ticket = s.confirm_delete().unwrap();
        assert!(!s.close_delete_modal());
        assert!(s.delete.is_submitting());
        assert!(s.status_message.is_some());
        s.complete_delete(ticket, Ok(()));
        assert!(!s.delete.is_visible());
    }

    #[test]
    fn failure_after_refused_cancel_clears_progress_notice() {
        let mut s = state();
        s.open_delete_modal();
        let ticket = s.confirm_delete().unwrap();
        assert!(!s.close_delete_modal());
        assert_eq!(
            s.status_message.as_deref(),
            Some("Deletion in progress, please wait")
        );

        assert_eq!(
            s.complete_delete(ticket, Err(ServiceError::Unauthorized)),
            DeleteOutcome::Failed
        );
        assert_eq!(s.status_message, None);
        assert_eq!(s.delete.error(), Some(&ServiceError::Unauthorized));
    }

    #[test]
    fn failed_delete_keeps_modal_and_retry_gets_new_ticket() {
        let mut s = state();
        s.open_delete_modal();
        let first = s.confirm_delete().unwrap();
        assert_eq!(
            s.complete_delete(first, Err(ServiceError::Network("down".into()))),
            DeleteOutcome::Failed
        );
        assert!(s.delete.is_visible());
        assert!(!s.delete.is_submitting());

        let second = s.confirm_delete().unwrap();
        assert_ne!(first, second);
        assert_eq!(s.complete_delete(first, Ok(())), DeleteOutcome::Stale);
        assert!(s.delete.is_submitting());
        assert_eq!(s.complete_delete(second, Ok(())), DeleteOutcome::Deleted);
    }

    #[test]
    fn send_points_toggles_any_number_of_times() {
        let mut s = state();
        for _ in 0..3 {
            s.open_send_points_modal();
            assert!(s.send_points.is_some());
            let outcome = s.send_points.as_ref().unwrap().request_close();
            s.apply_send_points_outcome(outcome);
            assert!(s.send_points.is_none());
        }
    }

    #[test]
    fn send_points_submit_and_complete() {
        let mut s = state();
        s.open_send_points_modal();
        let form = s.send_points.as_mut().unwrap();
        form.recipient =
            "a37e2836805975f334108b55523634c995bd2a4db610062f404510617e83126f".to_string();
        form.amount = "5".to_string();

        let (ticket, transfer) = s.submit_send_points().unwrap();
        assert_eq!(transfer.amount, rust_decimal::Decimal::new(5, 0));
        assert!(s.send_points.as_ref().unwrap().is_submitting());

        s.complete_transfer(ticket, Ok(()));
        assert!(s.send_points.is_none());
        assert_eq!(s.status_message.as_deref(), Some("Points sent"));
    }

    #[test]
    fn transfer_completion_after_modal_closed_is_dropped() {
        let mut s = state();
        s.complete_transfer(Ticket(9), Ok(()));
        assert!(s.send_points.is_none());
        assert!(s.status_message.is_none());
    }
}
