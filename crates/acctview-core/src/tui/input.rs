//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::service::Transfer;

use super::state::{AppState, Tab, Ticket};

/// Result of handling a key event.
#[derive(Debug, PartialEq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Start deleting the account.
    DeleteAccount(Ticket),
    /// Start a point transfer.
    SendPoints(Ticket, Transfer),
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Handles key input and updates state.
///
/// Modals take input in front of the page: delete confirmation first, then
/// send points, then the dropdown menu.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if is_ctrl_c(&key) {
        return KeyAction::Quit;
    }
    if state.delete.is_visible() {
        return handle_delete_modal(state, key);
    }
    if state.send_points.is_some() {
        return handle_send_points(state, key);
    }
    if state.menu.is_some() {
        return handle_menu(state, key);
    }
    handle_normal_mode(state, key)
}

fn handle_delete_modal(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
            match state.confirm_delete() {
                Some(ticket) => KeyAction::DeleteAccount(ticket),
                None => KeyAction::None,
            }
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            if state.close_delete_modal() {
                state.status_message = None;
            }
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_send_points(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let Some(form) = state.send_points.as_mut() else {
        return KeyAction::None;
    };
    match key.code {
        KeyCode::Esc => {
            let outcome = form.request_close();
            state.apply_send_points_outcome(outcome);
            KeyAction::None
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            form.switch_focus();
            KeyAction::None
        }
        KeyCode::Backspace => {
            form.backspace();
            KeyAction::None
        }
        KeyCode::Char(c) => {
            form.push_char(c);
            KeyAction::None
        }
        KeyCode::Enter => match state.submit_send_points() {
            Some((ticket, transfer)) => KeyAction::SendPoints(ticket, transfer),
            None => KeyAction::None,
        },
        _ => KeyAction::None,
    }
}

fn handle_menu(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.menu_up(),
        KeyCode::Down | KeyCode::Char('j') => state.menu_down(),
        KeyCode::Enter => state.activate_menu_selection(),
        KeyCode::Esc | KeyCode::Char('m') => state.close_menu(),
        _ => {}
    }
    KeyAction::None
}

/// Handles keys when no modal is open.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,

        // Tab navigation
        KeyCode::Tab => {
            state.select_tab(state.current_tab.next());
            KeyAction::None
        }
        KeyCode::BackTab => {
            state.select_tab(state.current_tab.prev());
            KeyAction::None
        }
        KeyCode::Char('1') => {
            state.select_tab(Tab::Overview);
            KeyAction::None
        }
        KeyCode::Char('2') => {
            state.select_tab(Tab::Transactions);
            KeyAction::None
        }

        // Header actions
        KeyCode::Char('m') => {
            state.open_menu();
            KeyAction::None
        }
        KeyCode::Char('s') => {
            state.open_send_points_modal();
            KeyAction::None
        }

        // Transaction table navigation
        KeyCode::Up | KeyCode::Char('k') if state.current_tab == Tab::Transactions => {
            state.transactions.select_up();
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') if state.current_tab == Tab::Transactions => {
            state.transactions.select_down();
            KeyAction::None
        }
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('p')
            if state.current_tab == Tab::Transactions =>
        {
            state.transactions.prev_page();
            KeyAction::None
        }
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('n')
            if state.current_tab == Tab::Transactions =>
        {
            state.transactions.next_page();
            KeyAction::None
        }
        KeyCode::Home if state.current_tab == Tab::Transactions => {
            state.transactions.first_page();
            KeyAction::None
        }
        KeyCode::End if state.current_tab == Tab::Transactions => {
            state.transactions.last_page();
            KeyAction::None
        }

        // Dismiss status message
        KeyCode::Esc => {
            state.status_message = None;
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}
