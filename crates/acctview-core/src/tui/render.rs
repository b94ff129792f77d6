//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::view::{TabContent, build_active_content};

use super::state::AppState;
use super::widgets::{
    render_delete_modal, render_header, render_menu, render_overview, render_send_points,
    render_tabs, render_transactions,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Main layout: header, tabs, content
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Length(1), // Tabs
        Constraint::Min(5),    // Content area
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    render_tabs(frame, chunks[1], state);
    render_content(frame, chunks[2], state);

    // Overlays, rendered last. At most one is open at a time since input
    // goes to the topmost one.
    render_menu(frame, chunks[0], area, state);
    render_delete_modal(frame, area, &state.delete);
    if let Some(form) = &state.send_points {
        render_send_points(frame, area, form);
    }
}

/// Renders content based on current tab.
fn render_content(frame: &mut Frame, area: Rect, state: &AppState) {
    match build_active_content(state) {
        TabContent::Overview(panels) => render_overview(frame, area, &panels),
        TabContent::Transactions(vm) => render_transactions(frame, area, &vm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_data;
    use crate::service::ServiceError;
    use crate::tui::state::Tab;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(state: &AppState) -> String {
        let backend = TestBackend::new(140, 50);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn overview_shows_both_panels() {
        let state = AppState::new(sample_data(), 10);
        let screen = draw(&state);
        assert!(screen.contains("Donations (0cdd4ba04456ca)"));
        assert!(screen.contains("Account Info"));
        assert!(screen.contains("Bank Info"));
        assert!(screen.contains("184.35"));
        assert!(screen.contains("Send Points"));
        assert!(!screen.contains("Delete Account"));
    }

    #[test]
    fn transactions_tab_shows_table_and_pagination() {
        let mut state = AppState::new(sample_data(), 10);
        state.select_tab(Tab::Transactions);
        let screen = draw(&state);
        assert!(screen.contains("Transactions (24)"));
        assert!(screen.contains("COUNTERPARTY"));
        assert!(screen.contains("Page 1/3"));
    }

    #[test]
    fn delete_modal_overlays_and_shows_error() {
        let mut state = AppState::new(sample_data(), 10);
        state.open_delete_modal();
        let screen = draw(&state);
        assert!(screen.contains("Delete Account"));
        assert!(screen.contains("Warning:"));

        let ticket = state.confirm_delete().unwrap();
        assert!(draw(&state).contains("Submitting"));

        state.complete_delete(ticket, Err(ServiceError::Unauthorized));
        assert!(draw(&state).contains("Error: not authorized"));
    }

    #[test]
    fn menu_lists_options() {
        let mut state = AppState::new(sample_data(), 10);
        state.open_menu();
        let screen = draw(&state);
        assert!(screen.contains("Edit"));
        assert!(screen.contains("Delete Account"));
    }
}
