//! Page header and tab bar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::view::header::{build_page_header, build_tab_items};

/// Renders the page header: menu button, title, status, send-points button.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let vm = build_page_header(state);
    let button = format!(" [s] {} ", vm.send_points_label);

    let chunks = Layout::horizontal([
        Constraint::Length(10),                   // Menu
        Constraint::Min(20),                      // Title
        Constraint::Length(36),                   // Status
        Constraint::Length(button.len() as u16), // Button
    ])
    .split(area);

    let menu_style = if state.menu.is_some() {
        Styles::header_button()
    } else {
        Styles::header()
    };
    frame.render_widget(Paragraph::new(" [m] ☰ ").style(menu_style), chunks[0]);
    frame.render_widget(Paragraph::new(vm.title).style(Styles::header()), chunks[1]);

    let status = state.status_message.clone().unwrap_or_default();
    frame.render_widget(Paragraph::new(status).style(Styles::status()), chunks[2]);

    frame.render_widget(Paragraph::new(button).style(Styles::header_button()), chunks[3]);
}

/// Renders the tab bar.
pub fn render_tabs(frame: &mut Frame, area: Rect, state: &AppState) {
    let spans: Vec<Span> = build_tab_items(state)
        .iter()
        .enumerate()
        .flat_map(|(i, tab)| {
            let style = if tab.active {
                Styles::tab_active()
            } else {
                Styles::tab_inactive()
            };
            vec![
                Span::styled(format!(" {}:", i + 1), Styles::dim()),
                Span::styled(tab.name, style),
                Span::raw(" "),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
