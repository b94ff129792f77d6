//! Dropdown menu anchored under the header menu button.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::view::header::build_menu_items;

const MENU_WIDTH: u16 = 20;

/// Renders the unfolded menu, if any, just below `anchor`.
pub fn render_menu(frame: &mut Frame, anchor: Rect, screen: Rect, state: &AppState) {
    let items = build_menu_items(state);
    if items.is_empty() {
        return;
    }
    let height = items.len() as u16 + 2;
    let y = anchor.y + anchor.height;
    let area = Rect::new(
        anchor.x,
        y,
        MENU_WIDTH.min(screen.width),
        height.min(screen.height.saturating_sub(y)),
    );

    let lines: Vec<Line> = items
        .iter()
        .map(|item| {
            let style = if item.highlighted {
                Styles::selected()
            } else {
                Styles::modal()
            };
            Line::from(Span::styled(format!(" {:<width$}", item.label, width = 17), style))
        })
        .collect();

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::modal_border())
        .style(Styles::modal());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
