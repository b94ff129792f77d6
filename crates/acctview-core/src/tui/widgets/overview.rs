//! Overview tab: detail panels.
//! Thin TUI wrapper over [`crate::view::overview::build_overview`].

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::style::Styles;
use crate::view::common::{DetailPanel, DetailValue};

use super::qr::qr_lines;

/// Width below which panels stack vertically.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 120;

/// Renders the detail panels side by side (or stacked on narrow screens).
pub fn render_overview(frame: &mut Frame, area: Rect, panels: &[DetailPanel]) {
    if panels.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, panels.len() as u32); panels.len()];
    let chunks = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        Layout::horizontal(constraints).split(area)
    } else {
        Layout::vertical(constraints).split(area)
    };
    for (panel, chunk) in panels.iter().zip(chunks.iter()) {
        render_panel(frame, *chunk, panel);
    }
}

fn render_panel(frame: &mut Frame, area: Rect, panel: &DetailPanel) {
    let block = Block::default()
        .title(format!(" {} ", panel.title))
        .borders(Borders::ALL)
        .style(Styles::default());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for item in &panel.items {
        let key = Span::styled(format!("{:>16}: ", item.key), Styles::detail_key());
        match &item.value {
            DetailValue::Text(text) => {
                lines.push(Line::from(vec![key, Span::raw(text.clone())]));
            }
            DetailValue::Qr(payload) => {
                lines.push(Line::from(key));
                lines.extend(qr_block(payload, inner, lines.len()));
            }
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// QR rows if they fit below `used` rows of `inner`, otherwise a hint.
fn qr_block(payload: &str, inner: Rect, used: usize) -> Vec<Line<'static>> {
    let Some(rows) = qr_lines(payload) else {
        return vec![Line::from(Span::styled("(cannot encode)", Styles::dim()))];
    };
    let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
    let fits = width <= inner.width as usize
        && rows.len() + used <= inner.height as usize;
    if fits {
        rows.into_iter().map(Line::from).collect()
    } else {
        vec![Line::from(Span::styled(
            format!("(enlarge window to {}x{} to show)", width, rows.len() + used),
            Styles::dim(),
        ))]
    }
}
