//! Generic centered modal dialog with cancel/submit footer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::style::Styles;

/// Content handed to [`render_modal`].
pub struct Modal<'a> {
    pub title: &'a str,
    pub body: Vec<Line<'a>>,
    pub cancel_label: &'a str,
    pub submit_label: &'a str,
    /// While true the submit control shows progress and is not offered.
    pub submitting: bool,
    pub error: Option<String>,
    pub border_style: Style,
    /// Preferred width in percent of the screen.
    pub width_percent: u16,
}

/// Returns a rect of `width` x `height` centered in `area`, clamped to it.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Modal width for a screen `width` columns wide, between 40 and 90 columns.
fn popup_width(width: u16, percent: u16) -> u16 {
    (u32::from(width) * u32::from(percent) / 100).clamp(40, 90) as u16
}

/// Estimates the number of rows `lines` take once wrapped to `width`.
fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    let width = width.max(1) as usize;
    let rows: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    rows as u16
}

/// Renders `modal` centered over `area`.
pub fn render_modal(frame: &mut Frame, area: Rect, modal: Modal<'_>) {
    let Modal {
        title,
        mut body,
        cancel_label,
        submit_label,
        submitting,
        error,
        border_style,
        width_percent,
    } = modal;

    if let Some(err) = error {
        body.push(Line::from(""));
        body.push(Line::from(Span::styled(format!("Error: {err}"), Styles::error())));
    }

    let popup_width = popup_width(area.width, width_percent);
    // Borders, footer, and one row of slack for word wrapping
    let popup_height = wrapped_height(&body, popup_width.saturating_sub(2)) + 4;
    let popup_area = centered(area, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Styles::modal());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

    let paragraph = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .style(Styles::modal());
    frame.render_widget(paragraph, chunks[0]);

    let footer = if submitting {
        Line::from(Span::styled("Submitting…", Styles::help_key()))
    } else {
        Line::from(vec![
            Span::styled("Esc", Styles::help_key()),
            Span::styled(format!(" {}   ", cancel_label), Styles::help()),
            Span::styled("Enter", Styles::help_key()),
            Span::styled(format!(" {}", submit_label), Styles::help()),
        ])
    };
    frame.render_widget(
        Paragraph::new(footer)
            .alignment(Alignment::Center)
            .style(Styles::modal()),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let r = centered(area, 50, 10);
        assert_eq!(r, Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn wrapped_height_counts_blank_and_long_lines() {
        let lines = vec![Line::from("x".repeat(25)), Line::from(""), Line::from("ok")];
        assert_eq!(wrapped_height(&lines, 10), 3 + 1 + 1);
    }

    #[test]
    fn popup_width_on_very_wide_screens() {
        assert_eq!(popup_width(100, 70), 70);
        assert_eq!(popup_width(50, 50), 40);
        assert_eq!(popup_width(2000, 70), 90);
        assert_eq!(popup_width(u16::MAX, 100), 90);
    }

    #[test]
    fn centered_rect_is_clamped() {
        let area = Rect::new(5, 5, 20, 8);
        let r = centered(area, 50, 10);
        assert_eq!(r, Rect::new(5, 5, 20, 8));
    }
}
