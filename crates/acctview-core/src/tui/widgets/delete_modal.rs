//! Delete account confirmation modal.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::tui::state::DeleteFlow;
use crate::tui::style::Styles;

use super::modal::{Modal, render_modal};

const WARNING: &str = "If you delete your account, you will lose all the points in your \
account as well as your signing key. Are you sure you want to delete your account?";

/// Renders the delete confirmation if the flow is visible.
pub fn render_delete_modal(frame: &mut Frame, area: Rect, flow: &DeleteFlow) {
    if !flow.is_visible() {
        return;
    }
    let body = vec![Line::from(vec![
        Span::styled("Warning: ", Styles::danger()),
        Span::raw(WARNING),
    ])];
    render_modal(
        frame,
        area,
        Modal {
            title: "⚠ Delete Account",
            body,
            cancel_label: "Cancel",
            submit_label: "Yes",
            submitting: flow.is_submitting(),
            error: flow.error().map(|e| e.to_string()),
            border_style: Styles::danger(),
            width_percent: 50,
        },
    );
}
