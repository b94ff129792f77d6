//! Send-points modal.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::fmt::format_points;
use crate::tui::state::{SendField, SendPointsForm};
use crate::tui::style::Styles;

use super::modal::{Modal, render_modal};

fn field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let (value_style, cursor) = if focused {
        (Styles::input_focused(), "█")
    } else {
        (Style::default(), "")
    };
    Line::from(vec![
        Span::styled(format!("{:>10}: ", label), Styles::detail_key()),
        Span::styled(value, value_style),
        Span::raw(cursor),
    ])
}

pub fn render_send_points(frame: &mut Frame, area: Rect, form: &SendPointsForm) {
    let editing = !form.is_submitting();
    let body = vec![
        Line::from(Span::styled(
            format!("Available balance: {}", format_points(form.balance())),
            Styles::dim(),
        )),
        Line::from(""),
        field_line(
            "To",
            &form.recipient,
            editing && form.focus == SendField::Recipient,
        ),
        field_line(
            "Amount",
            &form.amount,
            editing && form.focus == SendField::Amount,
        ),
        Line::from(""),
        Line::from(Span::styled("Tab switches field", Styles::help())),
    ];
    render_modal(
        frame,
        area,
        Modal {
            title: "Send Points",
            body,
            cancel_label: "Cancel",
            submit_label: "Send",
            submitting: form.is_submitting(),
            error: form.error.clone(),
            border_style: Styles::modal_border(),
            width_percent: 70,
        },
    );
}
