//! Transactions tab: table plus pagination control.
//! Thin TUI wrapper over [`crate::view::transactions::build_transactions_view`].

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table, TableState};

use crate::tui::style::Styles;
use crate::view::transactions::TransactionsView;

pub fn render_transactions(frame: &mut Frame, area: Rect, vm: &TransactionsView<'_>) {
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);

    let title = format!(" Transactions ({}) ", vm.items.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Styles::default());

    frame.render_widget(Clear, chunks[0]);
    if vm.rows.is_empty() {
        frame.render_widget(
            Paragraph::new("No transactions yet").block(block),
            chunks[0],
        );
    } else {
        let header = Row::new(
            vm.headers
                .iter()
                .map(|h| Span::styled(*h, Styles::table_header())),
        )
        .style(Styles::table_header())
        .height(1);

        let rows: Vec<Row> = vm
            .rows
            .iter()
            .map(|vr| {
                Row::new(vr.cells.iter().map(|c| Span::raw(c.clone())))
                    .style(Styles::from_class(vr.style))
                    .height(1)
            })
            .collect();

        let mut constraints: Vec<Constraint> =
            vm.widths.iter().map(|&w| Constraint::Length(w)).collect();
        constraints.push(Constraint::Fill(1));

        let table = Table::new(rows, constraints)
            .header(header)
            .block(block)
            .column_spacing(1)
            .row_highlight_style(Styles::selected());

        let mut table_state = TableState::default().with_selected(vm.selected);
        frame.render_stateful_widget(table, chunks[0], &mut table_state);
    }

    let pagination = Paragraph::new(vm.pagination.label())
        .alignment(Alignment::Center)
        .style(Styles::help());
    frame.render_widget(pagination, chunks[1]);
}
