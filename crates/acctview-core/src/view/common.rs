//! UI-agnostic view model types.
//!
//! These types represent presentation data without any dependency on a specific
//! rendering framework. TUI maps them to ratatui widgets.

/// Value of a detail panel entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailValue {
    Text(String),
    /// Rendered as a QR code encoding the payload.
    Qr(String),
}

/// One labeled entry of a detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailItem {
    pub key: &'static str,
    pub value: DetailValue,
}

impl DetailItem {
    pub fn text(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: DetailValue::Text(value.into()),
        }
    }

    pub fn qr(key: &'static str, payload: impl Into<String>) -> Self {
        Self {
            key,
            value: DetailValue::Qr(payload.into()),
        }
    }
}

/// Read-only titled key/value grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub title: &'static str,
    pub items: Vec<DetailItem>,
}

impl DetailPanel {
    pub fn keys(&self) -> Vec<&'static str> {
        self.items.iter().map(|i| i.key).collect()
    }
}

/// Row-level style classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowStyleClass {
    #[default]
    Normal,
    /// Points received (TUI: green).
    Positive,
    /// Points sent (TUI: yellow).
    Negative,
    /// Dimmed (TUI: dark gray).
    Dimmed,
}

/// One table row.
#[derive(Debug, Clone)]
pub struct ViewRow {
    pub cells: Vec<String>,
    pub style: RowStyleClass,
}

/// Pagination control state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationView {
    /// Zero-based current page.
    pub page: usize,
    pub page_count: usize,
}

impl PaginationView {
    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }

    /// Control text, e.g. `‹ Page 2/3 ›`; arrows only where paging is possible.
    pub fn label(&self) -> String {
        format!(
            "{} Page {}/{} {}",
            if self.has_prev() { "‹" } else { " " },
            self.page + 1,
            self.page_count,
            if self.has_next() { "›" } else { " " },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_label_shows_available_directions() {
        let first = PaginationView {
            page: 0,
            page_count: 3,
        };
        assert_eq!(first.label(), "  Page 1/3 ›");
        let middle = PaginationView { page: 1, ..first };
        assert_eq!(middle.label(), "‹ Page 2/3 ›");
        let last = PaginationView { page: 2, ..first };
        assert_eq!(last.label(), "‹ Page 3/3  ");
    }
}
