//! Application state management.

use std::fmt;

mod app_state;
mod delete_flow;
mod send_points;

pub use app_state::*;
pub use delete_flow::*;
pub use send_points::*;

/// Available tabs in the account view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Overview,
    Transactions,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Overview, Tab::Transactions]
    }

    /// Returns the display name of the tab.
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Transactions => "Transactions",
        }
    }

    /// Looks a tab up by display name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Tab> {
        Tab::all().iter().copied().find(|t| t.name() == name)
    }

    /// Returns the next tab.
    pub fn next(&self) -> Tab {
        match self {
            Tab::Overview => Tab::Transactions,
            Tab::Transactions => Tab::Overview,
        }
    }

    /// Returns the previous tab.
    pub fn prev(&self) -> Tab {
        // Two tabs: previous and next coincide.
        self.next()
    }
}

/// Identifies one asynchronous request (delete or transfer attempt).
///
/// Completions carrying a ticket other than the one in flight are stale
/// and get dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(pub u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Actions offered by the header dropdown menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Placeholder, does nothing yet.
    Edit,
    DeleteAccount,
}

/// One dropdown menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    pub label: &'static str,
    pub action: MenuAction,
}

/// Dropdown menu entries, in display order.
pub const MENU_OPTIONS: &[MenuOption] = &[
    MenuOption {
        label: "Edit",
        action: MenuAction::Edit,
    },
    MenuOption {
        label: "Delete Account",
        action: MenuAction::DeleteAccount,
    },
];
