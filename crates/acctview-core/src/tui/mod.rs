//! Terminal User Interface for the account view.
//!
//! One page with a header, a tab bar and the tab content, plus the
//! dropdown menu, delete confirmation and send-points modals drawn on top.

mod app;
mod event;
mod input;
mod render;
pub(crate) mod state;
pub(crate) mod style;
pub(crate) mod table;
mod widgets;

pub use app::App;
pub use event::Event;
pub use input::{KeyAction, handle_key};
pub use state::{
    AppState, DeleteFlow, DeleteOutcome, MENU_OPTIONS, MenuAction, MenuOption, SendField,
    SendPointsForm, SendPointsOutcome, Tab, Ticket,
};
pub use table::PagedTable;
