//! TUI widgets.

mod delete_modal;
mod dropdown;
mod header;
mod modal;
mod overview;
mod qr;
mod send_points;
mod transactions;

pub use delete_modal::render_delete_modal;
pub use dropdown::render_menu;
pub use header::{render_header, render_tabs};
pub use overview::render_overview;
pub use send_points::render_send_points;
pub use transactions::render_transactions;
