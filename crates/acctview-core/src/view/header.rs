//! Page header, tab bar and dropdown menu view models.

use crate::tui::state::{AppState, MENU_OPTIONS, MenuAction, Tab};

/// Characters of the account number shown in the page title.
const TITLE_ID_LEN: usize = 14;

/// Label of the header's right-hand button.
pub const SEND_POINTS_LABEL: &str = "Send Points";

/// Page header content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHeaderView {
    pub title: String,
    pub send_points_label: &'static str,
}

/// One entry of the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabItem {
    pub name: &'static str,
    pub active: bool,
}

/// One entry of the unfolded dropdown menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItemView {
    pub label: &'static str,
    pub action: MenuAction,
    pub highlighted: bool,
}

pub fn build_page_header(state: &AppState) -> PageHeaderView {
    PageHeaderView {
        title: format!(
            "{} ({})",
            state.account.nickname,
            state.account.account_number.short(TITLE_ID_LEN)
        ),
        send_points_label: SEND_POINTS_LABEL,
    }
}

pub fn build_tab_items(state: &AppState) -> Vec<TabItem> {
    Tab::all()
        .iter()
        .map(|tab| TabItem {
            name: tab.name(),
            active: *tab == state.current_tab,
        })
        .collect()
}

/// Menu entries; empty while the menu is folded.
pub fn build_menu_items(state: &AppState) -> Vec<MenuItemView> {
    let Some(selected) = state.menu else {
        return Vec::new();
    };
    MENU_OPTIONS
        .iter()
        .enumerate()
        .map(|(i, option)| MenuItemView {
            label: option.label,
            action: option.action,
            highlighted: i == selected,
        })
        .collect()
}
