//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, backend address, health and session badges
    pub header: Rect,

    /// Client view or operator dashboard
    pub body: Rect,

    /// Key hints and activity spinner
    pub status: Rect,
}

/// Split the screen into header, body and status bar
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, status] = Layout::vertical([
        Constraint::Length(3), // Top border + title row + bottom border
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    ScreenAreas {
        header,
        body,
        status,
    }
}

/// Side-by-side client and login panels; the login column disappears once signed in
pub fn client_columns(area: Rect, show_login: bool) -> (Rect, Option<Rect>) {
    if !show_login {
        return (area, None);
    }
    let [client, login] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(area);
    (client, Some(login))
}
