//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use finsecure_app::{AppState, ViewMode};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: everything shown is derived from it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(state), areas.header);

    match state.view() {
        ViewMode::Client => {
            // Login sits beside the client form until someone signs in
            let (client, login) = layout::client_columns(areas.body, !state.is_authenticated());
            frame.render_widget(widgets::ClientPanel::new(state), client);
            if let Some(login) = login {
                frame.render_widget(widgets::LoginPanel::new(state), login);
            }
        }
        ViewMode::OperatorDashboard => {
            frame.render_widget(widgets::Dashboard::new(state), areas.body);
        }
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
