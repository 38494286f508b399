//! Bottom line: key hints for the current view and an activity spinner

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use finsecure_app::{AppState, DashboardTab, FocusField, ViewMode};

use crate::theme::{icons, palette, styles};

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.state.view() {
            ViewMode::Client => {
                let mut hints = vec![("Tab", "focus")];
                match self.state.focus {
                    FocusField::RiskScore => hints.push(("←/→", "risk")),
                    FocusField::Username | FocusField::Password => hints.push(("Enter", "sign in")),
                    FocusField::ClientName => {}
                }
                if !matches!(self.state.focus, FocusField::Username | FocusField::Password) {
                    hints.push(("Enter", "recommend"));
                }
                hints.push(("F5", "health"));
                if self.state.is_authenticated() {
                    hints.push(("Esc", "dashboard"));
                } else {
                    hints.push(("Esc", "quit"));
                }
                hints
            }
            ViewMode::OperatorDashboard => {
                let mut hints = vec![("1/2", "tab")];
                if self.state.tab() == DashboardTab::Tests && !self.state.test_run.is_running() {
                    hints.push(("c/s", "run suite"));
                }
                hints.extend([
                    ("r", "refresh"),
                    ("v", "client view"),
                    ("o", "sign out"),
                    ("q", "quit"),
                ]);
                hints
            }
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::CARD_BG));

        let mut spans = Vec::new();
        for (key, action) in self.hints() {
            spans.push(Span::styled(format!(" {}", key), styles::keybinding()));
            spans.push(Span::styled(format!(" {} ", action), styles::text_secondary()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        if self.state.any_loading() {
            let busy = format!("{} working ", icons::spinner(self.state.spinner_frame));
            let width = busy.chars().count() as u16;
            if width < area.width {
                buf.set_line(
                    area.x + area.width - width,
                    area.y,
                    &Line::styled(busy, styles::status_yellow()),
                    width,
                );
            }
        }
    }
}
