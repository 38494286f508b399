//! Operator sign-in panel, shown beside the client view while signed out

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use finsecure_app::{AppState, FocusField};

use super::input_line;
use crate::theme::{icons, styles};

pub struct LoginPanel<'a> {
    state: &'a AppState,
}

impl<'a> LoginPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for LoginPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = matches!(
            self.state.focus,
            FocusField::Username | FocusField::Password
        );
        let block = styles::titled_block("Operator Login", focused);

        let creds = &self.state.credentials;
        let mut lines = vec![
            input_line(
                "Username",
                &creds.username,
                self.state.focus == FocusField::Username,
                false,
            ),
            input_line(
                "Password",
                &creds.password,
                self.state.focus == FocusField::Password,
                true,
            ),
            Line::default(),
            Line::from(vec![
                Span::styled("  [", styles::text_muted()),
                Span::styled("Enter", styles::keybinding()),
                Span::styled("] Sign in", styles::text_muted()),
            ]),
        ];

        if let Some(error) = &self.state.login_error {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("  {} {}", icons::WARNING, error),
                styles::status_red(),
            )));
        } else if cfg!(debug_assertions) {
            if let Some((user, pass)) = self.state.verifier().debug_credentials() {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    format!("  Demo: {} / {}", user, pass),
                    styles::text_muted(),
                )));
            }
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
