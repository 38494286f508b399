//! Header bar: product name, backend address, health and session badges

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use finsecure_app::AppState;

use crate::theme::{icons, palette, styles};

pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn left_line(&self) -> Line<'a> {
        Line::from(vec![
            Span::raw(" "),
            Span::styled("FinSecure", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.state.api_base_url.as_str(), styles::text_secondary()),
        ])
    }

    fn right_line(&self) -> Line<'static> {
        let health = if self.state.health.is_checking() {
            Span::styled(
                format!("{} checking", icons::spinner(self.state.spinner_frame)),
                styles::status_yellow(),
            )
        } else {
            let (icon, label, style) = styles::health_indicator(self.state.health.last());
            Span::styled(format!("{} {}", icon, label), style)
        };

        let session = if self.state.is_authenticated() {
            Span::styled(
                format!("{} operator", icons::DOT_FILLED),
                Style::default().fg(palette::OPERATOR),
            )
        } else {
            Span::styled(format!("{} guest", icons::DOT_EMPTY), styles::text_muted())
        };

        Line::from(vec![health, Span::raw("  "), session, Span::raw(" ")])
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = self.left_line();
        let right = self.right_line();

        buf.set_line(inner.x, inner.y, &left, inner.width);

        // Right section only when it does not collide with the title
        let right_width = right.width();
        let fits =
            left.width().saturating_add(right_width).saturating_add(2) <= usize::from(inner.width);
        if fits {
            // Fits in `inner.width`, so it fits in u16
            let right_width = right_width as u16;
            let x = inner.x + inner.width - right_width;
            buf.set_line(x, inner.y, &right, right_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{signed_in_state, TestTerminal};
    use finsecure_app::flows::HealthCheck;

    #[test]
    fn test_header_shows_backend_address() {
        let state = AppState::with_settings(Default::default(), "http://api.internal:8080");
        let mut term = TestTerminal::with_size(100, 3);

        term.render_widget(MainHeader::new(&state), term.area());

        assert!(term.buffer_contains("FinSecure"));
        assert!(term.buffer_contains("http://api.internal:8080"));
        assert!(term.buffer_contains("guest"));
        assert!(term.buffer_contains("unchecked"));
    }

    #[test]
    fn test_header_shows_operator_and_health() {
        let mut state = signed_in_state();
        state.health.complete(HealthCheck::Healthy {
            database: "connected".into(),
        });
        let mut term = TestTerminal::with_size(100, 3);

        term.render_widget(MainHeader::new(&state), term.area());

        assert!(term.buffer_contains("operator"));
        assert!(term.buffer_contains("healthy (db connected)"));
    }

    #[test]
    fn test_very_long_backend_address_drops_badges() {
        let mut state = AppState::new();
        state.api_base_url = format!("http://{}.test", "a".repeat(70_000));
        let mut term = TestTerminal::with_size(120, 3);

        term.render_widget(MainHeader::new(&state), term.area());

        assert!(term.buffer_contains("FinSecure"));
        assert!(!term.buffer_contains("guest"));
    }

    #[test]
    fn test_narrow_header_keeps_title() {
        let state = AppState::new();
        let mut term = TestTerminal::with_size(40, 3);

        term.render_widget(MainHeader::new(&state), term.area());

        assert!(term.buffer_contains("FinSecure"));
        assert!(!term.buffer_contains("guest"));
    }
}
