//! Client view: name input, risk slider and the recommendation result

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget, Wrap},
};

use finsecure_app::{AppState, FocusField};
use finsecure_core::{RecommendationOutcome, RiskScore};

use super::input_line;
use crate::theme::{icons, styles};

pub struct ClientPanel<'a> {
    state: &'a AppState,
}

impl<'a> ClientPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn risk_line(&self) -> Line<'static> {
        let focused = self.state.focus == FocusField::RiskScore;
        let score = self.state.risk_score;
        Line::from(vec![
            Span::styled(
                format!("{:>10}: ", "Risk"),
                if focused {
                    styles::accent_bold()
                } else {
                    styles::text_secondary()
                },
            ),
            Span::styled(score.to_string(), styles::text_primary()),
            Span::styled(format!("  ({})", risk_band(score)), styles::text_muted()),
        ])
    }

    fn result_lines(&self) -> Vec<Line<'static>> {
        let flow = &self.state.recommendation;
        if flow.is_loading() {
            return vec![Line::from(Span::styled(
                format!(
                    "{} Analyzing risk profile...",
                    icons::spinner(self.state.spinner_frame)
                ),
                styles::status_yellow(),
            ))];
        }

        match flow.outcome() {
            Some(RecommendationOutcome::Recommendation(rec)) => vec![
                Line::from(Span::styled("Recommended portfolio", styles::text_muted())),
                Line::from(Span::styled(
                    rec.portfolio_type.clone(),
                    styles::status_green().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("Risk score: {}", rec.risk_score),
                    styles::text_secondary(),
                )),
            ],
            Some(RecommendationOutcome::Error(err)) => vec![Line::from(vec![
                Span::styled(format!("{} ", icons::WARNING), styles::status_red()),
                Span::styled(err.message.clone(), styles::status_red()),
            ])],
            None => vec![Line::from(Span::styled(
                "Set your risk tolerance and press Enter for a recommendation.",
                styles::text_muted(),
            ))],
        }
    }
}

/// Coarse label for a score, shown next to the slider
fn risk_band(score: RiskScore) -> &'static str {
    match score.value() {
        0..=33 => "Conservative",
        34..=66 => "Balanced",
        _ => "Aggressive",
    }
}

impl Widget for ClientPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Client Portal", true);
        let inner = block.inner(area);
        block.render(area, buf);

        let [name, _, risk, gauge, _, submit, _, result] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        input_line(
            "Name",
            &self.state.client_name,
            self.state.focus == FocusField::ClientName,
            false,
        )
        .render(name, buf);

        self.risk_line().render(risk, buf);

        let score = self.state.risk_score.value();
        Gauge::default()
            .gauge_style(styles::accent())
            .ratio(f64::from(score) / 100.0)
            .label(format!("{}%", score))
            .render(gauge.inner(Margin::new(2, 0)), buf);

        Line::from(vec![
            Span::styled("  [", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled("] Get Recommendation", styles::text_muted()),
        ])
        .render(submit, buf);

        Paragraph::new(self.result_lines())
            .wrap(Wrap { trim: false })
            .render(result.inner(Margin::new(2, 0)), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use finsecure_core::{ErrorResult, Recommendation};

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(80, 16);
        term.render_widget(ClientPanel::new(state), term.area());
        term
    }

    #[test]
    fn test_empty_state_shows_hint() {
        let term = render(&AppState::new());
        assert!(term.buffer_contains("Client Portal"));
        assert!(term.buffer_contains("50"));
        assert!(term.buffer_contains("Balanced"));
        assert!(term.buffer_contains("press Enter"));
    }

    #[test]
    fn test_recommendation_is_rendered() {
        let mut state = AppState::new();
        let seq = state.recommendation.submit();
        state.recommendation.resolve(
            seq,
            RecommendationOutcome::Recommendation(Recommendation {
                portfolio_type: "Stocks".into(),
                risk_score: 80,
            }),
        );

        let term = render(&state);

        assert!(term.buffer_contains("Stocks"));
        assert!(term.buffer_contains("Risk score: 80"));
    }

    #[test]
    fn test_error_is_rendered_instead_of_result() {
        let mut state = AppState::new();
        let seq = state.recommendation.submit();
        state.recommendation.resolve(
            seq,
            RecommendationOutcome::Error(ErrorResult::new("Server unreachable")),
        );

        let term = render(&state);

        assert!(term.buffer_contains("Server unreachable"));
        assert!(!term.buffer_contains("Recommended portfolio"));
    }

    #[test]
    fn test_loading_replaces_previous_result() {
        let mut state = AppState::new();
        state.recommendation.submit();

        let term = render(&state);

        assert!(term.buffer_contains("Analyzing risk profile"));
    }

    #[test]
    fn test_risk_band_boundaries() {
        assert_eq!(risk_band(RiskScore::new(33)), "Conservative");
        assert_eq!(risk_band(RiskScore::new(34)), "Balanced");
        assert_eq!(risk_band(RiskScore::new(67)), "Aggressive");
    }
}
