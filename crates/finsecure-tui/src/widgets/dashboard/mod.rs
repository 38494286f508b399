//! Operator dashboard: tab bar plus the Tests or Users tab body
//!
//! The Tests tab stacks metric cards over the suite launchers and console
//! (left) and the recent test log with portfolio distribution (right).

mod metric_cards;
mod portfolio;
mod test_console;

pub use metric_cards::MetricCards;
pub use portfolio::PortfolioDistribution;
pub use recent_tests::RecentTests;
pub use test_console::{SuiteControls, TestConsole};

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Tabs, Widget},
};

use finsecure_app::{AppState, DashboardTab};

use super::HistoryTable;
use crate::theme::styles;

pub struct Dashboard<'a> {
    state: &'a AppState,
}

impl<'a> Dashboard<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn render_tests_tab(&self, area: Rect, buf: &mut Buffer) {
        let metrics = &self.state.metrics;
        let [cards, rest] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
        MetricCards::new(metrics.snapshot(), metrics.is_loading(), self.state.spinner_frame)
            .render(cards, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(rest);

        let [controls, console] =
            Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).areas(left);
        SuiteControls::new(&self.state.test_run, self.state.spinner_frame).render(controls, buf);
        TestConsole::new(&self.state.test_run).render(console, buf);

        let distribution = &metrics.snapshot().portfolio_distribution;
        let dist_height = u16::try_from(distribution.len())
            .unwrap_or(u16::MAX)
            .max(1)
            .saturating_add(3);
        let [recent, portfolio] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(dist_height)]).areas(right);
        RecentTests::new(&metrics.snapshot().recent_tests).render(recent, buf);
        PortfolioDistribution::new(distribution).render(portfolio, buf);
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [tabs, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let selected = DashboardTab::ALL
            .iter()
            .position(|t| *t == self.state.tab())
            .unwrap_or(0);
        Tabs::new(
            DashboardTab::ALL
                .iter()
                .enumerate()
                .map(|(i, t)| format!("{} {}", i + 1, t.label())),
        )
        .select(selected)
        .style(styles::text_secondary())
        .highlight_style(styles::focused_selected())
        .divider("│")
        .render(tabs, buf);

        match self.state.tab() {
            DashboardTab::Tests => self.render_tests_tab(body, buf),
            DashboardTab::Users => HistoryTable::new(
                self.state.history.entries(),
                self.state.history.is_loading(),
                self.state.spinner_frame,
            )
            .render(body, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{apply, signed_in_state, TestTerminal};
    use finsecure_app::Message;
    use finsecure_core::{Metrics, PortfolioShare};

    #[test]
    fn test_oversized_distribution_still_renders() {
        let mut state = signed_in_state();
        let share = PortfolioShare {
            portfolio_type: "Bonds".into(),
            count: 1,
            avg_risk_score: None,
        };
        apply(
            &mut state,
            Message::MetricsResolved(Metrics {
                portfolio_distribution: vec![share; usize::from(u16::MAX) + 10],
                ..Default::default()
            }),
        );
        let mut term = TestTerminal::new();

        term.render_widget(Dashboard::new(&state), term.area());

        assert!(term.buffer_contains("QA & Testing"));
        assert!(term.buffer_contains("Portfolio Distribution"));
    }
}
