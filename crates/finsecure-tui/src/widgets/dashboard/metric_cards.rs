//! Row of aggregate metric cards

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};

use finsecure_core::Metrics;

use crate::theme::{icons, palette, styles};

pub struct MetricCards<'a> {
    metrics: &'a Metrics,
    loading: bool,
    spinner_frame: usize,
}

impl<'a> MetricCards<'a> {
    pub fn new(metrics: &'a Metrics, loading: bool, spinner_frame: usize) -> Self {
        Self {
            metrics,
            loading,
            spinner_frame,
        }
    }
}

impl Widget for MetricCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cards = [
            ("Total Tests", self.metrics.total_tests, palette::TEXT_PRIMARY),
            ("Passed", self.metrics.passed_tests, palette::STATUS_GREEN),
            ("Failed", self.metrics.failed_tests, palette::STATUS_RED),
            (
                "Recommendations",
                self.metrics.total_recommendations,
                palette::ACCENT,
            ),
        ];

        let areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
        for ((title, value, color), card) in cards.into_iter().zip(areas.iter()) {
            let title = if self.loading {
                format!("{} {}", title, icons::spinner(self.spinner_frame))
            } else {
                title.to_string()
            };
            Paragraph::new(value.to_string())
                .alignment(Alignment::Center)
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .block(styles::titled_block(&title, false))
                .render(*card, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_cards_show_counts() {
        let metrics = Metrics {
            total_tests: 12,
            passed_tests: 10,
            failed_tests: 2,
            total_recommendations: 31,
            ..Default::default()
        };
        let mut term = TestTerminal::with_size(100, 3);

        term.render_widget(MetricCards::new(&metrics, false, 0), term.area());

        for text in ["Total Tests", "12", "Passed", "10", "Failed", "Recommendations", "31"] {
            assert!(term.buffer_contains(text), "missing {text}");
        }
    }
}
