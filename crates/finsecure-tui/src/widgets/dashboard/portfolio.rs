//! Recommendation counts per portfolio type

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    widgets::{Paragraph, Row, Table, Widget},
};

use finsecure_core::PortfolioShare;

use crate::theme::styles;

pub struct PortfolioDistribution<'a> {
    shares: &'a [PortfolioShare],
}

impl<'a> PortfolioDistribution<'a> {
    pub fn new(shares: &'a [PortfolioShare]) -> Self {
        Self { shares }
    }
}

impl Widget for PortfolioDistribution<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Portfolio Distribution", false);

        if self.shares.is_empty() {
            Paragraph::new("No recommendations yet.")
                .style(styles::text_muted())
                .block(block)
                .render(area, buf);
            return;
        }

        let rows = self.shares.iter().map(|share| {
            let avg = share
                .avg_risk_score
                .map(|v| format!("{:.1}", v))
                .unwrap_or_else(|| "-".to_string());
            Row::new(vec![share.portfolio_type.clone(), share.count.to_string(), avg])
        });

        Table::new(
            rows,
            [
                Constraint::Fill(1),
                Constraint::Length(7),
                Constraint::Length(8),
            ],
        )
        .header(Row::new(vec!["Portfolio", "Count", "Avg risk"]).style(styles::accent_bold()))
        .block(block)
        .render(area, buf);
    }
}
