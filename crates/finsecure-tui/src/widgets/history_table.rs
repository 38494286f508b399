//! Recommendation history table for the User Data tab

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    widgets::{Cell, Paragraph, Row, Table, Widget},
};

use finsecure_core::HistoryEntry;

use super::format_timestamp;
use crate::theme::{icons, styles};

pub struct HistoryTable<'a> {
    entries: &'a [HistoryEntry],
    loading: bool,
    spinner_frame: usize,
}

impl<'a> HistoryTable<'a> {
    pub fn new(entries: &'a [HistoryEntry], loading: bool, spinner_frame: usize) -> Self {
        Self {
            entries,
            loading,
            spinner_frame,
        }
    }

    fn title(&self) -> String {
        let mut title = format!("Recommendation History ({})", self.entries.len());
        if self.loading {
            title.push(' ');
            title.push_str(icons::spinner(self.spinner_frame));
        }
        title
    }
}

impl Widget for HistoryTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block(&self.title(), false);

        if self.entries.is_empty() {
            let text = if self.loading {
                "Loading history..."
            } else {
                "No recommendations yet."
            };
            Paragraph::new(text)
                .style(styles::text_muted())
                .block(block)
                .render(area, buf);
            return;
        }

        let rows = self.entries.iter().map(|entry| {
            Row::new(vec![
                Cell::from(entry.id.to_string()).style(styles::text_muted()),
                Cell::from(entry.client_name.clone()),
                Cell::from(entry.risk_score.to_string()),
                Cell::from(entry.portfolio_type.clone()).style(styles::accent()),
                Cell::from(format_timestamp(entry.timestamp.as_ref())).style(styles::text_secondary()),
            ])
        });

        Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Fill(2),
                Constraint::Length(5),
                Constraint::Fill(1),
                Constraint::Length(19),
            ],
        )
        .header(
            Row::new(vec!["ID", "Client", "Risk", "Portfolio", "Timestamp"])
                .style(styles::accent_bold()),
        )
        .column_spacing(2)
        .block(block)
        .render(area, buf);
    }
}
