//! Custom widget components

pub mod dashboard;
mod client_panel;
mod header;
mod history_table;
mod login_panel;
mod status_bar;

pub use client_panel::ClientPanel;
pub use dashboard::Dashboard;
pub use header::MainHeader;
pub use history_table::HistoryTable;
pub use login_panel::LoginPanel;
pub use status_bar::StatusBar;

use chrono::{DateTime, Utc};
use ratatui::text::{Line, Span};

use crate::theme::{icons, styles};

/// Table timestamp, or a dash when the backend sent none we could parse
pub(crate) fn format_timestamp(ts: Option<&DateTime<Utc>>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// One labelled input row; `masked` hides the value behind bullets.
pub(crate) fn input_line(label: &str, value: &str, focused: bool, masked: bool) -> Line<'static> {
    let shown = if masked {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };

    let mut spans = vec![
        Span::styled(
            format!("{:>10}: ", label),
            if focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            },
        ),
        Span::styled(shown, styles::text_primary()),
    ];
    if focused {
        spans.push(Span::styled(icons::CURSOR, styles::accent()));
    }
    Line::from(spans)
}
