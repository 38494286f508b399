//! Semantic style builders.

use finsecure_app::flows::HealthCheck;
use finsecure_core::TestStatus;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::{icons, palette};

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for the focused input and the active tab
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

/// Glass block with a padded title
pub fn titled_block(title: &str, focused: bool) -> Block<'static> {
    glass_block(focused).title(format!(" {} ", title))
}

// --- Indicator mapping ---

/// `(icon, label, style)` for a health probe result
pub fn health_indicator(check: &HealthCheck) -> (&'static str, String, Style) {
    match check {
        HealthCheck::Unknown => (icons::DOT_EMPTY, "unchecked".to_string(), text_muted()),
        HealthCheck::Healthy { database } => (
            icons::DOT_FILLED,
            format!("healthy (db {})", database),
            status_green().add_modifier(Modifier::BOLD),
        ),
        HealthCheck::Degraded { status, database } => (
            icons::WARNING,
            format!("{} (db {})", status, database),
            status_yellow(),
        ),
        HealthCheck::Unreachable { .. } => {
            (icons::CROSS, "unreachable".to_string(), status_red())
        }
    }
}

/// `(icon, style)` for a recorded test status
pub fn test_status_indicator(status: &TestStatus) -> (&'static str, Style) {
    match status {
        TestStatus::Passed => (icons::CHECK, status_green()),
        TestStatus::Failed => (icons::CROSS, status_red()),
        TestStatus::Other(_) => (icons::DOT_EMPTY, status_yellow()),
    }
}
