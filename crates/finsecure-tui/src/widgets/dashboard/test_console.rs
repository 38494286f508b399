//! Suite launchers and the console showing the last run's output

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use finsecure_app::flows::TestRunFlow;
use finsecure_core::TestSuite;

use crate::theme::{icons, palette, styles};

/// Launcher key for a suite
fn suite_key(suite: TestSuite) -> char {
    match suite {
        TestSuite::Compliance => 'c',
        TestSuite::Security => 's',
    }
}

pub struct SuiteControls<'a> {
    flow: &'a TestRunFlow,
    spinner_frame: usize,
}

impl<'a> SuiteControls<'a> {
    pub fn new(flow: &'a TestRunFlow, spinner_frame: usize) -> Self {
        Self {
            flow,
            spinner_frame,
        }
    }

    fn suite_lines(&self, suite: TestSuite) -> [Line<'static>; 2] {
        let running = self.flow.running_suite() == Some(suite);
        let disabled = self.flow.is_running() && !running;

        let key_style = if disabled {
            styles::text_muted()
        } else {
            styles::keybinding()
        };
        let mut title = vec![
            Span::styled(" [", styles::text_muted()),
            Span::styled(suite_key(suite).to_string(), key_style),
            Span::styled("] ", styles::text_muted()),
            Span::styled(suite.label(), styles::text_primary()),
        ];
        if running {
            title.push(Span::styled(
                format!("  {} Running...", icons::spinner(self.spinner_frame)),
                styles::status_yellow(),
            ));
        }

        [
            Line::from(title),
            Line::from(Span::styled(
                format!("     {}", suite.description()),
                styles::text_muted(),
            )),
        ]
    }
}

impl Widget for SuiteControls<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = TestSuite::ALL
            .into_iter()
            .flat_map(|suite| self.suite_lines(suite))
            .collect();

        Paragraph::new(lines)
            .block(styles::titled_block("Test Suites", false))
            .render(area, buf);
    }
}

pub struct TestConsole<'a> {
    flow: &'a TestRunFlow,
}

impl<'a> TestConsole<'a> {
    pub fn new(flow: &'a TestRunFlow) -> Self {
        Self { flow }
    }
}

impl Widget for TestConsole<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match (self.flow.last_suite(), self.flow.last_return_code()) {
            (Some(suite), Some(code)) if !self.flow.is_running() => {
                format!("Console: {} (exit {})", suite, code)
            }
            (Some(suite), _) => format!("Console: {}", suite),
            (None, _) => "Console".to_string(),
        };

        let body = if self.flow.output().is_empty() {
            Paragraph::new("Run a test suite to see its output here.").style(styles::text_muted())
        } else {
            Paragraph::new(self.flow.output().to_string())
                .style(Style::default().fg(palette::CONSOLE_TEXT))
        };

        body.wrap(Wrap { trim: false })
            .block(styles::titled_block(&title, self.flow.is_running()))
            .render(area, buf);
    }
}
