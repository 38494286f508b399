//! Status glyphs and the loading spinner

pub const DOT_FILLED: &str = "●";
pub const DOT_EMPTY: &str = "○";
pub const CHECK: &str = "✓";
pub const CROSS: &str = "✗";
pub const WARNING: &str = "⚠";
pub const CURSOR: &str = "▏";

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for an animation frame
pub fn spinner(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner(0), spinner(SPINNER.len()));
        assert_ne!(spinner(0), spinner(1));
    }
}
