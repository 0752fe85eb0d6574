//! # Output Styling
//!
//! Controls whether reports are coloured. The choice follows the `--color`
//! flag and, in `auto` mode, the usual environment conventions:
//!
//! - `NO_COLOR` - disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - disables colors
//! - `CLICOLOR_FORCE=1` - forces colors even in non-TTY
//! - `TERM=dumb` - disables colors for dumb terminals

use std::env;
use std::fmt::Display;

use clap::ValueEnum;
use console::Style;

/// Value of the `--color` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ColorChoice {
    /// Color when writing to a capable terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

/// Resolved output settings handed to the report renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    pub fn new(choice: ColorChoice) -> Self {
        let use_color = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => detect_color_support(),
        };
        Self { use_color }
    }

    pub fn plain() -> Self {
        Self { use_color: false }
    }

    /// Text for a successful outcome.
    pub fn ok(&self, text: impl Display) -> String {
        self.paint(Style::new().green(), text)
    }

    /// Text for a failed outcome.
    pub fn failure(&self, text: impl Display) -> String {
        self.paint(Style::new().red().bold(), text)
    }

    /// Text for something that needs attention but is not an error.
    pub fn pending(&self, text: impl Display) -> String {
        self.paint(Style::new().yellow(), text)
    }

    /// Secondary detail such as dates and git output.
    pub fn dim(&self, text: impl Display) -> String {
        self.paint(Style::new().dim(), text)
    }

    fn paint(&self, style: Style, text: impl Display) -> String {
        if self.use_color {
            style.force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }
}

fn detect_color_support() -> bool {
    // The presence of the variable (even if empty) disables colors
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
        return false;
    }

    if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
        return true;
    }

    if env::var("TERM").is_ok_and(|v| v == "dumb") {
        return false;
    }

    console::Term::stdout().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_plain_output_is_unstyled() {
        let out = OutputConfig::plain();
        assert_eq!(out.ok("done"), "done");
        assert_eq!(out.failure("failed"), "failed");
        assert_eq!(out.pending("release pending"), "release pending");
        assert_eq!(out.dim(42), "42");
    }

    #[test]
    fn test_colored_output_wraps_text() {
        let out = OutputConfig::new(ColorChoice::Always);
        let styled = out.failure("failed");
        assert!(styled.contains("failed"));
        assert!(styled.contains('\u{1b}'));
    }

    #[test]
    fn test_never_disables_color() {
        assert!(!OutputConfig::new(ColorChoice::Never).use_color);
    }

    #[test]
    #[serial]
    fn test_no_color_env_disables_auto() {
        env::set_var("NO_COLOR", "1");
        let out = OutputConfig::new(ColorChoice::Auto);
        env::remove_var("NO_COLOR");
        assert!(!out.use_color);
    }

    #[test]
    #[serial]
    fn test_always_overrides_no_color() {
        env::set_var("NO_COLOR", "1");
        let out = OutputConfig::new(ColorChoice::Always);
        env::remove_var("NO_COLOR");
        assert!(out.use_color);
    }
}
