//! Layout options for the result printer.
//!
//! The defaults reproduce the classic report layout: a `═` rule at least
//! 60 columns wide, labels padded to 50 columns and a `dd/mm/yyyy HH:MM:SS`
//! timestamp next to the title.

use serde::Serialize;

/// Default column width of the label column.
pub const DEFAULT_LABEL_WIDTH: usize = 50;

/// Default minimum width of the banner rule.
pub const DEFAULT_MIN_RULE_WIDTH: usize = 60;

/// Default number of columns added to the title width for the rule.
pub const DEFAULT_TITLE_MARGIN: usize = 80;

/// Default banner rule character.
pub const DEFAULT_RULE_CHAR: char = '═';

/// Default strftime pattern for the banner timestamp.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Configuration for report rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrinterOptions {
    /// Labels are left-justified and padded to this many columns
    pub label_width: usize,
    /// The banner rule is never narrower than this
    pub min_rule_width: usize,
    /// Columns added to the title width when sizing the rule
    pub title_margin: usize,
    /// Character repeated to draw the rule
    pub rule_char: char,
    /// strftime-style pattern for the banner timestamp
    pub timestamp_format: String,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            label_width: DEFAULT_LABEL_WIDTH,
            min_rule_width: DEFAULT_MIN_RULE_WIDTH,
            title_margin: DEFAULT_TITLE_MARGIN,
            rule_char: DEFAULT_RULE_CHAR,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl PrinterOptions {
    /// Create options with the default layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the label column width
    pub fn label_width(mut self, width: usize) -> Self {
        self.label_width = width;
        self
    }

    /// Builder: set the minimum rule width
    pub fn min_rule_width(mut self, width: usize) -> Self {
        self.min_rule_width = width;
        self
    }

    /// Builder: set the title margin
    pub fn title_margin(mut self, margin: usize) -> Self {
        self.title_margin = margin;
        self
    }

    /// Builder: set the rule character
    pub fn rule_char(mut self, c: char) -> Self {
        self.rule_char = c;
        self
    }

    /// Builder: set the timestamp pattern
    pub fn timestamp_format(mut self, pattern: impl Into<String>) -> Self {
        self.timestamp_format = pattern.into();
        self
    }

    /// Width of the banner rule for a title of the given display width.
    pub fn rule_width(&self, title_width: usize) -> usize {
        self.min_rule_width.max(title_width + self.title_margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = PrinterOptions::default();
        assert_eq!(opts.label_width, 50);
        assert_eq!(opts.min_rule_width, 60);
        assert_eq!(opts.title_margin, 80);
        assert_eq!(opts.rule_char, '═');
        assert_eq!(opts.timestamp_format, "%d/%m/%Y %H:%M:%S");
    }

    #[test]
    fn test_rule_width_uses_title_margin() {
        let opts = PrinterOptions::default();
        assert_eq!(opts.rule_width(0), 80);
        assert_eq!(opts.rule_width(30), 110);
    }

    #[test]
    fn test_rule_width_respects_minimum() {
        let opts = PrinterOptions::new().title_margin(0);
        assert_eq!(opts.rule_width(10), 60);
        assert_eq!(opts.rule_width(75), 75);
    }

    #[test]
    fn test_builder() {
        let opts = PrinterOptions::new()
            .label_width(10)
            .rule_char('-')
            .timestamp_format("%Y");
        assert_eq!(opts.label_width, 10);
        assert_eq!(opts.rule_char, '-');
        assert_eq!(opts.timestamp_format, "%Y");
    }
}
