//! Banner and row formatting.
//!
//! All functions here are pure: the timestamp and layout are passed in,
//! nothing reads the clock or global state.

use chrono::NaiveDateTime;
use console::{measure_text_width, pad_str, Alignment};

use crate::options::PrinterOptions;

/// The horizontal rule drawn above and below a report.
pub fn rule(title: &str, options: &PrinterOptions) -> String {
    let width = options.rule_width(measure_text_width(title));
    std::iter::repeat(options.rule_char).take(width).collect()
}

/// The `  <title>  |  <timestamp>` heading line.
pub fn heading(title: &str, timestamp: NaiveDateTime, options: &PrinterOptions) -> String {
    format!(
        "  {}  |  {}",
        title,
        timestamp.format(&options.timestamp_format)
    )
}

/// Opening banner: rule, heading, rule.
pub fn banner(title: &str, timestamp: NaiveDateTime, options: &PrinterOptions) -> [String; 3] {
    let line = rule(title, options);
    [line.clone(), heading(title, timestamp, options), line]
}

/// One body line: label padded to the label column, ` : `, then the text.
pub fn row(label: &str, text: &str, options: &PrinterOptions) -> String {
    format!(
        "{} : {}",
        pad_str(label, options.label_width, Alignment::Left, None),
        text
    )
}
