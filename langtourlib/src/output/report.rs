//! Ordered reports of labeled values.
//!
//! A [`Report`] is built once by a demo suite, rendered once, then dropped.
//! Rendering writes the whole report in one go so that banners of
//! different reports never interleave.

use std::io::Write;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::options::PrinterOptions;
use crate::output::banner::{banner, row, rule};
use crate::output::stringify::stringify;
use crate::value::Value;
use crate::Result;

/// A single labeled result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// Text shown in the label column
    pub label: String,
    /// The payload
    pub value: Value,
}

impl Entry {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A titled, ordered sequence of entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    /// Shown in the banner heading
    pub title: String,
    /// Rows in insertion order
    pub entries: Vec<Entry>,
}

impl Report {
    /// Create an empty report.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Builder: append a labeled value.
    pub fn entry(mut self, label: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(label, value);
        self
    }

    /// Append a labeled value.
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<Value>) {
        self.entries.push(Entry::new(label, value));
    }

    /// Builder: append every entry a supplier produces.
    ///
    /// A supplier returning `None` contributes no rows.
    pub fn section<F, I>(mut self, supplier: F) -> Self
    where
        F: FnOnce() -> Option<I>,
        I: IntoIterator<Item = Entry>,
    {
        if let Some(entries) = supplier() {
            self.entries.extend(entries);
        }
        self
    }

    /// Number of body rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the report has no body rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render every line of the report, banners included.
    pub fn lines(&self, timestamp: NaiveDateTime, options: &PrinterOptions) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 4);
        lines.extend(banner(&self.title, timestamp, options));
        lines.extend(
            self.entries
                .iter()
                .map(|e| row(&e.label, &stringify(&e.value), options)),
        );
        lines.push(rule(&self.title, options));
        lines
    }

    /// Render the report into a single newline-terminated string.
    pub fn render_to_string(&self, timestamp: NaiveDateTime, options: &PrinterOptions) -> String {
        let mut out = String::new();
        for line in self.lines(timestamp, options) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Render the report into a writer with a single write call.
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        timestamp: NaiveDateTime,
        options: &PrinterOptions,
    ) -> Result<()> {
        let text = self.render_to_string(timestamp, options);
        out.write_all(text.as_bytes())?;
        out.flush()?;
        tracing::trace!(title = %self.title, rows = self.len(), "rendered report");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    fn sample_report() -> Report {
        Report::new("Sample")
            .entry("first", 1)
            .entry("second", vec!["a", "b"])
            .entry("third", None::<i32>)
    }

    #[test]
    fn test_layout_banner_rows_footer() {
        let opts = PrinterOptions::default();
        let report = sample_report();
        let lines = report.lines(sample_time(), &opts);

        assert_eq!(lines.len(), 3 + report.len() + 1);
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[0], lines[lines.len() - 1]);
        assert_eq!(lines[1], "  Sample  |  05/01/2024 14:30:00");
        assert_eq!(lines[3], format!("{:<50} : 1", "first"));
        assert_eq!(lines[4], format!("{:<50} : [a, b]", "second"));
        assert_eq!(lines[5], format!("{:<50} : Optional.empty", "third"));
    }

    #[test]
    fn test_empty_report_prints_only_banners() {
        let opts = PrinterOptions::default();
        let lines = Report::new("Empty").lines(sample_time(), &opts);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], lines[3]);
    }

    #[test]
    fn test_render_writes_whole_report() {
        let opts = PrinterOptions::default();
        let report = sample_report();
        let mut buf = Vec::new();
        report.render(&mut buf, sample_time(), &opts).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, report.render_to_string(sample_time(), &opts));
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn test_section_supplier() {
        let report = Report::new("Sections")
            .section(|| Some(vec![Entry::new("a", 1), Entry::new("b", 2)]))
            .section(|| None::<Vec<Entry>>)
            .entry("c", 3);
        let labels: Vec<&str> = report.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["a", "b", "c"]);
    }

    #[test]
    fn test_report_serializes() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(json["title"], "Sample");
        assert_eq!(json["entries"][0]["label"], "first");
        assert_eq!(json["entries"][0]["value"]["kind"], "int");
    }
}
