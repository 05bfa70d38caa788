//! Output formatting: print reports to the console.
//!
//! This module is the result printer. It provides:
//!
//! - **stringify**: total conversion of any [`Value`](crate::Value) into text
//! - **banner**: pure helpers for the rule, heading and row lines
//! - **Report**: the ordered (label, value) sequence and its rendering
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use langtourlib::{PrinterOptions, Report};
//!
//! let report = Report::new("Demo").entry("answer", 42);
//! let at = NaiveDate::from_ymd_opt(2025, 9, 21).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let text = report.render_to_string(at, &PrinterOptions::default());
//! assert!(text.contains("  Demo  |  21/09/2025 10:00:00"));
//! assert!(text.contains("answer"));
//! ```

pub mod banner;
pub mod report;
pub mod stringify;

pub use report::{Entry, Report};
pub use stringify::{stringify, EMPTY_OPTIONAL};

use crate::options::PrinterOptions;
use crate::Result;

/// Print a report to stdout, stamped with the local time.
///
/// The report is rendered first and written while holding the stdout lock.
pub fn print_report(report: &Report) -> Result<()> {
    print_report_with(report, &PrinterOptions::default())
}

/// Like [`print_report`], with explicit layout options.
pub fn print_report_with(report: &Report, options: &PrinterOptions) -> Result<()> {
    let now = chrono::Local::now().naive_local();
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    report.render(&mut lock, now, options)
}
