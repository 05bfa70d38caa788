//! # langtourlib
//!
//! Small, runnable tours of Rust language and standard-library features,
//! printed as aligned console reports.
//!
//! ## Overview
//!
//! The library has two halves:
//!
//! - **Demos** ([`demos`]): independent functions grouped into suites, each
//!   producing a labeled [`Value`]. A suite collects them into a [`Report`].
//! - **Printer** ([`output`]): renders a report as a banner, one aligned row
//!   per entry, and a closing rule. Values of any shape are stringified
//!   recursively.
//!
//! ## Suites
//!
//! - **inference**: type inference for local bindings
//! - **collections**: immutable copies, arrays and lazily drained sequences
//! - **option**: `Option` combinators and strict accessors
//! - **datetime**: chrono dates, times, zones and durations
//! - **closures**: closures and the `Fn` traits
//! - **iterators**: iterator adapters and collectors
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use indexmap::IndexMap;
//! use langtourlib::{stringify, PrinterOptions, Report, Summary, Value};
//!
//! let numbers = IndexMap::from([(1, "um"), (2, "dois")]);
//! assert_eq!(stringify(&Value::from(numbers)), "{1 -> um, 2 -> dois}");
//!
//! let stats: Summary = (1i64..=10).collect();
//! assert_eq!(stats.to_string(), "count=10, sum=55, min=1, max=10, avg=5.50");
//!
//! let report = Report::new("Numbers").entry("summary", stats);
//! let at = NaiveDate::from_ymd_opt(2025, 9, 21).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let text = report.render_to_string(at, &PrinterOptions::default());
//! assert_eq!(text.lines().count(), 5);
//! ```

pub mod demos;
pub mod error;
pub mod options;
pub mod output;
pub mod value;

pub use demos::option::OptionExt;
pub use demos::{run_suites, run_suites_with, Suite};
pub use error::TourError;
pub use options::PrinterOptions;
pub use output::{print_report, print_report_with, stringify, Entry, Report, EMPTY_OPTIONAL};
pub use value::{Summary, Value};

/// Result type for langtourlib operations
pub type Result<T> = std::result::Result<T, TourError>;
