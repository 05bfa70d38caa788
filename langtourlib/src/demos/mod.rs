//! The demo suites of the tour.
//!
//! Each suite groups small, independent demos of one language or library
//! feature and turns their results into a [`Report`]. The list of suites is
//! fixed; [`Suite::ALL`] is the order in which a full tour runs.

pub mod closures;
pub mod collections;
pub mod datetime;
pub mod inference;
pub mod iterators;
pub mod option;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TourError;
use crate::output::{print_report_with, Report};
use crate::options::PrinterOptions;
use crate::Result;

/// One named group of demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Suite {
    /// Type inference for local bindings
    Inference,
    /// Immutable collection copies and array shapes
    Collections,
    /// `Option` combinators and strict accessors
    Option,
    /// Dates, times, zones and durations with chrono
    Datetime,
    /// Closures and the `Fn` traits
    Closures,
    /// Iterator adapters and collectors
    Iterators,
}

impl Suite {
    /// Every suite, in tour order.
    pub const ALL: [Suite; 6] = [
        Suite::Inference,
        Suite::Collections,
        Suite::Option,
        Suite::Datetime,
        Suite::Closures,
        Suite::Iterators,
    ];

    /// Command-line name of the suite.
    pub fn name(&self) -> &'static str {
        match self {
            Suite::Inference => "inference",
            Suite::Collections => "collections",
            Suite::Option => "option",
            Suite::Datetime => "datetime",
            Suite::Closures => "closures",
            Suite::Iterators => "iterators",
        }
    }

    /// Names of every suite, in tour order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Suite::name).collect()
    }

    /// Run the suite's demos and collect their results.
    pub fn report(&self) -> Result<Report> {
        tracing::debug!(suite = self.name(), "building report");
        match self {
            Suite::Inference => inference::report(),
            Suite::Collections => collections::report(),
            Suite::Option => option::report(),
            Suite::Datetime => datetime::report(),
            Suite::Closures => closures::report(),
            Suite::Iterators => iterators::report(),
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suite {
    type Err = TourError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Suite::ALL
            .into_iter()
            .find(|suite| suite.name() == wanted)
            .ok_or_else(|| TourError::UnknownSuite(s.to_string()))
    }
}

/// Build and print each suite's report, in the given order.
///
/// Stops at the first suite that fails to build.
pub fn run_suites(suites: &[Suite]) -> Result<()> {
    run_suites_with(suites, &PrinterOptions::default())
}

/// Like [`run_suites`], with explicit layout options.
pub fn run_suites_with(suites: &[Suite], options: &PrinterOptions) -> Result<()> {
    for suite in suites {
        let report = suite.report()?;
        print_report_with(&report, options)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for suite in Suite::ALL {
            assert_eq!(suite.name().parse::<Suite>().unwrap(), suite);
            assert_eq!(suite.to_string(), suite.name());
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("DateTime".parse::<Suite>().unwrap(), Suite::Datetime);
        assert_eq!(" option ".parse::<Suite>().unwrap(), Suite::Option);
    }

    #[test]
    fn test_unknown_suite() {
        let err = "streams".parse::<Suite>().unwrap_err();
        assert!(matches!(err, TourError::UnknownSuite(ref name) if name == "streams"));
        let message = err.to_string();
        assert!(message.contains("streams"));
        assert!(message.contains("inference, collections, option"));
    }

    #[test]
    fn test_every_suite_builds_a_report() {
        for suite in Suite::ALL {
            let report = suite.report().unwrap();
            assert!(!report.title.is_empty());
            assert!(!report.is_empty(), "{} produced no rows", suite);
        }
    }

    #[test]
    fn test_names_in_tour_order() {
        assert_eq!(
            Suite::names(),
            ["inference", "collections", "option", "datetime", "closures", "iterators"]
        );
    }
}
