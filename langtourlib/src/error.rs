//! Error types for langtourlib

use thiserror::Error;

/// Errors that can occur while building or printing a tour report
#[derive(Error, Debug)]
pub enum TourError {
    /// A value was requested from an empty `Option`
    #[error("missing value: {0}")]
    MissingValue(String),

    /// Text could not be parsed as a date or time
    #[error("invalid date '{input}': {source}")]
    InvalidDate {
        input: String,
        source: chrono::ParseError,
    },

    /// Time zone identifier is not in the tz database
    #[error("unknown time zone: {0}")]
    UnknownTimezone(String),

    /// Suite name is not part of the tour
    #[error("unknown suite '{0}' (expected one of: {names})", names = crate::demos::Suite::names().join(", "))]
    UnknownSuite(String),

    /// A date computation left the supported calendar range
    #[error("date out of range: {0}")]
    DateOutOfRange(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
