//! `Option` combinators and strict accessors.
//!
//! Most demos take an `Option<&str>` so the report can show the same
//! combinator with a present and an absent input side by side.

use crate::error::TourError;
use crate::output::Report;
use crate::Result;

pub const TITLE: &str = "Option - demonstrations";

/// Strict accessors that turn an absent value into [`TourError::MissingValue`].
pub trait OptionExt<T> {
    /// The value, or a "no value present" error.
    fn present(self) -> Result<T>;

    /// The value, or an error carrying `message`.
    fn or_missing(self, message: impl Into<String>) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn present(self) -> Result<T> {
        self.ok_or_else(|| TourError::MissingValue("no value present".to_string()))
    }

    fn or_missing(self, message: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| TourError::MissingValue(message.into()))
    }
}

pub fn some_value() -> String {
    let opt = Some("Present value");
    format!("Some: {}", opt.unwrap_or_default())
}

pub fn from_nullable(value: Option<&str>) -> String {
    match value {
        Some(v) => format!("Some({v}) -> {v}"),
        None => "None -> default applied".to_string(),
    }
}

pub fn unwrap_or(value: Option<&str>) -> String {
    let result = value.unwrap_or("Default substitute");
    match value {
        Some(v) => format!("Input '{v}', kept: {result}"),
        None => format!("Input None, returned: {result}"),
    }
}

pub fn unwrap_or_else(value: Option<&str>) -> String {
    let result = value.map_or_else(|| "Built by closure".to_string(), str::to_string);
    match value {
        Some(v) => format!("Input '{v}', kept: {result}"),
        None => format!("Input None, closure built: {result}"),
    }
}

pub fn is_some_if_let(name: Option<&str>) -> String {
    let mut out = String::new();
    if name.is_some() {
        out.push_str("is_some=true");
    } else {
        out.push_str("is_some=false");
    }
    if let Some(v) = name {
        out.push_str(" | if let consumed: ");
        out.push_str(&v.to_uppercase());
    }
    out
}

/// Strict accessor with a custom message. Fails on `None`.
pub fn or_missing(value: Option<&str>) -> Result<String> {
    value.map(str::to_string).or_missing("value absent!")
}

pub fn map_upper(word: Option<&str>) -> String {
    word.map(str::to_uppercase)
        .unwrap_or_else(|| "Nothing to map".to_string())
}

pub fn and_then(value: Option<&str>) -> String {
    value
        .and_then(|v| (!v.is_empty()).then(|| format!("Chained: {v}")))
        .unwrap_or_else(|| "Empty".to_string())
}

pub fn filter_starts_with_f(name: Option<&str>) -> String {
    name.filter(|n| n.starts_with('F'))
        .map_or_else(|| "Does not start with F".to_string(), str::to_string)
}

/// Plain accessor. Fails on `None`.
pub fn present(value: Option<&str>) -> Result<String> {
    Ok(format!("present() -> {}", value.present()?))
}

/// `?` on `Option` inside a function that itself returns `Option`.
pub fn first_initial(name: Option<&str>) -> Option<char> {
    let first = name?.chars().next()?;
    Some(first.to_ascii_uppercase())
}

pub fn report() -> Result<Report> {
    Ok(Report::new(TITLE)
        .entry("Some (present value)", some_value())
        .entry("from Option (Some)", from_nullable(Some("Batman")))
        .entry("from Option (None)", from_nullable(None))
        .entry("unwrap_or (Some)", unwrap_or(Some("Superman")))
        .entry("unwrap_or (None)", unwrap_or(None))
        .entry("unwrap_or_else (Some)", unwrap_or_else(Some("Flash")))
        .entry("unwrap_or_else (None)", unwrap_or_else(None))
        .entry("is_some / if let", is_some_if_let(Some("Aquaman")))
        // an absent input here would end the tour with a missing-value error
        .entry("or_missing (Some)", or_missing(Some("Coringa"))?)
        .entry("map (transform)", map_upper(Some("rust")))
        .entry("map (None)", map_upper(None))
        .entry("and_then (chaining Options)", and_then(Some("hello")))
        .entry("and_then (None)", and_then(None))
        .entry("filter (condition met)", filter_starts_with_f(Some("Flash")))
        .entry("filter (condition not met)", filter_starts_with_f(Some("Batman")))
        .entry("present (value present)", present(Some("Arlequina"))?)
        .entry("? operator (Some)", first_initial(Some("robin")))
        .entry("? operator (None)", first_initial(None)))
}
