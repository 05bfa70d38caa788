//! Type inference for local bindings.
//!
//! None of the bindings below spell out a type; the compiler infers each one
//! from its initializer or, for integer literals, from later use.

use std::any::type_name;

use crate::output::Report;
use crate::value::Value;
use crate::Result;

pub const TITLE: &str = "Type inference - demonstrations";

/// Name of the type the compiler picked for `value`.
pub fn type_of<T>(_: &T) -> &'static str {
    type_name::<T>()
}

/// An integer literal with no other constraint defaults to `i32`.
pub fn integer() -> (i32, &'static str) {
    let x = 10;
    (x, type_of(&x))
}

/// A float literal with no other constraint defaults to `f64`.
pub fn float() -> (f64, &'static str) {
    let y = 20.0;
    (y, type_of(&y))
}

#[allow(clippy::let_and_return)]
pub fn text() -> &'static str {
    let z = "Hello World!";
    z
}

/// Mixed arithmetic needs an explicit conversion; the sum is inferred `f64`.
#[allow(clippy::let_and_return)]
pub fn mixed_sum() -> f64 {
    let x = 10;
    let y = 20.0;
    let xy = f64::from(x) + y;
    xy
}

/// The element type of the vector is inferred from its literals.
#[allow(clippy::let_and_return)]
pub fn inferred_vec() -> Vec<&'static str> {
    let list = vec!["A", "B"];
    list
}

/// The element type of an empty vector is inferred from a later push.
#[allow(clippy::vec_init_then_push)]
pub fn inferred_from_use() -> (Vec<u8>, &'static str) {
    let mut bytes = Vec::new();
    bytes.push(b'R');
    let name = type_of(&bytes);
    (bytes, name)
}

/// `collect` infers its target from the binding's annotation.
#[allow(clippy::let_and_return)]
pub fn inferred_collect() -> String {
    let shout: String = "inferred".chars().map(|c| c.to_ascii_uppercase()).collect();
    shout
}

/// A closure's parameter and return types are inferred from its first call.
pub fn inferred_closure() -> i64 {
    let square = |n| n * n;
    square(12i64)
}

pub fn report() -> Result<Report> {
    let (x, x_type) = integer();
    let (y, y_type) = float();
    let (bytes, bytes_type) = inferred_from_use();

    Ok(Report::new(TITLE)
        .entry("let x = 10", x)
        .entry("let y = 20.0", y)
        .entry("let z = \"Hello World!\"", text())
        .entry("x + y (after f64::from)", mixed_sum())
        .entry("let list = vec![\"A\", \"B\"]", inferred_vec())
        .entry("type of x", x_type)
        .entry("type of y", y_type)
        .entry("Vec::new() then push(b'R')", bytes)
        .entry("type of that Vec", bytes_type)
        .entry("collect() into annotated binding", inferred_collect())
        .entry("closure |n| n * n called with 12i64", inferred_closure())
        .entry("type of an empty tuple", Value::from(type_of(&()))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_literal_types() {
        assert_eq!(integer(), (10, "i32"));
        assert_eq!(float(), (20.0, "f64"));
    }

    #[test]
    fn test_mixed_sum() {
        assert_eq!(mixed_sum(), 30.0);
        assert_eq!(Value::from(mixed_sum()).to_string(), "30.0");
    }

    #[test]
    fn test_inferred_collections() {
        assert_eq!(inferred_vec(), ["A", "B"]);
        let (bytes, name) = inferred_from_use();
        assert_eq!(bytes, b"R");
        assert!(name.ends_with("Vec<u8>"));
        assert_eq!(inferred_collect(), "INFERRED");
    }

    #[test]
    fn test_inferred_closure() {
        assert_eq!(inferred_closure(), 144);
    }

    #[test]
    fn test_report_rows() {
        let report = report().unwrap();
        assert_eq!(report.title, TITLE);
        assert_eq!(report.entries[0].value.to_string(), "10");
        assert_eq!(report.entries[1].value.to_string(), "20.0");
        assert_eq!(report.entries[4].value.to_string(), "[A, B]");
    }
}
