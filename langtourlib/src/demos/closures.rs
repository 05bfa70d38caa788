//! Closures and the `Fn` traits.
//!
//! Each demo stores a closure in a binding typed only by the trait it
//! implements (`impl Fn`, `impl FnMut`, `impl FnOnce`), then calls it.

use rand::Rng;

use crate::output::Report;
use crate::value::Value;
use crate::Result;

pub const TITLE: &str = "Closures and Fn traits - demonstrations";

/// A two-argument integer operation with a provided method.
///
/// Any `Fn(i32, i32) -> i32` closure is a `Calculator`.
pub trait Calculator {
    fn apply(&self, x: i32, y: i32) -> i32;

    /// Twice the result of [`Calculator::apply`].
    fn doubled(&self, x: i32, y: i32) -> i32 {
        self.apply(x, y) * 2
    }
}

impl<F> Calculator for F
where
    F: Fn(i32, i32) -> i32,
{
    fn apply(&self, x: i32, y: i32) -> i32 {
        self(x, y)
    }
}

/// Addition as a calculator.
pub fn sum() -> impl Calculator {
    |a: i32, b: i32| a + b
}

/// Multiplication as a calculator.
pub fn multiply() -> impl Calculator {
    |a: i32, b: i32| a * b
}

pub fn predicate(name: &str) -> bool {
    let is_not_empty = |s: &str| !s.is_empty();
    is_not_empty(name)
}

pub fn function(value: i32) -> String {
    let to_label = |n: i32| format!("Number: {n}");
    to_label(value)
}

pub fn supplier() -> Value {
    let now = chrono::Local::now;
    Value::display(now().format("%Y-%m-%d %H:%M:%S"))
}

/// An `FnMut` closure appending into a captured buffer.
pub fn consumer(message: &str) -> String {
    let mut buf = String::new();
    let mut record = |s: &str| {
        buf.push_str("Consumer received: ");
        buf.push_str(s);
    };
    record(message);
    buf
}

pub fn bi_function(a: i32, b: i32) -> i32 {
    let add = |x: i32, y: i32| x + y;
    add(a, b)
}

pub fn unary_operator(text: &str) -> String {
    let upper = str::to_uppercase;
    upper(text)
}

pub fn binary_operator(a: i32, b: i32) -> i32 {
    let larger = std::cmp::max::<i32>;
    larger(a, b)
}

pub fn bi_predicate(text: &str, n: usize) -> bool {
    let longer_than = |s: &str, i: usize| s.chars().count() > i;
    longer_than(text, n)
}

pub fn bi_consumer(name: &str, age: u32) -> String {
    let mut buf = String::new();
    let mut record = |n: &str, a: u32| buf.push_str(&format!("{n} is {a} years old"));
    record(name, age);
    buf
}

pub fn to_int_function(text: &str) -> usize {
    let length = str::len;
    length(text)
}

/// A die roll in `1..=6`.
pub fn int_supplier() -> u32 {
    let mut rng = rand::thread_rng();
    let mut roll = move || rng.gen_range(1..=6);
    roll()
}

/// An `FnOnce` closure that moves its capture out.
pub fn fn_once(name: String) -> String {
    let consume = move || name + " (moved)";
    consume()
}

/// A closure returned from a function, capturing its argument.
pub fn make_adder(n: i32) -> impl Fn(i32) -> i32 {
    move |x| x + n
}

pub fn custom_calculator() -> i32 {
    let calc = |x: i32, y: i32| x * y;
    calc.apply(2, 5)
}

pub fn custom_calculator_provided() -> i32 {
    let calc = |x: i32, y: i32| x * y;
    calc.doubled(2, 5)
}

pub fn custom_calculator_constructors() -> i32 {
    let total = sum().apply(5, 5);
    let product = multiply().apply(2, 5);
    multiply().doubled(total, product)
}

pub fn report() -> Result<Report> {
    Ok(Report::new(TITLE)
        .entry("Fn(&str) -> bool (non-empty 'Willian')", predicate("Willian"))
        .entry("Fn(&str) -> bool (non-empty '')", predicate(""))
        .entry("Fn(i32) -> String (label)", function(42))
        .entry("Fn() -> DateTime (current time)", supplier())
        .entry("FnMut(&str) (appends to buffer)", consumer("Hello students!"))
        .entry("Fn(i32, i32) -> i32 (2 + 3)", bi_function(2, 3))
        .entry("fn item as closure (uppercase)", unary_operator("hello"))
        .entry("std::cmp::max (10 vs 20)", binary_operator(10, 20))
        .entry("Fn(&str, usize) -> bool (len > n)", bi_predicate("Will", 2))
        .entry("FnMut(&str, u32) (name + age)", bi_consumer("Ana", 25))
        .entry("str::len (string length)", to_int_function("Willian"))
        .entry("FnMut() -> u32 (die 1-6)", int_supplier())
        .entry("FnOnce() (moves capture)", fn_once("Robin".to_string()))
        .entry("returned closure (adder(5)(10))", make_adder(5)(10))
        .entry("Custom Calculator", custom_calculator())
        .entry("Custom Calculator provided method", custom_calculator_provided())
        .entry("Custom Calculator constructors", custom_calculator_constructors()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculator() {
        assert_eq!(custom_calculator(), 10);
        assert_eq!(custom_calculator_provided(), 20);
        assert_eq!(custom_calculator_constructors(), 200);
        assert_eq!(sum().doubled(1, 2), 6);
    }

    #[test]
    fn test_basic_closures() {
        assert!(predicate("Willian"));
        assert!(!predicate(""));
        assert_eq!(function(42), "Number: 42");
        assert_eq!(consumer("hi"), "Consumer received: hi");
        assert_eq!(bi_function(2, 3), 5);
        assert_eq!(unary_operator("hello"), "HELLO");
        assert_eq!(binary_operator(10, 20), 20);
        assert!(bi_predicate("Will", 2));
        assert!(!bi_predicate("Wi", 2));
        assert_eq!(bi_consumer("Ana", 25), "Ana is 25 years old");
        assert_eq!(to_int_function("Willian"), 7);
    }

    #[test]
    fn test_captures() {
        assert_eq!(fn_once("Robin".to_string()), "Robin (moved)");
        let add5 = make_adder(5);
        assert_eq!(add5(10), 15);
        assert_eq!(add5(-5), 0);
    }

    #[test]
    fn test_die_roll_in_range() {
        for _ in 0..100 {
            let roll = int_supplier();
            assert!((1..=6).contains(&roll));
        }
    }
}
