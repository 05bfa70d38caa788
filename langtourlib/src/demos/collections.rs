//! Immutable collection copies and the shapes the printer normalizes.

use std::collections::BTreeSet;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::output::Report;
use crate::value::Value;
use crate::Result;

pub const TITLE: &str = "Immutable collections - demonstrations";

fn names() -> Vec<String> {
    vec!["Ana".to_string(), "João".to_string()]
}

/// A boxed slice is a fixed-length copy: it cannot grow or shrink.
pub fn boxed_copy(source: &[String]) -> Box<[String]> {
    source.to_vec().into_boxed_slice()
}

/// An `Arc<[T]>` is an immutable copy that can be shared cheaply.
pub fn shared_copy(source: &[String]) -> Arc<[String]> {
    Arc::from(source)
}

/// Copy into an ordered set, dropping duplicates.
pub fn set_copy(source: &[String]) -> BTreeSet<String> {
    source.iter().cloned().collect()
}

/// Copy a map, keeping insertion order.
pub fn map_copy(source: &IndexMap<i32, &'static str>) -> IndexMap<i32, &'static str> {
    source.clone()
}

/// Later changes to the source do not reach an earlier copy.
pub fn copy_is_independent() -> (Vec<String>, Box<[String]>) {
    let mut source = names();
    let copy = boxed_copy(&source);
    source.push("Bia".to_string());
    (source, copy)
}

/// Powers of three produced lazily and drained exactly once.
pub fn powers_of_three(n: usize) -> Value {
    Value::drain(std::iter::successors(Some(1u64), |p| p.checked_mul(3)).take(n))
}

pub fn report() -> Result<Report> {
    let source = names();
    let numbers = IndexMap::from([(1, "um"), (2, "dois")]);
    let (grown, copy) = copy_is_independent();

    Ok(Report::new(TITLE)
        .entry("boxed slice copy", boxed_copy(&source))
        .entry("Arc<[String]> copy", Value::from(&shared_copy(&source)[..]))
        .entry("BTreeSet copy", set_copy(&source))
        .entry("IndexMap copy", map_copy(&numbers))
        .entry("source after push", grown)
        .entry("copy taken before push", copy)
        .entry("[i32; 3]", [3, 1, 2])
        .entry("[f64; 3]", [0.5, 1.0, 1.5])
        .entry("[bool; 2]", [true, false])
        .entry("[char; 4]", ['r', 'u', 's', 't'])
        .entry("b\"loc\" (bytes)", *b"loc")
        .entry("lazy successors, drained once", powers_of_three(5)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copies_hold_same_elements() {
        let source = names();
        assert_eq!(&*boxed_copy(&source), &source[..]);
        assert_eq!(&*shared_copy(&source), &source[..]);
        assert_eq!(Value::from(set_copy(&source)).to_string(), "[Ana, João]");
    }

    #[test]
    fn test_set_copy_drops_duplicates() {
        let source = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        assert_eq!(set_copy(&source).len(), 2);
    }

    #[test]
    fn test_map_copy_keeps_order() {
        let numbers = IndexMap::from([(1, "um"), (2, "dois")]);
        assert_eq!(
            Value::from(map_copy(&numbers)).to_string(),
            "{1 -> um, 2 -> dois}"
        );
    }

    #[test]
    fn test_copy_is_independent() {
        let (grown, copy) = copy_is_independent();
        assert_eq!(grown.len(), 3);
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn test_powers_of_three() {
        assert_eq!(powers_of_three(5).to_string(), "[1, 3, 9, 27, 81]");
        assert_eq!(powers_of_three(0).to_string(), "[]");
    }

    #[test]
    fn test_report_array_rows() {
        let report = report().unwrap();
        let find = |label: &str| {
            report
                .entries
                .iter()
                .find(|e| e.label == label)
                .map(|e| e.value.to_string())
                .unwrap()
        };
        assert_eq!(find("[f64; 3]"), "[0.5, 1.0, 1.5]");
        assert_eq!(find("[char; 4]"), "[r, u, s, t]");
        assert_eq!(find("b\"loc\" (bytes)"), "[108, 111, 99]");
    }
}
