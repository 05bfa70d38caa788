//! Dynamically shaped values that can be placed in a report.
//!
//! Every demo produces a [`Value`]. The set of shapes is closed (scalars,
//! optionals, summaries, sequences and maps) with an [`Value::Other`]
//! fallback for anything else that has a textual form.
//!
//! Arrays, slices and sets are normalized into [`Value::Seq`] at the
//! conversion boundary, and any iterator can be drained into one exactly
//! once with [`Value::drain`] or `collect()`:
//!
//! ```rust
//! use langtourlib::Value;
//!
//! let doubled: Value = (1..=3).map(|n| n * 2).collect();
//! assert_eq!(doubled.to_string(), "[2, 4, 6]");
//!
//! let packed = Value::from([true, false]);
//! assert_eq!(packed.to_string(), "[true, false]");
//! ```

pub mod summary;

pub use summary::Summary;

use indexmap::IndexMap;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::hash::BuildHasher;

/// A report payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// Absent marker
    Null,
    /// Text scalar
    Text(String),
    /// Signed integer scalar
    Int(i64),
    /// Unsigned integer scalar
    UInt(u64),
    /// Floating point scalar
    Float(f64),
    /// Boolean scalar
    Bool(bool),
    /// Single character scalar
    Char(char),
    /// Named constant, rendered by its declared name
    Constant(Cow<'static, str>),
    /// A present or absent inner value
    Optional(Option<Box<Value>>),
    /// Count/sum/min/max/average record
    Summary(Summary),
    /// Ordered sequence (also arrays, sets and drained iterators)
    Seq(Vec<Value>),
    /// Associative mapping as ordered key/value pairs
    Map(Vec<(Value, Value)>),
    /// Fallback: the payload's own textual form
    Other(String),
}

impl Value {
    /// The absent marker.
    pub fn null() -> Self {
        Value::Null
    }

    /// A named constant such as an enum variant name.
    pub fn constant(name: impl Into<Cow<'static, str>>) -> Self {
        Value::Constant(name.into())
    }

    /// Fallback value using the payload's `Display` form.
    pub fn display(payload: impl fmt::Display) -> Self {
        Value::Other(payload.to_string())
    }

    /// Fallback value using the payload's `Debug` form.
    pub fn debug(payload: impl fmt::Debug) -> Self {
        Value::Other(format!("{:?}", payload))
    }

    /// Drain a one-shot sequence into a [`Value::Seq`].
    ///
    /// The iterator is consumed here, so it is materialized exactly once no
    /// matter how many times the resulting value is printed.
    pub fn drain<I>(iter: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        iter.into_iter().collect()
    }

    /// Build a [`Value::Map`] from key/value pairs, keeping their order.
    pub fn map<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Value::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::output::stringify(self))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Text(s.clone())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Int(n as i64)
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::UInt(n as u64)
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<Summary> for Value {
    fn from(s: Summary) -> Self {
        Value::Summary(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        Value::Optional(opt.map(|v| Box::new(v.into())))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::drain(items)
    }
}

impl<T: Into<Value>> From<Box<[T]>> for Value {
    fn from(items: Box<[T]>) -> Self {
        Value::drain(items.into_vec())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::drain(items)
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::drain(items.iter().cloned())
    }
}

impl<T: Into<Value>> From<BTreeSet<T>> for Value {
    fn from(items: BTreeSet<T>) -> Self {
        Value::drain(items)
    }
}

impl<T: Into<Value>, S: BuildHasher> From<HashSet<T, S>> for Value {
    fn from(items: HashSet<T, S>) -> Self {
        Value::drain(items)
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(map: BTreeMap<K, V>) -> Self {
        Value::map(map)
    }
}

impl<K: Into<Value>, V: Into<Value>, S: BuildHasher> From<HashMap<K, V, S>> for Value {
    fn from(map: HashMap<K, V, S>) -> Self {
        Value::map(map)
    }
}

impl<K: Into<Value>, V: Into<Value>, S> From<IndexMap<K, V, S>> for Value {
    fn from(map: IndexMap<K, V, S>) -> Self {
        Value::map(map)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Seq(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_convert() {
        assert_eq!(Value::from("a"), Value::Text("a".to_string()));
        assert_eq!(Value::from(-3i32), Value::Int(-3));
        assert_eq!(Value::from(3usize), Value::UInt(3));
        assert_eq!(Value::from(1.5f32), Value::Float(1.5));
        assert_eq!(Value::from('x'), Value::Char('x'));
    }

    #[test]
    fn test_option_converts_to_optional() {
        assert_eq!(
            Value::from(Some(2u8)),
            Value::Optional(Some(Box::new(Value::UInt(2))))
        );
        assert_eq!(Value::from(None::<String>), Value::Optional(None));
    }

    #[test]
    fn test_arrays_and_sets_normalize_to_seq() {
        let expected = Value::Seq(vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(Value::from([1, 2]), expected);
        assert_eq!(Value::from(vec![1, 2]), expected);
        assert_eq!(Value::from(&[1, 2][..]), expected);
        assert_eq!(Value::from(BTreeSet::from([2, 1])), expected);
        assert_eq!(Value::from(vec![1, 2].into_boxed_slice()), expected);
    }

    #[test]
    fn test_drain_consumes_iterator_once() {
        let mut pulled = 0;
        let value = Value::drain((0..4).inspect(|_| pulled += 1));
        assert_eq!(pulled, 4);
        assert_eq!(value.to_string(), "[0, 1, 2, 3]");
        assert_eq!(value.to_string(), "[0, 1, 2, 3]");
    }

    #[test]
    fn test_index_map_keeps_insertion_order() {
        let mut map = IndexMap::new();
        map.insert(2, "dois");
        map.insert(1, "um");
        assert_eq!(
            Value::from(map),
            Value::Map(vec![
                (Value::Int(2), Value::Text("dois".to_string())),
                (Value::Int(1), Value::Text("um".to_string())),
            ])
        );
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(Value::display(4.25), Value::Other("4.25".to_string()));
        assert_eq!(Value::debug("q"), Value::Other("\"q\"".to_string()));
        assert_eq!(Value::constant("MONDAY"), Value::Constant("MONDAY".into()));
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_value(Value::from(Some("Batman"))).unwrap();
        assert_eq!(json["kind"], "optional");
        assert_eq!(json["value"]["kind"], "text");
        assert_eq!(json["value"]["value"], "Batman");

        let null = serde_json::to_value(Value::Null).unwrap();
        assert_eq!(null["kind"], "null");
    }
}
