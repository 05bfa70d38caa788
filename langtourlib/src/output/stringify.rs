//! Recursive conversion of [`Value`]s into display text.

use crate::value::Value;

/// Text shown for an empty [`Value::Optional`].
pub const EMPTY_OPTIONAL: &str = "Optional.empty";

/// Text shown for [`Value::Null`].
pub const NULL: &str = "null";

/// Convert a value of any shape into its display text.
///
/// Sequences render as `[a, b]` and maps as `{k -> v}`, recursing into
/// their elements in the order they are stored.
pub fn stringify(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str(NULL),
        Value::Text(s) => out.push_str(s),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::UInt(n) => out.push_str(&n.to_string()),
        Value::Float(n) => out.push_str(&format_float(*n)),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Char(c) => out.push(*c),
        Value::Constant(name) => out.push_str(name),
        Value::Optional(Some(inner)) => write_value(out, inner),
        Value::Optional(None) => out.push_str(EMPTY_OPTIONAL),
        Value::Summary(s) => out.push_str(&s.to_string()),
        Value::Seq(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Map(pairs) => {
            out.push('{');
            for (i, (k, v)) in pairs.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, k);
                out.push_str(" -> ");
                write_value(out, v);
            }
            out.push('}');
        }
        Value::Other(s) => out.push_str(s),
    }
}

/// Floats always carry a fractional part (`30.0`, not `30`), including the
/// mantissa of exponent forms (`1.0E-7`). Non-finite values print as
/// `NaN`, `Infinity` and `-Infinity`.
fn format_float(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let text = format!("{:?}", n);
    match text.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{mantissa}E{exponent}")
        }
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Summary;
    use indexmap::IndexMap;

    #[test]
    fn test_null() {
        assert_eq!(stringify(&Value::Null), "null");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(stringify(&Value::from("Hello World!")), "Hello World!");
        assert_eq!(stringify(&Value::from(42)), "42");
        assert_eq!(stringify(&Value::from(-7i64)), "-7");
        assert_eq!(stringify(&Value::from(30.0)), "30.0");
        assert_eq!(stringify(&Value::from(5.5)), "5.5");
        assert_eq!(stringify(&Value::from(false)), "false");
        assert_eq!(stringify(&Value::from('Z')), "Z");
        assert_eq!(stringify(&Value::constant("THE_FLASH")), "THE_FLASH");
    }

    #[test]
    fn test_floats_at_extreme_magnitudes() {
        assert_eq!(stringify(&Value::from(1e-7)), "1.0E-7");
        assert_eq!(stringify(&Value::from(1e20)), "1.0E20");
        assert_eq!(stringify(&Value::from(-2.5e-10)), "-2.5E-10");
        assert_eq!(stringify(&Value::from(f64::INFINITY)), "Infinity");
        assert_eq!(stringify(&Value::from(f64::NEG_INFINITY)), "-Infinity");
        assert_eq!(stringify(&Value::from(f64::NAN)), "NaN");
    }

    #[test]
    fn test_stringify_is_idempotent_on_scalars() {
        let scalars = [
            Value::from("text"),
            Value::from(10),
            Value::from(2.25),
            Value::from(true),
            Value::from('c'),
            Value::constant("SUNDAY"),
        ];
        for v in &scalars {
            let once = stringify(v);
            assert_eq!(stringify(&Value::Text(once.clone())), once);
        }
    }

    #[test]
    fn test_optionals() {
        assert_eq!(stringify(&Value::from(None::<i32>)), "Optional.empty");
        assert_eq!(stringify(&Value::from(Some("Batman"))), "Batman");
        assert_eq!(
            stringify(&Value::from(Some(1))),
            stringify(&Value::from(1))
        );
    }

    #[test]
    fn test_summary() {
        let s = Summary {
            count: 10,
            sum: 55,
            min: 1,
            max: 10,
        };
        assert_eq!(
            stringify(&Value::from(s)),
            "count=10, sum=55, min=1, max=10, avg=5.50"
        );
    }

    #[test]
    fn test_sequences() {
        assert_eq!(stringify(&Value::from(Vec::<i32>::new())), "[]");
        assert_eq!(stringify(&Value::from(["A", "B"])), "[A, B]");
        assert_eq!(
            stringify(&Value::from(vec![vec![1, 2], vec![3]])),
            "[[1, 2], [3]]"
        );
        assert_eq!(stringify(&Value::from([1.0, 2.5])), "[1.0, 2.5]");
    }

    #[test]
    fn test_map_keeps_insertion_order() {
        let mut map = IndexMap::new();
        map.insert(1, "um");
        map.insert(2, "dois");
        assert_eq!(stringify(&Value::from(map)), "{1 -> um, 2 -> dois}");
    }

    #[test]
    fn test_nested_map_of_lists() {
        let value = Value::map([('B', vec!["Batman"]), ('S', vec!["Superman"])]);
        assert_eq!(stringify(&value), "{B -> [Batman], S -> [Superman]}");
        assert_eq!(stringify(&Value::map(Vec::<(i32, i32)>::new())), "{}");
    }

    #[test]
    fn test_fallback_uses_payload_text() {
        assert_eq!(stringify(&Value::display("as-is")), "as-is");
    }

    #[test]
    fn test_display_matches_stringify() {
        let v = Value::from(vec![Some(1), None]);
        assert_eq!(v.to_string(), stringify(&v));
        assert_eq!(v.to_string(), "[1, Optional.empty]");
    }
}
