//! Deep structural equality across sequences, mappings, and scalars.
//!
//! This is not `Value::eq`: mappings compare order-insensitively over their
//! pairs, and numbers compare numerically across integer and float
//! representations (`2 == 2.0`), matching strict-equality semantics where
//! `"2"` and `2` remain distinct.

use serde_json::{Number, Value};

/// Deep, type-discriminating equality.
///
/// - Two sequences are equal iff they have the same length and every
///   positional pair is equal.
/// - Two mappings are equal iff they have the same key set and every key
///   maps to an equal value; pair order is irrelevant.
/// - A sequence never equals a mapping, and neither equals a scalar.
/// - Scalars compare by value with no cross-type coercion.
///
/// # Examples
///
/// ```
/// use keypath::equals;
/// use serde_json::json;
///
/// assert!(equals(&json!({"a": 1, "b": {"c": 2}}), &json!({"b": {"c": 2}, "a": 1})));
/// assert!(equals(&json!(2), &json!(2.0)));
/// assert!(!equals(&json!(2), &json!("2")));
/// assert!(!equals(&json!([1, 2, 3]), &json!({})));
/// ```
pub fn equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| equals(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| equals(x, y)))
        }
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        _ => false,
    }
}

/// Numeric equality across integer and float representations.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_equality() {
        assert!(equals(&json!(1), &json!(1)));
        assert!(equals(&json!("a"), &json!("a")));
        assert!(equals(&json!(true), &json!(true)));
        assert!(equals(&json!(null), &json!(null)));
        assert!(!equals(&json!(1), &json!(2)));
        assert!(!equals(&json!(true), &json!(false)));
    }

    #[test]
    fn test_no_cross_type_coercion() {
        assert!(!equals(&json!(1), &json!("1")));
        assert!(!equals(&json!(0), &json!(false)));
        assert!(!equals(&json!(null), &json!(0)));
        assert!(!equals(&json!(""), &json!(null)));
    }

    #[test]
    fn test_numeric_representations() {
        assert!(equals(&json!(2), &json!(2.0)));
        assert!(equals(&json!(-3), &json!(-3.0)));
        assert!(!equals(&json!(2), &json!(2.5)));
        assert!(equals(&json!(u64::MAX), &json!(u64::MAX)));
    }

    #[test]
    fn test_sequence_equality_is_order_sensitive() {
        assert!(equals(&json!([1, 2, 3]), &json!([1, 2, 3])));
        assert!(!equals(&json!([1, 2, 3]), &json!([3, 2, 1])));
        assert!(!equals(&json!([1, 2]), &json!([1, 2, 3])));
    }

    #[test]
    fn test_mapping_equality_is_order_insensitive() {
        let a = serde_json::from_str::<Value>(r#"{"x": 1, "y": 2}"#).unwrap();
        let b = serde_json::from_str::<Value>(r#"{"y": 2, "x": 1}"#).unwrap();
        assert!(equals(&a, &b));
    }

    #[test]
    fn test_mapping_key_count_must_match() {
        assert!(!equals(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
        assert!(!equals(&json!({"a": 1, "b": 2}), &json!({"a": 1})));
    }

    #[test]
    fn test_deep_nesting() {
        let a = json!({"a": 1, "b": {"c": 2}});
        let b = json!({"a": 1, "b": {"c": 2}});
        assert!(equals(&a, &b));

        let c = json!({"a": 1, "b": {"c": 3}});
        assert!(!equals(&a, &c));
    }

    #[test]
    fn test_mixed_kinds_never_equal() {
        assert!(!equals(&json!([1, 2, 3]), &json!({})));
        assert!(!equals(&json!([]), &json!({})));
        assert!(!equals(&json!([]), &json!(null)));
        assert!(!equals(&json!({}), &json!("{}")));
    }

    #[test]
    fn test_equivalence_relation_on_samples() {
        let samples = vec![
            json!(null),
            json!(1),
            json!("s"),
            json!([1, [2, 3]]),
            json!({"a": [1], "b": {"c": null}}),
        ];

        for x in &samples {
            assert!(equals(x, x), "reflexive failed for {x}");
            for y in &samples {
                assert_eq!(equals(x, y), equals(y, x), "symmetric failed for {x}, {y}");
            }
        }
    }
}
