//! Container classification and mapping coercion.
//!
//! Every higher layer decides sequence-vs-mapping delegation through
//! [`classify`] instead of probing value shape at each use site.

use crate::{KeypathError, KeypathResult};
use serde_json::{Map, Value};

/// The three container kinds a value can classify as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Ordered, index-addressable collection (JSON array).
    Sequence,
    /// Keyed collection with insertion-order iteration (JSON object).
    Mapping,
    /// Leaf value: null, boolean, number, or string.
    Scalar,
}

/// Classify a value as a sequence, mapping, or scalar.
///
/// Total and side-effect-free: never fails, never coerces.
///
/// # Examples
///
/// ```
/// use keypath::{classify, Kind};
/// use serde_json::json;
///
/// assert_eq!(classify(&json!([1, 2])), Kind::Sequence);
/// assert_eq!(classify(&json!({"a": 1})), Kind::Mapping);
/// assert_eq!(classify(&json!("leaf")), Kind::Scalar);
/// assert_eq!(classify(&json!(null)), Kind::Scalar);
/// ```
#[inline]
pub fn classify(value: &Value) -> Kind {
    match value {
        Value::Array(_) => Kind::Sequence,
        Value::Object(_) => Kind::Mapping,
        _ => Kind::Scalar,
    }
}

/// Get the JSON kind name of a value, for error messages.
#[inline]
pub fn kind_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Coerce a value into a mapping.
///
/// - A mapping is returned as-is (cloned).
/// - A sequence must consist of `[key, value]` pairs and is collected into
///   a mapping; duplicate keys overwrite by position (last write wins).
///   Keys must be strings or numbers; numbers become their decimal string
///   form.
/// - A scalar (including null) coerces to an empty mapping.
///
/// # Examples
///
/// ```
/// use keypath::map_of;
/// use serde_json::json;
///
/// let m = map_of(&json!([["a", 1], ["b", 2], ["a", 3]])).unwrap();
/// assert_eq!(m.get("a"), Some(&json!(3)));
/// assert_eq!(m.get("b"), Some(&json!(2)));
///
/// assert!(map_of(&json!(null)).unwrap().is_empty());
/// ```
pub fn map_of(value: &Value) -> KeypathResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map.clone()),
        Value::Array(items) => {
            let mut map = Map::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let pair = match item {
                    Value::Array(pair) if pair.len() == 2 => pair,
                    other => return Err(KeypathError::malformed_pair(i, kind_name(other))),
                };
                let key = match &pair[0] {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    other => return Err(KeypathError::malformed_pair(i, kind_name(other))),
                };
                map.insert(key, pair[1].clone());
            }
            Ok(map)
        }
        _ => Ok(Map::new()),
    }
}
