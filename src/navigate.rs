//! The recursive get-and-update primitive and its derived path operations.
//!
//! [`get_and_update_in`] walks a path one segment per recursion level,
//! applies a caller-supplied transform at the terminal segment, and rebuilds
//! the spine of containers it visited. Everything else here — [`get_in`],
//! [`put_in`], [`pop_in`], [`update_in`] — is a fixed transform plugged into
//! that one primitive.
//!
//! No input value is ever mutated: every function takes `&Value` and
//! returns freshly built values. A level whose entry would be replaced with
//! an equal value is returned unchanged instead of rebuilt, so a no-op put
//! yields a root equal to the input.

use crate::{kind_name, KeypathError, KeypathResult, Path, Seg};
use serde_json::{Map, Value};

/// Maximum number of path segments a single navigation will recurse
/// through. Navigation recurses once per segment, so this bounds stack
/// depth explicitly instead of overflowing on pathological paths.
pub const MAX_PATH_DEPTH: usize = 512;

/// The contract returned by a path-terminal transform.
///
/// The navigator hands the transform the current value at the path (null
/// when absent) and realizes whichever outcome it returns.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Yield a value to the caller and replace the location with `value`.
    ///
    /// Replacing a location with an equal value leaves the containing
    /// level unchanged.
    Continue {
        /// Value surfaced as the first element of the result pair.
        yielded: Value,
        /// Replacement for the value at the path.
        value: Value,
    },
    /// Yield the location's original value to the caller and remove the
    /// location entirely: a sequence index is spliced out, a mapping key
    /// is dropped.
    Delete,
}

impl Outcome {
    /// Create a `Continue` outcome.
    #[inline]
    pub fn update(yielded: impl Into<Value>, value: impl Into<Value>) -> Self {
        Outcome::Continue {
            yielded: yielded.into(),
            value: value.into(),
        }
    }
}

/// Navigate to `path` inside `root`, apply `transform` to the value there,
/// and return `(yielded, new_root)`.
///
/// Per level the navigator delegates on the container kind:
///
/// - **Sequence** + index segment: negative indices address from the end;
///   an out-of-bounds terminal read sees null, an out-of-bounds terminal
///   write leaves the sequence unchanged.
/// - **Mapping** + key segment: a missing key navigates into null, and a
///   deeper write introduces the key on the way back up (create-on-write).
/// - **Scalar** + key segment: the scalar is treated as an empty mapping,
///   so writing through it replaces the scalar with the built-up mapping.
/// - Any other segment/container combination is a contract violation.
///
/// # Errors
///
/// `EmptyPath` for an empty path, `PathTooDeep` past [`MAX_PATH_DEPTH`],
/// `SegmentMismatch` for a key segment against a sequence or an index
/// segment against a mapping or scalar.
///
/// # Examples
///
/// ```
/// use keypath::{get_and_update_in, path, Outcome};
/// use serde_json::json;
///
/// let root = json!({"counters": {"a": 1}});
/// let (old, new_root) = get_and_update_in(&root, &path!("counters", "a"), |v| {
///     let next = json!(v.as_i64().unwrap_or(0) + 1);
///     Outcome::update(v, next)
/// })
/// .unwrap();
///
/// assert_eq!(old, json!(1));
/// assert_eq!(new_root, json!({"counters": {"a": 2}}));
/// assert_eq!(root, json!({"counters": {"a": 1}})); // untouched
/// ```
pub fn get_and_update_in<F>(root: &Value, path: &Path, transform: F) -> KeypathResult<(Value, Value)>
where
    F: FnOnce(Value) -> Outcome,
{
    if path.is_empty() {
        return Err(KeypathError::EmptyPath);
    }
    if path.len() > MAX_PATH_DEPTH {
        return Err(KeypathError::path_too_deep(path.len(), MAX_PATH_DEPTH));
    }
    let (yielded, new_root, _) = walk(root, path, 0, transform)?;
    Ok((yielded, new_root))
}

/// Get the value at `path`, or null if any step is absent.
///
/// Reads never fail on absence; they degrade to null. Structural
/// mismatches (a key segment against a sequence) are still errors.
///
/// # Examples
///
/// ```
/// use keypath::{get_in, path};
/// use serde_json::json;
///
/// let root = json!([0, 1, [2, [3, 4, [5]]], 6]);
/// assert_eq!(get_in(&root, &path!(2, 1, 2, 0)).unwrap(), json!(5));
/// assert_eq!(get_in(&root, &path!(2, 5)).unwrap(), json!(null));
/// ```
pub fn get_in(root: &Value, path: &Path) -> KeypathResult<Value> {
    let (found, _) = get_and_update_in(root, path, |v| {
        let yielded = v.clone();
        Outcome::Continue { yielded, value: v }
    })?;
    Ok(found)
}

/// Return a new root with `value` set at `path`.
///
/// Missing mapping keys along the way are created; putting at an
/// out-of-bounds sequence index leaves that sequence unchanged.
///
/// # Examples
///
/// ```
/// use keypath::{put_in, path};
/// use serde_json::json;
///
/// let root = json!([[1, 2], [3, 4], 5]);
/// let updated = put_in(&root, &path!(1, 1), json!(100)).unwrap();
/// assert_eq!(updated, json!([[1, 2], [3, 100], 5]));
/// ```
pub fn put_in(root: &Value, path: &Path, value: impl Into<Value>) -> KeypathResult<Value> {
    let value = value.into();
    let (_, new_root) = get_and_update_in(root, path, move |existing| Outcome::Continue {
        yielded: existing,
        value,
    })?;
    Ok(new_root)
}

/// Return a new root with the location at `path` removed.
///
/// A sequence index is spliced out (later elements shift left); a mapping
/// key is dropped. An absent location leaves the root unchanged.
///
/// # Examples
///
/// ```
/// use keypath::{pop_in, path};
/// use serde_json::json;
///
/// let root = json!([[1, 2], [3, 4], 5]);
/// assert_eq!(pop_in(&root, &path!(2)).unwrap(), json!([[1, 2], [3, 4]]));
/// ```
pub fn pop_in(root: &Value, path: &Path) -> KeypathResult<Value> {
    let (_, new_root) = get_and_update_in(root, path, |_| Outcome::Delete)?;
    Ok(new_root)
}

/// Return a new root with `f` applied to the value at `path`.
///
/// The transform receives null when the location is absent.
///
/// # Examples
///
/// ```
/// use keypath::{update_in, path};
/// use serde_json::json;
///
/// let root = json!({"count": 1});
/// let updated = update_in(&root, &path!("count"), |v| {
///     json!(v.as_i64().unwrap_or(0) * 10)
/// })
/// .unwrap();
/// assert_eq!(updated, json!({"count": 10}));
/// ```
pub fn update_in<F>(root: &Value, path: &Path, f: F) -> KeypathResult<Value>
where
    F: FnOnce(Value) -> Value,
{
    let (_, new_root) = get_and_update_in(root, path, |existing| {
        let yielded = existing.clone();
        Outcome::Continue {
            yielded,
            value: f(existing),
        }
    })?;
    Ok(new_root)
}

/// One level of navigation: dispatch on the container kind at `current`
/// and either realize the transform (terminal segment) or recurse.
///
/// The boolean in the result reports whether this level actually changed.
/// Ancestors only write a rebuilt child back when it did: a delete of an
/// absent location must not write vivified intermediates back, and a
/// scalar navigated through as an empty mapping must survive a no-op.
fn walk<F>(
    current: &Value,
    full_path: &Path,
    consumed: usize,
    transform: F,
) -> KeypathResult<(Value, Value, bool)>
where
    F: FnOnce(Value) -> Outcome,
{
    let seg = &full_path.segments()[consumed];
    let terminal = consumed + 1 == full_path.len();

    match current {
        Value::Array(items) => {
            if seg.is_key() {
                return Err(KeypathError::segment_mismatch(
                    full_path.slice(0, consumed + 1),
                    seg.clone(),
                    "array",
                ));
            }
            let at = seg.resolve(items.len());
            if terminal {
                let existing = at.map(|i| items[i].clone()).unwrap_or(Value::Null);
                match transform(existing) {
                    Outcome::Continue { yielded, value } => {
                        let changed = at.is_some_and(|i| items[i] != value);
                        Ok((yielded, replace_at(items, at, value), changed))
                    }
                    Outcome::Delete => {
                        let (removed, next) = delete_at(items, at);
                        Ok((removed, next, at.is_some()))
                    }
                }
            } else {
                let child = at.map(|i| items[i].clone()).unwrap_or(Value::Null);
                let (yielded, new_child, child_changed) =
                    walk(&child, full_path, consumed + 1, transform)?;
                if child_changed && at.is_some() {
                    Ok((yielded, replace_at(items, at, new_child), true))
                } else {
                    Ok((yielded, Value::Array(items.clone()), false))
                }
            }
        }
        Value::Object(map) => walk_mapping(map, full_path, consumed, transform),
        scalar => match seg {
            // Navigating a key through a scalar treats it as an empty
            // mapping, which is what makes create-on-write paths work.
            // The scalar is only replaced if something was written.
            Seg::Key(_) => {
                let (yielded, grown, changed) =
                    walk_mapping(&Map::new(), full_path, consumed, transform)?;
                if changed {
                    Ok((yielded, grown, true))
                } else {
                    Ok((yielded, scalar.clone(), false))
                }
            }
            Seg::Index(_) => Err(KeypathError::segment_mismatch(
                full_path.slice(0, consumed + 1),
                seg.clone(),
                kind_name(scalar),
            )),
        },
    }
}

fn walk_mapping<F>(
    map: &Map<String, Value>,
    full_path: &Path,
    consumed: usize,
    transform: F,
) -> KeypathResult<(Value, Value, bool)>
where
    F: FnOnce(Value) -> Outcome,
{
    let seg = &full_path.segments()[consumed];
    let key = match seg.as_key() {
        Some(k) => k,
        None => {
            return Err(KeypathError::segment_mismatch(
                full_path.slice(0, consumed + 1),
                seg.clone(),
                "object",
            ))
        }
    };
    let terminal = consumed + 1 == full_path.len();

    if terminal {
        let existing = map.get(key).cloned().unwrap_or(Value::Null);
        match transform(existing) {
            Outcome::Continue { yielded, value } => {
                let changed = map.get(key).unwrap_or(&Value::Null) != &value;
                Ok((yielded, put_key(map, key, value), changed))
            }
            Outcome::Delete => {
                let was_present = map.contains_key(key);
                let (removed, next) = pop_key(map, key);
                Ok((removed, next, was_present))
            }
        }
    } else {
        let child = map.get(key).cloned().unwrap_or(Value::Null);
        let (yielded, new_child, child_changed) =
            walk(&child, full_path, consumed + 1, transform)?;
        if child_changed {
            Ok((yielded, put_key(map, key, new_child), true))
        } else {
            Ok((yielded, Value::Object(map.clone()), false))
        }
    }
}

/// Rebuild a sequence with `value` at the resolved position.
///
/// Out-of-bounds positions and equal replacements leave the sequence
/// as it was.
fn replace_at(items: &[Value], at: Option<usize>, value: Value) -> Value {
    match at {
        Some(i) if items[i] != value => {
            let mut next = items.to_vec();
            next[i] = value;
            Value::Array(next)
        }
        _ => Value::Array(items.to_vec()),
    }
}

/// Splice out the resolved position, returning `(removed, new_sequence)`.
/// Out of bounds yields `(null, unchanged)`.
fn delete_at(items: &[Value], at: Option<usize>) -> (Value, Value) {
    match at {
        Some(i) => {
            let mut next = items.to_vec();
            let removed = next.remove(i);
            (removed, Value::Array(next))
        }
        None => (Value::Null, Value::Array(items.to_vec())),
    }
}

/// Rebuild a mapping with `key` bound to `value`. Binding a key to an
/// equal value leaves the mapping as it was; an absent key reads as
/// null, so binding null to an absent key is also a no-op.
fn put_key(map: &Map<String, Value>, key: &str, value: Value) -> Value {
    if map.get(key).unwrap_or(&Value::Null) == &value {
        return Value::Object(map.clone());
    }
    let mut next = map.clone();
    next.insert(key.to_owned(), value);
    Value::Object(next)
}

/// Drop `key` from the mapping, returning `(removed, new_mapping)`.
/// A missing key yields `(null, unchanged)`. Remaining keys keep their
/// iteration order.
fn pop_key(map: &Map<String, Value>, key: &str) -> (Value, Value) {
    match map.get(key) {
        Some(existing) => {
            let removed = existing.clone();
            let mut next = map.clone();
            next.shift_remove(key);
            (removed, Value::Object(next))
        }
        None => (Value::Null, Value::Object(map.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use serde_json::json;

    #[test]
    fn test_get_in_nested_sequences() {
        let root = json!([0, 1, [2, [3, 4, [5]]], 6]);
        assert_eq!(get_in(&root, &path!(2, 1, 2, 0)).unwrap(), json!(5));
    }

    #[test]
    fn test_get_in_nested_mappings() {
        let root = json!({"a": 1, "b": {"c": 2, "d": {"e": {"f": 3}, "g": 4}}});
        assert_eq!(get_in(&root, &path!("b", "d", "e", "f")).unwrap(), json!(3));
    }

    #[test]
    fn test_get_in_absent_is_null() {
        let root = json!({"a": {"b": 1}});
        assert_eq!(get_in(&root, &path!("a", "x")).unwrap(), json!(null));
        assert_eq!(get_in(&root, &path!("x", "y", "z")).unwrap(), json!(null));
    }

    #[test]
    fn test_get_in_negative_index() {
        let root = json!([10, 20, 30]);
        assert_eq!(get_in(&root, &path!(-1)).unwrap(), json!(30));
        assert_eq!(get_in(&root, &path!(-3)).unwrap(), json!(10));
        assert_eq!(get_in(&root, &path!(-4)).unwrap(), json!(null));
    }

    #[test]
    fn test_put_in_sequence() {
        let root = json!([[1, 2], [3, 4], 5]);
        let updated = put_in(&root, &path!(1, 1), json!(100)).unwrap();
        assert_eq!(updated, json!([[1, 2], [3, 100], 5]));
        // original untouched
        assert_eq!(root, json!([[1, 2], [3, 4], 5]));
    }

    #[test]
    fn test_put_in_out_of_bounds_unchanged() {
        let root = json!([1, 2, 3]);
        let updated = put_in(&root, &path!(10), json!(99)).unwrap();
        assert_eq!(updated, root);
    }

    #[test]
    fn test_put_in_creates_mapping_keys() {
        let root = json!({});
        let updated = put_in(&root, &path!("a", "b", "c"), json!(42)).unwrap();
        assert_eq!(updated, json!({"a": {"b": {"c": 42}}}));
    }

    #[test]
    fn test_put_in_through_scalar_autovivifies() {
        let root = json!({"a": 5});
        let updated = put_in(&root, &path!("a", "b"), json!(1)).unwrap();
        assert_eq!(updated, json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_pop_in_sequence() {
        let root = json!([[1, 2], [3, 4], 5]);
        assert_eq!(pop_in(&root, &path!(2)).unwrap(), json!([[1, 2], [3, 4]]));
        assert_eq!(pop_in(&root, &path!(0)).unwrap(), json!([[3, 4], 5]));
    }

    #[test]
    fn test_pop_in_mapping_preserves_order() {
        let root = json!({"x": 1, "y": 2, "z": 3});
        let updated = pop_in(&root, &path!("y")).unwrap();
        let keys: Vec<&String> = updated.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["x", "z"]);
    }

    #[test]
    fn test_pop_in_absent_unchanged() {
        let root = json!({"a": 1});
        assert_eq!(pop_in(&root, &path!("missing")).unwrap(), root);

        let root = json!([1, 2]);
        assert_eq!(pop_in(&root, &path!(5)).unwrap(), root);
    }

    #[test]
    fn test_pop_in_absent_intermediate_does_not_vivify() {
        let root = json!({"a": {"b": 1}});
        assert_eq!(pop_in(&root, &path!("a", "zzz")).unwrap(), root);
        assert_eq!(pop_in(&root, &path!("nope", "deeper")).unwrap(), root);
        assert_eq!(pop_in(&root, &path!("nope", "way", "down")).unwrap(), root);
    }

    #[test]
    fn test_pop_in_through_scalar_keeps_scalar() {
        let root = json!({"a": 5});
        assert_eq!(pop_in(&root, &path!("a", "b")).unwrap(), root);
    }

    #[test]
    fn test_delete_through_absent_yields_null_and_same_root() {
        let root = json!({"a": {"b": 1}});
        let (removed, new_root) =
            get_and_update_in(&root, &path!("x", "y"), |_| Outcome::Delete).unwrap();
        assert_eq!(removed, json!(null));
        assert_eq!(new_root, root);
    }

    #[test]
    fn test_update_in() {
        let root = json!({"a": {"n": 2}});
        let updated = update_in(&root, &path!("a", "n"), |v| {
            json!(v.as_i64().unwrap_or(0) * 3)
        })
        .unwrap();
        assert_eq!(updated, json!({"a": {"n": 6}}));
    }

    #[test]
    fn test_update_in_absent_sees_null() {
        let root = json!({});
        let updated = update_in(&root, &path!("k"), |v| {
            assert_eq!(v, json!(null));
            json!("filled")
        })
        .unwrap();
        assert_eq!(updated, json!({"k": "filled"}));
    }

    #[test]
    fn test_get_and_update_in_yields_pair() {
        let root = json!([1, 2, 3]);
        let (old, new_root) =
            get_and_update_in(&root, &path!(1), |v| Outcome::update(v, json!(20))).unwrap();
        assert_eq!(old, json!(2));
        assert_eq!(new_root, json!([1, 20, 3]));
    }

    #[test]
    fn test_get_and_update_in_delete_yields_original() {
        let root = json!({"k": "v"});
        let (old, new_root) = get_and_update_in(&root, &path!("k"), |_| Outcome::Delete).unwrap();
        assert_eq!(old, json!("v"));
        assert_eq!(new_root, json!({}));
    }

    #[test]
    fn test_noop_put_returns_equal_root() {
        let root = json!({"a": {"b": [1, 2]}});
        let updated = put_in(&root, &path!("a", "b", 0), json!(1)).unwrap();
        assert_eq!(updated, root);
    }

    #[test]
    fn test_empty_path_is_error() {
        let root = json!({"a": 1});
        assert!(matches!(
            get_in(&root, &Path::root()),
            Err(KeypathError::EmptyPath)
        ));
        assert!(matches!(
            put_in(&root, &Path::root(), json!(1)),
            Err(KeypathError::EmptyPath)
        ));
    }

    #[test]
    fn test_key_against_sequence_is_error() {
        let root = json!([1, 2, 3]);
        let err = get_in(&root, &path!("key")).unwrap_err();
        match err {
            KeypathError::SegmentMismatch { segment, found, .. } => {
                assert_eq!(segment, Seg::key("key"));
                assert_eq!(found, "array");
            }
            other => panic!("expected SegmentMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_index_against_mapping_is_error() {
        let root = json!({"a": 1});
        let err = get_in(&root, &path!(0)).unwrap_err();
        assert!(matches!(err, KeypathError::SegmentMismatch { found: "object", .. }));
    }

    #[test]
    fn test_index_against_scalar_is_error() {
        let root = json!({"a": 5});
        let err = put_in(&root, &path!("a", 0), json!(1)).unwrap_err();
        match err {
            KeypathError::SegmentMismatch { path, found, .. } => {
                assert_eq!(path, path!("a", 0));
                assert_eq!(found, "number");
            }
            other => panic!("expected SegmentMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_path_too_deep() {
        let root = json!({});
        let mut p = Path::root();
        for i in 0..(MAX_PATH_DEPTH + 1) {
            p.push(Seg::key(format!("k{i}")));
        }
        assert!(matches!(
            get_in(&root, &p),
            Err(KeypathError::PathTooDeep { .. })
        ));
    }

    #[test]
    fn test_delete_negative_index() {
        let root = json!([1, 2, 3]);
        assert_eq!(pop_in(&root, &path!(-1)).unwrap(), json!([1, 2]));
    }
}
