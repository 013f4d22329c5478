//! Sequence algorithms over the shared enumerable view.
//!
//! Every function here sees its argument through [`to_list`]: a sequence
//! enumerates its elements, a mapping enumerates its `[key, value]` pairs
//! in insertion order, and a scalar enumerates nothing. That one view is
//! what lets the same algorithms run unchanged over both container kinds.
//!
//! Functions that produce a collection return a `Value::Array`, so results
//! compose with the path and equality operations.

use crate::{equals, kind_name, map_of, KeypathError, KeypathResult};
use serde_json::Value;

/// View a value as an ordered list of items.
///
/// Sequence → its elements; mapping → `[key, value]` pair arrays in
/// iteration order; scalar → empty.
///
/// # Examples
///
/// ```
/// use keypath::enumerable::to_list;
/// use serde_json::json;
///
/// assert_eq!(to_list(&json!([1, 2])), vec![json!(1), json!(2)]);
/// assert_eq!(
///     to_list(&json!({"a": 1, "b": 2})),
///     vec![json!(["a", 1]), json!(["b", 2])],
/// );
/// assert!(to_list(&json!(42)).is_empty());
/// ```
pub fn to_list(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| Value::Array(vec![Value::String(k.clone()), v.clone()]))
            .collect(),
        _ => Vec::new(),
    }
}

/// True if every item satisfies the predicate. Vacuously true when empty.
pub fn all(value: &Value, mut pred: impl FnMut(&Value) -> bool) -> bool {
    to_list(value).iter().all(|x| pred(x))
}

/// True if any item satisfies the predicate.
pub fn any(value: &Value, mut pred: impl FnMut(&Value) -> bool) -> bool {
    to_list(value).iter().any(|x| pred(x))
}

/// Number of items in the enumerable view.
pub fn count(value: &Value) -> usize {
    to_list(value).len()
}

/// Number of items satisfying the predicate.
pub fn count_by(value: &Value, mut pred: impl FnMut(&Value) -> bool) -> usize {
    to_list(value).iter().filter(|x| pred(x)).count()
}

/// Items satisfying the predicate, as a sequence.
pub fn filter(value: &Value, mut pred: impl FnMut(&Value) -> bool) -> Value {
    Value::Array(to_list(value).into_iter().filter(|x| pred(x)).collect())
}

/// Items not satisfying the predicate, as a sequence.
pub fn reject(value: &Value, mut pred: impl FnMut(&Value) -> bool) -> Value {
    filter(value, |x| !pred(x))
}

/// Apply `f` to every item, as a sequence.
pub fn map(value: &Value, mut f: impl FnMut(&Value) -> Value) -> Value {
    Value::Array(to_list(value).iter().map(|x| f(x)).collect())
}

/// Fold the items left to right into an accumulator.
///
/// # Examples
///
/// ```
/// use keypath::enumerable::reduce;
/// use serde_json::json;
///
/// let sum = reduce(&json!([1, 2, 3]), json!(0), |acc, x| {
///     json!(acc.as_i64().unwrap() + x.as_i64().unwrap())
/// });
/// assert_eq!(sum, json!(6));
/// ```
pub fn reduce(value: &Value, init: Value, mut f: impl FnMut(Value, &Value) -> Value) -> Value {
    to_list(value).iter().fold(init, |acc, x| f(acc, x))
}

/// First item satisfying the predicate, if any.
pub fn find(value: &Value, mut pred: impl FnMut(&Value) -> bool) -> Option<Value> {
    to_list(value).into_iter().find(|x| pred(x))
}

/// Concatenate two enumerables into one sequence.
pub fn concat(left: &Value, right: &Value) -> Value {
    let mut items = to_list(left);
    items.extend(to_list(right));
    Value::Array(items)
}

/// Pair items of two enumerables positionally, stopping at the shorter.
///
/// # Examples
///
/// ```
/// use keypath::enumerable::zip;
/// use serde_json::json;
///
/// assert_eq!(
///     zip(&json!([1, 2, 3]), &json!(["a", "b"])),
///     json!([[1, "a"], [2, "b"]]),
/// );
/// ```
pub fn zip(left: &Value, right: &Value) -> Value {
    let a = to_list(left);
    let b = to_list(right);
    Value::Array(
        a.into_iter()
            .zip(b)
            .map(|(x, y)| Value::Array(vec![x, y]))
            .collect(),
    )
}

/// Collect an enumerable into an existing container.
///
/// A sequence target gets the items appended; a mapping target gets the
/// enumerable coerced to a mapping (via [`map_of`](crate::map_of)) and
/// merged in, later keys overwriting earlier ones. Any other target is a
/// contract violation.
///
/// # Examples
///
/// ```
/// use keypath::enumerable::into;
/// use serde_json::json;
///
/// assert_eq!(
///     into(&json!([3, 4]), &json!([1, 2])).unwrap(),
///     json!([1, 2, 3, 4]),
/// );
/// assert_eq!(
///     into(&json!([["b", 2]]), &json!({"a": 1})).unwrap(),
///     json!({"a": 1, "b": 2}),
/// );
/// ```
pub fn into(enumerable: &Value, collectable: &Value) -> KeypathResult<Value> {
    match collectable {
        Value::Array(_) => Ok(concat(collectable, enumerable)),
        Value::Object(target) => {
            let mut merged = target.clone();
            for (k, v) in map_of(enumerable)? {
                merged.insert(k, v);
            }
            Ok(Value::Object(merged))
        }
        other => Err(KeypathError::unsupported_collectable(kind_name(other))),
    }
}

/// Drop items equal to their immediate predecessor.
///
/// Adjacency-only: non-adjacent duplicates survive. Equality follows
/// [`equals`], so `2` and `2.0` collapse while `"2"` does not.
///
/// # Examples
///
/// ```
/// use keypath::enumerable::dedup;
/// use serde_json::json;
///
/// assert_eq!(dedup(&json!([1, 1, "2", 2, 2.0])), json!([1, "2", 2]));
/// assert_eq!(dedup(&json!([1, 2, 1])), json!([1, 2, 1]));
/// ```
pub fn dedup(value: &Value) -> Value {
    dedup_by(value, |x| x.clone())
}

/// Drop items whose projection equals the previous item's projection.
pub fn dedup_by(value: &Value, f: impl FnMut(&Value) -> Value) -> Value {
    dedup_by_with(value, f, equals)
}

/// Drop items whose projection is `eq`-equal to the previous item's
/// projection. The first item is always kept.
pub fn dedup_by_with(
    value: &Value,
    mut f: impl FnMut(&Value) -> Value,
    mut eq: impl FnMut(&Value, &Value) -> bool,
) -> Value {
    let list = to_list(value);
    let mut items = list.iter();

    let Some(first) = items.next() else {
        return Value::Array(Vec::new());
    };

    let mut prev = f(first);
    let mut kept = vec![first.clone()];
    for x in items {
        let projected = f(x);
        if !eq(&projected, &prev) {
            kept.push(x.clone());
        }
        prev = projected;
    }
    Value::Array(kept)
}

/// Split into chunks of `count` items; a trailing short chunk is dropped.
///
/// # Examples
///
/// ```
/// use keypath::enumerable::chunk;
/// use serde_json::json;
///
/// assert_eq!(chunk(&json!([1, 2, 3, 4, 5]), 2).unwrap(), json!([[1, 2], [3, 4]]));
/// ```
pub fn chunk(value: &Value, count: usize) -> KeypathResult<Value> {
    chunk_every(value, count, count, None)
}

/// Produce windows of `count` items starting at every `step`-th position.
///
/// A window shorter than `count` is dropped, unless `leftover` is given:
/// then the first short window is kept, padded from `leftover`, and
/// truncated to `count`. Only that one window is ever padded.
///
/// # Errors
///
/// `InvalidOperation` if `count` or `step` is zero.
///
/// # Examples
///
/// ```
/// use keypath::enumerable::chunk_every;
/// use serde_json::json;
///
/// // overlapping windows
/// assert_eq!(
///     chunk_every(&json!([1, 2, 3, 4]), 2, 1, None).unwrap(),
///     json!([[1, 2], [2, 3], [3, 4]]),
/// );
///
/// // leftover padding
/// assert_eq!(
///     chunk_every(&json!([1, 2, 3, 4, 5]), 2, 2, Some(&json!([0]))).unwrap(),
///     json!([[1, 2], [3, 4], [5, 0]]),
/// );
/// ```
pub fn chunk_every(
    value: &Value,
    count: usize,
    step: usize,
    leftover: Option<&Value>,
) -> KeypathResult<Value> {
    if count == 0 || step == 0 {
        return Err(KeypathError::invalid_operation(
            "chunk count and step must be positive",
        ));
    }

    let list = to_list(value);
    let mut keep_short = usize::from(leftover.is_some());
    let mut chunks: Vec<Vec<Value>> = Vec::new();

    let mut start = 0;
    while start < list.len() {
        let end = (start + count).min(list.len());
        let window = list[start..end].to_vec();
        if window.len() == count {
            chunks.push(window);
        } else if keep_short > 0 {
            keep_short -= 1;
            chunks.push(window);
        }
        start += step;
    }

    if let Some(pad) = leftover {
        if let Some(last) = chunks.last_mut() {
            last.extend(to_list(pad));
            last.truncate(count);
        }
    }

    Ok(Value::Array(chunks.into_iter().map(Value::Array).collect()))
}

/// Split into maximal runs of items sharing the same projected value.
///
/// # Examples
///
/// ```
/// use keypath::enumerable::chunk_by;
/// use serde_json::json;
///
/// let runs = chunk_by(&json!([1, 2, 2, 3, 4, 4, 6, 7, 7]), |x| {
///     json!(x.as_i64().unwrap() % 2 == 1)
/// });
/// assert_eq!(runs, json!([[1], [2, 2], [3], [4, 4, 6], [7, 7]]));
/// ```
pub fn chunk_by(value: &Value, mut f: impl FnMut(&Value) -> Value) -> Value {
    let list = to_list(value);
    let mut items = list.iter();

    let Some(first) = items.next() else {
        return Value::Array(Vec::new());
    };

    let mut current_projection = f(first);
    let mut run = vec![first.clone()];
    let mut runs: Vec<Value> = Vec::new();
    for x in items {
        let projected = f(x);
        if equals(&projected, &current_projection) {
            run.push(x.clone());
        } else {
            runs.push(Value::Array(std::mem::replace(&mut run, vec![x.clone()])));
            current_projection = projected;
        }
    }
    runs.push(Value::Array(run));
    Value::Array(runs)
}
