//! Human-readable rendering of nested structures.
//!
//! Diagnostic only: there is no parser for this format.

use serde_json::Value;

/// Render a value for inspection.
///
/// Sequences render as bracketed comma-lists, mappings as
/// `%{key: value, …}`, strings double-quoted, null as `null`, and other
/// scalars in their default textual form.
///
/// # Examples
///
/// ```
/// use keypath::inspect;
/// use serde_json::json;
///
/// assert_eq!(inspect(&json!([1, "a", null])), r#"[1, "a", null]"#);
/// assert_eq!(inspect(&json!({"a": 1, "b": [2]})), "%{a: 1, b: [2]}");
/// ```
pub fn inspect(value: &Value) -> String {
    match value {
        Value::Array(items) => {
            let rendered: Vec<String> = items.iter().map(inspect).collect();
            format!("[{}]", rendered.join(", "))
        }
        Value::Object(map) => {
            let rendered: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", k, inspect(v)))
                .collect();
            format!("%{{{}}}", rendered.join(", "))
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
    }
}
