/// Coerces a caller-supplied JSON environment into the evaluator's typed
/// [`Value`] domain (spec §4.3).
use serde_json::Value as Json;

use crate::value::Value;

/// Look up `key` in `env` and coerce the result per spec §4.3. Missing keys
/// and JSON `null` both coerce to `Value::Null`.
pub fn lookup(env: &Json, key: &str) -> Value {
    match env.get(key) {
        Some(v) => coerce_scalar(v),
        None => Value::Null,
    }
}

/// Coerce a single JSON value at top level. Nested arrays/objects inside a
/// top-level array are handled by [`coerce_list`]; this function is only
/// ever called with JSON that is not itself nested inside another array.
fn coerce_scalar(v: &Json) -> Value {
    match v {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => coerce_number(n),
        Json::String(s) => Value::Str(s.clone()),
        Json::Array(items) => Value::List(coerce_list(items)),
        Json::Object(_) => Value::Null,
    }
}

/// Classify a JSON number by token shape: any value that can't be
/// represented exactly as an `i64` is a `Float`, matching the spec's
/// decision to prefer the JSON syntax's fractional-ness over an
/// accidental overload-resolution order (see DESIGN.md open question 2).
fn coerce_number(n: &serde_json::Number) -> Value {
    match n.as_i64() {
        Some(i) => Value::Int(i),
        None => Value::Float(n.as_f64().unwrap_or(0.0)),
    }
}

/// Coerce the elements of a top-level JSON array. Nested arrays and objects
/// yield `Null` and are filtered out entirely — a list-of-lists collapses
/// to an empty or sparse list (spec §4.3).
fn coerce_list(items: &[Json]) -> Vec<Value> {
    items
        .iter()
        .filter(|v| !matches!(v, Json::Array(_) | Json::Object(_)))
        .map(coerce_scalar)
        .collect()
}
