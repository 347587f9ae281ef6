use serde_json::{Map, Value};

use super::allowlist::{FieldAllowlist, FieldArea};
use super::extract::extract_editable;

/// Comparison tweaks for a field table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Absent, `null` and `""` are all treated as the same empty value
    pub blank_as_absent: bool,
}

/// Changed subset of `working` relative to `original`
///
/// Both records are expected to be allowlist-filtered already. Scalars are
/// compared strictly (absent and `null` differ); nested areas key by key over
/// the working sub-record's keys, one level deep; collections element by
/// element in order, replacing the whole array when it differs. Numbers are
/// equal when their values are. A field absent
/// from `working` is never emitted.
pub fn compute_diff(
    working: &Map<String, Value>,
    original: &Map<String, Value>,
    allowlist: &FieldAllowlist,
    options: DiffOptions,
) -> Map<String, Value> {
    let mut diff = Map::new();

    for (key, area) in allowlist.fields() {
        let new_value = working.get(*key);
        let old_value = original.get(*key);

        match area {
            FieldArea::Nested(_) => {
                let nested = diff_nested(new_value, old_value, options);
                if !nested.is_empty() {
                    diff.insert((*key).to_string(), Value::Object(nested));
                }
            }
            FieldArea::Collection(_) => {
                if !arrays_equal(new_value, old_value) {
                    let replacement = match new_value {
                        Some(Value::Null) | None => Value::Array(Vec::new()),
                        Some(value) => value.clone(),
                    };
                    diff.insert((*key).to_string(), replacement);
                }
            }
            FieldArea::Scalar => {
                if let Some(new_value) = new_value {
                    if !values_equal(Some(new_value), old_value, options) {
                        diff.insert((*key).to_string(), new_value.clone());
                    }
                }
            }
        }
    }

    diff
}

/// Patch body for an edit flow
///
/// No working snapshot means nothing to send. Without an original snapshot
/// (add mode) the whole filtered working record is sent.
pub fn changed_payload(
    working: Option<&Value>,
    original: Option<&Value>,
    allowlist: &FieldAllowlist,
    options: DiffOptions,
) -> Map<String, Value> {
    let Some(updated) = extract_editable(working, allowlist) else {
        return Map::new();
    };
    let Some(original) = extract_editable(original, allowlist) else {
        return updated;
    };
    compute_diff(&updated, &original, allowlist, options)
}

fn diff_nested(new_value: Option<&Value>, old_value: Option<&Value>, options: DiffOptions) -> Map<String, Value> {
    let Some(new_object) = new_value.and_then(Value::as_object) else {
        return Map::new();
    };
    let old_object = old_value.and_then(Value::as_object);

    new_object
        .iter()
        .filter(|(key, value)| {
            let old = old_object.and_then(|object| object.get(key.as_str()));
            !values_equal(Some(value), old, options)
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Equality used for scalar fields and nested keys
pub fn values_equal(a: Option<&Value>, b: Option<&Value>, options: DiffOptions) -> bool {
    if options.blank_as_absent && is_blank(a) && is_blank(b) {
        return true;
    }
    if matches!(a, Some(Value::Array(_))) || matches!(b, Some(Value::Array(_))) {
        return arrays_equal(a, b);
    }
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => json_equal(x, y),
        _ => false,
    }
}

/// Order-sensitive element-wise comparison; absent and `null` count as `[]`
pub fn arrays_equal(a: Option<&Value>, b: Option<&Value>) -> bool {
    let empty = Value::Array(Vec::new());
    let a = a.filter(|value| !value.is_null()).unwrap_or(&empty);
    let b = b.filter(|value| !value.is_null()).unwrap_or(&empty);
    json_equal(a, b)
}

/// Structural equality with numbers compared by value at any depth
fn json_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| json_equal(x, y))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, value)| y.get(key).is_some_and(|other| json_equal(value, other)))
        }
        _ => a == b,
    }
}

fn numbers_equal(x: &serde_json::Number, y: &serde_json::Number) -> bool {
    match (x.as_i64(), y.as_i64()) {
        (Some(x), Some(y)) => x == y,
        _ => match (x.as_u64(), y.as_u64()) {
            (Some(x), Some(y)) => x == y,
            _ => x.as_f64() == y.as_f64(),
        },
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        _ => false,
    }
}
