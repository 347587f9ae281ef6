use serde_json::{Map, Value};

use super::allowlist::{FieldAllowlist, FieldArea};

/// Copy of `entity` restricted to the editable fields of `allowlist`
///
/// Only root fields present on the entity are copied. A nested area holding
/// anything but an object becomes `null`; a collection area holding anything
/// but an array becomes `[]`, and its non-object elements are dropped.
///
/// Returns `None` when there is no entity or it is not a JSON object.
///
/// # Example
/// ```
/// use receivables_core_session::edit::allowlist::COMPANY_FIELDS;
/// use receivables_core_session::edit::extract::extract_editable;
/// use serde_json::json;
///
/// let company = json!({ "id": 9, "legalName": "Acme", "payment": null });
/// let editable = extract_editable(Some(&company), &COMPANY_FIELDS).unwrap();
/// assert_eq!(serde_json::Value::Object(editable), json!({ "legalName": "Acme", "payment": null }));
/// ```
pub fn extract_editable(entity: Option<&Value>, allowlist: &FieldAllowlist) -> Option<Map<String, Value>> {
    let source = entity?.as_object()?;
    let mut editable = Map::new();

    for (key, area) in allowlist.fields() {
        let Some(value) = source.get(*key) else {
            continue;
        };
        let filtered = match area {
            FieldArea::Scalar => value.clone(),
            FieldArea::Nested(keys) => pick_fields(value, keys).map(Value::Object).unwrap_or(Value::Null),
            FieldArea::Collection(keys) => Value::Array(
                value
                    .as_array()
                    .map(|items| {
                        items
                            .iter()
                            .filter_map(|item| pick_fields(item, keys))
                            .map(Value::Object)
                            .collect()
                    })
                    .unwrap_or_default(),
            ),
        };
        editable.insert((*key).to_string(), filtered);
    }

    Some(editable)
}

fn pick_fields(source: &Value, keys: &[&str]) -> Option<Map<String, Value>> {
    let object = source.as_object()?;
    Some(
        keys.iter()
            .filter_map(|key| object.get(*key).map(|value| ((*key).to_string(), value.clone())))
            .collect(),
    )
}
