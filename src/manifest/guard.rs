//! Manifest type guard.
//!
//! A pure predicate over JSON values: it answers whether a value has the
//! shape of a package.json manifest, and never raises. Decode failures and
//! structural mismatches both degrade to `false`, which keeps the guard
//! usable in plain conditionals. The loud counterpart is
//! [`super::parse_manifest`].

use serde_json::{Map, Value};

use super::fields::{
    BOOL_FIELDS, RECORD_FIELDS, STRING_ARRAY_FIELDS, STRING_FIELDS,
    STRING_OR_STRING_ARRAY_FIELDS,
};

/// Check whether a JSON value has the shape of a package.json manifest.
///
/// Accepts either an object, or a string that JSON-decodes to an object.
/// Everything else (null, arrays, numbers, booleans) is rejected outright.
///
/// `required` lists field names that must be present as own keys, on top of
/// the built-in type constraints; an empty list never causes a missing-field
/// failure. Recognized fields are type-checked only when present, so an
/// empty object with no required fields is a valid manifest.
///
/// # Examples
///
/// ```
/// use package_json::is_manifest;
/// use serde_json::json;
///
/// assert!(is_manifest(&json!({ "name": "foo", "version": "1.0.0" }), &[]));
/// assert!(!is_manifest(&json!({ "name": 123 }), &[]));
/// assert!(!is_manifest(&json!({ "name": "foo" }), &["version"]));
/// ```
pub fn is_manifest(value: &Value, required: &[&str]) -> bool {
    match value {
        Value::Object(obj) => is_manifest_map(obj, required),
        Value::String(raw) => is_manifest_text(raw, required),
        _ => false,
    }
}

/// Check whether a string of JSON text decodes to a manifest-shaped object.
///
/// Same semantics as [`is_manifest`] on the string arm: decode failures and
/// non-object top-level values return `false`, never an error.
pub fn is_manifest_text(raw: &str, required: &[&str]) -> bool {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(obj)) => is_manifest_map(&obj, required),
        _ => false,
    }
}

/// Check a decoded object against the required-field list and the
/// recognized-field type constraints.
pub(crate) fn is_manifest_map(obj: &Map<String, Value>, required: &[&str]) -> bool {
    if !required.iter().all(|field| obj.contains_key(*field)) {
        return false;
    }

    group_ok(obj, STRING_FIELDS, Value::is_string)
        && group_ok(obj, BOOL_FIELDS, Value::is_boolean)
        && group_ok(obj, RECORD_FIELDS, Value::is_object)
        && group_ok(obj, STRING_ARRAY_FIELDS, is_string_array)
        && group_ok(obj, STRING_OR_STRING_ARRAY_FIELDS, is_string_or_string_array)
}

/// Every field of the group that is present must satisfy the predicate;
/// absent fields are skipped.
fn group_ok(obj: &Map<String, Value>, group: &[&str], ok: impl Fn(&Value) -> bool) -> bool {
    group
        .iter()
        .all(|field| obj.get(*field).map_or(true, &ok))
}

fn is_string_array(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.iter().all(Value::is_string),
        _ => false,
    }
}

fn is_string_or_string_array(value: &Value) -> bool {
    value.is_string() || is_string_array(value)
}
