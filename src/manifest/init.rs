//! Default manifest construction.

use serde_json::Value;

use super::types::Manifest;

/// Module type applied to every freshly initialized manifest.
pub const DEFAULT_PACKAGE_TYPE: &str = "module";

/// Build a default manifest, optionally merged with caller overrides.
///
/// The default `{ "type": "module" }` is applied first and any override
/// fields are overlaid on top, so overrides always win on key collision.
/// No validation is performed on the result.
///
/// # Examples
///
/// ```
/// use package_json::{initialize_manifest, Manifest};
/// use serde_json::json;
///
/// let manifest = initialize_manifest(None);
/// assert_eq!(manifest.get("type"), Some(&json!("module")));
///
/// let mut overrides = Manifest::new();
/// overrides.insert("type", json!("commonjs"));
/// let manifest = initialize_manifest(Some(overrides));
/// assert_eq!(manifest.get("type"), Some(&json!("commonjs")));
/// ```
pub fn initialize_manifest(overrides: Option<Manifest>) -> Manifest {
    let mut manifest = Manifest::new();
    manifest.insert("type", Value::String(DEFAULT_PACKAGE_TYPE.to_string()));

    if let Some(overrides) = overrides {
        for (field, value) in overrides {
            manifest.insert(field, value);
        }
    }

    manifest
}
