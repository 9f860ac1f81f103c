//! Type definitions for package.json manifests.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A validated package.json manifest.
///
/// A manifest is an open-ended string-keyed map: a recognized subset of
/// fields is type-constrained (see [`super::fields`]) but arbitrary extra
/// fields are always permitted. An empty `Manifest` is the "no manifest
/// file" sentinel returned by [`super::parse_manifest`] when the folder has
/// no package.json; it is a normal value, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    fields: Map<String, Value>,
}

impl Manifest {
    /// Create a new empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Check whether a field is present as an own key.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(field.into(), value)
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the manifest has no fields (the "no manifest file" sentinel).
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the fields.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Get the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume the manifest and return the underlying map.
    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }

    /// Get the `name` field, if present and a string.
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    /// Get the `version` field, if present and a string.
    pub fn version(&self) -> Option<&str> {
        self.get("version").and_then(Value::as_str)
    }

    /// Get the `description` field, if present and a string.
    pub fn description(&self) -> Option<&str> {
        self.get("description").and_then(Value::as_str)
    }

    /// Get the package name, or "unnamed" if not set.
    pub fn display_name(&self) -> &str {
        match self.name() {
            Some(name) if !name.is_empty() => name,
            _ => "unnamed",
        }
    }

    /// Check the `private` field; absent counts as not private.
    pub fn is_private(&self) -> bool {
        self.get("private").and_then(Value::as_bool).unwrap_or(false)
    }

    /// Get the `scripts` object, if present and an object.
    pub fn scripts(&self) -> Option<&Map<String, Value>> {
        self.get("scripts").and_then(Value::as_object)
    }

    /// Get the `dependencies` object, if present and an object.
    pub fn dependencies(&self) -> Option<&Map<String, Value>> {
        self.get("dependencies").and_then(Value::as_object)
    }

    /// Get the `devDependencies` object, if present and an object.
    pub fn dev_dependencies(&self) -> Option<&Map<String, Value>> {
        self.get("devDependencies").and_then(Value::as_object)
    }

    /// Get the `keywords` entries that are strings.
    pub fn keywords(&self) -> Vec<&str> {
        self.get("keywords")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

impl From<Map<String, Value>> for Manifest {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl From<Manifest> for Value {
    fn from(manifest: Manifest) -> Self {
        Value::Object(manifest.fields)
    }
}

impl IntoIterator for Manifest {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version() {
            Some(version) => write!(f, "{}@{}", self.display_name(), version),
            None => write!(f, "{}", self.display_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manifest(value: Value) -> Manifest {
        match value {
            Value::Object(map) => Manifest::from(map),
            _ => panic!("test manifests must be objects"),
        }
    }

    #[test]
    fn test_empty_manifest_is_sentinel() {
        let m = Manifest::new();
        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
        assert_eq!(m.name(), None);
    }

    #[test]
    fn test_field_accessors() {
        let m = manifest(json!({
            "name": "my-app",
            "version": "1.0.0",
            "description": "A test application",
            "private": true,
            "scripts": { "dev": "vite" },
            "keywords": ["cli", "tooling"]
        }));

        assert_eq!(m.name(), Some("my-app"));
        assert_eq!(m.version(), Some("1.0.0"));
        assert_eq!(m.description(), Some("A test application"));
        assert!(m.is_private());
        assert_eq!(m.scripts().unwrap().len(), 1);
        assert_eq!(m.keywords(), vec!["cli", "tooling"]);
        assert!(m.contains("name"));
        assert!(!m.contains("main"));
    }

    #[test]
    fn test_display_name_fallback() {
        let named = manifest(json!({ "name": "my-app" }));
        assert_eq!(named.display_name(), "my-app");

        let unnamed = Manifest::new();
        assert_eq!(unnamed.display_name(), "unnamed");

        let blank = manifest(json!({ "name": "" }));
        assert_eq!(blank.display_name(), "unnamed");
    }

    #[test]
    fn test_display_format() {
        let m = manifest(json!({ "name": "my-app", "version": "2.1.0" }));
        assert_eq!(format!("{m}"), "my-app@2.1.0");

        let no_version = manifest(json!({ "name": "my-app" }));
        assert_eq!(format!("{no_version}"), "my-app");
    }

    #[test]
    fn test_serde_is_transparent() {
        let m = manifest(json!({ "name": "foo", "version": "1.0.0" }));
        let text = serde_json::to_string(&m).unwrap();
        let back: Manifest = serde_json::from_str(&text).unwrap();
        assert_eq!(m, back);
        assert!(text.starts_with('{'));
    }

    #[test]
    fn test_value_conversion() {
        let m = manifest(json!({ "name": "foo" }));
        let value = Value::from(m.clone());
        assert_eq!(value, json!({ "name": "foo" }));
        assert_eq!(m.into_map().len(), 1);
    }

    #[test]
    fn test_insert_replaces() {
        let mut m = Manifest::new();
        assert!(m.insert("name", json!("foo")).is_none());
        let old = m.insert("name", json!("bar"));
        assert_eq!(old, Some(json!("foo")));
        assert_eq!(m.name(), Some("bar"));
    }
}
