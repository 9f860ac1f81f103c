//! Recognized package.json fields and their type constraints.
//!
//! A manifest is an open-ended map: unknown fields are always allowed and
//! never checked. The constant tables below list the recognized subset whose
//! types are validated when (and only when) the field is present. Validation
//! iterates these tables, not the manifest's own keys.

/// Fields that must hold a JSON string when present.
pub const STRING_FIELDS: &[&str] = &[
    "name",
    "main",
    "module",
    "description",
    "version",
    "types",
    "style",
];

/// Fields that must hold a JSON boolean when present.
pub const BOOL_FIELDS: &[&str] = &["private"];

/// Fields that must hold a JSON object (non-array, non-null) when present.
///
/// Only the field itself is checked; nested values are never validated.
pub const RECORD_FIELDS: &[&str] = &[
    "scripts",
    "dependencies",
    "devDependencies",
    "peerDependencies",
    "optionalDependencies",
    "resolutions",
    "directories",
    "exports",
    "pnpm",
    "publishConfig",
    "prettier",
    "eslintConfig",
];

/// Fields that must hold an array of strings when present.
pub const STRING_ARRAY_FIELDS: &[&str] = &["keywords", "os", "cpu", "files"];

/// Fields that may hold either a string or an array of strings when present.
pub const STRING_OR_STRING_ARRAY_FIELDS: &[&str] = &["man", "license"];
