//! Manifest module for package-json.
//!
//! Handles package.json validation, parsing and default construction.

pub mod fields;
mod guard;
mod init;
mod parse;
mod types;

pub use guard::{is_manifest, is_manifest_text};
pub use init::{initialize_manifest, DEFAULT_PACKAGE_TYPE};
pub use parse::{manifest_path, parse_manifest, parse_manifest_json, MANIFEST_FILE};
pub use types::Manifest;
