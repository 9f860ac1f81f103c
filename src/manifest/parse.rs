//! Manifest parsing from a project folder.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ManifestError, Result};

use super::guard::is_manifest_map;
use super::types::Manifest;

/// Manifest file name looked up inside the project folder.
pub const MANIFEST_FILE: &str = "package.json";

/// Parse the package.json in the given folder.
///
/// Returns the validated [`Manifest`] when the file exists and checks out,
/// or an empty `Manifest` when the file does not exist; a project without a
/// manifest is a normal outcome, not an error.
///
/// Callers may pass either the folder or the full path to the package.json
/// itself; a trailing `package.json` component is stripped before lookup.
///
/// # Errors
///
/// - [`ManifestError::InvalidFile`] if the file exists but is not valid JSON
/// - [`ManifestError::WrongType`] if the file decodes but the top-level
///   value is not an object or a recognized field has the wrong type
/// - [`ManifestError::Io`] if the file exists but cannot be read
pub fn parse_manifest(folder: impl AsRef<Path>) -> Result<Manifest> {
    let folder = folder.as_ref();
    let file = manifest_path(folder);

    if !file.exists() {
        return Ok(Manifest::new());
    }

    let data = std::fs::read_to_string(&file).map_err(|source| ManifestError::Io {
        operation: "read",
        path: file.clone(),
        source,
    })?;

    parse_manifest_json(&data, folder)
}

/// Parse package.json content that has already been read.
///
/// `folder` is only used as context in error payloads and messages.
///
/// # Errors
///
/// Same as [`parse_manifest`], minus the IO cases.
pub fn parse_manifest_json(content: &str, folder: &Path) -> Result<Manifest> {
    let value: Value =
        serde_json::from_str(content).map_err(|source| ManifestError::InvalidFile {
            folder: folder.to_path_buf(),
            data: content.to_string(),
            source,
        })?;

    // The file contract requires a top-level JSON object; a file whose
    // top-level value is a string is rejected here even though the guard
    // accepts object-decoding strings from direct callers.
    match value {
        Value::Object(map) if is_manifest_map(&map, &[]) => Ok(Manifest::from(map)),
        other => Err(ManifestError::WrongType {
            folder: folder.to_path_buf(),
            value: other,
        }),
    }
}

/// Resolve the manifest file path for a folder, tolerating callers that
/// pass the full file path instead of the folder.
pub fn manifest_path(folder: &Path) -> PathBuf {
    let base = match folder.file_name() {
        Some(name) if name == MANIFEST_FILE => folder.parent().unwrap_or(folder),
        _ => folder,
    };
    base.join(MANIFEST_FILE)
}
