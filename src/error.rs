//! Custom error types for package-json.
//!
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for package-json operations.
///
/// Only [`parse_manifest`](crate::manifest::parse_manifest) and its
/// content-level variant produce these; the type guard never raises and
/// degrades to `false` instead. The two manifest variants are nominally
/// distinct so callers can branch on the failure kind rather than matching
/// message strings.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// A package.json file exists but its contents are not valid JSON.
    #[error("There is a package.json file in \"{}\" but it could not be parsed as JSON: {source}", folder.display())]
    InvalidFile {
        /// Folder the caller asked to parse.
        folder: PathBuf,
        /// Raw file contents, kept for caller diagnostics.
        data: String,
        /// The underlying decode failure, with line and column.
        #[source]
        source: serde_json::Error,
    },

    /// A package.json file decoded as JSON but fails the structural checks:
    /// either the top-level value is not an object, or a recognized field
    /// holds a value of the wrong type.
    #[error("The package.json file in \"{}\" was parsed but the types of certain properties were invalid", folder.display())]
    WrongType {
        /// Folder the caller asked to parse.
        folder: PathBuf,
        /// The decoded (but structurally invalid) value.
        value: serde_json::Value,
    },

    /// IO failure beyond the existence check (absence is not an error).
    #[error("Failed to {operation} '{}': {source}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    /// The folder this error was raised for, when one applies.
    pub fn folder(&self) -> Option<&PathBuf> {
        match self {
            ManifestError::InvalidFile { folder, .. } => Some(folder),
            ManifestError::WrongType { folder, .. } => Some(folder),
            ManifestError::Io { .. } => None,
        }
    }
}

/// Result type alias for package-json operations.
pub type Result<T> = std::result::Result<T, ManifestError>;
