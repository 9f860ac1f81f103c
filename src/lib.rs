//! package-json - package.json validation and parsing
//!
//! A small library for working with `package.json`-style manifest files:
//! validate that a JSON value (or string of JSON text) has the shape of a
//! manifest, parse the manifest out of a project folder with typed failure
//! signals, and construct default manifests.
//!
//! # Design
//!
//! - **Open-ended shape**: a manifest is a string-keyed map; a recognized
//!   subset of fields is type-checked when present ([`manifest::fields`]),
//!   and everything else passes through untouched.
//! - **Quiet guard, loud parser**: [`is_manifest`] is a pure predicate that
//!   never raises (decode failures degrade to `false`), while
//!   [`parse_manifest`] signals [`ManifestError::InvalidFile`] and
//!   [`ManifestError::WrongType`] so pipeline callers fail loudly.
//! - **Absence is not an error**: a folder without a package.json parses to
//!   an empty [`Manifest`].
//!
//! # Modules
//!
//! - [`detect`] - Best-effort user email detection (async probe chain)
//! - [`error`] - Error types and result helpers
//! - [`manifest`] - Manifest validation, parsing and initialization
//!
//! # Example
//!
//! ```no_run
//! use package_json::{parse_manifest, ManifestError};
//!
//! match parse_manifest("./my-project") {
//!     Ok(manifest) if manifest.is_empty() => println!("no package.json"),
//!     Ok(manifest) => println!("parsed {}", manifest.display_name()),
//!     Err(ManifestError::InvalidFile { folder, .. }) => {
//!         eprintln!("malformed JSON in {}", folder.display());
//!     }
//!     Err(ManifestError::WrongType { folder, .. }) => {
//!         eprintln!("invalid manifest in {}", folder.display());
//!     }
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

/// Best-effort user email detection.
pub mod detect;

/// Error types and result helpers.
pub mod error;

/// Manifest validation, parsing and initialization.
pub mod manifest;

// Re-export commonly used types
pub use detect::detect_user_email;
pub use error::{ManifestError, Result};
pub use manifest::{
    initialize_manifest, is_manifest, is_manifest_text, parse_manifest, parse_manifest_json,
    Manifest,
};
