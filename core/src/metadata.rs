//! Best-effort package metadata lookup.
//!
//! Reads `package.json` from a directory to find a default version string.
//! Any failure falls back to [`DEFAULT_VERSION`]; nothing is ever returned
//! as an error.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

/// Version used when no usable manifest is found.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Manifest file looked up in the working directory.
pub const MANIFEST_FILE: &str = "package.json";

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    version: Option<String>,
}

/// Metadata resolved from a package manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    /// Manifest version, or [`DEFAULT_VERSION`].
    pub version: String,
}

impl Default for PackageMetadata {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl PackageMetadata {
    /// Reads `package.json` from the current working directory.
    pub fn from_current_dir() -> Self {
        match std::env::current_dir() {
            Ok(dir) => Self::from_dir(dir),
            Err(e) => {
                debug!(error = %e, "No working directory, using default version");
                Self::default()
            }
        }
    }

    /// Reads `package.json` from `dir`.
    ///
    /// ```
    /// use clihp_core::{DEFAULT_VERSION, PackageMetadata};
    ///
    /// let meta = PackageMetadata::from_dir("/definitely/not/here");
    /// assert_eq!(meta.version, DEFAULT_VERSION);
    /// ```
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(MANIFEST_FILE);

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Manifest not readable");
                return Self::default();
            }
        };

        match serde_json::from_str::<Manifest>(&contents) {
            Ok(Manifest {
                version: Some(version),
            }) if !version.trim().is_empty() => Self { version },
            Ok(_) => {
                debug!(path = %path.display(), "Manifest has no version");
                Self::default()
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Manifest not parseable");
                Self::default()
            }
        }
    }
}
