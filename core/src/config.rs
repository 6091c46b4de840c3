//! Display configuration for the help screen.
//!
//! Every field has a default, so a partial YAML (or JSON) document is enough:
//!
//! ```yaml
//! name: srvctl
//! info: Tiny server control
//! usage: srvctl command [options...]
//! prefix:
//!   - "-->"
//!   - "-------- SERVER CONTROL -------->"
//!   - "-->"
//! space: "  "
//! ```
//!
//! When `version` is omitted it comes from `package.json` in the current
//! directory, or `1.0.0`.

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::metadata::PackageMetadata;

/// Product name shown when none is configured.
pub const DEFAULT_NAME: &str = "Clihp";
/// Tagline shown when none is configured.
pub const DEFAULT_INFO: &str = "A Lightweight Command Line Interface (CLI) Helper";
/// Usage line shown when none is configured.
pub const DEFAULT_USAGE: &str = "Usage informations goes here";

/// Title block and layout settings for [`Helper`](crate::Helper).
///
/// # Examples
///
/// ```
/// use clihp_core::HelpConfig;
///
/// let config = HelpConfig::default()
///     .with_name("srvctl")
///     .with_usage("srvctl command [options...]")
///     .with_space("  ");
/// assert_eq!(config.name, "srvctl");
/// assert!(config.prefix.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpConfig {
    /// Program title.
    pub name: String,
    /// One-line tagline under the title.
    pub info: String,
    /// Version string, printed as `v{version}`.
    pub version: String,
    /// Usage line printed before the entry tables.
    pub usage: String,
    /// Banner lines printed above the title.
    pub prefix: Vec<String>,
    /// Left margin prepended to every output line.
    pub space: String,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            info: DEFAULT_INFO.to_string(),
            version: PackageMetadata::from_current_dir().version,
            usage: DEFAULT_USAGE.to_string(),
            prefix: Vec::new(),
            space: String::new(),
        }
    }
}

impl HelpConfig {
    /// Loads configuration from a YAML or JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::ConfigError::Io) if the file cannot be read, or
    /// [`Yaml`](crate::ConfigError::Yaml) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::ConfigError::Io) if the file cannot be written,
    /// or [`Yaml`](crate::ConfigError::Yaml) if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Sets the program title.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the tagline.
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = info.into();
        self
    }

    /// Sets the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the usage line.
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Sets the banner lines.
    pub fn with_prefix<I, S>(mut self, prefix: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefix = prefix.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the left margin.
    pub fn with_space(mut self, space: impl Into<String>) -> Self {
        self.space = space.into();
        self
    }
}
