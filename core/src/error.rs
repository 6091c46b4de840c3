//! Error types for registration and configuration loading.
//!
//! User-input mistakes on the command line are never surfaced as errors;
//! they degrade to help output. These types cover the typed library APIs
//! only: [`Helper::try_register`](crate::Helper::try_register) and
//! [`HelpConfig::load`](crate::HelpConfig::load).

use thiserror::Error;

/// Reasons a registration record is rejected.
///
/// The `Display` impl is the message printed above the help screen when the
/// non-typed [`Helper::register`](crate::Helper::register) rejects an entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Category string is not one of `command`, `option`, `config` (or their
    /// short forms).
    #[error("invalid doc type: {0}")]
    UnknownCategory(String),
    /// Entry name is empty or whitespace-only.
    #[error("entry name cannot be empty")]
    EmptyName,
    /// Alias list contains an empty token (e.g. `"-s,,-q"`).
    #[error("empty alias token in: {0}")]
    EmptyAlias(String),
    /// A usage text was given for an option or config entry.
    #[error("usage is only allowed on commands: {0}")]
    UsageOnNonCommand(String),
    /// A value type was given for a command or option entry.
    #[error("value type is only allowed on configs: {0}")]
    ValueTypeOnNonConfig(String),
}

/// Failures while loading or saving a [`HelpConfig`](crate::HelpConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML (or JSON) parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience alias for results with [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;
