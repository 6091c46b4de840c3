//! Flat command-line argument classifier, command registry and help
//! renderer.
//!
//! This crate splits raw process arguments into four groups and dispatches
//! to a registered handler:
//!
//! - command token — the first argument, selects the handler
//! - options — arguments starting with `-`
//! - values — bare positional arguments
//! - config — `key=value` pairs
//!
//! The pieces:
//!
//! - [`classify`] — single-pass classification into [`ClassifiedArgs`].
//! - [`Helper`] — registry of documented commands, options and configs
//!   ([`Entry`]), help rendering and dispatch with a `default` fallback.
//! - [`HelpConfig`] — title block and layout, loadable from YAML or JSON.
//! - [`PackageMetadata`] — best-effort default version from `package.json`.
//!
//! This is not a grammar-based parser: there are no nested subcommands, no
//! type coercion and no validation of option values. Handlers query the
//! classified arguments themselves.
//!
//! # Example
//!
//! ```
//! use clihp_core::*;
//!
//! let mut helper = Helper::with_writer(["stop", "--verbose"], Vec::new());
//! helper
//!     .configure(HelpConfig::default().with_name("srvctl").with_version("0.3.0"))
//!     .add_command(
//!         Entry::new("stop")
//!             .with_alias("-q")
//!             .with_about("Stop the server")
//!             .with_exec(|h: &mut Helper<Vec<u8>>| {
//!                 if h.has_option(["--verbose", "-b"]) {
//!                     h.write_line("Stopping server");
//!                 }
//!             }),
//!     )
//!     .add_option(Entry::new("--verbose").with_alias("-b").with_about("Show logs"))
//!     .dispatch();
//!
//! assert_eq!(
//!     helper.last_outcome(),
//!     Some(&DispatchOutcome::Handler("stop".into()))
//! );
//! assert_eq!(helper.into_writer(), b"Stopping server\n");
//! ```

mod classify;
mod config;
mod entry;
mod error;
mod helper;
mod metadata;
mod render;

pub use classify::{ClassifiedArgs, classify};
pub use config::{DEFAULT_INFO, DEFAULT_NAME, DEFAULT_USAGE, HelpConfig};
pub use entry::{Category, Description, Entry};
pub use error::{ConfigError, RegistrationError};
pub use helper::{
    DEFAULT_HANDLER, DispatchOutcome, HELP_TOKENS, Handler, Helper, MISSING_ARGUMENT_MESSAGE,
};
pub use metadata::{DEFAULT_VERSION, MANIFEST_FILE, PackageMetadata};
pub use render::{COLUMN_PAD, GUTTER, USAGE_MARKER};
