//! Single-pass classification of raw process arguments.
//!
//! The first argument is the command token. Every later argument lands in
//! exactly one bucket:
//!
//! - contains `=` → config pair(s)
//! - starts with `-` → option
//! - anything else → value
//!
//! # Examples
//!
//! ```
//! use clihp_core::classify;
//!
//! let args = classify(["cmd", "-x", "a=b", "val1"]);
//! assert_eq!(args.command.as_deref(), Some("cmd"));
//! assert_eq!(args.options, vec!["-x"]);
//! assert_eq!(args.values, vec!["val1"]);
//! assert_eq!(args.config.get("a").map(String::as_str), Some("b"));
//! ```

use std::collections::BTreeMap;

use tracing::debug;

/// Arguments split into command token, options, values and config pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedArgs {
    /// First raw argument, if any.
    pub command: Option<String>,
    /// Dash-prefixed arguments in input order (duplicates kept).
    pub options: Vec<String>,
    /// Positional arguments in input order (duplicates kept).
    pub values: Vec<String>,
    /// `key=value` pairs; the last write for a key wins.
    pub config: BTreeMap<String, String>,
}

impl ClassifiedArgs {
    /// Returns `true` when no argument was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.command.is_none()
    }

    /// Returns `true` if any of `names` is in the options list.
    pub fn has_option<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .any(|name| self.options.iter().any(|o| o == name.as_ref()))
    }

    /// Returns `true` if any of `names` is in the values list.
    pub fn has_value<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .any(|name| self.values.iter().any(|v| v == name.as_ref()))
    }

    /// Returns `true` if any of `names` is a config key.
    pub fn has_config<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .any(|name| self.config.contains_key(name.as_ref()))
    }
}

/// Classifies raw arguments (program path already removed).
///
/// Index 0 is taken as the command token and skipped whatever it looks
/// like. Exclusion is positional: a later argument equal to the command is
/// classified like any other.
///
/// An argument with more than one `=` maps *every* part but the last to the
/// last part, so `x=y=z` yields both `x=z` and `y=z`. This quirk is kept for
/// compatibility with existing invocations.
///
/// ```
/// use clihp_core::classify;
///
/// let args = classify(["cmd", "x=y=z"]);
/// assert_eq!(args.config.get("x").map(String::as_str), Some("z"));
/// assert_eq!(args.config.get("y").map(String::as_str), Some("z"));
/// ```
pub fn classify<I, S>(raw_args: I) -> ClassifiedArgs
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut iter = raw_args.into_iter().map(Into::into);
    let mut args = ClassifiedArgs {
        command: iter.next(),
        ..ClassifiedArgs::default()
    };

    for arg in iter {
        if arg.contains('=') {
            let mut parts: Vec<&str> = arg.split('=').collect();
            // `contains('=')` guarantees at least two parts.
            let value = parts.pop().unwrap_or_default();
            for key in parts {
                args.config.insert(key.to_string(), value.to_string());
            }
        } else if arg.starts_with('-') {
            args.options.push(arg);
        } else {
            args.values.push(arg);
        }
    }

    debug!(
        command = ?args.command,
        options = args.options.len(),
        values = args.values.len(),
        config = args.config.len(),
        "Classified arguments"
    );

    args
}
