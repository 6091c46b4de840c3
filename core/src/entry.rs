//! Registration records for documented commands, options and configs.
//!
//! An [`Entry`] is a tagged record: the [`Category`] it is registered under
//! decides which optional fields are meaningful. Validation runs when the
//! entry is registered, so a malformed record never reaches the help screen
//! or the handler map.
//!
//! # Examples
//!
//! ```
//! use clihp_core::{Category, Entry, Helper};
//!
//! let entry: Entry = Entry::new("start")
//!     .with_alias("-s, --start")
//!     .with_about("Start the server")
//!     .with_usage("app start host=hostname")
//!     .with_exec(|_h: &mut Helper| {});
//!
//! assert_eq!(entry.alias_tokens(), vec!["-s", "--start"]);
//! assert!(entry.validate(Category::Command).is_ok());
//! assert!(entry.validate(Category::Option).is_err());
//! ```

use std::fmt;
use std::io::Stdout;
use std::rc::Rc;
use std::str::FromStr;

use crate::error::RegistrationError;
use crate::helper::{Handler, Helper};

/// Which help section an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Dispatchable command, listed under `COMMANDS`.
    Command,
    /// Dash-prefixed flag, listed under `OPTIONS`.
    Option,
    /// `key=value` setting, listed under `CONFIGS`.
    Config,
}

impl Category {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Command => "command",
            Category::Option => "option",
            Category::Config => "config",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RegistrationError;

    /// Accepts the long names and the short `cmd`/`opt`/`cfg` forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "command" | "cmd" => Ok(Category::Command),
            "option" | "opt" => Ok(Category::Option),
            "config" | "cfg" => Ok(Category::Config),
            other => Err(RegistrationError::UnknownCategory(other.to_string())),
        }
    }
}

/// Help text that is either a single line or an ordered list of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    /// One line.
    Line(String),
    /// Several lines; the first renders inline with the name column.
    Lines(Vec<String>),
}

impl Default for Description {
    fn default() -> Self {
        Description::Line(String::new())
    }
}

impl Description {
    /// Returns the lines in display order.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Description::Line(line) => vec![line.as_str()],
            Description::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for Description {
    fn from(line: &str) -> Self {
        Description::Line(line.to_string())
    }
}

impl From<String> for Description {
    fn from(line: String) -> Self {
        Description::Line(line)
    }
}

impl From<Vec<String>> for Description {
    fn from(lines: Vec<String>) -> Self {
        Description::Lines(lines)
    }
}

impl From<Vec<&str>> for Description {
    fn from(lines: Vec<&str>) -> Self {
        Description::Lines(lines.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Description {
    fn from(lines: [&str; N]) -> Self {
        Description::Lines(lines.iter().map(|l| l.to_string()).collect())
    }
}

/// A documented command, option or config.
///
/// Build one with [`Entry::new`] and the `with_*` methods, then hand it to
/// [`Helper::register`] or one of its shorthands.
pub struct Entry<W = Stdout> {
    /// Primary name; also the dispatch key when a handler is attached.
    pub name: String,
    /// Comma-separated alternate tokens (e.g. `"-d, -g"`).
    pub alias: Option<String>,
    /// Displayed value type (configs only, e.g. `"Number"`).
    pub value_type: Option<String>,
    /// Description column.
    pub about: Description,
    /// Usage hints rendered beneath the row (commands only).
    pub usage: Option<Description>,
    /// Handler invoked when the name or an alias is the command token.
    pub exec: Option<Handler<W>>,
}

impl<W> Entry<W> {
    /// Creates an entry with the given name and no other fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            value_type: None,
            about: Description::default(),
            usage: None,
            exec: None,
        }
    }

    /// Sets the comma-separated alias list.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Sets the displayed value type.
    pub fn with_value_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }

    /// Sets the description.
    pub fn with_about(mut self, about: impl Into<Description>) -> Self {
        self.about = about.into();
        self
    }

    /// Sets the usage hint(s).
    pub fn with_usage(mut self, usage: impl Into<Description>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    /// Attaches a handler.
    pub fn with_exec<F>(mut self, exec: F) -> Self
    where
        F: Fn(&mut Helper<W>) + 'static,
    {
        self.exec = Some(Rc::new(exec));
        self
    }

    /// Alias tokens with all whitespace removed, in declaration order.
    ///
    /// ```
    /// use clihp_core::Entry;
    ///
    /// let entry: Entry = Entry::new("--debug").with_alias("-d, -g");
    /// assert_eq!(entry.alias_tokens(), vec!["-d", "-g"]);
    /// ```
    pub fn alias_tokens(&self) -> Vec<String> {
        self.alias
            .as_deref()
            .map(|alias| {
                alias
                    .split(',')
                    .map(|token| token.chars().filter(|c| !c.is_whitespace()).collect())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Checks that the record is well-formed for `category`.
    ///
    /// # Errors
    ///
    /// Returns the first [`RegistrationError`] found: empty name, empty
    /// alias token, usage on a non-command, or value type on a non-config.
    pub fn validate(&self, category: Category) -> Result<(), RegistrationError> {
        if self.name.trim().is_empty() {
            return Err(RegistrationError::EmptyName);
        }

        if let Some(alias) = &self.alias {
            if self.alias_tokens().iter().any(String::is_empty) {
                return Err(RegistrationError::EmptyAlias(alias.clone()));
            }
        }

        if self.usage.is_some() && category != Category::Command {
            return Err(RegistrationError::UsageOnNonCommand(self.name.clone()));
        }

        if self.value_type.is_some() && category != Category::Config {
            return Err(RegistrationError::ValueTypeOnNonConfig(self.name.clone()));
        }

        Ok(())
    }
}

impl<W> Clone for Entry<W> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            alias: self.alias.clone(),
            value_type: self.value_type.clone(),
            about: self.about.clone(),
            usage: self.usage.clone(),
            exec: self.exec.clone(),
        }
    }
}

impl<W> fmt::Debug for Entry<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name)
            .field("alias", &self.alias)
            .field("value_type", &self.value_type)
            .field("about", &self.about)
            .field("usage", &self.usage)
            .field("exec", &self.exec.is_some())
            .finish()
    }
}
