//! Command registry, help renderer and dispatcher.
//!
//! [`Helper`] owns the classified arguments of one invocation, the
//! documented entries, and a map from invocation tokens (names and aliases)
//! to handlers. Registration calls chain; [`Helper::dispatch`] is the final
//! step and runs at most one handler.
//!
//! Dispatch never exits the process. Bad input (no arguments, unknown
//! command, malformed registration) prints guidance through the help
//! renderer and returns control to the host, which decides the exit code
//! from [`Helper::last_outcome`].

use std::collections::HashMap;
use std::io::{self, Stdout, Write};
use std::rc::Rc;

use tracing::{debug, warn};

use crate::classify::{ClassifiedArgs, classify};
use crate::config::HelpConfig;
use crate::entry::{Category, Entry};
use crate::error::RegistrationError;
use crate::render::{self, Row, Section};

/// Handler bound to a command name or alias.
///
/// Handlers get the whole helper so they can query the classified
/// arguments, read config values and render help.
pub type Handler<W> = Rc<dyn Fn(&mut Helper<W>)>;

/// Token of the fallback handler.
pub const DEFAULT_HANDLER: &str = "default";

/// Command tokens that always render help.
pub const HELP_TOKENS: [&str; 3] = ["-h", "--help", "help"];

/// Message shown when no argument is given and no default handler exists.
pub const MISSING_ARGUMENT_MESSAGE: &str = "At least one argument is required.";

/// What [`Helper::dispatch`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No arguments; the default handler ran.
    Default,
    /// The command token asked for help.
    Help,
    /// The handler bound to this token ran.
    Handler(String),
    /// Unknown token pushed onto the values and handed to the default handler.
    Fallback(String),
    /// No arguments and no default handler; help was shown.
    MissingArgument,
    /// Unknown token and no default handler; help was shown.
    UnknownCommand(String),
}

impl DispatchOutcome {
    /// Returns `true` when a handler (named or default) ran.
    pub fn ran_handler(&self) -> bool {
        matches!(
            self,
            DispatchOutcome::Default | DispatchOutcome::Handler(_) | DispatchOutcome::Fallback(_)
        )
    }

    /// Returns `true` for the reported user-input failures.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            DispatchOutcome::MissingArgument | DispatchOutcome::UnknownCommand(_)
        )
    }
}

/// Registry of documented commands, options and configs plus their handlers.
///
/// # Examples
///
/// ```
/// use clihp_core::{Entry, HelpConfig, Helper};
///
/// let mut helper = Helper::with_writer(["-s", "host=example.org"], Vec::new());
/// helper
///     .configure(HelpConfig::default().with_name("srvctl"))
///     .add_command(
///         Entry::new("start")
///             .with_alias("-s, --start")
///             .with_about("Start the server")
///             .with_exec(|h: &mut Helper<Vec<u8>>| {
///                 let host = h.config_value("host").unwrap_or("localhost").to_string();
///                 h.write_line(&format!("Server running at \"{host}\""));
///             }),
///     )
///     .dispatch();
///
/// let out = String::from_utf8(helper.into_writer()).unwrap();
/// assert_eq!(out, "Server running at \"example.org\"\n");
/// ```
pub struct Helper<W = Stdout> {
    config: HelpConfig,
    args: ClassifiedArgs,
    commands: Vec<Entry<W>>,
    options: Vec<Entry<W>>,
    configs: Vec<Entry<W>>,
    handlers: HashMap<String, Handler<W>>,
    max_name_len: usize,
    writer: W,
    last_outcome: Option<DispatchOutcome>,
}

impl Helper<Stdout> {
    /// Captures the process arguments (program path removed) and writes to
    /// stdout.
    pub fn new() -> Self {
        Self::from_args(
            std::env::args_os()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    /// Uses the given raw arguments and writes to stdout.
    pub fn from_args<I, S>(raw_args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_writer(raw_args, io::stdout())
    }
}

impl Default for Helper<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + 'static> Helper<W> {
    /// Uses the given raw arguments and output sink.
    pub fn with_writer<I, S>(raw_args: I, writer: W) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            config: HelpConfig::default(),
            args: classify(raw_args),
            commands: Vec::new(),
            options: Vec::new(),
            configs: Vec::new(),
            handlers: HashMap::new(),
            max_name_len: 0,
            writer,
            last_outcome: None,
        }
    }

    /// Replaces the display configuration.
    pub fn configure(&mut self, config: HelpConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Registers an entry under a category given by name (`command`/`cmd`,
    /// `option`/`opt`, `config`/`cfg`).
    ///
    /// A rejected entry is not registered; the reason is printed above the
    /// help screen and the helper is returned unchanged.
    pub fn register(&mut self, category: &str, entry: Entry<W>) -> &mut Self {
        let result = category
            .parse::<Category>()
            .and_then(|category| entry.validate(category).map(|()| category));

        match result {
            Ok(category) => self.insert(category, entry),
            Err(e) => {
                warn!(category, name = %entry.name, error = %e, "Rejected registration");
                self.render_help(Some(&e.to_string()))
            }
        }
    }

    /// Registers an entry, returning the validation error instead of
    /// printing it.
    ///
    /// # Errors
    ///
    /// Returns the [`RegistrationError`] from [`Entry::validate`].
    pub fn try_register(
        &mut self,
        category: Category,
        entry: Entry<W>,
    ) -> Result<&mut Self, RegistrationError> {
        entry.validate(category)?;
        Ok(self.insert(category, entry))
    }

    /// Registers a command.
    pub fn add_command(&mut self, entry: Entry<W>) -> &mut Self {
        self.register(Category::Command.as_str(), entry)
    }

    /// Registers an option.
    pub fn add_option(&mut self, entry: Entry<W>) -> &mut Self {
        self.register(Category::Option.as_str(), entry)
    }

    /// Registers a config key.
    pub fn add_config(&mut self, entry: Entry<W>) -> &mut Self {
        self.register(Category::Config.as_str(), entry)
    }

    /// Binds a handler without documenting it. An empty name is ignored.
    pub fn register_hidden<F>(&mut self, name: &str, handler: F) -> &mut Self
    where
        F: Fn(&mut Helper<W>) + 'static,
    {
        if name.is_empty() {
            debug!("Ignoring hidden handler with empty name");
            return self;
        }
        self.handlers.insert(name.to_string(), Rc::new(handler));
        self
    }

    fn insert(&mut self, category: Category, entry: Entry<W>) -> &mut Self {
        self.max_name_len = self.max_name_len.max(entry.name.chars().count());

        let list = match category {
            Category::Command => &mut self.commands,
            Category::Option => &mut self.options,
            Category::Config => &mut self.configs,
        };
        let replaced = match list.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => {
                debug!(%category, name = %entry.name, "Replacing entry");
                Some(std::mem::replace(existing, entry.clone()))
            }
            None => {
                list.push(entry.clone());
                None
            }
        };

        // Bindings of a replaced entry must not outlive it.
        if let Some(old) = replaced.filter(|old| old.exec.is_some()) {
            self.handlers.remove(&old.name);
            for token in old.alias_tokens() {
                self.handlers.remove(&token);
            }
        }

        if let Some(exec) = &entry.exec {
            self.handlers.insert(entry.name.clone(), Rc::clone(exec));
            for token in entry.alias_tokens() {
                self.handlers.insert(token, Rc::clone(exec));
            }
        }

        self
    }

    fn builtin_entries() -> [Entry<W>; 2] {
        [
            Entry::new("help")
                .with_alias("-h, --help")
                .with_about("Display this help.")
                .with_exec(|h: &mut Helper<W>| {
                    h.render_help(None);
                }),
            Entry::new("version")
                .with_alias("-v, --version")
                .with_about("Display version number.")
                .with_exec(|h: &mut Helper<W>| {
                    h.print_version();
                }),
        ]
    }

    /// Builds the help screen.
    ///
    /// Built-in `help` and `version` rows are included even before
    /// [`dispatch`](Self::dispatch) registers them; the `default` command is
    /// never listed.
    pub fn help_text(&self, message: Option<&str>) -> String {
        let pending: Vec<Entry<W>> = Self::builtin_entries()
            .into_iter()
            .filter(|b| !self.commands.iter().any(|c| c.name == b.name))
            .collect();
        let max_name_len = pending
            .iter()
            .map(|e| e.name.chars().count())
            .fold(self.max_name_len, usize::max);

        let commands = self
            .commands
            .iter()
            .chain(pending.iter())
            .filter(|e| e.name != DEFAULT_HANDLER)
            .map(|e| Row {
                name: &e.name,
                second: e.alias.as_deref().unwrap_or_default(),
                about: e.about.lines(),
                usage: e.usage.as_ref().map(|u| u.lines()).unwrap_or_default(),
            })
            .collect();
        let configs = self
            .configs
            .iter()
            .map(|e| Row {
                name: &e.name,
                second: e.value_type.as_deref().unwrap_or_default(),
                about: e.about.lines(),
                usage: Vec::new(),
            })
            .collect();
        let options = self
            .options
            .iter()
            .map(|e| Row {
                name: &e.name,
                second: e.alias.as_deref().unwrap_or_default(),
                about: e.about.lines(),
                usage: Vec::new(),
            })
            .collect();

        let sections = [
            Section {
                headers: ["COMMANDS", "ALIAS", "DESCRIPTION"],
                rows: commands,
            },
            Section {
                headers: ["CONFIGS", "VALUE TYPE", "DESCRIPTION"],
                rows: configs,
            },
            Section {
                headers: ["OPTIONS", "ALIAS", "DESCRIPTION"],
                rows: options,
            },
        ];

        render::help_text(&self.config, message, &sections, max_name_len)
    }

    /// Writes the help screen, optionally preceded by `message`.
    pub fn render_help(&mut self, message: Option<&str>) -> &mut Self {
        let text = self.help_text(message);
        self.emit(&text);
        self
    }

    /// Writes `{name} version {version}`.
    pub fn print_version(&mut self) -> &mut Self {
        let line = format!("{} version {}\n", self.config.name, self.config.version);
        self.emit(&line);
        self
    }

    /// Writes one line to the output sink.
    pub fn write_line(&mut self, line: &str) -> &mut Self {
        let line = format!("{line}\n");
        self.emit(&line);
        self
    }

    fn emit(&mut self, text: &str) {
        let result = self
            .writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush());
        if let Err(e) = result {
            warn!(error = %e, "Failed to write output");
        }
    }

    fn with_help_hint(&self, message: &str) -> String {
        format!(
            "{message}\nRun {} --help for more information.",
            self.config.name
        )
    }

    fn handler(&self, token: &str) -> Option<Handler<W>> {
        self.handlers.get(token).cloned()
    }

    /// Registers the built-ins and runs the handler selected by the command
    /// token.
    ///
    /// Policy, first match wins:
    ///
    /// 1. no arguments → `default` handler, else help with
    ///    [`MISSING_ARGUMENT_MESSAGE`]
    /// 2. `-h`, `--help`, `help` → help
    /// 3. handler bound to the token → that handler
    /// 4. `default` handler → token pushed onto the values, then `default`
    /// 5. otherwise → help with `Unknown command: <token>`
    ///
    /// Both help-with-message cases add a `Run <name> --help` hint line.
    pub fn dispatch(&mut self) -> &mut Self {
        for entry in Self::builtin_entries() {
            self.insert(Category::Command, entry);
        }

        let outcome = match self.args.command.clone() {
            None => match self.handler(DEFAULT_HANDLER) {
                Some(handler) => {
                    handler(self);
                    DispatchOutcome::Default
                }
                None => {
                    let message = self.with_help_hint(MISSING_ARGUMENT_MESSAGE);
                    self.render_help(Some(&message));
                    DispatchOutcome::MissingArgument
                }
            },
            Some(token) if HELP_TOKENS.contains(&token.as_str()) => {
                self.render_help(None);
                DispatchOutcome::Help
            }
            Some(token) => {
                if let Some(handler) = self.handler(&token) {
                    handler(self);
                    DispatchOutcome::Handler(token)
                } else if let Some(handler) = self.handler(DEFAULT_HANDLER) {
                    self.args.values.push(token.clone());
                    handler(self);
                    DispatchOutcome::Fallback(token)
                } else {
                    let message = self.with_help_hint(&format!("Unknown command: {token}"));
                    self.render_help(Some(&message));
                    DispatchOutcome::UnknownCommand(token)
                }
            }
        };

        debug!(outcome = ?outcome, "Dispatched");
        self.last_outcome = Some(outcome);
        self
    }
}

impl<W> Helper<W> {
    /// Returns `true` if any of `names` was passed as an option.
    pub fn has_option<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args.has_option(names)
    }

    /// Returns `true` if any of `names` was passed as a value.
    pub fn has_value<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args.has_value(names)
    }

    /// Returns `true` if any of `names` was passed as a config key.
    pub fn has_config<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args.has_config(names)
    }

    /// Classified arguments of this invocation.
    pub fn args(&self) -> &ClassifiedArgs {
        &self.args
    }

    /// Command token, if any.
    pub fn command(&self) -> Option<&str> {
        self.args.command.as_deref()
    }

    /// Options in input order.
    pub fn options(&self) -> &[String] {
        &self.args.options
    }

    /// Values in input order (plus an unknown command token after fallback
    /// dispatch).
    pub fn values(&self) -> &[String] {
        &self.args.values
    }

    /// Value of a config key.
    pub fn config_value(&self, key: &str) -> Option<&str> {
        self.args.config.get(key).map(String::as_str)
    }

    /// Current display configuration.
    pub fn help_config(&self) -> &HelpConfig {
        &self.config
    }

    /// Configured program name.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Configured version string.
    pub fn version(&self) -> &str {
        &self.config.version
    }

    /// Registered entries of a category, in registration order.
    pub fn entries(&self, category: Category) -> &[Entry<W>] {
        match category {
            Category::Command => &self.commands,
            Category::Option => &self.options,
            Category::Config => &self.configs,
        }
    }

    /// Returns `true` if a handler is bound to `token`.
    pub fn has_handler(&self, token: &str) -> bool {
        self.handlers.contains_key(token)
    }

    /// Longest registered entry name, in chars.
    pub fn max_name_len(&self) -> usize {
        self.max_name_len
    }

    /// Result of the last [`dispatch`](Helper::dispatch).
    pub fn last_outcome(&self) -> Option<&DispatchOutcome> {
        self.last_outcome.as_ref()
    }

    /// Output sink.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes the helper and returns the output sink.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    fn helper(args: &[&str]) -> Helper<Vec<u8>> {
        let mut helper = Helper::with_writer(args.iter().copied(), Vec::new());
        helper.configure(
            HelpConfig::default()
                .with_name("srvctl")
                .with_info("Tiny server control")
                .with_version("0.3.0")
                .with_usage("srvctl command [options...]"),
        );
        helper
    }

    fn output(helper: &Helper<Vec<u8>>) -> String {
        String::from_utf8_lossy(helper.writer()).into_owned()
    }

    #[test]
    fn test_register_binds_name_and_aliases() {
        let mut h = helper(&[]);
        h.add_command(
            Entry::new("start")
                .with_alias("-s, --start")
                .with_exec(|_h: &mut Helper<Vec<u8>>| {}),
        );

        assert!(h.has_handler("start"));
        assert!(h.has_handler("-s"));
        assert!(h.has_handler("--start"));
        assert_eq!(h.entries(Category::Command).len(), 1);
        assert_eq!(h.max_name_len(), 5);
    }

    #[test]
    fn test_entry_without_exec_binds_nothing() {
        let mut h = helper(&[]);
        h.add_option(Entry::new("--verbose").with_alias("-b"));

        assert!(!h.has_handler("--verbose"));
        assert!(!h.has_handler("-b"));
        assert_eq!(h.entries(Category::Option).len(), 1);
        assert_eq!(h.max_name_len(), 9);
    }

    #[test]
    fn test_register_unknown_category_is_noop_with_message() {
        let mut h = helper(&[]);
        h.register("bogus", Entry::new("start").with_exec(|_h: &mut Helper<Vec<u8>>| {}));

        assert!(!h.has_handler("start"));
        assert!(h.entries(Category::Command).is_empty());
        assert_eq!(h.max_name_len(), 0);
        assert!(output(&h).starts_with("invalid doc type: bogus\n"));
    }

    #[test]
    fn test_try_register_returns_error() {
        let mut h = helper(&[]);
        let err = h
            .try_register(Category::Option, Entry::new("--x").with_usage("nope"))
            .err();

        assert_eq!(
            err,
            Some(RegistrationError::UsageOnNonCommand("--x".to_string()))
        );
        assert!(h.entries(Category::Option).is_empty());
        assert!(output(&h).is_empty());
    }

    #[test]
    fn test_reregistering_replaces_entry() {
        let mut h = helper(&[]);
        h.add_command(Entry::new("stop").with_about("old"))
            .add_command(Entry::new("stop").with_about("new"));

        let entries = h.entries(Category::Command);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].about.lines(), vec!["new"]);
    }

    #[test]
    fn test_register_hidden_ignores_empty_name() {
        let mut h = helper(&[]);
        h.register_hidden("", |_h: &mut Helper<Vec<u8>>| {})
            .register_hidden("default", |_h: &mut Helper<Vec<u8>>| {});

        assert!(!h.has_handler(""));
        assert!(h.has_handler(DEFAULT_HANDLER));
        assert!(h.entries(Category::Command).is_empty());
    }

    #[test]
    fn test_dispatch_runs_handler_for_alias() {
        let hits = Rc::new(Cell::new(0));
        for token in ["start", "-s", "--start"] {
            let seen = Rc::clone(&hits);
            let mut h = helper(&[token, "--verbose"]);
            h.add_command(
                Entry::new("start")
                    .with_alias("-s, --start")
                    .with_exec(move |h: &mut Helper<Vec<u8>>| {
                        assert!(h.has_option(["--verbose"]));
                        seen.set(seen.get() + 1);
                    }),
            )
            .dispatch();

            assert_eq!(
                h.last_outcome(),
                Some(&DispatchOutcome::Handler(token.to_string()))
            );
        }
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn test_dispatch_no_args_without_default() {
        let mut h = helper(&[]);
        h.dispatch();

        assert_eq!(h.last_outcome(), Some(&DispatchOutcome::MissingArgument));
        assert!(output(&h).starts_with(&format!(
            "{MISSING_ARGUMENT_MESSAGE}\nRun srvctl --help for more information.\n"
        )));
        assert!(h.last_outcome().is_some_and(DispatchOutcome::is_error));
    }

    #[test]
    fn test_dispatch_no_args_with_default() {
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        let mut h = helper(&[]);
        h.register_hidden(DEFAULT_HANDLER, move |h: &mut Helper<Vec<u8>>| {
            assert!(h.values().is_empty());
            flag.set(true);
        })
        .dispatch();

        assert!(ran.get());
        assert_eq!(h.last_outcome(), Some(&DispatchOutcome::Default));
        assert!(h.last_outcome().is_some_and(DispatchOutcome::ran_handler));
        assert!(output(&h).is_empty());
    }

    #[test]
    fn test_dispatch_unknown_pushes_value_to_default() {
        let mut h = helper(&["build.txt", "out"]);
        h.register_hidden(DEFAULT_HANDLER, |h: &mut Helper<Vec<u8>>| {
            let joined = h.values().join(",");
            h.write_line(&joined);
        })
        .dispatch();

        assert_eq!(
            h.last_outcome(),
            Some(&DispatchOutcome::Fallback("build.txt".to_string()))
        );
        assert_eq!(h.values(), ["out".to_string(), "build.txt".to_string()]);
        assert_eq!(output(&h), "out,build.txt\n");
    }

    #[test]
    fn test_dispatch_unknown_without_default() {
        let mut h = helper(&["launch"]);
        h.dispatch();

        assert_eq!(
            h.last_outcome(),
            Some(&DispatchOutcome::UnknownCommand("launch".to_string()))
        );
        assert!(output(&h).starts_with(
            "Unknown command: launch\nRun srvctl --help for more information.\nsrvctl\n"
        ));
    }

    #[test]
    fn test_dispatch_help_tokens_skip_handlers() {
        for token in HELP_TOKENS {
            let mut h = helper(&[token]);
            h.register_hidden(token, |h: &mut Helper<Vec<u8>>| {
                h.write_line("should not run");
            })
            .dispatch();

            assert_eq!(h.last_outcome(), Some(&DispatchOutcome::Help));
            let out = output(&h);
            assert!(out.starts_with("srvctl\n"));
            assert!(!out.contains("should not run"));
        }
    }

    #[test]
    fn test_dispatch_version_aliases() {
        for token in ["version", "-v", "--version"] {
            let mut h = helper(&[token]);
            h.dispatch();
            assert_eq!(output(&h), "srvctl version 0.3.0\n");
        }
    }

    #[test]
    fn test_dispatch_twice_keeps_single_builtins() {
        let mut h = helper(&["version"]);
        h.dispatch().dispatch();

        let names: Vec<&str> = h
            .entries(Category::Command)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["help", "version"]);
    }

    #[test]
    fn test_help_text_lists_builtins_and_hides_default() {
        let mut h = helper(&[]);
        h.add_command(Entry::new("default").with_exec(|_h: &mut Helper<Vec<u8>>| {}))
            .add_command(Entry::new("start").with_about("Start the server"));

        let before = h.help_text(None);
        assert!(before.contains("help "));
        assert!(before.contains("-v, --version"));
        assert!(!before.lines().any(|l| l.starts_with("default")));

        h.dispatch();
        let after = h.help_text(None);
        assert_eq!(after.matches("Display this help.").count(), 1);
        assert_eq!(after.matches("Display version number.").count(), 1);
        assert!(!after.lines().any(|l| l.starts_with("default")));
    }

    #[test]
    fn test_membership_through_helper() {
        let h = helper(&["start", "-b", "fast", "host=h", "port=1"]);

        assert!(h.has_option(["--verbose", "-b"]));
        assert!(h.has_value(["fast"]));
        assert!(!h.has_value(["start"]));
        assert!(h.has_config(["port"]));
        assert_eq!(h.config_value("host"), Some("h"));
        assert_eq!(h.command(), Some("start"));
        assert_eq!(h.args().values, vec!["fast".to_string()]);
        assert_eq!(h.args().config.len(), 2);
    }

    #[test]
    fn test_configure_updates_accessors() {
        let mut h = helper(&[]);
        assert_eq!(h.version(), "0.3.0");

        h.configure(HelpConfig::default().with_name("other").with_version("9.9.9"));
        assert_eq!(h.name(), "other");
        assert_eq!(h.version(), "9.9.9");
        assert_eq!(h.help_config().usage, crate::DEFAULT_USAGE);
    }

    #[test]
    fn test_reregistering_drops_old_alias_bindings() {
        let ran = Rc::new(RefCell::new(Vec::new()));
        let old = Rc::clone(&ran);
        let new = Rc::clone(&ran);

        let mut h = helper(&["-s"]);
        h.add_command(
            Entry::new("start")
                .with_alias("-s")
                .with_exec(move |_h: &mut Helper<Vec<u8>>| old.borrow_mut().push("old")),
        )
        .add_command(
            Entry::new("start")
                .with_alias("--begin")
                .with_exec(move |_h: &mut Helper<Vec<u8>>| new.borrow_mut().push("new")),
        );

        assert!(!h.has_handler("-s"));
        assert!(h.has_handler("--begin"));
        assert!(h.has_handler("start"));

        h.dispatch();
        assert!(ran.borrow().is_empty());
        assert_eq!(
            h.last_outcome(),
            Some(&DispatchOutcome::UnknownCommand("-s".to_string()))
        );
    }

    #[test]
    fn test_reregistering_without_exec_unbinds_name() {
        let mut h = helper(&["start"]);
        h.add_command(
            Entry::new("start")
                .with_alias("-s")
                .with_exec(|h: &mut Helper<Vec<u8>>| {
                    h.write_line("old handler");
                }),
        )
        .add_command(Entry::new("start").with_about("Documented only"));

        assert!(!h.has_handler("start"));
        assert!(!h.has_handler("-s"));

        h.dispatch();
        assert!(!output(&h).contains("old handler"));
        assert_eq!(
            h.last_outcome(),
            Some(&DispatchOutcome::UnknownCommand("start".to_string()))
        );
    }

    #[test]
    fn test_help_text_renders_every_usage_line() {
        let mut h = helper(&[]);
        h.add_command(
            Entry::new("start")
                .with_alias("-s")
                .with_about("Start the server")
                .with_usage(["srvctl start host=h", "srvctl -s host=h port=1"]),
        );

        let text = h.help_text(None);
        let lines: Vec<&str> = text.lines().collect();
        let row = lines
            .iter()
            .position(|l| l.starts_with("start "))
            .unwrap();

        // width = len("version") + 4 = 11; indent = 11 + 2 + 11 + 2
        let indent = " ".repeat(26);
        assert_eq!(lines[row + 1], format!("{indent}[?] srvctl start host=h"));
        assert_eq!(lines[row + 2], format!("{indent}[?] srvctl -s host=h port=1"));
        assert!(lines[row + 3].starts_with("help "));
    }
}
