//! Sample server-control program built on `clihp-core`.
//!
//! ```text
//! clihp-demo start host=example.org --verbose
//! clihp-demo -q
//! clihp-demo --help
//! ```

use std::process::ExitCode;

use clihp_core::{DispatchOutcome, Entry, HelpConfig, Helper};
use tracing::info;
use tracing_subscriber::EnvFilter;

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn help_config() -> HelpConfig {
    HelpConfig::default()
        .with_name("clihp-demo")
        .with_info("A Lightweight Command Line Interface (CLI) Helper")
        .with_version(PACKAGE_VERSION)
        .with_usage("clihp-demo command [options...]")
        .with_prefix([
            "-->",
            "-------- CLI HELPER ----------------------------------->",
            "-->",
        ])
}

fn start(helper: &mut Helper) {
    if helper.has_option(["--verbose", "-b"]) {
        helper.write_line("Starting server");
    }

    match helper.config_value("host").map(str::to_string) {
        Some(host) => {
            let port = helper.config_value("port").unwrap_or("80").to_string();
            info!(%host, %port, "Starting server");
            helper.write_line(&format!("Server running at \"{host}:{port}\""));
        }
        None => {
            helper.render_help(Some("The host config is required!"));
        }
    }
}

fn stop(helper: &mut Helper) {
    info!("Stopping server");
    helper.write_line("Stopping server");
}

fn main() -> ExitCode {
    setup_logging();

    let mut helper = Helper::new();
    helper
        .configure(help_config())
        .add_command(
            Entry::new("start")
                .with_alias("-s")
                .with_about("Start the server")
                .with_usage("clihp-demo start host=hostname [port=number]")
                .with_exec(start),
        )
        .add_command(
            Entry::new("stop")
                .with_alias("-q")
                .with_about(["Stop the server", "Pending requests are dropped"])
                .with_usage("clihp-demo stop")
                .with_exec(stop),
        )
        .add_config(
            Entry::new("host")
                .with_value_type("String")
                .with_about("Server hostname"),
        )
        .add_config(
            Entry::new("port")
                .with_value_type("Number")
                .with_about("Server port"),
        )
        .add_option(
            Entry::new("--verbose")
                .with_alias("-b")
                .with_about("Display the logs on the screen"),
        )
        .add_option(
            Entry::new("--debug")
                .with_alias("-d, -g")
                .with_about("Debug the process"),
        )
        .dispatch();

    if helper.last_outcome().is_some_and(DispatchOutcome::is_error) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
