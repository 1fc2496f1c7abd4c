//! # bundle-maker CLI
//!
//! Generates Symfony bundle skeletons.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults + file + env).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  4   | Configuration error     |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod prompt;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    // clap handles --help / --version itself; anything else that fails here
    // is a usage error.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    // The guard flushes the --log-file writer on drop.
    let _log_guard = match init_logging(&cli.global) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e:#}");
            return ExitCode::from(1);
        }
    };

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            return handle_error(
                CliError::ConfigError {
                    message: format!("{e:#}"),
                    source: None,
                },
                cli.global.verbose > 0,
                cli.global.no_color,
            );
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;
    let no_color = cli.global.no_color || config.output.no_color;

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, output) {
        Ok(()) => {
            info!("bundle-maker completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, no_color),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::New(cmd) => commands::new::execute(cmd, config, output),
        Commands::Init(cmd) => commands::init::execute(cmd, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => {
            commands::config::execute(cmd, cli.global.config, config, output)
        }
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool, no_color: bool) -> ExitCode {
    err.log();

    // stderr, so the message survives a redirected stdout.
    let msg = if !no_color && std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
