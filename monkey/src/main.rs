//! monkey - a REPL and file runner for the monkeyc language.
//!
//! This is the command-line entry point. It parses arguments with clap
//! and dispatches to the repl or run command handlers, which drive the
//! lex → parse → eval pipeline exposed by the monkeyc-* crates.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    repl::{run_repl, ReplArgs},
    run::{run_file, RunArgs},
};
use config::Config;
use error::{MonkeyError, Result};

/// monkey - a REPL and file runner for the monkeyc language.
#[derive(Parser, Debug)]
#[command(name = "monkey")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A REPL and file runner for the monkeyc language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true, env = "MONKEY_VERBOSE")]
    verbose: bool,

    /// Path to a configuration file.
    #[arg(short, long, global = true, env = "MONKEY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the monkey CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive read-eval-print loop.
    Repl,

    /// Run a monkeyc source file.
    Run(RunCommand),
}

/// Arguments for the run subcommand.
#[derive(Parser, Debug)]
struct RunCommand {
    /// Source file to execute.
    path: PathBuf,
}

/// Main entry point for the monkey CLI.
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;
    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, cli.verbose, config)
}

/// Initialize the logging system.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose { EnvFilter::new("debug") } else { EnvFilter::new("info") };

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false).with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| MonkeyError::Config(format!("failed to initialize logging: {e}")))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Repl => run_repl(ReplArgs { verbose }, config),
        Commands::Run(args) => run_file(RunArgs { path: args.path, verbose }),
    }
}
