//! Command modules for the monkey CLI.
//!
//! Each subcommand is implemented in its own file.

pub mod repl;
pub mod run;

pub use repl::{run_repl, ReplArgs};
pub use run::{run_file, RunArgs};
