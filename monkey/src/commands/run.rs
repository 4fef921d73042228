//! Run command implementation.
//!
//! Executes a whole source file through the pipeline and prints the
//! final value. Parse errors abort before evaluation ever starts.

use std::path::PathBuf;

use monkeyc_eval::{eval_program, Environment};
use monkeyc_par::Parser;
use monkeyc_util::{Handler, SourceMap};

use crate::error::{MonkeyError, Result};

/// Arguments for the run command.
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Source file to execute.
    pub path: PathBuf,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Run command handler.
pub struct RunCommand {
    args: RunArgs,
}

impl RunCommand {
    /// Create a new RunCommand.
    pub fn new(args: RunArgs) -> Self {
        Self { args }
    }

    /// Execute the source file and print its result.
    pub fn run(&self) -> Result<()> {
        let source = std::fs::read_to_string(&self.args.path).map_err(|e| {
            MonkeyError::FileOperation(format!("{}: {e}", self.args.path.display()))
        })?;

        let handler = Handler::new();
        let mut parser = Parser::from_source(&source, &handler);
        let program = parser.parse_program();

        if handler.has_errors() {
            let source_map = SourceMap::new(&source);
            for diagnostic in handler.diagnostics() {
                eprintln!("parse error: {}", diagnostic.message);
                if let Some(context) = source_map.context_line(diagnostic.position) {
                    eprintln!("  {context}");
                }
            }
            return Err(MonkeyError::FileOperation(format!(
                "{} failed to parse",
                self.args.path.display()
            )));
        }

        if self.args.verbose {
            eprintln!("parsed {} top-level statement(s)", program.statements.len());
        }

        let env = Environment::new();
        let value = eval_program(&program, &env);

        if value.is_error() {
            eprintln!("{}", value.inspect());
            return Err(MonkeyError::FileOperation(value.inspect()));
        }

        println!("{}", value.inspect());
        Ok(())
    }
}

/// Run a source file with the given arguments.
pub fn run_file(args: RunArgs) -> Result<()> {
    RunCommand::new(args).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn write_source(contents: &str) -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), contents).unwrap();
        file
    }

    #[test]
    fn running_a_file_prints_its_final_expression() {
        let file = write_source("let a = 2; let b = 3; a * b;");
        let args = RunArgs { path: file.path().to_path_buf(), verbose: false };
        assert!(run_file(args).is_ok());
    }

    #[test]
    fn a_runtime_error_is_a_command_error() {
        let file = write_source("1 + true;");
        let args = RunArgs { path: file.path().to_path_buf(), verbose: false };
        assert!(run_file(args).is_err());
    }

    #[test]
    fn a_missing_file_is_a_command_error() {
        let args = RunArgs { path: PathBuf::from("/nonexistent/source.monkey"), verbose: false };
        assert!(run_file(args).is_err());
    }
}
