//! REPL command implementation.
//!
//! Reads one line at a time, runs it through the full pipeline
//! (`source → lexer → parser → program → eval`), and prints the result.
//! A line with parse errors prints those errors and skips evaluation for
//! that line entirely — it never reaches the evaluator.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use monkeyc_eval::{eval_program, Environment};
use monkeyc_par::Parser;
use monkeyc_util::{Handler, SourceMap};

use crate::config::Config;
use crate::error::Result;

/// Arguments for the repl command.
#[derive(Debug, Clone, Default)]
pub struct ReplArgs {
    /// Enable verbose output.
    pub verbose: bool,
}

/// Repl command handler.
pub struct ReplCommand {
    args: ReplArgs,
    config: Config,
}

impl ReplCommand {
    /// Create a new ReplCommand.
    pub fn new(args: ReplArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Run the read-eval-print loop until the user exits or input ends.
    pub fn run(&self) -> Result<()> {
        let mut editor = DefaultEditor::new()?;
        if let Some(history) = &self.config.history_file {
            let _ = editor.load_history(history);
        }

        let env = Environment::new();

        loop {
            match editor.readline(&self.config.prompt) {
                Ok(line) => {
                    editor.add_history_entry(line.as_str()).ok();
                    self.eval_line(&line, &env);
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }

        if let Some(history) = &self.config.history_file {
            let _ = editor.save_history(history);
        }

        Ok(())
    }

    fn eval_line(&self, line: &str, env: &monkeyc_eval::Env) {
        let handler = Handler::new();
        let mut parser = Parser::from_source(line, &handler);
        let program = parser.parse_program();

        if handler.has_errors() {
            let source_map = SourceMap::new(line);
            for diagnostic in handler.diagnostics() {
                eprintln!("parse error: {}", diagnostic.message);
                if let Some(context) = source_map.context_line(diagnostic.position) {
                    eprintln!("  {context}");
                }
            }
            return;
        }

        let value = eval_program(&program, env);
        println!("{}", value.inspect());

        if self.args.verbose {
            eprintln!("(ran {} statement(s))", program.statements.len());
        }
    }
}

/// Run the repl with the given arguments and configuration.
pub fn run_repl(args: ReplArgs, config: Config) -> Result<()> {
    ReplCommand::new(args, config).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> ReplCommand {
        ReplCommand::new(ReplArgs::default(), Config::default())
    }

    #[test]
    fn eval_line_prints_the_value_and_keeps_bindings_across_calls() {
        let cmd = command();
        let env = Environment::new();
        cmd.eval_line("let x = 5;", &env);
        cmd.eval_line("x + 1;", &env);
        assert_eq!(env.borrow().get("x"), Some(monkeyc_eval::Value::Integer(5)));
    }

    #[test]
    fn eval_line_with_a_parse_error_does_not_touch_the_environment() {
        let cmd = command();
        let env = Environment::new();
        cmd.eval_line("let = 5;", &env);
        assert_eq!(env.borrow().get("x"), None);
    }
}
