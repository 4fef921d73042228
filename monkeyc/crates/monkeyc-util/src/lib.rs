//! Shared foundation types for the `monkeyc` pipeline crates.
//!
//! This crate holds the pieces every stage of the pipeline
//! (lexer, parser, evaluator, CLI) needs and none of them owns
//! exclusively: source positions and the diagnostic sink parse
//! errors are collected into.

mod diagnostic;
mod error;
mod position;
mod source_map;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use error::{PositionError, PositionResult};
pub use position::Position;
pub use source_map::SourceMap;
