//! Diagnostic collection.
//!
//! The parser never aborts on a syntax error: it records a [`Diagnostic`]
//! and keeps going. A [`Handler`] is the append-only sink for those
//! diagnostics, shared by reference for the duration of a parse.

use std::cell::RefCell;
use std::fmt;

use crate::Position;

/// Diagnostic severity. The evaluator and lexer never go through a
/// `Handler`; only parse errors are collected here today, but the
/// level is kept general so a future pass (e.g. unused-variable
/// warnings) has somewhere to report into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A single diagnostic message tied to a source position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub position: Position,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, position: Position) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            position,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Append-only collector of diagnostics produced while parsing.
///
/// `Handler` collects by interior mutability so it can be threaded
/// through recursive-descent parsing functions that only hold `&self`.
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self, message: impl Into<String>, position: Position) {
        self.diagnostics
            .borrow_mut()
            .push(Diagnostic::error(message, position));
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Plain error message strings in the order they were recorded,
    /// matching the canonical wording parser callers assert on.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics
            .borrow()
            .iter()
            .map(|d| d.message.clone())
            .collect()
    }

    /// The recorded diagnostics themselves, for callers that need the
    /// source position alongside each message (e.g. to render a line
    /// of source context under a parse error).
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_in_order() {
        let handler = Handler::new();
        handler.error("first", Position::START);
        handler.error("second", Position::new(2, 1));
        assert_eq!(handler.messages(), vec!["first", "second"]);
    }

    #[test]
    fn empty_handler_has_no_errors() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert!(handler.is_empty());
    }
}
