//! Source line lookup for rendering diagnostics with context.
//!
//! A full multi-file compiler needs a source map keyed by file id; this
//! interpreter only ever evaluates one source unit at a time (a REPL
//! line or a whole file), so `SourceMap` wraps a single borrowed string
//! and resolves a [`Position`]'s line number against it on demand.

use crate::error::{PositionError, PositionResult};
use crate::Position;

/// A borrowed view over one source string, split into lines lazily.
pub struct SourceMap<'a> {
    lines: Vec<&'a str>,
}

impl<'a> SourceMap<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { lines: source.lines().collect() }
    }

    /// The text of the given 1-indexed line.
    pub fn line(&self, line: u32) -> PositionResult<&'a str> {
        self.lines.get(line as usize - 1).copied().ok_or(PositionError::InvalidLine {
            line: line as usize,
            max_lines: self.lines.len(),
        })
    }

    /// Renders a `"<line> | <source>"` context string for a diagnostic
    /// position, or `None` if the position doesn't resolve against this
    /// source (e.g. it was computed against different source text).
    pub fn context_line(&self, position: Position) -> Option<String> {
        self.line(position.line).ok().map(|text| format!("{} | {text}", position.line))
    }
}
