//! Source position tracking.
//!
//! The lexer advances a single cursor through the source text and stamps
//! every token with the line/column it started on. Parser and evaluator
//! errors carry the position of the offending token through to the
//! diagnostics reported to the user.

use std::fmt;

/// A 1-indexed line/column pair identifying a location in source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const START: Position = Position { line: 1, column: 1 };

    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Advance this position past a single character, handling line breaks.
    pub fn advance(self, ch: char) -> Self {
        if ch == '\n' {
            Position {
                line: self.line + 1,
                column: 1,
            }
        } else {
            Position {
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_along_a_line() {
        let pos = Position::START.advance('a');
        assert_eq!(pos, Position::new(1, 2));
    }

    #[test]
    fn advance_wraps_on_newline() {
        let pos = Position::START.advance('\n');
        assert_eq!(pos, Position::new(2, 1));
    }

    #[test]
    fn display_matches_line_colon_column() {
        assert_eq!(Position::new(3, 8).to_string(), "3:8");
    }
}
