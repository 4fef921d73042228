//! monkeyc-lex — lexical analysis for the monkeyc language.
//!
//! Converts a source string into a stream of [`Token`]s. The lexer is a
//! single-pass, allocation-light scanner: it never backtracks, never
//! aborts, and classifies malformed input as `Illegal` tokens rather
//! than raising an error of its own (see [`Lexer::next_token`]).

mod lexer;
mod token;

pub use lexer::{tokenize, Lexer};
pub use token::{lookup_ident, Token, TokenKind};
