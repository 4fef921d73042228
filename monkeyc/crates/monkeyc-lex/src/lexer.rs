//! The lexer: a pure character-stream scanner that emits one token per
//! call to [`Lexer::next_token`] and never aborts on malformed input.

use monkeyc_util::Position;

use crate::token::{lookup_ident, Token, TokenKind};

/// Scans a source string into a stream of [`Token`]s.
///
/// Mirrors the classic three-cursor design: `position` is the index of
/// the current character, `read_position` is one ahead, and `ch` is the
/// current character (or `None` once the input is exhausted). Calling
/// `next_token` after input is exhausted returns `Eof` indefinitely.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    read_position: usize,
    ch: Option<char>,
    pos: Position,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        let mut lexer = Self {
            input: source.chars().collect(),
            position: 0,
            read_position: 0,
            ch: None,
            pos: Position::START,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        if let Some(c) = self.ch {
            self.pos = self.pos.advance(c);
        }
        self.ch = self.input.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> Option<char> {
        self.input.get(self.read_position).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ') | Some('\t') | Some('\n') | Some('\r')) {
            self.read_char();
        }
    }

    fn read_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let start = self.position;
        while let Some(c) = self.ch {
            if !predicate(c) {
                break;
            }
            self.read_char();
        }
        self.input[start..self.position].iter().collect()
    }

    /// Returns the next token, consuming it from the stream.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start_pos = self.pos;
        let Some(ch) = self.ch else {
            return Token::eof(start_pos);
        };

        if is_letter(ch) {
            let word = self.read_while(is_letter);
            let kind = lookup_ident(&word);
            return Token::new(kind, word, start_pos);
        }

        if ch.is_ascii_digit() {
            let digits = self.read_while(|c| c.is_ascii_digit());
            return Token::new(TokenKind::Int, digits, start_pos);
        }

        let (kind, literal): (TokenKind, String) = match ch {
            '=' => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    (TokenKind::Eq, "==".to_string())
                } else {
                    (TokenKind::Assign, "=".to_string())
                }
            }
            '!' => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    (TokenKind::Neq, "!=".to_string())
                } else {
                    (TokenKind::Bang, "!".to_string())
                }
            }
            '+' => (TokenKind::Plus, "+".to_string()),
            '-' => (TokenKind::Minus, "-".to_string()),
            '*' => (TokenKind::Asterisk, "*".to_string()),
            '/' => (TokenKind::Slash, "/".to_string()),
            '<' => (TokenKind::Lt, "<".to_string()),
            '>' => (TokenKind::Gt, ">".to_string()),
            ',' => (TokenKind::Comma, ",".to_string()),
            ';' => (TokenKind::Semicolon, ";".to_string()),
            '(' => (TokenKind::LParen, "(".to_string()),
            ')' => (TokenKind::RParen, ")".to_string()),
            '{' => (TokenKind::LBrace, "{".to_string()),
            '}' => (TokenKind::RBrace, "}".to_string()),
            other => (TokenKind::Illegal, other.to_string()),
        };

        self.read_char();
        Token::new(kind, literal, start_pos)
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

/// Consumes a full source string into its token stream, including the
/// trailing `Eof`. Convenience wrapper for callers (parser tests, the
/// REPL's `tokens` mode) that want a `Vec` rather than pull-based
/// iteration.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let tok = lexer.next_token();
        let is_eof = tok.kind == TokenKind::Eof;
        tokens.push(tok);
        if is_eof {
            break;
        }
    }
    tokens
}
