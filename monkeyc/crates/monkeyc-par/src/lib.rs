//! monkeyc-par — a Pratt (top-down operator precedence) parser.
//!
//! Converts a token stream into a [`Program`] and never aborts on a
//! syntax error: every failed expectation is appended to the parser's
//! [`Handler`] and parsing keeps going from the next statement. A
//! caller must check [`Parser::has_errors`] before trusting the tree
//! for evaluation.

mod ast;
mod expr;
mod stmt;

pub use ast::{
    BlockStatement, BooleanLiteral, CallExpression, Expression, ExpressionStatement,
    FunctionLiteral, Identifier, IfExpression, InfixExpression, IntegerLiteral, LetStatement,
    PrefixExpression, Program, ReturnStatement, Statement,
};
pub use expr::Precedence;

use monkeyc_lex::{tokenize, Token, TokenKind};
use monkeyc_util::Handler;

/// Recursive-descent / Pratt parser over a vector of pre-lexed tokens.
///
/// Lookahead is two tokens wide: `pos` indexes the current token and
/// `pos + 1` the peek token. The token vector always ends with `Eof`,
/// so indexing past the end saturates on it rather than panicking.
pub struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    handler: &'a Handler,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, handler: &'a Handler) -> Self {
        Self {
            tokens,
            pos: 0,
            handler,
        }
    }

    /// Lexes `source` and builds a parser over the resulting tokens.
    pub fn from_source(source: &str, handler: &'a Handler) -> Self {
        Self::new(tokenize(source), handler)
    }

    pub fn has_errors(&self) -> bool {
        self.handler.has_errors()
    }

    /// Drains the token stream into a [`Program`].
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();
        while self.cur_token().kind != TokenKind::Eof {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.advance();
        }
        Program { statements }
    }

    fn cur_token(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or_else(|| self.tokens.last().unwrap())
    }

    fn peek_token(&self) -> &Token {
        self.tokens
            .get(self.pos + 1)
            .unwrap_or_else(|| self.tokens.last().unwrap())
    }

    fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Advances only if `peek` matches `kind`; otherwise records the
    /// canonical "expected next token" diagnostic and returns `false`.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token().kind == kind {
            self.advance();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&self, expected: TokenKind) {
        let actual = self.peek_token().kind;
        self.handler.error(
            format!("expected next token to be {expected}, got {actual} instead"),
            self.peek_token().position,
        );
    }

    fn no_prefix_parse_fn_error(&self, kind: TokenKind) {
        self.handler
            .error(format!("no prefix parse function for {kind} found"), self.cur_token().position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> (Program, Handler) {
        let handler = Handler::new();
        let mut parser = Parser::from_source(source, &handler);
        let program = parser.parse_program();
        (program, handler)
    }

    #[test]
    fn parses_a_let_statement() {
        let (program, handler) = parse("let x = 5;");
        assert!(handler.is_empty());
        assert_eq!(program.statements.len(), 1);
        match &program.statements[0] {
            Statement::Let(s) => {
                assert_eq!(s.name.name, "x");
                assert_eq!(s.value.to_string(), "5");
            }
            other => panic!("expected LetStatement, got {other:?}"),
        }
    }

    #[test]
    fn parses_a_return_statement() {
        let (program, handler) = parse("return 5 + 5;");
        assert!(handler.is_empty());
        match &program.statements[0] {
            Statement::Return(s) => assert_eq!(s.value.to_string(), "(5+5)"),
            other => panic!("expected ReturnStatement, got {other:?}"),
        }
    }

    #[test]
    fn let_statement_missing_identifier_reports_error() {
        let (_, handler) = parse("let = 5;");
        assert!(handler.has_errors());
        assert!(handler.messages()[0].contains("expected next token to be IDENT"));
    }

    #[test]
    fn let_statement_missing_assign_reports_error() {
        let (_, handler) = parse("let x 5;");
        assert!(handler.has_errors());
        assert!(handler.messages()[0].contains("expected next token to be ASSIGN"));
    }

    #[test]
    fn unknown_prefix_token_reports_error() {
        let (_, handler) = parse(")");
        assert!(handler.has_errors());
        assert!(handler.messages()[0].contains("no prefix parse function"));
    }

    #[test]
    fn trailing_semicolon_after_expression_statement_is_optional() {
        let (program, handler) = parse("5 + 5");
        assert!(handler.is_empty());
        assert_eq!(program.statements.len(), 1);
    }

    #[test]
    fn property_stringified_output_is_stable_under_reparsing() {
        use proptest::prelude::*;

        let op = prop_oneof!["+", "-", "*", "/", "<", ">", "==", "!="];
        let operand = prop_oneof!["a", "b", "c", "1", "2", "3"];

        proptest!(|(a in operand.clone(), op1 in op.clone(), b in operand.clone(), op2 in op, c in operand)| {
            let source = format!("{a} {op1} {b} {op2} {c};");
            let (program, handler) = parse(&source);
            prop_assume!(handler.is_empty());
            let rendered = program.statements[0].to_string();

            let (reparsed, handler2) = parse(&rendered);
            prop_assert!(handler2.is_empty());
            prop_assert_eq!(reparsed.statements[0].to_string(), rendered);
        });
    }

    #[test]
    fn parsing_continues_after_an_error() {
        let (program, handler) = parse("let = 5; let y = 10;");
        assert!(handler.has_errors());
        // The first let-statement aborts mid-way, but the parser resyncs
        // on the leftover tokens and still picks up the second let.
        match program.statements.last() {
            Some(Statement::Let(s)) => assert_eq!(s.name.name, "y"),
            other => panic!("expected trailing LetStatement, got {other:?}"),
        }
    }
}
