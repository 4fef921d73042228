//! Statement parsing: `let`, `return`, bare expressions, and blocks.

use monkeyc_lex::TokenKind;

use crate::ast::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement, Statement};
use crate::expr::Precedence;
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token().kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token().clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = crate::ast::Identifier {
            token: self.cur_token().clone(),
            name: self.cur_token().literal.clone(),
        };

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token().kind == TokenKind::Semicolon {
            self.advance();
        }

        Some(Statement::Let(LetStatement { token, name, value }))
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token().clone();
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token().kind == TokenKind::Semicolon {
            self.advance();
        }

        Some(Statement::Return(ReturnStatement { token, value }))
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token().clone();
        let expr = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token().kind == TokenKind::Semicolon {
            self.advance();
        }

        Some(Statement::Expression(ExpressionStatement { token, expr }))
    }

    pub(crate) fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.cur_token().clone();
        let mut statements = Vec::new();
        self.advance();

        while self.cur_token().kind != TokenKind::RBrace && self.cur_token().kind != TokenKind::Eof
        {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.advance();
        }

        BlockStatement { token, statements }
    }
}
