//! The Pratt expression parser.
//!
//! `parse_expression` is the core loop: look up a prefix parser for the
//! current token, then repeatedly fold in infix operators whose
//! precedence is tighter than the precedence we were called with. All
//! binary operators in this language are left-associative, which is
//! achieved by recursing into the right-hand side with the *current*
//! operator's precedence rather than one level below it.

use monkeyc_lex::TokenKind;

use crate::ast::{
    BooleanLiteral, CallExpression, Expression, FunctionLiteral, Identifier, IfExpression,
    InfixExpression, IntegerLiteral, PrefixExpression,
};
use crate::Parser;

/// Precedence levels, lowest to highest. Declaration order doubles as
/// the `Ord` used to compare "is the next operator's precedence
/// tighter than the one we're currently parsing at".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Eq | TokenKind::Neq => Precedence::Equals,
        TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
        TokenKind::LParen => Precedence::Call,
        _ => Precedence::Lowest,
    }
}

impl<'a> Parser<'a> {
    fn cur_precedence(&self) -> Precedence {
        precedence_of(self.cur_token().kind)
    }

    fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek_token().kind)
    }

    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while self.peek_token().kind != TokenKind::Semicolon && precedence < self.peek_precedence()
        {
            self.advance();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.cur_token().kind {
            TokenKind::Ident => Some(self.parse_identifier()),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::True | TokenKind::False => Some(self.parse_boolean_literal()),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            kind => {
                self.no_prefix_parse_fn_error(kind);
                None
            }
        }
    }

    fn parse_infix(&mut self, left: Expression) -> Option<Expression> {
        match self.cur_token().kind {
            TokenKind::LParen => self.parse_call_expression(left),
            _ => self.parse_infix_expression(left),
        }
    }

    fn parse_identifier(&mut self) -> Expression {
        let token = self.cur_token().clone();
        Expression::Identifier(Identifier {
            name: token.literal.clone(),
            token,
        })
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token().clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
            Err(_) => {
                self.handler.error(
                    format!("could not parse {:?} as integer", token.literal),
                    token.position,
                );
                None
            }
        }
    }

    fn parse_boolean_literal(&mut self) -> Expression {
        let token = self.cur_token().clone();
        let value = token.kind == TokenKind::True;
        Expression::BooleanLiteral(BooleanLiteral { token, value })
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token().clone();
        let op = token.literal.clone();
        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::Prefix(PrefixExpression {
            token,
            op,
            right: Box::new(right),
        }))
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur_token().clone();
        let op = token.literal.clone();
        let precedence = self.cur_precedence();
        self.advance();
        let right = self.parse_expression(precedence)?;
        Some(Expression::Infix(InfixExpression {
            token,
            left: Box::new(left),
            op,
            right: Box::new(right),
        }))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expr)
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token().clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token().kind == TokenKind::Else {
            self.advance();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token().clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let params = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expression::FunctionLiteral(FunctionLiteral {
            token,
            params,
            body,
        }))
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut params = Vec::new();

        if self.peek_token().kind == TokenKind::RParen {
            self.advance();
            return Some(params);
        }

        self.advance();
        params.push(Identifier {
            token: self.cur_token().clone(),
            name: self.cur_token().literal.clone(),
        });

        while self.peek_token().kind == TokenKind::Comma {
            self.advance();
            self.advance();
            params.push(Identifier {
                token: self.cur_token().clone(),
                name: self.cur_token().literal.clone(),
            });
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(params)
    }

    fn parse_call_expression(&mut self, callee: Expression) -> Option<Expression> {
        let token = self.cur_token().clone();
        let args = self.parse_call_arguments()?;
        Some(Expression::Call(CallExpression {
            token,
            callee: Box::new(callee),
            args,
        }))
    }

    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut args = Vec::new();

        if self.peek_token().kind == TokenKind::RParen {
            self.advance();
            return Some(args);
        }

        self.advance();
        args.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token().kind == TokenKind::Comma {
            self.advance();
            self.advance();
            args.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(args)
    }
}
