//! Recursive-descent parser.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('-' | '+') unary | power
//! power   := primary ('^' unary)?
//! primary := number | constant | variable | function '(' expr ')' | '(' expr ')'
//! ```
//!
//! `^` binds tighter than unary minus and is right-associative through the
//! `unary` on its right, so `-x^2 = -(x^2)` and `2^3^2 = 2^9`.

use super::ast::{BinaryOp, Function, Node};
use super::token::{Token, TokenKind};
use crate::types::ExpressionError;
use std::f64::consts::{E, PI};

pub(crate) struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    variable: &'a str,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a [Token], variable: &'a str) -> Self {
        Self {
            tokens,
            pos: 0,
            variable,
        }
    }

    /// Parse the whole token stream into one tree.
    pub(crate) fn parse(mut self) -> Result<Node, ExpressionError> {
        if self.tokens.is_empty() {
            return Err(ExpressionError::Empty);
        }
        check_brackets(self.tokens)?;

        let node = self.expr()?;
        match self.peek() {
            None => Ok(node),
            Some(token) => Err(unexpected(token)),
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        match self.peek() {
            Some(token) if &token.kind == kind => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn expr(&mut self) -> Result<Node, ExpressionError> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Plus) => BinaryOp::Add,
                Some(TokenKind::Minus) => BinaryOp::Sub,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Node::binary(op, lhs, rhs);
        }
    }

    fn term(&mut self) -> Result<Node, ExpressionError> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Star) => BinaryOp::Mul,
                Some(TokenKind::Slash) => BinaryOp::Div,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = Node::binary(op, lhs, rhs);
        }
    }

    fn unary(&mut self) -> Result<Node, ExpressionError> {
        if self.eat(&TokenKind::Minus) {
            return Ok(Node::Neg(Box::new(self.unary()?)));
        }
        if self.eat(&TokenKind::Plus) {
            return self.unary();
        }
        self.power()
    }

    fn power(&mut self) -> Result<Node, ExpressionError> {
        let base = self.primary()?;
        if self.eat(&TokenKind::Caret) {
            let exponent = self.unary()?;
            return Ok(Node::binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Node, ExpressionError> {
        let token = self.next().ok_or(ExpressionError::UnexpectedEnd)?;

        match &token.kind {
            TokenKind::Number(v) => Ok(Node::Number(*v)),
            TokenKind::LParen => {
                let inner = self.expr()?;
                self.close(token)?;
                Ok(inner)
            }
            TokenKind::Ident(name) => self.identifier(name, token),
            _ => Err(unexpected(token)),
        }
    }

    fn identifier(&mut self, name: &str, token: &'a Token) -> Result<Node, ExpressionError> {
        if name == self.variable {
            return Ok(Node::Variable);
        }
        match name {
            "pi" => return Ok(Node::Number(PI)),
            "e" => return Ok(Node::Number(E)),
            _ => {}
        }

        let function = Function::from_name(name).ok_or_else(|| ExpressionError::UnknownToken {
            token: name.to_string(),
            position: token.position,
        })?;

        let open = match self.next() {
            Some(open) if open.kind == TokenKind::LParen => open,
            _ => {
                return Err(ExpressionError::MissingArgument {
                    function: name.to_string(),
                    position: token.position,
                })
            }
        };
        let arg = self.expr()?;
        self.close(open)?;

        Ok(Node::Call {
            function,
            arg: Box::new(arg),
        })
    }

    fn close(&mut self, open: &Token) -> Result<(), ExpressionError> {
        match self.next() {
            Some(token) if token.kind == TokenKind::RParen => Ok(()),
            Some(token) => Err(unexpected(token)),
            None => Err(ExpressionError::UnmatchedBracket {
                bracket: '(',
                position: open.position,
            }),
        }
    }
}

fn unexpected(token: &Token) -> ExpressionError {
    ExpressionError::UnexpectedToken {
        token: token.kind.to_string(),
        position: token.position,
    }
}

/// Reject unbalanced brackets before parsing so the error names the bracket.
fn check_brackets(tokens: &[Token]) -> Result<(), ExpressionError> {
    let mut open = Vec::new();
    for token in tokens {
        match token.kind {
            TokenKind::LParen => open.push(token.position),
            TokenKind::RParen => {
                if open.pop().is_none() {
                    return Err(ExpressionError::UnmatchedBracket {
                        bracket: ')',
                        position: token.position,
                    });
                }
            }
            _ => {}
        }
    }
    match open.pop() {
        Some(position) => Err(ExpressionError::UnmatchedBracket {
            bracket: '(',
            position,
        }),
        None => Ok(()),
    }
}
