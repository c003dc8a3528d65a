//! Recursive-descent parser.
//!
//! ```text
//! expr    := and_expr ( OR and_expr )*
//! and_expr:= unary ( AND unary )*
//! unary   := NOT unary | primary
//! primary := IDENT | TRUE | FALSE | '(' expr ')'
//! ```

use super::ast::Node;
use super::lexer::{tokenize, Token, TokenKind};
use crate::error::{Error, Result};

/// Longest accepted expression, in bytes.
pub const MAX_EXPRESSION_LEN: usize = 1000;

/// Parse `input` into an AST.
pub fn parse_expression(input: &str) -> Result<Node> {
    if input.len() > MAX_EXPRESSION_LEN {
        let head: String = input.chars().take(40).collect();
        return Err(Error::parse(
            &head,
            format!("expression longer than {MAX_EXPRESSION_LEN} characters"),
        ));
    }

    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(Error::parse(input, "empty expression"));
    }

    let mut parser = Parser {
        input,
        tokens: &tokens,
        pos: 0,
    };
    let node = parser.parse_or()?;

    if let Some(token) = parser.peek() {
        let reason = match token.kind {
            TokenKind::RParen => format!("unbalanced ')' at {}", token.pos),
            _ => format!("expected operator, found '{}' at {}", token.kind, token.pos),
        };
        return Err(Error::parse(input, reason));
    }

    log::debug!("parsed {input:?} -> {}", node.to_prefix_notation());
    Ok(node)
}

struct Parser<'a> {
    input: &'a str,
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
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
            Some(token) if token.kind == *kind => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn parse_or(&mut self) -> Result<Node> {
        let mut lhs = self.parse_and()?;
        while self.eat(&TokenKind::Or) {
            let rhs = self.parse_and()?;
            lhs = Node::or(lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> Result<Node> {
        let mut lhs = self.parse_unary()?;
        while self.eat(&TokenKind::And) {
            let rhs = self.parse_unary()?;
            lhs = Node::and(lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Node> {
        if self.eat(&TokenKind::Not) {
            return Ok(Node::not(self.parse_unary()?));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Node> {
        let Some(token) = self.next() else {
            return Err(Error::parse(self.input, "missing operand at end of expression"));
        };

        match &token.kind {
            TokenKind::Ident(name) => Ok(Node::Variable(name.clone())),
            TokenKind::Const(value) => Ok(Node::Constant(*value)),
            TokenKind::LParen => {
                let inner = self.parse_or()?;
                if self.eat(&TokenKind::RParen) {
                    Ok(inner)
                } else {
                    Err(Error::parse(
                        self.input,
                        format!("unbalanced '(' opened at {}", token.pos),
                    ))
                }
            }
            other => Err(Error::parse(
                self.input,
                format!("missing operand before '{other}' at {}", token.pos),
            )),
        }
    }
}
