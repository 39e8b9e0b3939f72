//! Recursive precedence-climbing parser for the formula grammar.

use ghg_core::{ErrorInfo, GhgError};

use crate::ast::{BinaryOp, Expr};
use crate::lexer::{tokenize, SpannedToken, Token};

/// Operator associativity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Assoc {
    Left,
    Right,
}

/// Binary operator metadata: precedence, associativity, operator.
/// Higher precedence binds tighter. Single source of truth for the parser.
fn binary_op_info(token: &Token) -> Option<(u8, Assoc, BinaryOp)> {
    match token {
        Token::Plus => Some((10, Assoc::Left, BinaryOp::Add)),
        Token::Minus => Some((10, Assoc::Left, BinaryOp::Sub)),
        Token::Star => Some((20, Assoc::Left, BinaryOp::Mul)),
        Token::Slash => Some((20, Assoc::Left, BinaryOp::Div)),
        Token::Percent => Some((20, Assoc::Left, BinaryOp::Rem)),
        Token::Caret => Some((30, Assoc::Right, BinaryOp::Pow)),
        _ => None,
    }
}

struct TokenStream {
    tokens: Vec<SpannedToken>,
    cursor: usize,
}

impl TokenStream {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor).map(|spanned| &spanned.token)
    }

    fn advance(&mut self) -> Option<SpannedToken> {
        let next = self.tokens.get(self.cursor).cloned();
        if next.is_some() {
            self.cursor += 1;
        }
        next
    }

    fn offset(&self) -> usize {
        self.tokens
            .get(self.cursor)
            .map(|spanned| spanned.offset)
            .unwrap_or_else(|| {
                self.tokens
                    .last()
                    .map(|spanned| spanned.offset + 1)
                    .unwrap_or(0)
            })
    }
}

fn syntax_error(message: impl Into<String>, offset: usize) -> GhgError {
    GhgError::Formula(
        ErrorInfo::new("syntax", message).with_context("position", offset.to_string()),
    )
}

/// Parses an expression string into an [`Expr`].
///
/// Fails with a `syntax` error on unknown characters, malformed literals,
/// unbalanced parentheses or trailing input.
pub fn parse(expression: &str) -> Result<Expr, GhgError> {
    let tokens = tokenize(expression)?;
    if tokens.is_empty() {
        return Err(syntax_error("empty expression", 0));
    }
    let mut stream = TokenStream { tokens, cursor: 0 };
    let expr = parse_expr(&mut stream, 0)?;
    if stream.peek().is_some() {
        return Err(syntax_error("unexpected trailing input", stream.offset()));
    }
    Ok(expr)
}

fn parse_expr(stream: &mut TokenStream, min_prec: u8) -> Result<Expr, GhgError> {
    let mut left = parse_prefix(stream)?;

    while let Some(token) = stream.peek() {
        if let Some((prec, assoc, op)) = binary_op_info(token) {
            if prec < min_prec {
                break;
            }
            stream.advance();
            let next_prec = if assoc == Assoc::Left { prec + 1 } else { prec };
            let right = parse_expr(stream, next_prec)?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        } else {
            break;
        }
    }

    Ok(left)
}

fn parse_prefix(stream: &mut TokenStream) -> Result<Expr, GhgError> {
    if matches!(stream.peek(), Some(Token::Minus)) {
        stream.advance();
        let operand = parse_prefix(stream)?;
        return Ok(Expr::Neg(Box::new(operand)));
    }
    parse_atom(stream)
}

fn parse_atom(stream: &mut TokenStream) -> Result<Expr, GhgError> {
    let offset = stream.offset();
    match stream.advance() {
        Some(SpannedToken {
            token: Token::Number(value),
            ..
        }) => Ok(Expr::Number(value)),
        Some(SpannedToken {
            token: Token::Ident(name),
            ..
        }) => Ok(Expr::Var(name)),
        Some(SpannedToken {
            token: Token::LParen,
            offset: open_offset,
        }) => {
            let inner = parse_expr(stream, 0)?;
            match stream.advance() {
                Some(SpannedToken {
                    token: Token::RParen,
                    ..
                }) => Ok(inner),
                _ => Err(syntax_error("unbalanced parenthesis", open_offset)),
            }
        }
        Some(spanned) => Err(syntax_error(
            format!("unexpected token {:?}", spanned.token),
            spanned.offset,
        )),
        None => Err(syntax_error("unexpected end of expression", offset)),
    }
}
