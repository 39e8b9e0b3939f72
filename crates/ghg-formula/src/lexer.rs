//! Tokenizer for the formula language.

use ghg_core::{ErrorInfo, GhgError};

/// Lexical token of the formula grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal (integer or decimal).
    Number(f64),
    /// Variable reference.
    Ident(String),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

/// A token paired with its byte offset in the source expression.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    /// The token itself.
    pub token: Token,
    /// Byte offset of the token's first character.
    pub offset: usize,
}

fn syntax_error(message: impl Into<String>, offset: usize) -> GhgError {
    GhgError::Formula(
        ErrorInfo::new("syntax", message).with_context("position", offset.to_string()),
    )
}

/// Splits an expression into tokens.
///
/// The character set is closed: digits, identifiers, the six arithmetic
/// operators, parentheses and whitespace. Anything else is a syntax error,
/// which is what keeps operator-entered formulas from ever reaching a
/// general evaluation facility.
pub fn tokenize(src: &str) -> Result<Vec<SpannedToken>, GhgError> {
    let bytes = src.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let byte = bytes[pos];
        match byte {
            b' ' | b'\t' | b'\r' | b'\n' => {
                pos += 1;
            }
            b'+' => {
                tokens.push(SpannedToken {
                    token: Token::Plus,
                    offset: pos,
                });
                pos += 1;
            }
            b'-' => {
                tokens.push(SpannedToken {
                    token: Token::Minus,
                    offset: pos,
                });
                pos += 1;
            }
            b'*' => {
                tokens.push(SpannedToken {
                    token: Token::Star,
                    offset: pos,
                });
                pos += 1;
            }
            b'/' => {
                tokens.push(SpannedToken {
                    token: Token::Slash,
                    offset: pos,
                });
                pos += 1;
            }
            b'%' => {
                tokens.push(SpannedToken {
                    token: Token::Percent,
                    offset: pos,
                });
                pos += 1;
            }
            b'^' => {
                tokens.push(SpannedToken {
                    token: Token::Caret,
                    offset: pos,
                });
                pos += 1;
            }
            b'(' => {
                tokens.push(SpannedToken {
                    token: Token::LParen,
                    offset: pos,
                });
                pos += 1;
            }
            b')' => {
                tokens.push(SpannedToken {
                    token: Token::RParen,
                    offset: pos,
                });
                pos += 1;
            }
            b'0'..=b'9' => {
                let start = pos;
                while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                    pos += 1;
                }
                if pos < bytes.len() && bytes[pos] == b'.' {
                    pos += 1;
                    if pos >= bytes.len() || !bytes[pos].is_ascii_digit() {
                        return Err(syntax_error("expected digits after decimal point", pos));
                    }
                    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                        pos += 1;
                    }
                }
                let literal = &src[start..pos];
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| syntax_error(format!("invalid number '{literal}'"), start))?;
                tokens.push(SpannedToken {
                    token: Token::Number(value),
                    offset: start,
                });
            }
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                let start = pos;
                while pos < bytes.len()
                    && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_')
                {
                    pos += 1;
                }
                tokens.push(SpannedToken {
                    token: Token::Ident(src[start..pos].to_string()),
                    offset: start,
                });
            }
            other => {
                return Err(syntax_error(
                    format!("unexpected character '{}'", other as char),
                    pos,
                ));
            }
        }
    }

    Ok(tokens)
}
