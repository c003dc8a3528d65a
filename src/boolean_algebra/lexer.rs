//! Tokenizer for boolean expressions.

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    LParen,
    RParen,
    And,
    Or,
    Not,
    Const(bool),
    Ident(String),
}

/// A token and the byte offset where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: usize,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::And => write!(f, "AND"),
            TokenKind::Or => write!(f, "OR"),
            TokenKind::Not => write!(f, "NOT"),
            TokenKind::Const(true) => write!(f, "TRUE"),
            TokenKind::Const(false) => write!(f, "FALSE"),
            TokenKind::Ident(name) => write!(f, "{name}"),
        }
    }
}

lazy_static! {
    // Longest alternatives first so `&&` is not read as two `&`.
    static ref RE: Regex =
        Regex::new(r"\s+|&&|\|\||[()&|!~]|[A-Za-z_][A-Za-z0-9_]*|.").expect("Invalid Regex?");
}

/// Split `input` into tokens.
///
/// Keywords are case-insensitive. `&`/`&&` alias `AND`, `|`/`||` alias `OR`
/// and `!`/`~` alias `NOT`. Any other character is a parse error.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    for m in RE.find_iter(input) {
        let text = m.as_str();
        let kind = match text {
            "(" => TokenKind::LParen,
            ")" => TokenKind::RParen,
            "&" | "&&" => TokenKind::And,
            "|" | "||" => TokenKind::Or,
            "!" | "~" => TokenKind::Not,
            _ if text.trim().is_empty() => continue,
            _ if is_identifier(text) => keyword(text),
            _ => {
                return Err(Error::parse(
                    input,
                    format!("unknown character '{text}' at {}", m.start()),
                ))
            }
        };
        tokens.push(Token {
            kind,
            pos: m.start(),
        });
    }
    log::trace!("tokenize({input:?}) = {tokens:?}");
    Ok(tokens)
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn keyword(word: &str) -> TokenKind {
    match word.to_ascii_uppercase().as_str() {
        "AND" => TokenKind::And,
        "OR" => TokenKind::Or,
        "NOT" => TokenKind::Not,
        "TRUE" => TokenKind::Const(true),
        "FALSE" => TokenKind::Const(false),
        _ => TokenKind::Ident(word.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("A AND B"),
            vec![
                TokenKind::Ident("A".to_string()),
                TokenKind::And,
                TokenKind::Ident("B".to_string()),
            ]
        );
        assert_eq!(
            kinds("not x1 or _y"),
            vec![
                TokenKind::Not,
                TokenKind::Ident("x1".to_string()),
                TokenKind::Or,
                TokenKind::Ident("_y".to_string()),
            ]
        );
        assert_eq!(kinds("True FALSE"), vec![TokenKind::Const(true), TokenKind::Const(false)]);
    }

    #[test]
    fn test_parentheses_split_without_spaces() {
        assert_eq!(
            kinds("(A)AND(B)"),
            vec![
                TokenKind::LParen,
                TokenKind::Ident("A".to_string()),
                TokenKind::RParen,
                TokenKind::And,
                TokenKind::LParen,
                TokenKind::Ident("B".to_string()),
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_symbol_aliases() {
        assert_eq!(
            kinds("!A && B || ~C & D | E"),
            vec![
                TokenKind::Not,
                TokenKind::Ident("A".to_string()),
                TokenKind::And,
                TokenKind::Ident("B".to_string()),
                TokenKind::Or,
                TokenKind::Not,
                TokenKind::Ident("C".to_string()),
                TokenKind::And,
                TokenKind::Ident("D".to_string()),
                TokenKind::Or,
                TokenKind::Ident("E".to_string()),
            ]
        );
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("A  AND (B)").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.pos).collect();
        assert_eq!(positions, vec![0, 3, 7, 8, 9]);
    }

    #[test]
    fn test_unknown_character() {
        let err = tokenize("A + B").unwrap_err();
        assert_eq!(err, Error::parse("A + B", "unknown character '+' at 2"));
        assert!(tokenize("1var").is_err());
        assert!(tokenize("A ∧ B").is_err());
    }

    #[test]
    fn test_empty_input_has_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" \t\n").unwrap().is_empty());
    }
}
