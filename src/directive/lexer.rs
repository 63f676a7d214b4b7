use std::fmt;

use crate::{directive::error::DirectiveError, foundation::core::Decimal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Number(Decimal),
    Color(String),

    Comma,
    Semicolon,
    // Any run of whitespace; separates the top-level fields.
    Space,

    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(d) => write!(f, "number '{d}'"),
            Self::Color(c) => write!(f, "color '{c}'"),
            Self::Comma => f.write_str("','"),
            Self::Semicolon => f.write_str("';'"),
            Self::Space => f.write_str("whitespace"),
            Self::Eof => f.write_str("end of input"),
        }
    }
}

pub(crate) fn lex(input: &str) -> Result<Vec<Token>, DirectiveError> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        let c = bytes[i] as char;
        let start = i;

        if c.is_ascii_whitespace() {
            while i < bytes.len() && (bytes[i] as char).is_ascii_whitespace() {
                i += 1;
            }
            out.push(Token {
                kind: TokenKind::Space,
                span: Span { start, end: i },
            });
            continue;
        }

        // Number: any run of digits and dots, validated as a single decimal.
        if c.is_ascii_digit() || c == '.' {
            while i < bytes.len() && matches!(bytes[i], b'0'..=b'9' | b'.') {
                i += 1;
            }
            let s = &input[start..i];
            let d = Decimal::parse(s)
                .ok_or_else(|| DirectiveError::new(start, format!("invalid number '{s}'")))?;
            out.push(Token {
                kind: TokenKind::Number(d),
                span: Span { start, end: i },
            });
            continue;
        }

        if c == '#' {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_hexdigit() {
                i += 1;
            }
            if i == start + 1 {
                return Err(DirectiveError::new(
                    start,
                    "expected hex digits after '#'",
                ));
            }
            out.push(Token {
                kind: TokenKind::Color(input[start..i].to_owned()),
                span: Span { start, end: i },
            });
            continue;
        }

        let kind = match c {
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '-' => {
                return Err(DirectiveError::new(
                    start,
                    "negative values are not allowed",
                ));
            }
            _ => {
                let ch = input[start..].chars().next().unwrap_or(c);
                return Err(DirectiveError::new(
                    start,
                    format!("unexpected character '{ch}'"),
                ));
            }
        };
        i += 1;
        out.push(Token {
            kind,
            span: Span { start, end: i },
        });
    }

    out.push(Token {
        kind: TokenKind::Eof,
        span: Span {
            start: input.len(),
            end: input.len(),
        },
    });

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/directive/lexer.rs"]
mod tests;
