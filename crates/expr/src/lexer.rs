//! Lexical scanner for infix math expressions.
//!
//! | Input | Token produced |
//! |-------|----------------|
//! | `12`, `3.5`, `.5`, `1e-3` | `Number(value)` |
//! | `x`, `sin`, `x_1` | `Ident("x")`, `Ident("sin")`, `Ident("x_1")` |
//! | `+ - * / % ^` | the matching operator |
//! | `(`, `)`, `,` | punctuation |
//! | end of input | `Eof` |
//!
//! An exponent suffix is only taken when digits follow it, so `2e` scans as
//! `Number(2)` followed by `Ident("e")`.

use std::fmt;

use crate::error::LexError;

/// A byte-offset span in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-length span at the given position.
    #[must_use]
    pub const fn at(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }
}

/// A token with its location.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) span: Span,
}

/// The kind and payload of a token.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LeftParen,
    RightParen,
    Comma,
    Eof,
}

impl TokenKind {
    /// Returns true if this token can begin an operand.
    ///
    /// Used by the rewriting pass to detect implicit multiplication.
    #[must_use]
    pub(crate) fn starts_operand(&self) -> bool {
        matches!(
            self,
            TokenKind::Number(_) | TokenKind::Ident(_) | TokenKind::LeftParen
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(value) => write!(f, "number {value}"),
            TokenKind::Ident(name) => write!(f, "identifier `{name}`"),
            TokenKind::Plus => f.write_str("`+`"),
            TokenKind::Minus => f.write_str("`-`"),
            TokenKind::Star => f.write_str("`*`"),
            TokenKind::Slash => f.write_str("`/`"),
            TokenKind::Percent => f.write_str("`%`"),
            TokenKind::Caret => f.write_str("`^`"),
            TokenKind::LeftParen => f.write_str("`(`"),
            TokenKind::RightParen => f.write_str("`)`"),
            TokenKind::Comma => f.write_str("`,`"),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}

/// Scans the whole source into tokens, ending with `Eof`.
///
/// # Errors
///
/// Returns a [`LexError`] at the first character that cannot start a token.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer { src: source, pos: 0 };
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl Lexer<'_> {
    fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let start = self.pos;
        let Some(c) = self.peek() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                span: Span::at(start),
            });
        };

        if c.is_ascii_digit() || (c == '.' && self.peek_at(1).is_some_and(|d| d.is_ascii_digit()))
        {
            return Ok(self.scan_number(start));
        }
        if c.is_ascii_alphabetic() || c == '_' {
            return Ok(self.scan_ident(start));
        }

        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '^' => TokenKind::Caret,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ',' => TokenKind::Comma,
            found => {
                return Err(LexError {
                    found,
                    span: Span::new(start, start + found.len_utf8()),
                });
            }
        };
        self.pos += 1;

        Ok(Token {
            kind,
            span: Span::new(start, self.pos),
        })
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn scan_number(&mut self, start: usize) -> Token {
        self.eat_digits();
        if self.peek() == Some('.') {
            self.bump();
            self.eat_digits();
        }

        // Exponent only when digits follow, optionally after a sign.
        if matches!(self.peek(), Some('e' | 'E')) {
            let digit_offset = match self.peek_at(1) {
                Some('+' | '-') => 2,
                _ => 1,
            };
            if self.peek_at(digit_offset).is_some_and(|d| d.is_ascii_digit()) {
                self.pos += digit_offset;
                self.eat_digits();
            }
        }

        let text = &self.src[start..self.pos];
        // The scanned text is digits with at most one '.' and an exponent.
        let value = text.parse::<f64>().unwrap_or(f64::NAN);

        Token {
            kind: TokenKind::Number(value),
            span: Span::new(start, self.pos),
        }
    }

    fn scan_ident(&mut self, start: usize) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.bump();
        }
        Token {
            kind: TokenKind::Ident(self.src[start..self.pos].to_string()),
            span: Span::new(start, self.pos),
        }
    }

    fn eat_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.src[self.pos..].chars().nth(offset)
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .expect("valid source")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn scans_operators_and_punctuation() {
        assert_eq!(
            kinds("( + - * / % ^ , )"),
            vec![
                TokenKind::LeftParen,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Percent,
                TokenKind::Caret,
                TokenKind::Comma,
                TokenKind::RightParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn scans_number_forms() {
        assert_eq!(
            kinds("12 3.5 .25 1e-3 2E+2 7."),
            vec![
                TokenKind::Number(12.0),
                TokenKind::Number(3.5),
                TokenKind::Number(0.25),
                TokenKind::Number(1e-3),
                TokenKind::Number(200.0),
                TokenKind::Number(7.0),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn trailing_e_is_an_identifier() {
        assert_eq!(
            kinds("2e"),
            vec![
                TokenKind::Number(2.0),
                TokenKind::Ident("e".into()),
                TokenKind::Eof
            ]
        );
        assert_eq!(
            kinds("3ex"),
            vec![
                TokenKind::Number(3.0),
                TokenKind::Ident("ex".into()),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn scans_identifiers_with_digits() {
        assert_eq!(
            kinds("log10(x_1)"),
            vec![
                TokenKind::Ident("log10".into()),
                TokenKind::LeftParen,
                TokenKind::Ident("x_1".into()),
                TokenKind::RightParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn records_spans() {
        let tokens = tokenize(" sin(x)").expect("valid source");
        assert_eq!(tokens[0].span, Span::new(1, 4));
        assert_eq!(tokens[1].span, Span::new(4, 5));
        assert_eq!(tokens[4].span, Span::at(7));
    }

    #[test]
    fn rejects_invalid_character() {
        let err = tokenize("x = 1").expect_err("`=` is not an operator");
        assert_eq!(err.found, '=');
        assert_eq!(err.span, Span::new(2, 3));
    }
}
