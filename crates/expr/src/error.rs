use thiserror::Error;

use crate::lexer::Span;

/// An invalid character in the source text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unexpected character {found:?} at {}..{}", span.start, span.end)]
pub struct LexError {
    /// The offending character.
    pub found: char,
    /// Location of the character.
    pub span: Span,
}

/// Errors that can occur while parsing an expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("empty expression")]
    Empty,

    #[error("number at {}..{} is out of range", span.start, span.end)]
    NumberOutOfRange { span: Span },

    #[error("unexpected {found} at {}..{}", span.start, span.end)]
    UnexpectedToken { found: String, span: Span },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unclosed parenthesis opened at {}", open.start)]
    UnclosedParen { open: Span },

    #[error("unknown function `{name}`")]
    UnknownFunction { name: String, span: Span },

    #[error("`{name}` expects {expected} argument(s), found {found}")]
    Arity {
        name: &'static str,
        expected: String,
        found: usize,
    },

    /// Rejected by the `evalexpr` tree builder.
    #[error("invalid expression: {0}")]
    Syntax(String),
}

/// Errors that can occur while evaluating a parsed expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("unbound variable `{0}`")]
    UnboundVariable(String),

    /// Reported by `evalexpr` during evaluation.
    #[error("{0}")]
    Failed(String),
}

/// Errors returned by [`evaluate`](crate::evaluate).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),

    #[error("non-finite result: {0}")]
    NonFinite(f64),
}
