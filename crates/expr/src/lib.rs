//! Infix math expressions: parsing and evaluation against variable bindings.
//!
//! An expression such as `"(sin(x) + y) - (1)"` is parsed once into an
//! [`Expression`] and evaluated with a set of [`Bindings`] that give each
//! free identifier a value. Parsing and evaluation are done by `evalexpr`;
//! a thin rewriting pass in front of it adds the syntax below that
//! `evalexpr` lacks and makes all arithmetic floating point.
//!
//! # Syntax
//!
//! | Form | Meaning |
//! |------|---------|
//! | `1`, `2.5`, `.5`, `1e-3` | numeric literals (always floats) |
//! | `a + b`, `a - b` | addition, subtraction |
//! | `a * b`, `a / b`, `a % b` | multiplication, division, remainder |
//! | `2x`, `2(x + 1)`, `x y` | implicit multiplication |
//! | `a ^ b` | power (right-associative, `-x^2` is `-(x^2)`) |
//! | `f(a, b)` | function call, see [`Function`] |
//! | `pi`, `e` | constants (a binding with the same name wins) |
//!
//! Any other identifier is a variable and must be bound at evaluation time.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! let bindings = HashMap::from([("x".to_string(), 0.5)]);
//! let value = numroot_expr::evaluate("2x^2 + sin(pi * x)", &bindings).unwrap();
//! assert!((value - 1.5).abs() < 1e-12);
//! ```

mod bindings;
mod error;
mod expression;
mod function;
mod lexer;
mod rewrite;

pub use bindings::{Bindings, Scope};
pub use error::{Error, EvalError, LexError, ParseError};
pub use expression::Expression;
pub use function::{Arity, Function};
pub use lexer::Span;

/// Parses an expression.
///
/// # Errors
///
/// Returns a [`ParseError`] if the text is not a well-formed expression.
pub fn parse(source: &str) -> Result<Expression, ParseError> {
    Expression::parse(source)
}

/// Parses and evaluates an expression, requiring a finite result.
///
/// # Errors
///
/// Returns an error if parsing fails, an identifier is unbound, or the
/// result is NaN or infinite.
pub fn evaluate(source: &str, bindings: &impl Bindings) -> Result<f64, Error> {
    let value = parse(source)?.eval(bindings)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFinite(value))
    }
}
