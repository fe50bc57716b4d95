//! Rewrites scanned source into the syntax `evalexpr` parses.
//!
//! `evalexpr` has no implicit multiplication and no unary plus, and it does
//! integer arithmetic on integer literals (`1/2` is `0`). This pass inserts
//! the missing `*`, drops unary `+`, and writes every literal as a float. It
//! also checks the token stream (operand/operator alternation, balanced
//! parentheses, known functions and their argument counts) so that
//! malformed input fails here with a located error.

use crate::{
    error::ParseError,
    function::Function,
    lexer::{Span, Token, TokenKind, tokenize},
};

/// Source text ready for `evalexpr`, with the names it refers to.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Rewritten {
    pub(crate) text: String,
    /// Free identifiers in first-seen order, without repeats.
    pub(crate) variables: Vec<String>,
    /// Functions called, without repeats.
    pub(crate) functions: Vec<Function>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    /// Start of input, an operator, `(` or `,`: an operand must follow.
    Operator,
    /// A number, variable or `)`.
    Operand,
    /// A function name; `(` follows.
    CallName(Function),
}

/// An open parenthesis: a plain group, or a call with its arguments so far.
struct Open {
    span: Span,
    call: Option<(Function, usize)>,
}

pub(crate) fn rewrite(source: &str) -> Result<Rewritten, ParseError> {
    let tokens = tokenize(source)?;
    if tokens.first().is_some_and(|t| t.kind == TokenKind::Eof) {
        return Err(ParseError::Empty);
    }

    let mut out = Rewritten {
        text: String::with_capacity(source.len() * 2),
        variables: Vec::new(),
        functions: Vec::new(),
    };
    let mut open: Vec<Open> = Vec::new();
    let mut last = Last::Operator;

    for (i, token) in tokens.iter().enumerate() {
        let implicit_mul = last == Last::Operand && token.kind.starts_operand();
        if implicit_mul {
            out.push("*", last);
            last = Last::Operator;
        }

        match &token.kind {
            TokenKind::Number(value) => {
                if !value.is_finite() {
                    return Err(ParseError::NumberOutOfRange { span: token.span });
                }
                out.push(&float_literal(*value), last);
                last = Last::Operand;
            }
            TokenKind::Ident(name) => {
                let calls = tokens
                    .get(i + 1)
                    .is_some_and(|next| next.kind == TokenKind::LeftParen);
                if calls {
                    let function =
                        Function::from_name(name).ok_or_else(|| ParseError::UnknownFunction {
                            name: name.clone(),
                            span: token.span,
                        })?;
                    if !out.functions.contains(&function) {
                        out.functions.push(function);
                    }
                    out.push(name, last);
                    last = Last::CallName(function);
                } else {
                    if !out.variables.contains(name) {
                        out.variables.push(name.clone());
                    }
                    out.push(name, last);
                    last = Last::Operand;
                }
            }
            TokenKind::LeftParen => {
                let call = match last {
                    Last::CallName(function) => Some((function, 0)),
                    _ => None,
                };
                open.push(Open {
                    span: token.span,
                    call,
                });
                out.push("(", last);
                last = Last::Operator;
            }
            TokenKind::RightParen => {
                expect_operand(token, last)?;
                let group = open.pop().ok_or_else(|| unexpected(token))?;
                if let Some((function, commas)) = group.call {
                    check_arity(function, commas + 1)?;
                }
                out.push(")", last);
                last = Last::Operand;
            }
            TokenKind::Comma => {
                expect_operand(token, last)?;
                match open.last_mut() {
                    Some(Open {
                        call: Some((_, commas)),
                        ..
                    }) => *commas += 1,
                    _ => return Err(unexpected(token)),
                }
                out.push(",", last);
                last = Last::Operator;
            }
            TokenKind::Plus | TokenKind::Minus if last != Last::Operand => {
                // Unary: `evalexpr` negates on its own and has no unary plus.
                if token.kind == TokenKind::Minus {
                    out.push("-", last);
                }
            }
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Percent
            | TokenKind::Caret => {
                expect_operand(token, last)?;
                out.push(operator_text(&token.kind), last);
                last = Last::Operator;
            }
            TokenKind::Eof => {
                expect_operand(token, last)?;
                if let Some(group) = open.pop() {
                    return Err(ParseError::UnclosedParen { open: group.span });
                }
            }
        }
    }

    Ok(out)
}

impl Rewritten {
    fn push(&mut self, text: &str, last: Last) {
        if !matches!(last, Last::CallName(_)) && !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(text);
    }
}

/// Writes `value` so that `evalexpr` reads it as a float.
///
/// `Display` for `f64` never uses exponent notation, which `evalexpr` would
/// split at the sign.
fn float_literal(value: f64) -> String {
    let mut text = value.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

fn operator_text(kind: &TokenKind) -> &'static str {
    match kind {
        TokenKind::Plus => "+",
        TokenKind::Minus => "-",
        TokenKind::Star => "*",
        TokenKind::Slash => "/",
        TokenKind::Percent => "%",
        _ => "^",
    }
}

fn expect_operand(token: &Token, last: Last) -> Result<(), ParseError> {
    if last == Last::Operand {
        Ok(())
    } else {
        Err(unexpected(token))
    }
}

fn check_arity(function: Function, found: usize) -> Result<(), ParseError> {
    let arity = function.arity();
    if arity.accepts(found) {
        Ok(())
    } else {
        Err(ParseError::Arity {
            name: function.name(),
            expected: arity.describe(),
            found,
        })
    }
}

fn unexpected(token: &Token) -> ParseError {
    match token.kind {
        TokenKind::Eof => ParseError::UnexpectedEnd,
        ref kind => ParseError::UnexpectedToken {
            found: kind.to_string(),
            span: token.span,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(source: &str) -> String {
        rewrite(source).expect("valid source").text
    }

    #[test]
    fn literals_become_floats() {
        assert_eq!(text("1/2"), "1.0 / 2.0");
        assert_eq!(text("1e-3 + 2.5E2"), "0.001 + 250.0");
    }

    #[test]
    fn inserts_implicit_multiplication() {
        assert_eq!(text("2x"), "2.0 * x");
        assert_eq!(text("3x^2"), "3.0 * x ^ 2.0");
        assert_eq!(text("2(x + 1)"), "2.0 * ( x + 1.0 )");
        assert_eq!(text("(a)(b)"), "( a ) * ( b )");
        assert_eq!(text("2 sin(x)"), "2.0 * sin( x )");
    }

    #[test]
    fn drops_unary_plus_and_keeps_unary_minus() {
        assert_eq!(text("+3 - -2"), "3.0 - - 2.0");
        assert_eq!(text("2^-1"), "2.0 ^ - 1.0");
    }

    #[test]
    fn collects_names_once() {
        let rewritten = rewrite("sin(x) + y*sin(x) - x").expect("valid source");

        assert_eq!(rewritten.variables, vec!["x", "y"]);
        assert_eq!(rewritten.functions, vec![Function::Sin]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(rewrite(""), Err(ParseError::Empty));
        assert_eq!(rewrite("   "), Err(ParseError::Empty));
    }

    #[test]
    fn dangling_operators() {
        assert_eq!(rewrite("1 +"), Err(ParseError::UnexpectedEnd));
        assert!(matches!(
            rewrite("* 2"),
            Err(ParseError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            rewrite("(x + ) - (1)"),
            Err(ParseError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn unbalanced_parentheses() {
        assert!(matches!(
            rewrite("(1 + 2"),
            Err(ParseError::UnclosedParen { .. })
        ));
        assert!(matches!(
            rewrite("1 + 2)"),
            Err(ParseError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            rewrite("sin(1"),
            Err(ParseError::UnclosedParen { .. })
        ));
    }

    #[test]
    fn comma_outside_call() {
        assert!(matches!(
            rewrite("1, 2"),
            Err(ParseError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            rewrite("max((1, 2))"),
            Err(ParseError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn unknown_function() {
        assert!(matches!(
            rewrite("foo(1)"),
            Err(ParseError::UnknownFunction { ref name, .. }) if name == "foo"
        ));
    }

    #[test]
    fn wrong_arity() {
        assert!(matches!(
            rewrite("sin(1, 2)"),
            Err(ParseError::Arity { name: "sin", found: 2, .. })
        ));
        assert!(matches!(
            rewrite("atan2(1)"),
            Err(ParseError::Arity { name: "atan2", found: 1, .. })
        ));
        assert!(rewrite("max(1, max(2, 3), 4)").is_ok());
    }

    #[test]
    fn empty_call_is_an_error() {
        assert!(matches!(
            rewrite("max()"),
            Err(ParseError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn literal_out_of_range() {
        assert!(matches!(
            rewrite("1e999"),
            Err(ParseError::NumberOutOfRange { .. })
        ));
    }
}
