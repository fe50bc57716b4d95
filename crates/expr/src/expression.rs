use evalexpr::{ContextWithMutableVariables, HashMapContext, Node, Value, build_operator_tree};

use crate::{
    bindings::Bindings,
    error::{EvalError, ParseError},
    function::{Function, constant},
    rewrite::rewrite,
};

/// A parsed expression, ready to be evaluated many times.
///
/// Parsing happens once; each evaluation binds the free identifiers and runs
/// the `evalexpr` operator tree.
#[derive(Debug, Clone)]
pub struct Expression {
    tree: Node,
    variables: Vec<String>,
    functions: Vec<Function>,
}

impl Expression {
    /// Parses an expression.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text is not a well-formed expression.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let rewritten = rewrite(source)?;
        let tree = build_operator_tree(&rewritten.text)
            .map_err(|err| ParseError::Syntax(err.to_string()))?;
        Ok(Self {
            tree,
            variables: rewritten.variables,
            functions: rewritten.functions,
        })
    }

    /// Evaluates the expression.
    ///
    /// Identifiers are looked up in `bindings` first, then among the
    /// constants `pi` and `e`. The result may be NaN or infinite; callers
    /// that need a finite value must check.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::UnboundVariable`] for an identifier that is
    /// neither bound nor a constant, or [`EvalError::Failed`] if `evalexpr`
    /// rejects the evaluation.
    pub fn eval(&self, bindings: &impl Bindings) -> Result<f64, EvalError> {
        let mut context = HashMapContext::new();
        for function in &self.functions {
            function.register(&mut context).map_err(failed)?;
        }
        for name in &self.variables {
            let value = bindings
                .get(name)
                .or_else(|| constant(name))
                .ok_or_else(|| EvalError::UnboundVariable(name.clone()))?;
            context
                .set_value(name.clone(), Value::Float(value))
                .map_err(failed)?;
        }
        self.tree.eval_number_with_context(&context).map_err(failed)
    }
}

fn failed(err: evalexpr::EvalexprError) -> EvalError {
    EvalError::Failed(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{collections::HashMap, f64::consts};

    use approx::assert_relative_eq;

    fn eval_with(source: &str, pairs: &[(&str, f64)]) -> f64 {
        let bindings: HashMap<String, f64> = pairs
            .iter()
            .map(|(name, value)| ((*name).to_string(), *value))
            .collect();
        Expression::parse(source)
            .expect("should parse")
            .eval(&bindings)
            .expect("should evaluate")
    }

    fn eval(source: &str) -> f64 {
        eval_with(source, &[])
    }

    #[test]
    fn respects_precedence() {
        assert_relative_eq!(eval("1 + 2 * 3"), 7.0);
        assert_relative_eq!(eval("(1 + 2) * 3"), 9.0);
        assert_relative_eq!(eval("10 - 4 - 3"), 3.0);
        assert_relative_eq!(eval("8 / 4 / 2"), 1.0);
        assert_relative_eq!(eval("7 % 4 + 1"), 4.0);
    }

    #[test]
    fn integer_literals_divide_as_floats() {
        assert_relative_eq!(eval("1/2"), 0.5);
        assert_relative_eq!(eval("7/2 - 3"), 0.5);
    }

    #[test]
    fn power_is_right_associative() {
        assert_relative_eq!(eval("2^3^2"), 512.0);
    }

    #[test]
    fn unary_minus_binds_looser_than_power() {
        assert_relative_eq!(eval("-2^2"), -4.0);
        assert_relative_eq!(eval("(-2)^2"), 4.0);
        assert_relative_eq!(eval("2^-1"), 0.5);
        assert_relative_eq!(eval("--3"), 3.0);
        assert_relative_eq!(eval("+3 - -2"), 5.0);
    }

    #[test]
    fn implicit_multiplication() {
        assert_relative_eq!(eval_with("2x", &[("x", 3.0)]), 6.0);
        assert_relative_eq!(eval_with("2(x + 1)", &[("x", 3.0)]), 8.0);
        assert_relative_eq!(eval_with("x y", &[("x", 3.0), ("y", 4.0)]), 12.0);
        assert_relative_eq!(eval_with("(x)(y)", &[("x", 3.0), ("y", 4.0)]), 12.0);
        assert_relative_eq!(eval_with("3x^2", &[("x", 2.0)]), 12.0);
        assert_relative_eq!(eval("2 sin(0)"), 0.0);
        assert_relative_eq!(eval("2pi"), 2.0 * consts::PI);
    }

    #[test]
    fn function_calls() {
        assert_relative_eq!(eval("sin(pi / 2)"), 1.0);
        assert_relative_eq!(eval("atan2(1, 1)"), consts::FRAC_PI_4);
        assert_relative_eq!(eval("max(1, 5, 3)"), 5.0);
        assert_relative_eq!(eval("min(4)"), 4.0);
        assert_relative_eq!(eval("pow(2, 10)"), 1024.0);
        assert_relative_eq!(eval("log(100, 10)"), 2.0, epsilon = 1e-12);
        assert_relative_eq!(eval("sqrt(abs(-16))"), 4.0);
        assert_relative_eq!(eval("exp(ln(3))"), 3.0, epsilon = 1e-12);
        assert_relative_eq!(eval("floor(2.7) + round(2.5)"), 5.0);
        assert_relative_eq!(eval("mod(-7, 3)"), 2.0);
    }

    #[test]
    fn residual_form_evaluates() {
        let value = eval_with("(sin(x) + y) - (1)", &[("x", 0.0), ("y", 1.0)]);
        assert_relative_eq!(value, 0.0);
    }

    #[test]
    fn binding_shadows_constant() {
        assert_relative_eq!(eval("e"), consts::E);
        assert_relative_eq!(eval("PI"), consts::PI);
        assert_relative_eq!(eval_with("e", &[("e", 2.0)]), 2.0);
    }

    #[test]
    fn unbound_identifier_errors() {
        let expr = Expression::parse("x + 1").expect("should parse");
        let empty: HashMap<String, f64> = HashMap::new();

        assert_eq!(
            expr.eval(&empty),
            Err(EvalError::UnboundVariable("x".into()))
        );
    }

    #[test]
    fn division_by_zero_is_not_an_error() {
        assert!(eval("1 / 0").is_infinite());
        assert!(eval("0 / 0").is_nan());
    }

    #[test]
    fn parsed_once_evaluated_many_times() {
        let expr = Expression::parse("x^2 - 2").expect("should parse");

        for (x, expected) in [(0.0, -2.0), (1.0, -1.0), (3.0, 7.0)] {
            let bindings = HashMap::from([("x".to_string(), x)]);
            assert_relative_eq!(expr.eval(&bindings).expect("bound"), expected);
        }
    }
}
