use numroot_core::EquationSystem;
use numroot_expr::{EvalError, Expression, ParseError, Scope};
use thiserror::Error;

/// Converts an equation to residual form.
///
/// `"lhs = rhs"` becomes `"(lhs) - (rhs)"`, splitting on the first `=` and
/// trimming both sides. An equation with no `=` is returned unchanged and is
/// taken to equal zero.
#[must_use]
pub fn equation_to_residual(equation: &str) -> String {
    match equation.split_once('=') {
        Some((lhs, rhs)) => format!("({}) - ({})", lhs.trim(), rhs.trim()),
        None => equation.to_string(),
    }
}

/// Errors that can occur while evaluating a [`ResidualSystem`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResidualError {
    #[error("residual {index} does not parse")]
    Parse {
        index: usize,
        #[source]
        source: ParseError,
    },

    #[error("residual {index} cannot be evaluated")]
    Eval {
        index: usize,
        #[source]
        source: EvalError,
    },

    #[error("residual {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },

    #[error("expected {expected} values, got {found}")]
    Dimension { expected: usize, found: usize },
}

/// A system of equations given as text, solved for named variables.
///
/// Each equation is converted with [`equation_to_residual`] and parsed once.
/// An equation that fails to parse is kept, and every evaluation of the
/// system then fails with [`ResidualError::Parse`].
#[derive(Debug, Clone)]
pub struct ResidualSystem {
    variables: Vec<String>,
    residuals: Vec<Result<Expression, ParseError>>,
}

impl ResidualSystem {
    /// Builds a system from equations and an ordered variable list.
    #[must_use]
    pub fn new<S: AsRef<str>>(equations: &[S], variables: Vec<String>) -> Self {
        let residuals = equations
            .iter()
            .map(|equation| Expression::parse(&equation_to_residual(equation.as_ref())))
            .collect();
        Self {
            variables,
            residuals,
        }
    }

    /// Returns the variables, in the order values are bound.
    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Evaluates every residual at `values`.
    ///
    /// The result is all or nothing: the first failing or non-finite residual
    /// fails the whole evaluation.
    ///
    /// # Errors
    ///
    /// Returns an error if `values` does not have one entry per variable, or
    /// if any residual fails to parse, references an unbound name, or is not
    /// finite.
    pub fn evaluate(&self, values: &[f64]) -> Result<Vec<f64>, ResidualError> {
        if values.len() != self.variables.len() {
            return Err(ResidualError::Dimension {
                expected: self.variables.len(),
                found: values.len(),
            });
        }

        let scope = Scope::new(&self.variables, values);
        self.residuals
            .iter()
            .enumerate()
            .map(|(index, residual)| {
                let expr = residual.as_ref().map_err(|e| ResidualError::Parse {
                    index,
                    source: e.clone(),
                })?;
                let value = expr
                    .eval(&scope)
                    .map_err(|source| ResidualError::Eval { index, source })?;
                if value.is_finite() {
                    Ok(value)
                } else {
                    Err(ResidualError::NonFinite { index, value })
                }
            })
            .collect()
    }
}

impl EquationSystem for ResidualSystem {
    type Error = ResidualError;

    fn variable_count(&self) -> usize {
        self.variables.len()
    }

    fn equation_count(&self) -> usize {
        self.residuals.len()
    }

    fn residuals(&self, x: &[f64]) -> Result<Vec<f64>, Self::Error> {
        self.evaluate(x)
    }
}

/// Evaluates residual expressions with `variables[i]` bound to `values[i]`.
///
/// Returns `None` if any expression fails or is not finite; never a partial
/// vector.
#[must_use]
pub fn evaluate_residuals<S: AsRef<str>>(
    residual_exprs: &[S],
    variables: &[String],
    values: &[f64],
) -> Option<Vec<f64>> {
    let scope = Scope::new(variables, values);
    residual_exprs
        .iter()
        .map(|source| numroot_expr::evaluate(source.as_ref(), &scope).ok())
        .collect()
}
