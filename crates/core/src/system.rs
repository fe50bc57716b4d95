use std::{convert::Infallible, error::Error as StdError};

/// A system of equations `F(x) = 0` to be solved.
///
/// The solver variables are a slice `x` of length [`variable_count`], and
/// the system maps them to one residual per equation. A root is any `x` where
/// every residual is zero.
///
/// Implementations decide what an evaluation failure means (a parse error,
/// a domain error, a non-finite value). Solvers treat any `Err` as a failed
/// evaluation of the whole residual vector; there is no partially valid
/// result.
///
/// [`variable_count`]: EquationSystem::variable_count
pub trait EquationSystem {
    type Error: StdError + Send + Sync + 'static;

    /// Returns the number of solver variables.
    fn variable_count(&self) -> usize;

    /// Returns the number of equations (the length of the residual vector).
    fn equation_count(&self) -> usize;

    /// Evaluates the residual vector at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if any residual cannot be computed.
    fn residuals(&self, x: &[f64]) -> Result<Vec<f64>, Self::Error>;
}

impl<S: EquationSystem + ?Sized> EquationSystem for &S {
    type Error = S::Error;

    fn variable_count(&self) -> usize {
        (**self).variable_count()
    }

    fn equation_count(&self) -> usize {
        (**self).equation_count()
    }

    fn residuals(&self, x: &[f64]) -> Result<Vec<f64>, Self::Error> {
        (**self).residuals(x)
    }
}

/// An [`EquationSystem`] backed by a closure.
///
/// Useful for systems defined directly in Rust and for exercising solvers
/// without going through expression text.
#[derive(Debug, Clone, Copy)]
pub struct FnSystem<F> {
    variables: usize,
    equations: usize,
    func: F,
}

impl<F, E> FnSystem<F>
where
    F: Fn(&[f64]) -> Result<Vec<f64>, E>,
{
    /// Creates a system from a fallible residual closure.
    pub fn new(variables: usize, equations: usize, func: F) -> Self {
        Self {
            variables,
            equations,
            func,
        }
    }
}

/// Creates a system from an infallible residual closure.
pub fn from_fn<G>(
    variables: usize,
    equations: usize,
    func: G,
) -> FnSystem<impl Fn(&[f64]) -> Result<Vec<f64>, Infallible>>
where
    G: Fn(&[f64]) -> Vec<f64>,
{
    FnSystem::new(variables, equations, move |x: &[f64]| Ok::<_, Infallible>(func(x)))
}

impl<F, E> EquationSystem for FnSystem<F>
where
    F: Fn(&[f64]) -> Result<Vec<f64>, E>,
    E: StdError + Send + Sync + 'static,
{
    type Error = E;

    fn variable_count(&self) -> usize {
        self.variables
    }

    fn equation_count(&self) -> usize {
        self.equations
    }

    fn residuals(&self, x: &[f64]) -> Result<Vec<f64>, Self::Error> {
        (self.func)(x)
    }
}
