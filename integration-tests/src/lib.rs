//! Shared helpers for the end-to-end tests.

use numroot::{Solution, equation_to_residual, evaluate_residuals};

/// Largest absolute residual of `equations` at `solution`.
///
/// Returns `None` if any residual cannot be evaluated.
#[must_use]
pub fn max_residual(equations: &[&str], variables: &[String], solution: &Solution) -> Option<f64> {
    let residuals: Vec<String> = equations.iter().map(|eq| equation_to_residual(eq)).collect();
    let values: Vec<f64> = variables
        .iter()
        .map(|name| solution.get(name))
        .collect::<Option<_>>()?;
    let evaluated = evaluate_residuals(&residuals, variables, &values)?;
    Some(evaluated.iter().fold(0.0, |acc: f64, r| acc.max(r.abs())))
}

/// Returns the value of `name` in the first solution satisfying `predicate`.
#[must_use]
pub fn find_value(
    solutions: &[Solution],
    name: &str,
    predicate: impl Fn(f64) -> bool,
) -> Option<f64> {
    solutions
        .iter()
        .filter_map(|solution| solution.get(name))
        .find(|&value| predicate(value))
}
