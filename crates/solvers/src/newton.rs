//! Damped Newton-Raphson iteration for square systems of equations.
//!
//! # Algorithm
//!
//! Each iteration evaluates the residuals `F(x)`, stops if the largest
//! `|F_i|` is below the tolerance, and otherwise solves `J·Δ = −F` with a
//! central-difference Jacobian. The step along `Δ` is damped by Armijo
//! backtracking; when no trial satisfies the sufficient-decrease condition
//! the full step is taken anyway.
//!
//! When the iteration cap is reached, the final iterate is still accepted if
//! its largest residual is below `100 × tolerance`.
//!
//! # Outcomes
//!
//! A run never returns an error for numerical trouble. Singular Jacobians,
//! failed evaluations, and divergence are all reported as an [`Outcome`], and
//! only [`Outcome::Converged`] and [`Outcome::AcceptedOnExhaustion`] carry a
//! root.
//!
//! # Observer Events
//!
//! - [`Event::Evaluated`] once per iteration, before the convergence check
//! - [`Event::Stepped`] after each step, with the line-search details
//!
//! Observers can return [`Action::StopEarly`] from either event.

mod action;
mod config;
mod error;
mod event;
mod line_search;
mod outcome;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Event, Step};
pub use outcome::{Failure, Outcome};

use numroot_core::{EquationSystem, Observer};

use crate::{jacobian::compute_jacobian, linalg::solve_linear_system_gaussian};

/// Residual growth allowed when accepting the final iterate after the
/// iteration cap is reached.
pub const EXHAUSTION_FACTOR: f64 = 100.0;

/// Runs Newton-Raphson from `x0`.
///
/// The observer receives an [`Event`] for each evaluation and each step.
/// See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if `x0` does not have one value per variable.
pub fn solve<S, Obs>(
    system: &S,
    x0: &[f64],
    config: &Config,
    observer: Obs,
) -> Result<Outcome, Error>
where
    S: EquationSystem + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    if x0.len() != system.variable_count() {
        return Err(Error::GuessDimension {
            expected: system.variable_count(),
            found: x0.len(),
        });
    }
    Ok(run(system, x0.to_vec(), config, observer))
}

/// Runs Newton-Raphson from `x0`.
///
/// The starting point is assumed to have one value per variable.
pub(crate) fn run<S, Obs>(system: &S, x0: Vec<f64>, config: &Config, mut observer: Obs) -> Outcome
where
    S: EquationSystem + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut x = x0;

    for iter in 1..=config.max_iters() {
        let residuals = match evaluate(system, &x) {
            Ok(residuals) => residuals,
            Err(failure) => return Outcome::Failed { iter, failure },
        };

        let event = Event::Evaluated {
            iter,
            x: &x,
            residuals: &residuals,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Outcome::StoppedByObserver { x, iter };
        }

        let max_residual = max_abs(&residuals);
        if max_residual < config.tolerance() {
            return Outcome::Converged {
                x,
                iters: iter - 1,
                max_residual,
            };
        }

        if x.iter().any(|xi| xi.abs() > config.divergence_limit()) {
            return Outcome::Diverged { iter };
        }

        let jacobian = match compute_jacobian(system, &x, config.jacobian_step()) {
            Ok(jacobian) => jacobian,
            Err(err) => {
                return Outcome::Failed {
                    iter,
                    failure: err.into(),
                };
            }
        };

        let rhs: Vec<f64> = residuals.iter().map(|r| -r).collect();
        let delta = match solve_linear_system_gaussian(&jacobian, &rhs) {
            Ok(delta) => delta,
            Err(err) => {
                return Outcome::Failed {
                    iter,
                    failure: err.into(),
                };
            }
        };

        let (next, step) = line_search::armijo(system, &x, &delta, norm_sq(&residuals), config);
        x = next;

        let event = Event::Stepped { iter, x: &x, step };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Outcome::StoppedByObserver { x, iter };
        }
    }

    match evaluate(system, &x) {
        Ok(residuals) => {
            let max_residual = max_abs(&residuals);
            if max_residual < config.tolerance() * EXHAUSTION_FACTOR {
                Outcome::AcceptedOnExhaustion { x, max_residual }
            } else {
                Outcome::RejectedOnExhaustion {
                    max_residual: Some(max_residual),
                }
            }
        }
        Err(_) => Outcome::RejectedOnExhaustion { max_residual: None },
    }
}

/// Runs Newton-Raphson from `x0` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `x0` does not have one value per variable.
pub fn solve_unobserved<S>(system: &S, x0: &[f64], config: &Config) -> Result<Outcome, Error>
where
    S: EquationSystem + ?Sized,
{
    solve(system, x0, config, ())
}

/// Evaluates the residuals and checks their count and finiteness.
pub(crate) fn evaluate<S>(system: &S, x: &[f64]) -> Result<Vec<f64>, Failure>
where
    S: EquationSystem + ?Sized,
{
    let residuals = system
        .residuals(x)
        .map_err(|e| Failure::Evaluation(Box::new(e)))?;
    if residuals.len() != system.equation_count() {
        return Err(Failure::ResidualCount {
            expected: system.equation_count(),
            found: residuals.len(),
        });
    }
    if residuals.iter().any(|r| !r.is_finite()) {
        return Err(Failure::NonFinite);
    }
    Ok(residuals)
}

/// Largest absolute value, or zero for an empty slice.
pub(crate) fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, v| acc.max(v.abs()))
}

fn norm_sq(values: &[f64]) -> f64 {
    values.iter().map(|v| v * v).sum()
}
