//! Central-difference Jacobian estimation.

use std::{error::Error as StdError, fmt};

use nalgebra::DMatrix;
use numroot_core::EquationSystem;
use thiserror::Error;

/// Default finite-difference step.
///
/// The step is absolute and is not scaled to the magnitude of the variables.
pub const DEFAULT_STEP: f64 = 1e-7;

/// Which side of a central difference was being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("x + h"),
            Direction::Backward => f.write_str("x - h"),
        }
    }
}

/// Errors that can occur while estimating a Jacobian.
#[derive(Debug, Error)]
pub enum JacobianError {
    #[error("finite-difference step must be finite and positive, got {0}")]
    InvalidStep(f64),

    #[error("evaluation failed at {direction} for variable {column}")]
    Evaluation {
        column: usize,
        direction: Direction,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("non-finite residual at {direction} for variable {column}")]
    NonFinite { column: usize, direction: Direction },

    #[error("system returned {found} residuals, expected {expected}")]
    ResidualCount { expected: usize, found: usize },
}

/// Estimates the Jacobian of `system` at `x` by central differences.
///
/// Column `j` is `(F(x + h·e_j) − F(x − h·e_j)) / (2h)`, so the result has one
/// row per equation and one column per variable. Any failed evaluation fails
/// the whole estimate; there is no partially filled Jacobian.
///
/// # Errors
///
/// Returns an error if `h` is not a finite positive number, if any perturbed
/// evaluation fails, or if the system returns the wrong number of residuals.
pub fn compute_jacobian<S>(system: &S, x: &[f64], h: f64) -> Result<DMatrix<f64>, JacobianError>
where
    S: EquationSystem + ?Sized,
{
    if !h.is_finite() || h <= 0.0 {
        return Err(JacobianError::InvalidStep(h));
    }

    let rows = system.equation_count();
    let mut jacobian = DMatrix::zeros(rows, x.len());
    let mut point = x.to_vec();

    for column in 0..x.len() {
        point[column] = x[column] + h;
        let forward = evaluate(system, &point, rows, column, Direction::Forward)?;

        point[column] = x[column] - h;
        let backward = evaluate(system, &point, rows, column, Direction::Backward)?;

        point[column] = x[column];

        for (row, (f, b)) in forward.iter().zip(&backward).enumerate() {
            jacobian[(row, column)] = (f - b) / (2.0 * h);
        }
    }

    Ok(jacobian)
}

fn evaluate<S>(
    system: &S,
    point: &[f64],
    rows: usize,
    column: usize,
    direction: Direction,
) -> Result<Vec<f64>, JacobianError>
where
    S: EquationSystem + ?Sized,
{
    let residuals = system
        .residuals(point)
        .map_err(|e| JacobianError::Evaluation {
            column,
            direction,
            source: Box::new(e),
        })?;
    if residuals.len() != rows {
        return Err(JacobianError::ResidualCount {
            expected: rows,
            found: residuals.len(),
        });
    }
    if residuals.iter().any(|r| !r.is_finite()) {
        return Err(JacobianError::NonFinite { column, direction });
    }
    Ok(residuals)
}
