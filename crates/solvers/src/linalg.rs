//! Gaussian elimination on `nalgebra` matrices.
//!
//! Matrices are stored as [`DMatrix<f64>`]. [`solve_linear_system_gaussian`]
//! solves `A·x = b` with partial pivoting and a fixed singularity threshold,
//! so that a singular Jacobian is reported rather than solved through.

use nalgebra::DMatrix;
use thiserror::Error;

/// Pivots (and back-substitution diagonals) below this magnitude are treated
/// as zero.
pub const SINGULAR_PIVOT: f64 = 1e-12;

/// Errors that can occur when solving a linear system.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    #[error("matrix is {rows}x{cols}, expected square")]
    NotSquare { rows: usize, cols: usize },

    #[error("right-hand side has length {found}, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("matrix is singular (pivot in column {column} is below tolerance)")]
    Singular { column: usize },
}

/// Solves `A·x = b` by Gaussian elimination with partial pivoting.
///
/// At each column the row with the largest remaining magnitude in that column
/// is swapped into the pivot position before eliminating below it, then the
/// upper-triangular system is back-substituted.
///
/// # Errors
///
/// Returns an error if `A` is not square, `b` does not match, or a pivot
/// falls below [`SINGULAR_PIVOT`].
pub fn solve_linear_system_gaussian(a: &DMatrix<f64>, b: &[f64]) -> Result<Vec<f64>, LinalgError> {
    let n = b.len();
    if !a.is_square() {
        return Err(LinalgError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    if a.nrows() != n {
        return Err(LinalgError::DimensionMismatch {
            expected: a.nrows(),
            found: n,
        });
    }

    let mut m = a.clone();
    let mut rhs = b.to_vec();

    for col in 0..n {
        let mut pivot_row = col;
        for row in col + 1..n {
            if m[(row, col)].abs() > m[(pivot_row, col)].abs() {
                pivot_row = row;
            }
        }
        if pivot_row != col {
            m.swap_rows(col, pivot_row);
            rhs.swap(col, pivot_row);
        }

        let pivot = m[(col, col)];
        if pivot.abs() < SINGULAR_PIVOT {
            return Err(LinalgError::Singular { column: col });
        }

        for row in col + 1..n {
            let factor = m[(row, col)] / pivot;
            for j in col..n {
                let delta = factor * m[(col, j)];
                m[(row, j)] -= delta;
            }
            let delta = factor * rhs[col];
            rhs[row] -= delta;
        }
    }

    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let diag = m[(i, i)];
        if diag.abs() < SINGULAR_PIVOT {
            return Err(LinalgError::Singular { column: i });
        }
        let tail: f64 = (i + 1..n).map(|j| m[(i, j)] * x[j]).sum();
        x[i] = (rhs[i] - tail) / diag;
    }

    Ok(x)
}
