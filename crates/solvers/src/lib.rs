//! Numerical solvers for systems of equations.
//!
//! Every solver here works on an [`EquationSystem`], a vector residual
//! function `F: ℝⁿ → ℝᵐ`, and needs no user-supplied derivatives.
//!
//! # Modules
//!
//! - [`linalg`]: Gaussian elimination with partial pivoting on `nalgebra`
//!   matrices
//! - [`jacobian`]: central-difference Jacobian estimation
//! - [`newton`]: damped Newton-Raphson from one starting point, with Armijo
//!   backtracking
//! - [`multistart`]: runs Newton from many starting points, verifies and
//!   deduplicates the roots
//!
//! # Features
//!
//! - `parallel`: runs multi-start searches on the `rayon` thread pool.
//!   Results keep the canonical starting-point order.
//!
//! [`EquationSystem`]: numroot_core::EquationSystem

pub mod jacobian;
pub mod linalg;
pub mod multistart;
pub mod newton;
