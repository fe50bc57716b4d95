//! Numerical root finding for systems of equations written as text.
//!
//! Give [`solve_numeric`] equations such as `"sin(x) + y = 1"` and it returns
//! a [`Report`] with every distinct root it could find. Under the hood each
//! equation becomes a residual `(lhs) - (rhs)`, and a multi-start damped
//! Newton-Raphson search (see `numroot-solvers`) drives the residuals to zero
//! from many starting points.
//!
//! # Example
//!
//! ```
//! use numroot::{Options, solve_numeric};
//!
//! let report = solve_numeric(&["x + y = 4", "x - y = 2"], &Options::new());
//!
//! assert_eq!(report.variables, ["x", "y"]);
//! let solution = &report.solutions[0];
//! assert!((solution.get("x").unwrap() - 3.0).abs() < 1e-9);
//! assert!((solution.get("y").unwrap() - 1.0).abs() < 1e-9);
//! ```
//!
//! # Logging
//!
//! Diagnostics go through the `log` facade: a `warn!` when equation and
//! variable counts differ, `debug!` per start and per search, and `trace!`
//! per Newton iteration. No logger is installed.
//!
//! # Features
//!
//! - `parallel`: runs the starts of a search on the `rayon` thread pool.

mod config;
mod error;
mod report;
mod residual;
mod solution;
mod solve;
mod variables;

pub use config::{Config, ConfigError, DEDUP_TOLERANCE, DEFAULT_SEED, Options, VERIFY_FACTOR};
pub use error::InputError;
pub use report::{METHOD, NO_SOLUTIONS_MESSAGE, Report};
pub use residual::{ResidualError, ResidualSystem, equation_to_residual, evaluate_residuals};
pub use solution::{SIGNIFICANT_DIGITS, Solution, deduplicate_solutions};
pub use solve::solve_numeric;
pub use variables::{RESERVED_NAMES, detect_variables, is_reserved};
