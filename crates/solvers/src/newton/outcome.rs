use std::error::Error as StdError;

use thiserror::Error;

use crate::{jacobian::JacobianError, linalg::LinalgError};

/// How a single Newton-Raphson run ended.
#[derive(Debug)]
pub enum Outcome {
    /// The residual tolerance was met.
    Converged {
        x: Vec<f64>,
        /// Number of steps taken.
        iters: usize,
        max_residual: f64,
    },

    /// The iteration cap was reached, but the final iterate is within the
    /// relaxed exhaustion tolerance.
    AcceptedOnExhaustion { x: Vec<f64>, max_residual: f64 },

    /// The iteration cap was reached and the final iterate was rejected.
    ///
    /// `max_residual` is `None` if the final evaluation itself failed.
    RejectedOnExhaustion { max_residual: Option<f64> },

    /// A coordinate exceeded the divergence limit.
    Diverged { iter: usize },

    /// A numerical failure ended the run.
    Failed { iter: usize, failure: Failure },

    /// The observer stopped the run.
    StoppedByObserver { x: Vec<f64>, iter: usize },
}

/// Numerical failures that end a Newton-Raphson run.
#[derive(Debug, Error)]
pub enum Failure {
    #[error("residual evaluation failed")]
    Evaluation(#[source] Box<dyn StdError + Send + Sync>),

    #[error("residuals are not finite")]
    NonFinite,

    #[error("system returned {found} residuals, expected {expected}")]
    ResidualCount { expected: usize, found: usize },

    #[error("jacobian estimation failed")]
    Jacobian(#[from] JacobianError),

    #[error("linear solve failed")]
    LinearSolve(#[from] LinalgError),
}

impl Outcome {
    /// Returns the candidate root, if the run accepted one.
    #[must_use]
    pub fn root(&self) -> Option<&[f64]> {
        match self {
            Self::Converged { x, .. } | Self::AcceptedOnExhaustion { x, .. } => Some(x),
            _ => None,
        }
    }

    /// Consumes the outcome and returns the candidate root, if any.
    #[must_use]
    pub fn into_root(self) -> Option<Vec<f64>> {
        match self {
            Self::Converged { x, .. } | Self::AcceptedOnExhaustion { x, .. } => Some(x),
            _ => None,
        }
    }

    /// Returns a short lowercase label for logging.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Converged { .. } => "converged",
            Self::AcceptedOnExhaustion { .. } => "accepted on exhaustion",
            Self::RejectedOnExhaustion { .. } => "rejected on exhaustion",
            Self::Diverged { .. } => "diverged",
            Self::Failed { .. } => "failed",
            Self::StoppedByObserver { .. } => "stopped by observer",
        }
    }
}
