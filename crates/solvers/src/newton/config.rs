use thiserror::Error;

use crate::jacobian::DEFAULT_STEP;

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
    divergence_limit: f64,
    armijo_c: f64,
    backtrack_factor: f64,
    max_backtracks: usize,
    jacobian_step: f64,
}

/// Errors that can occur when validating a Newton-Raphson solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("divergence_limit must be finite and positive")]
    DivergenceLimit,

    #[error("armijo_c must be in (0, 0.5)")]
    ArmijoC,

    #[error("backtrack_factor must be in (0, 1)")]
    BacktrackFactor,

    #[error("jacobian_step must be finite and positive")]
    JacobianStep,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iters: 50,
            divergence_limit: 1e15,
            armijo_c: 1e-4,
            backtrack_factor: 0.5,
            max_backtracks: 10,
            jacobian_step: DEFAULT_STEP,
        }
    }
}

impl Config {
    /// Creates a config with the given tolerance and iteration cap.
    ///
    /// The remaining settings take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !is_positive(tolerance) {
            return Err(ConfigError::Tolerance);
        }
        Ok(Self {
            tolerance,
            max_iters,
            ..Self::default()
        })
    }

    /// Sets the magnitude beyond which any coordinate counts as divergence.
    ///
    /// # Errors
    ///
    /// Returns an error if `limit` is not finite and positive.
    pub fn with_divergence_limit(self, limit: f64) -> Result<Self, ConfigError> {
        if !is_positive(limit) {
            return Err(ConfigError::DivergenceLimit);
        }
        Ok(Self {
            divergence_limit: limit,
            ..self
        })
    }

    /// Sets the Armijo line-search constants.
    ///
    /// # Errors
    ///
    /// Returns an error if `armijo_c` is outside `(0, 0.5)` or
    /// `backtrack_factor` is outside `(0, 1)`.
    pub fn with_line_search(
        self,
        armijo_c: f64,
        backtrack_factor: f64,
        max_backtracks: usize,
    ) -> Result<Self, ConfigError> {
        if !(armijo_c > 0.0 && armijo_c < 0.5) {
            return Err(ConfigError::ArmijoC);
        }
        if !(backtrack_factor > 0.0 && backtrack_factor < 1.0) {
            return Err(ConfigError::BacktrackFactor);
        }
        Ok(Self {
            armijo_c,
            backtrack_factor,
            max_backtracks,
            ..self
        })
    }

    /// Sets the central-difference step used for the Jacobian.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not finite and positive.
    pub fn with_jacobian_step(self, step: f64) -> Result<Self, ConfigError> {
        if !is_positive(step) {
            return Err(ConfigError::JacobianStep);
        }
        Ok(Self {
            jacobian_step: step,
            ..self
        })
    }

    /// Returns the residual tolerance for convergence.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of Newton iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the divergence limit.
    #[must_use]
    pub fn divergence_limit(&self) -> f64 {
        self.divergence_limit
    }

    /// Returns the Armijo sufficient-decrease constant.
    #[must_use]
    pub fn armijo_c(&self) -> f64 {
        self.armijo_c
    }

    /// Returns the factor applied to the step length on each backtrack.
    #[must_use]
    pub fn backtrack_factor(&self) -> f64 {
        self.backtrack_factor
    }

    /// Returns the maximum number of line-search trials.
    #[must_use]
    pub fn max_backtracks(&self) -> usize {
        self.max_backtracks
    }

    /// Returns the central-difference step.
    #[must_use]
    pub fn jacobian_step(&self) -> f64 {
        self.jacobian_step
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
