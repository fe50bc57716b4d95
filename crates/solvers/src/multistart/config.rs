use thiserror::Error;

use crate::newton;

/// Configuration for a multi-start search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    newton: newton::Config,
    dedup_tolerance: f64,
    verify_factor: f64,
    seed: u64,
}

/// Errors that can occur when validating a multi-start config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("dedup_tolerance must be finite and positive")]
    DedupTolerance,

    #[error("verify_factor must be finite and at least 1")]
    VerifyFactor,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            newton: newton::Config::default(),
            dedup_tolerance: 1e-6,
            verify_factor: 10.0,
            seed: 42,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// Roots are verified against `verify_factor × newton.tolerance()` and two
    /// roots closer than `dedup_tolerance` in every coordinate are merged.
    /// `seed` fixes the random starting points.
    ///
    /// # Errors
    ///
    /// Returns an error if `dedup_tolerance` is not finite and positive, or if
    /// `verify_factor` is not finite or is less than 1.
    pub fn new(
        newton: newton::Config,
        dedup_tolerance: f64,
        verify_factor: f64,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        if !dedup_tolerance.is_finite() || dedup_tolerance <= 0.0 {
            return Err(ConfigError::DedupTolerance);
        }
        if !verify_factor.is_finite() || verify_factor < 1.0 {
            return Err(ConfigError::VerifyFactor);
        }

        Ok(Self {
            newton,
            dedup_tolerance,
            verify_factor,
            seed,
        })
    }

    /// Returns a copy of this config with a different random seed.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    /// Returns the per-start Newton-Raphson config.
    #[must_use]
    pub fn newton(&self) -> &newton::Config {
        &self.newton
    }

    /// Returns the tolerance under which two roots are considered equal.
    #[must_use]
    pub fn dedup_tolerance(&self) -> f64 {
        self.dedup_tolerance
    }

    /// Returns the multiple of the Newton tolerance used for verification.
    #[must_use]
    pub fn verify_factor(&self) -> f64 {
        self.verify_factor
    }

    /// Returns the residual bound a root must satisfy to be kept.
    #[must_use]
    pub fn verify_tolerance(&self) -> f64 {
        self.newton.tolerance() * self.verify_factor
    }

    /// Returns the seed for the random starting points.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
