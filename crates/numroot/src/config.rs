use numroot_solvers::{multistart, newton};
use thiserror::Error;

/// Candidates closer than this in every coordinate are the same solution.
pub const DEDUP_TOLERANCE: f64 = 1e-6;

/// Roots are verified against `VERIFY_FACTOR × tolerance`.
pub const VERIFY_FACTOR: f64 = 10.0;

/// Seed for the random starting points.
pub const DEFAULT_SEED: u64 = 42;

/// Errors that can occur when validating a [`Config`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error(transparent)]
    Newton(#[from] newton::ConfigError),

    #[error(transparent)]
    Search(#[from] multistart::ConfigError),
}

/// Solver settings for [`solve_numeric`](crate::solve_numeric).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Config {
    search: multistart::Config,
}

impl Config {
    /// Creates a config with the given residual tolerance and per-start
    /// iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive.
    pub fn new(tolerance: f64, max_iterations: usize) -> Result<Self, ConfigError> {
        let newton = newton::Config::new(tolerance, max_iterations)?;
        let search = multistart::Config::new(newton, DEDUP_TOLERANCE, VERIFY_FACTOR, DEFAULT_SEED)?;
        Ok(Self { search })
    }

    /// Returns a copy of this config with a different random seed.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            search: self.search.with_seed(seed),
        }
    }

    /// Returns the residual tolerance for convergence.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.search.newton().tolerance()
    }

    /// Returns the per-start iteration cap.
    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.search.newton().max_iters()
    }

    /// Returns the seed for the random starting points.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.search.seed()
    }

    /// Returns the underlying multi-start config.
    #[must_use]
    pub fn search(&self) -> &multistart::Config {
        &self.search
    }
}

impl From<multistart::Config> for Config {
    fn from(search: multistart::Config) -> Self {
        Self { search }
    }
}

/// Everything besides the equations that a solve can be given.
#[derive(Debug, Clone, Default)]
pub struct Options {
    variables: Vec<String>,
    guesses: Vec<Vec<f64>>,
    config: Config,
}

impl Options {
    /// Creates options with detected variables, no extra guesses, and the
    /// default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Solves for these variables, in this order.
    ///
    /// An empty list means the variables are detected from the equations.
    #[must_use]
    pub fn with_variables<I, S>(self, variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            variables: variables.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    /// Tries these starting points before the built-in ones.
    ///
    /// Guesses with the wrong number of values are ignored.
    #[must_use]
    pub fn with_guesses(self, guesses: Vec<Vec<f64>>) -> Self {
        Self { guesses, ..self }
    }

    /// Uses this solver config.
    #[must_use]
    pub fn with_config(self, config: Config) -> Self {
        Self { config, ..self }
    }

    /// Returns the explicit variables, empty if they are to be detected.
    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Returns the caller-supplied starting points.
    #[must_use]
    pub fn guesses(&self) -> &[Vec<f64>] {
        &self.guesses
    }

    /// Returns the solver config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
