/// Events emitted by the Newton-Raphson solver.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// Residuals were evaluated at the current iterate.
    ///
    /// Emitted once per iteration, before the convergence check.
    Evaluated {
        /// Iteration number, starting at 1.
        iter: usize,

        /// The current iterate.
        x: &'a [f64],

        /// Residuals at `x`.
        residuals: &'a [f64],
    },

    /// The solver moved to a new iterate.
    Stepped {
        /// Iteration number, starting at 1.
        iter: usize,

        /// The new iterate.
        x: &'a [f64],

        /// How the step length was chosen.
        step: Step,
    },
}

/// Line-search details for one Newton step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Fraction of the Newton direction that was taken.
    pub alpha: f64,

    /// Number of rejected trials before the step was accepted.
    pub backtracks: usize,

    /// True if no trial was accepted and the full undamped step was taken.
    pub fallback: bool,
}

impl Event<'_> {
    /// Returns the iteration number.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Evaluated { iter, .. } | Self::Stepped { iter, .. } => *iter,
        }
    }

    /// Returns the iterate the event refers to.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        match self {
            Self::Evaluated { x, .. } | Self::Stepped { x, .. } => x,
        }
    }

    /// Returns the largest absolute residual, if this event carries residuals.
    #[must_use]
    pub fn max_residual(&self) -> Option<f64> {
        match self {
            Self::Evaluated { residuals, .. } => Some(super::max_abs(residuals)),
            Self::Stepped { .. } => None,
        }
    }
}
