use log::{Level, log};
use numroot_core::Observer;
use numroot_solvers::newton::Event;

/// Logs Newton-Raphson events at a fixed [`Level`].
///
/// The observer never returns an action, so it does not change how the solver
/// runs. It is `Copy`, which makes it usable with multi-start searches where
/// every run gets its own observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
}

impl LogObserver {
    /// Creates an observer that logs at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Returns the level events are logged at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Trace)
    }
}

impl<A> Observer<Event<'_>, A> for LogObserver {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        match event {
            Event::Evaluated { iter, x, residuals } => log!(
                self.level,
                "newton iter {iter}: x = {x:?}, max |F| = {:e}, F = {residuals:?}",
                event.max_residual().unwrap_or(f64::NAN)
            ),
            Event::Stepped { iter, x, step } if step.fallback => log!(
                self.level,
                "newton iter {iter}: line search failed, full step to {x:?}"
            ),
            Event::Stepped { iter, x, step } => log!(
                self.level,
                "newton iter {iter}: step alpha = {} after {} backtracks, x = {x:?}",
                step.alpha,
                step.backtracks
            ),
        }
        None
    }
}
