/// Actions an observer can take during a Newton-Raphson run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run immediately.
    ///
    /// The run ends as [`Outcome::StoppedByObserver`](super::Outcome), which
    /// never yields a root.
    StopEarly,
}
