use thiserror::Error;

/// Errors that prevent a Newton-Raphson run from starting.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("initial guess has {found} values, system has {expected} variables")]
    GuessDimension { expected: usize, found: usize },
}
