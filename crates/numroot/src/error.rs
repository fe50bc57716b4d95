use thiserror::Error;

/// Input problems that stop a solve before any iteration.
///
/// The `Display` text is what [`Report::error`](crate::Report::error) carries.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("No equations provided.")]
    NoEquations,

    #[error("No variables detected in equations.")]
    NoVariables,
}
