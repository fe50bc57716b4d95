//! Core traits and types for numroot.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! the text front end build on:
//!
//! - [`EquationSystem`]: a vector residual function `F: ℝⁿ → ℝᵐ` whose
//!   roots the solvers search for
//! - [`FnSystem`]: adapts a closure into an [`EquationSystem`]
//! - [`Observer`]: receives solver events and optionally returns control actions

mod observer;
mod system;

pub use observer::Observer;
pub use system::{EquationSystem, FnSystem, from_fn};
