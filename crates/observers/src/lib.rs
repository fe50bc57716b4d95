//! Reusable observers for numroot solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the solvers in `numroot-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for generic observers
//!   ([`HasResidual`], [`CanStopEarly`])
//! - [`LogObserver`]: forwards Newton-Raphson events to the `log` facade
//!
//! [`Observer`]: numroot_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

mod logger;
pub mod traits;

pub use logger::LogObserver;
