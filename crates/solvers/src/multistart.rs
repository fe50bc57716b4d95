//! Multi-start Newton-Raphson.
//!
//! # Algorithm
//!
//! A single Newton-Raphson run only finds the root its starting point happens
//! to be attracted to, if any. A multi-start search runs Newton from every
//! point produced by [`generate_initial_guesses`], re-checks each accepted
//! root against the verification tolerance, and merges near-duplicates with
//! [`deduplicate`].
//!
//! Runs are independent. With the `parallel` feature they execute on the
//! `rayon` thread pool; either way [`Search::starts`] is in canonical
//! starting-point order and [`Search::roots`] in order of first discovery.
//!
//! # Observers
//!
//! Each run gets its own clone of the observer, so observers used here must
//! be `Clone`. An observer that stops a run early only ends that run.

mod config;
mod dedup;
mod guesses;
mod search;


pub use config::{Config, ConfigError};
pub use dedup::{deduplicate, round_to_significant, roots_close};
pub use guesses::{GUESS_RANGE, RANDOM_GUESSES, generate_initial_guesses};
pub use search::{Search, Start};

use log::debug;
use numroot_core::{EquationSystem, Observer};

use crate::newton::{self, Action, Event, max_abs};

/// Runs Newton-Raphson from every starting point and collects the roots.
///
/// `user_guesses` are tried first; any with the wrong number of values are
/// dropped. A root is kept only if it passes verification, so every root in
/// the result has all `|F_i| < config.verify_tolerance()`.
pub fn solve<S, Obs>(system: &S, user_guesses: &[Vec<f64>], config: &Config, observer: Obs) -> Search
where
    S: EquationSystem + Sync + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action> + Clone + Send + Sync,
{
    let guesses = generate_initial_guesses(system.variable_count(), user_guesses, config.seed());

    #[cfg(feature = "parallel")]
    let starts: Vec<Start> = {
        use rayon::prelude::*;
        guesses
            .into_par_iter()
            .map(|guess| run_start(system, guess, config, observer.clone()))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let starts: Vec<Start> = guesses
        .into_iter()
        .map(|guess| run_start(system, guess, config, observer.clone()))
        .collect();

    for (index, start) in starts.iter().enumerate() {
        debug!(
            "start {index} from {:?}: {} (verified: {})",
            start.guess,
            start.outcome.label(),
            start.verified
        );
    }

    let verified: Vec<Vec<f64>> = starts
        .iter()
        .filter_map(Start::root)
        .map(<[f64]>::to_vec)
        .collect();
    let roots = deduplicate(&verified, config.dedup_tolerance());

    debug!(
        "multi-start: {} starts, {} verified roots, {} distinct",
        starts.len(),
        verified.len(),
        roots.len()
    );

    Search { starts, roots }
}

/// Runs multi-start Newton-Raphson without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
pub fn solve_unobserved<S>(system: &S, user_guesses: &[Vec<f64>], config: &Config) -> Search
where
    S: EquationSystem + Sync + ?Sized,
{
    solve(system, user_guesses, config, ())
}

/// Returns true if every residual at `x` is below `tolerance`.
///
/// A failed evaluation never verifies.
pub fn verify<S>(system: &S, x: &[f64], tolerance: f64) -> bool
where
    S: EquationSystem + ?Sized,
{
    newton::evaluate(system, x).is_ok_and(|residuals| max_abs(&residuals) < tolerance)
}

fn run_start<S, Obs>(system: &S, guess: Vec<f64>, config: &Config, observer: Obs) -> Start
where
    S: EquationSystem + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let outcome = newton::run(system, guess.clone(), config.newton(), observer);
    let verified = outcome
        .root()
        .is_some_and(|x| verify(system, x, config.verify_tolerance()));
    Start {
        guess,
        outcome,
        verified,
    }
}
