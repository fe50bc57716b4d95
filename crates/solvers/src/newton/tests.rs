use super::*;

use approx::assert_relative_eq;
use numroot_core::{FnSystem, from_fn};
use thiserror::Error;

use crate::linalg::LinalgError;

#[derive(Debug, Error)]
#[error("outside the domain")]
struct Domain;

#[test]
fn linear_system_converges_quickly() {
    let system = from_fn(2, 2, |x| vec![x[0] + x[1] - 4.0, x[0] - x[1] - 2.0]);

    let outcome = solve_unobserved(&system, &[0.0, 0.0], &Config::default()).expect("valid guess");

    let Outcome::Converged { x, iters, .. } = outcome else {
        panic!("expected convergence, got {outcome:?}");
    };
    // One exact step, plus at most one to clean up finite-difference error.
    assert!(iters <= 2);
    assert_relative_eq!(x[0], 3.0, epsilon = 1e-8);
    assert_relative_eq!(x[1], 1.0, epsilon = 1e-8);
}

#[test]
fn square_root_of_two() {
    let system = from_fn(1, 1, |x| vec![x[0] * x[0] - 2.0]);

    let outcome = solve_unobserved(&system, &[1.0], &Config::default()).expect("valid guess");

    let root = outcome.root().expect("converges from 1");
    assert_relative_eq!(root[0], 2.0_f64.sqrt(), epsilon = 1e-10);
    assert!(matches!(outcome, Outcome::Converged { max_residual, .. } if max_residual < 1e-10));
}

#[test]
fn starting_at_root_takes_no_steps() {
    let system = from_fn(1, 1, |x| vec![x[0] - 1.0]);

    let outcome = solve_unobserved(&system, &[1.0], &Config::default()).expect("valid guess");

    assert!(matches!(outcome, Outcome::Converged { iters: 0, .. }));
}

#[test]
fn singular_jacobian_fails() {
    // x^2 + 1 has a flat Jacobian at the origin.
    let system = from_fn(1, 1, |x| vec![x[0] * x[0] + 1.0]);

    let outcome = solve_unobserved(&system, &[0.0], &Config::default()).expect("valid guess");

    assert!(matches!(
        outcome,
        Outcome::Failed {
            iter: 1,
            failure: Failure::LinearSolve(LinalgError::Singular { column: 0 }),
        }
    ));
    assert!(outcome.root().is_none());
}

#[test]
fn failed_evaluation_ends_the_run() {
    let system = FnSystem::new(1, 1, |_: &[f64]| -> Result<Vec<f64>, Domain> { Err(Domain) });

    let outcome = solve_unobserved(&system, &[0.0], &Config::default()).expect("valid guess");

    assert!(matches!(
        outcome,
        Outcome::Failed {
            iter: 1,
            failure: Failure::Evaluation(_),
        }
    ));
}

#[test]
fn non_finite_residual_is_a_failure() {
    let system = from_fn(1, 1, |x| vec![x[0].ln()]);

    let outcome = solve_unobserved(&system, &[-1.0], &Config::default()).expect("valid guess");

    assert!(matches!(
        outcome,
        Outcome::Failed {
            failure: Failure::NonFinite,
            ..
        }
    ));
}

#[test]
fn wrong_residual_count_is_a_failure() {
    let system = from_fn(1, 2, |x| vec![x[0]]);

    let outcome = solve_unobserved(&system, &[1.0], &Config::default()).expect("valid guess");

    assert!(matches!(
        outcome,
        Outcome::Failed {
            failure: Failure::ResidualCount {
                expected: 2,
                found: 1
            },
            ..
        }
    ));
}

#[test]
fn divergence_is_checked_before_stepping() {
    let system = from_fn(1, 1, |x| vec![x[0] - 0.5]);
    let config = Config::default()
        .with_divergence_limit(1.0)
        .expect("positive limit");

    let outcome = solve_unobserved(&system, &[5.0], &config).expect("valid guess");

    assert!(matches!(outcome, Outcome::Diverged { iter: 1 }));
}

#[test]
fn exhaustion_accepts_nearly_converged_iterate() {
    let system = from_fn(1, 1, |x| vec![x[0] - 1.0]);
    let config = Config::new(1e-10, 0).expect("valid tolerance");

    let outcome = solve_unobserved(&system, &[1.0 + 1e-9], &config).expect("valid guess");

    assert!(matches!(outcome, Outcome::AcceptedOnExhaustion { .. }));
    assert!(outcome.root().is_some());
}

#[test]
fn exhaustion_rejects_distant_iterate() {
    let system = from_fn(1, 1, |x| vec![x[0] - 1.0]);
    let config = Config::new(1e-10, 0).expect("valid tolerance");

    let outcome = solve_unobserved(&system, &[2.0], &config).expect("valid guess");

    let Outcome::RejectedOnExhaustion {
        max_residual: Some(max_residual),
    } = outcome
    else {
        panic!("expected rejection, got {outcome:?}");
    };
    assert_relative_eq!(max_residual, 1.0);
}

#[test]
fn exhaustion_rejects_when_final_evaluation_fails() {
    let system = FnSystem::new(1, 1, |_: &[f64]| -> Result<Vec<f64>, Domain> { Err(Domain) });
    let config = Config::new(1e-10, 0).expect("valid tolerance");

    let outcome = solve_unobserved(&system, &[0.0], &config).expect("valid guess");

    assert!(matches!(
        outcome,
        Outcome::RejectedOnExhaustion { max_residual: None }
    ));
}

#[test]
fn rejects_wrong_guess_dimension() {
    let system = from_fn(2, 2, |x| vec![x[0], x[1]]);

    let result = solve_unobserved(&system, &[1.0], &Config::default());

    assert_eq!(
        result.unwrap_err(),
        Error::GuessDimension {
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn line_search_damps_an_overshooting_step() {
    // Newton on atan overshoots badly from x = 3.
    let system = from_fn(1, 1, |x| vec![x[0].atan()]);
    let mut steps = Vec::new();

    let observer = |event: &Event<'_>| {
        if let Event::Stepped { step, .. } = event {
            steps.push(*step);
        }
        None
    };
    let outcome = solve(&system, &[3.0], &Config::default(), observer).expect("valid guess");

    let root = outcome.root().expect("converges to zero");
    assert!(root[0].abs() < 1e-10);
    assert!(!steps[0].fallback);
    assert!(steps[0].backtracks > 0);
    assert!(steps[0].alpha < 1.0);
}

#[test]
fn line_search_falls_back_to_full_step() {
    // Only the starting point can be evaluated, so every trial fails.
    let system = FnSystem::new(1, 1, |x: &[f64]| {
        if x[0] == 4.0 { Ok(vec![x[0]]) } else { Err(Domain) }
    });
    let config = Config::default();

    let (next, step) = line_search::armijo(&system, &[4.0], &[-4.0], 16.0, &config);

    assert_eq!(next, vec![0.0]);
    assert_eq!(
        step,
        Step {
            alpha: 1.0,
            backtracks: config.max_backtracks(),
            fallback: true,
        }
    );
}

#[test]
fn observer_can_stop_early() {
    let system = from_fn(1, 1, |x| vec![x[0] * x[0] - 2.0]);

    let observer = |event: &Event<'_>| (event.iter() == 2).then_some(Action::StopEarly);
    let outcome = solve(&system, &[1.0], &Config::default(), observer).expect("valid guess");

    let Outcome::StoppedByObserver { x, iter } = &outcome else {
        panic!("expected observer stop, got {outcome:?}");
    };
    assert_eq!(*iter, 2);
    assert_eq!(x.len(), 1);
    assert!(outcome.root().is_none());
}

#[test]
fn evaluated_events_report_residuals() {
    let system = from_fn(2, 2, |x| vec![x[0] + x[1] - 4.0, x[0] - x[1] - 2.0]);
    let mut first = None;

    let observer = |event: &Event<'_>| {
        if first.is_none() {
            first = event.max_residual();
        }
        None
    };
    solve(&system, &[0.0, 0.0], &Config::default(), observer).expect("valid guess");

    assert_eq!(first, Some(4.0));
}

#[test]
fn config_validation() {
    assert_eq!(Config::new(0.0, 10), Err(ConfigError::Tolerance));
    assert_eq!(Config::new(f64::NAN, 10), Err(ConfigError::Tolerance));

    let config = Config::default();
    assert_eq!(
        config.with_line_search(0.5, 0.5, 10),
        Err(ConfigError::ArmijoC)
    );
    assert_eq!(
        config.with_line_search(1e-4, 1.0, 10),
        Err(ConfigError::BacktrackFactor)
    );
    assert_eq!(
        config.with_divergence_limit(f64::INFINITY),
        Err(ConfigError::DivergenceLimit)
    );
    assert_eq!(
        config.with_jacobian_step(-1.0),
        Err(ConfigError::JacobianStep)
    );

    let tuned = config
        .with_line_search(1e-3, 0.25, 5)
        .expect("valid constants");
    assert_eq!(tuned.max_backtracks(), 5);
    assert_relative_eq!(tuned.backtrack_factor(), 0.25);
    assert_relative_eq!(tuned.tolerance(), 1e-10);
}
