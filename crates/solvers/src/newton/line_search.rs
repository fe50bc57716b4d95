use numroot_core::EquationSystem;

use super::{Config, Step, evaluate, norm_sq};

/// Armijo backtracking along the Newton direction `delta`.
///
/// Tries `x + α·delta` starting at `α = 1`, accepting the first trial with
/// `‖F‖² ≤ (1 − 2cα)·f_norm_sq`. A trial whose evaluation fails is rejected
/// like any other. If every trial is rejected the full step is returned.
pub(super) fn armijo<S>(
    system: &S,
    x: &[f64],
    delta: &[f64],
    f_norm_sq: f64,
    config: &Config,
) -> (Vec<f64>, Step)
where
    S: EquationSystem + ?Sized,
{
    let c = config.armijo_c();
    let mut alpha = 1.0;

    for backtracks in 0..config.max_backtracks() {
        let trial = advance(x, delta, alpha);
        if let Ok(residuals) = evaluate(system, &trial)
            && norm_sq(&residuals) <= (1.0 - 2.0 * c * alpha) * f_norm_sq
        {
            let step = Step {
                alpha,
                backtracks,
                fallback: false,
            };
            return (trial, step);
        }
        alpha *= config.backtrack_factor();
    }

    let step = Step {
        alpha: 1.0,
        backtracks: config.max_backtracks(),
        fallback: true,
    };
    (advance(x, delta, 1.0), step)
}

fn advance(x: &[f64], delta: &[f64], alpha: f64) -> Vec<f64> {
    x.iter().zip(delta).map(|(xi, di)| xi + alpha * di).collect()
}
