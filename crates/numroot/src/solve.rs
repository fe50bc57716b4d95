use log::{debug, warn};
use numroot_observers::LogObserver;
use numroot_solvers::multistart;

use crate::{InputError, Options, Report, ResidualSystem, Solution, detect_variables};

/// Solves a system of equations given as text.
///
/// Each equation is `"lhs = rhs"` or an expression taken to equal zero.
/// Variables come from `options` or, if none are given, from
/// [`detect_variables`]. Newton-Raphson runs from the caller's guesses and a
/// fixed set of built-in starting points; roots that pass verification are
/// deduplicated, rounded, and returned in order of discovery.
///
/// This function does not fail. Rejected input is reported through
/// [`Report::error`], a search with no roots through [`Report::message`], and
/// a system whose equation and variable counts differ is still attempted with
/// [`Report::warning`] set.
#[must_use]
pub fn solve_numeric<S: AsRef<str>>(equations: &[S], options: &Options) -> Report {
    if equations.is_empty() {
        return Report::rejected(Vec::new(), InputError::NoEquations);
    }

    let variables = if options.variables().is_empty() {
        detect_variables(equations)
    } else {
        options.variables().to_vec()
    };
    if variables.is_empty() {
        return Report::rejected(Vec::new(), InputError::NoVariables);
    }

    let warning = (equations.len() != variables.len()).then(|| {
        let warning = format!(
            "System has {} equations and {} variables.",
            equations.len(),
            variables.len()
        );
        warn!("{warning}");
        warning
    });

    debug!(
        "solving {} equations for {variables:?} (tolerance {:e}, max {} iterations)",
        equations.len(),
        options.config().tolerance(),
        options.config().max_iterations()
    );

    let system = ResidualSystem::new(equations, variables);
    let search = multistart::solve(
        &system,
        options.guesses(),
        options.config().search(),
        LogObserver::default(),
    );

    let solutions = search
        .roots
        .iter()
        .map(|root| Solution::rounded(system.variables(), root))
        .collect();

    Report::new(system.variables().to_vec(), solutions, warning)
}
