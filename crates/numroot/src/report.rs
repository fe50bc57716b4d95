use serde::{Deserialize, Serialize};

use crate::{InputError, Solution};

/// Name of the method reported in every [`Report`].
pub const METHOD: &str = "newton_raphson";

/// Message reported when a solve finds no roots.
pub const NO_SOLUTIONS_MESSAGE: &str = "No solutions found in search range [-10, 10]. \
     Try providing initial_guesses closer to expected solutions.";

/// The outcome of [`solve_numeric`](crate::solve_numeric).
///
/// A report with an `error` has no solutions and no search was run. A report
/// with a `message` ran the search but found nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Distinct roots, in order of discovery.
    pub solutions: Vec<Solution>,

    /// The variables solved for, in the order values are bound.
    pub variables: Vec<String>,

    /// Always [`METHOD`].
    pub method: String,

    /// Set when the number of equations differs from the number of variables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,

    /// Set when the search found no roots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Set when the input was rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Report {
    /// Builds the report for a completed search.
    #[must_use]
    pub fn new(variables: Vec<String>, solutions: Vec<Solution>, warning: Option<String>) -> Self {
        let message = solutions
            .is_empty()
            .then(|| NO_SOLUTIONS_MESSAGE.to_string());
        Self {
            solutions,
            variables,
            method: METHOD.to_string(),
            warning,
            message,
            error: None,
        }
    }

    /// Builds the report for rejected input.
    #[must_use]
    pub fn rejected(variables: Vec<String>, error: InputError) -> Self {
        Self {
            solutions: Vec::new(),
            variables,
            method: METHOD.to_string(),
            warning: None,
            message: None,
            error: Some(error.to_string()),
        }
    }

    /// Serializes the report as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses a report from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid report.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
