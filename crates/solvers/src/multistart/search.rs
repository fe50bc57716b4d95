use crate::newton::Outcome;

/// One Newton-Raphson run of a multi-start search.
#[derive(Debug)]
pub struct Start {
    /// The starting point.
    pub guess: Vec<f64>,

    /// How the run ended.
    pub outcome: Outcome,

    /// True if the run produced a root that passed verification.
    pub verified: bool,
}

impl Start {
    /// Returns the verified root found from this start, if any.
    #[must_use]
    pub fn root(&self) -> Option<&[f64]> {
        if self.verified {
            self.outcome.root()
        } else {
            None
        }
    }
}

/// The result of a multi-start search.
#[derive(Debug)]
pub struct Search {
    /// Every run, in canonical starting-point order.
    pub starts: Vec<Start>,

    /// Distinct verified roots, in order of first discovery.
    pub roots: Vec<Vec<f64>>,
}
