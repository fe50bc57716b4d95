use std::collections::{BTreeMap, HashMap};

/// Supplies values for the free identifiers of an expression.
pub trait Bindings {
    /// Returns the value bound to `name`, if any.
    fn get(&self, name: &str) -> Option<f64>;
}

impl Bindings for HashMap<String, f64> {
    fn get(&self, name: &str) -> Option<f64> {
        HashMap::get(self, name).copied()
    }
}

impl Bindings for BTreeMap<String, f64> {
    fn get(&self, name: &str) -> Option<f64> {
        BTreeMap::get(self, name).copied()
    }
}

impl<B: Bindings + ?Sized> Bindings for &B {
    fn get(&self, name: &str) -> Option<f64> {
        (**self).get(name)
    }
}

/// Positional bindings: `names[i]` is bound to `values[i]`.
///
/// This is the cheap binding used on the solver's hot path, where the
/// variable order is fixed and only the values change between evaluations.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    names: &'a [String],
    values: &'a [f64],
}

impl<'a> Scope<'a> {
    /// Pairs names with values.
    ///
    /// Extra names or values beyond the shorter slice are ignored.
    #[must_use]
    pub fn new(names: &'a [String], values: &'a [f64]) -> Self {
        Self { names, values }
    }
}

impl Bindings for Scope<'_> {
    fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .zip(self.values)
            .find_map(|(n, v)| (n == name).then_some(*v))
    }
}
