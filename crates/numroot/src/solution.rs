use std::fmt;

use numroot_solvers::multistart::{deduplicate, round_to_significant};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

/// Significant digits kept in reported values.
pub const SIGNIFICANT_DIGITS: i32 = 10;

/// One root of a system, as variable name and value pairs.
///
/// Serializes as a JSON object whose keys are in variable order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Solution {
    entries: Vec<(String, f64)>,
}

impl Solution {
    /// Pairs `variables[i]` with `values[i]`.
    #[must_use]
    pub fn new(variables: &[String], values: &[f64]) -> Self {
        Self {
            entries: variables.iter().cloned().zip(values.iter().copied()).collect(),
        }
    }

    /// Pairs variables with values rounded to [`SIGNIFICANT_DIGITS`].
    #[must_use]
    pub fn rounded(variables: &[String], values: &[f64]) -> Self {
        let rounded: Vec<f64> = values
            .iter()
            .map(|&v| round_to_significant(v, SIGNIFICANT_DIGITS))
            .collect();
        Self::new(variables, &rounded)
    }

    /// Returns the value of `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find_map(|(n, v)| (n == name).then_some(*v))
    }

    /// Iterates over `(name, value)` pairs in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Returns the values in variable order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, v)| *v).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Solution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Solution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SolutionVisitor)
    }
}

struct SolutionVisitor;

impl<'de> Visitor<'de> for SolutionVisitor {
    type Value = Solution;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of variable names to numbers")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Solution, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, value)) = access.next_entry::<String, f64>()? {
            entries.push((name, value));
        }
        Ok(Solution { entries })
    }
}

/// Merges near-duplicate candidates and names the survivors.
///
/// Candidates are scanned in order and one is kept only if no kept candidate
/// is within `tolerance` in every coordinate. Survivors are rounded to
/// [`SIGNIFICANT_DIGITS`] and paired with `variables`.
#[must_use]
pub fn deduplicate_solutions(
    candidates: &[Vec<f64>],
    variables: &[String],
    tolerance: f64,
) -> Vec<Solution> {
    deduplicate(candidates, tolerance)
        .iter()
        .map(|values| Solution::rounded(variables, values))
        .collect()
}
