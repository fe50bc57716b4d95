use std::collections::BTreeSet;

/// Names that are never detected as variables, compared in lower case.
pub const RESERVED_NAMES: [&str; 31] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "atan2", "sinh", "cosh", "tanh", "asinh",
    "acosh", "atanh", "log", "ln", "log10", "log2", "exp", "sqrt", "cbrt", "abs", "sign",
    "floor", "ceil", "round", "min", "max", "mod", "pow", "pi", "e",
];

/// Returns true if `name` is a function or constant name, ignoring case.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    RESERVED_NAMES.contains(&lower.as_str())
}

/// Detects the variables of a system of equations.
///
/// A variable is a single ASCII letter with no ASCII letter immediately
/// before or after it, so `x`, `2x`, and `x1` all yield `x` while `sin` and
/// `xy` yield nothing. Reserved names are skipped, which excludes `e` and `E`.
///
/// The result is sorted and free of duplicates.
#[must_use]
pub fn detect_variables<S: AsRef<str>>(equations: &[S]) -> Vec<String> {
    let mut variables = BTreeSet::new();

    for equation in equations {
        let chars: Vec<char> = equation.as_ref().chars().collect();
        for (i, &c) in chars.iter().enumerate() {
            if !c.is_ascii_alphabetic() {
                continue;
            }
            let before = i.checked_sub(1).map(|j| chars[j]);
            let after = chars.get(i + 1).copied();
            let isolated = !before.is_some_and(|b| b.is_ascii_alphabetic())
                && !after.is_some_and(|a| a.is_ascii_alphabetic());

            let name = c.to_string();
            if isolated && !is_reserved(&name) {
                variables.insert(name);
            }
        }
    }

    variables.into_iter().collect()
}
