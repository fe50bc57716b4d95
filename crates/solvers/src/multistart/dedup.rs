/// Removes near-duplicate roots, keeping the first of each group.
///
/// A candidate is dropped if some already-kept root is within `tolerance` of
/// it in every coordinate. Vectors of different lengths are never equal.
/// Applying this twice gives the same result as applying it once.
#[must_use]
pub fn deduplicate(candidates: &[Vec<f64>], tolerance: f64) -> Vec<Vec<f64>> {
    let mut unique: Vec<Vec<f64>> = Vec::new();
    for candidate in candidates {
        if !unique.iter().any(|kept| roots_close(candidate, kept, tolerance)) {
            unique.push(candidate.clone());
        }
    }
    unique
}

/// Returns true if `a` and `b` differ by less than `tolerance` in every
/// coordinate.
#[must_use]
pub fn roots_close(a: &[f64], b: &[f64], tolerance: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < tolerance)
}

/// Largest power of ten applied in one multiplication while rounding.
const MAX_SCALE_STEP: i32 = 300;

/// Rounds `value` to `digits` significant digits.
///
/// Ties round to even. Zero and non-finite values are returned unchanged, as
/// is a value whose rounded form would not be finite.
#[must_use]
pub fn round_to_significant(value: f64, digits: i32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    #[allow(clippy::cast_possible_truncation)]
    let magnitude = value.abs().log10().floor() as i32;

    // 10^k overflows for k > 308, which tiny and subnormal values need.
    let scale = digits - 1 - magnitude;
    let (first, second) = if scale > MAX_SCALE_STEP {
        (MAX_SCALE_STEP, scale - MAX_SCALE_STEP)
    } else {
        (scale, 0)
    };
    let (first, second) = (10_f64.powi(first), 10_f64.powi(second));

    let rounded = (value * first * second).round_ties_even() / second / first;
    if rounded.is_finite() { rounded } else { value }
}
