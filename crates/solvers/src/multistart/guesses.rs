use std::f64::consts::PI;

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Bound of the box `[-GUESS_RANGE, GUESS_RANGE]ⁿ` the random starts are
/// drawn from.
pub const GUESS_RANGE: f64 = 10.0;

/// Number of random starting points.
pub const RANDOM_GUESSES: usize = 20;

/// Constant vectors tried after the unit vectors, in order.
const CONSTANT_GUESSES: [f64; 10] = [
    1.0,
    -1.0,
    PI / 6.0,
    PI / 4.0,
    PI / 3.0,
    PI / 2.0,
    PI,
    0.5,
    -0.5,
    0.1,
];

/// Builds the ordered list of starting points for `n` variables.
///
/// The order is:
///
/// 1. caller guesses with exactly `n` values (others are dropped)
/// 2. the origin
/// 3. `+e_i` then `−e_i` for each variable `i`
/// 4. constant vectors: `1`, `−1`, `π/6`, `π/4`, `π/3`, `π/2`, `π`, `0.5`,
///    `−0.5`, `0.1`
/// 5. [`RANDOM_GUESSES`] vectors drawn uniformly from
///    `[-GUESS_RANGE, GUESS_RANGE]` with a generator seeded by `seed`
///
/// The same `n`, caller guesses, and seed always give the same list.
#[must_use]
pub fn generate_initial_guesses(n: usize, user_guesses: &[Vec<f64>], seed: u64) -> Vec<Vec<f64>> {
    let mut guesses: Vec<Vec<f64>> = user_guesses
        .iter()
        .filter(|guess| guess.len() == n)
        .cloned()
        .collect();

    guesses.push(vec![0.0; n]);

    for i in 0..n {
        for sign in [1.0, -1.0] {
            let mut unit = vec![0.0; n];
            unit[i] = sign;
            guesses.push(unit);
        }
    }

    guesses.extend(CONSTANT_GUESSES.iter().map(|&value| vec![value; n]));

    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..RANDOM_GUESSES {
        let guess = (0..n)
            .map(|_| rng.random_range(-GUESS_RANGE..=GUESS_RANGE))
            .collect();
        guesses.push(guess);
    }

    guesses
}
