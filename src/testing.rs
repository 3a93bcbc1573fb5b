use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::axis::Order;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// A strictly monotonic axis of `n` unevenly spaced values,
/// small enough to survive scaling to tenths of a degree.
pub fn random_axis(rng: &mut StdRng, n: usize, order: Order) -> Vec<i32> {
    let mut x: i32 = rng.random_range(-500..500);
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        out.push(x);
        x += rng.random_range(1..100);
    }
    if order == Order::Descending {
        out.reverse();
    }
    out
}

/// Generate `n` random values in `lo..hi`
pub fn random_values(rng: &mut StdRng, n: usize, lo: i32, hi: i32) -> Vec<i32> {
    std::iter::repeat_with(|| rng.random_range(lo..hi))
        .take(n)
        .collect()
}
