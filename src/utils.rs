//! Convenience methods for building calibration tables in tests, benchmarks
//! and host-side tooling.
use itertools::iproduct;
use num_traits::NumCast;

use crate::{linear_interpolate, Fixed};

/// Generates `n` evenly spaced values from start to stop, including the
/// endpoint. Interior values are truncated toward zero.
pub fn linspace<T: Fixed>(start: T, stop: T, n: usize) -> Vec<T> {
    let last: T = NumCast::from(n - 1).unwrap();
    (0..n)
        .map(|i| linear_interpolate(start, T::zero(), stop, last, NumCast::from(i).unwrap()))
        .collect()
}

/// Evaluates `f` at every (row, col) pair, in the C order 2D tables store
/// their cells in: (r0, c0), (r0, c1), ..., (r0, cn), (r1, c0), ...
pub fn tabulate<T: Copy>(rows: &[T], cols: &[T], f: impl Fn(T, T) -> T) -> Vec<T> {
    iproduct!(rows, cols).map(|(&r, &c)| f(r, c)).collect()
}
