//! Single-row calibration curves: one `y` per strictly ascending `x`.
//!
//! Lookups hold the first/last `y` outside the curve and blend linearly
//! between knots inside it. The query is compared against each `x` after
//! multiplying by a caller-given scale, so a curve stored in whole degrees can
//! be queried in tenths of a degree without rewriting the table.

pub mod curves;
pub use curves::{interpolate_aging_scale_factor, interpolate_full_charge_capacity};

use crate::axis::{check_axis, locate, Bracket, Order};
use crate::blend::linear_interpolate;
use crate::diagnostics::{AxisKind, Diagnostics};
use crate::Fixed;

/// A 1D calibration curve borrowed from caller memory.
#[derive(Clone, Copy, Debug)]
pub struct SingleRowLut<'a, T> {
    x: &'a [T],
    y: &'a [T],
}

impl<'a, T: Fixed> SingleRowLut<'a, T> {
    /// Wrap a curve.
    ///
    /// # Errors
    /// * If `x` and `y` differ in length
    /// * If there are fewer than 2 knots
    /// * If `x` is not strictly increasing
    pub fn new(x: &'a [T], y: &'a [T]) -> Result<Self, &'static str> {
        if x.len() != y.len() {
            return Err("Length mismatch");
        }
        check_axis(x, Order::Ascending)?;

        Ok(Self { x, y })
    }

    /// Knot locations, unscaled
    pub fn x(&self) -> &'a [T] {
        self.x
    }

    /// Knot values
    pub fn y(&self) -> &'a [T] {
        self.y
    }

    /// Evaluate the curve at `q`, which is in the units of `x * scale`.
    ///
    /// Holds the edge value outside the curve, returns knot values exactly,
    /// and blends between the neighbouring knots otherwise.
    #[inline]
    pub fn interpolate_scaled<D>(&self, q: T, scale: T, diag: &D) -> T
    where
        D: Diagnostics<T> + ?Sized,
    {
        match locate(self.x, scale, Order::Ascending, q, AxisKind::Curve, diag) {
            Bracket::Low(i) | Bracket::High(i) | Bracket::Exact(i) => self.y[i],
            Bracket::Between { upper, lower } => linear_interpolate(
                self.y[lower],
                self.x[lower] * scale,
                self.y[upper],
                self.x[upper] * scale,
                q,
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::diagnostics::{Event, Quiet};
    use crate::testing::*;
    use core::cell::RefCell;

    #[test]
    fn test_new_rejects_bad_curves() {
        assert!(SingleRowLut::new(&[0, 1, 2], &[5, 6]).is_err());
        assert!(SingleRowLut::new(&[0], &[5]).is_err());
        assert!(SingleRowLut::new(&[0, 2, 1], &[5, 6, 7]).is_err());
        assert!(SingleRowLut::new(&[0, 0, 1], &[5, 6, 7]).is_err());
        let lut = SingleRowLut::new(&[-3, 0, 1], &[5, 6, 7]).unwrap();
        assert_eq!(lut.x(), &[-3, 0, 1]);
        assert_eq!(lut.y(), &[5, 6, 7]);
    }

    /// Interpolate on a hat-shaped curve to make sure the bracketing knots are aligned properly
    #[test]
    fn test_interp_hat_curve() {
        let x = [0, 10, 20];
        let y = [0, 100, 0];
        let lut = SingleRowLut::new(&x, &y).unwrap();

        for q in -50..=250 {
            let expected = match q {
                q if q < 0 => 0,
                q if q <= 10 => q * 10,
                q if q <= 20 => 200 - q * 10,
                _ => 0,
            };
            assert_eq!(lut.interpolate_scaled(q, 1, &Quiet), expected);
        }
    }

    #[test]
    fn test_scale_applies_to_knots_only() {
        let x = [0, 10];
        let y = [1000, 2000];
        let lut = SingleRowLut::new(&x, &y).unwrap();

        assert_eq!(lut.interpolate_scaled(5, 1, &Quiet), 1500);
        assert_eq!(lut.interpolate_scaled(5, 10, &Quiet), 1050);
        assert_eq!(lut.interpolate_scaled(100, 10, &Quiet), 2000);
        assert_eq!(lut.interpolate_scaled(101, 10, &Quiet), 2000);
    }

    #[test]
    fn test_out_of_range_is_held_and_reported() {
        let x = [1, 2, 3];
        let y = [10, 20, 30];
        let lut = SingleRowLut::new(&x, &y).unwrap();
        let seen = RefCell::new(Vec::new());
        let sink = |e: Event<i32>| seen.borrow_mut().push(e);

        assert_eq!(lut.interpolate_scaled(-7, 1, &sink), 10);
        assert_eq!(lut.interpolate_scaled(2, 1, &sink), 20);
        assert_eq!(lut.interpolate_scaled(9, 1, &sink), 30);
        assert_eq!(seen.borrow().len(), 2);
    }

    /// Every knot comes back exactly and every out-of-range query holds the edge,
    /// on random curves with uneven spacing.
    #[test]
    fn test_random_curves_exact_knots_and_edges() {
        let mut rng = rng_fixed_seed();
        for n in 2..12 {
            let x = random_axis(&mut rng, n, Order::Ascending);
            let y = random_values(&mut rng, n, -3000, 3000);
            let lut = SingleRowLut::new(&x, &y).unwrap();

            for scale in [1, 10] {
                for i in 0..n {
                    assert_eq!(lut.interpolate_scaled(x[i] * scale, scale, &Quiet), y[i]);
                }
                let (first, last) = (x[0] * scale, x[n - 1] * scale);
                assert_eq!(lut.interpolate_scaled(first - 1, scale, &Quiet), y[0]);
                assert_eq!(lut.interpolate_scaled(last + 1, scale, &Quiet), y[n - 1]);
                assert_eq!(lut.interpolate_scaled(i32::MIN / 2, scale, &Quiet), y[0]);
                assert_eq!(lut.interpolate_scaled(i32::MAX / 2, scale, &Quiet), y[n - 1]);
            }
        }
    }
}
