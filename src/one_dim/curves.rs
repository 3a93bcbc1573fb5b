//! The two single-row curves a fuel gauge carries: full-charge capacity
//! against temperature, and the aging scale factor against cycle count.

use super::SingleRowLut;
use crate::diagnostics::{Diagnostics, Quiet};
use crate::{fixed, Fixed, DEGC_SCALE, NEUTRAL_SCALE_FACTOR};

impl<'a, T: Fixed> SingleRowLut<'a, T> {
    /// Full-charge capacity at `batt_temp`, given in tenths of a degree,
    /// for a curve stored against whole degrees.
    #[inline]
    pub fn full_charge_capacity<D>(&self, batt_temp: T, diag: &D) -> T
    where
        D: Diagnostics<T> + ?Sized,
    {
        self.interpolate_scaled(batt_temp, fixed(DEGC_SCALE), diag)
    }

    /// Aging scale factor, in percent, after `cycles` charge cycles.
    #[inline]
    pub fn aging_scale_factor<D>(&self, cycles: T, diag: &D) -> T
    where
        D: Diagnostics<T> + ?Sized,
    {
        self.interpolate_scaled(cycles, T::one(), diag)
    }
}

/// Full-charge capacity at `batt_temp` (tenths of a degree).
///
/// ```rust
/// use battery_lut::{interpolate_full_charge_capacity, SingleRowLut};
///
/// let temp = [-20, 0, 25, 40, 60];
/// let fcc = [1200, 1500, 1600, 1610, 1590];
/// let lut = SingleRowLut::new(&temp, &fcc).unwrap();
///
/// assert_eq!(interpolate_full_charge_capacity(&lut, 250), 1600);
/// assert_eq!(interpolate_full_charge_capacity(&lut, 100), 1540);
/// assert_eq!(interpolate_full_charge_capacity(&lut, -400), 1200);
/// ```
pub fn interpolate_full_charge_capacity<T: Fixed>(lut: &SingleRowLut<'_, T>, batt_temp: T) -> T {
    lut.full_charge_capacity(batt_temp, &Quiet)
}

/// Aging scale factor after `cycles` charge cycles, or
/// [`NEUTRAL_SCALE_FACTOR`] when there is no aging data.
pub fn interpolate_aging_scale_factor<T: Fixed>(lut: Option<&SingleRowLut<'_, T>>, cycles: T) -> T {
    match lut {
        Some(lut) => lut.aging_scale_factor(cycles, &Quiet),
        None => fixed(NEUTRAL_SCALE_FACTOR),
    }
}
