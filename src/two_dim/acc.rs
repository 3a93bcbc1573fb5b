//! Accumulation-correction tables, indexed by battery current (ascending
//! rows) and temperature (ascending columns).

use super::{Grid2D, Layout};
use crate::axis::Order;
use crate::diagnostics::{AxisKind, Diagnostics, Quiet};
use crate::Fixed;

const LAYOUT: Layout = Layout {
    order: Order::Ascending,
    row_axis: AxisKind::Current,
};

/// Accumulated-capacity correction against (current, temperature).
#[derive(Clone, Copy, Debug)]
pub struct IbatTempAccLut<'a, T> {
    grid: Grid2D<'a, T>,
}

impl<'a, T: Fixed> IbatTempAccLut<'a, T> {
    /// Wrap a table with `ibat` strictly ascending, `temp` strictly ascending
    /// in whole degrees, and one row of `acc` per current.
    ///
    /// # Errors
    /// * See [`Grid2D::new`]
    pub fn new(ibat: &'a [T], temp: &'a [T], acc: &'a [T]) -> Result<Self, &'static str> {
        Ok(Self {
            grid: Grid2D::new(ibat, temp, acc, LAYOUT)?,
        })
    }

    /// See [`Grid2D::with_temp_scale`]
    pub fn with_temp_scale(self, scale: T) -> Self {
        Self {
            grid: self.grid.with_temp_scale(scale),
        }
    }

    pub fn grid(&self) -> &Grid2D<'a, T> {
        &self.grid
    }

    /// Correction at `batt_temp` (tenths of a degree) and `ibat`, never negative.
    #[inline]
    pub fn accumulation_correction<D>(&self, batt_temp: T, ibat: T, diag: &D) -> T
    where
        D: Diagnostics<T> + ?Sized,
    {
        self.grid.bilinear(batt_temp, ibat, diag).max(T::zero())
    }
}

/// Accumulated-capacity correction at (`batt_temp`, `ibat`), floored at 0.
///
/// ```rust
/// use battery_lut::{interpolate_accumulation_correction, IbatTempAccLut};
///
/// let ibat = [0, 500, 1000, 2000];
/// let temp = [-20, 0, 25];
/// let acc = [
///     1500, 1550, 1600,
///     1400, 1500, 1580,
///     1200, 1400, 1550,
///      900, 1200, 1500,
/// ];
/// let lut = IbatTempAccLut::new(&ibat, &temp, &acc).unwrap();
///
/// assert_eq!(interpolate_accumulation_correction(&lut, 0, 500), 1500);
/// assert_eq!(interpolate_accumulation_correction(&lut, 0, 750), 1450);
/// assert_eq!(interpolate_accumulation_correction(&lut, 0, 9000), 1200);
/// ```
pub fn interpolate_accumulation_correction<T: Fixed>(lut: &IbatTempAccLut<'_, T>, batt_temp: T, ibat: T) -> T {
    lut.accumulation_correction(batt_temp, ibat, &Quiet)
}
