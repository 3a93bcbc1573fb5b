//! Scale-factor tables: derating in percent (100 = none), indexed by charge
//! percent (descending rows) and temperature (ascending columns).

use super::{Grid2D, Layout};
use crate::axis::Order;
use crate::diagnostics::{AxisKind, Diagnostics, Quiet};
use crate::{fixed, Fixed, NEUTRAL_SCALE_FACTOR};

const LAYOUT: Layout = Layout {
    order: Order::Descending,
    row_axis: AxisKind::Percent,
};

/// Scale factor against (percent, temperature).
#[derive(Clone, Copy, Debug)]
pub struct ScaleFactorLut<'a, T> {
    grid: Grid2D<'a, T>,
}

impl<'a, T: Fixed> ScaleFactorLut<'a, T> {
    /// Wrap a table with `percent` strictly descending, `temp` strictly
    /// ascending in whole degrees, and one row of `sf` per percent.
    ///
    /// # Errors
    /// * See [`Grid2D::new`]
    pub fn new(percent: &'a [T], temp: &'a [T], sf: &'a [T]) -> Result<Self, &'static str> {
        Ok(Self {
            grid: Grid2D::new(percent, temp, sf, LAYOUT)?,
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

    /// Scale factor at `row_entry` (temperature, in query units) and `pc`.
    #[inline]
    pub fn scale_factor<D>(&self, row_entry: T, pc: T, diag: &D) -> T
    where
        D: Diagnostics<T> + ?Sized,
    {
        self.grid.bilinear(row_entry, pc, diag)
    }
}

/// Scale factor at (`row_entry`, `pc`), or [`NEUTRAL_SCALE_FACTOR`] when
/// there is no aging data.
///
/// ```rust
/// use battery_lut::{interpolate_scale_factor, ScaleFactorLut};
///
/// let percent = [100, 50, 0];
/// let temp = [0, 40];
/// let sf = [
///     100, 100,
///      96,  98,
///      90,  94,
/// ];
/// let lut = ScaleFactorLut::new(&percent, &temp, &sf).unwrap();
///
/// assert_eq!(interpolate_scale_factor(Some(&lut), 400, 50), 98);
/// assert_eq!(interpolate_scale_factor(Some(&lut), 200, 25), 95);
/// assert_eq!(interpolate_scale_factor(None, 200, 25), 100);
/// ```
pub fn interpolate_scale_factor<T: Fixed>(lut: Option<&ScaleFactorLut<'_, T>>, row_entry: T, pc: T) -> T {
    match lut {
        Some(lut) => lut.scale_factor(row_entry, pc, &Quiet),
        None => fixed(NEUTRAL_SCALE_FACTOR),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn table() -> ([i32; 4], [i32; 3], [i32; 12]) {
        let percent = [100, 70, 30, 0];
        let temp = [-10, 25, 60];
        let sf = [
            100, 100, 100, //
            95, 98, 99, //
            88, 93, 97, //
            80, 85, 90, //
        ];
        (percent, temp, sf)
    }

    #[test]
    fn test_exact_knots() {
        let (percent, temp, sf) = table();
        let lut = ScaleFactorLut::new(&percent, &temp, &sf).unwrap();
        assert_eq!(lut.grid().rows(), &percent[..]);
        assert_eq!(lut.grid().layout().row_axis, AxisKind::Percent);

        for r in 0..percent.len() {
            for c in 0..temp.len() {
                let v = interpolate_scale_factor(Some(&lut), temp[c] * 10, percent[r]);
                assert_eq!(v, sf[r * temp.len() + c]);
            }
        }
    }

    #[test]
    fn test_blends_percent_then_temperature() {
        let (percent, temp, sf) = table();
        let lut = ScaleFactorLut::new(&percent, &temp, &sf).unwrap();

        // Exact column, between rows 70 and 30: 98 + (93 - 98) * (50 - 70) / (30 - 70)
        assert_eq!(interpolate_scale_factor(Some(&lut), 250, 50), 96);
        // Exact row, between columns: 93 + (97 - 93) * 175 / 350
        assert_eq!(interpolate_scale_factor(Some(&lut), 425, 30), 95);
        // Between both: rows at 42.5 degC truncate to 98 and 95, then 98 - 3 * 20 / 40
        assert_eq!(interpolate_scale_factor(Some(&lut), 425, 50), 97);
    }

    #[test]
    fn test_out_of_range_is_held() {
        let (percent, temp, sf) = table();
        let lut = ScaleFactorLut::new(&percent, &temp, &sf).unwrap();

        assert_eq!(interpolate_scale_factor(Some(&lut), -500, -10), 80);
        assert_eq!(interpolate_scale_factor(Some(&lut), 900, -10), 90);
        assert_eq!(interpolate_scale_factor(Some(&lut), 900, 150), 100);
        assert_eq!(interpolate_scale_factor(Some(&lut), 250, 101), 100);
        assert_eq!(interpolate_scale_factor(Some(&lut), 250, -1), 85);
    }

    #[test]
    fn test_absent_table_is_neutral() {
        for (t, pc) in [(0, 0), (-400, 50), (700, 100), (250, 150)] {
            assert_eq!(interpolate_scale_factor::<i32>(None, t, pc), 100);
        }
    }
}
