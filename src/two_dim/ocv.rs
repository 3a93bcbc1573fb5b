//! Open-circuit-voltage tables, indexed by charge percent (descending rows)
//! and temperature (ascending columns).
//!
//! One table answers three questions:
//! * forward: what OCV does a cell at this percent and temperature rest at,
//! * reverse: what percent does a measured OCV correspond to,
//! * slope: how fast OCV moves per percent around a point, used to weigh
//!   voltage-based corrections.
//!
//! The reverse lookup assumes OCV falls monotonically with percent in every
//! column, and takes the first row interval holding the voltage without
//! checking that no later interval also does.

use super::{Grid2D, Layout};
use crate::axis::{Bracket, Order};
use crate::blend::{is_between, linear_interpolate};
use crate::diagnostics::{AxisKind, Diagnostics, Event, Quiet};
use crate::{fixed, Fixed, DEFAULT_PERCENT, SLOPE_SCALE};

const LAYOUT: Layout = Layout {
    order: Order::Descending,
    row_axis: AxisKind::Percent,
};

/// OCV against (percent, temperature).
#[derive(Clone, Copy, Debug)]
pub struct PcTempOcvLut<'a, T> {
    grid: Grid2D<'a, T>,
}

impl<'a, T: Fixed> PcTempOcvLut<'a, T> {
    /// Wrap a table with `percent` strictly descending, `temp` strictly
    /// ascending in whole degrees, and one row of `ocv` per percent.
    ///
    /// # Errors
    /// * See [`Grid2D::new`]
    pub fn new(percent: &'a [T], temp: &'a [T], ocv: &'a [T]) -> Result<Self, &'static str> {
        Ok(Self {
            grid: Grid2D::new(percent, temp, ocv, LAYOUT)?,
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

    /// OCV at `batt_temp` (tenths of a degree) and `pc`.
    #[inline]
    pub fn ocv<D>(&self, batt_temp: T, pc: T, diag: &D) -> T
    where
        D: Diagnostics<T> + ?Sized,
    {
        self.grid.bilinear(batt_temp, pc, diag)
    }

    /// Percent at `batt_temp` (tenths of a degree) for a measured `ocv`.
    ///
    /// On a temperature column, the percent is read off that column, held at
    /// the top and bottom rows. Between two columns, each column is searched
    /// for the first row interval holding `ocv` and the two estimates are
    /// blended along temperature; a single estimate is returned as-is, and
    /// with none at all the result is [`DEFAULT_PERCENT`].
    pub fn percent<D>(&self, batt_temp: T, ocv: T, diag: &D) -> T
    where
        D: Diagnostics<T> + ?Sized,
    {
        let g = &self.grid;
        let percent = g.rows();
        let last = g.nrows() - 1;

        let (lower, upper) = match g.locate_temp(batt_temp, diag) {
            Bracket::Low(j) | Bracket::High(j) | Bracket::Exact(j) => {
                if ocv >= g.cell(0, j) {
                    return percent[0];
                }
                if ocv <= g.cell(last, j) {
                    return percent[last];
                }
                // Below the top row and above the bottom one, so the scan
                // stops on some row i >= 1
                for i in 1..=last {
                    let v = g.cell(i, j);
                    if ocv >= v {
                        if ocv == v {
                            return percent[i];
                        }
                        return linear_interpolate(percent[i], v, percent[i - 1], g.cell(i - 1, j), ocv);
                    }
                }
                return percent[last];
            }
            Bracket::Between { upper, lower } => (lower, upper),
        };

        let within = |col: usize, i: usize| -> Option<T> {
            let (v0, v1) = (g.cell(i, col), g.cell(i + 1, col));
            is_between(v0, v1, ocv).then(|| linear_interpolate(percent[i], v0, percent[i + 1], v1, ocv))
        };

        let mut pc_lower: Option<T> = None;
        let mut pc_upper: Option<T> = None;
        for i in 0..last {
            if pc_upper.is_none() {
                pc_upper = within(upper, i);
            }
            if pc_lower.is_none() {
                pc_lower = within(lower, i);
            }
            if let (Some(lo), Some(hi)) = (pc_lower, pc_upper) {
                return linear_interpolate(lo, g.temp_knot(lower), hi, g.temp_knot(upper), batt_temp);
            }
        }

        match (pc_upper, pc_lower) {
            (Some(pc), _) | (None, Some(pc)) => pc,
            (None, None) => {
                diag.record(Event::PercentNotFound { temp: batt_temp, ocv });
                fixed(DEFAULT_PERCENT)
            }
        }
    }

    /// OCV change per percent around (`batt_temp`, `pc`), times [`SLOPE_SCALE`].
    ///
    /// Taken across the two percent rows bracketing `pc`, or the two outermost
    /// rows at or past either end of the table. Never less than 1: a flat or
    /// inverted table reports [`Event::SlopeFloored`] and gives 1.
    ///
    /// The floor applies to the scaled slope, so the floored value is exactly
    /// 1 rather than [`SLOPE_SCALE`] over the percent step.
    pub fn slope<D>(&self, batt_temp: T, pc: T, diag: &D) -> T
    where
        D: Diagnostics<T> + ?Sized,
    {
        let g = &self.grid;
        let percent = g.rows();
        let last = g.nrows() - 1;

        let (upper, lower) = match g.locate_row(pc, diag) {
            Bracket::High(_) | Bracket::Exact(0) => (0, 1),
            Bracket::Low(_) => (last - 1, last),
            Bracket::Exact(i) => (i - 1, i),
            Bracket::Between { upper, lower } => (upper, lower),
        };
        let col = g.locate_temp(batt_temp, diag);

        let rise = g.along_temp(upper, col, batt_temp) - g.along_temp(lower, col, batt_temp);
        let slope = rise * fixed(SLOPE_SCALE) / (percent[upper] - percent[lower]);
        if slope <= T::zero() {
            diag.record(Event::SlopeFloored { percent: pc, slope });
            return T::one();
        }

        slope
    }
}

/// OCV at (`batt_temp`, `pc`).
pub fn interpolate_open_circuit_voltage<T: Fixed>(lut: &PcTempOcvLut<'_, T>, batt_temp: T, pc: T) -> T {
    lut.ocv(batt_temp, pc, &Quiet)
}

/// Percent for a measured `ocv` at `batt_temp`. See [`PcTempOcvLut::percent`].
pub fn interpolate_percent<T: Fixed>(lut: &PcTempOcvLut<'_, T>, batt_temp: T, ocv: T) -> T {
    lut.percent(batt_temp, ocv, &Quiet)
}

/// OCV/percent slope at (`batt_temp`, `pc`). See [`PcTempOcvLut::slope`].
///
/// ```rust
/// use battery_lut::{interpolate_slope, PcTempOcvLut};
///
/// let percent = [100, 50, 0];
/// let temp = [0, 25];
/// let ocv = [
///     4180, 4200,
///     3780, 3800,
///     3380, 3400,
/// ];
/// let lut = PcTempOcvLut::new(&percent, &temp, &ocv).unwrap();
///
/// // 400 mV over 50 percent, scaled by 1000
/// assert_eq!(interpolate_slope(&lut, 250, 70), 8000);
/// ```
pub fn interpolate_slope<T: Fixed>(lut: &PcTempOcvLut<'_, T>, batt_temp: T, pc: T) -> T {
    lut.slope(batt_temp, pc, &Quiet)
}
