//! Two-dimensional calibration tables with a temperature column axis.
//!
//! Every 2D table in a fuel gauge has the same shape: a row axis (percent or
//! current) that runs in a table-specific direction, a strictly ascending
//! temperature column axis stored in whole degrees, and one cell per
//! (row, column) pair. [`Grid2D`] holds that shape once; the table types in
//! the submodules pick a [`Layout`] and add their own lookups.
//!
//! The forward lookups are bilinear in two stages: blend each bracketing row
//! along temperature, then blend the two results along the row axis. Queries
//! beyond either axis are held at the edge row or column, never extrapolated.
//!
//! Cells are stored flat, in C order: `cell(r, c) = vals[r * ncols + c]`.
//!
//! References
//! * https://en.wikipedia.org/wiki/Bilinear_interpolation#Repeated_linear_interpolation
pub mod acc;
pub mod ocv;
pub mod scale_factor;

use crate::axis::{check_axis, locate, Bracket, Order};
use crate::blend::linear_interpolate;
use crate::diagnostics::{AxisKind, Diagnostics};
use crate::{fixed, Fixed, DEGC_SCALE};

/// How a table's row axis is stored and reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub order: Order,
    pub row_axis: AxisKind,
}

/// A rectangular table over a row axis and a temperature column axis,
/// borrowed from caller memory.
///
/// Operation Complexity
/// * O(rows + cols) per lookup; both axes are scanned linearly, matching the
///   small (tens of entries) tables calibration data comes in.
///
/// Memory Complexity
/// * No allocation; a lookup keeps a handful of scalars on the stack.
#[derive(Clone, Copy, Debug)]
pub struct Grid2D<'a, T> {
    /// Row axis, running in `layout.order`
    rows: &'a [T],
    /// Temperature axis in whole degrees, ascending
    temps: &'a [T],
    /// Cell values, size rows * temps
    vals: &'a [T],
    layout: Layout,
    /// Multiplier from `temps` to query units
    temp_scale: T,
}

impl<'a, T: Fixed> Grid2D<'a, T> {
    /// Build a table over borrowed data, comparing temperatures in tenths of a degree.
    ///
    /// Assumes C-style ordering of vals (z(r0, t0), z(r0, t1), ..., z(r0, tn), z(r1, t0), ...).
    ///
    /// # Errors
    /// * If the number of values is not rows * temps
    /// * If either axis has fewer than 2 entries
    /// * If either axis is not strictly monotonic in its direction
    pub fn new(rows: &'a [T], temps: &'a [T], vals: &'a [T], layout: Layout) -> Result<Self, &'static str> {
        if vals.len() != rows.len() * temps.len() {
            return Err("Dimension mismatch");
        }
        check_axis(rows, layout.order)?;
        check_axis(temps, Order::Ascending)?;

        Ok(Self {
            rows,
            temps,
            vals,
            layout,
            temp_scale: fixed(DEGC_SCALE),
        })
    }

    /// Compare temperatures as `temps * scale` instead of the default tenths of a degree.
    /// A scale of 1 treats the stored temperatures as already being in query units.
    pub fn with_temp_scale(mut self, scale: T) -> Self {
        self.temp_scale = scale;
        self
    }

    pub fn rows(&self) -> &'a [T] {
        self.rows
    }

    /// Temperature axis, unscaled
    pub fn temps(&self) -> &'a [T] {
        self.temps
    }

    pub fn vals(&self) -> &'a [T] {
        self.vals
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn temp_scale(&self) -> T {
        self.temp_scale
    }

    #[inline]
    pub(crate) fn nrows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub(crate) fn cell(&self, row: usize, col: usize) -> T {
        self.vals[row * self.temps.len() + col]
    }

    /// Temperature of column `col` in query units
    #[inline]
    pub(crate) fn temp_knot(&self, col: usize) -> T {
        self.temps[col] * self.temp_scale
    }

    #[inline]
    pub(crate) fn locate_row<D>(&self, q: T, diag: &D) -> Bracket
    where
        D: Diagnostics<T> + ?Sized,
    {
        locate(self.rows, T::one(), self.layout.order, q, self.layout.row_axis, diag)
    }

    /// Locate a temperature, already in query units. Out-of-range
    /// temperatures are held at the edge column.
    #[inline]
    pub(crate) fn locate_temp<D>(&self, temp: T, diag: &D) -> Bracket
    where
        D: Diagnostics<T> + ?Sized,
    {
        locate(self.temps, self.temp_scale, Order::Ascending, temp, AxisKind::Temperature, diag)
    }

    /// Value of `row` at `temp`, blended between the bracketing columns.
    #[inline]
    pub(crate) fn along_temp(&self, row: usize, col: Bracket, temp: T) -> T {
        match col {
            Bracket::Low(c) | Bracket::High(c) | Bracket::Exact(c) => self.cell(row, c),
            Bracket::Between { upper, lower } => linear_interpolate(
                self.cell(row, lower),
                self.temp_knot(lower),
                self.cell(row, upper),
                self.temp_knot(upper),
                temp,
            ),
        }
    }

    /// Two-stage bilinear lookup of the cell surface at (`temp`, `q`),
    /// holding both axes at their edges.
    pub fn bilinear<D>(&self, temp: T, q: T, diag: &D) -> T
    where
        D: Diagnostics<T> + ?Sized,
    {
        let (upper, lower) = match self.locate_row(q, diag) {
            Bracket::Low(r) | Bracket::High(r) | Bracket::Exact(r) => (r, r),
            Bracket::Between { upper, lower } => (upper, lower),
        };
        let col = self.locate_temp(temp, diag);

        linear_interpolate(
            self.along_temp(upper, col, temp),
            self.rows[upper],
            self.along_temp(lower, col, temp),
            self.rows[lower],
            q,
        )
    }
}
