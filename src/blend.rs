//! Two-knot linear blend, the primitive every lookup reduces to.

use crate::Fixed;

/// Linearly interpolate `y` at `x` between the knots `(x0, y0)` and `(x1, y1)`.
///
/// Returns `y0` when the knots share a value or `x` sits on the first knot,
/// and `y1` when the knots share a location or `x` sits on the second knot;
/// neither case divides. Otherwise evaluates
/// `y0 + (y1 - y0) * (x - x0) / (x1 - x0)` with the division truncating
/// toward zero. `x` outside `[x0, x1]` extrapolates along the same line.
///
/// ```rust
/// use battery_lut::linear_interpolate;
///
/// assert_eq!(linear_interpolate(4000, 50, 4100, 75, 60), 4040);
/// // Truncation, not rounding: 10 * 1 / 3 = 3
/// assert_eq!(linear_interpolate(0, 0, 10, 3, 1), 3);
/// // ...and toward zero for negative numerators: -10 * 1 / 3 = -3
/// assert_eq!(linear_interpolate(0, 0, -10, 3, 1), -3);
/// ```
#[inline]
pub fn linear_interpolate<T: Fixed>(y0: T, x0: T, y1: T, x1: T, x: T) -> T {
    if y0 == y1 || x == x0 {
        return y0;
    }
    if x1 == x0 || x == x1 {
        return y1;
    }

    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// Whether `value` lies between `left` and `right`, inclusive, in either order.
#[inline]
pub fn is_between<T: Fixed>(left: T, right: T, value: T) -> bool {
    if left >= right && left >= value && value >= right {
        return true;
    }
    left <= right && left <= value && value <= right
}
