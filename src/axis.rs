//! Locating a query on a strictly monotonic table axis.

use crate::diagnostics::{AxisKind, Diagnostics, Event};
use crate::Fixed;

/// Direction a table axis runs in, from its first entry to its last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// Where a query landed on an axis.
///
/// `upper` and `lower` name knots by axis value, not by index, so that
/// callers can keep the knot order of their blends independent of the
/// direction the axis is stored in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bracket {
    /// Below the smallest knot, which is at this index
    Low(usize),
    /// Above the largest knot, which is at this index
    High(usize),
    /// On a knot
    Exact(usize),
    /// Strictly between two neighbouring knots
    Between { upper: usize, lower: usize },
}

/// Check that an axis has at least two entries and runs strictly in `order`.
pub fn check_axis<T: Fixed>(knots: &[T], order: Order) -> Result<(), &'static str> {
    if knots.len() < 2 {
        return Err("All axes must have at least 2 entries");
    }
    let monotonic = knots.windows(2).all(|w| match order {
        Order::Ascending => w[1] > w[0],
        Order::Descending => w[1] < w[0],
    });
    if !monotonic {
        return match order {
            Order::Ascending => Err("Axis must be strictly increasing"),
            Order::Descending => Err("Axis must be strictly decreasing"),
        };
    }

    Ok(())
}

/// Locate `q` on `knots`, comparing against each knot multiplied by `scale`.
///
/// Scans from the first entry for the first knot at or past `q` in the
/// direction of the axis; queries outside the axis report
/// [`Event::OutOfRange`] against `kind` and come back as
/// [`Bracket::Low`] / [`Bracket::High`].
///
/// Assumes `knots` passed [`check_axis`].
#[inline]
pub fn locate<T, D>(knots: &[T], scale: T, order: Order, q: T, kind: AxisKind, diag: &D) -> Bracket
where
    T: Fixed,
    D: Diagnostics<T> + ?Sized,
{
    let n = knots.len();
    let knot = |i: usize| knots[i] * scale;
    let (lo, hi) = match order {
        Order::Ascending => (0, n - 1),
        Order::Descending => (n - 1, 0),
    };

    if q < knot(lo) {
        diag.record(Event::OutOfRange { axis: kind, value: q, bound: knot(lo) });
        return Bracket::Low(lo);
    }
    if q > knot(hi) {
        diag.record(Event::OutOfRange { axis: kind, value: q, bound: knot(hi) });
        return Bracket::High(hi);
    }

    let reached = |k: T| match order {
        Order::Ascending => q <= k,
        Order::Descending => q >= k,
    };
    // In range, so the last knot is always reached
    let i = (0..n).find(|&i| reached(knot(i))).unwrap_or(n - 1);

    if q == knot(i) {
        Bracket::Exact(i)
    } else {
        match order {
            Order::Ascending => Bracket::Between { upper: i, lower: i - 1 },
            Order::Descending => Bracket::Between { upper: i - 1, lower: i },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::diagnostics::Quiet;
    use core::cell::RefCell;

    #[test]
    fn test_locate_ascending() {
        let x = [-20, 0, 25, 40];
        let at = |q| locate(&x, 10, Order::Ascending, q, AxisKind::Temperature, &Quiet);

        assert_eq!(at(-201), Bracket::Low(0));
        assert_eq!(at(-200), Bracket::Exact(0));
        assert_eq!(at(-199), Bracket::Between { upper: 1, lower: 0 });
        assert_eq!(at(0), Bracket::Exact(1));
        assert_eq!(at(100), Bracket::Between { upper: 2, lower: 1 });
        assert_eq!(at(400), Bracket::Exact(3));
        assert_eq!(at(401), Bracket::High(3));
    }

    #[test]
    fn test_locate_descending() {
        let pc = [100, 75, 50, 25, 0];
        let at = |q| locate(&pc, 1, Order::Descending, q, AxisKind::Percent, &Quiet);

        assert_eq!(at(101), Bracket::High(0));
        assert_eq!(at(100), Bracket::Exact(0));
        assert_eq!(at(60), Bracket::Between { upper: 1, lower: 2 });
        assert_eq!(at(50), Bracket::Exact(2));
        assert_eq!(at(1), Bracket::Between { upper: 3, lower: 4 });
        assert_eq!(at(0), Bracket::Exact(4));
        assert_eq!(at(-1), Bracket::Low(4));
    }

    #[test]
    fn test_locate_reports_clamping() {
        let pc = [100, 50, 0];
        let seen = RefCell::new(Vec::new());
        let sink = |e: Event<i32>| seen.borrow_mut().push(e);

        locate(&pc, 1, Order::Descending, 120, AxisKind::Percent, &sink);
        locate(&pc, 1, Order::Descending, 50, AxisKind::Percent, &sink);
        locate(&pc, 1, Order::Descending, -3, AxisKind::Percent, &sink);

        assert_eq!(
            *seen.borrow(),
            vec![
                Event::OutOfRange { axis: AxisKind::Percent, value: 120, bound: 100 },
                Event::OutOfRange { axis: AxisKind::Percent, value: -3, bound: 0 },
            ]
        );
    }

    #[test]
    fn test_check_axis() {
        assert!(check_axis(&[1, 2, 3], Order::Ascending).is_ok());
        assert!(check_axis(&[3, 2, 1], Order::Descending).is_ok());
        assert!(check_axis(&[1, 2, 2], Order::Ascending).is_err());
        assert!(check_axis(&[1, 2, 3], Order::Descending).is_err());
        assert!(check_axis(&[1], Order::Ascending).is_err());
        assert!(check_axis::<i32>(&[], Order::Descending).is_err());
    }
}
