//! Side channel for out-of-range and suspect-data conditions.
//!
//! Lookups never fail. When a query has to be held at a table edge, when the
//! reverse lookup falls back to its default, or when a slope is floored, the
//! lookup reports an [`Event`] to a caller-chosen [`Diagnostics`] sink and
//! carries on. The free `interpolate_*` functions use [`Quiet`].
//!
//! ```rust
//! use core::cell::RefCell;
//! use battery_lut::{AxisKind, Event, SingleRowLut};
//!
//! let temp = [-20, 0, 25, 40];
//! let fcc = [800, 950, 1000, 990];
//! let lut = SingleRowLut::new(&temp, &fcc).unwrap();
//!
//! let seen = RefCell::new(Vec::new());
//! let sink = |e: Event<i32>| seen.borrow_mut().push(e);
//!
//! assert_eq!(lut.full_charge_capacity(600, &sink), 990);
//! assert_eq!(
//!     seen.borrow()[0],
//!     Event::OutOfRange { axis: AxisKind::Curve, value: 600, bound: 400 }
//! );
//! ```

/// Which axis of a table a query fell off of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    /// The x axis of a single-row curve
    Curve,
    Temperature,
    Percent,
    Current,
}

/// A condition noticed while evaluating a lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event<T> {
    /// The query was beyond the table along `axis` and was held at `bound`,
    /// given in the same (scaled) units as `value`.
    OutOfRange { axis: AxisKind, value: T, bound: T },
    /// No row interval at either neighbouring temperature column holds `ocv`;
    /// the reverse lookup answered with [`DEFAULT_PERCENT`](crate::DEFAULT_PERCENT).
    PercentNotFound { temp: T, ocv: T },
    /// The OCV/percent slope at `percent` came out as `slope <= 0` and was replaced by 1.
    SlopeFloored { percent: T, slope: T },
}

/// Receiver for lookup [`Event`]s.
///
/// Implemented for [`Quiet`], for any `Fn(Event<T>)` closure, and, with the
/// `log` feature, for [`LogSink`].
pub trait Diagnostics<T> {
    fn record(&self, event: Event<T>);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct Quiet;

impl<T> Diagnostics<T> for Quiet {
    #[inline]
    fn record(&self, _event: Event<T>) {}
}

impl<T, F> Diagnostics<T> for F
where
    F: Fn(Event<T>),
{
    #[inline]
    fn record(&self, event: Event<T>) {
        self(event)
    }
}

/// Forwards events to the `log` facade: clamping and the reverse-lookup
/// fallback at debug level, slope flooring at warn level.
#[cfg(feature = "log")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

#[cfg(feature = "log")]
impl<T: core::fmt::Debug> Diagnostics<T> for LogSink {
    fn record(&self, event: Event<T>) {
        match event {
            Event::OutOfRange { axis, value, bound } => {
                log::debug!("{axis:?} {value:?} outside table, held at {bound:?}")
            }
            Event::PercentNotFound { temp, ocv } => {
                log::debug!("ocv {ocv:?} not found for temp {temp:?}, returning 100%")
            }
            Event::SlopeFloored { percent, slope } => {
                log::warn!("slope={slope:?} for pc={percent:?}, using 1")
            }
        }
    }
}
