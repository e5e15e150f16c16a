//! Duration units. The base unit is the second.

use crate::{Dimension, Quantity};
use mensura_derive::Unit;

/// Units of time span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::Duration)]
pub enum DurationUnit {
    /// Second (base unit).
    #[unit(symbol = "s", name = "Second", base, aliases = ["sec", "seconds"])]
    Second,
    /// Minute.
    #[unit(symbol = "min", name = "Minute", coefficient = 60.0, aliases = ["minutes"])]
    Minute,
    /// Hour.
    #[unit(symbol = "h", name = "Hour", coefficient = 3600.0, aliases = ["hr", "hours"])]
    Hour,
    /// Day of 86 400 s.
    #[unit(symbol = "d", name = "Day", coefficient = 86400.0, aliases = ["days"])]
    Day,
    /// Millisecond.
    #[unit(symbol = "ms", name = "Millisecond", coefficient = 0.001, aliases = ["milliseconds"])]
    Millisecond,
    /// Microsecond.
    #[unit(symbol = "µs", name = "Microsecond", coefficient = 1e-6, aliases = ["us", "microseconds"])]
    Microsecond,
    /// Nanosecond.
    #[unit(symbol = "ns", name = "Nanosecond", coefficient = 1e-9, aliases = ["nanoseconds"])]
    Nanosecond,
}

/// A time span.
pub type Duration = Quantity<DurationUnit>;
