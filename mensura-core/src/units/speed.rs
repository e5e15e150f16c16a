//! Speed units. The base unit is the metre per second.

use crate::{Dimension, Quantity};
use mensura_derive::Unit;

/// Units of speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::Speed)]
pub enum SpeedUnit {
    /// Metre per second (base unit).
    #[unit(symbol = "m/s", name = "Meters per Second", base, aliases = ["metres per second"])]
    MetersPerSecond,
    /// Kilometre per hour.
    #[unit(symbol = "km/h", name = "Kilometers per Hour", coefficient = 1.0 / 3.6, aliases = ["kph", "kmh", "kilometres per hour"])]
    KilometersPerHour,
    /// Mile per hour.
    #[unit(symbol = "mph", name = "Miles per Hour", coefficient = 0.44704)]
    MilesPerHour,
    /// Foot per second.
    #[unit(symbol = "ft/s", name = "Feet per Second", coefficient = 0.3048, aliases = ["foot per second"])]
    FeetPerSecond,
    /// Knot.
    #[unit(symbol = "kn", name = "Knot", coefficient = 0.51444, aliases = ["knots", "kt"])]
    Knot,
}

/// A speed.
pub type Speed = Quantity<SpeedUnit>;
