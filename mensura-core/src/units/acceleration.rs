//! Acceleration units. The base unit is the metre per second squared.

use crate::{Dimension, Quantity};
use mensura_derive::Unit;

/// Units of acceleration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::Acceleration)]
pub enum AccelerationUnit {
    /// Metre per second squared (base unit).
    #[unit(symbol = "m/s²", name = "Meters per Second Squared", base, alt_symbols = ["m/s2"])]
    MetersPerSecondSquared,
    /// Standard gravity (`9.80665 m/s²`).
    #[unit(symbol = "g", name = "G-force", coefficient = 9.80665, aliases = ["gee"], keys = ["acceleration_g"])]
    GForce,
    /// Foot per second squared.
    #[unit(symbol = "ft/s²", name = "Feet per Second Squared", coefficient = 0.3048, alt_symbols = ["ft/s2"])]
    FeetPerSecondSquared,
}

/// An acceleration.
pub type Acceleration = Quantity<AccelerationUnit>;
