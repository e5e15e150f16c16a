//! Power units. The base unit is the watt.

use crate::{Dimension, Quantity};
use mensura_derive::Unit;

/// Units of power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::Power)]
pub enum PowerUnit {
    /// Watt (base unit).
    #[unit(symbol = "W", name = "Watt", base, aliases = ["watt", "watts"])]
    Watt,
    /// Kilowatt.
    #[unit(symbol = "kW", name = "Kilowatt", coefficient = 1000.0, aliases = ["kilowatts"])]
    Kilowatt,
    /// British thermal unit per hour.
    #[unit(
        symbol = "BTU/h",
        name = "British Thermal Unit per Hour",
        coefficient = 0.29307107,
        aliases = ["btu/hr"],
        keys = ["power_btu_per_hour", "power_b_t_u_per_hour"]
    )]
    BtuPerHour,
}

/// A power.
pub type Power = Quantity<PowerUnit>;
