//! Volumetric flow rate units. The base unit is the cubic metre per hour.

use crate::{Dimension, Quantity};
use mensura_derive::Unit;

/// Units of volumetric flow rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::FlowRate)]
pub enum FlowRateUnit {
    /// Cubic metre per hour (base unit).
    #[unit(symbol = "m³/h", name = "Cubic Meters per Hour", base, aliases = ["m3/h", "cubic meters per hour"])]
    CubicMetersPerHour,
    /// Litre per second (`3.6 m³/h`).
    #[unit(symbol = "L/s", name = "Liters per Second", coefficient = 3.6, aliases = ["liters per second", "litres per second"])]
    LitersPerSecond,
    /// Cubic foot per minute.
    #[unit(
        symbol = "CFM",
        name = "Cubic Feet per Minute",
        coefficient = 1.699,
        aliases = ["cubic feet per minute"],
        keys = ["flowrate_cfm", "flowrate_c_f_m"]
    )]
    CubicFeetPerMinute,
}

/// A volumetric flow rate.
pub type FlowRate = Quantity<FlowRateUnit>;
