//! Energy units. The base unit is the joule.

use crate::{Dimension, Quantity};
use mensura_derive::Unit;

/// Units of energy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::Energy)]
pub enum EnergyUnit {
    /// Joule (base unit).
    #[unit(symbol = "J", name = "Joule", base, aliases = ["joules"])]
    Joule,
    /// Kilowatt-hour (`3.6 MJ`).
    #[unit(
        symbol = "kWh",
        name = "Kilowatt-hour",
        coefficient = 3600000.0,
        aliases = ["kilowatt-hours", "kilowatt hour"],
        keys = ["energy_kilowatt_hour"]
    )]
    KilowattHour,
    /// British thermal unit.
    #[unit(
        symbol = "BTU",
        name = "British Thermal Unit",
        coefficient = 1055.06,
        aliases = ["british thermal units"],
        keys = ["energy_btu", "energy_b_t_u"]
    )]
    Btu,
}

/// An amount of energy.
pub type Energy = Quantity<EnergyUnit>;
