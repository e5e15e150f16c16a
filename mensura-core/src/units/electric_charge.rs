//! Electric charge units. The base unit is the coulomb.

use crate::{Dimension, Quantity};
use mensura_derive::Unit;

/// Units of electric charge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::ElectricCharge)]
pub enum ElectricChargeUnit {
    /// Coulomb (base unit).
    #[unit(symbol = "C", name = "Coulomb", base, aliases = ["coulombs"])]
    Coulomb,
    /// Millicoulomb.
    #[unit(symbol = "mC", name = "Millicoulomb", coefficient = 0.001, aliases = ["millicoulombs"])]
    Millicoulomb,
    /// Microcoulomb.
    #[unit(symbol = "µC", name = "Microcoulomb", coefficient = 1e-6, aliases = ["uc", "microcoulombs"])]
    Microcoulomb,
    /// Ampere-hour (`3600 C`).
    #[unit(
        symbol = "Ah",
        name = "Ampere-hour",
        coefficient = 3600.0,
        aliases = ["ampere-hours"],
        keys = ["electric_charge_ampere_hour", "electric_charge_ampere__hour"]
    )]
    AmpereHour,
    /// Milliampere-hour (`3.6 C`).
    #[unit(
        symbol = "mAh",
        name = "Milliampere-hour",
        coefficient = 3.6,
        aliases = ["milliampere-hours"],
        keys = ["electric_charge_milliampere_hour", "electric_charge_milliampere__hour"]
    )]
    MilliampereHour,
}

/// An electric charge.
pub type ElectricCharge = Quantity<ElectricChargeUnit>;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn battery_capacity() {
        let c = ElectricCharge::new(3000.0, ElectricChargeUnit::MilliampereHour);
        assert_relative_eq!(
            c.convert_to(&ElectricChargeUnit::AmpereHour).value(),
            3.0,
            epsilon = 1e-12
        );
    }
}
