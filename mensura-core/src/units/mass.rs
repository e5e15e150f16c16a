//! Mass units. The base unit is the kilogram.

use crate::{Dimension, Quantity};
use mensura_derive::Unit;

/// Units of mass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::Mass)]
pub enum MassUnit {
    /// Kilogram (base unit).
    #[unit(symbol = "kg", name = "Kilogram", base, aliases = ["kilograms"])]
    Kilogram,
    /// Gram.
    #[unit(symbol = "g", name = "Gram", coefficient = 0.001, aliases = ["grams"])]
    Gram,
    /// Milligram.
    #[unit(symbol = "mg", name = "Milligram", coefficient = 1e-6, aliases = ["milligrams"])]
    Milligram,
    /// Microgram.
    #[unit(symbol = "µg", name = "Microgram", coefficient = 1e-9, aliases = ["ug", "micrograms"])]
    Microgram,
    /// Avoirdupois pound.
    #[unit(symbol = "lb", name = "Pound", coefficient = 0.45359237, aliases = ["pounds", "lbs"])]
    Pound,
    /// Avoirdupois ounce.
    #[unit(symbol = "oz", name = "Ounce", coefficient = 0.028349523125, aliases = ["ounces"])]
    Ounce,
    /// Stone (`14 lb`).
    #[unit(symbol = "st", name = "Stone", coefficient = 6.35029318, aliases = ["stones"])]
    Stone,
    /// Metric ton (`1000 kg`).
    #[unit(symbol = "t", name = "Metric Ton", coefficient = 1000.0, aliases = ["metric tons", "tonne", "tonnes"])]
    MetricTon,
    /// US short ton (`2000 lb`).
    #[unit(symbol = "ton", name = "Ton", coefficient = 907.18474, aliases = ["tons", "short ton", "short tons"])]
    Ton,
}

/// A mass.
pub type Mass = Quantity<MassUnit>;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pounds_and_ounces() {
        let lb = Mass::new(1.0, MassUnit::Pound);
        assert_relative_eq!(lb.convert_to(&MassUnit::Ounce).value(), 16.0, epsilon = 1e-9);
        let st = Mass::new(1.0, MassUnit::Stone);
        assert_relative_eq!(st.convert_to(&MassUnit::Pound).value(), 14.0, epsilon = 1e-9);
        let ton = Mass::new(1.0, MassUnit::Ton);
        assert_relative_eq!(ton.convert_to(&MassUnit::Pound).value(), 2000.0, epsilon = 1e-9);
    }
}
