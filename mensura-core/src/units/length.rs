//! Length units.
//!
//! The base unit is [`LengthUnit::Meter`]. Imperial units use the international definitions (the inch is exactly
//! `0.0254 m`).

use crate::{Dimension, Quantity};
use mensura_derive::Unit;

/// Units of length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::Length)]
pub enum LengthUnit {
    /// Metre (base unit).
    #[unit(symbol = "m", name = "Meter", base, aliases = ["meters", "metre", "metres"])]
    Meter,
    /// Kilometre.
    #[unit(symbol = "km", name = "Kilometer", coefficient = 1000.0, aliases = ["kilometers", "kilometre", "kilometres"])]
    Kilometer,
    /// Centimetre.
    #[unit(symbol = "cm", name = "Centimeter", coefficient = 0.01, aliases = ["centimeters"])]
    Centimeter,
    /// Millimetre.
    #[unit(symbol = "mm", name = "Millimeter", coefficient = 0.001, aliases = ["millimeters"])]
    Millimeter,
    /// Micrometre.
    #[unit(symbol = "µm", name = "Micrometer", coefficient = 1e-6, aliases = ["um", "micrometers"])]
    Micrometer,
    /// Nanometre.
    #[unit(symbol = "nm", name = "Nanometer", coefficient = 1e-9, aliases = ["nanometers"])]
    Nanometer,
    /// International inch.
    #[unit(symbol = "in", name = "Inch", coefficient = 0.0254, aliases = ["inches"])]
    Inch,
    /// International foot.
    #[unit(symbol = "ft", name = "Foot", coefficient = 0.3048, aliases = ["feet"])]
    Foot,
    /// International yard.
    #[unit(symbol = "yd", name = "Yard", coefficient = 0.9144, aliases = ["yards"])]
    Yard,
    /// Statute mile.
    #[unit(symbol = "mi", name = "Mile", coefficient = 1609.34, aliases = ["miles"])]
    Mile,
}

/// A length.
pub type Length = Quantity<LengthUnit>;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn imperial_ladder() {
        let yard = Length::new(1.0, LengthUnit::Yard);
        assert_relative_eq!(yard.convert_to(&LengthUnit::Foot).value(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(yard.convert_to(&LengthUnit::Inch).value(), 36.0, epsilon = 1e-12);
    }

    #[test]
    fn metric_ladder() {
        let km = Length::new(1.25, LengthUnit::Kilometer);
        assert_relative_eq!(km.convert_to(&LengthUnit::Meter).value(), 1250.0);
        assert_relative_eq!(
            Length::new(1.0, LengthUnit::Millimeter)
                .convert_to(&LengthUnit::Micrometer)
                .value(),
            1000.0,
            max_relative = 1e-12
        );
    }
}
