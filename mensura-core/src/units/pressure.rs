//! Pressure units. The base unit is the pascal.

use crate::{Dimension, Quantity};
use mensura_derive::Unit;

/// Units of pressure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::Pressure)]
pub enum PressureUnit {
    /// Pascal (base unit).
    #[unit(symbol = "Pa", name = "Pascal", base, aliases = ["pascal", "pascals"])]
    Pascal,
    /// Kilopascal (`1000 Pa`).
    #[unit(symbol = "kPa", name = "Kilopascal", coefficient = 1000.0, aliases = ["kilopascals"])]
    Kilopascal,
    /// Bar (`100 kPa`).
    #[unit(symbol = "bar", name = "Bar", coefficient = 100000.0, aliases = ["bars"])]
    Bar,
    /// Pound-force per square inch.
    #[unit(symbol = "psi", name = "Pounds per Square Inch", coefficient = 6894.76, keys = ["pressure_psi"])]
    Psi,
    /// Inch of water column.
    #[unit(
        symbol = "inH₂O",
        name = "Inches of Water Column",
        coefficient = 249.089,
        alt_symbols = ["inH2O"],
        aliases = ["inch water", "inches of water"],
        keys = ["pressure_inch_h2o"]
    )]
    InchesOfWater,
}

/// A pressure.
pub type Pressure = Quantity<PressureUnit>;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bar_to_psi() {
        let p = Pressure::new(1.0, PressureUnit::Bar);
        assert_relative_eq!(
            p.convert_to(&PressureUnit::Psi).value(),
            14.503768,
            epsilon = 1e-6
        );
    }

    #[test]
    fn water_column() {
        let p = Pressure::new(1.0, PressureUnit::Kilopascal);
        assert_relative_eq!(
            p.convert_to(&PressureUnit::InchesOfWater).value(),
            4.014629,
            epsilon = 1e-6
        );
    }
}
