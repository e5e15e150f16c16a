//! Area units. The base unit is the square metre.

use crate::{Dimension, Quantity};
use mensura_derive::Unit;

/// Units of area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::Area)]
pub enum AreaUnit {
    /// Square metre (base unit).
    #[unit(symbol = "m²", name = "Square Meter", base, alt_symbols = ["m2"], aliases = ["sq m", "square meters"])]
    SquareMeter,
    /// Square kilometre.
    #[unit(symbol = "km²", name = "Square Kilometer", coefficient = 1e6, alt_symbols = ["km2"], aliases = ["sq km", "square kilometers"])]
    SquareKilometer,
    /// Square centimetre.
    #[unit(symbol = "cm²", name = "Square Centimeter", coefficient = 1e-4, alt_symbols = ["cm2"], aliases = ["sq cm", "square centimeters"])]
    SquareCentimeter,
    /// Square millimetre.
    #[unit(symbol = "mm²", name = "Square Millimeter", coefficient = 1e-6, alt_symbols = ["mm2"], aliases = ["sq mm", "square millimeters"])]
    SquareMillimeter,
    /// Square inch.
    #[unit(symbol = "in²", name = "Square Inch", coefficient = 0.00064516, alt_symbols = ["in2"], aliases = ["sq in", "square inches"])]
    SquareInch,
    /// Square foot.
    #[unit(symbol = "ft²", name = "Square Foot", coefficient = 0.09290304, alt_symbols = ["ft2"], aliases = ["sq ft", "square feet"])]
    SquareFoot,
    /// Square yard.
    #[unit(symbol = "yd²", name = "Square Yard", coefficient = 0.83612736, alt_symbols = ["yd2"], aliases = ["sq yd", "square yards"])]
    SquareYard,
    /// Square mile.
    #[unit(symbol = "mi²", name = "Square Mile", coefficient = 2589988.11, alt_symbols = ["mi2"], aliases = ["sq mi", "square miles"])]
    SquareMile,
    /// Acre.
    #[unit(symbol = "ac", name = "Acre", coefficient = 4046.86, aliases = ["acres"])]
    Acre,
    /// Hectare (`10 000 m²`).
    #[unit(symbol = "ha", name = "Hectare", coefficient = 10000.0, aliases = ["hectares"])]
    Hectare,
}

/// An area.
pub type Area = Quantity<AreaUnit>;
