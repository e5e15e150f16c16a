//! Volume units.
//!
//! The base unit is the cubic metre. US customary liquid measures (gallon, quart, pint, cup, fluid ounce) follow the
//! US definitions, not the imperial ones.

use crate::{Dimension, Quantity};
use mensura_derive::Unit;

/// Units of volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::Volume)]
pub enum VolumeUnit {
    /// Cubic metre (base unit).
    #[unit(symbol = "m³", name = "Cubic Meter", base, alt_symbols = ["m3"], aliases = ["cu m", "cubic meters"])]
    CubicMeter,
    /// Cubic kilometre.
    #[unit(symbol = "km³", name = "Cubic Kilometer", coefficient = 1e9, alt_symbols = ["km3"], aliases = ["cu km", "cubic kilometers"])]
    CubicKilometer,
    /// Cubic centimetre.
    #[unit(symbol = "cm³", name = "Cubic Centimeter", coefficient = 1e-6, alt_symbols = ["cm3"], aliases = ["cc", "cu cm", "cubic centimeters"])]
    CubicCentimeter,
    /// Cubic millimetre.
    #[unit(symbol = "mm³", name = "Cubic Millimeter", coefficient = 1e-9, alt_symbols = ["mm3"], aliases = ["cu mm", "cubic millimeters"])]
    CubicMillimeter,
    /// Litre (`1 dm³`).
    #[unit(symbol = "L", name = "Liter", coefficient = 0.001, aliases = ["liters", "litre", "litres"])]
    Liter,
    /// Millilitre (`1 cm³`).
    #[unit(symbol = "mL", name = "Milliliter", coefficient = 1e-6, aliases = ["milliliters", "millilitre", "millilitres"])]
    Milliliter,
    /// Cubic inch.
    #[unit(symbol = "in³", name = "Cubic Inch", coefficient = 0.000016387064, alt_symbols = ["in3"], aliases = ["cu in", "cubic inches"])]
    CubicInch,
    /// Cubic foot.
    #[unit(symbol = "ft³", name = "Cubic Foot", coefficient = 0.028316846592, alt_symbols = ["ft3"], aliases = ["cu ft", "cubic feet"])]
    CubicFoot,
    /// Cubic yard.
    #[unit(symbol = "yd³", name = "Cubic Yard", coefficient = 0.764554857984, alt_symbols = ["yd3"], aliases = ["cu yd", "cubic yards"])]
    CubicYard,
    /// US gallon (`231 in³`).
    #[unit(symbol = "gal", name = "Gallon", coefficient = 0.003785411784, aliases = ["gallons"])]
    Gallon,
    /// US liquid quart.
    #[unit(symbol = "qt", name = "Quart", coefficient = 0.000946352946, aliases = ["quarts"])]
    Quart,
    /// US liquid pint.
    #[unit(symbol = "pt", name = "Pint", coefficient = 0.000473176473, aliases = ["pints"])]
    Pint,
    /// US legal cup.
    #[unit(symbol = "cup", name = "Cup", coefficient = 0.000236588236, aliases = ["cups"])]
    Cup,
    /// US fluid ounce.
    #[unit(symbol = "fl oz", name = "Fluid Ounce", coefficient = 0.0000295735295625, aliases = ["fluid ounces"])]
    FluidOunce,
}

/// A volume.
pub type Volume = Quantity<VolumeUnit>;
