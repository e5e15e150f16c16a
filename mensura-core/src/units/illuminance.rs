//! Illuminance units. The base unit is the lux.

use crate::{Dimension, Quantity};
use mensura_derive::Unit;

/// Units of illuminance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::Illuminance)]
pub enum IlluminanceUnit {
    /// Lux (base unit).
    #[unit(symbol = "lx", name = "Lux", base)]
    Lux,
    /// Foot-candle (one lumen per square foot).
    #[unit(
        symbol = "fc",
        name = "Foot-candle",
        coefficient = 10.7639,
        aliases = ["foot-candles", "footcandle"],
        keys = ["illuminance_foot_candle"]
    )]
    FootCandle,
    /// Phot (`10 000 lx`).
    #[unit(symbol = "ph", name = "Phot", coefficient = 10000.0)]
    Phot,
    /// Nox (`1 mlx`).
    #[unit(symbol = "nx", name = "Nox", coefficient = 0.001)]
    Nox,
}

/// An illuminance.
pub type Illuminance = Quantity<IlluminanceUnit>;
