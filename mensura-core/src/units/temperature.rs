//! Temperature units.
//!
//! The base unit is [`TemperatureUnit::Celsius`]. Fahrenheit and Kelvin are affine: they need an offset as well as
//! a scale, so `0 °C` is `32 °F` and `273.15 K`.
//!
//! ```rust
//! use mensura_core::units::{Temperature, TemperatureUnit};
//!
//! let t = Temperature::new(0.0, TemperatureUnit::Celsius);
//! let f = t.convert_to(&TemperatureUnit::Fahrenheit);
//! assert!((f.value() - 32.0).abs() < 1e-9);
//! ```

use crate::{Dimension, Quantity};
use mensura_derive::Unit;

/// Units of temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::Temperature)]
pub enum TemperatureUnit {
    /// Degree Celsius (base unit).
    #[unit(symbol = "°C", name = "Celsius", base, alt_symbols = ["C"], aliases = ["c", "celsius"])]
    Celsius,
    /// Degree Fahrenheit: `°C = (°F - 32) * 5/9`.
    #[unit(
        symbol = "°F",
        name = "Fahrenheit",
        coefficient = 5.0 / 9.0,
        offset = -32.0 * 5.0 / 9.0,
        alt_symbols = ["F"],
        aliases = ["f", "fahrenheit"]
    )]
    Fahrenheit,
    /// Kelvin: `°C = K - 273.15`.
    #[unit(symbol = "K", name = "Kelvin", coefficient = 1.0, offset = -273.15, aliases = ["kelvin"])]
    Kelvin,
}

/// A temperature.
pub type Temperature = Quantity<TemperatureUnit>;
