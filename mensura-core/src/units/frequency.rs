//! Frequency units. The base unit is the hertz.

use crate::{Dimension, Quantity};
use mensura_derive::Unit;

/// Units of frequency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::Frequency)]
pub enum FrequencyUnit {
    /// Hertz (base unit).
    #[unit(symbol = "Hz", name = "Hertz", base)]
    Hertz,
    /// Kilohertz.
    #[unit(symbol = "kHz", name = "Kilohertz", coefficient = 1e3)]
    Kilohertz,
    /// Megahertz.
    #[unit(symbol = "MHz", name = "Megahertz", coefficient = 1e6)]
    Megahertz,
    /// Gigahertz.
    #[unit(symbol = "GHz", name = "Gigahertz", coefficient = 1e9)]
    Gigahertz,
    /// Terahertz.
    #[unit(symbol = "THz", name = "Terahertz", coefficient = 1e12)]
    Terahertz,
    /// Revolutions per minute, counted as cycles (`1/60 Hz`).
    #[unit(
        symbol = "rpm",
        name = "Revolutions Per Minute",
        coefficient = 1.0 / 60.0,
        aliases = ["revolutions per minute"],
        keys = ["frequency_rpm", "frequency_r_p_m"]
    )]
    RevolutionsPerMinute,
}

/// A frequency.
pub type Frequency = Quantity<FrequencyUnit>;
