//! Dimensionless ratio units. The base unit is parts per million.

use crate::{Dimension, Quantity};
use mensura_derive::Unit;

/// Units of dimensionless dispersion (mixing ratio).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::Dispersion)]
pub enum DispersionUnit {
    /// Parts per million (base unit).
    #[unit(symbol = "ppm", name = "Parts per Million", base)]
    PartsPerMillion,
    /// Part per billion.
    #[unit(symbol = "ppb", name = "Parts per Billion", coefficient = 0.001)]
    PartsPerBillion,
    /// Part per trillion.
    #[unit(symbol = "ppt", name = "Parts per Trillion", coefficient = 1e-6)]
    PartsPerTrillion,
    /// Percent (`10 000 ppm`).
    #[unit(symbol = "%", name = "Percent", coefficient = 10000.0, aliases = ["pct"])]
    Percent,
}

/// A dimensionless dispersion.
pub type Dispersion = Quantity<DispersionUnit>;
