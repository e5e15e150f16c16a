//! Mass concentration units. The base unit is the gram per litre.
//!
//! `ppm` and `ppb` here are the aqueous convention (`1 ppm ≈ 1 mg/L`). For dimensionless ratios see
//! [`dispersion`](super::dispersion).

use crate::{Dimension, Quantity};
use mensura_derive::Unit;

/// Units of mass concentration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::Concentration)]
pub enum ConcentrationUnit {
    /// Gram per litre (base unit).
    #[unit(symbol = "g/L", name = "Grams per Liter", base)]
    GramsPerLiter,
    /// Milligram per litre.
    #[unit(symbol = "mg/L", name = "Milligrams per Liter", coefficient = 0.001)]
    MilligramsPerLiter,
    /// Part per million by mass in water.
    #[unit(symbol = "ppm", name = "Parts per Million", coefficient = 0.001)]
    PartsPerMillion,
    /// Part per billion by mass in water.
    #[unit(symbol = "ppb", name = "Parts per Billion", coefficient = 1e-6)]
    PartsPerBillion,
}

/// A mass concentration.
pub type Concentration = Quantity<ConcentrationUnit>;
