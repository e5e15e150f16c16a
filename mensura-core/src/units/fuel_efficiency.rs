//! Fuel efficiency units.
//!
//! The base unit is the kilometre per litre. Litres per 100 km measures consumption, the inverse of efficiency, so
//! it is declared `reciprocal`: `km/L = 100 / (L/100km)` in both directions.
//!
//! ```rust
//! use mensura_core::units::{FuelEfficiency, FuelEfficiencyUnit};
//!
//! let consumption = FuelEfficiency::new(5.0, FuelEfficiencyUnit::LitersPer100Kilometers);
//! let efficiency = consumption.convert_to(&FuelEfficiencyUnit::KilometersPerLiter);
//! assert_eq!(efficiency.value(), 20.0);
//! ```

use crate::{Dimension, Quantity};
use mensura_derive::Unit;

/// Units of fuel efficiency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::FuelEfficiency)]
pub enum FuelEfficiencyUnit {
    /// Kilometre per litre (base unit).
    #[unit(symbol = "km/L", name = "Kilometers per Liter", base, aliases = ["kmpl"])]
    KilometersPerLiter,
    /// US mile per gallon.
    #[unit(symbol = "mpg", name = "Miles per Gallon", coefficient = 0.425144)]
    MilesPerGallon,
    /// Litre per 100 km. Zero consumption maps to infinite efficiency.
    #[unit(
        symbol = "L/100km",
        name = "Liters per 100 Kilometers",
        reciprocal = 100.0,
        aliases = ["l/100 km"],
        keys = ["fuel_efficiency_liters_per100_kilometers"]
    )]
    LitersPer100Kilometers,
}

/// A fuel efficiency (or consumption) figure.
pub type FuelEfficiency = Quantity<FuelEfficiencyUnit>;
