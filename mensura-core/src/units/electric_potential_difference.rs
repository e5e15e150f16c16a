//! Electric potential difference (voltage) units. The base unit is the volt.
//!
//! Millivolt is declared before megavolt, so the case-insensitive token `mv` resolves to millivolt. Megavolt stays
//! reachable through its exact symbol `MV` or the aliases `megav` and `megavolt`.

use crate::{Dimension, Quantity};
use mensura_derive::Unit;

/// Units of electric potential difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::ElectricPotentialDifference)]
pub enum ElectricPotentialDifferenceUnit {
    /// Volt (base unit).
    #[unit(symbol = "V", name = "Volt", base, aliases = ["volts"])]
    Volt,
    /// Millivolt.
    #[unit(symbol = "mV", name = "Millivolt", coefficient = 0.001, aliases = ["millivolts"])]
    Millivolt,
    /// Microvolt.
    #[unit(symbol = "µV", name = "Microvolt", coefficient = 1e-6, aliases = ["uv", "microvolts"])]
    Microvolt,
    /// Kilovolt.
    #[unit(symbol = "kV", name = "Kilovolt", coefficient = 1000.0, aliases = ["kilovolts"])]
    Kilovolt,
    /// Megavolt.
    #[unit(symbol = "MV", name = "Megavolt", coefficient = 1e6, aliases = ["megav", "megavolts"])]
    Megavolt,
}

/// A voltage.
pub type ElectricPotentialDifference = Quantity<ElectricPotentialDifferenceUnit>;
