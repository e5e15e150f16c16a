//! Electric current units. The base unit is the ampere.

use crate::{Dimension, Quantity};
use mensura_derive::Unit;

/// Units of electric current.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::ElectricCurrent)]
pub enum ElectricCurrentUnit {
    /// Ampere (base unit).
    #[unit(symbol = "A", name = "Ampere", base, aliases = ["amperes", "amp", "amps"])]
    Ampere,
    /// Milliampere.
    #[unit(symbol = "mA", name = "Milliampere", coefficient = 0.001, aliases = ["milliamperes"])]
    Milliampere,
    /// Microampere.
    #[unit(symbol = "µA", name = "Microampere", coefficient = 1e-6, aliases = ["ua", "microamperes"])]
    Microampere,
    /// Kiloampere.
    #[unit(symbol = "kA", name = "Kiloampere", coefficient = 1000.0, aliases = ["kiloamperes"])]
    Kiloampere,
}

/// An electric current.
pub type ElectricCurrent = Quantity<ElectricCurrentUnit>;
