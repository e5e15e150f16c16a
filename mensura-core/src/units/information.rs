//! Information units.
//!
//! The base unit is the byte. Decimal multiples (`KB`, `MB`, …) are powers of 1000, binary multiples (`KiB`, `MiB`,
//! …) are powers of 1024.

use crate::{Dimension, Quantity};
use mensura_derive::Unit;

/// Units of information.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::Information)]
pub enum InformationUnit {
    /// Bit (`1/8 B`).
    #[unit(symbol = "bit", name = "Bit", coefficient = 0.125, aliases = ["bits"])]
    Bit,
    /// Byte (base unit).
    #[unit(symbol = "B", name = "Byte", base, aliases = ["bytes"])]
    Byte,
    /// Kilobyte.
    #[unit(symbol = "KB", name = "Kilobyte", coefficient = 1e3)]
    Kilobyte,
    /// Megabyte.
    #[unit(symbol = "MB", name = "Megabyte", coefficient = 1e6)]
    Megabyte,
    /// Gigabyte.
    #[unit(symbol = "GB", name = "Gigabyte", coefficient = 1e9)]
    Gigabyte,
    /// Terabyte.
    #[unit(symbol = "TB", name = "Terabyte", coefficient = 1e12)]
    Terabyte,
    /// Petabyte.
    #[unit(symbol = "PB", name = "Petabyte", coefficient = 1e15)]
    Petabyte,
    /// Kibibyte.
    #[unit(symbol = "KiB", name = "Kibibyte", coefficient = 1024.0)]
    Kibibyte,
    /// Mebibyte.
    #[unit(symbol = "MiB", name = "Mebibyte", coefficient = 1048576.0)]
    Mebibyte,
    /// Gibibyte.
    #[unit(symbol = "GiB", name = "Gibibyte", coefficient = 1073741824.0)]
    Gibibyte,
    /// Tebibyte.
    #[unit(symbol = "TiB", name = "Tebibyte", coefficient = 1099511627776.0)]
    Tebibyte,
    /// Pebibyte.
    #[unit(symbol = "PiB", name = "Pebibyte", coefficient = 1125899906842624.0)]
    Pebibyte,
}

/// An amount of information.
pub type Information = Quantity<InformationUnit>;
