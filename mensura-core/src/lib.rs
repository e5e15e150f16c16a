//! Core types for physical quantities with unit conversion and format-polymorphic JSON.
//!
//! `mensura-core` provides a small runtime units model:
//!
//! - A *unit* implements [`Unit`]: a dimension tag, a symbol, a name and an affine (or reciprocal) mapping to the
//!   dimension's base unit.
//! - A value tagged with a unit is a [`Quantity<U>`], backed by an `f64`.
//! - Conversion goes through the base unit, so N units of a dimension need N conversion rules, not N².
//! - Quantities travel as JSON in one of three [`WireFormat`]s. Decoders detect the shape themselves.
//!
//! Most users should depend on `mensura` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Unit conversion and same-dimension arithmetic for 22 built-in dimensions.
//! - Decoding quantities without knowing in advance which of the three JSON shapes the producer used.
//! - Decoding quantities without knowing their dimension ([`unmarshal_measurement`]), with a lossless fallback to
//!   the general unit for dimensions or units this build does not know.
//!
//! # What this crate does not try to solve
//!
//! - Dimensional analysis: there are no compound units like `kWh/m²`.
//! - Uncertainty propagation.
//! - Exact arithmetic (`Quantity` is `f64`).
//!
//! # Quick start
//!
//! ```rust
//! use mensura_core::units::{Temperature, TemperatureUnit};
//!
//! let boiling = Temperature::new(100.0, TemperatureUnit::Celsius);
//! let k = boiling.convert_to(&TemperatureUnit::Kelvin);
//! assert!((k.value() - 373.15).abs() < 1e-9);
//! ```
//!
//! Round-trip through JSON:
//!
//! ```rust
//! use mensura_core::units::{Pressure, PressureUnit};
//! use mensura_core::{marshal_with_format, unmarshal, WireFormat};
//!
//! let p = Pressure::new(2.5, PressureUnit::Bar);
//! let json = marshal_with_format(&p, WireFormat::Minimal).unwrap();
//! assert_eq!(json, r#"{"value":2.5,"unit":"pressure_bar"}"#);
//!
//! let back: Pressure = unmarshal(&json).unwrap();
//! assert_eq!(back, p);
//! ```
//!
//! # Feature flags
//!
//! - `parse` (default): enables [`parse`] and `FromStr` for catalog quantities. Pulls in `regex`.
//!
//! # Panics and errors
//!
//! Fallible operations return [`QuantityError`], [`CodecError`] or [`ParseError`]. The `+`, `-` and `/` operators
//! and [`Quantity::convert_to`] panic on dimension mismatch or division by zero; use the `checked_*` and `try_*`
//! methods to get a `Result` instead.
//!
//! # Logging
//!
//! The crate logs through the `log` facade and never installs a logger.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod any;
mod codec;
mod detect;
mod dimension;
mod error;
#[cfg(feature = "parse")]
mod parse;
mod quantity;
mod registry;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use any::{unmarshal_measurement, AnyMeasurement, Measurement};
pub use codec::{
    from_value, marshal, marshal_with_format, serde_compact, serde_minimal, to_value, unmarshal,
    UnitInfo, WireUnit,
};
pub use detect::{detect, detect_value, Detection, WireFormat};
pub use dimension::Dimension;
pub use error::{CodecError, CodecResult, QuantityError};
pub use quantity::{Quantity, EQUALITY_TOLERANCE};
pub use registry::{parse_unit_key, to_snake_case, unit_key, Registry};
pub use unit::{CustomUnit, Unit, UnitCatalog};

#[cfg(feature = "parse")]
pub use error::ParseError;
#[cfg(feature = "parse")]
pub use parse::parse;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit catalogs (grouped by dimension).
pub mod units;

pub use units::GeneralUnit;
