//! Physical quantities with unit conversion and schema-free JSON round-tripping.
//!
//! `mensura` is the user-facing crate in this workspace. It re-exports the full API from `mensura-core`, including
//! every predefined unit catalog at the crate root.
//!
//! A value is always a `Quantity<U>`, where `U` is a unit type. Catalog units are plain enums
//! (`PressureUnit::Kilopascal`), so mixing dimensions is a type error; the runtime units ([`CustomUnit`],
//! [`GeneralUnit`]) check the dimension when an operation runs.
//!
//! # What this crate solves
//!
//! - Conversion between the units of 22 built-in dimensions, including affine (temperature) and reciprocal
//!   (fuel consumption) scales.
//! - JSON in three shapes (full, compact, minimal), all accepted on input without configuration.
//! - Decoding a quantity of unknown dimension ([`unmarshal_measurement`]) and falling back to the general unit when
//!   the payload comes from a newer producer.
//!
//! # What this crate does not try to solve
//!
//! - Compound unit algebra (`kWh/m²`) or dimensional analysis of expressions.
//! - Measurement uncertainty.
//! - Exact arithmetic: quantities are backed by `f64`.
//!
//! # Quick start
//!
//! ```rust
//! use mensura::{FuelEfficiency, FuelEfficiencyUnit};
//!
//! let consumption = FuelEfficiency::new(5.0, FuelEfficiencyUnit::LitersPer100Kilometers);
//! let economy = consumption.convert_to(&FuelEfficiencyUnit::KilometersPerLiter);
//! assert!((economy.value() - 20.0).abs() < 1e-9);
//! ```
//!
//! Decode without knowing the dimension:
//!
//! ```rust
//! use mensura::unmarshal_measurement;
//!
//! let m = unmarshal_measurement(r#"{"value":101.325,"unit":"pressure_kilopascal"}"#).unwrap();
//! assert_eq!(m.dimension(), "pressure");
//! assert_eq!(m.symbol(), "kPa");
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use mensura::{Length, LengthUnit, Mass, MassUnit};
//!
//! let d = Length::new(1.0, LengthUnit::Meter);
//! let m = Mass::new(1.0, MassUnit::Kilogram);
//! let _ = d + m; // cannot add different unit types
//! ```
//!
//! # Feature flags
//!
//! - `parse` (default): enables `mensura::parse` and `str::parse` for catalog quantities.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use mensura_core::*;

/// Derive macro used by `mensura-core` to define unit catalogs.
///
/// This macro expands in terms of `crate::Unit`, `crate::UnitCatalog` and `crate::Registry`, so it is intended for
/// use inside `mensura-core` (or crates exposing the same crate-root API). Most users should not need this.
pub use mensura_derive::Unit;

pub use mensura_core::units::*;
