//! Unit types and traits.

use crate::dimension::Dimension;
use crate::registry::Registry;
use core::fmt::{Debug, Display, Formatter, Result};

/// Trait implemented by every **unit**.
///
/// A unit knows its dimension tag, its wire symbol and display name, and how to move a value to and from the
/// *base unit* of its dimension. Conversions between two units always pivot through the base unit, so a
/// dimension with N units needs N conversion pairs, never N².
///
/// The default conversion is affine:
///
/// * base unit: identity.
/// * `offset != 0`: `base = value * coefficient + offset`.
/// * otherwise: `base = value * coefficient`.
///
/// Units whose physical meaning is an inverse rate override [`Unit::convert_to_base`] and
/// [`Unit::convert_from_base`] instead (see [`FuelEfficiencyUnit`](crate::units::FuelEfficiencyUnit)).
///
/// # Invariants
///
/// - `convert_to_base(convert_from_base(x)) == x` within floating-point tolerance.
/// - `symbol()` is unique within a dimension.
/// - Exactly one unit per dimension has `is_base_unit() == true`, with coefficient 1 and offset 0.
pub trait Unit: Clone + Debug + 'static {
    /// Dimension tag, e.g. `"pressure"`.
    fn dimension(&self) -> &str;

    /// Wire/display symbol, e.g. `"kPa"`.
    fn symbol(&self) -> &str;

    /// Human-readable name, e.g. `"Kilopascal"`. Also the source of the compact key.
    fn name(&self) -> &str;

    /// Whether this is the canonical unit of its dimension.
    fn is_base_unit(&self) -> bool;

    /// Affine scale to the base unit.
    fn coefficient(&self) -> f64;

    /// Affine offset to the base unit.
    fn offset(&self) -> f64 {
        0.0
    }

    /// Converts `value`, expressed in this unit, to the base unit.
    fn convert_to_base(&self, value: f64) -> f64 {
        affine_to_base(self, value)
    }

    /// Converts `value`, expressed in the base unit, to this unit.
    fn convert_from_base(&self, value: f64) -> f64 {
        affine_from_base(self, value)
    }

    /// Two units are equal when they share dimension and symbol. Coefficients are not compared.
    fn equals<V: Unit>(&self, other: &V) -> bool {
        self.dimension() == other.dimension() && self.symbol() == other.symbol()
    }
}

pub(crate) fn affine_to_base<U: Unit + ?Sized>(unit: &U, value: f64) -> f64 {
    if unit.is_base_unit() {
        return value;
    }
    let offset = unit.offset();
    if offset != 0.0 {
        value * unit.coefficient() + offset
    } else {
        value * unit.coefficient()
    }
}

pub(crate) fn affine_from_base<U: Unit + ?Sized>(unit: &U, value: f64) -> f64 {
    if unit.is_base_unit() {
        return value;
    }
    let offset = unit.offset();
    if offset != 0.0 {
        (value - offset) / unit.coefficient()
    } else {
        value / unit.coefficient()
    }
}

/// A closed, compile-time catalog of the units of one [`Dimension`].
///
/// Implemented by `#[derive(Unit)]` on the unit enums in [`units`](crate::units). The catalog is what the wire codec
/// and the string parser consult: every variant, its alternate wire symbols, its parse aliases, and a process-wide
/// [`Registry`] built on first use.
pub trait UnitCatalog: Unit + Copy + PartialEq + Display {
    /// The dimension every unit of this catalog belongs to.
    const DIMENSION: Dimension;

    /// Every unit of the catalog, in declaration order.
    const ALL: &'static [Self];

    /// The canonical unit.
    const BASE: Self;

    /// Extra symbols accepted when decoding (e.g. `"C"` for `"°C"`).
    fn alt_symbols(&self) -> &'static [&'static str];

    /// Extra case-insensitive tokens accepted by the string parser.
    fn aliases(&self) -> &'static [&'static str];

    /// Extra compact keys accepted when decoding, on top of the one derived from the name
    /// (e.g. `"pressure_psi"`).
    fn keys(&self) -> &'static [&'static str];

    /// The lookup tables for this catalog.
    fn registry() -> &'static Registry<Self>;

    /// Looks a unit up by its wire symbol.
    ///
    /// ```rust
    /// use mensura_core::units::PressureUnit;
    /// use mensura_core::UnitCatalog;
    /// assert_eq!(PressureUnit::from_symbol("kPa"), Some(PressureUnit::Kilopascal));
    /// ```
    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::registry().by_symbol(symbol)
    }

    /// Looks a unit up by its compact key (`dimension_unitname`).
    fn from_key(key: &str) -> Option<Self> {
        Self::registry().by_key(key)
    }
}

/// A unit defined at runtime.
///
/// Useful for ad-hoc dimensions that have no catalog. Dimension safety is then checked at runtime by the `try_*`
/// operations on [`Quantity`](crate::Quantity).
///
/// ```rust
/// use mensura_core::{CustomUnit, Quantity};
///
/// let knot = CustomUnit::base("nautical", "kn", "Knot");
/// let fathom_per_hour = CustomUnit::new("nautical", "fm/h", "Fathom per Hour", 0.000987, 0.0, false);
/// let q = Quantity::new(1.0, knot).convert_to(&fathom_per_hour);
/// assert!((q.value() - 1013.17).abs() < 0.01);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CustomUnit {
    dimension: String,
    symbol: String,
    name: String,
    coefficient: f64,
    offset: f64,
    is_base: bool,
}

impl CustomUnit {
    /// Creates a unit with explicit affine parameters.
    pub fn new(
        dimension: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        coefficient: f64,
        offset: f64,
        is_base: bool,
    ) -> Self {
        CustomUnit {
            dimension: dimension.into(),
            symbol: symbol.into(),
            name: name.into(),
            coefficient,
            offset,
            is_base,
        }
    }

    /// Creates the base unit of a dimension (coefficient 1, offset 0).
    pub fn base(
        dimension: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::new(dimension, symbol, name, 1.0, 0.0, true)
    }
}

impl Unit for CustomUnit {
    fn dimension(&self) -> &str {
        &self.dimension
    }

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_base_unit(&self) -> bool {
        self.is_base
    }

    fn coefficient(&self) -> f64 {
        self.coefficient
    }

    fn offset(&self) -> f64 {
        self.offset
    }
}

impl Display for CustomUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.symbol)
    }
}
