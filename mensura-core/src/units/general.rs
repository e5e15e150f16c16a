//! The general dimension.
//!
//! [`GeneralUnit`] is the container for data no catalog recognizes. When a payload's dimension or unit is unknown,
//! [`unmarshal_measurement`](crate::unmarshal_measurement) downgrades it to a `Quantity<GeneralUnit>` carrying the
//! original value and symbol. Decoding into `Quantity<GeneralUnit>` directly only accepts `general` payloads.

use crate::unit::CustomUnit;
use crate::{Dimension, Quantity, Unit};
use core::fmt::{Display, Formatter, Result};

/// A unit of the `general` dimension.
///
/// ```rust
/// use mensura_core::units::{General, GeneralUnit};
/// use mensura_core::Unit;
///
/// let widgets = General::new(12.0, GeneralUnit::custom("wg", "Widget"));
/// assert_eq!(widgets.dimension(), "general");
/// assert_eq!(widgets.unit().symbol(), "wg");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GeneralUnit(CustomUnit);

impl GeneralUnit {
    /// Symbol of the built-in general unit.
    pub const SYMBOL: &'static str = "unit";

    /// Name of the built-in general unit.
    pub const NAME: &'static str = "General Unit";

    /// The built-in general unit (`unit`), the base of the dimension.
    pub fn unit() -> Self {
        GeneralUnit(CustomUnit::base(
            Dimension::General.as_str(),
            Self::SYMBOL,
            Self::NAME,
        ))
    }

    /// A general unit with an arbitrary symbol and name that converts one-to-one with [`GeneralUnit::unit`].
    pub fn custom(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_conversion(symbol, name, 1.0, 0.0)
    }

    /// A general unit with explicit affine parameters relative to [`GeneralUnit::unit`].
    pub fn with_conversion(
        symbol: impl Into<String>,
        name: impl Into<String>,
        coefficient: f64,
        offset: f64,
    ) -> Self {
        GeneralUnit(CustomUnit::new(
            Dimension::General.as_str(),
            symbol,
            name,
            coefficient,
            offset,
            false,
        ))
    }
}

impl Default for GeneralUnit {
    fn default() -> Self {
        Self::unit()
    }
}

impl Unit for GeneralUnit {
    fn dimension(&self) -> &str {
        self.0.dimension()
    }

    fn symbol(&self) -> &str {
        self.0.symbol()
    }

    fn name(&self) -> &str {
        self.0.name()
    }

    fn is_base_unit(&self) -> bool {
        self.0.is_base_unit()
    }

    fn coefficient(&self) -> f64 {
        self.0.coefficient()
    }

    fn offset(&self) -> f64 {
        self.0.offset()
    }
}

impl Display for GeneralUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.symbol())
    }
}

/// A quantity of the general dimension.
pub type General = Quantity<GeneralUnit>;
