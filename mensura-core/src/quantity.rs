//! Quantity type and its implementations.

use crate::error::QuantityError;
use crate::unit::{Unit, UnitCatalog};
use core::fmt::{Display, Formatter, Result};
use core::ops::*;

/// Absolute tolerance, in base units, used by [`Quantity::equal`].
pub const EQUALITY_TOLERANCE: f64 = 1e-9;

/// A value paired with its unit.
///
/// `Quantity<U>` is generic over the unit type, so one implementation of conversion, arithmetic and comparison
/// serves every dimension. With a catalog unit (`PressureUnit`, `TemperatureUnit`, …) mixing dimensions is a type
/// error; with runtime units ([`CustomUnit`](crate::CustomUnit), [`GeneralUnit`](crate::GeneralUnit)) the dimension
/// is checked when the operation runs.
///
/// Quantities are immutable values: every operation returns a new one.
///
/// # Examples
///
/// ```rust
/// use mensura_core::units::{TemperatureUnit, Temperature};
///
/// let boiling = Temperature::new(100.0, TemperatureUnit::Celsius);
/// let kelvin = boiling.convert_to(&TemperatureUnit::Kelvin);
/// assert!((kelvin.value() - 373.15).abs() < 1e-9);
/// assert_eq!(kelvin.to_string(), "373.15 K");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: Unit> {
    value: f64,
    unit: U,
}

impl<U: Unit> Quantity<U> {
    /// Creates a new quantity.
    #[inline]
    pub const fn new(value: f64, unit: U) -> Self {
        Quantity { value, unit }
    }

    /// Returns the raw numeric value, in [`Quantity::unit`].
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the unit.
    #[inline]
    pub fn unit(&self) -> &U {
        &self.unit
    }

    /// Returns the dimension tag of the unit.
    #[inline]
    pub fn dimension(&self) -> &str {
        self.unit.dimension()
    }

    /// Returns the value expressed in the base unit of the dimension.
    ///
    /// ```rust
    /// use mensura_core::units::{Pressure, PressureUnit};
    /// assert_eq!(Pressure::new(1.5, PressureUnit::Kilopascal).base_value(), 1500.0);
    /// ```
    #[inline]
    pub fn base_value(&self) -> f64 {
        self.unit.convert_to_base(self.value)
    }

    /// Splits the quantity into its value and unit.
    pub fn into_parts(self) -> (f64, U) {
        (self.value, self.unit)
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        Quantity::new(self.value.abs(), self.unit.clone())
    }

    fn check_dimension<V: Unit>(&self, other: &V) -> core::result::Result<(), QuantityError> {
        if self.unit.dimension() == other.dimension() {
            Ok(())
        } else {
            Err(QuantityError::DimensionMismatch {
                left: self.unit.dimension().to_string(),
                right: other.dimension().to_string(),
            })
        }
    }

    /// Converts this quantity to `target`, pivoting through the base unit.
    ///
    /// If `target` equals the current unit the value is kept as is.
    ///
    /// # Errors
    ///
    /// [`QuantityError::DimensionMismatch`] if `target` belongs to another dimension.
    pub fn try_convert_to(&self, target: &U) -> core::result::Result<Self, QuantityError> {
        if self.unit.equals(target) {
            return Ok(Quantity::new(self.value, target.clone()));
        }
        self.check_dimension(target)?;
        let base = self.unit.convert_to_base(self.value);
        Ok(Quantity::new(target.convert_from_base(base), target.clone()))
    }

    /// Converts this quantity to `target`, pivoting through the base unit.
    ///
    /// # Panics
    ///
    /// If `target` belongs to another dimension. That can only happen with runtime units; use
    /// [`Quantity::try_convert_to`] when the units come from data.
    pub fn convert_to(&self, target: &U) -> Self {
        match self.try_convert_to(target) {
            Ok(converted) => converted,
            Err(err) => panic!("{}", err),
        }
    }

    /// Adds `rhs`, converted into this quantity's unit. The result keeps the left-hand unit.
    ///
    /// # Errors
    ///
    /// [`QuantityError::DimensionMismatch`] if the operands belong to different dimensions.
    pub fn checked_add(&self, rhs: &Self) -> core::result::Result<Self, QuantityError> {
        let rhs = rhs.try_convert_to(&self.unit)?;
        Ok(Quantity::new(self.value + rhs.value, self.unit.clone()))
    }

    /// Subtracts `rhs`, converted into this quantity's unit. The result keeps the left-hand unit.
    ///
    /// # Errors
    ///
    /// [`QuantityError::DimensionMismatch`] if the operands belong to different dimensions.
    pub fn checked_sub(&self, rhs: &Self) -> core::result::Result<Self, QuantityError> {
        let rhs = rhs.try_convert_to(&self.unit)?;
        Ok(Quantity::new(self.value - rhs.value, self.unit.clone()))
    }

    /// Divides the value by a scalar, keeping the unit.
    ///
    /// # Errors
    ///
    /// [`QuantityError::DivisionByZero`] if `scalar == 0`.
    pub fn checked_div(&self, scalar: f64) -> core::result::Result<Self, QuantityError> {
        if scalar == 0.0 {
            return Err(QuantityError::DivisionByZero);
        }
        Ok(Quantity::new(self.value / scalar, self.unit.clone()))
    }

    /// Approximate equality across units.
    ///
    /// Quantities of different dimensions are simply unequal. Otherwise both values are normalized to the base unit
    /// and compared with an absolute tolerance of [`EQUALITY_TOLERANCE`].
    ///
    /// ```rust
    /// use mensura_core::units::{Pressure, PressureUnit};
    /// let a = Pressure::new(1.0, PressureUnit::Bar);
    /// let b = Pressure::new(100.0, PressureUnit::Kilopascal);
    /// assert!(a.equal(&b));
    /// ```
    pub fn equal<V: Unit>(&self, other: &Quantity<V>) -> bool {
        if self.unit.dimension() != other.unit.dimension() {
            return false;
        }
        (self.base_value() - other.base_value()).abs() < EQUALITY_TOLERANCE
    }
}

impl<U: UnitCatalog> Quantity<U> {
    /// Creates a quantity in the base unit of the catalog.
    pub fn from_base(value: f64) -> Self {
        Quantity::new(value, U::BASE)
    }

    /// Converts to the base unit of the catalog.
    pub fn to_base_unit(&self) -> Self {
        Quantity::new(self.base_value(), U::BASE)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;

    /// # Panics
    ///
    /// On dimension mismatch (runtime units only).
    fn add(self, rhs: Self) -> Self {
        match self.checked_add(&rhs) {
            Ok(sum) => sum,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<U: Unit> AddAssign for Quantity<U> {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;

    /// # Panics
    ///
    /// On dimension mismatch (runtime units only).
    fn sub(self, rhs: Self) -> Self {
        match self.checked_sub(&rhs) {
            Ok(diff) => diff,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<U: Unit> SubAssign for Quantity<U> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.clone() - rhs;
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Quantity::new(self.value * rhs, self.unit)
    }
}

impl<U: Unit> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;
    #[inline]
    fn mul(self, rhs: Quantity<U>) -> Self::Output {
        rhs * self
    }
}

impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Self;

    /// # Panics
    ///
    /// If `rhs == 0`.
    fn div(self, rhs: f64) -> Self {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Quantity::new(-self.value, self.unit)
    }
}

impl<U: Unit, V: Unit> PartialEq<Quantity<V>> for Quantity<U> {
    fn eq(&self, other: &Quantity<V>) -> bool {
        self.equal(other)
    }
}

/// Writes `"<value> <symbol>"`, switching to exponent form outside `[1e-4, 1e21)`.
pub(crate) fn write_measurement(f: &mut Formatter<'_>, value: f64, symbol: &str) -> Result {
    let magnitude = value.abs();
    if magnitude.is_finite() && magnitude != 0.0 && !(1e-4..1e21).contains(&magnitude) {
        write!(f, "{:e} {}", value, symbol)
    } else {
        write!(f, "{} {}", value, symbol)
    }
}

impl<U: Unit> Display for Quantity<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_measurement(f, self.value, self.unit.symbol())
    }
}
