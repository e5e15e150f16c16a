//! Parsing quantities from human-written strings such as `"22.5°C"` or `"14.7 psi"`.

use crate::error::ParseError;
use crate::quantity::Quantity;
use crate::unit::UnitCatalog;
use core::str::FromStr;
use once_cell::sync::Lazy;
use regex::Regex;

static PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([-+]?\d*\.?\d+)\s*([^\d\s].*)$").expect("measurement pattern is a valid regex")
});

/// Parses `<number><optional whitespace><unit>` into a quantity of catalog `U`.
///
/// The unit token is matched against the exact symbols first, then case-insensitively against the lower-cased
/// symbols, names and aliases of the catalog.
///
/// # Errors
///
/// [`ParseError`] if the input has no number followed by a unit, or if the unit is not in the catalog.
///
/// ```rust
/// use mensura_core::parse;
/// use mensura_core::units::{PressureUnit, TemperatureUnit};
///
/// let t = parse::<TemperatureUnit>("22.5°C").unwrap();
/// assert_eq!(t.value(), 22.5);
///
/// let p = parse::<PressureUnit>("14.7 pounds per square inch").unwrap();
/// assert_eq!(*p.unit(), PressureUnit::Psi);
/// ```
pub fn parse<U: UnitCatalog>(input: &str) -> Result<Quantity<U>, ParseError> {
    let trimmed = input.trim();
    let captures = PATTERN.captures(trimmed).ok_or_else(|| {
        ParseError::new(input, "invalid format, expected '<value><unit>' (e.g., '22.5°C')")
    })?;

    let number = &captures[1];
    let token = captures[2].trim();

    let value: f64 = number
        .parse()
        .map_err(|_| ParseError::new(input, format!("invalid number: {}", number)))?;

    let registry = U::registry();
    let unit = registry
        .by_symbol(token)
        .or_else(|| registry.by_alias(token))
        .ok_or_else(|| {
            ParseError::new(
                input,
                format!("unknown {} unit: {}", U::DIMENSION, token),
            )
        })?;

    Ok(Quantity::new(value, unit))
}

impl<U: UnitCatalog> FromStr for Quantity<U> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
