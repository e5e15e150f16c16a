//! Wire format detection.
//!
//! A quantity travels as one of three JSON shapes:
//!
//! - **full**: `{"value":25,"unit":{"name":"Celsius","symbol":"°C"},"dimension":"temperature"}`, or the variant
//!   with `dimension` nested inside `unit`.
//! - **compact**: `{"value":25,"unit":{"key":"temperature_celsius","symbol":"°C"}}`.
//! - **minimal**: `{"value":25,"unit":"temperature_celsius"}`, optionally with a sibling `"symbol"`.
//!
//! Detection only inspects the `unit` member (and a top-level `dimension`). It never looks at `value` and never
//! resolves a unit, so it is independent of the dimension catalogs.

use crate::dimension::Dimension;
use crate::error::{CodecError, CodecResult};
use crate::registry::parse_unit_key;
use log::trace;
use serde_json::{Map, Value};

/// The three wire shapes of a quantity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WireFormat {
    /// `{value, unit: {name, symbol}, dimension}`.
    #[default]
    Full,
    /// `{value, unit: {key, symbol}}`.
    Compact,
    /// `{value, unit: "key"}`.
    Minimal,
}

/// What [`detect`] found in a payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Detection {
    /// The wire shape.
    pub format: WireFormat,
    /// The dimension tag as written, or the part of the compact key before its first underscore.
    pub dimension: String,
    /// The compact key, for the compact and minimal shapes.
    pub key: Option<String>,
}

impl Detection {
    /// The built-in dimension this payload belongs to, if any.
    ///
    /// Compact keys are matched on their longest known dimension prefix, so `electric_charge_coulomb` resolves to
    /// [`Dimension::ElectricCharge`] even though [`Detection::dimension`] reads `electric`.
    pub fn known_dimension(&self) -> Option<Dimension> {
        self.key
            .as_deref()
            .and_then(Dimension::from_key_prefix)
            .or_else(|| Dimension::from_tag(&self.dimension))
    }

    /// The resolved dimension tag: the known dimension if any, else the raw one.
    pub fn dimension_tag(&self) -> &str {
        match self.known_dimension() {
            Some(dimension) => dimension.as_str(),
            None => &self.dimension,
        }
    }

    /// Whether this payload encodes the dimension `tag`.
    pub fn matches_dimension(&self, tag: &str) -> bool {
        self.dimension_tag() == tag
    }
}

/// Classifies raw JSON bytes.
///
/// # Errors
///
/// - [`CodecError::MalformedJson`] if the bytes are not a JSON object.
/// - [`CodecError::MissingField`] if there is no `unit` member.
/// - [`CodecError::UnrecognizedShape`] if `unit` matches none of the shapes.
///
/// ```rust
/// use mensura_core::{detect, WireFormat};
///
/// let found = detect(br#"{"value":25,"unit":"temperature_celsius"}"#).unwrap();
/// assert_eq!(found.format, WireFormat::Minimal);
/// assert_eq!(found.dimension, "temperature");
/// ```
pub fn detect(data: &[u8]) -> CodecResult<Detection> {
    let value: Value = serde_json::from_slice(data)?;
    detect_value(&value)
}

/// Classifies an already parsed JSON document. See [`detect`].
pub fn detect_value(value: &Value) -> CodecResult<Detection> {
    detect_object(as_object(value)?)
}

pub(crate) fn as_object(value: &Value) -> CodecResult<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| CodecError::MalformedJson(format!("expected a JSON object, found {}", value)))
}

pub(crate) fn detect_object(object: &Map<String, Value>) -> CodecResult<Detection> {
    let unit = object.get("unit").ok_or(CodecError::MissingField("unit"))?;

    let detection = match unit {
        // Minimal, or the flat compact variant with a sibling "symbol".
        Value::String(key) => keyed(WireFormat::Minimal, key),
        Value::Object(inner) => {
            if let Some(Value::String(key)) = inner.get("key") {
                keyed(WireFormat::Compact, key)
            } else if let Some(Value::String(dimension)) = inner.get("dimension") {
                tagged(dimension)
            } else if let Some(Value::String(dimension)) = object.get("dimension") {
                tagged(dimension)
            } else {
                return Err(CodecError::UnrecognizedShape);
            }
        }
        _ => return Err(CodecError::UnrecognizedShape),
    };

    trace!(
        "detected {:?} payload for dimension '{}'",
        detection.format,
        detection.dimension
    );
    Ok(detection)
}

fn keyed(format: WireFormat, key: &str) -> Detection {
    let (dimension, _) = parse_unit_key(key);
    Detection {
        format,
        dimension: dimension.to_string(),
        key: Some(key.to_string()),
    }
}

fn tagged(dimension: &str) -> Detection {
    Detection {
        format: WireFormat::Full,
        dimension: dimension.to_string(),
        key: None,
    }
}
