//! JSON encoding and decoding of quantities.
//!
//! Encoding picks one of the [`WireFormat`]s explicitly. Decoding accepts all of them: the shape is found by
//! [`detect`](crate::detect), then the value and the unit identifier are extracted and resolved against the
//! dimension's registry.
//!
//! ```rust
//! use mensura_core::units::{Pressure, PressureUnit};
//! use mensura_core::{marshal, unmarshal};
//!
//! let p = Pressure::new(101.325, PressureUnit::Kilopascal);
//! let json = marshal(&p).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"value":101.325,"unit":{"name":"Kilopascal","symbol":"kPa"},"dimension":"pressure"}"#
//! );
//!
//! let back: Pressure = unmarshal(&json).unwrap();
//! assert!(back.equal(&p));
//! ```

use crate::detect::{as_object, detect_object, Detection, WireFormat};
use crate::dimension::Dimension;
use crate::error::{CodecError, CodecResult};
use crate::quantity::Quantity;
use crate::registry::{parse_unit_key, unit_key};
use crate::unit::{Unit, UnitCatalog};
use crate::units::GeneralUnit;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::{Map, Value};

/// Unit identifiers extracted from a payload, before resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitInfo {
    /// `unit.symbol`, or the top-level `symbol` next to a string `unit`.
    pub symbol: Option<String>,
    /// `unit.name`.
    pub name: Option<String>,
    /// `unit.key`, or the string `unit` itself.
    pub key: Option<String>,
}

impl UnitInfo {
    pub(crate) fn extract(object: &Map<String, Value>) -> Self {
        let text = |map: &Map<String, Value>, field: &str| {
            map.get(field)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        match object.get("unit") {
            Some(Value::String(key)) => UnitInfo {
                symbol: text(object, "symbol"),
                name: None,
                key: Some(key.clone()),
            },
            Some(Value::Object(unit)) => UnitInfo {
                symbol: text(unit, "symbol"),
                name: text(unit, "name"),
                key: text(unit, "key"),
            },
            _ => UnitInfo::default(),
        }
    }

    /// The most specific identifier available, for error messages.
    fn label(&self) -> String {
        self.symbol
            .as_deref()
            .or(self.key.as_deref())
            .or(self.name.as_deref())
            .unwrap_or_default()
            .to_string()
    }
}

/// A unit type that can be resolved from wire data.
///
/// Every catalog unit implements it through the registry. [`GeneralUnit`] implements it by synthesizing a unit
/// from whatever a `general` payload carries. Like any other unit type it rejects payloads of other dimensions;
/// [`unmarshal_measurement`](crate::unmarshal_measurement) is the decoder that reads anything.
pub trait WireUnit: Unit + Sized {
    /// Dimension tag this unit type decodes.
    fn wire_dimension() -> &'static str;

    /// Whether a payload with this detection can be decoded into this unit type.
    fn accepts(detection: &Detection) -> bool {
        detection.matches_dimension(Self::wire_dimension())
    }

    /// Resolves the unit. Symbols are tried before keys.
    ///
    /// # Errors
    ///
    /// [`CodecError::UnknownUnit`] if nothing matches.
    fn from_wire(info: &UnitInfo) -> CodecResult<Self>;
}

impl<U: UnitCatalog> WireUnit for U {
    fn wire_dimension() -> &'static str {
        U::DIMENSION.as_str()
    }

    fn from_wire(info: &UnitInfo) -> CodecResult<Self> {
        info.symbol
            .as_deref()
            .and_then(U::from_symbol)
            .or_else(|| info.key.as_deref().and_then(U::from_key))
            .ok_or_else(|| CodecError::UnknownUnit {
                dimension: U::DIMENSION.as_str().to_string(),
                unit: info.label(),
            })
    }
}

impl WireUnit for GeneralUnit {
    fn wire_dimension() -> &'static str {
        Dimension::General.as_str()
    }

    /// Never fails.
    ///
    /// The symbol is the payload's symbol, else its key without the dimension prefix, else its name. The name falls
    /// back to the symbol.
    /// `unit` (or the key of the built-in unit) yields [`GeneralUnit::unit`].
    fn from_wire(info: &UnitInfo) -> CodecResult<Self> {
        let builtin_key = unit_key(Self::wire_dimension(), GeneralUnit::NAME);
        if info.symbol.as_deref() == Some(GeneralUnit::SYMBOL)
            || info.key.as_deref() == Some(GeneralUnit::SYMBOL)
            || info.key.as_deref() == Some(builtin_key.as_str())
        {
            return Ok(GeneralUnit::unit());
        }

        let from_key = info.key.as_deref().map(unit_name_of_key);
        let symbol = match info.symbol.as_deref().or(from_key).or(info.name.as_deref()) {
            Some(symbol) => symbol,
            None => return Ok(GeneralUnit::unit()),
        };
        let name = info.name.as_deref().unwrap_or(symbol);

        Ok(GeneralUnit::custom(symbol, name))
    }
}

/// Strips the longest known dimension tag from a compact key, else everything up to the first underscore.
fn unit_name_of_key(key: &str) -> &str {
    if let Some(rest) = Dimension::from_key_prefix(key)
        .and_then(|dimension| key.strip_prefix(dimension.as_str()))
        .and_then(|rest| rest.strip_prefix('_'))
    {
        return rest;
    }
    match parse_unit_key(key) {
        (_, "") => key,
        (_, unit_name) => unit_name,
    }
}

pub(crate) fn extract_value(object: &Map<String, Value>) -> CodecResult<f64> {
    let value = object.get("value").ok_or(CodecError::MissingField("value"))?;
    value
        .as_f64()
        .ok_or_else(|| CodecError::MalformedNumber(value.to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Decoding
// ─────────────────────────────────────────────────────────────────────────────

/// Decodes a quantity of unit type `U` from JSON in any wire format.
///
/// # Errors
///
/// - [`CodecError::MalformedJson`], [`CodecError::MissingField`], [`CodecError::UnrecognizedShape`] for payloads
///   that are not quantities.
/// - [`CodecError::DimensionMismatch`] if the payload encodes another dimension.
/// - [`CodecError::MalformedNumber`] if `value` is not a number.
/// - [`CodecError::UnknownUnit`] if the unit is not in `U`'s catalog.
pub fn unmarshal<U: WireUnit>(data: impl AsRef<[u8]>) -> CodecResult<Quantity<U>> {
    let value: Value = serde_json::from_slice(data.as_ref())?;
    from_value(&value)
}

/// Decodes a quantity from an already parsed JSON document. See [`unmarshal`].
pub fn from_value<U: WireUnit>(value: &Value) -> CodecResult<Quantity<U>> {
    let object = as_object(value)?;
    let detection = detect_object(object)?;

    if !U::accepts(&detection) {
        return Err(CodecError::DimensionMismatch {
            expected: U::wire_dimension().to_string(),
            found: detection.dimension_tag().to_string(),
        });
    }

    let number = extract_value(object)?;
    let unit = U::from_wire(&UnitInfo::extract(object))?;
    Ok(Quantity::new(number, unit))
}

// ─────────────────────────────────────────────────────────────────────────────
// Encoding
// ─────────────────────────────────────────────────────────────────────────────

/// Encodes a quantity in the full format.
///
/// The output is `{"value":..,"unit":{"name":..,"symbol":..},"dimension":..}`, in that field order.
pub fn marshal<U: Unit>(quantity: &Quantity<U>) -> CodecResult<String> {
    marshal_with_format(quantity, WireFormat::Full)
}

/// Encodes a quantity in the given format.
///
/// Non-finite values have no JSON representation and are written as `null`, which does not decode.
pub fn marshal_with_format<U: Unit>(
    quantity: &Quantity<U>,
    format: WireFormat,
) -> CodecResult<String> {
    Ok(serde_json::to_string(&Formatted { quantity, format })?)
}

/// Encodes a quantity into a JSON value in the given format.
pub fn to_value<U: Unit>(quantity: &Quantity<U>, format: WireFormat) -> CodecResult<Value> {
    Ok(serde_json::to_value(Formatted { quantity, format })?)
}

/// A quantity paired with the wire format to serialize it in.
pub(crate) struct Formatted<'a, U: Unit> {
    pub(crate) quantity: &'a Quantity<U>,
    pub(crate) format: WireFormat,
}

#[derive(serde::Serialize)]
struct FullUnit<'a> {
    name: &'a str,
    symbol: &'a str,
}

#[derive(serde::Serialize)]
struct CompactUnit<'a> {
    key: String,
    symbol: &'a str,
}

impl<U: Unit> Serialize for Formatted<'_, U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let quantity = self.quantity;
        let unit = quantity.unit();

        match self.format {
            WireFormat::Full => {
                let mut state = serializer.serialize_struct("Quantity", 3)?;
                state.serialize_field("value", &quantity.value())?;
                state.serialize_field(
                    "unit",
                    &FullUnit {
                        name: unit.name(),
                        symbol: unit.symbol(),
                    },
                )?;
                state.serialize_field("dimension", unit.dimension())?;
                state.end()
            }
            WireFormat::Compact => {
                let mut state = serializer.serialize_struct("Quantity", 2)?;
                state.serialize_field("value", &quantity.value())?;
                state.serialize_field(
                    "unit",
                    &CompactUnit {
                        key: unit_key(unit.dimension(), unit.name()),
                        symbol: unit.symbol(),
                    },
                )?;
                state.end()
            }
            WireFormat::Minimal => {
                let mut state = serializer.serialize_struct("Quantity", 2)?;
                state.serialize_field("value", &quantity.value())?;
                state.serialize_field("unit", &unit_key(unit.dimension(), unit.name()))?;
                state.end()
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Serialize for Quantity<U> {
    /// Serializes in the full format.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Formatted {
            quantity: self,
            format: WireFormat::Full,
        }
        .serialize(serializer)
    }
}

impl<'de, U: WireUnit> Deserialize<'de> for Quantity<U> {
    /// Deserializes from any wire format.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        from_value(&value).map_err(de::Error::custom)
    }
}

/// Serde helper module for fields stored in the compact format.
///
/// Deserialization accepts every format.
///
/// ```rust
/// use mensura_core::units::{Temperature, TemperatureUnit};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Reading {
///     #[serde(with = "mensura_core::serde_compact")]
///     temperature: Temperature,
/// }
///
/// let r = Reading { temperature: Temperature::new(21.5, TemperatureUnit::Celsius) };
/// let json = serde_json::to_string(&r).unwrap();
/// assert_eq!(
///     json,
///     r#"{"temperature":{"value":21.5,"unit":{"key":"temperature_celsius","symbol":"°C"}}}"#
/// );
/// ```
pub mod serde_compact {
    use super::*;

    /// Serializes a `Quantity<U>` as `{"value":..,"unit":{"key":..,"symbol":..}}`.
    pub fn serialize<U, S>(quantity: &Quantity<U>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        S: Serializer,
    {
        Formatted {
            quantity,
            format: WireFormat::Compact,
        }
        .serialize(serializer)
    }

    /// Deserializes a `Quantity<U>` from any wire format.
    pub fn deserialize<'de, U, D>(deserializer: D) -> Result<Quantity<U>, D::Error>
    where
        U: WireUnit,
        D: Deserializer<'de>,
    {
        Quantity::deserialize(deserializer)
    }
}

/// Serde helper module for fields stored in the minimal format.
///
/// Deserialization accepts every format.
pub mod serde_minimal {
    use super::*;

    /// Serializes a `Quantity<U>` as `{"value":..,"unit":"dimension_unitname"}`.
    pub fn serialize<U, S>(quantity: &Quantity<U>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        S: Serializer,
    {
        Formatted {
            quantity,
            format: WireFormat::Minimal,
        }
        .serialize(serializer)
    }

    /// Deserializes a `Quantity<U>` from any wire format.
    pub fn deserialize<'de, U, D>(deserializer: D) -> Result<Quantity<U>, D::Error>
    where
        U: WireUnit,
        D: Deserializer<'de>,
    {
        Quantity::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{
        ElectricCharge, ElectricChargeUnit, Energy, EnergyUnit, General, Power, PowerUnit,
        Pressure, PressureUnit, Temperature, TemperatureUnit,
    };
    use crate::CustomUnit;

    fn kpa() -> Pressure {
        Pressure::new(101.325, PressureUnit::Kilopascal)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Encoding
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn full_format_is_exact() {
        assert_eq!(
            marshal(&kpa()).unwrap(),
            r#"{"value":101.325,"unit":{"name":"Kilopascal","symbol":"kPa"},"dimension":"pressure"}"#
        );
    }

    #[test]
    fn compact_format_is_exact() {
        assert_eq!(
            marshal_with_format(&kpa(), WireFormat::Compact).unwrap(),
            r#"{"value":101.325,"unit":{"key":"pressure_kilopascal","symbol":"kPa"}}"#
        );
    }

    #[test]
    fn minimal_format_is_exact() {
        assert_eq!(
            marshal_with_format(&kpa(), WireFormat::Minimal).unwrap(),
            r#"{"value":101.325,"unit":"pressure_kilopascal"}"#
        );
    }

    #[test]
    fn serialize_impl_uses_full_format() {
        assert_eq!(
            serde_json::to_string(&kpa()).unwrap(),
            marshal(&kpa()).unwrap()
        );
    }

    #[test]
    fn runtime_units_encode_too() {
        let q = Quantity::new(2.0, CustomUnit::base("widgets", "wg", "Widget"));
        let json = to_value(&q, WireFormat::Minimal).unwrap();
        assert_eq!(json["unit"], "widgets_widget");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Decoding
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn decodes_every_shape() {
        for payload in [
            r#"{"value":25,"unit":{"name":"Celsius","symbol":"°C"},"dimension":"temperature"}"#,
            r#"{"value":25,"unit":{"name":"Celsius","symbol":"°C","dimension":"temperature"}}"#,
            r#"{"value":25,"unit":{"key":"temperature_celsius","symbol":"°C"}}"#,
            r#"{"value":25,"unit":{"key":"temperature_celsius"}}"#,
            r#"{"value":25,"unit":"temperature_celsius","symbol":"°C"}"#,
            r#"{"value":25,"unit":"temperature_celsius"}"#,
        ] {
            let t: Temperature = unmarshal(payload).unwrap();
            assert_eq!(t.value(), 25.0, "{}", payload);
            assert_eq!(*t.unit(), TemperatureUnit::Celsius, "{}", payload);
        }
    }

    #[test]
    fn alternate_symbols_decode() {
        let t: Temperature =
            unmarshal(r#"{"value":77,"unit":{"name":"Fahrenheit","symbol":"F"},"dimension":"temperature"}"#)
                .unwrap();
        assert_eq!(*t.unit(), TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn acronym_names_round_trip_through_keys() {
        let p = Power::new(3.0, PowerUnit::BtuPerHour);
        let json = marshal_with_format(&p, WireFormat::Minimal).unwrap();
        let back: Power = unmarshal(&json).unwrap();
        assert_eq!(*back.unit(), PowerUnit::BtuPerHour);
    }

    #[test]
    fn multi_word_dimensions_decode() {
        let q = ElectricCharge::new(3.0, ElectricChargeUnit::MilliampereHour);
        for format in [WireFormat::Full, WireFormat::Compact, WireFormat::Minimal] {
            let json = marshal_with_format(&q, format).unwrap();
            let back: ElectricCharge = unmarshal(&json).unwrap();
            assert_eq!(*back.unit(), ElectricChargeUnit::MilliampereHour);
        }
    }

    #[test]
    fn legacy_compact_keys_decode() {
        let e: Energy = unmarshal(r#"{"value":2,"unit":"energy_kilowatt_hour"}"#).unwrap();
        assert_eq!(*e.unit(), EnergyUnit::KilowattHour);
        let p: Pressure = unmarshal(r#"{"value":14.7,"unit":{"key":"pressure_psi"}}"#).unwrap();
        assert_eq!(*p.unit(), PressureUnit::Psi);

        for (key, dimension, symbol) in [
            ("energy_kilowatt_hour", "energy", "kWh"),
            ("energy_btu", "energy", "BTU"),
            ("energy_b_t_u", "energy", "BTU"),
            ("frequency_rpm", "frequency", "rpm"),
            ("flowrate_cfm", "flowrate", "CFM"),
            ("acceleration_g", "acceleration", "g"),
            ("electric_charge_ampere_hour", "electric_charge", "Ah"),
            ("electric_charge_milliampere__hour", "electric_charge", "mAh"),
            ("illuminance_foot_candle", "illuminance", "fc"),
            ("fuel_efficiency_liters_per100_kilometers", "fuel_efficiency", "L/100km"),
            ("power_btu_per_hour", "power", "BTU/h"),
            ("pressure_inch_h2o", "pressure", "inH₂O"),
        ] {
            let payload = serde_json::json!({ "value": 1.5, "unit": key }).to_string();
            let m = crate::unmarshal_measurement(&payload).unwrap();
            assert_eq!(m.dimension(), dimension, "{}", key);
            assert_eq!(m.symbol(), symbol, "{}", key);
            assert!(!m.is_fallback(), "{}", key);
        }
    }

    #[test]
    fn encoding_keeps_derived_keys() {
        let e = Energy::new(1.0, EnergyUnit::KilowattHour);
        assert_eq!(
            marshal_with_format(&e, WireFormat::Minimal).unwrap(),
            r#"{"value":1.0,"unit":"energy_kilowatt-hour"}"#
        );
    }

    #[test]
    fn dimension_mismatch() {
        let err = unmarshal::<TemperatureUnit>(marshal(&kpa()).unwrap()).unwrap_err();
        assert_eq!(
            err,
            CodecError::DimensionMismatch {
                expected: "temperature".into(),
                found: "pressure".into()
            }
        );
    }

    #[test]
    fn unknown_unit() {
        let err = unmarshal::<PressureUnit>(r#"{"value":1,"unit":"pressure_furlong"}"#).unwrap_err();
        assert_eq!(
            err,
            CodecError::UnknownUnit {
                dimension: "pressure".into(),
                unit: "pressure_furlong".into()
            }
        );
    }

    #[test]
    fn value_errors() {
        assert_eq!(
            unmarshal::<PressureUnit>(r#"{"unit":"pressure_pascal"}"#).unwrap_err(),
            CodecError::MissingField("value")
        );
        assert_eq!(
            unmarshal::<PressureUnit>(r#"{"value":"high","unit":"pressure_pascal"}"#).unwrap_err(),
            CodecError::MalformedNumber("\"high\"".into())
        );
    }

    #[test]
    fn structural_errors_pass_through() {
        assert!(matches!(
            unmarshal::<PressureUnit>("not json").unwrap_err(),
            CodecError::MalformedJson(_)
        ));
        assert_eq!(
            unmarshal::<PressureUnit>(r#"{"value":1}"#).unwrap_err(),
            CodecError::MissingField("unit")
        );
        assert_eq!(
            unmarshal::<PressureUnit>(r#"{"value":1,"unit":{"symbol":"Pa"}}"#).unwrap_err(),
            CodecError::UnrecognizedShape
        );
    }

    #[test]
    fn deserialize_impl_reports_codec_errors() {
        let err = serde_json::from_str::<Pressure>(r#"{"value":1,"unit":"pressure_furlong"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("unknown pressure unit"));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // General unit resolution
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn general_rejects_other_dimensions() {
        let err = unmarshal::<GeneralUnit>(r#"{"value":3,"unit":"warp_factor"}"#).unwrap_err();
        assert_eq!(
            err,
            CodecError::DimensionMismatch {
                expected: "general".into(),
                found: "warp".into()
            }
        );

        let err = unmarshal::<GeneralUnit>(marshal(&kpa()).unwrap()).unwrap_err();
        assert_eq!(
            err,
            CodecError::DimensionMismatch {
                expected: "general".into(),
                found: "pressure".into()
            }
        );

        let err = serde_json::from_str::<General>(&marshal(&kpa()).unwrap()).unwrap_err();
        assert!(err.to_string().contains("dimension mismatch"), "{}", err);
    }

    #[test]
    fn general_builtin_unit() {
        let g: General = unmarshal(
            r#"{"value":100,"unit":{"name":"Unit","symbol":"unit"},"dimension":"general"}"#,
        )
        .unwrap();
        assert!(g.unit().is_base_unit());

        let g = General::new(4.0, GeneralUnit::unit());
        let json = marshal_with_format(&g, WireFormat::Minimal).unwrap();
        assert_eq!(json, r#"{"value":4.0,"unit":"general_general_unit"}"#);
        let back: General = unmarshal(&json).unwrap();
        assert_eq!(*back.unit(), GeneralUnit::unit());
    }

    #[test]
    fn general_prefers_payload_symbol_and_name() {
        let g: General = unmarshal(
            r#"{"value":42,"unit":{"name":"Custom XYZ","symbol":"xyz"},"dimension":"general"}"#,
        )
        .unwrap();
        assert_eq!(g.unit().symbol(), "xyz");
        assert_eq!(g.unit().name(), "Custom XYZ");

        let err = unmarshal::<GeneralUnit>(
            r#"{"value":42,"unit":{"name":"Custom XYZ","symbol":"xyz"},"dimension":"unknown_dimension"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            CodecError::DimensionMismatch {
                expected: "general".into(),
                found: "unknown_dimension".into()
            }
        );
    }

    #[test]
    fn general_symbol_from_key_drops_the_whole_dimension_tag() {
        let from_key = |key: &str| {
            let info = UnitInfo {
                key: Some(key.into()),
                ..UnitInfo::default()
            };
            GeneralUnit::from_wire(&info).unwrap().symbol().to_string()
        };
        assert_eq!(from_key("electric_charge_foo"), "foo");
        assert_eq!(from_key("electric_potential_difference_statvolt"), "statvolt");
        assert_eq!(from_key("fuel_efficiency_miles_per_gallon_uk"), "miles_per_gallon_uk");
        assert_eq!(from_key("warp_factor"), "factor");
        assert_eq!(from_key("general_widget"), "widget");
    }

    #[test]
    fn general_key_without_separator() {
        let info = UnitInfo {
            key: Some("furlongs".into()),
            ..UnitInfo::default()
        };
        assert_eq!(GeneralUnit::from_wire(&info).unwrap().symbol(), "furlongs");
        assert_eq!(
            GeneralUnit::from_wire(&UnitInfo::default()).unwrap(),
            GeneralUnit::unit()
        );
    }
}
