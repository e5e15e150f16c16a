//! Quantities of a dimension only known at runtime.
//!
//! [`unmarshal_measurement`] decodes any payload the codec understands without the caller naming a dimension up
//! front. The result is an [`AnyMeasurement`], a closed sum over every built-in dimension with checked accessors.
//!
//! Payloads whose dimension or unit is unknown are not rejected: they are downgraded to a
//! [`General`] quantity that keeps the value and the payload's unit symbol, and the error that caused the
//! downgrade stays available through [`AnyMeasurement::fallback_cause`].
//!
//! ```rust
//! use mensura_core::unmarshal_measurement;
//!
//! let m = unmarshal_measurement(r#"{"value":3,"unit":"temperature_kelvin"}"#).unwrap();
//! assert_eq!(m.dimension(), "temperature");
//! assert!(m.as_temperature().is_some());
//! assert!(m.as_pressure().is_none());
//!
//! let m = unmarshal_measurement(r#"{"value":9,"unit":"warp_factor"}"#).unwrap();
//! assert_eq!(m.dimension(), "general");
//! assert_eq!(m.symbol(), "factor");
//! assert!(m.is_fallback());
//! ```

use crate::codec::{self, extract_value, UnitInfo, WireUnit};
use crate::detect::{as_object, detect_object, WireFormat};
use crate::dimension::Dimension;
use crate::error::{CodecError, CodecResult};
use crate::quantity::{self, Quantity};
use crate::unit::Unit;
use crate::units::*;
use core::fmt::{Display, Formatter, Result};
use log::debug;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::Value;

macro_rules! measurements {
    ($($variant:ident($quantity:ident, $unit:ident) => $accessor:ident;)+) => {
        /// A quantity of one of the built-in dimensions.
        #[derive(Clone, Debug, PartialEq)]
        pub enum Measurement {
            $(
                #[doc = concat!("A [`", stringify!($quantity), "`].")]
                $variant($quantity),
            )+
        }

        impl Measurement {
            /// The dimension tag of the wrapped quantity.
            pub fn dimension(&self) -> &str {
                match self {
                    $(Measurement::$variant(q) => q.dimension(),)+
                }
            }

            /// The numeric value in the wrapped quantity's own unit.
            pub fn value(&self) -> f64 {
                match self {
                    $(Measurement::$variant(q) => q.value(),)+
                }
            }

            /// The unit symbol of the wrapped quantity.
            pub fn symbol(&self) -> &str {
                match self {
                    $(Measurement::$variant(q) => q.unit().symbol(),)+
                }
            }

            fn marshal_with_format(&self, format: WireFormat) -> CodecResult<String> {
                match self {
                    $(Measurement::$variant(q) => codec::marshal_with_format(q, format),)+
                }
            }

            fn decode(dimension: Dimension, value: &Value) -> CodecResult<Self> {
                match dimension {
                    $(Dimension::$variant => codec::from_value::<$unit>(value).map(Measurement::$variant),)+
                }
            }
        }

        impl Serialize for Measurement {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                match self {
                    $(Measurement::$variant(q) => q.serialize(serializer),)+
                }
            }
        }

        $(
            impl From<$quantity> for Measurement {
                fn from(quantity: $quantity) -> Self {
                    Measurement::$variant(quantity)
                }
            }
        )+

        impl AnyMeasurement {
            $(
                #[doc = concat!("The wrapped quantity if it is a [`", stringify!($quantity), "`].")]
                pub fn $accessor(&self) -> Option<&$quantity> {
                    match &self.measurement {
                        Measurement::$variant(q) => Some(q),
                        _ => None,
                    }
                }
            )+
        }
    };
}

measurements! {
    Acceleration(Acceleration, AccelerationUnit) => as_acceleration;
    Angle(Angle, AngleUnit) => as_angle;
    Area(Area, AreaUnit) => as_area;
    Concentration(Concentration, ConcentrationUnit) => as_concentration;
    Dispersion(Dispersion, DispersionUnit) => as_dispersion;
    Duration(Duration, DurationUnit) => as_duration;
    ElectricCharge(ElectricCharge, ElectricChargeUnit) => as_electric_charge;
    ElectricCurrent(ElectricCurrent, ElectricCurrentUnit) => as_electric_current;
    ElectricPotentialDifference(ElectricPotentialDifference, ElectricPotentialDifferenceUnit)
        => as_electric_potential_difference;
    Energy(Energy, EnergyUnit) => as_energy;
    FlowRate(FlowRate, FlowRateUnit) => as_flow_rate;
    Frequency(Frequency, FrequencyUnit) => as_frequency;
    FuelEfficiency(FuelEfficiency, FuelEfficiencyUnit) => as_fuel_efficiency;
    General(General, GeneralUnit) => as_general;
    Illuminance(Illuminance, IlluminanceUnit) => as_illuminance;
    Information(Information, InformationUnit) => as_information;
    Length(Length, LengthUnit) => as_length;
    Mass(Mass, MassUnit) => as_mass;
    Power(Power, PowerUnit) => as_power;
    Pressure(Pressure, PressureUnit) => as_pressure;
    Speed(Speed, SpeedUnit) => as_speed;
    Temperature(Temperature, TemperatureUnit) => as_temperature;
    Volume(Volume, VolumeUnit) => as_volume;
}

/// A decoded quantity whose dimension was chosen by the payload.
///
/// Only the codec creates these. Each `as_*` accessor is a checked downcast: it returns `None` when the payload
/// belongs to another dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct AnyMeasurement {
    measurement: Measurement,
    downgraded_from: Option<CodecError>,
}

impl AnyMeasurement {
    /// The dimension tag, `"general"` after a fallback.
    pub fn dimension(&self) -> &str {
        self.measurement.dimension()
    }

    /// The numeric value as decoded.
    pub fn value(&self) -> f64 {
        self.measurement.value()
    }

    /// The unit symbol as decoded or synthesized.
    pub fn symbol(&self) -> &str {
        self.measurement.symbol()
    }

    /// The wrapped quantity.
    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    /// Unwraps the quantity, discarding any fallback cause.
    pub fn into_measurement(self) -> Measurement {
        self.measurement
    }

    /// Whether the payload was downgraded to the general unit.
    pub fn is_fallback(&self) -> bool {
        self.downgraded_from.is_some()
    }

    /// The error that forced the downgrade to the general unit, if one happened.
    pub fn fallback_cause(&self) -> Option<&CodecError> {
        self.downgraded_from.as_ref()
    }

    /// Encodes the wrapped quantity in the given format.
    pub fn marshal_with_format(&self, format: WireFormat) -> CodecResult<String> {
        self.measurement.marshal_with_format(format)
    }

    /// Decodes a measurement from an already parsed JSON document. See [`unmarshal_measurement`].
    pub fn from_value(value: &Value) -> CodecResult<Self> {
        let object = as_object(value)?;
        let detection = detect_object(object)?;

        let decoded = match detection.known_dimension() {
            Some(dimension) => Measurement::decode(dimension, value),
            None => Err(CodecError::UnknownDimension(detection.dimension.clone())),
        };

        match decoded {
            Ok(measurement) => Ok(AnyMeasurement {
                measurement,
                downgraded_from: None,
            }),
            Err(cause) if cause.is_recoverable() => {
                let number = extract_value(object)?;
                let unit = GeneralUnit::from_wire(&UnitInfo::extract(object))?;
                debug!(
                    "downgrading payload to general unit '{}': {}",
                    unit.symbol(),
                    cause
                );
                Ok(AnyMeasurement {
                    measurement: Measurement::General(Quantity::new(number, unit)),
                    downgraded_from: Some(cause),
                })
            }
            Err(err) => Err(err),
        }
    }
}

impl From<Measurement> for AnyMeasurement {
    fn from(measurement: Measurement) -> Self {
        AnyMeasurement {
            measurement,
            downgraded_from: None,
        }
    }
}

impl Display for AnyMeasurement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        quantity::write_measurement(f, self.value(), self.symbol())
    }
}

impl Serialize for AnyMeasurement {
    /// Serializes in the full format.
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.measurement.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AnyMeasurement {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        AnyMeasurement::from_value(&value).map_err(de::Error::custom)
    }
}

/// Decodes a quantity of whatever dimension the payload declares.
///
/// Unknown dimensions and unknown units fall back to the general unit, so every well-formed
/// `{"value": n, "unit": ..}` document decodes.
///
/// # Errors
///
/// Only structural failures: [`CodecError::MalformedJson`], [`CodecError::MissingField`],
/// [`CodecError::UnrecognizedShape`] and [`CodecError::MalformedNumber`].
pub fn unmarshal_measurement(data: impl AsRef<[u8]>) -> CodecResult<AnyMeasurement> {
    let value: Value = serde_json::from_slice(data.as_ref())?;
    AnyMeasurement::from_value(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::marshal;
    use approx::assert_relative_eq;

    #[test]
    fn dispatches_on_detected_dimension() {
        let m = unmarshal_measurement(
            r#"{"value":101.325,"unit":{"name":"Kilopascal","symbol":"kPa"},"dimension":"pressure"}"#,
        )
        .unwrap();
        assert_eq!(m.dimension(), "pressure");
        assert!(!m.is_fallback());
        let p = m.as_pressure().unwrap();
        assert_eq!(*p.unit(), PressureUnit::Kilopascal);
        assert!(m.as_temperature().is_none());
    }

    #[test]
    fn multi_word_dimensions_dispatch_through_key() {
        let m = unmarshal_measurement(r#"{"value":2,"unit":"electric_potential_difference_millivolt"}"#)
            .unwrap();
        assert_eq!(m.dimension(), "electric_potential_difference");
        assert_eq!(
            *m.as_electric_potential_difference().unwrap().unit(),
            ElectricPotentialDifferenceUnit::Millivolt
        );
    }

    #[test]
    fn unknown_dimension_falls_back() {
        let m = unmarshal_measurement(r#"{"value":7.5,"unit":"warp_factor"}"#).unwrap();
        assert_eq!(m.dimension(), "general");
        assert_eq!(m.value(), 7.5);
        assert_eq!(m.symbol(), "factor");
        assert_eq!(
            m.fallback_cause(),
            Some(&CodecError::UnknownDimension("warp".into()))
        );
        assert!(m.as_general().is_some());
    }

    #[test]
    fn unknown_unit_falls_back() {
        let m = unmarshal_measurement(
            r#"{"value":3,"unit":{"name":"Furlong","symbol":"fur"},"dimension":"length"}"#,
        )
        .unwrap();
        assert_eq!(m.dimension(), "general");
        assert_eq!(m.symbol(), "fur");
        assert_eq!(m.as_general().unwrap().unit().name(), "Furlong");
        assert!(matches!(
            m.fallback_cause(),
            Some(CodecError::UnknownUnit { dimension, .. }) if dimension == "length"
        ));
    }

    #[test]
    fn unknown_unit_of_multi_word_dimension_keeps_its_own_symbol() {
        let m = unmarshal_measurement(r#"{"value":3,"unit":"electric_charge_statcoulomb"}"#).unwrap();
        assert_eq!(m.dimension(), "general");
        assert_eq!(m.symbol(), "statcoulomb");
        assert!(matches!(
            m.fallback_cause(),
            Some(CodecError::UnknownUnit { dimension, .. }) if dimension == "electric_charge"
        ));
    }

    #[test]
    fn structural_errors_are_not_absorbed() {
        assert!(matches!(
            unmarshal_measurement("{").unwrap_err(),
            CodecError::MalformedJson(_)
        ));
        assert_eq!(
            unmarshal_measurement(r#"{"value":1,"unit":{"symbol":"x"}}"#).unwrap_err(),
            CodecError::UnrecognizedShape
        );
        assert_eq!(
            unmarshal_measurement(r#"{"value":"n/a","unit":"warp_factor"}"#).unwrap_err(),
            CodecError::MalformedNumber("\"n/a\"".into())
        );
    }

    #[test]
    fn re_encodes_in_any_format() {
        let original = Temperature::new(-40.0, TemperatureUnit::Fahrenheit);
        let m = unmarshal_measurement(marshal(&original).unwrap()).unwrap();
        for format in [WireFormat::Full, WireFormat::Compact, WireFormat::Minimal] {
            let again = unmarshal_measurement(m.marshal_with_format(format).unwrap()).unwrap();
            assert_eq!(again, m);
        }
    }

    #[test]
    fn serde_round_trip() {
        let m: AnyMeasurement =
            serde_json::from_str(r#"{"value":1.5,"unit":"fuel_efficiency_kilometers_per_liter"}"#)
                .unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: AnyMeasurement = serde_json::from_str(&json).unwrap();
        assert_relative_eq!(back.as_fuel_efficiency().unwrap().value(), 1.5);
    }

    #[test]
    fn display_and_conversion() {
        let m = AnyMeasurement::from(Measurement::from(Speed::new(12.0, SpeedUnit::Knot)));
        assert_eq!(m.to_string(), "12 kn");

        let far = AnyMeasurement::from(Measurement::from(Length::new(4.2e22, LengthUnit::Meter)));
        assert_eq!(far.to_string(), "4.2e22 m");
        assert!(!m.is_fallback());
    }
}
