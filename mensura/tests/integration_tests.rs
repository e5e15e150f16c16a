//! Integration-level tests for the `mensura` facade crate.

use mensura::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn smoke_test_temperature() {
    let c = Temperature::new(0.0, TemperatureUnit::Celsius);
    assert_abs_diff_eq!(
        c.convert_to(&TemperatureUnit::Fahrenheit).value(),
        32.0,
        epsilon = 1e-9
    );
    let c = Temperature::new(100.0, TemperatureUnit::Celsius);
    assert_abs_diff_eq!(
        c.convert_to(&TemperatureUnit::Kelvin).value(),
        373.15,
        epsilon = 1e-9
    );
}

#[test]
fn smoke_test_length() {
    let mile = Length::new(1.0, LengthUnit::Mile);
    assert_relative_eq!(
        mile.convert_to(&LengthUnit::Kilometer).value(),
        1.60934,
        max_relative = 1e-12
    );
}

#[test]
fn smoke_test_information() {
    let kib = Information::new(1.0, InformationUnit::Kibibyte);
    assert_abs_diff_eq!(kib.convert_to(&InformationUnit::Bit).value(), 8192.0, epsilon = 1e-9);
}

#[test]
fn smoke_test_fuel_efficiency() {
    let f = FuelEfficiency::new(5.0, FuelEfficiencyUnit::LitersPer100Kilometers);
    assert_relative_eq!(
        f.convert_to(&FuelEfficiencyUnit::KilometersPerLiter).value(),
        20.0
    );

    let zero = FuelEfficiency::new(0.0, FuelEfficiencyUnit::LitersPer100Kilometers);
    assert!(zero
        .convert_to(&FuelEfficiencyUnit::KilometersPerLiter)
        .value()
        .is_infinite());
}

#[test]
fn arithmetic_across_units() {
    let a = Mass::new(1.0, MassUnit::Kilogram);
    let b = Mass::new(500.0, MassUnit::Gram);
    let sum = a + b;
    assert_eq!(*sum.unit(), MassUnit::Kilogram);
    assert_relative_eq!(sum.value(), 1.5, max_relative = 1e-12);

    let diff = Mass::new(1.0, MassUnit::Kilogram) - Mass::new(250.0, MassUnit::Gram);
    assert_relative_eq!(diff.value(), 0.75, max_relative = 1e-12);
}

#[test]
fn runtime_dimension_guard() {
    let m = Quantity::new(1.0, CustomUnit::base("length", "m", "Meter"));
    let s = Quantity::new(1.0, CustomUnit::base("duration", "s", "Second"));
    assert_eq!(
        m.checked_add(&s).unwrap_err(),
        QuantityError::DimensionMismatch {
            left: "length".into(),
            right: "duration".into()
        }
    );
}

#[test]
#[should_panic(expected = "dimension mismatch")]
fn operator_panics_on_dimension_mismatch() {
    let m = Quantity::new(1.0, CustomUnit::base("length", "m", "Meter"));
    let s = Quantity::new(1.0, CustomUnit::base("duration", "s", "Second"));
    let _ = m + s;
}

#[test]
fn division_by_zero() {
    let p = Power::new(3.0, PowerUnit::Watt);
    assert_eq!(p.checked_div(0.0).unwrap_err(), QuantityError::DivisionByZero);
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire formats
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn kilopascal_scenario() {
    let p = Pressure::new(101.325, PressureUnit::Kilopascal);
    let json = marshal(&p).unwrap();
    assert_eq!(
        json,
        r#"{"value":101.325,"unit":{"name":"Kilopascal","symbol":"kPa"},"dimension":"pressure"}"#
    );
    let back: Pressure = unmarshal(&json).unwrap();
    assert!(back.equal(&p));
}

#[test]
fn detection_matches_encoding() {
    let v = Volume::new(2.0, VolumeUnit::Liter);
    for format in [WireFormat::Full, WireFormat::Compact, WireFormat::Minimal] {
        let json = marshal_with_format(&v, format).unwrap();
        let found = detect(json.as_bytes()).unwrap();
        assert_eq!(found.format, format);
        assert_eq!(found.known_dimension(), Some(Dimension::Volume));
    }
}

#[test]
fn typed_and_untyped_decoders_agree() {
    let e = Energy::new(3.6e6, EnergyUnit::Joule);
    for format in [WireFormat::Full, WireFormat::Compact, WireFormat::Minimal] {
        let json = marshal_with_format(&e, format).unwrap();
        let typed: Energy = unmarshal(&json).unwrap();
        let any = unmarshal_measurement(&json).unwrap();
        assert_eq!(any.as_energy(), Some(&typed));
        assert!(!any.is_fallback());
    }
}

#[test]
fn general_quantities_round_trip() {
    let g = General::new(12.0, GeneralUnit::custom("wg", "Widget"));
    let json = marshal(&g).unwrap();
    assert_eq!(
        json,
        r#"{"value":12.0,"unit":{"name":"Widget","symbol":"wg"},"dimension":"general"}"#
    );
    let m = unmarshal_measurement(&json).unwrap();
    assert_eq!(m.dimension(), "general");
    assert!(!m.is_fallback());
    assert_eq!(m.as_general().unwrap().unit().name(), "Widget");
}

// ─────────────────────────────────────────────────────────────────────────────
// Fallback
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn unknown_dimension_is_kept_as_general() {
    let m = unmarshal_measurement(r#"{"value":9.5,"unit":"warp_factor"}"#).unwrap();
    assert_eq!(m.dimension(), "general");
    assert_eq!(m.value(), 9.5);
    assert_eq!(m.symbol(), "factor");
    assert!(matches!(
        m.fallback_cause(),
        Some(CodecError::UnknownDimension(tag)) if tag == "warp"
    ));

    // The downgraded payload re-encodes as a regular general quantity.
    let again = unmarshal_measurement(m.marshal_with_format(WireFormat::Compact).unwrap()).unwrap();
    assert_eq!(again.dimension(), "general");
    assert_eq!(again.symbol(), "factor");
}

#[test]
fn unknown_unit_of_known_dimension_is_kept_as_general() {
    let m = unmarshal_measurement(
        r#"{"value":4,"unit":{"key":"speed_warp","symbol":"wf"}}"#,
    )
    .unwrap();
    assert_eq!(m.dimension(), "general");
    assert_eq!(m.symbol(), "wf");
    assert!(m.as_speed().is_none());
    assert!(m.fallback_cause().is_some_and(CodecError::is_recoverable));

    // The typed decoder reports the same payload as an error.
    let err = unmarshal::<SpeedUnit>(r#"{"value":4,"unit":{"key":"speed_warp","symbol":"wf"}}"#)
        .unwrap_err();
    assert_eq!(
        err,
        CodecError::UnknownUnit {
            dimension: "speed".into(),
            unit: "wf".into()
        }
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde fields
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
struct Reading {
    #[serde(with = "mensura::serde_compact")]
    supply: Temperature,
    #[serde(with = "mensura::serde_minimal")]
    pressure: Pressure,
    flow: FlowRate,
    extra: AnyMeasurement,
}

#[test]
fn serde_field_helpers() {
    let reading = Reading {
        supply: Temperature::new(45.0, TemperatureUnit::Celsius),
        pressure: Pressure::new(2.0, PressureUnit::Bar),
        flow: FlowRate::new(0.5, FlowRateUnit::LitersPerSecond),
        extra: unmarshal_measurement(r#"{"value":3,"unit":"electric_current_milliampere"}"#)
            .unwrap(),
    };

    let json = serde_json::to_value(&reading).unwrap();
    assert_eq!(json["supply"]["unit"]["key"], "temperature_celsius");
    assert_eq!(json["pressure"]["unit"], "pressure_bar");
    assert_eq!(json["flow"]["dimension"], "flowrate");
    assert_eq!(json["extra"]["dimension"], "electric_current");

    let back: Reading = serde_json::from_value(json).unwrap();
    assert!(back.supply.equal(&reading.supply));
    assert!(back.pressure.equal(&reading.pressure));
    assert!(back.flow.equal(&reading.flow));
    assert_eq!(back.extra, reading.extra);
}

// ─────────────────────────────────────────────────────────────────────────────
// String parsing
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "parse")]
#[test]
fn parse_then_encode() {
    let p: Pressure = "14.7 psi".parse().unwrap();
    assert_eq!(*p.unit(), PressureUnit::Psi);
    let json = marshal_with_format(&p, WireFormat::Compact).unwrap();
    assert_eq!(
        json,
        r#"{"value":14.7,"unit":{"key":"pressure_pounds_per_square_inch","symbol":"psi"}}"#
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn temperature_conversion_inverts(v in -500.0f64..5000.0, i in 0usize..3, j in 0usize..3) {
        let from = TemperatureUnit::ALL[i];
        let to = TemperatureUnit::ALL[j];
        let back = Temperature::new(v, from).convert_to(&to).convert_to(&from);
        prop_assert!((back.value() - v).abs() <= 1e-6 * v.abs().max(1.0));
    }

    #[test]
    fn minimal_round_trip_is_exact(v in -1.0e9f64..1.0e9, i in 0usize..12) {
        let q = Information::new(v, InformationUnit::ALL[i]);
        let json = marshal_with_format(&q, WireFormat::Minimal).unwrap();
        let back: Information = unmarshal(&json).unwrap();
        prop_assert_eq!(back.value(), v);
        prop_assert_eq!(*back.unit(), InformationUnit::ALL[i]);
    }

    #[test]
    fn fallback_is_total(v in -1.0e6f64..1.0e6, tag in "[a-z]{3,8}", name in "[a-z]{3,8}") {
        let json = serde_json::json!({ "value": v, "unit": format!("{}_{}", tag, name) });
        let m = unmarshal_measurement(json.to_string()).unwrap();
        prop_assert_eq!(m.value(), v);
        if Dimension::from_tag(&tag).is_none() {
            prop_assert_eq!(m.dimension(), "general");
        }
    }
}
