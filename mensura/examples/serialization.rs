//! Encoding quantities in the three wire formats and decoding them back, with and without a known dimension.
//!
//! ```bash
//! cargo run --example serialization
//! ```

use mensura::{
    marshal_with_format, unmarshal, unmarshal_measurement, FuelEfficiency, FuelEfficiencyUnit,
    WireFormat,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Trip {
    #[serde(with = "mensura::serde_compact")]
    consumption: FuelEfficiency,
    odometer: mensura::Length,
}

fn main() {
    println!("=== Wire Formats ===\n");
    println!("1. One quantity, three shapes:");

    let consumption = FuelEfficiency::new(5.8, FuelEfficiencyUnit::LitersPer100Kilometers);
    for format in [WireFormat::Full, WireFormat::Compact, WireFormat::Minimal] {
        let json = marshal_with_format(&consumption, format).unwrap();
        let back: FuelEfficiency = unmarshal(&json).unwrap();
        println!("   {:?}: {} → {}", format, json, back);
    }
    println!();

    println!("2. Decoding without a known dimension:");
    for payload in [
        r#"{"value":21.5,"unit":{"name":"Celsius","symbol":"°C"},"dimension":"temperature"}"#,
        r#"{"value":3,"unit":"electric_charge_ampere-hour"}"#,
        r#"{"value":9,"unit":"warp_factor"}"#,
    ] {
        let m = unmarshal_measurement(payload).unwrap();
        match m.fallback_cause() {
            Some(cause) => println!("   {} → {} (general, {})", payload, m, cause),
            None => println!("   {} → {} ({})", payload, m, m.dimension()),
        }
    }
    println!();

    println!("3. Struct fields:");
    let trip = Trip {
        consumption,
        odometer: mensura::Length::new(412.0, mensura::LengthUnit::Kilometer),
    };
    let json = serde_json::to_string_pretty(&trip).unwrap();
    println!("{}", json);
    let restored: Trip = serde_json::from_str(&json).unwrap();
    println!("   restored: {:?}", restored);
}
