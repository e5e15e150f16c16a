//! Minimal end-to-end example: convert a temperature, add pressures and parse a reading.

use mensura::{Pressure, PressureUnit, Temperature, TemperatureUnit};

fn main() {
    let supply = Temperature::new(45.0, TemperatureUnit::Celsius);
    let f = supply.convert_to(&TemperatureUnit::Fahrenheit);
    assert!((f.value() - 113.0).abs() < 1e-9);
    println!("{} = {}", supply, f);

    let total = Pressure::new(1.0, PressureUnit::Bar) + Pressure::new(50.0, PressureUnit::Kilopascal);
    assert!((total.value() - 1.5).abs() < 1e-12);
    println!("1 bar + 50 kPa = {}", total);

    let reading: Pressure = "14.7 psi".parse().expect("valid reading");
    println!("parsed {} = {}", reading, reading.convert_to(&PressureUnit::Kilopascal));
}
