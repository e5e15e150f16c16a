//! Predefined unit catalogs grouped by dimension.
//!
//! Each module defines one unit enum deriving [`Unit`](crate::Unit) and [`UnitCatalog`](crate::UnitCatalog), plus
//! a `Quantity` alias named after the dimension (`PressureUnit` and `Pressure`, `LengthUnit` and `Length`, …).
//! The derive turns the `#[unit(...)]` tables into conversion code and the registry entries used by the wire codec
//! and the string parser.
//!
//! [`general`] is different: its unit is built at runtime and serves as the fallback for data no catalog knows.

pub mod acceleration;
pub mod angle;
pub mod area;
pub mod concentration;
pub mod dispersion;
pub mod duration;
pub mod electric_charge;
pub mod electric_current;
pub mod electric_potential_difference;
pub mod energy;
pub mod flow_rate;
pub mod frequency;
pub mod fuel_efficiency;
pub mod general;
pub mod illuminance;
pub mod information;
pub mod length;
pub mod mass;
pub mod power;
pub mod pressure;
pub mod speed;
pub mod temperature;
pub mod volume;

pub use acceleration::{Acceleration, AccelerationUnit};
pub use angle::{Angle, AngleUnit};
pub use area::{Area, AreaUnit};
pub use concentration::{Concentration, ConcentrationUnit};
pub use dispersion::{Dispersion, DispersionUnit};
pub use duration::{Duration, DurationUnit};
pub use electric_charge::{ElectricCharge, ElectricChargeUnit};
pub use electric_current::{ElectricCurrent, ElectricCurrentUnit};
pub use electric_potential_difference::{
    ElectricPotentialDifference, ElectricPotentialDifferenceUnit,
};
pub use energy::{Energy, EnergyUnit};
pub use flow_rate::{FlowRate, FlowRateUnit};
pub use frequency::{Frequency, FrequencyUnit};
pub use fuel_efficiency::{FuelEfficiency, FuelEfficiencyUnit};
pub use general::{General, GeneralUnit};
pub use illuminance::{Illuminance, IlluminanceUnit};
pub use information::{Information, InformationUnit};
pub use length::{Length, LengthUnit};
pub use mass::{Mass, MassUnit};
pub use power::{Power, PowerUnit};
pub use pressure::{Pressure, PressureUnit};
pub use speed::{Speed, SpeedUnit};
pub use temperature::{Temperature, TemperatureUnit};
pub use volume::{Volume, VolumeUnit};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Unit, UnitCatalog};
    use approx::assert_relative_eq;

    fn check_catalog<U: UnitCatalog>() {
        let bases: Vec<&U> = U::ALL.iter().filter(|u| u.is_base_unit()).collect();
        assert_eq!(bases.len(), 1, "{} needs one base unit", U::DIMENSION);
        assert_eq!(*bases[0], U::BASE);
        assert_eq!(U::BASE.coefficient(), 1.0);
        assert_eq!(U::BASE.offset(), 0.0);

        let mut symbols: Vec<&str> = U::ALL.iter().map(|u| u.symbol()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), U::ALL.len(), "{} symbols must be unique", U::DIMENSION);

        for unit in U::ALL {
            assert_eq!(unit.dimension(), U::DIMENSION.as_str());
            assert_eq!(U::from_symbol(unit.symbol()), Some(*unit));
            for sample in [-12.5, 0.5, 3.0, 1234.0] {
                let back = unit.convert_from_base(unit.convert_to_base(sample));
                assert_relative_eq!(back, sample, max_relative = 1e-9);
            }
            for key in unit.keys() {
                assert!(key.starts_with(U::DIMENSION.as_str()), "{} is not a {} key", key, U::DIMENSION);
                assert_eq!(U::from_key(key), Some(*unit), "{}", key);
            }
        }
    }

    #[test]
    fn every_catalog_is_well_formed() {
        check_catalog::<AccelerationUnit>();
        check_catalog::<AngleUnit>();
        check_catalog::<AreaUnit>();
        check_catalog::<ConcentrationUnit>();
        check_catalog::<DispersionUnit>();
        check_catalog::<DurationUnit>();
        check_catalog::<ElectricChargeUnit>();
        check_catalog::<ElectricCurrentUnit>();
        check_catalog::<ElectricPotentialDifferenceUnit>();
        check_catalog::<EnergyUnit>();
        check_catalog::<FlowRateUnit>();
        check_catalog::<FrequencyUnit>();
        check_catalog::<FuelEfficiencyUnit>();
        check_catalog::<IlluminanceUnit>();
        check_catalog::<InformationUnit>();
        check_catalog::<LengthUnit>();
        check_catalog::<MassUnit>();
        check_catalog::<PowerUnit>();
        check_catalog::<PressureUnit>();
        check_catalog::<SpeedUnit>();
        check_catalog::<TemperatureUnit>();
        check_catalog::<VolumeUnit>();
    }
}
