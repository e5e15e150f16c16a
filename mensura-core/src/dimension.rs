//! Dimension tags.

use core::fmt::{Display, Formatter, Result};

/// The closed set of **dimensions** known to this crate.
///
/// A *dimension* is the family of mutually convertible units: a metre and a mile are both `Length`, a pascal is
/// `Pressure`. The string tag ([`Dimension::as_str`]) is what travels on the wire and what [`Unit::dimension`]
/// returns for the predefined units.
///
/// [`Unit::dimension`]: crate::Unit::dimension
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    /// `acceleration`
    Acceleration,
    /// `angle`
    Angle,
    /// `area`
    Area,
    /// `concentration`
    Concentration,
    /// `dispersion`
    Dispersion,
    /// `duration`
    Duration,
    /// `electric_charge`
    ElectricCharge,
    /// `electric_current`
    ElectricCurrent,
    /// `electric_potential_difference`
    ElectricPotentialDifference,
    /// `energy`
    Energy,
    /// `flowrate`
    FlowRate,
    /// `frequency`
    Frequency,
    /// `fuel_efficiency`
    FuelEfficiency,
    /// `general`, the fallback dimension for otherwise unrecognized data.
    General,
    /// `illuminance`
    Illuminance,
    /// `information`
    Information,
    /// `length`
    Length,
    /// `mass`
    Mass,
    /// `power`
    Power,
    /// `pressure`
    Pressure,
    /// `speed`
    Speed,
    /// `temperature`
    Temperature,
    /// `volume`
    Volume,
}

impl Dimension {
    /// Every dimension, in tag order.
    pub const ALL: [Dimension; 23] = [
        Dimension::Acceleration,
        Dimension::Angle,
        Dimension::Area,
        Dimension::Concentration,
        Dimension::Dispersion,
        Dimension::Duration,
        Dimension::ElectricCharge,
        Dimension::ElectricCurrent,
        Dimension::ElectricPotentialDifference,
        Dimension::Energy,
        Dimension::FlowRate,
        Dimension::Frequency,
        Dimension::FuelEfficiency,
        Dimension::General,
        Dimension::Illuminance,
        Dimension::Information,
        Dimension::Length,
        Dimension::Mass,
        Dimension::Power,
        Dimension::Pressure,
        Dimension::Speed,
        Dimension::Temperature,
        Dimension::Volume,
    ];

    /// The wire tag of this dimension.
    ///
    /// ```rust
    /// use mensura_core::Dimension;
    /// assert_eq!(Dimension::FuelEfficiency.as_str(), "fuel_efficiency");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            Dimension::Acceleration => "acceleration",
            Dimension::Angle => "angle",
            Dimension::Area => "area",
            Dimension::Concentration => "concentration",
            Dimension::Dispersion => "dispersion",
            Dimension::Duration => "duration",
            Dimension::ElectricCharge => "electric_charge",
            Dimension::ElectricCurrent => "electric_current",
            Dimension::ElectricPotentialDifference => "electric_potential_difference",
            Dimension::Energy => "energy",
            Dimension::FlowRate => "flowrate",
            Dimension::Frequency => "frequency",
            Dimension::FuelEfficiency => "fuel_efficiency",
            Dimension::General => "general",
            Dimension::Illuminance => "illuminance",
            Dimension::Information => "information",
            Dimension::Length => "length",
            Dimension::Mass => "mass",
            Dimension::Power => "power",
            Dimension::Pressure => "pressure",
            Dimension::Speed => "speed",
            Dimension::Temperature => "temperature",
            Dimension::Volume => "volume",
        }
    }

    /// Looks up a dimension by its exact wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.as_str() == tag)
    }

    /// Finds the dimension a compact key (`dimension_unitname`) belongs to.
    ///
    /// Several tags contain underscores themselves, so the longest tag followed by `_` wins.
    ///
    /// ```rust
    /// use mensura_core::Dimension;
    /// assert_eq!(
    ///     Dimension::from_key_prefix("electric_charge_coulomb"),
    ///     Some(Dimension::ElectricCharge)
    /// );
    /// assert_eq!(Dimension::from_key_prefix("warp_factor"), None);
    /// ```
    pub fn from_key_prefix(key: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(|d| {
                key.strip_prefix(d.as_str())
                    .is_some_and(|rest| rest.starts_with('_'))
            })
            .max_by_key(|d| d.as_str().len())
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}
