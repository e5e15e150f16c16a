//! Plane angle units. The base unit is the radian.

use crate::{Dimension, Quantity};
use core::f64::consts::PI;
use mensura_derive::Unit;

/// Units of plane angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = Dimension::Angle)]
pub enum AngleUnit {
    /// Radian (base unit).
    #[unit(symbol = "rad", name = "Radian", base, aliases = ["radians"])]
    Radian,
    /// Degree (`π/180 rad`).
    #[unit(symbol = "°", name = "Degree", coefficient = PI / 180.0, aliases = ["deg", "degrees"])]
    Degree,
    /// Arcminute (`1/60 °`).
    #[unit(symbol = "′", name = "Arcminute", coefficient = PI / 10800.0, aliases = ["arcmin", "arcminutes"])]
    Arcminute,
    /// Arcsecond (`1/3600 °`).
    #[unit(symbol = "″", name = "Arcsecond", coefficient = PI / 648000.0, aliases = ["arcsec", "arcseconds"])]
    Arcsecond,
    /// Full turn.
    #[unit(symbol = "rev", name = "Revolution", coefficient = 2.0 * PI, aliases = ["revolutions", "turn"])]
    Revolution,
    /// Gradian (`1/400` turn).
    #[unit(symbol = "grad", name = "Gradian", coefficient = PI / 200.0, aliases = ["gradians", "gon"])]
    Gradian,
}

/// A plane angle.
pub type Angle = Quantity<AngleUnit>;
