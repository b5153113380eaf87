use std::{fmt, str::FromStr};

use crate::error::FieldError;

/// Celestial coordinate frames a sky field can be drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// ICRS right ascension / declination.
    Equatorial,
    /// Galactic longitude / latitude.
    Galactic,
}

impl Frame {
    /// Names of the (longitude, latitude) axes.
    pub fn axis_names(&self) -> (&'static str, &'static str) {
        match self {
            Self::Equatorial => ("ra", "dec"),
            Self::Galactic => ("l", "b"),
        }
    }
}

impl FromStr for Frame {
    type Err = FieldError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "icrs" | "equatorial" => Ok(Self::Equatorial),
            "galactic" => Ok(Self::Galactic),
            _ => Err(FieldError::UnsupportedFrame(name.to_string())),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equatorial => f.write_str("icrs"),
            Self::Galactic => f.write_str("galactic"),
        }
    }
}

/// Unit of the raw axis values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Degree,
    Radian,
    /// 1 hour = 15°.
    HourAngle,
}

impl AngleUnit {
    #[inline]
    pub fn to_degrees(&self, value: f64) -> f64 {
        match self {
            Self::Degree => value,
            Self::Radian => value.to_degrees(),
            Self::HourAngle => value * 15.0,
        }
    }
}

impl FromStr for AngleUnit {
    type Err = FieldError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "deg" | "degree" | "degrees" => Ok(Self::Degree),
            "rad" | "radian" | "radians" => Ok(Self::Radian),
            "hourangle" | "hour" | "h" => Ok(Self::HourAngle),
            _ => Err(FieldError::UnknownUnit(name.to_string())),
        }
    }
}
