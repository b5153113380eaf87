//! Fields on the celestial sphere.

mod frame;
mod wrap;

use ndarray::{stack, Array1, Axis};
use tracing::debug;

use crate::error::FieldError;
use crate::field::{Field, PathCommand, Region};

pub use frame::{AngleUnit, Frame};
pub use wrap::{wrap_at, DEFAULT_WRAP_ORIGIN};

/// Raw sky coordinates of one boundary: a frame, a unit and two equal-length axes.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyCoords {
    frame: Frame,
    unit: AngleUnit,
    lon: Array1<f64>,
    lat: Array1<f64>,
}

impl SkyCoords {
    /// Longitude-like and latitude-like axes in degrees.
    pub fn new(frame: Frame, lon: impl Into<Array1<f64>>, lat: impl Into<Array1<f64>>) -> Result<Self, FieldError> {
        let (lon, lat) = (lon.into(), lat.into());
        if lon.len() != lat.len() {
            return Err(FieldError::AxisMismatch { lon: lon.len(), lat: lat.len() });
        }
        Ok(Self { frame, unit: AngleUnit::Degree, lon, lat })
    }

    /// Interpret both axes in `unit` instead of degrees.
    pub fn with_unit(mut self, unit: AngleUnit) -> Self {
        self.unit = unit;
        self
    }

    #[inline] pub fn frame(&self) -> Frame { self.frame }

    #[inline] pub fn unit(&self) -> AngleUnit { self.unit }

    #[inline] pub fn len(&self) -> usize { self.lon.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.lon.is_empty() }
}

/// A [`Field`] whose boundary was given in a celestial frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyField {
    field: Field,
    frame: Frame,
    wrap_origin: Option<f64>,
}

impl SkyField {
    /// Build from sky coordinates, optionally folding longitudes at `wrap_origin` degrees.
    ///
    /// The coordinates are consumed; only the plain degree arrays survive into the field.
    pub fn new(coords: SkyCoords, wrap_origin: Option<f64>) -> Result<Self, FieldError> {
        let SkyCoords { frame, unit, lon, lat } = coords;

        let mut lon = lon.mapv(|v| unit.to_degrees(v));
        let lat = lat.mapv(|v| unit.to_degrees(v));

        if let Some(origin) = wrap_origin {
            debug!(%frame, origin, "wrapping longitude axis");
            lon.mapv_inplace(|v| wrap_at(v, origin));
        }

        let ring = stack(Axis(1), &[lon.view(), lat.view()])
            .map_err(|err| FieldError::InvalidRing(err.to_string()))?;

        Ok(Self { field: Field::from_ring(ring)?, frame, wrap_origin })
    }

    /// Parse `frame` and build in degrees, wrapped at 180°.
    pub fn from_frame(frame: &str, lon: Vec<f64>, lat: Vec<f64>) -> Result<Self, FieldError> {
        let frame = frame.parse::<Frame>()?;
        Self::new(SkyCoords::new(frame, lon, lat)?, Some(DEFAULT_WRAP_ORIGIN))
    }

    #[inline] pub fn frame(&self) -> Frame { self.frame }

    #[inline] pub fn is_wrapped(&self) -> bool { self.wrap_origin.is_some() }

    #[inline] pub fn wrap_origin(&self) -> Option<f64> { self.wrap_origin }

    #[inline] pub fn field(&self) -> &Field { &self.field }

    #[inline] pub fn into_field(self) -> Field { self.field }

    #[inline] pub fn region(&self) -> &Region { self.field.region() }

    #[inline] pub fn to_path(&self) -> Result<Vec<PathCommand>, FieldError> { self.field.to_path() }
}

impl AsRef<Field> for SkyField {
    fn as_ref(&self) -> &Field { &self.field }
}
