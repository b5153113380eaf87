use thiserror::Error;

/// Errors raised while building or rendering a field.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    /// Sky coordinate frame other than equatorial or galactic.
    #[error("unsupported coordinate frame {0:?}, use equatorial (ra/dec) or galactic (l/b)")]
    UnsupportedFrame(String),

    /// Rendering was requested on a region with no area.
    #[error("field is empty, cannot create patch")]
    EmptyGeometry,

    /// A ring array has the wrong shape or contains non-finite values.
    #[error("invalid ring: {0}")]
    InvalidRing(String),

    /// Angle unit name not recognised.
    #[error("unknown angle unit {0:?}, expected deg, rad or hourangle")]
    UnknownUnit(String),

    /// Anchor location name not recognised.
    #[error("unknown anchor location {0:?}")]
    UnknownLocation(String),

    /// Longitude and latitude arrays differ in length.
    #[error("axis length mismatch: {lon} longitudes, {lat} latitudes")]
    AxisMismatch { lon: usize, lat: usize },
}
