#![doc = "plotrc public API"]
mod error;
mod field;
mod figure;
mod io;
mod numbers;
mod sky;

#[doc(inline)]
pub use error::FieldError;

#[doc(inline)]
pub use field::{normalize, Field, GeometricInput, PathCommand, Region};

#[doc(inline)]
pub use figure::{Figure, Loc, Style};

#[doc(inline)]
pub use numbers::{diverr, diverr_array, equal_eps, multerr, multerr_array};

#[doc(inline)]
pub use sky::{wrap_at, AngleUnit, Frame, SkyCoords, SkyField, DEFAULT_WRAP_ORIGIN};
