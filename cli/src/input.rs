use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use plotrc::{AngleUnit, Field, FieldError, GeometricInput, SkyCoords, SkyField, Style, DEFAULT_WRAP_ORIGIN};

/// A field description read from JSON.
#[derive(Debug, Deserialize)]
pub struct FieldDocument {
    pub field: FieldSource,
    #[serde(default)]
    pub style: Style,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSource {
    /// One ring of [x, y] pairs.
    Ring(Vec<[f64; 2]>),
    /// Several rings, unioned.
    Rings(Vec<Vec<[f64; 2]>>),
    /// One boundary in a celestial frame.
    Sky(SkySource),
}

#[derive(Debug, Deserialize)]
pub struct SkySource {
    pub frame: String,
    pub lon: Vec<f64>,
    pub lat: Vec<f64>,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default = "default_wrap")]
    pub wrap: bool,
    #[serde(default = "default_wrap_origin")]
    pub wrap_origin: f64,
}

fn default_unit() -> String { "deg".to_string() }

fn default_wrap() -> bool { true }

fn default_wrap_origin() -> f64 { DEFAULT_WRAP_ORIGIN }

impl FieldDocument {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("[input] Failed to read {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("[input] Invalid field description in {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl FieldSource {
    /// Normalise the described geometry into a field.
    pub fn build(self) -> Result<Field, FieldError> {
        match self {
            Self::Ring(points) => Field::from_coords(&to_tuples(&points)),
            Self::Rings(rings) => {
                let items = rings.iter()
                    .map(|points| GeometricInput::ring_from_coords(&to_tuples(points)))
                    .collect::<Result<Vec<_>, _>>()?;
                Field::from_collection(items)
            }
            Self::Sky(sky) => {
                let unit = sky.unit.parse::<AngleUnit>()?;
                let coords = SkyCoords::new(sky.frame.parse()?, sky.lon, sky.lat)?.with_unit(unit);
                let origin = sky.wrap.then_some(sky.wrap_origin);
                Ok(SkyField::new(coords, origin)?.into_field())
            }
        }
    }
}

fn to_tuples(points: &[[f64; 2]]) -> Vec<(f64, f64)> {
    points.iter().map(|&[x, y]| (x, y)).collect()
}
