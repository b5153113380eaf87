//! Normalisation of heterogeneous polygon input into a single valid region.

mod input;
mod path;
mod region;
mod repair;

use geo::{MultiPolygon, Point, Polygon, Rect};
use ndarray::Array2;
use tracing::debug;

use crate::error::FieldError;

pub use input::GeometricInput;
pub use path::PathCommand;
pub use region::Region;

use input::{coords_to_ring, ring_to_polygon};
use repair::{repair, union_repaired};

/// Normalise `input` into a region.
///
/// Pre-built polygons are trusted as-is. Everything else is repaired and, for
/// multi-part input, unioned; the result is then classified once into
/// `Simple` or `Composite`.
///
/// Valid rings keep their exact coordinates. Parts that need the overlay
/// engine (self-intersecting rings, overlapping parts) are snapped to a grid
/// sized from their combined bounds, so a tiny part unioned with a much
/// larger neighbour loses some precision.
pub fn normalize(input: GeometricInput) -> Result<Region, FieldError> {
    match input {
        GeometricInput::Polygon(polygon) => {
            debug!("pre-validated polygon, skipping repair");
            Ok(Region::Simple(polygon))
        }
        GeometricInput::Ring(ring) => {
            let repaired = repair(&ring_to_polygon(ring.view())?);
            debug!(parts = repaired.0.len(), "repaired single ring");
            Ok(Region::classify(repaired))
        }
        GeometricInput::MultiPolygon(polygons) => Ok(union_parts(polygons.0)),
        GeometricInput::Collection(items) => {
            let mut polygons = Vec::with_capacity(items.len());
            for item in items { collect_polygons(item, &mut polygons)? }
            Ok(union_parts(polygons))
        }
    }
}

fn union_parts(polygons: Vec<Polygon<f64>>) -> Region {
    let union = union_repaired(&polygons);
    debug!(inputs = polygons.len(), parts = union.0.len(), "unioned polygons");
    Region::classify(union)
}

/// Flatten nested input into unrepaired polygons.
fn collect_polygons(input: GeometricInput, polygons: &mut Vec<Polygon<f64>>) -> Result<(), FieldError> {
    match input {
        GeometricInput::Polygon(polygon) => polygons.push(polygon),
        GeometricInput::MultiPolygon(parts) => polygons.extend(parts.0),
        GeometricInput::Ring(ring) => polygons.push(ring_to_polygon(ring.view())?),
        GeometricInput::Collection(items) => {
            for item in items { collect_polygons(item, polygons)? }
        }
    }
    Ok(())
}

/// A polygonal area built once from geometric input and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    region: Region,
}

impl Field {
    /// Build a field from any supported input.
    pub fn new(input: impl Into<GeometricInput>) -> Result<Self, FieldError> {
        Ok(Self { region: normalize(input.into())? })
    }

    /// Wrap a polygon that is already known to be valid.
    pub fn from_polygon(polygon: Polygon<f64>) -> Self {
        Self { region: Region::Simple(polygon) }
    }

    /// Repair and union the parts of a multi-polygon.
    pub fn from_multi_polygon(polygons: MultiPolygon<f64>) -> Self {
        Self { region: union_parts(polygons.0) }
    }

    /// Build from one N×2 ring array.
    pub fn from_ring(ring: Array2<f64>) -> Result<Self, FieldError> {
        Self::new(GeometricInput::Ring(ring))
    }

    /// Build from one ring of (x, y) tuples.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self, FieldError> {
        Self::from_ring(coords_to_ring(coords)?)
    }

    /// Build from several rings and/or polygons.
    pub fn from_collection(items: Vec<GeometricInput>) -> Result<Self, FieldError> {
        Self::new(GeometricInput::Collection(items))
    }

    #[inline] pub fn region(&self) -> &Region { &self.region }

    #[inline] pub fn into_region(self) -> Region { self.region }

    #[inline] pub fn is_composite(&self) -> bool { self.region.is_composite() }

    #[inline] pub fn is_empty(&self) -> bool { self.region.is_empty() }

    #[inline] pub fn area(&self) -> f64 { self.region.area() }

    #[inline] pub fn bounds(&self) -> Option<Rect<f64>> { self.region.bounds() }

    #[inline] pub fn contains(&self, point: &Point<f64>) -> bool { self.region.contains(point) }

    /// Flattened path commands for every boundary, failing on an empty field.
    pub fn to_path(&self) -> Result<Vec<PathCommand>, FieldError> {
        path::region_to_path(&self.region)
    }
}

impl AsRef<Field> for Field {
    fn as_ref(&self) -> &Field { self }
}

#[cfg(test)]
mod tests {
    use geo::polygon;
    use ndarray::array;

    use super::*;

    fn square(x0: f64, y0: f64, size: f64) -> Array2<f64> {
        array![[x0, y0], [x0 + size, y0], [x0 + size, y0 + size], [x0, y0 + size]]
    }

    #[test]
    fn prebuilt_polygon_is_untouched() {
        let polygon = polygon![(x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 1.0), (x: 0.0, y: 1.0)];
        let field = Field::from_polygon(polygon.clone());
        assert_eq!(field.region(), &Region::Simple(polygon));
    }

    #[test]
    fn single_ring_is_simple() {
        let field = Field::from_ring(square(0.0, 0.0, 2.0)).unwrap();
        assert!(!field.is_composite());
        assert!((field.area() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn disjoint_rings_are_composite() {
        let field = Field::from_collection(vec![
            square(0.0, 0.0, 1.0).into(),
            square(5.0, 5.0, 1.0).into(),
        ]).unwrap();
        assert!(field.is_composite());
        assert_eq!(field.region().len(), 2);
    }

    #[test]
    fn overlapping_rings_collapse_to_simple() {
        let field = Field::from_collection(vec![
            square(0.0, 0.0, 2.0).into(),
            square(1.0, 1.0, 2.0).into(),
        ]).unwrap();
        assert!(!field.is_composite());
        assert!((field.area() - 7.0).abs() < 1e-6);
    }

    #[test]
    fn nested_collections_are_flattened() {
        let inner = GeometricInput::Collection(vec![square(0.0, 0.0, 1.0).into()]);
        let field = Field::from_collection(vec![inner, square(3.0, 0.0, 1.0).into()]).unwrap();
        assert_eq!(field.region().len(), 2);
    }

    #[test]
    fn empty_collection_cannot_render() {
        let field = Field::from_collection(vec![]).unwrap();
        assert!(field.is_empty());
        assert_eq!(field.to_path(), Err(FieldError::EmptyGeometry));
    }

    #[test]
    fn malformed_ring_in_collection_fails_whole_build() {
        let bad = GeometricInput::Ring(array![[0.0, 0.0], [1.0, 1.0]]);
        let err = Field::from_collection(vec![square(0.0, 0.0, 1.0).into(), bad]).unwrap_err();
        assert!(matches!(err, FieldError::InvalidRing(_)));
    }

    #[test]
    fn self_intersecting_ring_is_repaired() {
        let bowtie = array![[0.0, 0.0], [2.0, 2.0], [2.0, 0.0], [0.0, 2.0]];
        let field = Field::from_ring(bowtie).unwrap();
        assert!(!field.is_empty());
        assert!(field.to_path().is_ok());
    }
}
