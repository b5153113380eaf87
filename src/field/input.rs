use geo::{Coord, LineString, MultiPolygon, Polygon};
use ndarray::{Array2, ArrayView2};

use crate::error::FieldError;

/// Heterogeneous geometric input accepted by a [`Field`](super::Field).
#[derive(Debug, Clone, PartialEq)]
pub enum GeometricInput {
    /// An already-validated simple polygon, used as-is.
    Polygon(Polygon<f64>),
    /// An already-validated collection of simple polygons.
    MultiPolygon(MultiPolygon<f64>),
    /// One boundary as an N×2 array of (x, y) rows.
    Ring(Array2<f64>),
    /// Any mix of the above, each converted independently and then unioned.
    Collection(Vec<GeometricInput>),
}

impl GeometricInput {
    /// A `Ring` built from (x, y) tuples.
    pub fn ring_from_coords(coords: &[(f64, f64)]) -> Result<Self, FieldError> {
        Ok(Self::Ring(coords_to_ring(coords)?))
    }
}

impl From<Polygon<f64>> for GeometricInput {
    fn from(polygon: Polygon<f64>) -> Self { Self::Polygon(polygon) }
}

impl From<MultiPolygon<f64>> for GeometricInput {
    fn from(polygons: MultiPolygon<f64>) -> Self { Self::MultiPolygon(polygons) }
}

impl From<Array2<f64>> for GeometricInput {
    fn from(ring: Array2<f64>) -> Self { Self::Ring(ring) }
}

impl From<Vec<GeometricInput>> for GeometricInput {
    fn from(items: Vec<GeometricInput>) -> Self { Self::Collection(items) }
}

/// Pack (x, y) tuples into an N×2 ring array.
pub(crate) fn coords_to_ring(coords: &[(f64, f64)]) -> Result<Array2<f64>, FieldError> {
    let flat = coords.iter().flat_map(|&(x, y)| [x, y]).collect::<Vec<_>>();
    Array2::from_shape_vec((coords.len(), 2), flat)
        .map_err(|err| FieldError::InvalidRing(err.to_string()))
}

/// Build an unrepaired polygon from an N×2 ring array.
///
/// The ring must have two columns, at least three rows and only finite values.
/// Closing the ring is left to `Polygon::new`.
pub(crate) fn ring_to_polygon(ring: ArrayView2<f64>) -> Result<Polygon<f64>, FieldError> {
    let (rows, cols) = ring.dim();
    if cols != 2 {
        return Err(FieldError::InvalidRing(format!("expected an N×2 array, got {rows}×{cols}")));
    }
    if rows < 3 {
        return Err(FieldError::InvalidRing(format!("a ring needs at least 3 points, got {rows}")));
    }

    let coords = ring.rows().into_iter()
        .map(|row| Coord { x: row[0], y: row[1] })
        .collect::<Vec<_>>();

    if let Some(bad) = coords.iter().find(|c| !(c.x.is_finite() && c.y.is_finite())) {
        return Err(FieldError::InvalidRing(format!("non-finite coordinate ({}, {})", bad.x, bad.y)));
    }

    Ok(Polygon::new(LineString::new(coords), vec![]))
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn ring_is_closed_by_polygon() {
        let polygon = ring_to_polygon(array![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]].view()).unwrap();
        let ext = &polygon.exterior().0;
        assert_eq!(ext.len(), 4);
        assert_eq!(ext.first(), ext.last());
    }

    #[test]
    fn rejects_wrong_width() {
        let err = ring_to_polygon(array![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]].view()).unwrap_err();
        assert!(matches!(err, FieldError::InvalidRing(_)));
    }

    #[test]
    fn rejects_too_few_points() {
        let err = ring_to_polygon(array![[0.0, 0.0], [1.0, 1.0]].view()).unwrap_err();
        assert!(matches!(err, FieldError::InvalidRing(_)));
    }

    #[test]
    fn rejects_nan() {
        let err = ring_to_polygon(array![[0.0, 0.0], [f64::NAN, 0.0], [1.0, 1.0]].view()).unwrap_err();
        assert!(matches!(err, FieldError::InvalidRing(_)));
    }

    #[test]
    fn coords_pack_row_major() {
        let ring = coords_to_ring(&[(1.0, 2.0), (3.0, 4.0)]).unwrap();
        assert_eq!(ring, array![[1.0, 2.0], [3.0, 4.0]]);
    }
}
