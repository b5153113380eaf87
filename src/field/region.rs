use geo::{Area, BoundingRect, Contains, Coord, MultiPolygon, Point, Polygon, Rect};

/// A normalised geometric region.
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    /// One exterior boundary plus zero or more holes.
    Simple(Polygon<f64>),
    /// Mutually disjoint simple polygons (possibly none).
    Composite(MultiPolygon<f64>),
}

impl Region {
    /// Classify a union result: exactly one part is `Simple`, anything else is `Composite`.
    pub(crate) fn classify(mut polygons: MultiPolygon<f64>) -> Self {
        if polygons.0.len() == 1 {
            Self::Simple(polygons.0.remove(0))
        } else {
            Self::Composite(polygons)
        }
    }

    #[inline] pub fn is_composite(&self) -> bool { matches!(self, Self::Composite(_)) }

    /// Iterate the constituent simple polygons.
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon<f64>> {
        match self {
            Self::Simple(polygon) => std::slice::from_ref(polygon).iter(),
            Self::Composite(polygons) => polygons.0.iter(),
        }
    }

    /// Number of simple polygons.
    #[inline] pub fn len(&self) -> usize { self.polygons().count() }

    /// A region is empty when it encloses no area.
    #[inline] pub fn is_empty(&self) -> bool { self.area() == 0.0 }

    /// Unsigned area, holes subtracted.
    pub fn area(&self) -> f64 {
        self.polygons().map(|polygon| polygon.unsigned_area()).sum()
    }

    /// Axis-aligned bounds, `None` when there are no coordinates.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.polygons()
            .filter_map(|polygon| polygon.bounding_rect())
            .reduce(|a, b| Rect::new(
                Coord { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
                Coord { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
            ))
    }

    /// Whether `point` lies strictly inside the region.
    pub fn contains(&self, point: &Point<f64>) -> bool {
        self.polygons().any(|polygon| polygon.contains(point))
    }

    /// Copy the region into a `MultiPolygon`, regardless of variant.
    pub fn to_multi_polygon(&self) -> MultiPolygon<f64> {
        MultiPolygon::new(self.polygons().cloned().collect())
    }
}
