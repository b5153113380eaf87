// Integration tests for field normalisation: repair, union and classification.

use geo::{polygon, MultiPolygon, Polygon};
use plotrc::{normalize, Field, FieldError, GeometricInput, Region};
use proptest::prelude::*;

fn rect(x0: f64, y0: f64, w: f64, h: f64) -> Polygon<f64> {
    polygon![(x: x0, y: y0), (x: x0 + w, y: y0), (x: x0 + w, y: y0 + h), (x: x0, y: y0 + h)]
}

#[test]
fn repair_is_idempotent_on_valid_rings() {
    let coords = [(0.1, 0.3), (3.7, 0.2), (3.3, 2.9), (0.3, 2.1)];
    let input = polygon![(x: 0.1, y: 0.3), (x: 3.7, y: 0.2), (x: 3.3, y: 2.9), (x: 0.3, y: 2.1)];

    let once = Field::from_coords(&coords).unwrap();
    let Region::Simple(polygon) = once.region().clone() else { panic!("expected a simple region") };
    assert_eq!(polygon, input);

    let twice = normalize(GeometricInput::MultiPolygon(MultiPolygon::new(vec![polygon.clone()]))).unwrap();
    assert_eq!(twice, Region::Simple(input));
}

#[test]
fn small_part_far_away_keeps_its_area() {
    let field = Field::from_multi_polygon(MultiPolygon::new(vec![rect(0.0, 0.0, 1e-2, 1e-2), rect(1e6, 1e6, 1.0, 1.0)]));
    assert!(field.is_composite());
    assert!((field.area() - 1.0001).abs() < 1e-9);
}

#[test]
fn multi_polygon_with_touching_parts_merges() {
    let field = Field::from_multi_polygon(MultiPolygon::new(vec![rect(0.0, 0.0, 1.0, 1.0), rect(1.0, 0.0, 1.0, 1.0)]));
    assert!(!field.is_composite());
    assert!((field.area() - 2.0).abs() < 1e-6);
}

#[test]
fn ring_around_hole_keeps_the_hole() {
    let frame = vec![
        GeometricInput::Polygon(rect(0.0, 0.0, 3.0, 1.0)),
        GeometricInput::Polygon(rect(0.0, 2.0, 3.0, 1.0)),
        GeometricInput::Polygon(rect(0.0, 0.0, 1.0, 3.0)),
        GeometricInput::Polygon(rect(2.0, 0.0, 1.0, 3.0)),
    ];
    let field = Field::from_collection(frame).unwrap();
    let Region::Simple(polygon) = field.region() else { panic!("expected a simple region") };
    assert_eq!(polygon.interiors().len(), 1);
    assert!((field.area() - 8.0).abs() < 1e-6);

    // exterior then hole: two moves, two closes
    let path = field.to_path().unwrap();
    let moves = path.iter().filter(|c| matches!(c, plotrc::PathCommand::MoveTo(_))).count();
    assert_eq!(moves, 2);
}

#[test]
fn empty_region_never_yields_a_path() {
    let field = Field::from_multi_polygon(MultiPolygon::new(vec![]));
    assert!(field.is_empty());
    assert_eq!(field.to_path(), Err(FieldError::EmptyGeometry));
}

proptest! {
    #[test]
    fn disjoint_parts_are_preserved(
        n in 2usize..6,
        w in 0.5f64..5.0,
        h in 0.5f64..5.0,
        gap in 1.0f64..10.0,
    ) {
        let parts = (0..n)
            .map(|i| rect(i as f64 * (w + gap), 0.0, w, h))
            .collect::<Vec<_>>();
        let field = Field::from_multi_polygon(MultiPolygon::new(parts));

        prop_assert!(field.is_composite());
        prop_assert_eq!(field.region().len(), n);
        prop_assert!((field.area() - n as f64 * w * h).abs() < 1e-6 * n as f64 * w * h + 1e-6);
    }

    #[test]
    fn union_never_increases_part_count(
        xs in prop::collection::vec(0.0f64..20.0, 1..8),
        size in 1.0f64..6.0,
    ) {
        let parts = xs.iter()
            .map(|&x| rect(x, (x * 7.0) % 5.0, size, size))
            .collect::<Vec<_>>();
        let count = parts.len();
        let field = Field::from_multi_polygon(MultiPolygon::new(parts));

        prop_assert!(field.region().len() <= count);
        prop_assert!(field.region().len() >= 1);
        prop_assert_eq!(field.is_composite(), field.region().len() != 1);
    }
}
