// Integration tests for sky fields and longitude wrapping.

use plotrc::{wrap_at, Field, FieldError, Frame, PathCommand, Region, SkyCoords, SkyField, DEFAULT_WRAP_ORIGIN};

#[test]
fn equatorial_square_has_four_points_and_no_holes() {
    let sky = SkyField::from_frame("equatorial", vec![10.0, 20.0, 20.0, 10.0], vec![10.0, 10.0, 20.0, 20.0]).unwrap();

    let Region::Simple(polygon) = sky.region() else { panic!("expected a simple region") };
    let ring = &polygon.exterior().0;
    assert_eq!(ring.len(), 5);
    assert_eq!(ring.first(), ring.last());
    assert!(polygon.interiors().is_empty());

    for c in &ring[..4] {
        assert!([10.0, 20.0].iter().any(|v| (c.x - v).abs() < 1e-6));
        assert!([10.0, 20.0].iter().any(|v| (c.y - v).abs() < 1e-6));
    }

    let path = sky.to_path().unwrap();
    assert!(matches!(path.first(), Some(PathCommand::MoveTo(_))));
    assert!(matches!(path.last(), Some(PathCommand::Close(_))));
}

#[test]
fn x_ray_frame_is_unsupported() {
    let err = SkyField::from_frame("x-ray", vec![10.0, 20.0, 20.0], vec![10.0, 10.0, 20.0]).unwrap_err();
    assert!(matches!(err, FieldError::UnsupportedFrame(name) if name == "x-ray"));
}

#[test]
fn wrap_at_default_origin() {
    assert_eq!(wrap_at(270.0, DEFAULT_WRAP_ORIGIN), -90.0);
    assert_eq!(wrap_at(90.0, DEFAULT_WRAP_ORIGIN), 90.0);
}

#[test]
fn galactic_field_straddling_origin_is_contiguous_after_wrap() {
    let coords = SkyCoords::new(Frame::Galactic, vec![350.0, 10.0, 10.0, 350.0], vec![-5.0, -5.0, 5.0, 5.0]).unwrap();

    // unwrapped, 350..10 spans most of the sky
    let wide = SkyField::new(coords.clone(), None).unwrap();
    // folded at 180, the box spans -10..10
    let narrow = SkyField::new(coords, Some(DEFAULT_WRAP_ORIGIN)).unwrap();

    assert!((wide.field().area() - 340.0 * 10.0).abs() < 1e-3);
    assert!((narrow.field().area() - 20.0 * 10.0).abs() < 1e-3);
    assert_eq!(narrow.frame().axis_names(), ("l", "b"));
}

#[test]
fn sky_field_draws_like_a_field() {
    let sky = SkyField::from_frame("icrs", vec![0.0, 30.0, 30.0, 0.0], vec![0.0, 0.0, 30.0, 30.0]).unwrap();
    let field: &Field = sky.as_ref();
    assert_eq!(field.to_path().unwrap(), sky.to_path().unwrap());
}
