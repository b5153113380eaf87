/// Default longitude wrap origin, in degrees.
pub const DEFAULT_WRAP_ORIGIN: f64 = 180.0;

/// Fold an angle in degrees into the half-open interval `(origin - 360, origin]`.
pub fn wrap_at(angle: f64, origin: f64) -> f64 {
    let lower = origin - 360.0;
    let offset = (angle - lower).rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative offsets
    if offset == 0.0 || offset == 360.0 { origin } else { lower + offset }
}
