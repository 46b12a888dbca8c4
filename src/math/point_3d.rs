use super::{Point3, TOLERANCE};

/// Returns the point halfway between `a` and `b`.
#[must_use]
pub fn midpoint(a: &Point3, b: &Point3) -> Point3 {
    Point3::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0, (a.z + b.z) / 2.0)
}

/// Computes the Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point3, b: &Point3) -> f64 {
    (b - a).norm()
}

/// Returns `true` when two points coincide within [`TOLERANCE`].
#[must_use]
pub fn points_coincide(a: &Point3, b: &Point3) -> bool {
    distance(a, b) < TOLERANCE
}
