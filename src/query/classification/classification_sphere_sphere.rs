use crate::math::{Point, Real};
use crate::query::IntersectionType;

/// Classifies the sphere `(center1, radius1)` relative to the sphere `(center2, radius2)`.
///
/// Tangent spheres are considered overlapping.
pub fn classify_sphere_sphere(
    center1: &Point<Real>,
    radius1: Real,
    center2: &Point<Real>,
    radius2: Real,
) -> IntersectionType {
    let dist = na::distance(center1, center2);

    if dist > radius1 + radius2 {
        IntersectionType::Outside
    } else if center1 == center2 && radius1 == radius2 {
        IntersectionType::Same
    } else if dist + radius1 <= radius2 {
        IntersectionType::Inside
    } else if dist + radius2 <= radius1 {
        IntersectionType::Enclosing
    } else {
        IntersectionType::Spanning
    }
}

/// Tests if two spheres overlap.
#[inline]
pub fn intersects_sphere_sphere(
    center1: &Point<Real>,
    radius1: Real,
    center2: &Point<Real>,
    radius2: Real,
) -> bool {
    let sum_radius = radius1 + radius2;
    na::distance_squared(center1, center2) <= sum_radius * sum_radius
}
