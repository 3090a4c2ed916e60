use crate::math::{Matrix, Point, Real, Vector, DEFAULT_EPSILON, DIM};
use crate::query::details::{obb_farthest_point, obb_nearest_point};
use crate::query::IntersectionType;

/// Classifies the sphere `(center, radius)` relative to an oriented box.
///
/// The columns of `axes` are the unit axes of the box.
pub fn classify_sphere_obb(
    center: &Point<Real>,
    radius: Real,
    obb_center: &Point<Real>,
    axes: &Matrix<Real>,
    half_extents: &Vector<Real>,
) -> IntersectionType {
    let sq_radius = radius * radius;

    let farthest = obb_farthest_point(center, obb_center, axes, half_extents);
    if na::distance_squared(center, &farthest) <= sq_radius {
        return IntersectionType::Enclosing;
    }

    let nearest = obb_nearest_point(center, obb_center, axes, half_extents);
    let sq_dist = na::distance_squared(center, &nearest);

    if sq_dist > sq_radius + DEFAULT_EPSILON {
        return IntersectionType::Outside;
    }

    if sq_dist <= DEFAULT_EPSILON {
        // The sphere center is inside of the box.
        let local = axes.tr_mul(&(center - obb_center));
        let fits = (0..DIM).all(|i| local[i].abs() + radius <= half_extents[i]);

        return if fits {
            IntersectionType::Inside
        } else {
            IntersectionType::Spanning
        };
    }

    IntersectionType::Spanning
}

/// Tests if the sphere `(center, radius)` and an oriented box overlap.
#[inline]
pub fn intersects_sphere_obb(
    center: &Point<Real>,
    radius: Real,
    obb_center: &Point<Real>,
    axes: &Matrix<Real>,
    half_extents: &Vector<Real>,
) -> bool {
    let nearest = obb_nearest_point(center, obb_center, axes, half_extents);
    na::distance_squared(center, &nearest) <= radius * radius + DEFAULT_EPSILON
}
