use crate::bounding_volume::details::local_point_cloud_aabb;
use crate::math::{Point, Real};

/// Computes the bounding sphere of a set of point, given its center.
#[inline]
pub fn point_cloud_bounding_sphere_with_center(
    pts: &[Point<Real>],
    center: Point<Real>,
) -> (Point<Real>, Real) {
    let mut sqradius = 0.0;

    for pt in pts.iter() {
        let distance_squared = na::distance_squared(pt, &center);

        if distance_squared > sqradius {
            sqradius = distance_squared
        }
    }

    (center, sqradius.sqrt())
}

/// Computes a bounding sphere of the specified set of point.
///
/// The sphere is centered on the AABB of the points, which is not the center
/// of the minimal enclosing sphere in general. Returns `None` if `pts` is
/// empty.
#[inline]
pub fn point_cloud_bounding_sphere(pts: &[Point<Real>]) -> Option<(Point<Real>, Real)> {
    let aabb = local_point_cloud_aabb(pts)?;
    Some(point_cloud_bounding_sphere_with_center(pts, aabb.center()))
}
