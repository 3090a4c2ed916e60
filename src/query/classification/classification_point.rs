use crate::math::{Matrix, Point, Real, Vector, DIM};
use crate::query::IntersectionType;

#[inline]
fn inside_or_outside(inside: bool) -> IntersectionType {
    if inside {
        IntersectionType::Inside
    } else {
        IntersectionType::Outside
    }
}

/// Classifies a point relative to the box `[mins, maxs]`.
///
/// Points on the boundary are `Inside`.
#[inline]
pub fn classify_point_aabb(
    pt: &Point<Real>,
    mins: &Point<Real>,
    maxs: &Point<Real>,
) -> IntersectionType {
    inside_or_outside((0..DIM).all(|i| pt[i] >= mins[i] && pt[i] <= maxs[i]))
}

/// Classifies a point relative to the sphere `(center, radius)`.
///
/// Points on the boundary are `Inside`.
#[inline]
pub fn classify_point_sphere(
    pt: &Point<Real>,
    center: &Point<Real>,
    radius: Real,
) -> IntersectionType {
    inside_or_outside(na::distance_squared(pt, center) <= radius * radius)
}

/// Classifies a point relative to an oriented box.
///
/// The columns of `axes` are the unit axes of the box. Points on the boundary
/// are `Inside`.
pub fn classify_point_obb(
    pt: &Point<Real>,
    center: &Point<Real>,
    axes: &Matrix<Real>,
    half_extents: &Vector<Real>,
) -> IntersectionType {
    let local = axes.tr_mul(&(pt - center));
    inside_or_outside((0..DIM).all(|i| local[i].abs() <= half_extents[i]))
}

/// The point of an oriented box closest to `pt`.
///
/// Returns `pt` itself if it lies inside of the box.
pub fn obb_nearest_point(
    pt: &Point<Real>,
    center: &Point<Real>,
    axes: &Matrix<Real>,
    half_extents: &Vector<Real>,
) -> Point<Real> {
    let local = axes.tr_mul(&(pt - center));
    let clamped = local.zip_map(half_extents, |x, e| x.max(-e).min(e));
    center + axes * clamped
}

/// The point of an oriented box farthest from `pt`.
pub fn obb_farthest_point(
    pt: &Point<Real>,
    center: &Point<Real>,
    axes: &Matrix<Real>,
    half_extents: &Vector<Real>,
) -> Point<Real> {
    let local = axes.tr_mul(&(pt - center));
    let opposite = local.zip_map(half_extents, |x, e| if x >= 0.0 { -e } else { e });
    center + axes * opposite
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::IntersectionType::*;

    #[test]
    fn boundary_points_are_inside() {
        let o = Point::origin();
        let mins = Point::from(Vector::repeat(-1.0));
        let maxs = Point::from(Vector::repeat(1.0));
        let on_face = o + Vector::x();
        let beyond = o + Vector::x() * 1.5;

        assert_eq!(classify_point_aabb(&on_face, &mins, &maxs), Inside);
        assert_eq!(classify_point_aabb(&beyond, &mins, &maxs), Outside);
        assert_eq!(classify_point_sphere(&on_face, &o, 1.0), Inside);
        assert_eq!(classify_point_sphere(&beyond, &o, 1.0), Outside);

        let axes = Matrix::identity();
        let half = Vector::repeat(1.0);
        assert_eq!(classify_point_obb(&on_face, &o, &axes, &half), Inside);
        assert_eq!(classify_point_obb(&beyond, &o, &axes, &half), Outside);
    }

    #[test]
    fn obb_nearest_and_farthest() {
        let o = Point::origin();
        let axes = Matrix::identity();
        let half = Vector::repeat(1.0);
        let pt = o + Vector::x() * 3.0;

        assert_eq!(obb_nearest_point(&pt, &o, &axes, &half), o + Vector::x());
        assert_eq!(obb_nearest_point(&o, &o, &axes, &half), o);

        let far = obb_farthest_point(&pt, &o, &axes, &half);
        assert_eq!(far[0], -1.0);
        assert_eq!(far[1], -1.0);
    }
}
