use crate::math::{Point, Real, DIM};
use crate::query::IntersectionType;

// Squared distances from `center` to the nearest and to the farthest point of
// the box, and whether the sphere fits strictly within every slab of the box.
fn sphere_aabb_distances(
    center: &Point<Real>,
    radius: Real,
    mins: &Point<Real>,
    maxs: &Point<Real>,
) -> (Real, Real, bool) {
    let mut dmin = 0.0;
    let mut dmax = 0.0;
    let mut inside_on_all_axes = true;

    for i in 0..DIM {
        let c = center[i];

        if c < mins[i] {
            let a = mins[i] - c;
            let b = maxs[i] - c;
            dmin += a * a;
            dmax += b * b;
            inside_on_all_axes = false;
        } else if c > maxs[i] {
            let a = c - maxs[i];
            let b = c - mins[i];
            dmin += a * a;
            dmax += b * b;
            inside_on_all_axes = false;
        } else {
            let a = c - mins[i];
            let b = maxs[i] - c;
            inside_on_all_axes &= radius < a.min(b);
            let far = a.max(b);
            dmax += far * far;
        }
    }

    (dmin, dmax, inside_on_all_axes)
}

/// Classifies the sphere `(center, radius)` relative to the box `[mins, maxs]`.
pub fn classify_sphere_aabb(
    center: &Point<Real>,
    radius: Real,
    mins: &Point<Real>,
    maxs: &Point<Real>,
) -> IntersectionType {
    let (dmin, dmax, inside_on_all_axes) = sphere_aabb_distances(center, radius, mins, maxs);
    let sq_radius = radius * radius;

    if dmin == 0.0 {
        // The center is inside of the box.
        if inside_on_all_axes {
            return IntersectionType::Inside;
        }
        if sq_radius > dmax {
            return IntersectionType::Enclosing;
        }
    } else {
        if sq_radius <= dmin {
            return IntersectionType::Outside;
        }
        if sq_radius > dmax {
            return IntersectionType::Enclosing;
        }
    }

    IntersectionType::Spanning
}

/// Tests if the sphere `(center, radius)` and the box `[mins, maxs]` overlap.
///
/// This agrees with [`classify_sphere_aabb`] not returning `Outside`.
#[inline]
pub fn intersects_sphere_aabb(
    center: &Point<Real>,
    radius: Real,
    mins: &Point<Real>,
    maxs: &Point<Real>,
) -> bool {
    let (dmin, _, _) = sphere_aabb_distances(center, radius, mins, maxs);
    dmin == 0.0 || radius * radius > dmin
}
