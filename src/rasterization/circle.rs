use na::Point2;

use crate::rasterization::CirclePerimeterIterator;

// The two octants covering the quadrant of `v` around the center.
fn quadrant_octant(v: (i64, i64)) -> u8 {
    match (v.0 >= 0, v.1 >= 0) {
        (true, true) => 0,
        (true, false) => 2,
        (false, true) => 6,
        (false, false) => 4,
    }
}

// The two octants of the quadrant opposite to the one of `v`.
fn opposite_octant(v: (i64, i64)) -> u8 {
    match (v.0 >= 0, v.1 >= 0) {
        (true, true) => 4,
        (true, false) => 6,
        (false, true) => 2,
        (false, false) => 0,
    }
}

// Where `pt` lies relative to the tangent of the circle at the perimeter
// point `p`: positive beyond it, negative toward the center.
fn tangent_side(center: &Point2<i32>, p: (i32, i32), pt: &Point2<i32>) -> i64 {
    let tx = i64::from(center.y) - i64::from(p.1);
    let ty = i64::from(p.0) - i64::from(center.x);
    let (dx, dy) = offset(&Point2::new(p.0, p.1), pt);
    dx * ty - dy * tx
}

// `b - a`, without overflow.
fn offset(a: &Point2<i32>, b: &Point2<i32>) -> (i64, i64) {
    (i64::from(b.x) - i64::from(a.x), i64::from(b.y) - i64::from(a.y))
}

fn quadrant_samples(center: &Point2<i32>, radius: i32, octant: u8) -> CirclePerimeterIterator {
    CirclePerimeterIterator::new(*center, radius, octant..octant + 2, false)
}

/// Tests if `pt` lies inside of the rasterized circle, boundary included.
///
/// The point is inside when it is one of the perimeter samples, or when it
/// is on no sample's outer side and strictly on the inner side of at least
/// one of them.
pub fn circle_contains_point(center: &Point2<i32>, radius: i32, pt: &Point2<i32>) -> bool {
    let radius = radius.saturating_abs();
    let v = offset(center, pt);

    if v.0.abs() > i64::from(radius) || v.1.abs() > i64::from(radius) {
        return false;
    }

    let mut all_null = true;
    let mut outside = false;
    let mut samples = quadrant_samples(center, radius, quadrant_octant(v));

    while let Some(p) = samples.next_coords() {
        // Perimeter samples may lie beyond the tangent of their neighbors.
        if p == (pt.x, pt.y) {
            return true;
        }

        let side = tangent_side(center, p, pt);
        if side > 0 {
            outside = true;
        } else if side < 0 {
            all_null = false;
        }
    }

    !outside && !all_null
}

/// The perimeter sample of the circle closest to `pt`, in Manhattan
/// distance.
///
/// Returns `pt` itself if it is inside of the circle.
pub fn circle_closest_point(center: &Point2<i32>, radius: i32, pt: &Point2<i32>) -> Point2<i32> {
    let v = offset(center, pt);
    let mut samples = quadrant_samples(center, radius, quadrant_octant(v));
    let mut closest: Option<((i32, i32), i64)> = None;

    while let Some(p) = samples.next_coords() {
        if tangent_side(center, p, pt) >= 0 {
            let (dx, dy) = offset(pt, &Point2::new(p.0, p.1));
            let dist = dx.abs() + dy.abs();
            if closest.map_or(true, |(_, best)| dist < best) {
                closest = Some((p, dist));
            }
        }
    }

    closest.map_or(*pt, |(p, _)| Point2::new(p.0, p.1))
}

/// The perimeter sample of the circle farthest from `pt`, in Manhattan
/// distance.
///
/// Ties are broken in favor of the sample closest to one of the axes
/// passing through `pt`.
pub fn circle_farthest_point(center: &Point2<i32>, radius: i32, pt: &Point2<i32>) -> Point2<i32> {
    let v = offset(center, pt);
    let mut samples = quadrant_samples(center, radius, opposite_octant(v));
    let mut farthest = (*pt, i64::MIN, i64::MIN);

    while let Some(p) = samples.next_coords() {
        let (dx, dy) = offset(pt, &Point2::new(p.0, p.1));
        let (dx, dy) = (dx.abs(), dy.abs());
        let l1 = dx + dy;
        let to_axis = dx.min(dy);

        if l1 > farthest.1 || (l1 == farthest.1 && to_axis < farthest.2) {
            farthest = (Point2::new(p.0, p.1), l1, to_axis);
        }
    }

    farthest.0
}

/// Tests if two rasterized circles intersect.
pub fn circles_intersect(
    center1: &Point2<i32>,
    radius1: i32,
    center2: &Point2<i32>,
    radius2: i32,
) -> bool {
    let closest = circle_closest_point(center1, radius1, center2);
    circle_contains_point(center2, radius2, &closest)
}
