use na::Point2;

use crate::math::Real;

/// Finds on which side of the oriented line `(a, b)` the point `p` lies.
///
/// Returns `1` if `p` is on the right of the line, `-1` if it is on its left
/// and `0` if the three points are collinear. With the y axis pointing up,
/// "right" is the clockwise side of the direction `b - a`.
#[inline]
pub fn side_of_line(a: &Point2<Real>, b: &Point2<Real>, p: &Point2<Real>) -> i32 {
    let ab = b - a;
    let ap = p - a;
    let side = ap.x * ab.y - ap.y * ab.x;

    if side < 0.0 {
        -1
    } else if side > 0.0 {
        1
    } else {
        0
    }
}

/// Tests if the segments `[a, b]` and `[c, d]` intersect, ignoring contacts
/// that only involve one of their end-points.
///
/// Collinear overlapping segments are reported as intersecting unless they only
/// share an end-point.
pub fn segments_intersect_without_ends(
    a: &Point2<Real>,
    b: &Point2<Real>,
    c: &Point2<Real>,
    d: &Point2<Real>,
) -> bool {
    may_intersect_without_ends(a, b, c, d) && may_intersect_without_ends(c, d, a, b)
}

/// Tests if the segments `[a, b]` and `[c, d]` have at least one point in
/// common, end-points included.
pub fn segments_intersect(
    a: &Point2<Real>,
    b: &Point2<Real>,
    c: &Point2<Real>,
    d: &Point2<Real>,
) -> bool {
    let s1 = side_of_line(a, b, c);
    let s2 = side_of_line(a, b, d);
    let s3 = side_of_line(c, d, a);
    let s4 = side_of_line(c, d, b);

    if s1 * s2 < 0 && s3 * s4 < 0 {
        return true;
    }

    (s1 == 0 && in_segment_box(a, b, c))
        || (s2 == 0 && in_segment_box(a, b, d))
        || (s3 == 0 && in_segment_box(c, d, a))
        || (s4 == 0 && in_segment_box(c, d, b))
}

// Is `p`, known to be collinear with `[a, b]`, between its end-points?
fn in_segment_box(a: &Point2<Real>, b: &Point2<Real>, p: &Point2<Real>) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

// Checks whether [c, d] straddles the line supporting [a, b].
fn may_intersect_without_ends(
    a: &Point2<Real>,
    b: &Point2<Real>,
    c: &Point2<Real>,
    d: &Point2<Real>,
) -> bool {
    let ab = b - a;
    let ac = c - a;
    let ad = d - a;
    let f1 = ac.x * ab.y - ac.y * ab.x;
    let f2 = ad.x * ab.y - ad.y * ab.x;
    let sign = f1 * f2;

    if sign < 0.0 {
        return true;
    }

    if sign > 0.0 {
        return false;
    }

    if f1 == 0.0 && f2 == 0.0 {
        // Collinear: compare the projections of c and d on [a, b],
        // 0 being `a` and 1 being `b`.
        let sq_len = ab.norm_squared();
        let t1 = ac.dot(&ab) / sq_len;
        let t2 = ad.dot(&ab) / sq_len;
        return (t1 > 0.0 || t2 > 0.0) && (t1 < 1.0 || t2 < 1.0);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_of_diagonal() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 1.0);
        assert_eq!(side_of_line(&a, &b, &Point2::new(0.0, 0.0)), 0);
        assert_eq!(side_of_line(&a, &b, &Point2::new(2.0, 2.0)), 0);
        assert_eq!(side_of_line(&a, &b, &Point2::new(-20.0, -20.0)), 0);
        assert_eq!(side_of_line(&a, &b, &Point2::new(120.0, 0.0)), 1);
        assert_eq!(side_of_line(&a, &b, &Point2::new(0.0, 120.0)), -1);
    }

    #[test]
    fn crossing_segments_intersect() {
        assert!(segments_intersect_without_ends(
            &Point2::new(0.0, 0.0),
            &Point2::new(10.0, 0.0),
            &Point2::new(5.0, -5.0),
            &Point2::new(5.0, 15.0),
        ));
    }

    #[test]
    fn touching_end_points_do_not_intersect() {
        // T-junction on an end-point of the second segment.
        assert!(!segments_intersect_without_ends(
            &Point2::new(0.0, 0.0),
            &Point2::new(10.0, 0.0),
            &Point2::new(5.0, 0.0),
            &Point2::new(5.0, 15.0),
        ));
        // Shared end-point.
        assert!(!segments_intersect_without_ends(
            &Point2::new(0.0, 0.0),
            &Point2::new(10.0, 0.0),
            &Point2::new(10.0, 0.0),
            &Point2::new(10.0, 15.0),
        ));
        // Disjoint.
        assert!(!segments_intersect_without_ends(
            &Point2::new(0.0, 0.0),
            &Point2::new(10.0, 0.0),
            &Point2::new(0.0, 1.0),
            &Point2::new(10.0, 1.0),
        ));
    }

    #[test]
    fn closed_segments_share_their_end_points() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 0.0);

        assert!(segments_intersect(&a, &b, &Point2::new(5.0, -5.0), &Point2::new(5.0, 5.0)));
        assert!(segments_intersect(&a, &b, &Point2::new(5.0, 0.0), &Point2::new(5.0, 15.0)));
        assert!(segments_intersect(&a, &b, &b, &Point2::new(10.0, 15.0)));
        assert!(segments_intersect(&a, &b, &Point2::new(8.0, 0.0), &Point2::new(15.0, 0.0)));
        assert!(!segments_intersect(&a, &b, &Point2::new(11.0, 0.0), &Point2::new(15.0, 0.0)));
        assert!(!segments_intersect(&a, &b, &Point2::new(0.0, 1.0), &Point2::new(10.0, 1.0)));
        assert!(!segments_intersect(&a, &b, &Point2::new(5.0, 1.0), &Point2::new(20.0, -1.0)));
    }

    #[test]
    fn collinear_overlap_intersects() {
        assert!(segments_intersect_without_ends(
            &Point2::new(0.0, 0.0),
            &Point2::new(10.0, 0.0),
            &Point2::new(5.0, 0.0),
            &Point2::new(15.0, 0.0),
        ));
        assert!(!segments_intersect_without_ends(
            &Point2::new(0.0, 0.0),
            &Point2::new(10.0, 0.0),
            &Point2::new(10.0, 0.0),
            &Point2::new(15.0, 0.0),
        ));
    }
}
