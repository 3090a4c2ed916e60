use crate::math::{Point, Real, DIM};
use crate::query::IntersectionType;

/// Classifies the interval `[l1, u1]` against the interval `[l2, u2]`.
///
/// Touching intervals are considered disjoint.
#[inline]
pub fn classify_interval_interval(l1: Real, u1: Real, l2: Real, u2: Real) -> IntersectionType {
    if l1 < l2 {
        if u1 <= l2 {
            IntersectionType::Outside
        } else if u1 < u2 {
            IntersectionType::Spanning
        } else {
            IntersectionType::Enclosing
        }
    } else if l1 > l2 {
        if u2 <= l1 {
            IntersectionType::Outside
        } else if u1 <= u2 {
            IntersectionType::Inside
        } else {
            IntersectionType::Spanning
        }
    } else if u1 == u2 {
        IntersectionType::Same
    } else if u1 < u2 {
        IntersectionType::Inside
    } else {
        IntersectionType::Enclosing
    }
}

/// Classifies the box `[mins1, maxs1]` relative to the box `[mins2, maxs2]`.
///
/// Each axis is classified independently and the results are folded with
/// [`IntersectionType::and`].
pub fn classify_aabb_aabb(
    mins1: &Point<Real>,
    maxs1: &Point<Real>,
    mins2: &Point<Real>,
    maxs2: &Point<Real>,
) -> IntersectionType {
    let mut result = classify_interval_interval(mins1[0], maxs1[0], mins2[0], maxs2[0]);

    for i in 1..DIM {
        if result == IntersectionType::Outside {
            break;
        }
        result = result.and(classify_interval_interval(
            mins1[i], maxs1[i], mins2[i], maxs2[i],
        ));
    }

    result
}

/// Tests if two boxes overlap.
///
/// This agrees with [`classify_aabb_aabb`] not returning `Outside`.
#[inline]
pub fn intersects_aabb_aabb(
    mins1: &Point<Real>,
    maxs1: &Point<Real>,
    mins2: &Point<Real>,
    maxs2: &Point<Real>,
) -> bool {
    (0..DIM).all(|i| {
        if mins1[i] < mins2[i] {
            maxs1[i] > mins2[i]
        } else if mins1[i] > mins2[i] {
            maxs2[i] > mins1[i]
        } else {
            true
        }
    })
}
