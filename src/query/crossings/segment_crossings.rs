use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::query::crossings::Crossings;

/// Counts the crossings of the segment `[a, b]` with the ray extending to the
/// right of `pt`.
///
/// Returns `1` if the segment goes toward increasing y, `-1` if it goes
/// toward decreasing y, and `0` if it does not cross the ray. The lower end
/// of the segment is included and its upper end is excluded, so a ray
/// passing through a shared vertex is counted once.
pub fn point_segment_crossings(pt: &Point<Real>, a: &Point<Real>, b: &Point<Real>) -> i32 {
    if pt.y < a.y && pt.y < b.y {
        return 0;
    }
    if pt.y >= a.y && pt.y >= b.y {
        return 0;
    }
    // From here, a.y != b.y.
    if pt.x >= a.x && pt.x >= b.x {
        return 0;
    }

    let dir = if a.y < b.y { 1 } else { -1 };

    if pt.x < a.x && pt.x < b.x {
        return dir;
    }

    let x_intercept = a.x + (pt.y - a.y) * (b.x - a.x) / (b.y - a.y);
    if pt.x >= x_intercept {
        0
    } else {
        dir
    }
}

// Crossings of a segment lying entirely to the right of the rectangle, with
// the two horizontal lines bounding its shadow.
fn right_shadow_crossings(y0: Real, y1: Real, min_y: Real, max_y: Real) -> i32 {
    let mut n = 0;

    if y0 < y1 {
        if y0 <= min_y {
            n += 1;
        }
        if y1 >= max_y {
            n += 1;
        }
    } else if y1 < y0 {
        if y1 <= min_y {
            n -= 1;
        }
        if y0 >= max_y {
            n -= 1;
        }
    }

    n
}

/// Accumulates the crossings of the segment `[a, b]` with the shadow
/// extending to the right of `rect`.
///
/// Returns `Crossings::Intersects` if the segment enters the rectangle.
/// An uninitialized rectangle has no shadow.
pub fn rect_segment_crossings(
    crossings: i32,
    rect: &Aabb,
    a: &Point<Real>,
    b: &Point<Real>,
) -> Crossings {
    if !rect.is_initialized() {
        return Crossings::Count(crossings);
    }

    let mins = rect.mins();
    let maxs = rect.maxs();

    if a.y >= maxs.y && b.y >= maxs.y {
        return Crossings::Count(crossings);
    }
    if a.y <= mins.y && b.y <= mins.y {
        return Crossings::Count(crossings);
    }
    if a.x <= mins.x && b.x <= mins.x {
        return Crossings::Count(crossings);
    }
    if a.x >= maxs.x && b.x >= maxs.x {
        // Entirely in the shadow. The y ranges overlap by a non-empty amount.
        return Crossings::Count(crossings + right_shadow_crossings(a.y, b.y, mins.y, maxs.y));
    }

    let strictly_inside =
        |p: &Point<Real>| p.x > mins.x && p.x < maxs.x && p.y > mins.y && p.y < maxs.y;
    if strictly_inside(a) || strictly_inside(b) {
        return Crossings::Intersects;
    }

    // Clip the segment to the horizontal slab of the rectangle.
    let mut xi0 = a.x;
    if a.y < mins.y {
        xi0 += (mins.y - a.y) * (b.x - a.x) / (b.y - a.y);
    } else if a.y > maxs.y {
        xi0 += (maxs.y - a.y) * (b.x - a.x) / (b.y - a.y);
    }

    let mut xi1 = b.x;
    if b.y < mins.y {
        xi1 += (mins.y - b.y) * (a.x - b.x) / (a.y - b.y);
    } else if b.y > maxs.y {
        xi1 += (maxs.y - b.y) * (a.x - b.x) / (a.y - b.y);
    }

    if xi0 <= mins.x && xi1 <= mins.x {
        return Crossings::Count(crossings);
    }
    if xi0 >= maxs.x && xi1 >= maxs.x {
        return Crossings::Count(crossings + right_shadow_crossings(a.y, b.y, mins.y, maxs.y));
    }

    Crossings::Intersects
}
