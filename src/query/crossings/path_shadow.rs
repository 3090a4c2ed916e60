use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::query::crossings::{point_segment_crossings, Crossings};
use crate::shape::{
    FlatteningPathIterator, Path, PathElement, PathElementIter, PathError, PathIterator,
    WindingRule,
};
use crate::utils;

/// The area extending to the right of a path, used to count the crossings of
/// a segment with that path.
///
/// The shadow is made of the two horizontal half-lines extending to the
/// right of the lowest and of the highest points of the path boundary. A
/// segment touching the boundary, or lying inside of the path, intersects
/// it. Any other segment adds its crossings with the two half-lines, so the
/// edges of a closed path that does not meet this path sum up to twice
/// the number of times that path winds around it.
#[derive(Clone, Debug)]
pub struct PathShadow<I> {
    iter: FlatteningPathIterator<I>,
    bounds: Aabb,
    // Lowest and highest boundary points, right-most on ties. `None` for
    // empty or open paths, which cast no shadow.
    anchors: Option<[Point<Real>; 2]>,
}

impl<'a> PathShadow<PathIterator<'a>> {
    /// The shadow of `path`.
    pub fn new(path: &'a Path) -> Self {
        let iter = path.flattened_iter(None);
        PathShadow {
            anchors: shadow_anchors(iter.restart()),
            iter,
            bounds: path.local_aabb(),
        }
    }
}

impl<I: PathElementIter> PathShadow<I> {
    /// The shadow of the path traversed by `iter`, with precomputed bounds.
    pub fn from_iter(iter: I, bounds: Aabb) -> Self {
        let iter = iter.flattened();
        PathShadow {
            anchors: shadow_anchors(iter.restart()),
            iter,
            bounds,
        }
    }

    /// The bounds of the path casting this shadow.
    #[inline]
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// The winding rule of the path casting this shadow.
    #[inline]
    pub fn winding_rule(&self) -> WindingRule {
        self.iter.winding_rule()
    }

    /// Accumulates the crossings of the segment `[a, b]` with this shadow.
    ///
    /// Returns `Crossings::Intersects` if the segment touches the boundary of
    /// the path, or lies inside of it for its winding rule. Open paths only
    /// ever report `Intersects`: their count is left untouched.
    pub fn crossings(
        &self,
        crossings: i32,
        a: &Point<Real>,
        b: &Point<Real>,
    ) -> Result<Crossings, PathError> {
        if !self.bounds.is_initialized() {
            return Ok(Crossings::Count(crossings));
        }

        let mins = self.bounds.mins();
        let maxs = self.bounds.maxs();
        let away = a.x.max(b.x) < mins.x
            || a.x.min(b.x) > maxs.x
            || a.y.max(b.y) < mins.y
            || a.y.min(b.y) > maxs.y;

        if !away && self.meets(a, b)? {
            return Ok(Crossings::Intersects);
        }

        Ok(Crossings::Count(crossings + self.anchor_crossings(a, b)))
    }

    fn anchor_crossings(&self, a: &Point<Real>, b: &Point<Real>) -> i32 {
        self.anchors.map_or(0, |[lowest, highest]| {
            point_segment_crossings(&lowest, a, b) + point_segment_crossings(&highest, a, b)
        })
    }

    // Does `[a, b]` touch an edge of the path, or start inside of it?
    fn meets(&self, a: &Point<Real>, b: &Point<Real>) -> Result<bool, PathError> {
        let mut path = self.iter.restart();

        let Some(first) = path.next() else {
            return Ok(false);
        };
        let PathElement::MoveTo(start) = first else {
            return Err(PathError::MissingInitialMoveTo);
        };

        let mut move_pt = start;
        let mut curr = start;
        // Crossings of the ray extending to the right of `a`.
        let mut n = 0;

        for elt in path {
            let to = match elt {
                PathElement::MoveTo(to) => {
                    move_pt = to;
                    curr = to;
                    continue;
                }
                PathElement::Close(_) => move_pt,
                elt => elt.to(),
            };

            if curr != to {
                if utils::segments_intersect(&curr, &to, a, b) {
                    return Ok(true);
                }
                n += point_segment_crossings(a, &curr, &to);
            }
            curr = to;
        }

        if curr != move_pt {
            return Ok(false);
        }

        Ok(n & self.winding_rule().point_mask() != 0)
    }
}

// The lowest and highest end-points of the edges of a closed path.
fn shadow_anchors<I: PathElementIter>(path: I) -> Option<[Point<Real>; 2]> {
    let mut anchors: Option<[Point<Real>; 2]> = None;
    let mut move_pt = None;
    let mut curr = None;

    for elt in path {
        let to = match elt {
            PathElement::MoveTo(to) => {
                move_pt = Some(to);
                curr = Some(to);
                continue;
            }
            PathElement::Close(_) => move_pt,
            elt => Some(elt.to()),
        };

        for pt in curr.iter().chain(to.iter()) {
            let [lowest, highest] = anchors.get_or_insert([*pt, *pt]);
            if pt.y < lowest.y || (pt.y == lowest.y && pt.x > lowest.x) {
                *lowest = *pt;
            }
            if pt.y > highest.y || (pt.y == highest.y && pt.x > highest.x) {
                *highest = *pt;
            }
        }
        curr = to;
    }

    if curr != move_pt {
        return None;
    }

    anchors
}
