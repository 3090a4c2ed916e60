use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::query::crossings::{
    point_segment_crossings, rect_segment_crossings, CrossingMode, Crossings, PathShadow,
};
use crate::shape::{PathElement, PathElementIter, PathError};

/// Accumulates the crossings of a path with the ray extending to the right
/// of `pt`.
///
/// Curves are flattened with the parameters of the path iterator. The
/// computation stops with `Crossings::Intersects` if `pt` is a vertex of the
/// path.
pub fn path_crossings_from_point<I: PathElementIter>(
    crossings: i32,
    path: I,
    pt: &Point<Real>,
    mode: CrossingMode,
) -> Result<Crossings, PathError> {
    let mut path = path.flattened();

    let Some(first) = path.next() else {
        return Ok(Crossings::Count(crossings));
    };
    let PathElement::MoveTo(start) = first else {
        return Err(PathError::MissingInitialMoveTo);
    };

    let mut move_pt = start;
    let mut curr = start;
    let mut n = crossings;

    for elt in path {
        match elt {
            PathElement::MoveTo(to) => {
                move_pt = to;
                curr = to;
            }
            PathElement::Close(_) => {
                if curr != move_pt {
                    if move_pt == *pt {
                        return Ok(Crossings::Intersects);
                    }
                    n += point_segment_crossings(pt, &curr, &move_pt);
                }
                curr = move_pt;
            }
            elt => {
                let to = elt.to();
                if to == *pt {
                    return Ok(Crossings::Intersects);
                }
                n += point_segment_crossings(pt, &curr, &to);
                curr = to;
            }
        }
    }

    if curr != move_pt {
        match mode {
            CrossingMode::AutoClose => {
                if move_pt == *pt {
                    return Ok(Crossings::Intersects);
                }
                n += point_segment_crossings(pt, &curr, &move_pt);
            }
            CrossingMode::SimpleIntersectionWhenNotPolygon => n = 0,
            CrossingMode::Standard => {}
        }
    }

    Ok(Crossings::Count(n))
}

/// Accumulates the crossings of a path with the shadow extending to the
/// right of `rect`.
///
/// The computation stops with `Crossings::Intersects` as soon as an edge
/// enters the rectangle.
pub fn path_crossings_from_rect<I: PathElementIter>(
    crossings: i32,
    path: I,
    rect: &Aabb,
    mode: CrossingMode,
) -> Result<Crossings, PathError> {
    walk_edges(crossings, path, mode, |n, a, b| {
        Ok(rect_segment_crossings(n, rect, a, b))
    })
}

/// Accumulates the crossings of a path with the shadow extending to the
/// right of another path.
///
/// Every edge of `path` is a query segment for [`PathShadow::crossings`].
pub fn path_crossings_from_path<I: PathElementIter, S: PathElementIter>(
    crossings: i32,
    path: I,
    shadow: &PathShadow<S>,
    mode: CrossingMode,
) -> Result<Crossings, PathError> {
    walk_edges(crossings, path, mode, |n, a, b| shadow.crossings(n, a, b))
}

// Walks the edges of a flattened path, accumulating the crossings computed
// by `edge_crossings` for every edge.
fn walk_edges<I: PathElementIter>(
    crossings: i32,
    path: I,
    mode: CrossingMode,
    mut edge_crossings: impl FnMut(i32, &Point<Real>, &Point<Real>) -> Result<Crossings, PathError>,
) -> Result<Crossings, PathError> {
    let mut path = path.flattened();

    let Some(first) = path.next() else {
        return Ok(Crossings::Count(crossings));
    };
    let PathElement::MoveTo(start) = first else {
        return Err(PathError::MissingInitialMoveTo);
    };

    let mut move_pt = start;
    let mut curr = start;
    let mut n = crossings;

    for elt in path {
        match elt {
            PathElement::MoveTo(to) => {
                move_pt = to;
                curr = to;
            }
            PathElement::Close(_) => {
                if curr != move_pt {
                    match edge_crossings(n, &curr, &move_pt)? {
                        Crossings::Count(c) => n = c,
                        Crossings::Intersects => return Ok(Crossings::Intersects),
                    }
                }
                curr = move_pt;
            }
            elt => {
                let to = elt.to();
                match edge_crossings(n, &curr, &to)? {
                    Crossings::Count(c) => n = c,
                    Crossings::Intersects => return Ok(Crossings::Intersects),
                }
                curr = to;
            }
        }
    }

    if curr != move_pt {
        match mode {
            CrossingMode::AutoClose => return edge_crossings(n, &curr, &move_pt),
            CrossingMode::SimpleIntersectionWhenNotPolygon => n = 0,
            CrossingMode::Standard => {}
        }
    }

    Ok(Crossings::Count(n))
}
