//! Crossing-number computations between paths, segments, points and rectangles.
//!
//! The crossing number of a query counts, with a sign given by the direction
//! of each edge, how many times a path boundary crosses the ray extending to
//! the right of the query. For a rectangle or a segment the ray is replaced
//! by the area swept to the right of it, its "shadow". The computation stops
//! with [`Crossings::Intersects`] as soon as the query is found to touch the
//! boundary: no count is meaningful then, but the shapes are known to
//! overlap.

pub use self::path_crossings::{
    path_crossings_from_path, path_crossings_from_point, path_crossings_from_rect,
};
pub use self::path_shadow::PathShadow;
pub use self::segment_crossings::{point_segment_crossings, rect_segment_crossings};

mod path_crossings;
mod path_shadow;
mod segment_crossings;

/// The result of a crossing-number computation.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Crossings {
    /// The signed number of crossings: +1 per crossing of an edge going
    /// toward increasing y, -1 otherwise.
    Count(i32),
    /// The query touches the boundary. The computation was aborted.
    Intersects,
}

impl Default for Crossings {
    fn default() -> Self {
        Crossings::Count(0)
    }
}

impl Crossings {
    /// Was the computation aborted because the query touches the boundary?
    #[inline]
    pub fn intersects(self) -> bool {
        self == Crossings::Intersects
    }

    /// The number of crossings, if the query does not touch the boundary.
    #[inline]
    pub fn count(self) -> Option<i32> {
        match self {
            Crossings::Count(n) => Some(n),
            Crossings::Intersects => None,
        }
    }

    /// Is the count non-zero once masked?
    ///
    /// Always `false` for `Intersects`.
    #[inline]
    pub fn masked(self, mask: i32) -> bool {
        match self {
            Crossings::Count(n) => n & mask != 0,
            Crossings::Intersects => false,
        }
    }
}

/// How the open sub-paths of a path contribute to a crossing computation.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CrossingMode {
    /// Open sub-paths contribute their crossings as they are.
    #[default]
    Standard,
    /// Open sub-paths are closed by a segment back to their first point.
    AutoClose,
    /// Open paths contribute no crossing: only `Intersects` can be reported
    /// for them.
    SimpleIntersectionWhenNotPolygon,
}
