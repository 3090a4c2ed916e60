//! Axis Aligned Bounding Box.

use crate::bounding_volume::{BoundingSphere, BoundingVolume, Bounds};
use crate::math::{Point, Real, Vector, DIM, NUM_BOX_VERTICES};
use crate::query::{details, IntersectionType};
use arrayvec::ArrayVec;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. The invariant
/// `mins[i] <= maxs[i]` holds on every axis: corners given in the wrong order
/// are swapped on construction.
///
/// A default AABB is *uninitialized*: it holds no data until points or other
/// volumes are combined into it, and its derived queries return NaN or `None`
/// until then. This is distinct from an empty box (a single point) which is
/// initialized but has zero extents.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "dim2")] {
/// use riposte2d::bounding_volume::Aabb;
/// use riposte2d::na::Point2;
///
/// let mut aabb = Aabb::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
/// aabb.combine_point(&Point2::new(20.0, 5.0));
///
/// assert_eq!(aabb.mins(), Point2::new(0.0, 0.0));
/// assert_eq!(aabb.maxs(), Point2::new(20.0, 10.0));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    mins: Point<Real>,
    maxs: Point<Real>,
    initialized: bool,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new_uninitialized()
    }
}

impl Aabb {
    /// Creates a new AABB spanning the two given corners.
    ///
    /// The corners do not need to be ordered.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Aabb {
        Aabb {
            mins: a.inf(&b),
            maxs: a.sup(&b),
            initialized: true,
        }
    }

    /// Creates an AABB that holds no data yet.
    #[inline]
    pub fn new_uninitialized() -> Aabb {
        Aabb {
            mins: Point::origin(),
            maxs: Point::origin(),
            initialized: false,
        }
    }

    /// Creates a new AABB from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        let half_extents = half_extents.abs();
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates the smallest AABB containing all the given points.
    ///
    /// The result is uninitialized if `pts` is empty.
    pub fn from_points(pts: &[Point<Real>]) -> Self {
        let mut result = Self::new_uninitialized();
        result.combine_points(pts, false);
        result
    }

    /// Does this AABB hold any data?
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Makes this AABB uninitialized again.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new_uninitialized();
    }

    /// The corner with the smallest coordinates, or NaN if uninitialized.
    #[inline]
    pub fn mins(&self) -> Point<Real> {
        if self.initialized {
            self.mins
        } else {
            nan_point()
        }
    }

    /// The corner with the largest coordinates, or NaN if uninitialized.
    #[inline]
    pub fn maxs(&self) -> Point<Real> {
        if self.initialized {
            self.maxs
        } else {
            nan_point()
        }
    }

    /// The center of this AABB, or NaN if uninitialized.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        if self.initialized {
            na::center(&self.mins, &self.maxs)
        } else {
            nan_point()
        }
    }

    /// The half-extents of this AABB, or NaN if uninitialized.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.extents() / 2.0
    }

    /// The extents of this AABB, or NaN if uninitialized.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs() - self.mins()
    }

    /// Sets both corners of this AABB, swapping coordinates as needed.
    #[inline]
    pub fn set(&mut self, a: Point<Real>, b: Point<Real>) {
        *self = Self::new(a, b);
    }

    /// Enlarges this AABB so it contains `pt`.
    ///
    /// An uninitialized AABB becomes the single point `pt`.
    #[inline]
    pub fn combine_point(&mut self, pt: &Point<Real>) {
        if self.initialized {
            self.mins = self.mins.inf(pt);
            self.maxs = self.maxs.sup(pt);
        } else {
            *self = Self::new(*pt, *pt);
        }
    }

    /// Combines a set of points into this AABB.
    ///
    /// If `merge` is `true` and this AABB is initialized, the result contains
    /// both the previous box and the points. Otherwise the box is rebuilt from
    /// the points alone. Nothing happens if `pts` is empty.
    pub fn combine_points(&mut self, pts: &[Point<Real>], merge: bool) {
        let Some((first, rest)) = pts.split_first() else {
            return;
        };

        if !merge {
            self.reset();
        }

        self.combine_point(first);
        for pt in rest {
            self.combine_point(pt);
        }
    }

    /// Combines a set of bounding volumes into this AABB.
    ///
    /// Uninitialized volumes are ignored. See [`Aabb::combine_points`] for
    /// the meaning of `merge`.
    pub fn combine_bounds(&mut self, bounds: &[Bounds], merge: bool) {
        let mut union = if merge {
            *self
        } else {
            Self::new_uninitialized()
        };

        for b in bounds {
            union.merge(&b.local_aabb());
        }

        if union.initialized {
            *self = union;
        }
    }

    /// Translates this AABB by `translation`.
    #[inline]
    pub fn translate(&mut self, translation: &Vector<Real>) {
        if self.initialized {
            self.mins += translation;
            self.maxs += translation;
        }
    }

    /// Returns a translated copy of this AABB.
    #[inline]
    #[must_use]
    pub fn translated(mut self, translation: &Vector<Real>) -> Self {
        self.translate(translation);
        self
    }

    /// The vertices of this AABB.
    ///
    /// Vertex `k` takes the coordinate from `maxs` along axis `i` if the bit
    /// `i` of `k` is set, and from `mins` otherwise. No vertices are returned
    /// for an uninitialized AABB.
    pub fn vertices(&self) -> ArrayVec<Point<Real>, NUM_BOX_VERTICES> {
        if !self.initialized {
            return ArrayVec::new();
        }

        (0..NUM_BOX_VERTICES)
            .map(|k| {
                Point::from(Vector::from_fn(|i, _| {
                    if k & (1 << i) != 0 {
                        self.maxs[i]
                    } else {
                        self.mins[i]
                    }
                }))
            })
            .collect()
    }

    /// The smallest sphere enclosing this AABB.
    pub fn bounding_sphere(&self) -> BoundingSphere {
        if !self.initialized {
            return BoundingSphere::new_uninitialized();
        }

        let center = self.center();
        BoundingSphere::new(center, na::distance(&center, &self.maxs))
    }

    /// The distance from `pt` to this AABB, zero if `pt` is inside.
    pub fn distance(&self, pt: &Point<Real>) -> Real {
        if !self.initialized {
            return Real::NAN;
        }

        (self.mins - pt)
            .sup(&(pt - self.maxs))
            .sup(&Vector::zeros())
            .norm()
    }

    /// The distance from `pt` to the farthest point of this AABB.
    pub fn distance_max(&self, pt: &Point<Real>) -> Real {
        if !self.initialized {
            return Real::NAN;
        }

        (self.mins - pt).abs().sup(&(self.maxs - pt).abs()).norm()
    }

    /// The point of this AABB closest to `pt`.
    pub fn nearest_point(&self, pt: &Point<Real>) -> Option<Point<Real>> {
        self.initialized
            .then(|| Point::from(pt.coords.sup(&self.mins.coords).inf(&self.maxs.coords)))
    }

    /// The point of this AABB farthest from `pt`.
    pub fn farthest_point(&self, pt: &Point<Real>) -> Option<Point<Real>> {
        if !self.initialized {
            return None;
        }

        let center = self.center();
        let mut result = self.mins;

        for i in 0..DIM {
            if pt[i] <= center[i] {
                result[i] = self.maxs[i];
            }
        }

        Some(result)
    }

    /// Classifies `pt` relative to this AABB.
    ///
    /// Points on the boundary are `Inside`.
    #[inline]
    pub fn classify_point(&self, pt: &Point<Real>) -> IntersectionType {
        if self.initialized {
            details::classify_point_aabb(pt, &self.mins, &self.maxs)
        } else {
            IntersectionType::Outside
        }
    }

    /// Does this AABB contain `pt`, boundary included?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.classify_point(pt) == IntersectionType::Inside
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center()
    }

    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        self.initialized
            && other.initialized
            && details::intersects_aabb_aabb(&self.mins, &self.maxs, &other.mins, &other.maxs)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        self.initialized
            && other.initialized
            && matches!(
                details::classify_aabb_aabb(&other.mins, &other.maxs, &self.mins, &self.maxs),
                IntersectionType::Inside | IntersectionType::Same
            )
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        if !other.initialized {
            return;
        }

        if self.initialized {
            self.mins = self.mins.inf(&other.mins);
            self.maxs = self.maxs.sup(&other.maxs);
        } else {
            *self = *other;
        }
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        let mut res = *self;
        res.merge(other);
        res
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        if self.initialized {
            self.mins += Vector::repeat(-amount);
            self.maxs += Vector::repeat(amount);
        }
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Aabb {
        let mut res = *self;
        res.loosen(amount);
        res
    }
}

#[inline]
pub(crate) fn nan_point() -> Point<Real> {
    Point::from(Vector::repeat(Real::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uninitialized_queries_are_absent() {
        let aabb = Aabb::default();
        assert!(!aabb.is_initialized());
        assert!(aabb.center().x.is_nan());
        assert!(aabb.distance(&Point::origin()).is_nan());
        assert!(aabb.nearest_point(&Point::origin()).is_none());
        assert!(aabb.vertices().is_empty());
        assert!(!aabb.contains_point(&Point::origin()));
    }

    #[test]
    fn corners_are_normalized() {
        let a = Point::from(Vector::repeat(3.0));
        let b = Point::from(Vector::repeat(-1.0));
        let aabb = Aabb::new(a, b);
        assert_eq!(aabb.mins(), b);
        assert_eq!(aabb.maxs(), a);
    }

    #[test]
    fn single_point_gives_empty_box() {
        let pt = Point::from(Vector::repeat(2.5));
        let mut aabb = Aabb::default();
        aabb.combine_points(&[pt], true);
        assert!(aabb.is_initialized());
        assert_eq!(aabb.mins(), pt);
        assert_eq!(aabb.maxs(), pt);
    }

    #[test]
    fn combine_without_merge_rebuilds() {
        let mut aabb = Aabb::new(Point::origin(), Point::from(Vector::repeat(10.0)));
        let pt = Point::from(Vector::repeat(20.0));
        aabb.combine_points(&[pt], false);
        assert_eq!(aabb.mins(), pt);

        aabb.combine_points(&[], false);
        assert!(aabb.is_initialized());
    }

    #[test]
    fn distances() {
        let aabb = Aabb::new(Point::origin(), Point::from(Vector::repeat(2.0)));
        let inside = Point::from(Vector::repeat(1.0));
        let outside = Point::origin() - Vector::x() * 3.0;

        assert_eq!(aabb.distance(&inside), 0.0);
        assert_relative_eq!(aabb.distance(&outside), 3.0);
        assert_relative_eq!(
            aabb.distance_max(&inside),
            Vector::repeat(1.0).norm(),
            epsilon = 1.0e-12
        );
        assert_eq!(aabb.nearest_point(&outside), Some(Point::origin()));
        assert_eq!(
            aabb.farthest_point(&outside),
            Some(Point::from(Vector::repeat(2.0)))
        );
    }

    #[test]
    fn vertices_span_the_box() {
        let aabb = Aabb::new(Point::origin(), Point::from(Vector::repeat(1.0)));
        let vertices = aabb.vertices();
        assert_eq!(vertices.len(), NUM_BOX_VERTICES);
        assert!(vertices.iter().all(|v| aabb.contains_point(v)));
        assert_eq!(vertices[0], aabb.mins());
        assert_eq!(vertices[NUM_BOX_VERTICES - 1], aabb.maxs());
    }
}
