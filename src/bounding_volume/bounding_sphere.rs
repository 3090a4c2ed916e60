//! Bounding sphere.

use crate::bounding_volume::aabb::nan_point;
use crate::bounding_volume::{Aabb, BoundingVolume, Bounds};
use crate::math::{Point, Real, Vector};
use crate::query::{details, IntersectionType};
use num::Zero;

/// A bounding sphere (a bounding circle in 2D).
///
/// The radius is never negative: negative radii are clamped to zero.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    center: Point<Real>,
    radius: Real,
    initialized: bool,
}

impl Default for BoundingSphere {
    fn default() -> Self {
        Self::new_uninitialized()
    }
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere {
            center,
            radius: radius.max(0.0),
            initialized: true,
        }
    }

    /// Creates a bounding sphere that holds no data yet.
    pub fn new_uninitialized() -> BoundingSphere {
        BoundingSphere {
            center: Point::origin(),
            radius: 0.0,
            initialized: false,
        }
    }

    /// Computes an approximate bounding sphere of a set of points.
    ///
    /// The result is uninitialized if `pts` is empty.
    pub fn from_points(pts: &[Point<Real>]) -> Self {
        let mut result = Self::new_uninitialized();
        result.combine_points(pts, false);
        result
    }

    /// Does this sphere hold any data?
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Makes this sphere uninitialized again.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new_uninitialized();
    }

    /// The bounding sphere center, or NaN if uninitialized.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        if self.initialized {
            self.center
        } else {
            nan_point()
        }
    }

    /// The bounding sphere radius, or NaN if uninitialized.
    #[inline]
    pub fn radius(&self) -> Real {
        if self.initialized {
            self.radius
        } else {
            Real::NAN
        }
    }

    /// Sets the center and the radius of this sphere.
    #[inline]
    pub fn set(&mut self, center: Point<Real>, radius: Real) {
        *self = Self::new(center, radius);
    }

    /// Sets the radius of this sphere, clamped to zero.
    #[inline]
    pub fn set_radius(&mut self, radius: Real) {
        self.radius = radius.max(0.0);
    }

    /// Grows this sphere incrementally so that it contains `pt`.
    ///
    /// The sphere is recentered toward `pt` only when `pt` falls outside of
    /// it. This is a running approximation: the result is generally larger
    /// than the minimal sphere enclosing the same points.
    pub fn combine_point(&mut self, pt: &Point<Real>) {
        if !self.initialized {
            *self = Self::new(*pt, 0.0);
            return;
        }

        let dist = na::distance(pt, &self.center);

        if dist > self.radius {
            let new_radius = (dist + self.radius) / 2.0;
            let dir = (self.center - pt) / dist;
            self.center = pt + dir * new_radius;
            self.radius = new_radius;
        }
    }

    /// Combines a set of points into this sphere.
    ///
    /// When `merge` is `true` and this sphere is initialized, the points are
    /// added one at a time with [`BoundingSphere::combine_point`]. Otherwise
    /// the sphere is rebuilt: it is centered on the bounding box of the points
    /// and its radius reaches the farthest one. Nothing happens if `pts` is
    /// empty.
    pub fn combine_points(&mut self, pts: &[Point<Real>], merge: bool) {
        if pts.is_empty() {
            return;
        }

        if merge && self.initialized {
            for pt in pts {
                self.combine_point(pt);
            }
        } else if let Some((center, radius)) = super::details::point_cloud_bounding_sphere(pts) {
            *self = Self::new(center, radius);
        }
    }

    /// Combines a set of bounding volumes into this sphere.
    ///
    /// Each initialized volume is seen as the smallest sphere centered on its
    /// own center that encloses it. That sphere either replaces the current
    /// one if it encloses it, or both are merged into the smallest sphere
    /// enclosing them. Uninitialized volumes are ignored.
    pub fn combine_bounds(&mut self, bounds: &[Bounds], merge: bool) {
        let (mut center, mut radius) = if merge && self.initialized {
            (self.center, self.radius)
        } else {
            let mut union = Aabb::new_uninitialized();
            for b in bounds {
                union.merge(&b.local_aabb());
            }

            if !union.is_initialized() {
                return;
            }

            (union.center(), 0.0)
        };

        let mut any = false;

        for b in bounds.iter().filter(|b| b.is_initialized()) {
            any = true;
            let b_center = b.center();
            let b_radius = b.distance_max(&b_center);
            let dist = na::distance(&center, &b_center);

            // Candidate diameters.
            let d1 = 2.0 * radius;
            let d2 = 2.0 * b_radius;
            let d3 = dist + radius + b_radius;

            if d2 > d3 && d2 > d1 {
                // `b` encloses the current sphere.
                center = b_center;
                radius = b_radius;
            } else if d3 > d2 && d3 > d1 {
                // Here `dist` is positive.
                let new_radius = d3 / 2.0;
                center += (b_center - center) * ((new_radius - radius) / dist);
                radius = new_radius;
            }
        }

        if any {
            *self = Self::new(center, radius);
        }
    }

    /// Translates this sphere.
    #[inline]
    pub fn translate(&mut self, translation: &Vector<Real>) {
        if self.initialized {
            self.center += translation;
        }
    }

    /// The smallest AABB enclosing this sphere.
    pub fn local_aabb(&self) -> Aabb {
        if self.initialized {
            Aabb::from_half_extents(self.center, Vector::repeat(self.radius))
        } else {
            Aabb::new_uninitialized()
        }
    }

    /// The distance from `pt` to this sphere, zero if `pt` is inside.
    pub fn distance(&self, pt: &Point<Real>) -> Real {
        if !self.initialized {
            return Real::NAN;
        }

        (na::distance(&self.center, pt) - self.radius).max(0.0)
    }

    /// The distance from `pt` to the farthest point of this sphere.
    pub fn distance_max(&self, pt: &Point<Real>) -> Real {
        if !self.initialized {
            return Real::NAN;
        }

        na::distance(&self.center, pt) + self.radius
    }

    /// The point of this sphere closest to `pt`.
    ///
    /// This is `pt` itself if it lies inside of the sphere.
    pub fn nearest_point(&self, pt: &Point<Real>) -> Option<Point<Real>> {
        if !self.initialized {
            return None;
        }

        let v = pt - self.center;
        let dist = v.norm();

        if dist <= self.radius {
            Some(*pt)
        } else {
            Some(self.center + v * (self.radius / dist))
        }
    }

    /// The point of this sphere farthest from `pt`.
    ///
    /// If `pt` is the sphere center, the point along the first axis is chosen.
    pub fn farthest_point(&self, pt: &Point<Real>) -> Option<Point<Real>> {
        if !self.initialized {
            return None;
        }

        let v = self.center - pt;
        let dist = v.norm();

        if dist.is_zero() {
            Some(self.center + Vector::x() * self.radius)
        } else {
            Some(self.center + v * (self.radius / dist))
        }
    }

    /// Classifies `pt` relative to this sphere.
    ///
    /// Points on the boundary are `Inside`.
    #[inline]
    pub fn classify_point(&self, pt: &Point<Real>) -> IntersectionType {
        if self.initialized {
            details::classify_point_sphere(pt, &self.center, self.radius)
        } else {
            IntersectionType::Outside
        }
    }

    /// Does this sphere contain `pt`, boundary included?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.classify_point(pt) == IntersectionType::Inside
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center()
    }

    #[inline]
    fn intersects(&self, other: &BoundingSphere) -> bool {
        self.initialized
            && other.initialized
            && details::intersects_sphere_sphere(
                &self.center,
                self.radius,
                &other.center,
                other.radius,
            )
    }

    #[inline]
    fn contains(&self, other: &BoundingSphere) -> bool {
        self.initialized
            && other.initialized
            && matches!(
                details::classify_sphere_sphere(
                    &other.center,
                    other.radius,
                    &self.center,
                    self.radius
                ),
                IntersectionType::Inside | IntersectionType::Same
            )
    }

    #[inline]
    fn merge(&mut self, other: &BoundingSphere) {
        if !other.initialized {
            return;
        }

        if !self.initialized {
            *self = *other;
            return;
        }

        let mut dir = other.center - self.center;
        let norm = dir.normalize_mut();

        if norm.is_zero() {
            if other.radius > self.radius {
                self.radius = other.radius
            }
        } else {
            let s_center_dir = self.center.coords.dot(&dir);
            let o_center_dir = other.center.coords.dot(&dir);

            let right = if s_center_dir + self.radius > o_center_dir + other.radius {
                self.center + dir * self.radius
            } else {
                other.center + dir * other.radius
            };

            let left = if -s_center_dir + self.radius > -o_center_dir + other.radius {
                self.center - dir * self.radius
            } else {
                other.center - dir * other.radius
            };

            self.center = na::center(&left, &right);
            self.radius = na::distance(&right, &self.center);
        }
    }

    #[inline]
    fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        let mut res = *self;
        res.merge(other);
        res
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.radius += amount
    }

    #[inline]
    fn loosened(&self, amount: Real) -> BoundingSphere {
        let mut res = *self;
        res.loosen(amount);
        res
    }
}
