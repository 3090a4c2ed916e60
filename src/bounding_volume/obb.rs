//! Oriented bounding box.

use crate::bounding_volume::aabb::nan_point;
use crate::bounding_volume::{Aabb, BoundingVolume, Bounds};
use crate::math::{Matrix, Point, Real, Vector, NUM_BOX_VERTICES};
use crate::query::details::{self, ObbDesc};
use crate::query::IntersectionType;
use crate::utils;
use arrayvec::ArrayVec;
use core::cell::OnceCell;

/// An oriented bounding box (an oriented bounding rectangle in 2D).
///
/// The box axes, stored as the columns of a matrix, are always unit-length
/// and mutually orthogonal. The half-extents are never negative.
///
/// The corners of the box are computed lazily and cached until the next
/// mutation.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Obb {
    center: Point<Real>,
    axes: Matrix<Real>,
    half_extents: Vector<Real>,
    initialized: bool,
    #[cfg_attr(feature = "serde-serialize", serde(skip))]
    vertices: OnceCell<ArrayVec<Point<Real>, NUM_BOX_VERTICES>>,
}

impl PartialEq for Obb {
    fn eq(&self, other: &Self) -> bool {
        self.initialized == other.initialized
            && self.center == other.center
            && self.axes == other.axes
            && self.half_extents == other.half_extents
    }
}

impl Default for Obb {
    fn default() -> Self {
        Self::new_uninitialized()
    }
}

#[cfg(feature = "dim2")]
fn orthonormalize(axes: &Matrix<Real>) -> Matrix<Real> {
    utils::axes_from_main_axis(&axes.column(0).into_owned()).unwrap_or_else(Matrix::identity)
}

#[cfg(feature = "dim3")]
fn orthonormalize(axes: &Matrix<Real>) -> Matrix<Real> {
    use crate::math::DEFAULT_EPSILON;

    let Some(a) = axes.column(0).try_normalize(DEFAULT_EPSILON) else {
        return Matrix::identity();
    };

    let second = axes.column(1) - a * a.dot(&axes.column(1));
    match second.try_normalize(DEFAULT_EPSILON) {
        Some(b) => Matrix::from_columns(&[a, b, a.cross(&b)]),
        None => utils::axes_from_main_axis(&a).unwrap_or_else(Matrix::identity),
    }
}

impl Obb {
    /// Creates a new oriented box.
    ///
    /// The axes (columns of `axes`) are orthonormalized, keeping the direction
    /// of the first one. Negative half-extents are clamped to zero.
    pub fn new(center: Point<Real>, axes: Matrix<Real>, half_extents: Vector<Real>) -> Obb {
        Obb {
            center,
            axes: orthonormalize(&axes),
            half_extents: half_extents.map(|e| e.max(0.0)),
            initialized: true,
            vertices: OnceCell::new(),
        }
    }

    /// Creates an oriented box that holds no data yet.
    pub fn new_uninitialized() -> Obb {
        Obb {
            center: Point::origin(),
            axes: Matrix::identity(),
            half_extents: Vector::zeros(),
            initialized: false,
            vertices: OnceCell::new(),
        }
    }

    /// Computes an oriented box around `pts` from their principal axes.
    ///
    /// The result is uninitialized if `pts` is empty.
    pub fn from_points(pts: &[Point<Real>]) -> Obb {
        let mut result = Self::new_uninitialized();
        result.combine_points(pts, false);
        result
    }

    /// Computes an oriented box around `pts` whose first axis is `main_axis`.
    ///
    /// The remaining axes are perpendicular to `main_axis`. If `main_axis` is
    /// zero, the principal axes of the points are used instead.
    pub fn from_points_with_axis(main_axis: &Vector<Real>, pts: &[Point<Real>]) -> Obb {
        match utils::axes_from_main_axis(main_axis) {
            Some(axes) => {
                let mut result = Self::new_uninitialized();
                if let Some((center, axes, half_extents)) = utils::obb_with_axes(&axes, pts) {
                    result.set(center, axes, half_extents);
                }
                result
            }
            None => Self::from_points(pts),
        }
    }

    fn set(&mut self, center: Point<Real>, axes: Matrix<Real>, half_extents: Vector<Real>) {
        *self = Self::new(center, axes, half_extents);
    }

    fn set_from_points(&mut self, pts: &[Point<Real>]) {
        if let Some((center, axes, half_extents)) = utils::obb(pts) {
            self.set(center, axes, half_extents);
        }
    }

    /// Does this box hold any data?
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Makes this box uninitialized again.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new_uninitialized();
    }

    /// The box center, or NaN if uninitialized.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        if self.initialized {
            self.center
        } else {
            nan_point()
        }
    }

    /// The box axes, one per column.
    #[inline]
    pub fn axes(&self) -> Matrix<Real> {
        self.axes
    }

    /// The half-extents of the box along each of its axes, or NaN if uninitialized.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        if self.initialized {
            self.half_extents
        } else {
            Vector::repeat(Real::NAN)
        }
    }

    /// A borrowed description of this box for the functions of [`crate::query::details`].
    #[inline]
    pub fn desc(&self) -> ObbDesc<'_> {
        ObbDesc {
            center: &self.center,
            axes: &self.axes,
            half_extents: &self.half_extents,
        }
    }

    /// The corners of this box, or nothing if uninitialized.
    pub fn vertices(&self) -> ArrayVec<Point<Real>, NUM_BOX_VERTICES> {
        if !self.initialized {
            return ArrayVec::new();
        }

        self.vertices
            .get_or_init(|| details::obb_vertices(&self.center, &self.axes, &self.half_extents))
            .clone()
    }

    /// The smallest AABB enclosing this box.
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(&self.vertices())
    }

    /// Combines a set of points into this box.
    ///
    /// When `merge` is `true` and this box is initialized, the new box also
    /// encloses the corners of the current one. Nothing happens if `pts` is
    /// empty.
    pub fn combine_points(&mut self, pts: &[Point<Real>], merge: bool) {
        if pts.is_empty() {
            return;
        }

        if merge && self.initialized {
            let mut all = pts.to_vec();
            all.extend(self.vertices());
            self.set_from_points(&all);
        } else {
            self.set_from_points(pts);
        }
    }

    /// Combines a set of bounding volumes into this box.
    ///
    /// A single box, sphere or AABB combined into an uninitialized box is
    /// copied as is. In every other case the box is recomputed from the
    /// corners of all the volumes. Uninitialized volumes are ignored.
    pub fn combine_bounds(&mut self, bounds: &[Bounds], merge: bool) {
        let merge = merge && self.initialized;
        let mut initialized = bounds.iter().filter(|b| b.is_initialized());

        if let (false, Some(single), None) = (merge, initialized.next(), initialized.next()) {
            match single {
                Bounds::Obb(obb) => {
                    *self = obb.clone();
                    return;
                }
                Bounds::Sphere(sphere) => {
                    let half_extents = Vector::repeat(sphere.radius());
                    self.set(sphere.center(), Matrix::identity(), half_extents);
                    return;
                }
                Bounds::Aabb(aabb) => {
                    self.set(aabb.center(), Matrix::identity(), aabb.half_extents());
                    return;
                }
                Bounds::Composed(_) => {}
            }
        }

        let mut pts: Vec<_> = bounds.iter().flat_map(|b| b.vertices()).collect();

        if pts.is_empty() {
            return;
        }

        if merge {
            pts.extend(self.vertices());
        }

        self.set_from_points(&pts);
    }

    /// Translates this box.
    pub fn translate(&mut self, translation: &Vector<Real>) {
        if self.initialized {
            self.center += translation;
            let _ = self.vertices.take();
        }
    }

    /// The distance from `pt` to this box, zero if `pt` is inside.
    pub fn distance(&self, pt: &Point<Real>) -> Real {
        self.nearest_point(pt)
            .map_or(Real::NAN, |nearest| na::distance(pt, &nearest))
    }

    /// The distance from `pt` to the farthest corner of this box.
    pub fn distance_max(&self, pt: &Point<Real>) -> Real {
        self.farthest_point(pt)
            .map_or(Real::NAN, |farthest| na::distance(pt, &farthest))
    }

    /// The point of this box closest to `pt`.
    pub fn nearest_point(&self, pt: &Point<Real>) -> Option<Point<Real>> {
        self.initialized.then(|| {
            details::obb_nearest_point(pt, &self.center, &self.axes, &self.half_extents)
        })
    }

    /// The point of this box farthest from `pt`.
    pub fn farthest_point(&self, pt: &Point<Real>) -> Option<Point<Real>> {
        self.initialized.then(|| {
            details::obb_farthest_point(pt, &self.center, &self.axes, &self.half_extents)
        })
    }

    /// Classifies `pt` relative to this box.
    ///
    /// Points on the boundary are `Inside`.
    pub fn classify_point(&self, pt: &Point<Real>) -> IntersectionType {
        if self.initialized {
            details::classify_point_obb(pt, &self.center, &self.axes, &self.half_extents)
        } else {
            IntersectionType::Outside
        }
    }

    /// Does this box contain `pt`, boundary included?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.classify_point(pt) == IntersectionType::Inside
    }
}

impl BoundingVolume for Obb {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center()
    }

    #[inline]
    fn intersects(&self, other: &Obb) -> bool {
        self.initialized
            && other.initialized
            && details::intersects_obb_obb(&self.desc(), &other.desc())
    }

    #[inline]
    fn contains(&self, other: &Obb) -> bool {
        self.initialized
            && other.initialized
            && matches!(
                details::classify_obb_obb(&other.desc(), &self.desc()),
                IntersectionType::Inside | IntersectionType::Same
            )
    }

    fn merge(&mut self, other: &Obb) {
        if !other.initialized {
            return;
        }

        if self.initialized {
            let mut pts = self.vertices().to_vec();
            pts.extend(other.vertices());
            self.set_from_points(&pts);
        } else {
            *self = other.clone();
        }
    }

    fn merged(&self, other: &Obb) -> Obb {
        let mut res = self.clone();
        res.merge(other);
        res
    }

    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        if self.initialized {
            self.half_extents.add_scalar_mut(amount);
            let _ = self.vertices.take();
        }
    }

    fn loosened(&self, amount: Real) -> Obb {
        let mut res = self.clone();
        res.loosen(amount);
        res
    }
}
