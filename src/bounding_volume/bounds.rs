use crate::bounding_volume::{Aabb, BoundingSphere, ComposedBounds, Obb};
use crate::math::{Point, Real, Vector};
use crate::query::IntersectionType;
use core::fmt;

/// The kind of a bounding volume.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoundsKind {
    /// An axis-aligned box.
    Aabb,
    /// A sphere.
    Sphere,
    /// An oriented box.
    Obb,
    /// An aggregate of volumes.
    Composed,
}

impl fmt::Display for BoundsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BoundsKind::Aabb => "aligned box",
            BoundsKind::Sphere => "sphere",
            BoundsKind::Obb => "oriented box",
            BoundsKind::Composed => "composed bounds",
        };
        f.pad(name)
    }
}

/// Any bounding volume.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Bounds {
    /// An axis-aligned box.
    Aabb(Aabb),
    /// A sphere.
    Sphere(BoundingSphere),
    /// An oriented box.
    Obb(Obb),
    /// An aggregate of volumes.
    Composed(ComposedBounds),
}

macro_rules! dispatch(
    ($self: ident, $b: ident => $e: expr) => {
        match $self {
            Bounds::Aabb($b) => $e,
            Bounds::Sphere($b) => $e,
            Bounds::Obb($b) => $e,
            Bounds::Composed($b) => $e,
        }
    }
);

impl Bounds {
    /// The kind of this volume.
    pub fn kind(&self) -> BoundsKind {
        match self {
            Bounds::Aabb(_) => BoundsKind::Aabb,
            Bounds::Sphere(_) => BoundsKind::Sphere,
            Bounds::Obb(_) => BoundsKind::Obb,
            Bounds::Composed(_) => BoundsKind::Composed,
        }
    }

    /// Does this volume hold any data?
    pub fn is_initialized(&self) -> bool {
        dispatch!(self, b => b.is_initialized())
    }

    /// Makes this volume uninitialized again, keeping its kind.
    pub fn reset(&mut self) {
        dispatch!(self, b => b.reset())
    }

    /// The center of this volume, or NaN if uninitialized.
    pub fn center(&self) -> Point<Real> {
        dispatch!(self, b => b.center())
    }

    /// The smallest AABB enclosing this volume.
    pub fn local_aabb(&self) -> Aabb {
        match self {
            Bounds::Aabb(b) => *b,
            Bounds::Sphere(b) => b.local_aabb(),
            Bounds::Obb(b) => b.local_aabb(),
            Bounds::Composed(b) => b.local_aabb(),
        }
    }

    /// The points used to represent this volume when it is merged into an
    /// oriented box.
    ///
    /// These are the box corners, the corners of the AABB of a sphere, and the
    /// corners of every child of an aggregate.
    pub fn vertices(&self) -> Vec<Point<Real>> {
        match self {
            Bounds::Aabb(b) => b.vertices().to_vec(),
            Bounds::Sphere(b) => b.local_aabb().vertices().to_vec(),
            Bounds::Obb(b) => b.vertices().to_vec(),
            Bounds::Composed(b) => b.vertices(),
        }
    }

    /// Translates this volume.
    pub fn translate(&mut self, translation: &Vector<Real>) {
        dispatch!(self, b => b.translate(translation))
    }

    /// The distance from `pt` to this volume, zero if `pt` is inside.
    pub fn distance(&self, pt: &Point<Real>) -> Real {
        dispatch!(self, b => b.distance(pt))
    }

    /// The distance from `pt` to the farthest point of this volume.
    pub fn distance_max(&self, pt: &Point<Real>) -> Real {
        dispatch!(self, b => b.distance_max(pt))
    }

    /// The point of this volume closest to `pt`.
    pub fn nearest_point(&self, pt: &Point<Real>) -> Option<Point<Real>> {
        dispatch!(self, b => b.nearest_point(pt))
    }

    /// The point of this volume farthest from `pt`.
    pub fn farthest_point(&self, pt: &Point<Real>) -> Option<Point<Real>> {
        dispatch!(self, b => b.farthest_point(pt))
    }

    /// Classifies `pt` relative to this volume.
    pub fn classify_point(&self, pt: &Point<Real>) -> IntersectionType {
        dispatch!(self, b => b.classify_point(pt))
    }

    /// Does this volume contain `pt`, boundary included?
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.classify_point(pt) == IntersectionType::Inside
    }

    /// Combines a set of points into this volume.
    ///
    /// If `merge` is `true` and this volume is initialized, the result encloses
    /// both its previous content and the points. Otherwise it is rebuilt from
    /// the points alone. Nothing happens if `pts` is empty.
    pub fn combine_points(&mut self, pts: &[Point<Real>], merge: bool) {
        dispatch!(self, b => b.combine_points(pts, merge))
    }

    /// Combines a set of volumes into this volume.
    ///
    /// See [`Bounds::combine_points`] for the meaning of `merge`.
    pub fn combine_bounds(&mut self, bounds: &[Bounds], merge: bool) {
        dispatch!(self, b => b.combine_bounds(bounds, merge))
    }
}

impl From<Aabb> for Bounds {
    fn from(b: Aabb) -> Self {
        Bounds::Aabb(b)
    }
}

impl From<BoundingSphere> for Bounds {
    fn from(b: BoundingSphere) -> Self {
        Bounds::Sphere(b)
    }
}

impl From<Obb> for Bounds {
    fn from(b: Obb) -> Self {
        Bounds::Obb(b)
    }
}

impl From<ComposedBounds> for Bounds {
    fn from(b: ComposedBounds) -> Self {
        Bounds::Composed(b)
    }
}
