//! Aggregate of bounding volumes.

use crate::bounding_volume::{Aabb, BoundingVolume, Bounds};
use crate::math::{Point, Real, Vector};
use crate::query::IntersectionType;
use core::cell::Cell;

/// A bounding volume made of several child volumes.
///
/// It has no geometry of its own: its extent is the union of the extents of
/// its children. The AABB of that union is computed lazily and cached until
/// the children change.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct ComposedBounds {
    children: Vec<Bounds>,
    #[cfg_attr(feature = "serde-serialize", serde(skip))]
    aabb: Cell<Option<Aabb>>,
}

impl PartialEq for ComposedBounds {
    fn eq(&self, other: &Self) -> bool {
        self.children == other.children
    }
}

impl ComposedBounds {
    /// Creates an aggregate of the given volumes.
    pub fn new(children: Vec<Bounds>) -> Self {
        ComposedBounds {
            children,
            aabb: Cell::new(None),
        }
    }

    /// The child volumes.
    #[inline]
    pub fn children(&self) -> &[Bounds] {
        &self.children
    }

    /// Adds a child volume.
    pub fn push(&mut self, child: Bounds) {
        self.children.push(child);
        self.aabb.set(None);
    }

    /// Does at least one child hold data?
    pub fn is_initialized(&self) -> bool {
        self.children.iter().any(Bounds::is_initialized)
    }

    /// Removes every child.
    pub fn reset(&mut self) {
        self.children.clear();
        self.aabb.set(None);
    }

    /// The AABB of the union of all the children.
    pub fn local_aabb(&self) -> Aabb {
        if let Some(aabb) = self.aabb.get() {
            return aabb;
        }

        let mut aabb = Aabb::new_uninitialized();
        for child in &self.children {
            aabb.merge(&child.local_aabb());
        }

        self.aabb.set(Some(aabb));
        aabb
    }

    /// The center of the AABB of this aggregate, or NaN if uninitialized.
    pub fn center(&self) -> Point<Real> {
        self.local_aabb().center()
    }

    /// The corners of all the children.
    pub fn vertices(&self) -> Vec<Point<Real>> {
        self.children.iter().flat_map(Bounds::vertices).collect()
    }

    /// Adds the given points as a new AABB child.
    ///
    /// If `merge` is `false` the existing children are removed first.
    /// Nothing happens if `pts` is empty.
    pub fn combine_points(&mut self, pts: &[Point<Real>], merge: bool) {
        if pts.is_empty() {
            return;
        }

        if !merge {
            self.reset();
        }

        self.push(Bounds::Aabb(Aabb::from_points(pts)));
    }

    /// Adds the given volumes as children.
    ///
    /// If `merge` is `false` the existing children are removed first.
    /// Nothing happens if `bounds` is empty.
    pub fn combine_bounds(&mut self, bounds: &[Bounds], merge: bool) {
        if bounds.is_empty() {
            return;
        }

        if !merge {
            self.reset();
        }

        self.children.extend_from_slice(bounds);
        self.aabb.set(None);
    }

    /// Translates every child.
    pub fn translate(&mut self, translation: &Vector<Real>) {
        for child in &mut self.children {
            child.translate(translation);
        }
        self.aabb.set(None);
    }

    fn initialized_children(&self) -> impl Iterator<Item = &Bounds> {
        self.children.iter().filter(|c| c.is_initialized())
    }

    /// The distance from `pt` to the closest child.
    pub fn distance(&self, pt: &Point<Real>) -> Real {
        self.initialized_children()
            .map(|c| c.distance(pt))
            .reduce(Real::min)
            .unwrap_or(Real::NAN)
    }

    /// The distance from `pt` to the farthest point of any child.
    pub fn distance_max(&self, pt: &Point<Real>) -> Real {
        self.initialized_children()
            .map(|c| c.distance_max(pt))
            .reduce(Real::max)
            .unwrap_or(Real::NAN)
    }

    /// The nearest point of the closest child.
    pub fn nearest_point(&self, pt: &Point<Real>) -> Option<Point<Real>> {
        self.initialized_children()
            .filter_map(|c| c.nearest_point(pt))
            .min_by(|a, b| na::distance_squared(a, pt).total_cmp(&na::distance_squared(b, pt)))
    }

    /// The farthest point among all children.
    pub fn farthest_point(&self, pt: &Point<Real>) -> Option<Point<Real>> {
        self.initialized_children()
            .filter_map(|c| c.farthest_point(pt))
            .max_by(|a, b| na::distance_squared(a, pt).total_cmp(&na::distance_squared(b, pt)))
    }

    /// Classifies `pt` relative to this aggregate: `Inside` if any child
    /// contains it.
    pub fn classify_point(&self, pt: &Point<Real>) -> IntersectionType {
        if self.children.iter().any(|c| c.contains_point(pt)) {
            IntersectionType::Inside
        } else {
            IntersectionType::Outside
        }
    }
}
