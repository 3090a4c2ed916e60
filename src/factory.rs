//! Injectable point construction.
//!
//! Algorithms that hand points back to the caller (path iteration, perimeter
//! rasterization, hull vertices) build them through a factory passed in
//! explicitly, so the same code can emit `nalgebra` points, plain tuples or any
//! other representation the caller works with.

use crate::math::{Point, Real};
use na::Point2;

/// Builds caller-chosen points from floating-point coordinates.
pub trait GeomFactory {
    /// The point representation produced by this factory.
    type Point;

    /// Converts a point of this crate into the caller's representation.
    fn point(&self, pt: &Point<Real>) -> Self::Point;
}

/// Builds caller-chosen points from 2D integer coordinates.
pub trait IntGeomFactory {
    /// The point representation produced by this factory.
    type Point;

    /// Creates the point `(x, y)`.
    fn point(&self, x: i32, y: i32) -> Self::Point;
}

/// The default factory, producing `nalgebra` points.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NalgebraFactory;

impl GeomFactory for NalgebraFactory {
    type Point = Point<Real>;

    #[inline]
    fn point(&self, pt: &Point<Real>) -> Point<Real> {
        *pt
    }
}

impl IntGeomFactory for NalgebraFactory {
    type Point = Point2<i32>;

    #[inline]
    fn point(&self, x: i32, y: i32) -> Point2<i32> {
        Point2::new(x, y)
    }
}

impl<F: GeomFactory> GeomFactory for &F {
    type Point = F::Point;

    #[inline]
    fn point(&self, pt: &Point<Real>) -> Self::Point {
        (*self).point(pt)
    }
}

impl<F: IntGeomFactory> IntGeomFactory for &F {
    type Point = F::Point;

    #[inline]
    fn point(&self, x: i32, y: i32) -> Self::Point {
        (*self).point(x, y)
    }
}
