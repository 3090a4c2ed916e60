/*!
riposte
========

**riposte** is a 2 and 3-dimensional bounding-volume and shape-query library
written with the rust programming language.

It answers one question: what is the relationship between two geometric
descriptions? Bounding volumes (axis-aligned boxes, spheres, oriented boxes
and aggregates of those) can be built from point clouds, merged together and
classified against each other. In 2D, boundary paths made of lines and curves
can be tested for point, rectangle and path containment through a
crossing-number algorithm. Integer circles and spheres are rasterized with a
midpoint algorithm for exact integer containment queries.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![warn(unused_qualifications)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod factory;
pub mod query;
pub mod rasterization;
#[cfg(feature = "dim2")]
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim3")]
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix3, Point3, Translation3, UnitVector3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The number of corners of a box.
    pub const NUM_BOX_VERTICES: usize = 8;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The translation type.
    pub use Translation3 as Translation;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim2")]
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry2, Matrix2, Point2, Translation2, UnitVector2, Vector2};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The number of corners of a box.
    pub const NUM_BOX_VERTICES: usize = 4;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The unit vector type.
    pub use UnitVector2 as UnitVector;

    /// The matrix type.
    pub use Matrix2 as Matrix;

    /// The transformation matrix type.
    pub use Isometry2 as Isometry;

    /// The translation type.
    pub use Translation2 as Translation;
}
