//! Integer rasterization of circles and spheres.
//!
//! The perimeter of a circle of integer radius is walked with the midpoint
//! circle algorithm, one octant at a time. The containment and proximity
//! queries of this module only walk the octants facing the query point, and
//! compare it to the perimeter samples there, never to the exact circle.
//! Distances between integer points are Manhattan distances.

pub use self::circle::{
    circle_closest_point, circle_contains_point, circle_farthest_point, circles_intersect,
};
pub use self::circle_perimeter::{circle_perimeter, CirclePerimeterIterator, PerimeterExhausted};
#[cfg(feature = "dim3")]
pub use self::sphere::sphere_contains_point;

mod circle;
mod circle_perimeter;
#[cfg(feature = "dim3")]
mod sphere;
