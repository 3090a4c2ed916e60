//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::BoundingSphere;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::BoundingVolume;
pub use crate::bounding_volume::bounds::{Bounds, BoundsKind};
pub use crate::bounding_volume::composed::ComposedBounds;
#[doc(inline)]
pub use crate::bounding_volume::obb::Obb;

#[doc(hidden)]
pub mod bounding_volume;

#[doc(hidden)]
pub mod aabb;
mod aabb_utils;
#[doc(hidden)]
pub mod bounding_sphere;
mod bounding_sphere_utils;
mod bounds;
mod composed;
#[doc(hidden)]
pub mod obb;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    pub use super::aabb_utils::{local_point_cloud_aabb, point_cloud_aabb};
    pub use super::bounding_sphere_utils::{
        point_cloud_bounding_sphere, point_cloud_bounding_sphere_with_center,
    };
}
