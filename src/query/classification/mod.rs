//! Classification of bounding volumes given by their canonical descriptions.
//!
//! Every function `classify_[a]_[b]` answers where its first operand lies
//! relative to its second operand.

pub use self::classification_aabb_aabb::{
    classify_aabb_aabb, classify_interval_interval, intersects_aabb_aabb,
};
pub use self::classification_obb_obb::{classify_obb_obb, intersects_obb_obb, obb_vertices, ObbDesc};
pub use self::classification_point::{
    classify_point_aabb, classify_point_obb, classify_point_sphere, obb_farthest_point,
    obb_nearest_point,
};
pub use self::classification_sphere_aabb::{classify_sphere_aabb, intersects_sphere_aabb};
pub use self::classification_sphere_obb::{classify_sphere_obb, intersects_sphere_obb};
pub use self::classification_sphere_sphere::{classify_sphere_sphere, intersects_sphere_sphere};

mod classification_aabb_aabb;
mod classification_obb_obb;
mod classification_point;
mod classification_sphere_aabb;
mod classification_sphere_obb;
mod classification_sphere_sphere;
