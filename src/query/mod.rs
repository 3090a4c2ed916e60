//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::classify()`] to find where a bounding volume lies relative to another one.
//! * [`query::intersects()`] to determine if two bounding volumes are intersecting or not.
//!
//! Both use the [`DefaultClassifyDispatcher`]. Other dispatchers can be
//! plugged in through the [`ClassifyDispatcher`] trait.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions
//! of the ones described above.
//! For example `classify_sphere_sphere` classifies two volumes known at compile-time to be spheres,
//! given by their center and radius.
//! The specific functions have the form `[operation]_[volume1]_[volume2]()` where:
//!
//! * `[operation]` can be `classify` or `intersects`.
//! * `[volume1]` is the kind of the volume classified, e.g., `sphere` or `aabb`.
//! * `[volume2]` is the kind of the reference volume.
//!
//! [`query::classify()`]: crate::query::classify
//! [`query::intersects()`]: crate::query::intersects

pub use self::classify_dispatcher::{ClassifyDispatcher, ClassifyDispatcherChain};
pub use self::default_classify_dispatcher::DefaultClassifyDispatcher;
pub use self::error::Unsupported;
pub use self::intersection_type::IntersectionType;

use crate::bounding_volume::Bounds;

mod classification;
mod classify_dispatcher;
#[cfg(feature = "dim2")]
pub mod crossings;
mod default_classify_dispatcher;
mod error;
mod intersection_type;

/// Queries dedicated to specific pairs of volumes.
pub mod details {
    pub use super::classification::*;
}

/// Finds where `b` lies relative to `a`.
///
/// `Inside` means that `b` is inside of `a`. Uninitialized volumes are
/// always `Outside`.
pub fn classify(a: &Bounds, b: &Bounds) -> Result<IntersectionType, Unsupported> {
    DefaultClassifyDispatcher.classify(a, b)
}

/// Tests if two bounding volumes intersect.
pub fn intersects(a: &Bounds, b: &Bounds) -> Result<bool, Unsupported> {
    DefaultClassifyDispatcher.intersects(a, b)
}
