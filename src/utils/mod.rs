//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::cov::{center_cov, cov};
pub use self::obb::{axes_from_main_axis, obb, obb_with_axes};
#[cfg(feature = "dim2")]
pub use self::segments_intersection::{
    segments_intersect, segments_intersect_without_ends, side_of_line,
};

mod center;
mod cov;
mod obb;
#[cfg(feature = "dim2")]
mod segments_intersection;
