use na::{Point2, Point3};

use crate::rasterization::{circle_contains_point, CirclePerimeterIterator};

// The radius of the rasterized disc cut from a sphere of radius `radius` at
// the height `dz` from its center.
fn slice_radius(radius: i32, dz: i32) -> Option<i32> {
    let mut samples = CirclePerimeterIterator::new(Point2::origin(), radius, 0..2, false);
    let mut result = None;

    while let Some((x, y)) = samples.next_coords() {
        if y == dz {
            result = result.max(Some(x));
        }
    }

    result
}

/// Tests if `pt` lies inside of the rasterized sphere, boundary included.
///
/// The sphere is cut into discs orthogonal to the z axis: `pt` is inside if
/// it is inside of the rasterized disc at its height.
pub fn sphere_contains_point(center: &Point3<i32>, radius: i32, pt: &Point3<i32>) -> bool {
    let radius = radius.saturating_abs();
    let dz = (i64::from(pt.z) - i64::from(center.z)).abs();

    if dz > i64::from(radius) {
        return false;
    }

    // `dz` is at most `radius` from here on.
    slice_radius(radius, dz as i32).is_some_and(|slice| {
        circle_contains_point(&center.xy(), slice, &pt.xy())
    })
}
