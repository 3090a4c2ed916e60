use crate::math::{Point, Real};
use na;

/// Computes the geometric center (centroid) of a set of points.
///
/// The center is calculated by averaging all the point coordinates. All points
/// are weighted equally.
///
/// Returns `None` if `pts` is empty.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "dim2")] {
/// use riposte2d::utils::center;
/// use riposte2d::math::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(2.0, 2.0),
///     Point::new(0.0, 2.0),
/// ];
///
/// let c = center(&points).unwrap();
/// assert!((c.x - 1.0).abs() < 1e-6);
/// assert!((c.y - 1.0).abs() < 1e-6);
/// # }
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Option<Point<Real>> {
    let mut piter = pts.iter();
    let denom: Real = na::convert::<f64, Real>(1.0 / (pts.len() as f64));
    let mut res = *piter.next()? * denom;

    for pt in piter {
        res += pt.coords * denom;
    }

    Some(res)
}
