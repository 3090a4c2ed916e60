use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real};

/// Computes the AABB of a set of points transformed by `m`.
///
/// Returns `None` if `pts` is empty.
pub fn point_cloud_aabb<'a, I>(m: &Isometry<Real>, pts: I) -> Option<Aabb>
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    let mut it = pts.into_iter();

    let wp0 = m * it.next()?;
    let mut min: Point<Real> = wp0;
    let mut max: Point<Real> = wp0;

    for pt in it {
        let wpt = m * pt;
        min = min.inf(&wpt);
        max = max.sup(&wpt);
    }

    Some(Aabb::new(min, max))
}

/// Computes the AABB of a set of points.
///
/// Returns `None` if `pts` is empty.
pub fn local_point_cloud_aabb<'a, I>(pts: I) -> Option<Aabb>
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    let mut it = pts.into_iter();

    let p0 = it.next()?;
    let mut min: Point<Real> = *p0;
    let mut max: Point<Real> = *p0;

    for pt in it {
        min = min.inf(pt);
        max = max.sup(pt);
    }

    Some(Aabb::new(min, max))
}
