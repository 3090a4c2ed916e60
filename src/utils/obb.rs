use crate::math::{Matrix, Point, Real, Vector, DIM};
use ordered_float::OrderedFloat;

/// Computes an oriented bounding box for the given set of points.
///
/// The axes are the eigenvectors of the covariance matrix of `pts`, ordered by
/// decreasing extent and forming a right-handed basis. The returned OBB is not
/// guaranteed to be the smallest enclosing OBB, though it should be a pretty good
/// one for most purposes.
///
/// Returns `(center, axes, half_extents)` where the columns of `axes` are the
/// box axes, or `None` if `pts` is empty.
pub fn obb(pts: &[Point<Real>]) -> Option<(Point<Real>, Matrix<Real>, Vector<Real>)> {
    let cov = crate::utils::cov(pts)?;
    let eigv = cov.symmetric_eigen().eigenvectors;
    let (center, axes, half_extents) = obb_with_axes(&eigv, pts)?;

    let mut order: [usize; DIM] = core::array::from_fn(|i| i);
    order.sort_by_key(|i| core::cmp::Reverse(OrderedFloat(half_extents[*i])));

    let mut sorted_axes = Matrix::zeros();
    let mut sorted_half_extents = Vector::zeros();

    for (k, i) in order.iter().enumerate() {
        sorted_axes.set_column(k, &axes.column(*i));
        sorted_half_extents[k] = half_extents[*i];
    }

    if sorted_axes.determinant() < 0.0 {
        let last = -sorted_axes.column(DIM - 1);
        sorted_axes.set_column(DIM - 1, &last);
    }

    Some((center, sorted_axes, sorted_half_extents))
}

/// Fits a box with the given orthonormal axes around `pts`.
///
/// Each point is projected on each axis; the box center is the middle of the
/// projected ranges and the half-extents are half their lengths.
pub fn obb_with_axes(
    axes: &Matrix<Real>,
    pts: &[Point<Real>],
) -> Option<(Point<Real>, Matrix<Real>, Vector<Real>)> {
    if pts.is_empty() {
        return None;
    }

    let mut unit_axes = *axes;
    for mut column in unit_axes.column_iter_mut() {
        let _ = column.normalize_mut();
    }

    let mut mins = Vector::repeat(Real::MAX);
    let mut maxs = Vector::repeat(-Real::MAX);

    for pt in pts {
        for i in 0..DIM {
            let dot = unit_axes.column(i).dot(&pt.coords);
            mins[i] = mins[i].min(dot);
            maxs[i] = maxs[i].max(dot);
        }
    }

    let mut center = Point::origin();
    for i in 0..DIM {
        center += unit_axes.column(i) * ((maxs[i] + mins[i]) / 2.0);
    }

    Some((center, unit_axes, (maxs - mins) / 2.0))
}

/// Builds a right-handed orthonormal basis whose first axis is `main_axis`.
///
/// Returns `None` if `main_axis` is too small to be normalized.
#[cfg(feature = "dim2")]
pub fn axes_from_main_axis(main_axis: &Vector<Real>) -> Option<Matrix<Real>> {
    let a = main_axis.try_normalize(crate::math::DEFAULT_EPSILON)?;
    Some(Matrix::from_columns(&[a, Vector::new(-a.y, a.x)]))
}

/// Builds a right-handed orthonormal basis whose first axis is `main_axis`.
///
/// Returns `None` if `main_axis` is too small to be normalized.
#[cfg(feature = "dim3")]
pub fn axes_from_main_axis(main_axis: &Vector<Real>) -> Option<Matrix<Real>> {
    let a = main_axis.try_normalize(crate::math::DEFAULT_EPSILON)?;
    // Cross with the canonical axis least aligned with `a`.
    let helper = if a.x.abs() <= a.y.abs() && a.x.abs() <= a.z.abs() {
        Vector::x()
    } else if a.y.abs() <= a.z.abs() {
        Vector::y()
    } else {
        Vector::z()
    };
    let b = a.cross(&helper).normalize();
    let c = a.cross(&b);
    Some(Matrix::from_columns(&[a, b, c]))
}
