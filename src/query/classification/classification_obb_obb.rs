use crate::math::{Matrix, Point, Real, Vector, DEFAULT_EPSILON, DIM, NUM_BOX_VERTICES};
use crate::query::IntersectionType;
use arrayvec::ArrayVec;

#[cfg(feature = "dim2")]
const NUM_SEPARATING_AXES: usize = 4;
#[cfg(feature = "dim3")]
const NUM_SEPARATING_AXES: usize = 15;

// Relative slack accepted when testing if a corner lies inside of a box.
const CORNER_TOLERANCE: Real = 1.0e-7;

/// An oriented box given by its center, its unit axes (as matrix columns) and
/// its half-extents along each axis.
#[derive(Copy, Clone, Debug)]
pub struct ObbDesc<'a> {
    /// The box center.
    pub center: &'a Point<Real>,
    /// The box axes, one per column.
    pub axes: &'a Matrix<Real>,
    /// The box half-extents along each axis.
    pub half_extents: &'a Vector<Real>,
}

impl ObbDesc<'_> {
    fn radius_along(&self, dir: &Vector<Real>) -> Real {
        (0..DIM)
            .map(|i| self.half_extents[i] * self.axes.column(i).dot(dir).abs())
            .sum()
    }

    fn contains_corner(&self, pt: &Point<Real>) -> bool {
        let local = self.axes.tr_mul(&(pt - self.center));
        (0..DIM).all(|i| {
            local[i].abs() <= self.half_extents[i] + CORNER_TOLERANCE * (1.0 + self.half_extents[i])
        })
    }
}

/// The corners of an oriented box.
///
/// Corner `k` takes the positive half-extent along axis `i` if the bit `i` of
/// `k` is set.
pub fn obb_vertices(
    center: &Point<Real>,
    axes: &Matrix<Real>,
    half_extents: &Vector<Real>,
) -> ArrayVec<Point<Real>, NUM_BOX_VERTICES> {
    (0..NUM_BOX_VERTICES)
        .map(|k| {
            let signed = Vector::from_fn(|i, _| {
                if k & (1 << i) != 0 {
                    half_extents[i]
                } else {
                    -half_extents[i]
                }
            });
            center + axes * signed
        })
        .collect()
}

fn separating_axes(obb1: &ObbDesc, obb2: &ObbDesc) -> ArrayVec<Vector<Real>, NUM_SEPARATING_AXES> {
    let mut result = ArrayVec::new();

    for i in 0..DIM {
        result.push(obb1.axes.column(i).into_owned());
    }
    for i in 0..DIM {
        result.push(obb2.axes.column(i).into_owned());
    }

    #[cfg(feature = "dim3")]
    for i in 0..DIM {
        for j in 0..DIM {
            let cross = obb1.axes.column(i).cross(&obb2.axes.column(j));
            // Parallel edges: the face axes already cover this direction.
            if cross.norm_squared() > DEFAULT_EPSILON {
                result.push(cross);
            }
        }
    }

    result
}

/// Tests if two oriented boxes overlap with the separating axis theorem.
///
/// Touching boxes are considered overlapping.
pub fn intersects_obb_obb(obb1: &ObbDesc, obb2: &ObbDesc) -> bool {
    let delta = obb2.center - obb1.center;

    separating_axes(obb1, obb2).iter().all(|axis| {
        let ra = obb1.radius_along(axis);
        let rb = obb2.radius_along(axis);
        delta.dot(axis).abs() <= ra + rb + DEFAULT_EPSILON * (ra + rb)
    })
}

/// Classifies the first oriented box relative to the second.
///
/// An axis-aligned box is an oriented box with identity axes.
pub fn classify_obb_obb(obb1: &ObbDesc, obb2: &ObbDesc) -> IntersectionType {
    if !intersects_obb_obb(obb1, obb2) {
        return IntersectionType::Outside;
    }

    let corners1 = obb_vertices(obb1.center, obb1.axes, obb1.half_extents);
    let corners2 = obb_vertices(obb2.center, obb2.axes, obb2.half_extents);
    let first_inside = corners1.iter().all(|pt| obb2.contains_corner(pt));
    let second_inside = corners2.iter().all(|pt| obb1.contains_corner(pt));

    match (first_inside, second_inside) {
        (true, true) => IntersectionType::Same,
        (true, false) => IntersectionType::Inside,
        (false, true) => IntersectionType::Enclosing,
        (false, false) => IntersectionType::Spanning,
    }
}
