use crate::math::{Isometry, Point, Real, Vector};

/// One step of the traversal of a path boundary.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathElement {
    /// Starts a new sub-path at the given point.
    MoveTo(Point<Real>),
    /// A straight line from the current point.
    LineTo(Point<Real>),
    /// A quadratic Bézier curve from the current point.
    QuadTo {
        /// The control point.
        ctrl: Point<Real>,
        /// The end-point.
        to: Point<Real>,
    },
    /// A cubic Bézier curve from the current point.
    CurveTo {
        /// The first control point.
        ctrl1: Point<Real>,
        /// The second control point.
        ctrl2: Point<Real>,
        /// The end-point.
        to: Point<Real>,
    },
    /// An elliptic arc from the current point, using the SVG endpoint
    /// parameterization.
    ArcTo {
        /// The end-point.
        to: Point<Real>,
        /// The radii of the ellipse.
        radii: Vector<Real>,
        /// The angle between the ellipse x axis and the x axis, in radians.
        x_axis_rotation: Real,
        /// Selects the arc spanning more than 180 degrees.
        large_arc: bool,
        /// Selects the arc drawn in the direction of increasing angles.
        sweep: bool,
    },
    /// Closes the current sub-path with a line back to the given point,
    /// which is the point of its last `MoveTo`.
    Close(Point<Real>),
}

impl PathElement {
    /// The point reached at the end of this element.
    #[inline]
    pub fn to(&self) -> Point<Real> {
        match *self {
            PathElement::MoveTo(to)
            | PathElement::LineTo(to)
            | PathElement::QuadTo { to, .. }
            | PathElement::CurveTo { to, .. }
            | PathElement::ArcTo { to, .. }
            | PathElement::Close(to) => to,
        }
    }

    /// Is this element a curve that must be flattened before crossing
    /// computations?
    #[inline]
    pub fn is_curved(&self) -> bool {
        matches!(
            self,
            PathElement::QuadTo { .. } | PathElement::CurveTo { .. } | PathElement::ArcTo { .. }
        )
    }

    /// Applies a rigid transformation to every point of this element.
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        match *self {
            PathElement::MoveTo(to) => PathElement::MoveTo(m * to),
            PathElement::LineTo(to) => PathElement::LineTo(m * to),
            PathElement::QuadTo { ctrl, to } => PathElement::QuadTo {
                ctrl: m * ctrl,
                to: m * to,
            },
            PathElement::CurveTo { ctrl1, ctrl2, to } => PathElement::CurveTo {
                ctrl1: m * ctrl1,
                ctrl2: m * ctrl2,
                to: m * to,
            },
            PathElement::ArcTo {
                to,
                radii,
                x_axis_rotation,
                large_arc,
                sweep,
            } => PathElement::ArcTo {
                to: m * to,
                radii,
                x_axis_rotation: x_axis_rotation + m.rotation.angle(),
                large_arc,
                sweep,
            },
            PathElement::Close(to) => PathElement::Close(m * to),
        }
    }
}
