//! Approximation of curved path elements by line segments.

use crate::math::{Point, Real, Vector};
use crate::shape::{PathElement, PathElementIter, WindingRule};
use na::RealField;
use smallvec::SmallVec;

/// The default maximal distance between a curve and its approximating segments.
pub const SPLINE_APPROXIMATION_RATIO: Real = 0.1;
/// The default maximal number of recursive subdivisions of a single curve.
pub const DEFAULT_FLATTENING_LIMIT: usize = 10;
/// The default maximal number of subdivisions performed over a whole path traversal.
pub const DEFAULT_SUBDIVISION_BUDGET: usize = 1 << 12;

/// Parameters controlling how curves are replaced by line segments.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlatteningParams {
    /// The maximal distance between a curve and the segments approximating it.
    pub approximation_ratio: Real,
    /// The maximal number of times a single curve is split in two.
    pub depth_limit: usize,
    /// The maximal number of splits over a whole traversal.
    ///
    /// Once it is spent, every remaining curve is replaced by its chord.
    pub subdivision_budget: usize,
}

impl Default for FlatteningParams {
    fn default() -> Self {
        FlatteningParams {
            approximation_ratio: SPLINE_APPROXIMATION_RATIO,
            depth_limit: DEFAULT_FLATTENING_LIMIT,
            subdivision_budget: DEFAULT_SUBDIVISION_BUDGET,
        }
    }
}

impl FlatteningParams {
    /// Flattening parameters with the given approximation ratio and the
    /// default limits.
    pub fn with_approximation_ratio(approximation_ratio: Real) -> Self {
        FlatteningParams {
            approximation_ratio: approximation_ratio.max(0.0),
            ..Default::default()
        }
    }
}

#[derive(Copy, Clone, Debug)]
enum Bezier {
    Quad([Point<Real>; 3]),
    Cubic([Point<Real>; 4]),
}

impl Bezier {
    fn end(&self) -> Point<Real> {
        match self {
            Bezier::Quad(pts) => pts[2],
            Bezier::Cubic(pts) => pts[3],
        }
    }

    fn squared_flatness(&self) -> Real {
        match self {
            Bezier::Quad([a, ctrl, b]) => line_point_distance_squared(a, b, ctrl),
            Bezier::Cubic([a, ctrl1, ctrl2, b]) => segment_point_distance_squared(a, b, ctrl1)
                .max(segment_point_distance_squared(a, b, ctrl2)),
        }
    }

    // De Casteljau subdivision at t = 0.5.
    fn split(&self) -> (Bezier, Bezier) {
        match self {
            Bezier::Quad([a, ctrl, b]) => {
                let ac = na::center(a, ctrl);
                let cb = na::center(ctrl, b);
                let mid = na::center(&ac, &cb);
                (Bezier::Quad([*a, ac, mid]), Bezier::Quad([mid, cb, *b]))
            }
            Bezier::Cubic([a, c1, c2, b]) => {
                let ac1 = na::center(a, c1);
                let c1c2 = na::center(c1, c2);
                let c2b = na::center(c2, b);
                let left_ctrl = na::center(&ac1, &c1c2);
                let right_ctrl = na::center(&c1c2, &c2b);
                let mid = na::center(&left_ctrl, &right_ctrl);
                (
                    Bezier::Cubic([*a, ac1, left_ctrl, mid]),
                    Bezier::Cubic([mid, right_ctrl, c2b, *b]),
                )
            }
        }
    }
}

fn line_point_distance_squared(a: &Point<Real>, b: &Point<Real>, p: &Point<Real>) -> Real {
    let ab = b - a;
    let ap = p - a;
    let sq_len = ab.norm_squared();

    if sq_len == 0.0 {
        return ap.norm_squared();
    }

    let cross = ap.perp(&ab);
    cross * cross / sq_len
}

fn segment_point_distance_squared(a: &Point<Real>, b: &Point<Real>, p: &Point<Real>) -> Real {
    let ab = b - a;
    let ap = p - a;
    let sq_len = ab.norm_squared();

    if sq_len == 0.0 {
        return ap.norm_squared();
    }

    let t = (ap.dot(&ab) / sq_len).clamp(0.0, 1.0);
    (ap - ab * t).norm_squared()
}

/// Converts an SVG elliptic arc into cubic Bézier curves, each spanning at
/// most a quarter turn.
///
/// Each cubic is given as its two control points followed by its end-point.
/// Returns `None` if one of the radii is zero, in which case the arc is a
/// straight line. The result is empty if `from` and `to` coincide.
pub(crate) fn arc_to_cubics(
    from: &Point<Real>,
    to: &Point<Real>,
    radii: &Vector<Real>,
    x_axis_rotation: Real,
    large_arc: bool,
    sweep: bool,
) -> Option<SmallVec<[[Point<Real>; 3]; 4]>> {
    let mut rx = radii.x.abs();
    let mut ry = radii.y.abs();

    if rx == 0.0 || ry == 0.0 {
        return None;
    }

    let mut cubics = SmallVec::new();

    if from == to {
        return Some(cubics);
    }

    let (sin_phi, cos_phi) = x_axis_rotation.sin_cos();
    let half = (from - to) / 2.0;
    let x1p = cos_phi * half.x + sin_phi * half.y;
    let y1p = -sin_phi * half.x + cos_phi * half.y;

    // Radii too small to join both end-points are scaled up.
    let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if lambda > 1.0 {
        let s = lambda.sqrt();
        rx *= s;
        ry *= s;
    }

    let num = rx * rx * ry * ry - rx * rx * y1p * y1p - ry * ry * x1p * x1p;
    let den = rx * rx * y1p * y1p + ry * ry * x1p * x1p;
    let mut coef = (num.max(0.0) / den).sqrt();
    if large_arc == sweep {
        coef = -coef;
    }

    let cxp = coef * rx * y1p / ry;
    let cyp = -coef * ry * x1p / rx;
    let mid = na::center(from, to);
    let center = Point::new(
        cos_phi * cxp - sin_phi * cyp + mid.x,
        sin_phi * cxp + cos_phi * cyp + mid.y,
    );

    let start_angle = ((y1p - cyp) / ry).atan2((x1p - cxp) / rx);
    let end_angle = ((-y1p - cyp) / ry).atan2((-x1p - cxp) / rx);
    let mut sweep_angle = end_angle - start_angle;

    if sweep && sweep_angle < 0.0 {
        sweep_angle += Real::two_pi();
    } else if !sweep && sweep_angle > 0.0 {
        sweep_angle -= Real::two_pi();
    }

    let ellipse_point = |t: Real| {
        let (sin_t, cos_t) = t.sin_cos();
        Point::new(
            center.x + rx * cos_t * cos_phi - ry * sin_t * sin_phi,
            center.y + rx * cos_t * sin_phi + ry * sin_t * cos_phi,
        )
    };
    let ellipse_tangent = |t: Real| {
        let (sin_t, cos_t) = t.sin_cos();
        Vector::new(
            -rx * sin_t * cos_phi - ry * cos_t * sin_phi,
            -rx * sin_t * sin_phi + ry * cos_t * cos_phi,
        )
    };

    let num_pieces = (sweep_angle.abs() / Real::frac_pi_2()).ceil().max(1.0) as usize;
    let delta = sweep_angle / num_pieces as Real;
    let k = 4.0 / 3.0 * (delta / 4.0).tan();
    let mut t0 = start_angle;
    let mut p0 = *from;

    for i in 0..num_pieces {
        let t1 = t0 + delta;
        let p1 = if i + 1 == num_pieces {
            *to
        } else {
            ellipse_point(t1)
        };
        let ctrl1 = p0 + ellipse_tangent(t0) * k;
        let ctrl2 = p1 - ellipse_tangent(t1) * k;
        cubics.push([ctrl1, ctrl2, p1]);
        t0 = t1;
        p0 = p1;
    }

    Some(cubics)
}

#[derive(Copy, Clone, Debug)]
struct PendingCurve {
    curve: Bezier,
    depth: usize,
}

/// A path iterator replacing every curve of another path iterator by line
/// segments.
///
/// It only yields `MoveTo`, `LineTo` and `Close` elements. Curves are split
/// in two until they are closer to their chord than the approximation ratio,
/// using an explicit work-list: neither the depth limit nor the subdivision
/// budget can be exceeded, whatever the input.
#[derive(Clone, Debug)]
pub struct FlatteningPathIterator<I> {
    inner: I,
    params: FlatteningParams,
    squared_ratio: Real,
    pending: SmallVec<[PendingCurve; 16]>,
    subdivisions: usize,
    budget_exhausted: bool,
    current: Point<Real>,
}

impl<I: PathElementIter> FlatteningPathIterator<I> {
    /// Flattens the elements yielded by `inner`.
    pub fn new(inner: I, params: FlatteningParams) -> Self {
        let ratio = params.approximation_ratio.max(0.0);
        FlatteningPathIterator {
            inner,
            params,
            squared_ratio: ratio * ratio,
            pending: SmallVec::new(),
            subdivisions: 0,
            budget_exhausted: false,
            current: Point::origin(),
        }
    }

    /// The parameters of this flattening.
    #[inline]
    pub fn params(&self) -> &FlatteningParams {
        &self.params
    }

    fn push_curve(&mut self, curve: Bezier) {
        self.pending.push(PendingCurve { curve, depth: 0 });
    }

    // Splits `piece` if it is not flat enough, or yields its chord.
    fn refine(&mut self, piece: PendingCurve) -> Option<PathElement> {
        if piece.depth < self.params.depth_limit
            && piece.curve.squared_flatness() >= self.squared_ratio
        {
            if self.subdivisions < self.params.subdivision_budget {
                self.subdivisions += 1;
                let (left, right) = piece.curve.split();
                self.pending.push(PendingCurve {
                    curve: right,
                    depth: piece.depth + 1,
                });
                self.pending.push(PendingCurve {
                    curve: left,
                    depth: piece.depth + 1,
                });
                return None;
            }

            if !self.budget_exhausted {
                log::debug!(
                    "flattening budget of {} subdivisions exhausted, remaining curves are replaced by their chords",
                    self.params.subdivision_budget
                );
                self.budget_exhausted = true;
            }
        }

        let to = piece.curve.end();
        self.current = to;
        Some(PathElement::LineTo(to))
    }
}

impl<I: PathElementIter> Iterator for FlatteningPathIterator<I> {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        loop {
            if let Some(piece) = self.pending.pop() {
                if let Some(elt) = self.refine(piece) {
                    return Some(elt);
                }
                continue;
            }

            match self.inner.next()? {
                elt @ (PathElement::MoveTo(to)
                | PathElement::LineTo(to)
                | PathElement::Close(to)) => {
                    self.current = to;
                    return Some(elt);
                }
                PathElement::QuadTo { ctrl, to } => {
                    self.push_curve(Bezier::Quad([self.current, ctrl, to]));
                }
                PathElement::CurveTo { ctrl1, ctrl2, to } => {
                    self.push_curve(Bezier::Cubic([self.current, ctrl1, ctrl2, to]));
                }
                PathElement::ArcTo {
                    to,
                    radii,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                } => {
                    let Some(cubics) = arc_to_cubics(
                        &self.current,
                        &to,
                        &radii,
                        x_axis_rotation,
                        large_arc,
                        sweep,
                    ) else {
                        self.current = to;
                        return Some(PathElement::LineTo(to));
                    };

                    let mut start = self.current;
                    let pieces: SmallVec<[Bezier; 4]> = cubics
                        .iter()
                        .map(|[ctrl1, ctrl2, end]| {
                            let curve = Bezier::Cubic([start, *ctrl1, *ctrl2, *end]);
                            start = *end;
                            curve
                        })
                        .collect();

                    // Last piece first: the work-list is a stack.
                    for curve in pieces.into_iter().rev() {
                        self.push_curve(curve);
                    }
                }
            }
        }
    }
}

impl<I: PathElementIter> PathElementIter for FlatteningPathIterator<I> {
    #[inline]
    fn winding_rule(&self) -> WindingRule {
        self.inner.winding_rule()
    }

    #[inline]
    fn flattening_params(&self) -> FlatteningParams {
        self.params
    }

    fn restart(&self) -> Self {
        FlatteningPathIterator::new(self.inner.restart(), self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Path, PathIterator};

    fn flatten(path: &Path) -> Vec<PathElement> {
        path.flattened_iter(None).collect()
    }

    #[test]
    fn quad_is_within_the_approximation_ratio() {
        let mut path = Path::default();
        let _ = path.move_to(Point::new(0.0, 0.0));
        let _ = path.quad_to(Point::new(5.0, 10.0), Point::new(10.0, 0.0));

        let flat = flatten(&path);
        assert!(flat.len() > 4);
        assert_eq!(flat.last().map(PathElement::to), Some(Point::new(10.0, 0.0)));

        for elt in &flat[1..] {
            let PathElement::LineTo(pt) = elt else {
                panic!("only lines are expected, found {:?}", elt);
            };
            // Points of the flattened curve lie on the parabola y = 2x - x²/5.
            let t = pt.x / 10.0;
            let expected = 2.0 * 10.0 * t * (1.0 - t);
            assert_relative_eq!(pt.y, expected, epsilon = 1.0e-9);
        }
    }

    #[test]
    fn flattened_curves_stay_in_their_control_hull() {
        use crate::bounding_volume::Aabb;
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..100 {
            let mut pts = [Point::origin(); 4];
            for pt in &mut pts {
                *pt = Point::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
            }

            let mut path = Path::default();
            let _ = path.move_to(pts[0]).curve_to(pts[1], pts[2], pts[3]);
            let hull = Aabb::from_points(&pts);
            let flat = flatten(&path);

            assert_eq!(flat.last().map(PathElement::to), Some(pts[3]));
            for elt in &flat {
                assert!(hull.distance(&elt.to()) <= 1.0e-9);
            }
        }
    }

    #[test]
    fn lines_are_untouched() {
        let elements = [
            PathElement::MoveTo(Point::new(0.0, 0.0)),
            PathElement::LineTo(Point::new(1.0, 0.0)),
            PathElement::Close(Point::new(0.0, 0.0)),
        ];
        let flat: Vec<_> = PathIterator::new(&elements, WindingRule::NonZero)
            .flattened()
            .collect();
        assert_eq!(flat, elements);
    }

    #[test]
    fn zero_budget_yields_chords() {
        let mut path = Path::default();
        path.set_flattening_params(FlatteningParams {
            subdivision_budget: 0,
            ..Default::default()
        });
        let _ = path.move_to(Point::new(0.0, 0.0));
        let _ = path.curve_to(
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        );
        let _ = path.quad_to(Point::new(5.0, -10.0), Point::new(0.0, 0.0));

        assert_eq!(
            flatten(&path),
            [
                PathElement::MoveTo(Point::new(0.0, 0.0)),
                PathElement::LineTo(Point::new(10.0, 0.0)),
                PathElement::LineTo(Point::new(0.0, 0.0)),
            ]
        );
    }

    #[test]
    fn depth_limit_bounds_the_number_of_segments() {
        let mut path = Path::default();
        path.set_flattening_params(FlatteningParams {
            approximation_ratio: 0.0,
            depth_limit: 3,
            ..Default::default()
        });
        let _ = path.move_to(Point::new(0.0, 0.0));
        let _ = path.curve_to(
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        );

        // MoveTo followed by 2^3 segments.
        assert_eq!(flatten(&path).len(), 9);
    }

    #[test]
    fn half_circle_arc_stays_on_the_circle() {
        let mut path = Path::default();
        let _ = path.move_to(Point::new(-5.0, 0.0));
        let _ = path.arc_to(Point::new(5.0, 0.0), Vector::new(5.0, 5.0), 0.0, false, false);

        let flat = flatten(&path);
        assert_eq!(flat.last().map(PathElement::to), Some(Point::new(5.0, 0.0)));

        for elt in &flat {
            let pt = elt.to();
            assert_relative_eq!(pt.coords.norm(), 5.0, epsilon = 1.0e-2);
        }
    }

    #[test]
    fn arc_orientation_follows_the_sweep_flag() {
        let from = Point::new(-5.0, 0.0);
        let to = Point::new(5.0, 0.0);
        let radii = Vector::new(5.0, 5.0);

        let ccw = arc_to_cubics(&from, &to, &radii, 0.0, false, true).unwrap_or_default();
        let cw = arc_to_cubics(&from, &to, &radii, 0.0, false, false).unwrap_or_default();
        assert_eq!(ccw.len(), 2);
        assert_eq!(cw.len(), 2);

        // Going with increasing angles from (-5, 0) passes through (0, -5).
        assert_relative_eq!(ccw[0][2], Point::new(0.0, -5.0), epsilon = 1.0e-9);
        assert_relative_eq!(cw[0][2], Point::new(0.0, 5.0), epsilon = 1.0e-9);
    }

    #[test]
    fn degenerate_arcs() {
        let from = Point::new(1.0, 1.0);
        let flat = Vector::new(0.0, 1.0);
        let round = Vector::new(1.0, 1.0);

        assert!(arc_to_cubics(&from, &Point::new(2.0, 2.0), &flat, 0.0, false, false).is_none());
        assert_eq!(
            arc_to_cubics(&from, &from, &round, 0.0, false, false).map(|c| c.len()),
            Some(0)
        );
    }
}
