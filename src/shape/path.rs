use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::query::crossings::{self, CrossingMode, PathShadow};
use crate::shape::{FlatteningParams, FlatteningPathIterator, PathElement, PathIterator};

/// The rule deciding which points are inside of a path from the number of
/// times a ray starting at them crosses its boundary.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WindingRule {
    /// Inside if the signed number of crossings is not zero.
    #[default]
    NonZero,
    /// Inside if the number of crossings is odd.
    EvenOdd,
}

impl WindingRule {
    /// The mask applied to the crossings of a point to decide containment.
    #[inline]
    pub fn point_mask(self) -> i32 {
        match self {
            WindingRule::NonZero => -1,
            WindingRule::EvenOdd => 1,
        }
    }

    /// The mask applied to the crossings of a shadow to decide containment
    /// or intersection.
    ///
    /// The crossings of a shadow count both its lower and upper edges, so
    /// an odd number of boundaries gives an even count.
    #[inline]
    pub fn shadow_mask(self) -> i32 {
        match self {
            WindingRule::NonZero => -1,
            WindingRule::EvenOdd => 2,
        }
    }
}

/// A 2D boundary made of lines, Bézier curves and elliptic arcs.
///
/// A non-empty path always starts with a `MoveTo`: drawing commands issued on
/// an empty path start it at their end-point.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    elements: Vec<PathElement>,
    winding_rule: WindingRule,
    flattening: FlatteningParams,
}

impl Path {
    /// Creates an empty path.
    pub fn new(winding_rule: WindingRule) -> Self {
        Path {
            elements: Vec::new(),
            winding_rule,
            flattening: FlatteningParams::default(),
        }
    }

    /// The winding rule of this path.
    #[inline]
    pub fn winding_rule(&self) -> WindingRule {
        self.winding_rule
    }

    /// Sets the winding rule of this path.
    #[inline]
    pub fn set_winding_rule(&mut self, winding_rule: WindingRule) {
        self.winding_rule = winding_rule;
    }

    /// The parameters used to flatten the curves of this path.
    #[inline]
    pub fn flattening_params(&self) -> &FlatteningParams {
        &self.flattening
    }

    /// Sets the parameters used to flatten the curves of this path.
    #[inline]
    pub fn set_flattening_params(&mut self, params: FlatteningParams) {
        self.flattening = params;
    }

    /// The elements of this path.
    #[inline]
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// The number of elements of this path.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Does this path have no element?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// The end-point of the last element, if any.
    pub fn current_point(&self) -> Option<Point<Real>> {
        self.elements.last().map(PathElement::to)
    }

    /// Starts a new sub-path at `to`.
    ///
    /// A `MoveTo` directly following another one replaces it.
    pub fn move_to(&mut self, to: Point<Real>) -> &mut Self {
        if let Some(PathElement::MoveTo(last)) = self.elements.last_mut() {
            *last = to;
        } else {
            self.elements.push(PathElement::MoveTo(to));
        }
        self
    }

    // Pushes a drawing command, or starts the path if it is empty.
    fn draw(&mut self, elt: PathElement) -> &mut Self {
        if self.elements.is_empty() {
            self.elements.push(PathElement::MoveTo(elt.to()));
        } else {
            self.elements.push(elt);
        }
        self
    }

    /// Adds a straight line to `to`.
    pub fn line_to(&mut self, to: Point<Real>) -> &mut Self {
        self.draw(PathElement::LineTo(to))
    }

    /// Adds a quadratic Bézier curve to `to`.
    pub fn quad_to(&mut self, ctrl: Point<Real>, to: Point<Real>) -> &mut Self {
        self.draw(PathElement::QuadTo { ctrl, to })
    }

    /// Adds a cubic Bézier curve to `to`.
    pub fn curve_to(
        &mut self,
        ctrl1: Point<Real>,
        ctrl2: Point<Real>,
        to: Point<Real>,
    ) -> &mut Self {
        self.draw(PathElement::CurveTo { ctrl1, ctrl2, to })
    }

    /// Adds an elliptic arc to `to`, following the SVG endpoint
    /// parameterization.
    ///
    /// Radii too small to reach `to` are scaled up. An arc with a zero
    /// radius is a straight line.
    pub fn arc_to(
        &mut self,
        to: Point<Real>,
        radii: Vector<Real>,
        x_axis_rotation: Real,
        large_arc: bool,
        sweep: bool,
    ) -> &mut Self {
        self.draw(PathElement::ArcTo {
            to,
            radii: radii.abs(),
            x_axis_rotation,
            large_arc,
            sweep,
        })
    }

    /// Closes the current sub-path with a line to its first point.
    ///
    /// Does nothing if the path is empty or already closed.
    pub fn close(&mut self) -> &mut Self {
        if matches!(self.elements.last(), None | Some(PathElement::Close(_))) {
            return self;
        }

        let start = self.elements.iter().rev().find_map(|elt| match elt {
            PathElement::MoveTo(pt) => Some(*pt),
            _ => None,
        });

        if let Some(start) = start {
            self.elements.push(PathElement::Close(start));
        }
        self
    }

    /// This path moved by `m`.
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        Path {
            elements: self.elements.iter().map(|elt| elt.transformed(m)).collect(),
            winding_rule: self.winding_rule,
            flattening: self.flattening,
        }
    }

    /// An iterator through the elements of this path, optionally moved by
    /// `transform`.
    pub fn path_iter(&self, transform: Option<&Isometry<Real>>) -> PathIterator<'_> {
        PathIterator::new(&self.elements, self.winding_rule)
            .with_flattening(self.flattening)
            .with_transform(transform.copied())
    }

    /// An iterator through this path where curves are replaced by line
    /// segments.
    pub fn flattened_iter(
        &self,
        transform: Option<&Isometry<Real>>,
    ) -> FlatteningPathIterator<PathIterator<'_>> {
        FlatteningPathIterator::new(self.path_iter(transform), self.flattening)
    }

    /// The AABB of the flattened path.
    ///
    /// It is uninitialized if the path is empty.
    pub fn local_aabb(&self) -> Aabb {
        let mut aabb = Aabb::new_uninitialized();
        for elt in self.flattened_iter(None) {
            aabb.combine_point(&elt.to());
        }
        aabb
    }

    /// Is `pt` inside of this path, boundary vertices included?
    ///
    /// Open sub-paths never contain anything.
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        let mask = self.winding_rule.point_mask();
        crossings::path_crossings_from_point(
            0,
            self.path_iter(None),
            pt,
            CrossingMode::SimpleIntersectionWhenNotPolygon,
        )
        .is_ok_and(|c| c.intersects() || c.masked(mask))
    }

    /// Is the rectangle `rect` entirely inside of this path?
    ///
    /// Open sub-paths are implicitly closed. A rectangle with an empty area is
    /// never contained.
    pub fn contains_rect(&self, rect: &Aabb) -> bool {
        if !has_area(rect) {
            return false;
        }

        let mask = self.winding_rule.shadow_mask();
        crossings::path_crossings_from_rect(0, self.path_iter(None), rect, CrossingMode::AutoClose)
            .is_ok_and(|c| c.masked(mask))
    }

    /// Does the rectangle `rect` intersect this path?
    ///
    /// Open sub-paths only intersect rectangles crossed by their segments.
    pub fn intersects_rect(&self, rect: &Aabb) -> bool {
        if !has_area(rect) {
            return false;
        }

        let mask = self.winding_rule.shadow_mask();
        crossings::path_crossings_from_rect(
            0,
            self.path_iter(None),
            rect,
            CrossingMode::SimpleIntersectionWhenNotPolygon,
        )
        .is_ok_and(|c| c.intersects() || c.masked(mask))
    }

    /// Does the area of `other` overlap the area of this path?
    ///
    /// The edges of each path are tested against the shadow of the other one,
    /// so a path entirely inside of the other one is found as well.
    pub fn intersects_path(&self, other: &Path) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        other.wraps_or_crosses(self) || self.wraps_or_crosses(other)
    }

    // Do the edges of `outline` enter this path, or wind around it?
    fn wraps_or_crosses(&self, outline: &Path) -> bool {
        // The count is twice the winding number of `outline` around this path.
        let mask = outline.winding_rule.shadow_mask();
        let shadow = PathShadow::new(self);
        crossings::path_crossings_from_path(
            0,
            outline.path_iter(None),
            &shadow,
            CrossingMode::SimpleIntersectionWhenNotPolygon,
        )
        .is_ok_and(|c| c.intersects() || c.masked(mask))
    }
}

fn has_area(rect: &Aabb) -> bool {
    let extents = rect.extents();
    rect.is_initialized() && extents.x > 0.0 && extents.y > 0.0
}
