use core::ops::Range;

use na::Point2;
use smallvec::SmallVec;

use crate::factory::{IntGeomFactory, NalgebraFactory};

/// Error returned when a perimeter iterator is asked for a point after its
/// last one.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("the perimeter iterator has no more points")]
pub struct PerimeterExhausted;

/// A midpoint-circle walk along the perimeter of an integer circle.
///
/// The perimeter is split into eight octants, each one traversed from an
/// axis point toward a diagonal:
///
/// | octant | from | toward |
/// |--------|------|--------|
/// | 0 | `(cx, cy + r)` | `+x+y` |
/// | 1 | `(cx + r, cy)` | `+x+y` |
/// | 2 | `(cx, cy - r)` | `+x-y` |
/// | 3 | `(cx + r, cy)` | `+x-y` |
/// | 4 | `(cx, cy - r)` | `-x-y` |
/// | 5 | `(cx - r, cy)` | `-x-y` |
/// | 6 | `(cx, cy + r)` | `-x+y` |
/// | 7 | `(cx - r, cy)` | `-x+y` |
///
/// Octants 3, 4, 6 and 7 start on a point already produced by an earlier
/// octant. With `skip` enabled, that point is not produced twice, and neither
/// are the diagonal points where two octants meet. The produced points go
/// through the factory `F`.
///
/// Coordinates that do not fit in an `i32` are clamped to its range.
#[derive(Clone, Debug)]
pub struct CirclePerimeterIterator<F = NalgebraFactory> {
    cx: i32,
    cy: i32,
    radius: i32,
    octant: u8,
    last_octant: u8,
    skip: bool,
    x: i32,
    y: i32,
    decision: i64,
    junctions: SmallVec<[(i32, i32); 8]>,
    factory: F,
}

impl CirclePerimeterIterator {
    /// Iterates through the `octants` of the circle with the given center
    /// and radius.
    ///
    /// A negative radius is replaced by its absolute value, saturated to
    /// `i32::MAX`, and octants past the eighth are ignored.
    pub fn new(center: Point2<i32>, radius: i32, octants: Range<u8>, skip: bool) -> Self {
        Self::with_factory(center, radius, octants, skip, NalgebraFactory)
    }
}

impl<F: IntGeomFactory> CirclePerimeterIterator<F> {
    /// Iterates through the `octants` of a circle, building the produced
    /// points with `factory`.
    pub fn with_factory(
        center: Point2<i32>,
        radius: i32,
        octants: Range<u8>,
        skip: bool,
        factory: F,
    ) -> Self {
        let mut result = CirclePerimeterIterator {
            cx: center.x,
            cy: center.y,
            radius: radius.saturating_abs(),
            octant: octants.start,
            last_octant: octants.end.min(8),
            skip,
            x: 0,
            y: 0,
            decision: 0,
            junctions: SmallVec::new(),
            factory,
        };
        result.reset();
        result
    }

    /// The next point, or `PerimeterExhausted` once the perimeter is fully
    /// traversed.
    pub fn try_next(&mut self) -> Result<F::Point, PerimeterExhausted> {
        self.next().ok_or(PerimeterExhausted)
    }

    fn reset(&mut self) {
        self.x = 0;
        self.y = self.radius;
        self.decision = 3 - 2 * i64::from(self.radius);

        // A null radius has a single point, kept by the junction check.
        if self.skip && self.radius > 0 && matches!(self.octant, 3 | 4 | 6 | 7) {
            self.step();
        }
    }

    fn step(&mut self) {
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        if self.decision <= 0 {
            self.decision += 4 * x + 6;
        } else {
            self.decision += 4 * (x - y) + 10;
            self.y -= 1;
        }
        self.x += 1;
    }

    fn octant_point(&self) -> (i32, i32) {
        let (cx, cy, x, y) = (self.cx, self.cy, self.x, self.y);
        match self.octant {
            0 => (cx.saturating_add(x), cy.saturating_add(y)),
            1 => (cx.saturating_add(y), cy.saturating_add(x)),
            2 => (cx.saturating_add(x), cy.saturating_sub(y)),
            3 => (cx.saturating_add(y), cy.saturating_sub(x)),
            4 => (cx.saturating_sub(x), cy.saturating_sub(y)),
            5 => (cx.saturating_sub(y), cy.saturating_sub(x)),
            6 => (cx.saturating_sub(x), cy.saturating_add(y)),
            _ => (cx.saturating_sub(y), cy.saturating_add(x)),
        }
    }

    pub(crate) fn next_coords(&mut self) -> Option<(i32, i32)> {
        while self.octant < self.last_octant {
            let pt = self.octant_point();
            self.step();

            if self.x <= self.y {
                return Some(pt);
            }

            // End of the octant: its last point may be shared with an octant
            // already traversed.
            let duplicate = self.junctions.contains(&pt);
            if !duplicate {
                self.junctions.push(pt);
            }
            self.octant += 1;
            self.reset();

            if !duplicate {
                return Some(pt);
            }
        }

        None
    }
}

impl<F: IntGeomFactory> Iterator for CirclePerimeterIterator<F> {
    type Item = F::Point;

    #[inline]
    fn next(&mut self) -> Option<F::Point> {
        let (x, y) = self.next_coords()?;
        Some(self.factory.point(x, y))
    }
}

/// Every point of the perimeter of the circle, each one produced once.
pub fn circle_perimeter(center: Point2<i32>, radius: i32) -> CirclePerimeterIterator {
    CirclePerimeterIterator::new(center, radius, 0..8, true)
}
