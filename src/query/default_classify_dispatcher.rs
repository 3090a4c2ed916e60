use crate::bounding_volume::{Aabb, BoundingSphere, Bounds, ComposedBounds, Obb};
use crate::math::Matrix;
use crate::query::details::{self, ObbDesc};
use crate::query::{ClassifyDispatcher, IntersectionType, Unsupported};

/// The default classification dispatcher.
///
/// It supports every pair of [`Bounds`] kinds. Each mixed pair is implemented
/// in a single direction:
///
/// | `a` \ `b`  | Aabb | Sphere | Obb | Composed |
/// |------------|------|--------|-----|----------|
/// | Aabb       | yes  | yes    |     |          |
/// | Sphere     | yes  | yes    |     |          |
/// | Obb        | yes  | yes    | yes |          |
/// | Composed   | yes  | yes    | yes | yes      |
///
/// The empty cells are resolved by swapping the operands.
///
/// An aggregate is classified child by child: the other volume is `Inside`
/// as soon as it is inside of one child, and the classifications against the
/// children are combined with [`IntersectionType::or`] otherwise.
///
/// Two aggregates are compared through every pair of children. `b` is
/// `Inside` of `a` when each child of `b` is inside of some child of `a`,
/// and `Enclosing` in the converse case. Swapping two aggregates thus
/// inverts their classification.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultClassifyDispatcher;

// `b` relative to `a`, both being boxes.
fn classify_obb_aabb(a: &Obb, b: &Aabb) -> IntersectionType {
    let center = b.center();
    let half_extents = b.half_extents();
    let axes = Matrix::identity();
    let b_desc = ObbDesc {
        center: &center,
        axes: &axes,
        half_extents: &half_extents,
    };
    details::classify_obb_obb(&b_desc, &a.desc())
}

fn intersects_obb_aabb(a: &Obb, b: &Aabb) -> bool {
    let center = b.center();
    let half_extents = b.half_extents();
    let axes = Matrix::identity();
    let b_desc = ObbDesc {
        center: &center,
        axes: &axes,
        half_extents: &half_extents,
    };
    details::intersects_obb_obb(&a.desc(), &b_desc)
}

fn classify_sphere_aabb(s: &BoundingSphere, b: &Aabb) -> IntersectionType {
    details::classify_sphere_aabb(&s.center(), s.radius(), &b.mins(), &b.maxs())
}

fn intersects_sphere_aabb(s: &BoundingSphere, b: &Aabb) -> bool {
    details::intersects_sphere_aabb(&s.center(), s.radius(), &b.mins(), &b.maxs())
}

fn covers(t: IntersectionType, relation: IntersectionType) -> bool {
    t == relation || t == IntersectionType::Same
}

impl DefaultClassifyDispatcher {
    fn classify_composed(
        &self,
        a: &ComposedBounds,
        b: &Bounds,
    ) -> Result<IntersectionType, Unsupported> {
        let mut result = None;

        for child in a.children().iter().filter(|c| c.is_initialized()) {
            let classification = self.classify(child, b)?;

            if classification == IntersectionType::Inside {
                return Ok(IntersectionType::Inside);
            }

            result = Some(match result {
                None => classification,
                Some(prev) => classification.or(prev),
            });
        }

        Ok(result.unwrap_or(IntersectionType::Outside))
    }

    // `b` relative to `a`, both being aggregates.
    fn classify_composed_composed(
        &self,
        a: &ComposedBounds,
        b: &ComposedBounds,
    ) -> Result<IntersectionType, Unsupported> {
        let a_children: Vec<_> = a.children().iter().filter(|c| c.is_initialized()).collect();
        let b_children: Vec<_> = b.children().iter().filter(|c| c.is_initialized()).collect();

        if a_children.is_empty() || b_children.is_empty() {
            return Ok(IntersectionType::Outside);
        }

        // Row `i` holds the children of `b` relative to the `i`-th child of `a`.
        let mut table = Vec::with_capacity(a_children.len() * b_children.len());
        for ac in &a_children {
            for bc in &b_children {
                table.push(self.classify(ac, bc)?);
            }
        }

        let nb = b_children.len();
        let rows = || table.chunks_exact(nb);
        let b_inside = (0..nb).all(|j| rows().any(|row| covers(row[j], IntersectionType::Inside)));
        let a_inside = rows().all(|row| {
            row.iter()
                .any(|t| covers(*t, IntersectionType::Enclosing))
        });

        let result = match (b_inside, a_inside) {
            (true, true) => IntersectionType::Same,
            (true, false) => IntersectionType::Inside,
            (false, true) => IntersectionType::Enclosing,
            (false, false) if table.iter().any(|t| t.is_intersecting()) => {
                IntersectionType::Spanning
            }
            (false, false) => IntersectionType::Outside,
        };

        Ok(result)
    }

    fn intersects_composed(&self, a: &ComposedBounds, b: &Bounds) -> Result<bool, Unsupported> {
        for child in a.children() {
            if self.intersects(child, b)? {
                return Ok(true);
            }
        }

        Ok(false)
    }
}

impl ClassifyDispatcher for DefaultClassifyDispatcher {
    fn classify_directed(&self, a: &Bounds, b: &Bounds) -> Result<IntersectionType, Unsupported> {
        match (a, b) {
            (Bounds::Aabb(a), Bounds::Aabb(b)) => Ok(details::classify_aabb_aabb(
                &b.mins(),
                &b.maxs(),
                &a.mins(),
                &a.maxs(),
            )),
            (Bounds::Aabb(a), Bounds::Sphere(b)) => Ok(classify_sphere_aabb(b, a)),
            (Bounds::Sphere(a), Bounds::Aabb(b)) => Ok(classify_sphere_aabb(a, b).invert()),
            (Bounds::Sphere(a), Bounds::Sphere(b)) => Ok(details::classify_sphere_sphere(
                &b.center(),
                b.radius(),
                &a.center(),
                a.radius(),
            )),
            (Bounds::Obb(a), Bounds::Aabb(b)) => Ok(classify_obb_aabb(a, b)),
            (Bounds::Obb(a), Bounds::Sphere(b)) => Ok(details::classify_sphere_obb(
                &b.center(),
                b.radius(),
                &a.center(),
                &a.axes(),
                &a.half_extents(),
            )),
            (Bounds::Obb(a), Bounds::Obb(b)) => Ok(details::classify_obb_obb(&b.desc(), &a.desc())),
            (Bounds::Composed(a), Bounds::Composed(b)) => self.classify_composed_composed(a, b),
            (Bounds::Composed(a), b) => self.classify_composed(a, b),
            _ => Err(Unsupported::new(a.kind(), b.kind())),
        }
    }

    fn intersects_directed(&self, a: &Bounds, b: &Bounds) -> Result<bool, Unsupported> {
        match (a, b) {
            (Bounds::Aabb(a), Bounds::Aabb(b)) => Ok(details::intersects_aabb_aabb(
                &a.mins(),
                &a.maxs(),
                &b.mins(),
                &b.maxs(),
            )),
            (Bounds::Aabb(a), Bounds::Sphere(b)) | (Bounds::Sphere(b), Bounds::Aabb(a)) => {
                Ok(intersects_sphere_aabb(b, a))
            }
            (Bounds::Sphere(a), Bounds::Sphere(b)) => Ok(details::intersects_sphere_sphere(
                &a.center(),
                a.radius(),
                &b.center(),
                b.radius(),
            )),
            (Bounds::Obb(a), Bounds::Aabb(b)) => Ok(intersects_obb_aabb(a, b)),
            (Bounds::Obb(a), Bounds::Sphere(b)) => Ok(details::intersects_sphere_obb(
                &b.center(),
                b.radius(),
                &a.center(),
                &a.axes(),
                &a.half_extents(),
            )),
            (Bounds::Obb(a), Bounds::Obb(b)) => {
                Ok(details::intersects_obb_obb(&a.desc(), &b.desc()))
            }
            (Bounds::Composed(a), b) => self.intersects_composed(a, b),
            _ => Err(Unsupported::new(a.kind(), b.kind())),
        }
    }
}
