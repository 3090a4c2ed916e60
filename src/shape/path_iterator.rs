use crate::math::{Isometry, Real};
use crate::shape::{FlatteningParams, FlatteningPathIterator, PathElement, PathError, WindingRule};

/// An iterator through the elements of a path.
///
/// Crossing computations walk a path several times, so every implementor can
/// produce a fresh copy of itself with [`PathElementIter::restart`].
pub trait PathElementIter: Iterator<Item = PathElement> {
    /// The winding rule of the traversed path.
    fn winding_rule(&self) -> WindingRule;

    /// The parameters used to flatten the curves of the traversed path.
    fn flattening_params(&self) -> FlatteningParams {
        FlatteningParams::default()
    }

    /// An iterator at the start of the same path, as if freshly created.
    fn restart(&self) -> Self
    where
        Self: Sized;

    /// The next element, or `PathError::Exhausted` once the path is fully
    /// traversed.
    fn try_next(&mut self) -> Result<PathElement, PathError> {
        self.next().ok_or(PathError::Exhausted)
    }

    /// An iterator replacing the curves of this path by line segments.
    fn flattened(self) -> FlatteningPathIterator<Self>
    where
        Self: Sized,
    {
        let params = self.flattening_params();
        FlatteningPathIterator::new(self, params)
    }
}

/// An iterator through a sequence of path elements, optionally moved by a
/// rigid transformation.
#[derive(Clone, Debug)]
pub struct PathIterator<'a> {
    elements: &'a [PathElement],
    winding_rule: WindingRule,
    flattening: FlatteningParams,
    transform: Option<Isometry<Real>>,
    curr: usize,
}

impl<'a> PathIterator<'a> {
    /// Iterates through `elements`.
    ///
    /// The elements are not validated: crossing computations report
    /// `PathError::MissingInitialMoveTo` if they do not start with a `MoveTo`.
    pub fn new(elements: &'a [PathElement], winding_rule: WindingRule) -> Self {
        PathIterator {
            elements,
            winding_rule,
            flattening: FlatteningParams::default(),
            transform: None,
            curr: 0,
        }
    }

    /// Sets the parameters used when this iterator is flattened.
    pub fn with_flattening(mut self, params: FlatteningParams) -> Self {
        self.flattening = params;
        self
    }

    /// Applies `transform` to every emitted element.
    pub fn with_transform(mut self, transform: Option<Isometry<Real>>) -> Self {
        self.transform = transform;
        self
    }
}

impl Iterator for PathIterator<'_> {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        let elt = self.elements.get(self.curr)?;
        self.curr += 1;

        match &self.transform {
            Some(m) => Some(elt.transformed(m)),
            None => Some(*elt),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len() - self.curr;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PathIterator<'_> {}

impl PathElementIter for PathIterator<'_> {
    #[inline]
    fn winding_rule(&self) -> WindingRule {
        self.winding_rule
    }

    #[inline]
    fn flattening_params(&self) -> FlatteningParams {
        self.flattening
    }

    fn restart(&self) -> Self {
        PathIterator {
            curr: 0,
            ..self.clone()
        }
    }
}
