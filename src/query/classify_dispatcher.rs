//! Extensible classification of bounding volumes against each other.
//!
//! A dispatcher knows how to classify some pairs of volume kinds. The
//! [`DefaultClassifyDispatcher`](crate::query::DefaultClassifyDispatcher)
//! handles every pair built from [`Bounds`]. Custom dispatchers can override
//! some pairs and fall back on another dispatcher with
//! [`ClassifyDispatcher::chain`].
//!
//! Dispatchers only need to provide one direction of each pair: the provided
//! methods retry with swapped operands and invert the result.

use crate::bounding_volume::Bounds;
use crate::query::{IntersectionType, Unsupported};

/// Dispatcher for classification and intersection queries between bounding volumes.
///
/// `classify(a, b)` answers where `b` lies relative to `a`: `Inside` means
/// that `b` is inside of `a`, and `Enclosing` means that `b` encloses `a`.
pub trait ClassifyDispatcher {
    /// Classifies `b` relative to `a` without swapping the operands.
    ///
    /// Returns `Err(Unsupported)` if this dispatcher cannot classify this
    /// ordered pair of volume kinds.
    fn classify_directed(&self, a: &Bounds, b: &Bounds) -> Result<IntersectionType, Unsupported>;

    /// Tests if `a` and `b` intersect, without swapping the operands.
    fn intersects_directed(&self, a: &Bounds, b: &Bounds) -> Result<bool, Unsupported>;

    /// Classifies `b` relative to `a`.
    ///
    /// Uninitialized volumes are always `Outside`. If the pair is not supported
    /// in this order, the operands are swapped and the result is inverted.
    fn classify(&self, a: &Bounds, b: &Bounds) -> Result<IntersectionType, Unsupported> {
        if !a.is_initialized() || !b.is_initialized() {
            return Ok(IntersectionType::Outside);
        }

        self.classify_directed(a, b).or_else(|_| {
            log::debug!(
                "classifying {} against {} with swapped operands",
                a.kind(),
                b.kind()
            );
            self.classify_directed(b, a)
                .map(IntersectionType::invert)
                .map_err(|_| unsupported(a, b))
        })
    }

    /// Tests if `a` and `b` intersect.
    ///
    /// Uninitialized volumes never intersect. If the pair is not supported in
    /// this order, the operands are swapped.
    fn intersects(&self, a: &Bounds, b: &Bounds) -> Result<bool, Unsupported> {
        if !a.is_initialized() || !b.is_initialized() {
            return Ok(false);
        }

        self.intersects_directed(a, b).or_else(|_| {
            log::debug!(
                "testing {} against {} with swapped operands",
                a.kind(),
                b.kind()
            );
            self.intersects_directed(b, a)
                .map_err(|_| unsupported(a, b))
        })
    }

    /// Construct a `ClassifyDispatcher` that falls back on `other` for cases not handled by `self`.
    fn chain<U: ClassifyDispatcher>(self, other: U) -> ClassifyDispatcherChain<Self, U>
    where
        Self: Sized,
    {
        ClassifyDispatcherChain(self, other)
    }
}

fn unsupported(a: &Bounds, b: &Bounds) -> Unsupported {
    log::debug!("unable to classify {} against {}", a.kind(), b.kind());
    Unsupported::new(a.kind(), b.kind())
}

/// The composition of two dispatchers.
///
/// The first dispatcher is tried first, and the second one is used for the
/// pairs the first one does not support.
pub struct ClassifyDispatcherChain<T, U>(T, U);

impl<T, U> ClassifyDispatcher for ClassifyDispatcherChain<T, U>
where
    T: ClassifyDispatcher,
    U: ClassifyDispatcher,
{
    fn classify_directed(&self, a: &Bounds, b: &Bounds) -> Result<IntersectionType, Unsupported> {
        (self.0)
            .classify_directed(a, b)
            .or_else(|_| (self.1).classify_directed(a, b))
    }

    fn intersects_directed(&self, a: &Bounds, b: &Bounds) -> Result<bool, Unsupported> {
        (self.0)
            .intersects_directed(a, b)
            .or_else(|_| (self.1).intersects_directed(a, b))
    }
}
