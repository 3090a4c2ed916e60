use crate::bounding_volume::BoundsKind;

/// Error indicating that a classification is not supported between two kinds
/// of bounding volumes.
///
/// A dispatcher returns this error when it can classify the pair neither
/// directly nor with swapped operands. When dispatchers are chained, the
/// next dispatcher in the chain is tried instead.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("unable to classify {lhs} against {rhs}")]
pub struct Unsupported {
    /// The kind of the first operand.
    pub lhs: BoundsKind,
    /// The kind of the second operand.
    pub rhs: BoundsKind,
}

impl Unsupported {
    /// The error for the operands `lhs` and `rhs`.
    #[inline]
    pub fn new(lhs: BoundsKind, rhs: BoundsKind) -> Self {
        Unsupported { lhs, rhs }
    }
}
