/// Errors raised while walking a path.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum PathError {
    /// The first element of a path is not a `MoveTo`.
    #[error("missing initial moveto in the path definition")]
    MissingInitialMoveTo,
    /// A path iterator was advanced past its last element.
    #[error("the path iterator has no more elements")]
    Exhausted,
}
