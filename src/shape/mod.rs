//! 2D boundary paths made of lines and curves.
//!
//! A [`Path`] is a sequence of [`PathElement`]s with a [`WindingRule`].
//! Queries against paths go through the crossing-number algorithms of
//! [`query::crossings`](crate::query::crossings), which only see line
//! segments: curves are flattened on the fly by a [`FlatteningPathIterator`].

pub use self::error::PathError;
pub use self::flattening::{
    FlatteningParams, FlatteningPathIterator, DEFAULT_FLATTENING_LIMIT,
    DEFAULT_SUBDIVISION_BUDGET, SPLINE_APPROXIMATION_RATIO,
};
pub use self::path::{Path, WindingRule};
pub use self::path_element::PathElement;
pub use self::path_iterator::{PathElementIter, PathIterator};

mod error;
mod flattening;
mod path;
mod path_element;
mod path_iterator;
