//! Classification of a volume against another.

use core::fmt;

/// The spatial relationship between two volumes.
///
/// A classification always reads "the queried volume is ... the reference
/// volume": `Inside` means the queried volume lies entirely inside the reference,
/// `Enclosing` means it entirely contains the reference.
///
/// The declaration order is meaningful: [`IntersectionType::and`] picks the
/// variant declared last when two classifications disagree.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IntersectionType {
    /// Both volumes cover exactly the same space.
    Same,
    /// The queried volume contains the reference volume.
    Enclosing,
    /// The queried volume is contained in the reference volume.
    ///
    /// Touching the boundary from the inside still counts as inside.
    Inside,
    /// The volumes overlap without any containment.
    Spanning,
    /// The volumes do not overlap.
    Outside,
}

impl IntersectionType {
    /// Swaps the roles of the queried and reference volumes.
    ///
    /// `Inside` and `Enclosing` are exchanged, other variants are self-inverse.
    #[inline]
    #[must_use]
    pub fn invert(self) -> Self {
        match self {
            IntersectionType::Inside => IntersectionType::Enclosing,
            IntersectionType::Enclosing => IntersectionType::Inside,
            other => other,
        }
    }

    /// Combines the classifications of a volume against two parts of a union.
    ///
    /// Being inside one part is enough to be inside the union; any other
    /// disagreement yields `Spanning`.
    #[inline]
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        if self == other {
            self
        } else if self == IntersectionType::Inside || other == IntersectionType::Inside {
            IntersectionType::Inside
        } else {
            IntersectionType::Spanning
        }
    }

    /// Combines two partial classifications that must both hold, typically the
    /// per-axis classifications of two boxes.
    #[inline]
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        if self == other {
            return self;
        }

        match (self, other) {
            (IntersectionType::Inside, IntersectionType::Enclosing)
            | (IntersectionType::Enclosing, IntersectionType::Inside) => {
                IntersectionType::Spanning
            }
            _ => self.max(other),
        }
    }

    /// Does this classification imply that the volumes share some space?
    #[inline]
    pub fn is_intersecting(self) -> bool {
        self != IntersectionType::Outside
    }
}

impl fmt::Display for IntersectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntersectionType::Same => "same",
            IntersectionType::Enclosing => "enclosing",
            IntersectionType::Inside => "inside",
            IntersectionType::Spanning => "spanning",
            IntersectionType::Outside => "outside",
        };
        f.pad(name)
    }
}
