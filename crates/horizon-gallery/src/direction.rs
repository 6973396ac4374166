//! Navigation directions.

/// Visual direction of a page transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavigationDirection {
    /// Towards higher indices; the new page enters from the trailing edge.
    #[default]
    Forward,
    /// Towards lower (or equal) indices; the new page enters from the leading edge.
    Reverse,
}

impl NavigationDirection {
    /// Direction for moving from `from` to `to`.
    ///
    /// Only a strictly greater target is `Forward`; re-showing the same index
    /// animates as `Reverse`.
    pub fn between(from: usize, to: usize) -> Self {
        if from < to { Self::Forward } else { Self::Reverse }
    }
}

/// Which neighbor of a page the paging surface is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NeighborDirection {
    /// The page preceding the given one.
    Before,
    /// The page following the given one.
    After,
}

impl NeighborDirection {
    /// Index of the neighbor of `index` in a collection of `len` items, if any.
    pub fn step(self, index: usize, len: usize) -> Option<usize> {
        match self {
            Self::Before => index.checked_sub(1),
            Self::After => index.checked_add(1).filter(|&next| next < len),
        }
    }
}
