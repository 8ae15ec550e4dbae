use super::{ForestError::*, HuffmanForest, Result};
use std::{cmp::Reverse, collections::BinaryHeap};

/// Strategy used to find the two lightest unattached nodes at each merge.
///
/// Both strategies order candidates by `(weight, index)` and therefore
/// build the very same tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    /// Linear scan of the arena for every merge, O(n²) overall
    #[default]
    Scan,
    /// Binary min-heap of unattached nodes, O(n log n) overall
    Heap,
}

/// Min-heap over the unattached nodes of a forest.
pub(crate) struct HeapSelector(BinaryHeap<Reverse<(u64, usize)>>);

impl HeapSelector {
    pub fn new(forest: &HuffmanForest) -> Self {
        Self(
            forest
                .unattached()
                .map(|(index, node)| Reverse((node.weight, index)))
                .collect(),
        )
    }

    /// Pop the two lightest entries, lightest first
    pub fn pop_pair(&mut self) -> Result<(usize, usize)> {
        match (self.0.pop(), self.0.pop()) {
            (Some(Reverse((_, min))), Some(Reverse((_, second)))) => Ok((min, second)),
            (first, _) => Err(InsufficientNodes {
                available: usize::from(first.is_some()),
            }),
        }
    }

    pub fn push(&mut self, weight: u64, index: usize) {
        self.0.push(Reverse((weight, index)));
    }
}
