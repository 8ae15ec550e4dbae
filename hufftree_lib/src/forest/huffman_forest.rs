use super::{ForestError::*, HeapSelector, Node, Result, Selection};
use std::fmt;

/// Arena holding every node of a Huffman tree under construction.
///
/// Leaves occupy `0..n`, internal nodes are appended after them in merge
/// order, so a complete forest built from `n` weights holds `2n - 1` nodes
/// and its root is the last one.
pub struct HuffmanForest {
    nodes: Vec<Node>,
    leaves: usize,
}

impl HuffmanForest {
    /// Create a forest of unattached leaves, one per weight. Room for the
    /// `n - 1` internal nodes is reserved up front.
    pub fn new(weights: &[u64]) -> Result<Self> {
        if weights.is_empty() {
            return Err(InvalidInput);
        }

        // The root carries the total, every partial sum is smaller
        weights
            .iter()
            .try_fold(0u64, |total, weight| total.checked_add(*weight))
            .ok_or(WeightOverflow)?;

        let capacity = weights
            .len()
            .checked_mul(2)
            .ok_or(ResourceExhaustion {
                requested: usize::MAX,
            })?
            - 1;
        let mut nodes = Vec::new();
        nodes
            .try_reserve_exact(capacity)
            .map_err(|_| ResourceExhaustion {
                requested: capacity,
            })?;
        nodes.extend(weights.iter().map(|weight| Node::leaf(*weight)));

        Ok(Self {
            nodes,
            leaves: weights.len(),
        })
    }

    /// Create the forest and merge it into a single tree.
    pub fn build(weights: &[u64], selection: Selection) -> Result<Self> {
        let mut forest = Self::new(weights)?;
        forest.create_tree(selection)?;
        Ok(forest)
    }

    /// Merge the two lightest unattached nodes until a single root is left.
    /// A complete forest is left untouched.
    pub fn create_tree(&mut self, selection: Selection) -> Result<()> {
        match selection {
            Selection::Scan => {
                while !self.is_complete() {
                    let pair = self.select_min()?;
                    self.merge(pair);
                }
            }
            Selection::Heap => {
                let mut heap = HeapSelector::new(self);
                while !self.is_complete() {
                    let pair = heap.pop_pair()?;
                    let index = self.merge(pair);
                    heap.push(self.nodes[index].weight, index);
                }
            }
        }
        Ok(())
    }

    /// Return the indices of the two unattached nodes with the smallest
    /// weights, lightest first. Among equal weights the lowest index wins.
    pub fn select_min(&self) -> Result<(usize, usize)> {
        let lightest = |(index, node): (usize, &Node)| (node.weight, index);

        let min = self.unattached().map(lightest).min();
        let second = min.and_then(|(_, min_index)| {
            self.unattached()
                .filter(|(index, _)| *index != min_index)
                .map(lightest)
                .min()
        });

        match (min, second) {
            (Some((_, min)), Some((_, second))) => Ok((min, second)),
            _ => Err(InsufficientNodes {
                available: self.unattached().count(),
            }),
        }
    }

    /// Append the parent of `min` and `second` and return its index
    fn merge(&mut self, (min, second): (usize, usize)) -> usize {
        let index = self.nodes.len();
        let weight = self.nodes[min].weight + self.nodes[second].weight;
        self.nodes.push(Node::internal(weight, min, second));
        self.nodes[min].attach(index);
        self.nodes[second].attach(index);
        index
    }

    /// Nodes not yet merged under a parent, in index order
    pub fn unattached(&self) -> impl Iterator<Item = (usize, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| !node.is_attached())
    }

    /// Number of weights the forest was created from
    pub fn leaves(&self) -> usize {
        self.leaves
    }

    /// Number of nodes currently in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes once the tree is complete: `2n - 1`
    pub fn capacity(&self) -> usize {
        2 * self.leaves - 1
    }

    pub fn is_complete(&self) -> bool {
        self.nodes.len() == self.capacity()
    }

    /// Index of the root, once every merge has been done
    pub fn root(&self) -> Option<usize> {
        self.is_complete().then(|| self.nodes.len() - 1)
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

impl fmt::Debug for HuffmanForest {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_map()
            .entries(self.nodes.iter().enumerate())
            .finish()
    }
}
