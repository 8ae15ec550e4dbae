use super::HuffmanForest;
use std::fmt;

/// Indentation unit used by the `Display` implementation
pub const DEFAULT_INDENT: usize = 4;

enum Visit {
    // Schedule the node and its subtrees
    Expand(usize, usize),
    // Yield the node itself
    Emit(usize, usize),
}

/// Depth-first walk yielding `(weight, depth)` for every node: right
/// subtree first, then the node, then the left subtree. Printed top to
/// bottom this draws the tree rotated a quarter turn, root on the left.
pub struct ForestIterator<'a> {
    forest: &'a HuffmanForest,
    visits: Vec<Visit>,
}

impl<'a> ForestIterator<'a> {
    pub fn new(forest: &'a HuffmanForest, root: Option<usize>) -> Self {
        Self {
            forest,
            visits: root.map(|root| Visit::Expand(root, 0)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for ForestIterator<'a> {
    type Item = (u64, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.visits.pop()? {
                Visit::Emit(index, depth) => {
                    return self.forest.node(index).map(|node| (node.weight, depth))
                }
                Visit::Expand(index, depth) => {
                    let node = self.forest.node(index)?;
                    // Pushed in reverse: the right subtree comes out first
                    if let Some(left) = node.left {
                        self.visits.push(Visit::Expand(left, depth + 1));
                    }
                    self.visits.push(Visit::Emit(index, depth));
                    if let Some(right) = node.right {
                        self.visits.push(Visit::Expand(right, depth + 1));
                    }
                }
            }
        }
    }
}

/// Text rendering of a forest, one node per line.
pub struct Rendered<'a> {
    forest: &'a HuffmanForest,
    indent: usize,
}

impl<'a> fmt::Display for Rendered<'a> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (weight, depth) in self.forest.iter() {
            writeln!(fmt, "{:width$}{}", "", weight, width = depth * self.indent)?;
        }
        Ok(())
    }
}

impl HuffmanForest {
    /// Walk the tree from its root. An incomplete forest yields nothing.
    pub fn iter(&self) -> ForestIterator<'_> {
        ForestIterator::new(self, self.root())
    }

    /// Walk the subtree below `index`
    pub fn iter_from(&self, index: usize) -> ForestIterator<'_> {
        ForestIterator::new(self, Some(index))
    }

    /// Render with `indent` spaces per level
    pub fn display(&self, indent: usize) -> Rendered<'_> {
        Rendered {
            forest: self,
            indent,
        }
    }
}

impl fmt::Display for HuffmanForest {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display(DEFAULT_INDENT).fmt(fmt)
    }
}

impl<'a> IntoIterator for &'a HuffmanForest {
    type Item = (u64, usize);
    type IntoIter = ForestIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
