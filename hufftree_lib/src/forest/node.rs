/// One slot of the forest arena. Links are indices into the same arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub weight: u64,
    pub parent: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl Node {
    pub fn leaf(weight: u64) -> Self {
        Self {
            weight,
            parent: None,
            left: None,
            right: None,
        }
    }

    pub fn internal(weight: u64, left: usize, right: usize) -> Self {
        Self {
            weight,
            parent: None,
            left: Some(left),
            right: Some(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn is_attached(&self) -> bool {
        self.parent.is_some()
    }

    /// `(left, right)` for an internal node, `None` for a leaf
    pub fn children(&self) -> Option<(usize, usize)> {
        self.left.zip(self.right)
    }

    /// Link this node under `parent`. A parent link is written only once.
    pub(crate) fn attach(&mut self, parent: usize) {
        debug_assert!(
            self.parent.is_none(),
            "node already attached to {:?}",
            self.parent
        );
        self.parent = Some(parent);
    }
}
