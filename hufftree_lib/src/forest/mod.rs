mod huffman_forest;
mod node;
mod selection;
mod traversal;

pub use huffman_forest::*;
pub use node::*;
pub use selection::*;
pub use traversal::*;

#[derive(Debug, thiserror::Error)]
pub enum ForestError {
    #[error("At least one weight is required to build a tree")]
    InvalidInput,

    #[error("Cannot allocate an arena of {requested} nodes")]
    ResourceExhaustion { requested: usize },

    #[error("Minimum pair selection needs two unattached nodes, {available} available")]
    InsufficientNodes { available: usize },

    #[error("Sum of weights does not fit in 64 bits")]
    WeightOverflow,
}

type Result<T, E = ForestError> = std::result::Result<T, E>;
