use crate::forest::HuffmanForest;
use std::io::{self, Write};

/// Stream the rendered tree to `out`, `indent` spaces per level.
pub fn write_tree<W: Write>(forest: &HuffmanForest, out: &mut W, indent: usize) -> io::Result<()> {
    for (weight, depth) in forest {
        writeln!(out, "{:width$}{}", "", weight, width = depth * indent)?;
    }
    out.flush()
}
