pub mod forest;
pub mod parsing;
pub mod render;

pub use Error as HuffTreeError;

pub use forest::*;
pub use parsing::*;
pub use render::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    ParsingError(#[from] ParsingError),

    #[error(transparent)]
    ForestError(#[from] ForestError),

    #[error("Cannot write tree: {0}")]
    Io(#[from] std::io::Error),
}

type Result<T, E = Error> = std::result::Result<T, E>;

/// Knobs for turning command-line tokens into a rendered tree. The
/// default reproduces the reference output.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub mode: ParseMode,
    pub selection: Selection,
    pub indent: usize,
    pub info: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: ParseMode::default(),
            selection: Selection::default(),
            indent: DEFAULT_INDENT,
            info: false,
        }
    }
}

/// Parse `tokens` as weights and build the complete Huffman tree.
pub fn build<S: AsRef<str>>(tokens: &[S], options: &Options) -> Result<HuffmanForest> {
    let weights = parse_weights(tokens, options.mode)?;
    let forest = HuffmanForest::build(&weights, options.selection)?;
    if options.info {
        println!("{:#?}", forest);
    }
    Ok(forest)
}

/// Parse, build and render in one go.
pub fn render_tokens<S: AsRef<str>>(tokens: &[S], options: &Options) -> Result<String> {
    let forest = build(tokens, options)?;
    Ok(forest.display(options.indent).to_string())
}

#[cfg(test)]
mod proptests;
