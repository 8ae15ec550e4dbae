use clap::{Parser, ValueEnum};
use hufftree_lib::{write_tree, Options, ParseMode, Selection};

#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Weights of the leaves, in order
    #[arg(value_name = "WEIGHT", required = true, allow_negative_numbers = true)]
    weights: Vec<String>,

    /// Reject tokens that are not plain numbers instead of reading them as 0
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Dump the node arena before the rendered tree
    #[arg(short, long, default_value_t = false)]
    info: bool,

    /// Number of spaces per tree level
    #[arg(long, default_value_t = hufftree_lib::DEFAULT_INDENT)]
    indent: usize,

    /// How the two lightest nodes are found at each merge
    #[arg(long, value_enum, default_value_t = SelectionArg::Scan)]
    selection: SelectionArg,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SelectionArg {
    Scan,
    Heap,
}

impl From<SelectionArg> for Selection {
    fn from(selection: SelectionArg) -> Self {
        match selection {
            SelectionArg::Scan => Selection::Scan,
            SelectionArg::Heap => Selection::Heap,
        }
    }
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let options = Options {
        mode: if args.strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        },
        selection: args.selection.into(),
        indent: args.indent,
        info: args.info,
    };

    let forest = hufftree_lib::build(&args.weights, &options)?;
    let mut stdout = std::io::stdout().lock();
    write_tree(&forest, &mut stdout, options.indent)?;

    Ok(())
}
