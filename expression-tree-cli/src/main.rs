mod driver;

use crate::driver::{interpret_line, run_batches};
use anyhow::{bail, Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use expression_tree::interpreter::parser::Notation;
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum NotationArgument {
    Infix,
    Postfix,
}

impl From<NotationArgument> for Notation {
    fn from(argument: NotationArgument) -> Self {
        match argument {
            NotationArgument::Infix => Notation::Infix,
            NotationArgument::Postfix => Notation::Postfix,
        }
    }
}

/// Builds expression trees, then prints them in infix and postfix form along with their value
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// File with postfix expressions, one per line, then a blank line, then infix expressions
    #[clap(required_unless_present = "expression", conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// A single expression to interpret instead of a file
    #[clap(short, long)]
    expression: Option<String>,

    /// The notation of the single expression
    #[clap(short, long, value_enum, default_value = "infix")]
    notation: NotationArgument,

    /// Also print each expression tree
    #[clap(long)]
    tree: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let stdout = io::stdout();
    let mut output = stdout.lock();

    if let Some(expression) = args.expression {
        return interpret_line(&expression, args.notation.into(), args.tree, &mut output);
    }

    let path = args.file.context("no input file given")?;
    let source = fs::read_to_string(&path)
        .with_context(|| format!("could not read `{}`", path.display()))?;
    let failures = run_batches(&source, args.tree, &mut output)?;
    if failures > 0 {
        bail!("{} expressions could not be interpreted", failures);
    }
    Ok(())
}
