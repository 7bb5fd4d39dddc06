//! CLI entry point for the crossword filler

use clap::Parser;
use crossfill::io::cli::{Cli, CrosswordRunner};

fn main() -> crossfill::Result<()> {
    let cli = Cli::parse();
    let mut runner = CrosswordRunner::new(cli);
    runner.process().map(|_| ())
}
