//! Command-line interface for exploring Gene Ontology OBO files.

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
