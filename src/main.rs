use anyhow::Result;
use clap::Parser;

use scanmark::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
