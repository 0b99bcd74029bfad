use anyhow::Result;
use clap::Parser;
use frontdesk::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
