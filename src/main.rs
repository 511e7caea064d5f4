use clap::Parser;
use glyphify::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => glyphify::cli::convert::run(args)?,
        Commands::Palette(args) => glyphify::cli::palette::run(args)?,
        Commands::Completions(args) => glyphify::cli::completions::run(args)?,
    }

    Ok(())
}
