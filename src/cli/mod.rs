pub mod completions;
pub mod convert;
pub mod palette;

use clap::{Parser, Subcommand};

/// glyphify - Image to ASCII art converter
#[derive(Parser, Debug)]
#[command(name = "glyphify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert images to ASCII art text files
    Convert(convert::ConvertArgs),

    /// Sample the dominant colours of an image
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
