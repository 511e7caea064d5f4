//! Palette command implementation.
//!
//! Samples the dominant colours of an image from its downsampled blocks and
//! prints each with its HSB components.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Args;

use crate::error::{GlyphifyError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::downsample;
use crate::types::{PixelBuffer, Rgb};

/// Sample the dominant colours of an image
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Image file to sample colours from
    #[arg(required = true)]
    pub file: PathBuf,

    /// Downsampling block size in pixels
    #[arg(long, short, default_value = "8")]
    pub block: usize,

    /// Maximum number of colours to output
    #[arg(long)]
    pub max: Option<usize>,
}

pub fn run(args: PaletteArgs) -> Result<()> {
    let printer = Printer::new();
    let path = &args.file;
    let display = display_path(path);

    let img = image::open(path)
        .map_err(|e| GlyphifyError::Decode {
            path: path.clone(),
            message: e.to_string(),
        })?
        .to_rgb8();

    let buf = PixelBuffer::from_rgb(img.as_raw(), img.width() as usize, img.height() as usize)?;
    let grid = downsample(&buf, args.block)?;

    // Count block colour frequencies
    let mut counts: HashMap<Rgb, usize> = HashMap::new();
    for &colour in grid.colours() {
        *counts.entry(colour).or_insert(0) += 1;
    }

    // Sort by frequency (most common first), then by value for stable output
    let mut colours: Vec<(Rgb, usize)> = counts.into_iter().collect();
    colours.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.to_array().cmp(&b.0.to_array())));

    if let Some(max) = args.max {
        colours.truncate(max);
    }

    let total = colours.len();
    printer.status(
        "Sampled",
        &format!("{} from {}", plural(total, "colour", "colours"), display),
    );

    // Print palette lines to stdout: hex, hue, saturation, brightness
    for (colour, _count) in &colours {
        let hsb = colour.to_hsb();
        println!("{}  {:>5.1}  {:.3}  {:.3}", colour, hsb.h, hsb.s, hsb.v);
    }

    Ok(())
}
