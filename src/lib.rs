//! glyphify - Image to ASCII art converter
//!
//! A library for turning decoded pixel buffers into ASCII art: block-average
//! downsampling, RGB to HSB conversion, and brightness-to-glyph mapping.

pub mod cli;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use error::{GlyphifyError, Result};
pub use render::{
    brightness_to_glyph, downsample, downsample_to_ascii, pixels_to_ascii, render_text,
    write_meta_json, ArtMeta, DownsampleGrid, GLYPH_RAMP,
};
pub use types::{Hsb, PixelBuffer, Rgb};
