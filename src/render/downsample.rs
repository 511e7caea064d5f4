//! Block-average downsampling of pixel buffers.
//!
//! Partitions an image into `block_size` square blocks, averages the colour
//! of each block, and derives a per-block brightness used for glyph
//! selection.

use crate::error::{GlyphifyError, Result};
use crate::types::{Hsb, PixelBuffer, Rgb};

/// The result of downsampling a pixel buffer.
///
/// Holds one averaged colour and one brightness value per block, row-major,
/// top-to-bottom. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DownsampleGrid {
    width: usize,
    height: usize,
    colours: Vec<Rgb>,
    brightness: Vec<f64>,
}

impl DownsampleGrid {
    /// Grid width in blocks.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in blocks.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Averaged block colours, row-major.
    pub fn colours(&self) -> &[Rgb] {
        &self.colours
    }

    /// Block brightness values, row-major, each in `[0, 1]`.
    pub fn brightness(&self) -> &[f64] {
        &self.brightness
    }

    /// The averaged colour of the block at grid position `(x, y)`.
    pub fn colour_at(&self, x: usize, y: usize) -> Rgb {
        self.colours[y * self.width + x]
    }

    /// The brightness of the block at grid position `(x, y)`.
    pub fn brightness_at(&self, x: usize, y: usize) -> f64 {
        self.brightness[y * self.width + x]
    }

    /// Convert every block colour to HSB, in the same row-major order.
    pub fn to_hsb(&self) -> Vec<Hsb> {
        self.colours.iter().map(|c| c.to_hsb()).collect()
    }
}

/// Downsample a pixel buffer into a grid of block-averaged samples.
///
/// The grid is `width / block_size` by `height / block_size` blocks
/// (integer division); trailing partial columns and rows are cropped.
/// Per-channel averages truncate toward zero. Block brightness is
/// `max(avg_r, avg_g, avg_b) / 255`, not the full HSB conversion.
///
/// `block_size == 0` is rejected.
pub fn downsample(buf: &PixelBuffer<'_>, block_size: usize) -> Result<DownsampleGrid> {
    if block_size == 0 {
        return Err(GlyphifyError::InvalidBlockSize {
            block_size,
            help: Some("Block size must be at least 1".to_string()),
        });
    }

    let width = buf.width();
    let height = buf.height();
    let new_width = width / block_size;
    let new_height = height / block_size;

    let mut colours = Vec::with_capacity(new_width * new_height);
    let mut brightness = Vec::with_capacity(new_width * new_height);

    for by in 0..new_height {
        for bx in 0..new_width {
            let x0 = bx * block_size;
            let y0 = by * block_size;

            let mut total_r: u64 = 0;
            let mut total_g: u64 = 0;
            let mut total_b: u64 = 0;
            let mut count: u64 = 0;

            for dy in 0..block_size {
                for dx in 0..block_size {
                    let x = x0 + dx;
                    let y = y0 + dy;
                    if x < width && y < height {
                        let c = buf.rgb_at(x, y);
                        total_r += u64::from(c.r);
                        total_g += u64::from(c.g);
                        total_b += u64::from(c.b);
                        count += 1;
                    }
                }
            }

            let avg_r = (total_r / count) as u8;
            let avg_g = (total_g / count) as u8;
            let avg_b = (total_b / count) as u8;
            let avg = Rgb::new(avg_r, avg_g, avg_b);

            brightness.push(avg.brightness());
            colours.push(avg);
        }
    }

    Ok(DownsampleGrid {
        width: new_width,
        height: new_height,
        colours,
        brightness,
    })
}
