//! Rendering module for glyphify.
//!
//! Converts pixel buffers to ASCII art text: block-average downsampling,
//! brightness-to-glyph mapping, and the two conversion modes built from
//! them.

mod downsample;
mod glyph;
mod meta;

pub use downsample::{downsample, DownsampleGrid};
pub use glyph::{brightness_to_glyph, render_text, GLYPH_RAMP};
pub use meta::{write_meta_json, ArtMeta};

use crate::error::Result;
use crate::types::PixelBuffer;

/// Convert a pixel buffer to ASCII art via block downsampling.
///
/// One glyph per `block_size` square block; rows of the output correspond to
/// rows of blocks.
pub fn downsample_to_ascii(buf: &PixelBuffer<'_>, block_size: usize) -> Result<String> {
    let grid = downsample(buf, block_size)?;
    render_text(grid.brightness(), grid.width())
}

/// Convert a pixel buffer to ASCII art at full resolution, one glyph per
/// pixel.
///
/// Brightness comes from the `v` component of each pixel's HSB conversion,
/// which for a single pixel equals the downsampler's max-channel shortcut,
/// so this agrees with [`downsample_to_ascii`] at block size 1.
pub fn pixels_to_ascii(buf: &PixelBuffer<'_>) -> Result<String> {
    let mut brightness = Vec::with_capacity(buf.width() * buf.height());

    for y in 0..buf.height() {
        for x in 0..buf.width() {
            brightness.push(buf.rgb_at(x, y).to_hsb().v);
        }
    }

    render_text(&brightness, buf.width())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RGB_2X2: [u8; 12] = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];

    #[test]
    fn test_downsample_mode_end_to_end() {
        let buf = PixelBuffer::from_rgb(&RGB_2X2, 2, 2).unwrap();
        let art = downsample_to_ascii(&buf, 1).unwrap();

        // All four pixels have brightness 1.0, the lightest glyph.
        assert_eq!(art, "..\n..");
    }

    #[test]
    fn test_modes_agree_at_block_size_one() {
        let data: Vec<u8> = (0..48).map(|i| (i * 5) as u8).collect();
        let buf = PixelBuffer::from_rgb(&data, 4, 4).unwrap();

        let downsampled = downsample_to_ascii(&buf, 1).unwrap();
        let full = pixels_to_ascii(&buf).unwrap();
        assert_eq!(downsampled, full);
    }

    #[test]
    fn test_glyph_position_matches_grid_position() {
        // Dark left column, bright right column; never transposed.
        #[rustfmt::skip]
        let data = vec![
            0, 0, 0, 255, 255, 255,
            0, 0, 0, 255, 255, 255,
            0, 0, 0, 255, 255, 255,
        ];
        let buf = PixelBuffer::from_rgb(&data, 2, 3).unwrap();
        let art = downsample_to_ascii(&buf, 1).unwrap();

        assert_eq!(art, "$.\n$.\n$.");
        for line in art.lines() {
            assert_eq!(line.len(), 2);
        }
    }

    #[test]
    fn test_empty_buffer_renders_empty_text() {
        let buf = PixelBuffer::from_rgb(&[], 0, 0).unwrap();
        assert_eq!(downsample_to_ascii(&buf, 3).unwrap(), "");
        assert_eq!(pixels_to_ascii(&buf).unwrap(), "");
    }

    #[test]
    fn test_block_downsample_merges_pixels() {
        // 4x4 image: dark top half, bright bottom half.
        let mut data = vec![0u8; 24];
        data.extend(vec![255u8; 24]);
        let buf = PixelBuffer::from_rgb(&data, 4, 4).unwrap();

        let art = downsample_to_ascii(&buf, 2).unwrap();
        assert_eq!(art, "$$\n..");
    }
}
