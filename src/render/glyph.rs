//! Brightness-to-glyph mapping and text assembly.

use crate::error::{GlyphifyError, Result};

/// The glyph ramp, ordered densest (darkest) to sparsest (lightest).
///
/// Hand-picked, 69 ASCII characters. Index 0 represents brightness 0.0 and
/// the last index brightness 1.0.
pub const GLYPH_RAMP: &str = "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'.";

/// Map a brightness value to a glyph.
///
/// The ramp index is `floor(brightness * (len - 1))`. Brightness is not
/// clamped; a value whose index falls outside the ramp is an error rather
/// than a silent saturation.
pub fn brightness_to_glyph(brightness: f64) -> Result<char> {
    let index = (brightness * (GLYPH_RAMP.len() - 1) as f64).floor();

    if !index.is_finite() || index < 0.0 || index >= GLYPH_RAMP.len() as f64 {
        return Err(GlyphifyError::BrightnessOutOfRange {
            brightness,
            help: Some("Brightness must be in the range [0.0, 1.0]".to_string()),
        });
    }

    // The ramp is pure ASCII, so byte indexing is character indexing.
    Ok(GLYPH_RAMP.as_bytes()[index as usize] as char)
}

/// Render a row-major brightness sequence as newline-separated text.
///
/// A line break is inserted after every `row_len` glyphs; the last line has
/// no trailing newline. The sequence length must be a multiple of `row_len`
/// (and empty when `row_len` is zero).
pub fn render_text(brightness: &[f64], row_len: usize) -> Result<String> {
    debug_assert!(row_len > 0 || brightness.is_empty());

    let mut text = String::with_capacity(brightness.len() + brightness.len() / row_len.max(1));

    for (i, &b) in brightness.iter().enumerate() {
        if i > 0 && i % row_len == 0 {
            text.push('\n');
        }
        text.push(brightness_to_glyph(b)?);
    }

    Ok(text)
}
