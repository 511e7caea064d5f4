//! JSON metadata sidecar for converted images.
//!
//! Records how a piece of ASCII art was produced so downstream tooling can
//! reason about it without re-reading the source image.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{GlyphifyError, Result};
use crate::render::GLYPH_RAMP;

/// Metadata describing one converted image.
#[derive(Debug, Clone, Serialize)]
pub struct ArtMeta {
    /// Source image file name.
    pub source: String,
    /// Output width in glyphs.
    pub width: usize,
    /// Output height in lines.
    pub height: usize,
    /// Block size used for downsampling; absent in full-resolution mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_size: Option<usize>,
    /// Number of glyphs in the brightness ramp.
    pub ramp_len: usize,
}

impl ArtMeta {
    pub fn new(source: &str, width: usize, height: usize, block_size: Option<usize>) -> Self {
        Self {
            source: source.to_string(),
            width,
            height,
            block_size,
            ramp_len: GLYPH_RAMP.len(),
        }
    }
}

/// Write conversion metadata as pretty-printed JSON.
pub fn write_meta_json(meta: &ArtMeta, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(meta).map_err(|e| GlyphifyError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to serialize metadata: {}", e),
    })?;
    fs::write(path, json).map_err(|e| GlyphifyError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write metadata: {}", e),
    })?;
    Ok(())
}
