//! Read-only pixel buffer view.

use crate::error::{GlyphifyError, Result};
use crate::types::Rgb;

/// A borrowed view over a decoded image's raw bytes.
///
/// The first three channels of each pixel are interpreted as R, G, B;
/// additional channels (alpha and friends) are ignored. `row_stride` is the
/// byte offset between row starts and may exceed `width * channels` when the
/// decoder pads rows.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    channels: usize,
    row_stride: usize,
}

impl<'a> PixelBuffer<'a> {
    /// Create a pixel buffer view, validating the bounds contract.
    ///
    /// Fails if `channels < 3` or if any in-range `(x, y)` would read past
    /// the end of `data`. After construction every pixel access is in
    /// bounds.
    pub fn new(
        data: &'a [u8],
        width: usize,
        height: usize,
        channels: usize,
        row_stride: usize,
    ) -> Result<Self> {
        if channels < 3 {
            return Err(GlyphifyError::OutOfBounds {
                message: format!("{} channel(s), need at least 3 for RGB", channels),
                help: None,
            });
        }

        if width > 0 && height > 0 {
            let last = (height - 1) * row_stride + (width - 1) * channels + 2;
            if last >= data.len() {
                return Err(GlyphifyError::OutOfBounds {
                    message: format!(
                        "{}x{} image with stride {} needs {} bytes, buffer has {}",
                        width,
                        height,
                        row_stride,
                        last + 1,
                        data.len()
                    ),
                    help: Some(
                        "Check that width, channels and row_stride match the decoded image"
                            .to_string(),
                    ),
                });
            }
        }

        Ok(Self {
            data,
            width,
            height,
            channels,
            row_stride,
        })
    }

    /// Wrap a tightly-packed RGB image (`row_stride == width * 3`).
    pub fn from_rgb(data: &'a [u8], width: usize, height: usize) -> Result<Self> {
        Self::new(data, width, height, 3, width * 3)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    /// The RGB components of the pixel at `(x, y)`.
    ///
    /// Coordinates must be in range; construction guarantees the read is in
    /// bounds for every valid coordinate.
    pub fn rgb_at(&self, x: usize, y: usize) -> Rgb {
        debug_assert!(x < self.width && y < self.height);
        let i = y * self.row_stride + x * self.channels;
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }
}
