//! Core data types for the conversion pipeline.

mod colour;
mod hsb;
mod pixbuf;

pub use colour::Rgb;
pub use hsb::Hsb;
pub use pixbuf::PixelBuffer;
