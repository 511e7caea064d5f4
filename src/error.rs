use miette::Diagnostic;
use thiserror::Error;

/// Main error type for glyphify operations
#[derive(Error, Diagnostic, Debug)]
pub enum GlyphifyError {
    #[error("IO error: {0}")]
    #[diagnostic(code(glyphify::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(glyphify::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to decode {path}: {message}")]
    #[diagnostic(code(glyphify::decode))]
    Decode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid block size: {block_size}")]
    #[diagnostic(code(glyphify::block_size))]
    InvalidBlockSize {
        block_size: usize,
        #[help]
        help: Option<String>,
    },

    #[error("Brightness {brightness} is outside the glyph ramp")]
    #[diagnostic(code(glyphify::brightness))]
    BrightnessOutOfRange {
        brightness: f64,
        #[help]
        help: Option<String>,
    },

    #[error("Pixel buffer out of bounds: {message}")]
    #[diagnostic(code(glyphify::bounds))]
    OutOfBounds {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, GlyphifyError>;
