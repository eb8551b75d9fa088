use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mosaic operations
#[derive(Error, Diagnostic, Debug)]
pub enum MosaicError {
    #[error("IO error: {0}")]
    #[diagnostic(code(mosaic::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(mosaic::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(mosaic::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Could not decode image: {message}")]
    #[diagnostic(code(mosaic::decode), help("Use a PNG, JPEG, GIF, BMP or WebP file"))]
    Decode { message: String },

    #[error("Invalid palette: {message}")]
    #[diagnostic(code(mosaic::palette))]
    InvalidPalette {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Degenerate grid: {message}")]
    #[diagnostic(code(mosaic::grid))]
    DegenerateGrid {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid crop: {message}")]
    #[diagnostic(code(mosaic::crop))]
    InvalidCrop {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(mosaic::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, MosaicError>;
