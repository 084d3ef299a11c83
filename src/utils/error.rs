//! Error types for the WebP batch converter.
//!
//! Fatal errors ([`ConverterError`]) abort a run before any image is touched.
//! Per-file errors ([`ProcessingError`]) never leave the batch loop; they are
//! turned into a `Failed` result and the batch moves on.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use serde::Serialize;

/// Validation errors for a conversion request.
#[derive(Error, Debug, Serialize, PartialEq, Eq)]
pub enum ValidationError {
    /// A folder path was left empty
    #[error("{0} folder must not be empty")]
    EmptyPath(&'static str),
    /// Input folder does not exist
    #[error("Input folder not found: {0}")]
    InputNotFound(PathBuf),
    /// Input path exists but is not a directory
    #[error("Input path is not a folder: {0}")]
    InputNotDirectory(PathBuf),
    /// Resize without aspect ratio needs at least one positive dimension
    #[error("Resize requires a positive width or height")]
    MissingDimensions,
    /// Quality outside 0..=100
    #[error("Invalid quality value: {0}. Must be between 0 and 100")]
    InvalidQuality(u32),
}

/// Fatal error for a whole conversion run.
#[derive(Error, Debug, Serialize)]
pub enum ConverterError {
    /// Request failed validation; nothing was written
    #[error("Configuration error: {0}")]
    Configuration(#[from] ValidationError),

    /// Output folder could not be created
    #[error("Cannot create output folder {path}: {message}")]
    DirectoryCreation { path: PathBuf, message: String },

    /// IO error outside of per-file processing (settings file, folder listing)
    #[error("IO error: {0}")]
    Io(String),

    /// Background worker died before reporting a summary
    #[error("Worker error: {0}")]
    Worker(String),
}

/// Convenience result type for converter operations.
pub type ConverterResult<T> = Result<T, ConverterError>;

impl ConverterError {
    pub fn io<T: Into<String>>(msg: T) -> Self {
        Self::Io(msg.into())
    }

    pub fn worker<T: Into<String>>(msg: T) -> Self {
        Self::Worker(msg.into())
    }

    pub fn directory_creation(path: impl Into<PathBuf>, err: &io::Error) -> Self {
        Self::DirectoryCreation {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// True for errors raised before the filesystem was touched.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl From<io::Error> for ConverterError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Failure while converting a single file.
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("cannot decode image: {0}")]
    Decode(String),

    /// Resize target has a zero axis
    #[error("invalid resize dimensions {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    #[error("cannot encode WebP: {0}")]
    Encode(String),

    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
}

impl From<image::ImageError> for ProcessingError {
    fn from(err: image::ImageError) -> Self {
        Self::Decode(err.to_string())
    }
}
