//! Custom error types for region extraction

use std::fmt;
use std::io;

use crate::geometry::BoundingBox;

/// Extraction-specific error types
#[derive(Debug)]
pub enum ExtractError {
    /// I/O error
    IoError(io::Error),
    /// Input bytes could not be decoded as a raster image
    DecodeFailure(String),
    /// Detection yielded no candidate regions
    NoRegionFound,
    /// Crop box collapsed to zero area after padding and clipping
    DegenerateRegion(BoundingBox),
    /// Failure while encoding or writing the output image
    EncodeFailure(String),
    /// Padding ratio is not a finite non-negative number
    InvalidPaddingRatio(f64),
    /// No detector registered under the given name
    UnknownDetector(String),
    /// No profile registered under the given name
    UnknownProfile(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::IoError(e) => write!(f, "I/O error: {}", e),
            ExtractError::DecodeFailure(msg) => write!(f, "Failed to decode image: {}", msg),
            ExtractError::NoRegionFound => write!(f, "No region detected in image"),
            ExtractError::DegenerateRegion(bbox) => write!(
                f,
                "Crop region collapsed to zero area: ({}, {}) to ({}, {})",
                bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y
            ),
            ExtractError::EncodeFailure(msg) => write!(f, "Failed to encode image: {}", msg),
            ExtractError::InvalidPaddingRatio(ratio) => {
                write!(f, "Padding ratio must be a finite value >= 0, got {}", ratio)
            }
            ExtractError::UnknownDetector(name) => write!(f, "Unknown detector: {}", name),
            ExtractError::UnknownProfile(name) => write!(f, "Unknown profile: {}", name),
            ExtractError::GenericError(msg) => write!(f, "Extraction error: {}", msg),
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<io::Error> for ExtractError {
    fn from(error: io::Error) -> Self {
        ExtractError::IoError(error)
    }
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

impl From<String> for ExtractError {
    fn from(msg: String) -> Self {
        ExtractError::GenericError(msg)
    }
}
