//! Raster image reading

use std::io::Cursor;

use image::{DynamicImage, ImageReader};
use log::info;

use crate::extractor::errors::{ExtractError, ExtractResult};

/// Reader for encoded raster images
///
/// Wraps the image crate's decoders behind the crate's error taxonomy:
/// unreadable files are `IoError`, unparseable bytes are `DecodeFailure`.
pub struct RasterReader;

impl RasterReader {
    /// Create a new raster reader
    pub fn new() -> Self {
        RasterReader
    }

    /// Load and decode an image from a file
    ///
    /// The format is sniffed from the file contents, not the extension.
    ///
    /// # Arguments
    /// * `path` - Path to the encoded image file
    ///
    /// # Returns
    /// The decoded image, or an error if the file cannot be read or parsed
    pub fn load(&self, path: &str) -> ExtractResult<DynamicImage> {
        info!("Loading image from {}", path);

        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let image = reader
            .decode()
            .map_err(|e| ExtractError::DecodeFailure(format!("{}: {}", path, e)))?;

        info!("Decoded image: {}x{}", image.width(), image.height());
        Ok(image)
    }

    /// Decode an image from a byte buffer
    ///
    /// # Arguments
    /// * `bytes` - Encoded image bytes (JPEG, PNG, WebP, ...)
    ///
    /// # Returns
    /// The decoded image, or a `DecodeFailure`
    pub fn from_bytes(&self, bytes: &[u8]) -> ExtractResult<DynamicImage> {
        let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
        reader
            .decode()
            .map_err(|e| ExtractError::DecodeFailure(e.to_string()))
    }
}

impl Default for RasterReader {
    fn default() -> Self {
        Self::new()
    }
}
