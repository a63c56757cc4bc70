//! Raster image writing

use std::fs;
use std::io::Cursor;

use image::{DynamicImage, ImageFormat};
use log::info;

use crate::extractor::errors::{ExtractError, ExtractResult};

/// Writer for encoded raster images
///
/// Encoding always goes through an in-memory buffer before the destination
/// path is touched, so a failed encode never leaves a partial output file
/// behind.
pub struct RasterWriter;

impl RasterWriter {
    /// Create a new raster writer
    pub fn new() -> Self {
        RasterWriter
    }

    /// Save an image to a file, choosing the format from the extension
    ///
    /// # Arguments
    /// * `image` - Image to encode
    /// * `path` - Destination path; the extension selects the format
    ///
    /// # Returns
    /// Result indicating success or an `EncodeFailure`
    pub fn save(&self, image: &DynamicImage, path: &str) -> ExtractResult<()> {
        let format = ImageFormat::from_path(path)
            .map_err(|e| ExtractError::EncodeFailure(format!("{}: {}", path, e)))?;

        let bytes = self.to_bytes(image, format)?;
        fs::write(path, &bytes)
            .map_err(|e| ExtractError::EncodeFailure(format!("{}: {}", path, e)))?;

        info!("Saved {}x{} image to {}", image.width(), image.height(), path);
        Ok(())
    }

    /// Encode an image to bytes in the given format
    ///
    /// # Arguments
    /// * `image` - Image to encode
    /// * `format` - Target encoding
    ///
    /// # Returns
    /// The encoded bytes, or an `EncodeFailure`
    pub fn to_bytes(&self, image: &DynamicImage, format: ImageFormat) -> ExtractResult<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());

        // JPEG cannot carry an alpha channel; flatten instead of failing.
        let result = if format == ImageFormat::Jpeg && image.color().has_alpha() {
            DynamicImage::ImageRgb8(image.to_rgb8()).write_to(&mut buffer, format)
        } else {
            image.write_to(&mut buffer, format)
        };

        result.map_err(|e| ExtractError::EncodeFailure(e.to_string()))?;
        Ok(buffer.into_inner())
    }
}

impl Default for RasterWriter {
    fn default() -> Self {
        Self::new()
    }
}
