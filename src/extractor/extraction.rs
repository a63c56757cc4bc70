//! Crop computation around detected regions
//!
//! The extractor is a single-shot, stateless transform: detect candidate
//! quads, select one, pad and clamp its bounding box, cut out the result.
//! It never logs and never touches the file system; presentation and
//! fallback policy belong to the caller.

use image::DynamicImage;

use crate::detection::RegionDetector;
use crate::geometry::Quad;

use super::errors::{ExtractError, ExtractResult};
use super::region::CropRegion;

/// Default fraction of the box width added as padding on every edge
pub const DEFAULT_PADDING_RATIO: f64 = 0.05;

/// Computes padded, bounds-safe crops around detected regions
///
/// Selection policy: the FIRST quad a detector reports wins. Detectors rank
/// their candidates (by confidence or scan order), so taking the first is
/// deterministic and keeps ranking concerns out of the extractor.
///
/// Padding policy: the margin is derived from the box width only and applied
/// equally to all four edges, so tall narrow regions receive the same
/// absolute margin on every side.
#[derive(Debug, Clone, Copy)]
pub struct RegionExtractor {
    padding_ratio: f64,
}

impl RegionExtractor {
    /// Create an extractor with the default padding ratio
    pub fn new() -> Self {
        RegionExtractor {
            padding_ratio: DEFAULT_PADDING_RATIO,
        }
    }

    /// Create an extractor with a custom padding ratio
    ///
    /// # Arguments
    /// * `padding_ratio` - Fraction of the box width added to every edge
    ///
    /// # Returns
    /// An extractor, or an error if the ratio is not a finite value >= 0
    pub fn with_padding_ratio(padding_ratio: f64) -> ExtractResult<Self> {
        if !padding_ratio.is_finite() || padding_ratio < 0.0 {
            return Err(ExtractError::InvalidPaddingRatio(padding_ratio));
        }
        Ok(RegionExtractor { padding_ratio })
    }

    /// Get the configured padding ratio
    pub fn padding_ratio(&self) -> f64 {
        self.padding_ratio
    }

    /// Extract the most relevant region as a new image
    ///
    /// Runs the detector, selects the first reported quad, pads and clamps
    /// its bounding box and returns the crop. The input image is never
    /// mutated.
    ///
    /// # Arguments
    /// * `image` - Decoded source image
    /// * `detector` - Capability that locates candidate regions
    ///
    /// # Returns
    /// The cropped sub-image, `NoRegionFound` when the detector reports
    /// nothing, or `DegenerateRegion` when the crop box collapses
    pub fn extract(
        &self,
        image: &DynamicImage,
        detector: &dyn RegionDetector,
    ) -> ExtractResult<DynamicImage> {
        let quads = detector.detect(image);
        let quad = quads.first().ok_or(ExtractError::NoRegionFound)?;

        let region = self.crop_region(image, quad)?;
        Ok(image.crop_imm(region.x, region.y, region.width, region.height))
    }

    /// Extract one crop per detected region, in detector order
    ///
    /// A degenerate quad anywhere in the result fails the whole call rather
    /// than silently dropping it.
    ///
    /// # Arguments
    /// * `image` - Decoded source image
    /// * `detector` - Capability that locates candidate regions
    ///
    /// # Returns
    /// One cropped sub-image per detected quad, or an error
    pub fn extract_all(
        &self,
        image: &DynamicImage,
        detector: &dyn RegionDetector,
    ) -> ExtractResult<Vec<DynamicImage>> {
        let quads = detector.detect(image);
        if quads.is_empty() {
            return Err(ExtractError::NoRegionFound);
        }

        let mut crops = Vec::with_capacity(quads.len());
        for quad in &quads {
            let region = self.crop_region(image, quad)?;
            crops.push(image.crop_imm(region.x, region.y, region.width, region.height));
        }
        Ok(crops)
    }

    /// Try detectors in order until one reports at least one region
    ///
    /// Detectors are exhausted strictly in sequence and their results are
    /// never blended: the first detector to yield any candidate decides the
    /// outcome, including a degenerate one.
    ///
    /// # Arguments
    /// * `image` - Decoded source image
    /// * `detectors` - Detection capabilities in priority order
    ///
    /// # Returns
    /// The cropped sub-image, or `NoRegionFound` when every detector
    /// comes up empty
    pub fn extract_with_fallback(
        &self,
        image: &DynamicImage,
        detectors: &[&dyn RegionDetector],
    ) -> ExtractResult<DynamicImage> {
        for detector in detectors {
            match self.extract(image, *detector) {
                Err(ExtractError::NoRegionFound) => continue,
                other => return other,
            }
        }
        Err(ExtractError::NoRegionFound)
    }

    /// Compute the padded, clamped crop window for one quad
    ///
    /// # Arguments
    /// * `image` - Image supplying the clamping bounds
    /// * `quad` - Detected region
    ///
    /// # Returns
    /// A bounds-safe crop window, or `DegenerateRegion` when padding and
    /// clamping leave no area
    pub fn crop_region(&self, image: &DynamicImage, quad: &Quad) -> ExtractResult<CropRegion> {
        let bbox = quad.bounding_box();

        // A flat quad (collinear or coincident corners) can never produce a
        // real crop; the width-derived padding would be zero for a zero-width
        // box, and a zero-height box must not be widened into one.
        if bbox.is_degenerate() {
            return Err(ExtractError::DegenerateRegion(bbox));
        }

        // Padding derives from the box width only, computed once and applied
        // to all four edges.
        let pad = (self.padding_ratio * bbox.width() as f64).round() as i64;

        let clamped = bbox
            .expanded(pad)
            .clamped(image.width(), image.height());

        if clamped.is_degenerate() {
            return Err(ExtractError::DegenerateRegion(clamped));
        }

        Ok(CropRegion::from_bbox(&clamped))
    }
}

impl Default for RegionExtractor {
    fn default() -> Self {
        Self::new()
    }
}
