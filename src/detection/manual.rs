//! Manually specified region detection
//!
//! Wraps a caller-supplied bounding box in the detector interface so a known
//! region (an annotation, a prior detection, a fixed window) can drive the
//! same extraction path as a real detector.

use image::DynamicImage;

use crate::geometry::{BoundingBox, Quad};

use super::detector::RegionDetector;

/// Detector that reports exactly one caller-supplied region
pub struct ManualDetector {
    bbox: BoundingBox,
}

impl ManualDetector {
    /// Create a detector reporting the given region
    pub fn new(bbox: BoundingBox) -> Self {
        ManualDetector { bbox }
    }
}

impl RegionDetector for ManualDetector {
    fn detect(&self, _image: &DynamicImage) -> Vec<Quad> {
        vec![Quad::from_bbox(&self.bbox)]
    }

    fn name(&self) -> &'static str {
        "manual"
    }
}
