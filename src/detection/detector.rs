//! Region detector trait and factory
//!
//! This module defines the capability interface the extractor depends on,
//! allowing for a pluggable system where new detectors can be easily added.

use image::DynamicImage;

use crate::extractor::errors::{ExtractError, ExtractResult};
use crate::geometry::{BoundingBox, Quad};
use crate::profile::Profile;

use super::contour::ContourDetector;
use super::manual::ManualDetector;

/// Capability for locating candidate regions in an image
///
/// Implementations turn one image into zero or more candidate quads. An
/// empty result is an ordinary outcome (target absent, low contrast), not
/// an error. The quad order is the detector's native ranking and carries
/// no guarantee beyond being deterministic for a given input.
pub trait RegionDetector: Send + Sync {
    /// Detect candidate regions in the image
    fn detect(&self, image: &DynamicImage) -> Vec<Quad>;

    /// Get the name of this detector
    fn name(&self) -> &'static str;
}

/// Factory for creating detectors by name
///
/// This factory examines the requested detector name and creates the
/// appropriate implementation, wired up with profile parameters.
pub struct DetectorFactory;

impl DetectorFactory {
    /// Create a detector for the given name
    ///
    /// # Arguments
    /// * `name` - Detector name ("contour" or "manual")
    /// * `profile` - Tuning profile for detectors that take parameters
    /// * `bbox` - Manual region, required by the "manual" detector
    ///
    /// # Returns
    /// A boxed detector, or an error for unknown names or missing arguments
    pub fn create(
        name: &str,
        profile: &Profile,
        bbox: Option<&BoundingBox>,
    ) -> ExtractResult<Box<dyn RegionDetector>> {
        match name.to_lowercase().as_str() {
            "contour" => Ok(Box::new(ContourDetector::from_profile(profile))),
            "manual" => {
                let bbox = bbox.ok_or_else(|| {
                    ExtractError::GenericError(
                        "The manual detector requires a bounding box".to_string(),
                    )
                })?;
                Ok(Box::new(ManualDetector::new(*bbox)))
            }
            _ => Err(ExtractError::UnknownDetector(name.to_string())),
        }
    }

    /// Get the names of all available detectors
    pub fn available_detectors() -> Vec<&'static str> {
        vec!["contour", "manual"]
    }
}
