use image::DynamicImage;
use log::info;

use crate::detection::DetectorFactory;
use crate::extractor::errors::{ExtractError, ExtractResult};
use crate::extractor::RegionExtractor;
use crate::geometry::BoundingBox;
use crate::profile::PROFILES;
use crate::raster::{RasterReader, RasterWriter};
use crate::utils::logger::Logger;

/// Main interface to the cropkit library
pub struct CropKit {
    logger: Logger,
}

impl CropKit {
    /// Create a new CropKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "cropkit.log"
    ///
    /// # Returns
    /// A CropKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> ExtractResult<Self> {
        let log_path = log_file.unwrap_or("cropkit.log");
        let logger = Logger::new(log_path)?;
        Ok(CropKit { logger })
    }

    /// Inspect an image and report its detected regions
    ///
    /// Runs the named detector and formats a human-readable report of every
    /// candidate quad with its bounding box and center. Zero detections is
    /// a normal report, not an error.
    ///
    /// # Arguments
    /// * `input_path` - Path to the image to inspect
    /// * `detector_name` - Detector to run ("contour" or "manual")
    /// * `profile_name` - Optional profile name, defaults to "default"
    ///
    /// # Returns
    /// String containing the detection report or an error
    pub fn inspect(
        &self,
        input_path: &str,
        detector_name: &str,
        profile_name: Option<&str>,
    ) -> ExtractResult<String> {
        let profile = PROFILES.get(profile_name.unwrap_or("default"))?;
        let detector = DetectorFactory::create(detector_name, profile, None)?;
        let image = RasterReader::new().load(input_path)?;

        let quads = detector.detect(&image);

        let mut result = format!("Detection Results for {}:\n", input_path);
        result.push_str(&format!("  Image: {}x{}\n", image.width(), image.height()));
        result.push_str(&format!("  Detector: {}\n", detector.name()));
        result.push_str(&format!("  Profile: {}\n", profile.name));
        result.push_str(&format!("  Regions found: {}\n", quads.len()));

        for (i, quad) in quads.iter().enumerate() {
            let bbox = quad.bounding_box();
            let center = bbox.center();
            result.push_str(&format!("\nRegion #{}\n", i));
            result.push_str(&format!(
                "  Bounds: ({}, {}) to ({}, {})\n",
                bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y
            ));
            result.push_str(&format!("  Size: {}x{}\n", bbox.width(), bbox.height()));
            result.push_str(&format!("  Center: ({}, {})\n", center.x, center.y));
        }

        self.logger.log(&format!(
            "Inspected {}: {} regions",
            input_path,
            quads.len()
        ))?;

        Ok(result)
    }

    /// Extract a detected region from an image file to another file
    ///
    /// # Arguments
    /// * `input_path` - Path to the input image
    /// * `output_path` - Path where to save the crop; the extension selects
    ///   the output format
    /// * `detector_name` - Primary detector to run
    /// * `fallback` - Optional secondary detector tried only when the
    ///   primary finds nothing
    /// * `bbox` - Optional manual region as "minx,miny,maxx,maxy"
    /// * `profile_name` - Optional profile name, defaults to "default"
    /// * `padding` - Optional padding ratio overriding the profile
    ///
    /// # Returns
    /// Result indicating success or an error
    pub fn extract(
        &self,
        input_path: &str,
        output_path: &str,
        detector_name: &str,
        fallback: Option<&str>,
        bbox: Option<&str>,
        profile_name: Option<&str>,
        padding: Option<f64>,
    ) -> ExtractResult<()> {
        let crop = self.extract_to_buffer(
            input_path,
            detector_name,
            fallback,
            bbox,
            profile_name,
            padding,
        )?;

        RasterWriter::new().save(&crop, output_path)?;
        self.logger.log(&format!(
            "Extracted region from {} to {}",
            input_path, output_path
        ))?;
        Ok(())
    }

    /// Extract a detected region from an image file into memory
    ///
    /// This method provides the same region options as `extract`, but
    /// returns the crop instead of writing it to a file.
    ///
    /// # Arguments
    /// * `input_path` - Path to the input image
    /// * `detector_name` - Primary detector to run
    /// * `fallback` - Optional secondary detector tried only when the
    ///   primary finds nothing
    /// * `bbox` - Optional manual region as "minx,miny,maxx,maxy"
    /// * `profile_name` - Optional profile name, defaults to "default"
    /// * `padding` - Optional padding ratio overriding the profile
    ///
    /// # Returns
    /// Result containing the cropped image or an error
    pub fn extract_to_buffer(
        &self,
        input_path: &str,
        detector_name: &str,
        fallback: Option<&str>,
        bbox: Option<&str>,
        profile_name: Option<&str>,
        padding: Option<f64>,
    ) -> ExtractResult<DynamicImage> {
        let profile = PROFILES.get(profile_name.unwrap_or("default"))?;

        let manual_region = match bbox {
            Some(s) => Some(BoundingBox::from_string(s).map_err(ExtractError::GenericError)?),
            None => None,
        };

        let extractor =
            RegionExtractor::with_padding_ratio(padding.unwrap_or(profile.padding_ratio))?;

        let primary = DetectorFactory::create(detector_name, profile, manual_region.as_ref())?;
        let image = RasterReader::new().load(input_path)?;

        match fallback {
            Some(name) => {
                info!(
                    "Using fallback detector chain: {} then {}",
                    detector_name, name
                );
                let secondary = DetectorFactory::create(name, profile, manual_region.as_ref())?;
                extractor.extract_with_fallback(&image, &[primary.as_ref(), secondary.as_ref()])
            }
            None => extractor.extract(&image, primary.as_ref()),
        }
    }

    /// Get the names of the available detectors
    pub fn list_detectors(&self) -> Vec<&'static str> {
        DetectorFactory::available_detectors()
    }

    /// Get the names of the registered extraction profiles
    pub fn list_profiles(&self) -> Vec<&str> {
        PROFILES.names()
    }
}
