//! Region inspection command
//!
//! This module implements the default command: run detection on an image
//! and report every candidate region without extracting anything.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::detection::DetectorFactory;
use crate::extractor::errors::{ExtractError, ExtractResult};
use crate::geometry::BoundingBox;
use crate::profile::PROFILES;
use crate::raster::RasterReader;
use crate::utils::logger::Logger;

/// Command for inspecting detection results
pub struct InspectCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Detector to run
    detector_name: String,
    /// Manual region string for the manual detector
    bbox_str: Option<String>,
    /// Profile supplying detector parameters
    profile_name: String,
    /// Whether to enable verbose output
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> InspectCommand<'a> {
    /// Create a new inspect command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new InspectCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ExtractResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| ExtractError::GenericError("Missing input file".to_string()))?
            .clone();

        let detector_name = args.get_one::<String>("detector")
            .cloned()
            .unwrap_or_else(|| "contour".to_string());

        let bbox_str = args.get_one::<String>("bbox").cloned();

        let profile_name = args.get_one::<String>("profile")
            .cloned()
            .unwrap_or_else(|| "default".to_string());

        let verbose = args.get_flag("verbose");

        Ok(InspectCommand {
            input_file,
            detector_name,
            bbox_str,
            profile_name,
            verbose,
            logger,
        })
    }
}

impl<'a> Command for InspectCommand<'a> {
    fn execute(&self) -> ExtractResult<()> {
        info!("Inspecting file: {}", self.input_file);

        let profile = PROFILES.get(&self.profile_name)?;

        let manual_region = match &self.bbox_str {
            Some(s) => Some(BoundingBox::from_string(s).map_err(ExtractError::GenericError)?),
            None => None,
        };
        let detector =
            DetectorFactory::create(&self.detector_name, profile, manual_region.as_ref())?;

        let image = RasterReader::new().load(&self.input_file)?;
        let quads = detector.detect(&image);

        info!("Detection Results:");
        info!("  Image: {}x{}", image.width(), image.height());
        info!("  Detector: {}", detector.name());
        info!("  Profile: {}", profile.name);
        info!("  Regions found: {}", quads.len());

        for (i, quad) in quads.iter().enumerate() {
            let bbox = quad.bounding_box();
            let center = bbox.center();

            info!("Region #{}", i);
            info!("  Bounds: ({}, {}) to ({}, {})",
                  bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y);
            info!("  Size: {}x{}", bbox.width(), bbox.height());
            info!("  Center: ({}, {})", center.x, center.y);

            if self.verbose {
                for (j, corner) in quad.corners().iter().enumerate() {
                    debug!("  Corner {}: ({}, {})", j, corner.x, corner.y);
                }
            }
        }

        if quads.is_empty() {
            info!("No regions detected");
        }

        self.logger.log("Inspection completed successfully")?;
        Ok(())
    }
}
