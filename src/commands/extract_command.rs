//! Region extraction command
//!
//! This module implements the command for cropping detected regions out of
//! an image, with support for fallback detectors, manual regions and
//! multi-region extraction.

use clap::ArgMatches;
use log::info;
use std::path::Path;

use crate::commands::command_traits::Command;
use crate::detection::DetectorFactory;
use crate::extractor::errors::{ExtractError, ExtractResult};
use crate::extractor::RegionExtractor;
use crate::geometry::BoundingBox;
use crate::profile::{Profile, PROFILES};
use crate::raster::{RasterReader, RasterWriter};
use crate::utils::logger::Logger;

/// Command for extracting detected regions from an image
pub struct ExtractCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Path to the output file
    output_file: String,
    /// Primary detector name
    detector_name: String,
    /// Secondary detector tried when the primary finds nothing
    fallback_name: Option<String>,
    /// Manual region string for the manual detector
    bbox_str: Option<String>,
    /// Profile supplying detection and padding parameters
    profile_name: String,
    /// Padding ratio override from the command line
    padding: Option<f64>,
    /// Whether to extract every detected region
    extract_all: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ExtractCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ExtractResult<Self> {
        info!("Creating new extract command from arguments");

        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| ExtractError::GenericError("Missing input file".to_string()))?
            .clone();
        info!("Input file: {}", input_file);

        let output_file = args.get_one::<String>("output")
            .ok_or_else(|| {
                ExtractError::GenericError("Missing output file path for extraction".to_string())
            })?
            .clone();
        info!("Output file: {}", output_file);

        let detector_name = args.get_one::<String>("detector")
            .cloned()
            .unwrap_or_else(|| "contour".to_string());
        info!("Detector: {}", detector_name);

        let fallback_name = args.get_one::<String>("fallback").cloned();
        info!("Fallback detector: {:?}", fallback_name);

        let bbox_str = args.get_one::<String>("bbox").cloned();
        info!("Manual region: {:?}", bbox_str);

        let profile_name = args.get_one::<String>("profile")
            .cloned()
            .unwrap_or_else(|| "default".to_string());
        info!("Profile: {}", profile_name);

        let padding = match args.get_one::<String>("padding") {
            Some(raw) => {
                let ratio = raw.parse::<f64>().map_err(|_| {
                    ExtractError::GenericError(format!("Invalid padding ratio: {}", raw))
                })?;
                Some(ratio)
            }
            None => None,
        };
        info!("Padding override: {:?}", padding);

        let extract_all = args.get_flag("all");
        info!("Extract all regions: {}", extract_all);

        Ok(ExtractCommand {
            input_file,
            output_file,
            detector_name,
            fallback_name,
            bbox_str,
            profile_name,
            padding,
            extract_all,
            logger,
        })
    }

    /// Build the extractor from profile and command-line overrides
    fn build_extractor(&self, profile: &Profile) -> ExtractResult<RegionExtractor> {
        RegionExtractor::with_padding_ratio(self.padding.unwrap_or(profile.padding_ratio))
    }

    /// Parse the manual region argument, if present
    fn manual_region(&self) -> ExtractResult<Option<BoundingBox>> {
        match &self.bbox_str {
            Some(s) => {
                let bbox = BoundingBox::from_string(s).map_err(ExtractError::GenericError)?;
                info!("Parsed manual region: ({}, {}) to ({}, {})",
                      bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y);
                Ok(Some(bbox))
            }
            None => Ok(None),
        }
    }

    /// Build the numbered output path for multi-region extraction
    ///
    /// "crops.png" becomes "crops_0.png", "crops_1.png", ...
    fn numbered_output(&self, index: usize) -> String {
        let path = Path::new(&self.output_file);
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("crop");
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("png");
        let file_name = format!("{}_{}.{}", stem, index, ext);

        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                parent.join(file_name).to_string_lossy().into_owned()
            }
            _ => file_name,
        }
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> ExtractResult<()> {
        info!("Executing extract command");

        let profile = PROFILES.get(&self.profile_name)?;
        let extractor = self.build_extractor(profile)?;
        let manual_region = self.manual_region()?;

        let primary =
            DetectorFactory::create(&self.detector_name, profile, manual_region.as_ref())?;

        let image = RasterReader::new().load(&self.input_file)?;
        let writer = RasterWriter::new();

        if self.extract_all {
            info!("Extracting all detected regions");

            let crops = extractor.extract_all(&image, primary.as_ref())?;
            for (i, crop) in crops.iter().enumerate() {
                let output = self.numbered_output(i);
                writer.save(crop, &output)?;
            }

            info!("Extracted {} regions", crops.len());
        } else if let Some(fallback_name) = &self.fallback_name {
            info!("Using fallback detector chain: {} then {}",
                  self.detector_name, fallback_name);

            let secondary =
                DetectorFactory::create(fallback_name, profile, manual_region.as_ref())?;
            let crop =
                extractor.extract_with_fallback(&image, &[primary.as_ref(), secondary.as_ref()])?;
            writer.save(&crop, &self.output_file)?;
        } else {
            let crop = extractor.extract(&image, primary.as_ref())?;
            writer.save(&crop, &self.output_file)?;
        }

        info!("Region extraction successful");
        self.logger.log("Region extraction successful")?;

        Ok(())
    }
}
