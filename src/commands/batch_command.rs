//! Batch extraction command
//!
//! This module implements directory-level extraction: every file in the
//! input directory whose name matches a pattern is run through the same
//! detect-and-crop pipeline, with per-file detection misses reported and
//! skipped instead of aborting the batch.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{debug, info, warn};
use regex::Regex;

use crate::commands::command_traits::Command;
use crate::detection::{DetectorFactory, RegionDetector};
use crate::extractor::errors::{ExtractError, ExtractResult};
use crate::extractor::RegionExtractor;
use crate::profile::PROFILES;
use crate::raster::{RasterReader, RasterWriter};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// File-name pattern used when none is given: common raster extensions
const DEFAULT_FILE_PATTERN: &str = r"(?i)\.(jpe?g|png|webp|bmp|tiff?)$";

/// Command for extracting regions from every image in a directory
pub struct BatchCommand<'a> {
    /// Path to the input directory
    input_dir: String,
    /// Path to the output directory
    output_dir: String,
    /// Regex selecting which file names to process
    pattern: String,
    /// Primary detector name
    detector_name: String,
    /// Secondary detector tried when the primary finds nothing
    fallback_name: Option<String>,
    /// Profile supplying detection and padding parameters
    profile_name: String,
    /// Padding ratio override from the command line
    padding: Option<f64>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> BatchCommand<'a> {
    /// Create a new batch command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new BatchCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ExtractResult<Self> {
        let input_dir = args.get_one::<String>("input")
            .ok_or_else(|| ExtractError::GenericError("Missing input directory".to_string()))?
            .clone();

        let output_dir = args.get_one::<String>("output-dir")
            .ok_or_else(|| {
                ExtractError::GenericError(
                    "Missing output directory for batch extraction".to_string(),
                )
            })?
            .clone();

        let pattern = args.get_one::<String>("pattern")
            .cloned()
            .unwrap_or_else(|| DEFAULT_FILE_PATTERN.to_string());

        let detector_name = args.get_one::<String>("detector")
            .cloned()
            .unwrap_or_else(|| "contour".to_string());

        let fallback_name = args.get_one::<String>("fallback").cloned();

        let profile_name = args.get_one::<String>("profile")
            .cloned()
            .unwrap_or_else(|| "default".to_string());

        let padding = match args.get_one::<String>("padding") {
            Some(raw) => {
                let ratio = raw.parse::<f64>().map_err(|_| {
                    ExtractError::GenericError(format!("Invalid padding ratio: {}", raw))
                })?;
                Some(ratio)
            }
            None => None,
        };

        Ok(BatchCommand {
            input_dir,
            output_dir,
            pattern,
            detector_name,
            fallback_name,
            profile_name,
            padding,
            logger,
        })
    }

    /// Collect the matching files from the input directory, sorted by name
    fn collect_inputs(&self, pattern: &Regex) -> ExtractResult<Vec<PathBuf>> {
        let mut inputs = Vec::new();

        for entry in fs::read_dir(&self.input_dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let matches = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| pattern.is_match(n))
                .unwrap_or(false);
            if matches {
                inputs.push(path);
            }
        }

        inputs.sort();
        Ok(inputs)
    }

    /// Build the output path for one input file
    ///
    /// "photos/receipt.jpg" becomes "<output_dir>/receipt_crop.jpg".
    fn output_path(&self, input: &Path) -> PathBuf {
        let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("image");
        let ext = input.extension().and_then(|s| s.to_str()).unwrap_or("png");
        Path::new(&self.output_dir).join(format!("{}_crop.{}", stem, ext))
    }

    /// Run the pipeline for one file
    fn process_file(
        &self,
        extractor: &RegionExtractor,
        detectors: &[&dyn RegionDetector],
        input: &Path,
    ) -> ExtractResult<PathBuf> {
        let input_str = input.to_string_lossy();
        let image = RasterReader::new().load(&input_str)?;

        let crop = extractor.extract_with_fallback(&image, detectors)?;

        let output = self.output_path(input);
        RasterWriter::new().save(&crop, &output.to_string_lossy())?;
        Ok(output)
    }
}

impl<'a> Command for BatchCommand<'a> {
    fn execute(&self) -> ExtractResult<()> {
        info!("Executing batch command on directory {}", self.input_dir);

        let profile = PROFILES.get(&self.profile_name)?;
        let extractor =
            RegionExtractor::with_padding_ratio(self.padding.unwrap_or(profile.padding_ratio))?;

        let pattern = Regex::new(&self.pattern)
            .map_err(|e| ExtractError::GenericError(format!("Invalid file pattern: {}", e)))?;

        let inputs = self.collect_inputs(&pattern)?;
        if inputs.is_empty() {
            return Err(ExtractError::GenericError(format!(
                "No files in {} match pattern {}",
                self.input_dir, self.pattern
            )));
        }
        info!("Found {} matching files", inputs.len());

        fs::create_dir_all(&self.output_dir)?;

        // Manual regions make no sense across a whole directory, so the
        // factory gets no bounding box here.
        let primary = DetectorFactory::create(&self.detector_name, profile, None)?;
        let secondary = match &self.fallback_name {
            Some(name) => Some(DetectorFactory::create(name, profile, None)?),
            None => None,
        };

        let mut detectors: Vec<&dyn RegionDetector> = vec![primary.as_ref()];
        if let Some(detector) = &secondary {
            detectors.push(detector.as_ref());
        }

        let tracker = ProgressTracker::new(inputs.len() as u64, "Extracting regions");
        let mut extracted = 0u32;
        let mut skipped = 0u32;

        for input in &inputs {
            let name = input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            tracker.set_message(&name);

            match self.process_file(&extractor, &detectors, input) {
                Ok(output) => {
                    debug!("Extracted {} to {}", input.display(), output.display());
                    extracted += 1;
                }
                Err(ExtractError::NoRegionFound) => {
                    warn!("No region found in {}", input.display());
                    skipped += 1;
                }
                Err(ExtractError::DegenerateRegion(bbox)) => {
                    warn!("Degenerate region in {}: ({}, {}) to ({}, {})",
                          input.display(), bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y);
                    skipped += 1;
                }
                Err(ExtractError::DecodeFailure(msg)) => {
                    warn!("Skipping undecodable file {}: {}", input.display(), msg);
                    skipped += 1;
                }
                Err(e) => {
                    tracker.finish();
                    return Err(e);
                }
            }

            tracker.increment(1);
        }

        tracker.finish();
        info!("Batch extraction complete: {} extracted, {} skipped", extracted, skipped);
        self.logger.log(&format!(
            "Batch extraction complete: {} extracted, {} skipped",
            extracted, skipped
        ))?;

        Ok(())
    }
}
