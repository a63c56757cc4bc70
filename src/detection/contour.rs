//! Contour-based region detection
//!
//! Locates high-contrast regions by edge analysis: grayscale conversion,
//! Gaussian blur, Canny edge detection, then connected-component labelling
//! of the edge image. Each component whose pixel count reaches the minimum
//! area becomes one candidate quad (the component's bounding rectangle).

use std::collections::HashMap;

use image::{DynamicImage, GrayImage, Luma};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use imageproc::region_labelling::{connected_components, Connectivity};
use log::debug;

use crate::geometry::{BoundingBox, Quad};
use crate::profile::Profile;

use super::detector::RegionDetector;

/// Detector for high-contrast regions via edge contours
///
/// Candidates are ordered by edge-pixel count, largest first, so the first
/// quad is the detector's most salient region.
pub struct ContourDetector {
    /// Gaussian blur sigma applied before edge detection
    blur_sigma: f32,
    /// Lower Canny hysteresis threshold
    canny_low: f32,
    /// Upper Canny hysteresis threshold
    canny_high: f32,
    /// Minimum edge-pixel count for a component to become a candidate
    min_region_area: u32,
}

impl ContourDetector {
    /// Create a detector with explicit parameters
    pub fn new(blur_sigma: f32, canny_low: f32, canny_high: f32, min_region_area: u32) -> Self {
        ContourDetector {
            blur_sigma,
            canny_low,
            canny_high,
            min_region_area,
        }
    }

    /// Create a detector with parameters taken from a profile
    pub fn from_profile(profile: &Profile) -> Self {
        ContourDetector::new(
            profile.blur_sigma,
            profile.canny_low,
            profile.canny_high,
            profile.min_region_area,
        )
    }

    /// Label edge components and collect their bounds and pixel counts
    fn label_components(edges: &GrayImage) -> Vec<(BoundingBox, u32)> {
        // Label connected components (white pixels = edges)
        let labeled = connected_components(edges, Connectivity::Eight, Luma([0u8]));

        let mut regions: HashMap<u32, (i64, i64, i64, i64, u32)> = HashMap::new();

        for (x, y, label) in labeled.enumerate_pixels() {
            let label_val = label[0];
            if label_val == 0 {
                continue; // Skip background
            }

            let (x, y) = (x as i64, y as i64);
            regions
                .entry(label_val)
                .and_modify(|(min_x, min_y, max_x, max_y, count)| {
                    *min_x = (*min_x).min(x);
                    *min_y = (*min_y).min(y);
                    *max_x = (*max_x).max(x);
                    *max_y = (*max_y).max(y);
                    *count += 1;
                })
                .or_insert((x, y, x, y, 1));
        }

        // Component bounds are inclusive pixel coordinates; crop bounds are
        // exclusive, hence the +1 on the maxima.
        regions
            .into_values()
            .map(|(min_x, min_y, max_x, max_y, count)| {
                (BoundingBox::new(min_x, min_y, max_x + 1, max_y + 1), count)
            })
            .collect()
    }
}

impl RegionDetector for ContourDetector {
    fn detect(&self, image: &DynamicImage) -> Vec<Quad> {
        let gray = image.to_luma8();
        let blurred = gaussian_blur_f32(&gray, self.blur_sigma);
        let edges = canny(&blurred, self.canny_low, self.canny_high);

        let mut components = Self::label_components(&edges);
        debug!("Contour detection found {} raw components", components.len());

        components.retain(|(_, count)| *count >= self.min_region_area);

        // Largest component first; ties broken by position so the ordering
        // is stable across runs.
        components.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then(a.0.min_y.cmp(&b.0.min_y))
                .then(a.0.min_x.cmp(&b.0.min_x))
        });

        debug!(
            "{} components at or above the minimum area of {}",
            components.len(),
            self.min_region_area
        );

        components
            .iter()
            .map(|(bbox, _)| Quad::from_bbox(bbox))
            .collect()
    }

    fn name(&self) -> &'static str {
        "contour"
    }
}
