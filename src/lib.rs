pub mod geometry;
pub mod detection;
pub mod extractor;
pub mod raster;
pub mod profile;
pub mod commands;
pub mod utils;
pub mod api;

pub use crate::api::CropKit;

pub use detection::{ContourDetector, DetectorFactory, ManualDetector, RegionDetector};
pub use extractor::errors::{ExtractError, ExtractResult};
pub use extractor::{CropRegion, RegionExtractor, DEFAULT_PADDING_RATIO};
pub use geometry::{BoundingBox, Point, Quad};
pub use profile::{Profile, ProfileRegistry, PROFILES};
pub use raster::{RasterReader, RasterWriter};
