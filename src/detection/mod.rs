//! Region detection capabilities
//!
//! Detection is injected into the extractor as a capability: anything that
//! can turn an image into candidate quads can drive a crop. This module
//! defines the detector trait, the shipped implementations and a factory
//! for creating them by name.

mod contour;
mod detector;
mod manual;

// Public exports
pub use self::contour::ContourDetector;
pub use self::detector::{DetectorFactory, RegionDetector};
pub use self::manual::ManualDetector;
