//! Quadrilateral structure for detected regions
//!
//! Detectors report each candidate region as four corner points. The corner
//! order depends on the detector (clockwise, scan order, ...), so consumers
//! must not rely on any particular winding; the only supported derivation
//! is the axis-aligned bounding box.

use super::bbox::BoundingBox;
use super::point::Point;

/// Four-corner polygon approximating one detected region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quad {
    corners: [Point; 4],
}

impl Quad {
    /// Create a quad from four corner points
    pub fn new(corners: [Point; 4]) -> Self {
        Quad { corners }
    }

    /// Create an axis-aligned quad from a bounding box
    ///
    /// Corner order is top-left, top-right, bottom-right, bottom-left.
    /// Used by detectors that report rectangular candidates.
    pub fn from_bbox(bbox: &BoundingBox) -> Self {
        Quad {
            corners: [
                Point::new(bbox.min_x, bbox.min_y),
                Point::new(bbox.max_x, bbox.min_y),
                Point::new(bbox.max_x, bbox.max_y),
                Point::new(bbox.min_x, bbox.max_y),
            ],
        }
    }

    /// Get the corner points
    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }

    /// Compute the axis-aligned bounding box of the four corners
    pub fn bounding_box(&self) -> BoundingBox {
        let mut min_x = self.corners[0].x;
        let mut min_y = self.corners[0].y;
        let mut max_x = self.corners[0].x;
        let mut max_y = self.corners[0].y;

        for corner in &self.corners[1..] {
            min_x = min_x.min(corner.x);
            min_y = min_y.min(corner.y);
            max_x = max_x.max(corner.x);
            max_y = max_y.max(corner.y);
        }

        BoundingBox::new(min_x, min_y, max_x, max_y)
    }
}
