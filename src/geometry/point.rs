//! Point structure for representing pixel coordinates

/// A point in image pixel space
///
/// Coordinates are signed so that intermediate results (the corners of a
/// padded bounding box, for example) can fall outside the image before
/// clamping brings them back into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    /// X coordinate (pixels from the left edge)
    pub x: i64,
    /// Y coordinate (pixels from the top edge)
    pub y: i64,
}

impl Point {
    /// Create a new point
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}
