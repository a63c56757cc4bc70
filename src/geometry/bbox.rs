//! Bounding box structure for defining regions

use super::point::Point;

/// An axis-aligned bounding box in pixel coordinates
///
/// The maximum coordinates are exclusive when the box is used as a crop
/// window, so a box spanning `[min_x, max_x)` × `[min_y, max_y)` covers
/// `width() × height()` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum X coordinate
    pub min_x: i64,
    /// Minimum Y coordinate
    pub min_y: i64,
    /// Maximum X coordinate
    pub max_x: i64,
    /// Maximum Y coordinate
    pub max_y: i64,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Parse a bounding box from a string (format: "minx,miny,maxx,maxy")
    pub fn from_string(bbox_str: &str) -> Result<Self, String> {
        let parts: Vec<&str> = bbox_str.split(',').collect();
        if parts.len() != 4 {
            return Err("Bounding box must have 4 comma-separated values".to_string());
        }

        let min_x = parts[0].trim().parse::<i64>()
            .map_err(|_| "Invalid min_x value".to_string())?;
        let min_y = parts[1].trim().parse::<i64>()
            .map_err(|_| "Invalid min_y value".to_string())?;
        let max_x = parts[2].trim().parse::<i64>()
            .map_err(|_| "Invalid max_x value".to_string())?;
        let max_y = parts[3].trim().parse::<i64>()
            .map_err(|_| "Invalid max_y value".to_string())?;

        Ok(BoundingBox::new(min_x, min_y, max_x, max_y))
    }

    /// Get the width of the bounding box
    pub fn width(&self) -> i64 {
        self.max_x - self.min_x
    }

    /// Get the height of the bounding box
    pub fn height(&self) -> i64 {
        self.max_y - self.min_y
    }

    /// Get the center point of the bounding box
    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.width() / 2,
            self.min_y + self.height() / 2,
        )
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min_x && point.x < self.max_x &&
            point.y >= self.min_y && point.y < self.max_y
    }

    /// Expand the box by the same amount on all four edges
    ///
    /// The result may extend outside the image; callers clamp afterwards.
    pub fn expanded(&self, pad: i64) -> Self {
        BoundingBox::new(
            self.min_x - pad,
            self.min_y - pad,
            self.max_x + pad,
            self.max_y + pad,
        )
    }

    /// Clamp the box to the bounds of an image
    ///
    /// Minimum coordinates are raised to 0, maximum coordinates lowered to
    /// the image dimensions. Clamping an already-clamped box is a no-op.
    /// The result can still be degenerate when the box lies entirely
    /// outside the image.
    pub fn clamped(&self, image_width: u32, image_height: u32) -> Self {
        BoundingBox::new(
            self.min_x.max(0),
            self.min_y.max(0),
            self.max_x.min(image_width as i64),
            self.max_y.min(image_height as i64),
        )
    }

    /// Check whether the box covers zero area
    pub fn is_degenerate(&self) -> bool {
        self.max_x <= self.min_x || self.max_y <= self.min_y
    }
}
