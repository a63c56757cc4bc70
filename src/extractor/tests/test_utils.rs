//! Shared helpers for extraction tests

use image::{DynamicImage, Rgb, RgbImage};

use crate::detection::RegionDetector;
use crate::geometry::{Point, Quad};

/// Creates a plain light-gray test image of the given size
pub fn solid_image(width: u32, height: u32) -> DynamicImage {
    let mut img = RgbImage::new(width, height);
    for pixel in img.pixels_mut() {
        *pixel = Rgb([220, 220, 220]);
    }
    DynamicImage::ImageRgb8(img)
}

/// Creates an axis-aligned quad from rectangle bounds
pub fn rect_quad(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Quad {
    Quad::new([
        Point::new(min_x, min_y),
        Point::new(max_x, min_y),
        Point::new(max_x, max_y),
        Point::new(min_x, max_y),
    ])
}

/// Detector stub reporting a fixed list of quads
///
/// Stands in for a real detector so extraction tests control exactly what
/// "was detected".
pub struct StubDetector {
    pub quads: Vec<Quad>,
}

impl StubDetector {
    pub fn new(quads: Vec<Quad>) -> Self {
        StubDetector { quads }
    }

    pub fn empty() -> Self {
        StubDetector { quads: Vec::new() }
    }
}

impl RegionDetector for StubDetector {
    fn detect(&self, _image: &DynamicImage) -> Vec<Quad> {
        self.quads.clone()
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
