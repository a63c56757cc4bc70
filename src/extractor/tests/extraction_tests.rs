//! Tests for the region extractor

use crate::extractor::errors::ExtractError;
use crate::extractor::{CropRegion, RegionExtractor};
use crate::geometry::{Point, Quad};

use super::test_utils::{rect_quad, solid_image, StubDetector};

#[test]
fn test_extracts_padded_crop() {
    // 1000x800 image with one 200x200 quad: 5% of 200 = 10 pixels of
    // padding on every edge, no clipping needed.
    let image = solid_image(1000, 800);
    let detector = StubDetector::new(vec![rect_quad(100, 100, 300, 300)]);
    let extractor = RegionExtractor::new();

    let region = extractor
        .crop_region(&image, &detector.quads[0])
        .unwrap();
    assert_eq!(region, CropRegion::new(90, 90, 220, 220));

    let crop = extractor.extract(&image, &detector).unwrap();
    assert_eq!(crop.width(), 220);
    assert_eq!(crop.height(), 220);
}

#[test]
fn test_crop_clips_to_image_bounds() {
    // Same quad near the edge of a 250x250 image: the padded box
    // (90,90,310,310) clips to (90,90,250,250).
    let image = solid_image(250, 250);
    let detector = StubDetector::new(vec![rect_quad(100, 100, 300, 300)]);
    let extractor = RegionExtractor::new();

    let region = extractor
        .crop_region(&image, &detector.quads[0])
        .unwrap();
    assert_eq!(region.x, 90);
    assert_eq!(region.y, 90);
    assert_eq!(region.width, 160);
    assert_eq!(region.height, 160);
    assert!(region.end_x() <= image.width());
    assert!(region.end_y() <= image.height());

    let crop = extractor.extract(&image, &detector).unwrap();
    assert_eq!(crop.width(), 160);
    assert_eq!(crop.height(), 160);
}

#[test]
fn test_padding_rounds_half_up() {
    // Box width 150: 5% is 7.5, which rounds to 8.
    let image = solid_image(1000, 800);
    let extractor = RegionExtractor::new();

    let region = extractor
        .crop_region(&image, &rect_quad(100, 100, 250, 300))
        .unwrap();
    assert_eq!(region.x, 92);
    assert_eq!(region.y, 92);
    assert_eq!(region.width, 166);
    assert_eq!(region.height, 216);
}

#[test]
fn test_padding_uses_width_not_height() {
    // Tall narrow quad: 40 wide, 400 tall. Padding is 5% of the width
    // (2 pixels), applied to every edge.
    let image = solid_image(1000, 800);
    let extractor = RegionExtractor::new();

    let region = extractor
        .crop_region(&image, &rect_quad(500, 100, 540, 500))
        .unwrap();
    assert_eq!(region.x, 498);
    assert_eq!(region.y, 98);
    assert_eq!(region.width, 44);
    assert_eq!(region.height, 404);
}

#[test]
fn test_selects_first_quad_regardless_of_size() {
    // The second quad is far larger; the first still wins.
    let image = solid_image(1000, 800);
    let detector = StubDetector::new(vec![
        rect_quad(10, 10, 30, 30),
        rect_quad(100, 100, 600, 600),
    ]);
    let extractor = RegionExtractor::new();

    let crop = extractor.extract(&image, &detector).unwrap();
    // First quad is 20x20 with a 1 pixel pad
    assert_eq!(crop.width(), 22);
    assert_eq!(crop.height(), 22);
}

#[test]
fn test_empty_detection_is_no_region_found() {
    let image = solid_image(100, 100);
    let detector = StubDetector::empty();
    let extractor = RegionExtractor::new();

    let result = extractor.extract(&image, &detector);
    assert!(matches!(result, Err(ExtractError::NoRegionFound)));
}

#[test]
fn test_coincident_corners_are_degenerate() {
    let image = solid_image(100, 100);
    let detector = StubDetector::new(vec![rect_quad(50, 50, 50, 50)]);
    let extractor = RegionExtractor::new();

    let result = extractor.extract(&image, &detector);
    assert!(matches!(result, Err(ExtractError::DegenerateRegion(_))));
}

#[test]
fn test_collinear_corners_are_degenerate() {
    // Four corners on one horizontal line: zero height
    let image = solid_image(100, 100);
    let quad = Quad::new([
        Point::new(10, 50),
        Point::new(60, 50),
        Point::new(40, 50),
        Point::new(20, 50),
    ]);
    let extractor = RegionExtractor::new();

    let result = extractor.extract(&image, &StubDetector::new(vec![quad]));
    assert!(matches!(result, Err(ExtractError::DegenerateRegion(_))));
}

#[test]
fn test_quad_outside_image_is_degenerate() {
    let image = solid_image(100, 100);
    let detector = StubDetector::new(vec![rect_quad(500, 500, 600, 600)]);
    let extractor = RegionExtractor::new();

    let result = extractor.extract(&image, &detector);
    assert!(matches!(result, Err(ExtractError::DegenerateRegion(_))));
}

#[test]
fn test_zero_padding_ratio_crops_exactly() {
    let image = solid_image(1000, 800);
    let detector = StubDetector::new(vec![rect_quad(100, 100, 300, 300)]);
    let extractor = RegionExtractor::with_padding_ratio(0.0).unwrap();

    let crop = extractor.extract(&image, &detector).unwrap();
    assert_eq!(crop.width(), 200);
    assert_eq!(crop.height(), 200);
}

#[test]
fn test_invalid_padding_ratios_are_rejected() {
    assert!(matches!(
        RegionExtractor::with_padding_ratio(-0.5),
        Err(ExtractError::InvalidPaddingRatio(_))
    ));
    assert!(matches!(
        RegionExtractor::with_padding_ratio(f64::NAN),
        Err(ExtractError::InvalidPaddingRatio(_))
    ));
    assert!(matches!(
        RegionExtractor::with_padding_ratio(f64::INFINITY),
        Err(ExtractError::InvalidPaddingRatio(_))
    ));
}

#[test]
fn test_extract_all_returns_crops_in_detector_order() {
    let image = solid_image(1000, 800);
    let detector = StubDetector::new(vec![
        rect_quad(10, 10, 30, 30),
        rect_quad(100, 100, 300, 300),
    ]);
    let extractor = RegionExtractor::with_padding_ratio(0.0).unwrap();

    let crops = extractor.extract_all(&image, &detector).unwrap();
    assert_eq!(crops.len(), 2);
    assert_eq!(crops[0].width(), 20);
    assert_eq!(crops[1].width(), 200);
}

#[test]
fn test_extract_all_with_empty_detection() {
    let image = solid_image(100, 100);
    let extractor = RegionExtractor::new();

    let result = extractor.extract_all(&image, &StubDetector::empty());
    assert!(matches!(result, Err(ExtractError::NoRegionFound)));
}

#[test]
fn test_fallback_skips_empty_detectors() {
    let image = solid_image(1000, 800);
    let empty = StubDetector::empty();
    let backup = StubDetector::new(vec![rect_quad(100, 100, 300, 300)]);
    let extractor = RegionExtractor::new();

    let crop = extractor
        .extract_with_fallback(&image, &[&empty, &backup])
        .unwrap();
    assert_eq!(crop.width(), 220);
}

#[test]
fn test_fallback_never_blends_results() {
    // The first detector reports a quad, so the second must not be
    // consulted even though its region is larger.
    let image = solid_image(1000, 800);
    let primary = StubDetector::new(vec![rect_quad(10, 10, 30, 30)]);
    let secondary = StubDetector::new(vec![rect_quad(100, 100, 600, 600)]);
    let extractor = RegionExtractor::with_padding_ratio(0.0).unwrap();

    let crop = extractor
        .extract_with_fallback(&image, &[&primary, &secondary])
        .unwrap();
    assert_eq!(crop.width(), 20);
}

#[test]
fn test_fallback_with_all_detectors_empty() {
    let image = solid_image(100, 100);
    let first = StubDetector::empty();
    let second = StubDetector::empty();
    let extractor = RegionExtractor::new();

    let result = extractor.extract_with_fallback(&image, &[&first, &second]);
    assert!(matches!(result, Err(ExtractError::NoRegionFound)));
}

#[test]
fn test_fallback_propagates_degenerate_regions() {
    // The first detector yields a candidate, so its degenerate outcome is
    // final; the fallback is only for detectors that find nothing.
    let image = solid_image(100, 100);
    let primary = StubDetector::new(vec![rect_quad(50, 50, 50, 50)]);
    let secondary = StubDetector::new(vec![rect_quad(10, 10, 60, 60)]);
    let extractor = RegionExtractor::new();

    let result = extractor.extract_with_fallback(&image, &[&primary, &secondary]);
    assert!(matches!(result, Err(ExtractError::DegenerateRegion(_))));
}

#[test]
fn test_source_image_is_not_mutated() {
    let image = solid_image(1000, 800);
    let detector = StubDetector::new(vec![rect_quad(100, 100, 300, 300)]);
    let extractor = RegionExtractor::new();

    let _crop = extractor.extract(&image, &detector).unwrap();
    assert_eq!(image.width(), 1000);
    assert_eq!(image.height(), 800);
}
