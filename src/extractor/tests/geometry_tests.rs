//! Tests for the geometry module

use crate::geometry::{BoundingBox, Point, Quad};

use super::test_utils::rect_quad;

#[test]
fn test_quad_bounding_box_ignores_winding() {
    // Same rectangle, corners in no particular order
    let quad = Quad::new([
        Point::new(300, 100),
        Point::new(100, 300),
        Point::new(300, 300),
        Point::new(100, 100),
    ]);

    let bbox = quad.bounding_box();
    assert_eq!(bbox, BoundingBox::new(100, 100, 300, 300));
}

#[test]
fn test_quad_from_bbox_round_trips() {
    let bbox = BoundingBox::new(10, 20, 30, 40);
    let quad = Quad::from_bbox(&bbox);

    assert_eq!(quad.bounding_box(), bbox);
    assert_eq!(quad.corners()[0], Point::new(10, 20));
    assert_eq!(quad.corners()[2], Point::new(30, 40));
}

#[test]
fn test_bbox_dimensions() {
    let bbox = BoundingBox::new(100, 100, 300, 250);
    assert_eq!(bbox.width(), 200);
    assert_eq!(bbox.height(), 150);
    assert_eq!(bbox.center(), Point::new(200, 175));
}

#[test]
fn test_bbox_contains() {
    let bbox = BoundingBox::new(10, 10, 20, 20);

    assert!(bbox.contains(&Point::new(10, 10)));
    assert!(bbox.contains(&Point::new(19, 19)));
    // Maxima are exclusive
    assert!(!bbox.contains(&Point::new(20, 10)));
    assert!(!bbox.contains(&Point::new(5, 15)));
}

#[test]
fn test_bbox_expansion_is_symmetric() {
    let bbox = BoundingBox::new(100, 100, 300, 300);
    let expanded = bbox.expanded(10);

    assert_eq!(expanded, BoundingBox::new(90, 90, 310, 310));
}

#[test]
fn test_expansion_can_leave_image_bounds() {
    let bbox = BoundingBox::new(5, 5, 50, 50);
    let expanded = bbox.expanded(10);

    assert_eq!(expanded.min_x, -5);
    assert_eq!(expanded.min_y, -5);
}

#[test]
fn test_clamping_restores_image_bounds() {
    let bbox = BoundingBox::new(-5, -5, 310, 260);
    let clamped = bbox.clamped(250, 250);

    assert_eq!(clamped, BoundingBox::new(0, 0, 250, 250));
}

#[test]
fn test_clamping_is_idempotent() {
    let bbox = BoundingBox::new(90, 90, 310, 310);
    let once = bbox.clamped(250, 250);
    let twice = once.clamped(250, 250);

    assert_eq!(once, twice);
}

#[test]
fn test_clamping_box_outside_image_is_degenerate() {
    let bbox = BoundingBox::new(400, 400, 500, 500);
    let clamped = bbox.clamped(250, 250);

    assert!(clamped.is_degenerate());
}

#[test]
fn test_degenerate_boxes() {
    assert!(BoundingBox::new(10, 10, 10, 50).is_degenerate()); // zero width
    assert!(BoundingBox::new(10, 10, 50, 10).is_degenerate()); // zero height
    assert!(BoundingBox::new(10, 10, 10, 10).is_degenerate()); // point
    assert!(!BoundingBox::new(10, 10, 11, 11).is_degenerate());
}

#[test]
fn test_bbox_from_string() {
    let bbox = BoundingBox::from_string("100, 100, 300, 300").unwrap();
    assert_eq!(bbox, BoundingBox::new(100, 100, 300, 300));
}

#[test]
fn test_bbox_from_string_rejects_bad_input() {
    assert!(BoundingBox::from_string("100,100,300").is_err());
    assert!(BoundingBox::from_string("a,b,c,d").is_err());
    assert!(BoundingBox::from_string("").is_err());
}

#[test]
fn test_degenerate_quad_has_degenerate_bbox() {
    let quad = rect_quad(50, 50, 50, 50);
    assert!(quad.bounding_box().is_degenerate());
}
