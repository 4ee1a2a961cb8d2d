//! Geometry helper tests: clamping, bounding, and background fitting.

use crate::helpers::{pt, rect};
use boardscene::geometry::{
    bounding_rect_of, clamp_point_to_rect, fit_rect_inside_background, translate_with_reference,
};

#[test]
fn test_clamp_is_idempotent_and_contained() {
    let r = rect(10.0, 10.0, 30.0, 20.0);
    let samples = [
        pt(0.0, 0.0),
        pt(25.0, 15.0),
        pt(100.0, -50.0),
        pt(10.0, 30.0),
        pt(40.0, 10.0),
    ];
    for p in samples {
        let once = clamp_point_to_rect(p, r);
        assert!(r.contains(once), "clamped point must land inside the rect");
        assert_eq!(clamp_point_to_rect(once, r), once);
    }
}

#[test]
fn test_bounding_rect_covers_every_point() {
    let points = [pt(3.0, 7.0), pt(-2.0, 1.0), pt(10.0, -4.0), pt(0.0, 0.0)];
    let bounds = bounding_rect_of(&points);
    for p in points {
        assert!(bounds.contains(p));
    }
    assert_eq!(bounds.top_left(), pt(-2.0, -4.0));
    assert_eq!(bounds.bottom_right(), pt(10.0, 7.0));
}

#[test]
fn test_fit_result_stays_inside_background() {
    let bg = rect(0.0, 0.0, 100.0, 100.0);
    let before = rect(40.0, 40.0, 20.0, 20.0);
    let overruns = [
        before.translated(pt(-100.0, 0.0)),
        before.translated(pt(100.0, 0.0)),
        before.translated(pt(0.0, -100.0)),
        before.translated(pt(70.0, 70.0)),
    ];
    for after in overruns {
        let fitted = fit_rect_inside_background(before, after, bg);
        assert!(bg.contains_rect(fitted), "fitted rect escaped: {fitted:?}");
        assert_eq!(fitted.width, before.width);
        assert_eq!(fitted.height, before.height);
    }
}

#[test]
fn test_fit_inside_is_identity() {
    let bg = rect(0.0, 0.0, 100.0, 100.0);
    let before = rect(10.0, 10.0, 20.0, 20.0);
    let after = rect(30.0, 40.0, 20.0, 20.0);
    assert_eq!(fit_rect_inside_background(before, after, bg), after);
}

#[test]
fn test_reference_translation_is_rigid() {
    let pins = [pt(12.0, 14.0), pt(20.0, 14.0), pt(12.0, 30.0)];
    let old_ref = pt(10.0, 10.0);
    let new_ref = pt(-5.0, 40.0);
    let moved: Vec<_> = pins
        .iter()
        .map(|&p| translate_with_reference(p, old_ref, new_ref))
        .collect();
    // pairwise distances are preserved
    for i in 0..pins.len() {
        for j in 0..pins.len() {
            assert_eq!(pins[i] - pins[j], moved[i] - moved[j]);
        }
    }
}
