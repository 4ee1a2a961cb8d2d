//! Element aggregate tests.

use crate::helpers::{pt, rect};
use boardscene::{unique_element_name, ElementItem};

#[test]
fn test_unique_name_starts_at_one() {
    assert_eq!(unique_element_name(std::iter::empty::<&str>()), "UserElement_1");
}

#[test]
fn test_unique_name_fills_first_gap() {
    let names = ["UserElement_1", "UserElement_3"];
    assert_eq!(unique_element_name(names), "UserElement_2");
}

#[test]
fn test_unique_name_ignores_unrelated_names() {
    let names = ["DD1", "R5", "UserElement_abc"];
    assert_eq!(unique_element_name(names), "UserElement_1");
}

#[test]
fn test_set_name_resets_label_to_text() {
    let mut element = ElementItem::new(rect(0.0, 0.0, 10.0, 10.0), "DD1");
    element.set_name("DD2");
    assert_eq!(element.name(), "DD2");
    assert_eq!(element.description().text, "DD2");
    assert!(!element.description().uses_icon());
}

#[test]
fn test_record_serializes_both_rect_forms() {
    let element = ElementItem::new(rect(10.0, 20.0, 30.0, 40.0), "DD1");
    let record = element.to_record();
    assert_eq!(record.bounding_zone, Some([[10.0, 20.0], [40.0, 60.0]]));
    assert_eq!(record.width, Some(30.0));
    assert_eq!(record.height, Some(40.0));
    assert_eq!(record.center, Some([25.0, 40.0]));
    assert_eq!(record.rotation, Some(0));
}

#[test]
fn test_record_round_trip_keeps_pins_in_scene_coords() {
    let mut element = ElementItem::new(rect(100.0, 100.0, 50.0, 50.0), "DD9");
    element.add_pin(pt(110.0, 120.0));

    let restored = ElementItem::from_record(&element.to_record()).unwrap();
    assert_eq!(restored.pin_position(0).unwrap(), pt(110.0, 120.0));
    assert!(restored.scene_rect().contains(restored.pin_position(0).unwrap()));
}
