//! Layout persistence tests: JSON file round trips and format tolerance.

use crate::helpers::{pt, rect};
use boardscene::{BoardLayout, ElementItem, Scene, Background};

#[test]
fn test_layout_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.json");

    let mut element = ElementItem::new(rect(5.0, 5.0, 40.0, 20.0), "DD3");
    element.add_pin(pt(10.0, 10.0));
    element.add_pin(pt(30.0, 15.0));

    let layout = BoardLayout {
        elements: vec![element.to_record()],
    };
    layout.save(&path).unwrap();

    let loaded = BoardLayout::load(&path).unwrap();
    assert_eq!(loaded.elements.len(), 1);
    let restored = ElementItem::from_record(&loaded.elements[0]).unwrap();
    assert_eq!(restored.name(), "DD3");
    assert_eq!(restored.scene_rect(), rect(5.0, 5.0, 40.0, 20.0));
    assert_eq!(restored.pin_count(), 2);
}

#[test]
fn test_scene_load_replaces_elements() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.json");

    let layout = BoardLayout {
        elements: vec![
            ElementItem::new(rect(0.0, 0.0, 10.0, 10.0), "A").to_record(),
            ElementItem::new(rect(20.0, 0.0, 10.0, 10.0), "B").to_record(),
        ],
    };
    layout.save(&path).unwrap();

    let mut scene = Scene::new(Background::from_size(100.0, 100.0));
    scene.add_element(ElementItem::new(rect(50.0, 50.0, 5.0, 5.0), "stale"));
    scene.load_layout(&path).unwrap();

    let names: Vec<&str> = scene.elements().iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn test_geometry_less_records_are_skipped_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.json");

    std::fs::write(
        &path,
        r#"{"elements": [
            {"name": "good", "pins": [], "bounding_zone": [[0.0, 0.0], [10.0, 10.0]]},
            {"name": "no_geometry", "pins": [{"x": 1.0, "y": 1.0}]}
        ]}"#,
    )
    .unwrap();

    let mut scene = Scene::new(Background::from_size(100.0, 100.0));
    scene.load_layout(&path).unwrap();

    let names: Vec<&str> = scene.elements().iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["good"]);
}

#[test]
fn test_unknown_element_fields_survive_a_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.json");
    let source = dir.path().join("source.json");

    std::fs::write(
        &source,
        r#"{"elements": [{
            "name": "DD1",
            "pins": [{"x": 1.0, "y": 2.0, "score": 0.75}],
            "bounding_zone": [[0.0, 0.0], [10.0, 10.0]],
            "probability": 0.9
        }]}"#,
    )
    .unwrap();

    let layout = BoardLayout::load(&source).unwrap();
    layout.save(&path).unwrap();

    let reloaded = BoardLayout::load(&path).unwrap();
    assert_eq!(reloaded.elements[0].extra["probability"], serde_json::json!(0.9));
    assert_eq!(reloaded.elements[0].pins[0].extra["score"], serde_json::json!(0.75));
}
