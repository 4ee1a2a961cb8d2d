//! Normal-mode scene controller tests: free points, selection, element
//! drags, deletion, and the clipboard.

use crate::helpers::{pt, rect, record_events, SceneBuilder};
use boardscene::{Key, Modifiers, MouseButton, SceneEvent};

#[test]
fn test_point_add_remove_renumbering_scenario() {
    let mut scene = SceneBuilder::new().with_background(100.0, 100.0).build();
    let events = record_events(&mut scene);

    scene.add_point(pt(1.0, 1.0), 0);
    scene.add_point(pt(2.0, 2.0), 1);
    scene.remove_point(0).unwrap();

    assert_eq!(scene.points().len(), 1);
    assert_eq!(scene.points()[0].number, 0);
    assert_eq!(scene.points()[0].position, pt(2.0, 2.0));

    let log = events.borrow();
    assert_eq!(
        log.iter()
            .filter(|e| matches!(e, SceneEvent::PinAdded { element: None, .. }))
            .count(),
        2
    );
    assert!(log.iter().any(|e| matches!(
        e,
        SceneEvent::PinDeleted {
            element: None,
            pin: 0
        }
    )));
}

#[test]
fn test_clicking_a_free_point_selects_it_exclusively() {
    let mut scene = SceneBuilder::new()
        .with_background(100.0, 100.0)
        .with_element("DD1", (40.0, 40.0, 20.0, 20.0), &[])
        .with_point((10.0, 10.0), 0)
        .build();
    scene.select_element(0, true).unwrap();
    let events = record_events(&mut scene);

    scene.press(pt(10.0, 10.0), MouseButton::Left, Modifiers::default()).unwrap();
    scene.release(pt(10.0, 10.0)).unwrap();

    assert!(scene.points()[0].selected);
    assert!(scene.selected_elements().is_empty());
    assert!(events
        .borrow()
        .iter()
        .any(|e| matches!(e, SceneEvent::PinSelected { index: 0 })));
}

#[test]
fn test_right_click_on_empty_area_is_reported() {
    let mut scene = SceneBuilder::new()
        .with_background(100.0, 100.0)
        .with_element("DD1", (0.0, 0.0, 20.0, 20.0), &[])
        .build();
    let events = record_events(&mut scene);

    scene.press(pt(10.0, 10.0), MouseButton::Right, Modifiers::default()).unwrap();
    scene.press(pt(80.0, 80.0), MouseButton::Right, Modifiers::default()).unwrap();

    let log = events.borrow();
    let reported: Vec<_> = log
        .iter()
        .filter_map(|e| match e {
            SceneEvent::RightClickOnEmptyArea { pos } => Some(*pos),
            _ => None,
        })
        .collect();
    assert_eq!(reported, vec![pt(80.0, 80.0)]);
}

#[test]
fn test_shift_click_extends_the_element_selection() {
    let mut scene = SceneBuilder::new()
        .with_background(200.0, 200.0)
        .with_element("A", (0.0, 0.0, 20.0, 20.0), &[])
        .with_element("B", (50.0, 0.0, 20.0, 20.0), &[])
        .build();

    scene.press(pt(10.0, 10.0), MouseButton::Left, Modifiers::default()).unwrap();
    scene.release(pt(10.0, 10.0)).unwrap();
    scene.press(pt(60.0, 10.0), MouseButton::Left, Modifiers { shift: true }).unwrap();
    scene.release(pt(60.0, 10.0)).unwrap();

    assert_eq!(scene.selected_elements(), vec![0, 1]);
}

#[test]
fn test_element_drag_carries_pins_and_reports_the_new_rect() {
    let mut scene = SceneBuilder::new()
        .with_background(100.0, 100.0)
        .with_element("DD1", (10.0, 10.0, 20.0, 20.0), &[(15.0, 15.0)])
        .build();
    let events = record_events(&mut scene);

    scene.press(pt(25.0, 25.0), MouseButton::Left, Modifiers::default()).unwrap();
    scene.move_to(pt(45.0, 45.0)).unwrap();
    scene.release(pt(45.0, 45.0)).unwrap();

    let element = &scene.elements()[0];
    assert_eq!(element.scene_rect(), rect(30.0, 30.0, 20.0, 20.0));
    assert_eq!(element.pin_position(0).unwrap(), pt(35.0, 35.0));
    assert!(events.borrow().iter().any(|e| matches!(
        e,
        SceneEvent::ElementPositionEdited { element: 0, .. }
    )));
}

#[test]
fn test_element_drag_cannot_leave_the_background() {
    let mut scene = SceneBuilder::new()
        .with_background(100.0, 100.0)
        .with_element("DD1", (10.0, 10.0, 20.0, 20.0), &[])
        .build();

    scene.press(pt(20.0, 20.0), MouseButton::Left, Modifiers::default()).unwrap();
    scene.move_to(pt(500.0, 500.0)).unwrap();
    scene.release(pt(500.0, 500.0)).unwrap();

    assert_eq!(scene.elements()[0].scene_rect(), rect(80.0, 80.0, 20.0, 20.0));
}

#[test]
fn test_delete_key_removes_the_selection() {
    let mut scene = SceneBuilder::new()
        .with_background(100.0, 100.0)
        .with_element("A", (0.0, 0.0, 20.0, 20.0), &[])
        .with_element("B", (50.0, 0.0, 20.0, 20.0), &[])
        .with_point((80.0, 80.0), 0)
        .build();
    scene.select_element(0, true).unwrap();

    scene.key_press(Key::Delete).unwrap();

    let names: Vec<&str> = scene.elements().iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["B"]);
    assert_eq!(scene.points().len(), 1);
}

#[test]
fn test_copy_paste_duplicates_selected_elements() {
    let mut scene = SceneBuilder::new()
        .with_background(200.0, 200.0)
        .with_element("DD1", (10.0, 10.0, 20.0, 20.0), &[(15.0, 15.0)])
        .build();
    scene.select_element(0, true).unwrap();
    let events = record_events(&mut scene);

    scene.copy_selected();
    scene.paste(pt(100.0, 100.0)).unwrap();

    assert_eq!(scene.elements().len(), 2);
    let pasted = &scene.elements()[1];
    assert_eq!(pasted.scene_rect(), rect(100.0, 100.0, 20.0, 20.0));
    assert_eq!(pasted.pin_position(0).unwrap(), pt(105.0, 105.0));
    assert!(!pasted.selected);
    let log = events.borrow();
    let pasted_event = log
        .iter()
        .find_map(|e| match e {
            SceneEvent::ElementPasted { element, name, rect } => {
                Some((*element, name.clone(), *rect))
            }
            _ => None,
        })
        .expect("paste should be reported");
    assert_eq!(pasted_event.0, 1);
    assert_eq!(pasted_event.1, "DD1");
    assert_eq!(pasted_event.2, rect(100.0, 100.0, 20.0, 20.0));
}

#[test]
fn test_observers_see_post_event_scene_state() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let scene = Rc::new(RefCell::new(
        SceneBuilder::new().with_background(100.0, 100.0).build(),
    ));
    let observed = Rc::new(RefCell::new(None));

    // the callback cannot re-borrow the scene, so it records the event and
    // the test inspects the scene immediately after emission
    let sink = observed.clone();
    scene
        .borrow_mut()
        .subscribe(move |event| *sink.borrow_mut() = Some(event.clone()));

    scene.borrow_mut().add_point(pt(5.0, 5.0), 0);
    assert_eq!(
        *observed.borrow(),
        Some(SceneEvent::PinAdded {
            element: None,
            pin: 0,
            pos: pt(5.0, 5.0)
        })
    );
    assert_eq!(scene.borrow().points().len(), 1);
}
