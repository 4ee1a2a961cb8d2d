//! Test helpers and builders for reducing boilerplate in tests.

use boardscene::{Background, ElementItem, Point, Rect, Scene, SceneEvent};
use std::cell::RefCell;
use std::rc::Rc;

pub fn pt(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect::new(x, y, width, height)
}

/// Builder for scenes pre-populated with elements and free points.
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new()
///     .with_background(100.0, 100.0)
///     .with_element("DD1", (0.0, 0.0, 20.0, 20.0), &[(5.0, 5.0)])
///     .build();
/// ```
pub struct SceneBuilder {
    background: (f32, f32),
    elements: Vec<ElementItem>,
    points: Vec<(Point, usize)>,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self {
            background: (1000.0, 1000.0),
            elements: Vec::new(),
            points: Vec::new(),
        }
    }

    pub fn with_background(mut self, width: f32, height: f32) -> Self {
        self.background = (width, height);
        self
    }

    /// Add an element with the given scene rect and pin positions.
    pub fn with_element(
        mut self,
        name: &str,
        rect: (f32, f32, f32, f32),
        pins: &[(f32, f32)],
    ) -> Self {
        let mut element = ElementItem::new(Rect::new(rect.0, rect.1, rect.2, rect.3), name);
        for &(x, y) in pins {
            element.add_pin(Point::new(x, y));
        }
        self.elements.push(element);
        self
    }

    /// Add a free-standing point with an explicit number.
    pub fn with_point(mut self, pos: (f32, f32), number: usize) -> Self {
        self.points.push((Point::new(pos.0, pos.1), number));
        self
    }

    pub fn build(self) -> Scene {
        let mut scene = Scene::new(Background::from_size(self.background.0, self.background.1));
        for element in self.elements {
            scene.add_element(element);
        }
        for (pos, number) in self.points {
            scene.add_point(pos, number);
        }
        scene
    }
}

/// Subscribes a recording observer and returns the shared event log.
pub fn record_events(scene: &mut Scene) -> Rc<RefCell<Vec<SceneEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    scene.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    log
}
