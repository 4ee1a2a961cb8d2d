//! The element aggregate: one bounding rectangle, densely numbered pins,
//! and a description label.
//!
//! An element keeps its rectangle as a local size plus a scene position and
//! its pins in absolute scene coordinates, matching the persisted layout.
//! Pin numbering is implicit in storage order: pin `k` is `pins[k]`, so the
//! set of indices is always `{0, .., n-1}` and removal renumbers for free.

use crate::constants::USER_ELEMENT_PREFIX;
use crate::description::Description;
use crate::error::{SceneError, SceneResult};
use crate::geometry::{Point, Rect};
use crate::layout::{ElementRecord, PinRecord};
use crate::types::{Component, ComponentId};
use serde_json::Map;
use std::path::PathBuf;
use tracing::debug;

/// A connection point belonging to an element.
///
/// `extra` carries fields of the persisted pin record this crate does not
/// interpret; they survive deserialize/serialize untouched.
#[derive(Clone, Debug, Default)]
pub struct Pin {
    pub position: Point,
    pub extra: Map<String, serde_json::Value>,
}

impl Pin {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            extra: Map::new(),
        }
    }
}

/// One recognized or manually annotated board component.
#[derive(Clone, Debug)]
pub struct ElementItem {
    name: String,
    /// Scene position of the rect's top-left corner
    position: Point,
    /// Local rectangle, origin at (0, 0)
    rect: Rect,
    pins: Vec<Pin>,
    description: Description,
    pub selected: bool,
}

impl ElementItem {
    /// New element covering `rect` (scene coordinates) with an empty pin
    /// list and a text label matching `name`.
    pub fn new(rect: Rect, name: &str) -> Self {
        Self {
            name: name.to_string(),
            position: rect.top_left(),
            rect: Rect::new(0.0, 0.0, rect.width, rect.height),
            pins: Vec::new(),
            description: Description::text(name),
            selected: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the element and rebuilds the label as plain text.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
        self.description = Description::text(name);
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn local_rect(&self) -> Rect {
        self.rect
    }

    /// The element's rectangle in scene coordinates.
    pub fn scene_rect(&self) -> Rect {
        self.rect.translated(self.position)
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn description_mut(&mut self) -> &mut Description {
        &mut self.description
    }

    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }

    pub fn pin_position(&self, index: usize) -> SceneResult<Point> {
        self.pin(index).map(|pin| pin.position)
    }

    fn pin(&self, index: usize) -> SceneResult<&Pin> {
        self.pins.get(index).ok_or(SceneError::InvalidPinIndex {
            index,
            count: self.pins.len(),
        })
    }

    /// Appends a pin at `pos` (scene coordinates) and returns its index.
    pub fn add_pin(&mut self, pos: Point) -> usize {
        self.pins.push(Pin::new(pos));
        self.pins.len() - 1
    }

    pub fn add_pins<I: IntoIterator<Item = Point>>(&mut self, positions: I) {
        for pos in positions {
            self.add_pin(pos);
        }
    }

    /// Removes the pin at `index`; pins after it shift down by one.
    pub fn remove_pin(&mut self, index: usize) -> SceneResult<Pin> {
        if index >= self.pins.len() {
            return Err(SceneError::InvalidPinIndex {
                index,
                count: self.pins.len(),
            });
        }
        Ok(self.pins.remove(index))
    }

    pub fn move_pin(&mut self, index: usize, pos: Point) -> SceneResult<()> {
        let count = self.pins.len();
        let pin = self
            .pins
            .get_mut(index)
            .ok_or(SceneError::InvalidPinIndex { index, count })?;
        pin.position = pos;
        Ok(())
    }

    /// Replaces the label. A resolvable icon path renders as an icon rotated
    /// by `rotation * 90°`; otherwise the label falls back to the name text.
    pub fn set_description(&mut self, icon: Option<PathBuf>, rotation: Option<u8>) {
        let visible = self.description.visible;
        self.description = Description::with_icon(&self.name, icon, rotation);
        self.description.visible = visible;
    }

    /// Resizes/repositions the owning rect to `new_rect` (scene coordinates).
    /// Pins are not clamped here; live interaction owns that constraint.
    pub fn update_rect(&mut self, new_rect: Rect) {
        self.position = new_rect.top_left();
        self.rect = Rect::new(0.0, 0.0, new_rect.width, new_rect.height);
    }

    /// Moves the whole element rigidly: rect and every pin.
    pub fn translate(&mut self, delta: Point) {
        self.position = self.position + delta;
        for pin in &mut self.pins {
            pin.position = pin.position + delta;
        }
    }

    /// Builds an element from the loose components of a finished edit:
    /// the single rect becomes the boundary, points become pins.
    pub fn from_loose_components(name: &str, components: &[Component]) -> SceneResult<ElementItem> {
        let rect = components
            .iter()
            .find_map(|c| c.as_rect())
            .ok_or(SceneError::MissingRect)?;

        let mut element = ElementItem::new(rect.rect, name);
        element.add_pins(
            components
                .iter()
                .filter_map(|c| c.as_point())
                .map(|p| p.position),
        );
        debug!(name, pins = element.pin_count(), "promoted loose components to element");
        Ok(element)
    }

    /// Decomposes the element into loose components for an edit session:
    /// one rect plus one point per pin, ids drawn from `next_id`.
    pub fn to_loose_components(&self, next_id: &mut ComponentId) -> Vec<Component> {
        let mut components = Vec::with_capacity(self.pins.len() + 1);
        let mut alloc = || {
            let id = *next_id;
            *next_id += 1;
            id
        };
        components.push(Component::rect(alloc(), self.scene_rect()));
        for pin in &self.pins {
            components.push(Component::point(alloc(), pin.position));
        }
        components
    }

    /// Converts to a persisted record. Both rectangle forms are written so
    /// either flavor of consumer can read the file back.
    pub fn to_record(&self) -> ElementRecord {
        let scene_rect = self.scene_rect();
        let rotation = self
            .description
            .rotation
            .map(|quarter| (quarter % 4) as i32)
            .unwrap_or(0);
        // the center form stores pre-rotation dimensions
        let odd = rotation.rem_euclid(2) == 1;
        let (width, height) = if odd {
            (scene_rect.height, scene_rect.width)
        } else {
            (scene_rect.width, scene_rect.height)
        };

        ElementRecord {
            pins: self
                .pins
                .iter()
                .map(|pin| {
                    let mut record = PinRecord::new(pin.position);
                    record.extra = pin.extra.clone();
                    record
                })
                .collect(),
            name: self.name.clone(),
            bounding_zone: Some([
                [scene_rect.left(), scene_rect.top()],
                [scene_rect.right(), scene_rect.bottom()],
            ]),
            rotation: Some(rotation),
            width: Some(width),
            height: Some(height),
            center: Some([scene_rect.center().x, scene_rect.center().y]),
            svg_file: self
                .description
                .icon
                .as_ref()
                .map(|path| path.to_string_lossy().into_owned()),
            extra: Map::new(),
        }
    }

    /// Restores an element from a persisted record.
    pub fn from_record(record: &ElementRecord) -> SceneResult<ElementItem> {
        let scene_rect = record.scene_rect()?;
        let mut element = ElementItem::new(scene_rect, &record.name);
        for pin_record in &record.pins {
            let index = element.add_pin(pin_record.position());
            element.pins[index].extra = pin_record.extra.clone();
        }
        element.set_description(
            record.svg_file.as_ref().map(PathBuf::from),
            record.rotation.map(|r| r.rem_euclid(4) as u8),
        );
        Ok(element)
    }
}

/// Smallest `UserElement_<n>` (n ≥ 1) not already taken, case-insensitively.
pub fn unique_element_name<'a, I>(existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: Vec<String> = existing.into_iter().map(|name| name.to_lowercase()).collect();
    let mut n = 1;
    loop {
        let candidate = format!("{USER_ELEMENT_PREFIX}{n}");
        if !taken.contains(&candidate.to_lowercase()) {
            return candidate;
        }
        n += 1;
    }
}
