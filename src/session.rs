//! Edit sessions: the working set of loose components while one element is
//! being edited.
//!
//! Entering edit mode decomposes an element (or nothing, for from-scratch
//! creation) into loose components. All constraint enforcement during the
//! edit happens on this working set; nothing touches the scene's elements
//! until the session is committed. The session remembers which components
//! came from the origin element's pins so the commit can be expressed as a
//! minimal diff against it.

use crate::constants::POSITION_EPSILON;
use crate::element::ElementItem;
use crate::error::{SceneError, SceneResult};
use crate::geometry::{clamp_point_to_rect, Point, Rect};
use crate::types::{Component, ComponentId};
use std::collections::HashMap;

/// The working set of one edit.
pub struct EditSession {
    /// Index of the element being edited, `None` for from-scratch creation
    origin: Option<usize>,
    components: Vec<Component>,
    /// Maps a point component's id back to the origin pin index it came from
    origins: HashMap<ComponentId, usize>,
    /// Origin pin positions at session start, indexed by pin index
    pins_before: Vec<Point>,
}

/// What changed relative to the origin element, computed at commit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionDiff {
    /// Origin pin indices that were deleted, in descending order
    pub deleted: Vec<usize>,
    /// Surviving origin pins that moved: (origin index, new position)
    pub moved: Vec<(usize, Point)>,
    /// Positions of pins created during the session
    pub added: Vec<Point>,
}

impl EditSession {
    /// Session editing an existing element; `origin` is its scene index.
    pub fn from_element(origin: usize, element: &ElementItem, next_id: &mut ComponentId) -> Self {
        let components = element.to_loose_components(next_id);
        // to_loose_components emits the rect first, then pins in order
        let origins = components
            .iter()
            .filter(|c| c.is_point())
            .enumerate()
            .map(|(pin_index, c)| (c.id, pin_index))
            .collect();
        Self {
            origin: Some(origin),
            components,
            origins,
            pins_before: element.pins().iter().map(|pin| pin.position).collect(),
        }
    }

    /// Session creating a new element from scratch.
    pub fn empty() -> Self {
        Self {
            origin: None,
            components: Vec::new(),
            origins: HashMap::new(),
            pins_before: Vec::new(),
        }
    }

    pub fn origin(&self) -> Option<usize> {
        self.origin
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn add(&mut self, component: Component) {
        self.components.push(component);
    }

    pub fn remove_by_id(&mut self, id: ComponentId) -> Option<Component> {
        let index = self.components.iter().position(|c| c.id == id)?;
        Some(self.components.remove(index))
    }

    pub fn find(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn find_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.id == id)
    }

    /// The session's boundary rect, when one exists.
    pub fn rect(&self) -> Option<Rect> {
        self.components
            .iter()
            .find_map(|c| c.as_rect())
            .map(|r| r.rect)
    }

    pub fn rect_id(&self) -> Option<ComponentId> {
        self.components.iter().find(|c| c.is_rect()).map(|c| c.id)
    }

    /// Positions of every point component in the working set.
    pub fn point_positions(&self) -> Vec<Point> {
        self.components
            .iter()
            .filter_map(|c| c.as_point())
            .map(|p| p.position)
            .collect()
    }

    /// Ids and positions of every point, for drag snapshots.
    pub fn point_snapshot(&self) -> Vec<(ComponentId, Point)> {
        self.components
            .iter()
            .filter(|c| c.is_point())
            .filter_map(|c| c.as_point().map(|p| (c.id, p.position)))
            .collect()
    }

    /// Topmost component under `pos`. Points win over rects; among equals,
    /// the later (more recently added) component wins.
    pub fn hit_test(&self, pos: Point) -> Option<ComponentId> {
        self.components
            .iter()
            .rev()
            .filter(|c| c.is_point() && c.contains_point(pos))
            .map(|c| c.id)
            .next()
            .or_else(|| {
                self.components
                    .iter()
                    .rev()
                    .filter(|c| c.is_rect() && c.contains_point(pos))
                    .map(|c| c.id)
                    .next()
            })
    }

    /// Selects only `id`, deselecting the rest of the working set.
    pub fn select_only(&mut self, id: ComponentId) {
        for component in &mut self.components {
            component.set_selected(component.id == id);
        }
    }

    pub fn deselect_all(&mut self) {
        for component in &mut self.components {
            component.set_selected(false);
        }
    }

    pub fn selected_ids(&self) -> Vec<ComponentId> {
        self.components
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.id)
            .collect()
    }

    /// When two rects remain after a create, drops the older one and keeps
    /// the newest. More than two is a contract violation upstream.
    pub fn evict_older_rects(&mut self) -> SceneResult<Vec<Component>> {
        let rect_ids: Vec<ComponentId> = self
            .components
            .iter()
            .filter(|c| c.is_rect())
            .map(|c| c.id)
            .collect();
        if rect_ids.len() > 2 {
            return Err(SceneError::TooManyRects(rect_ids.len()));
        }
        let mut evicted = Vec::new();
        for id in rect_ids.iter().take(rect_ids.len().saturating_sub(1)) {
            if let Some(component) = self.remove_by_id(*id) {
                evicted.push(component);
            }
        }
        Ok(evicted)
    }

    /// Clamps every point component into `rect`.
    pub fn clamp_points_into(&mut self, rect: Rect) {
        for component in &mut self.components {
            if let Some(point) = component.as_point_mut() {
                point.position = clamp_point_to_rect(point.position, rect);
            }
        }
    }

    /// Computes the commit diff against the origin element's pins.
    pub fn diff(&self) -> SessionDiff {
        let mut diff = SessionDiff::default();

        let mut surviving: HashMap<usize, Point> = HashMap::new();
        for component in &self.components {
            let Some(point) = component.as_point() else {
                continue;
            };
            match self.origins.get(&component.id) {
                Some(&pin_index) => {
                    surviving.insert(pin_index, point.position);
                }
                None => diff.added.push(point.position),
            }
        }

        for (pin_index, before) in self.pins_before.iter().enumerate() {
            match surviving.get(&pin_index) {
                Some(&now) => {
                    let delta = now - *before;
                    if delta.x.abs() > POSITION_EPSILON || delta.y.abs() > POSITION_EPSILON {
                        diff.moved.push((pin_index, now));
                    }
                }
                None => diff.deleted.push(pin_index),
            }
        }
        diff.deleted.sort_unstable_by(|a, b| b.cmp(a));
        diff.moved.sort_unstable_by_key(|(index, _)| *index);
        diff
    }
}
