//! The scene controller.
//!
//! Owns the board background, the element list, free-standing points, the
//! interaction state machine, and the edit session. All pointer and keyboard
//! input enters through the handlers in [`crate::input`]; all mutations fan
//! out to observers as [`SceneEvent`]s after the scene has been updated.

use crate::element::{unique_element_name, ElementItem};
use crate::error::{SceneError, SceneResult};
use crate::events::{Observers, ObserverToken, SceneEvent};
use crate::geometry::{Point, Rect};
use crate::input::InteractionState;
use crate::layout::BoardLayout;
use crate::session::EditSession;
use crate::spatial_index::{HitTarget, SpatialIndex};
use crate::types::{Component, ComponentId, PointComponent};
use std::path::Path;
use tracing::{debug, warn};

/// Which of the two interaction regimes the scene is in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Whole elements and free points are the interactive units
    #[default]
    Normal,
    /// One element is decomposed into loose components for editing
    Edit,
}

/// Active tool, relevant in edit mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tool {
    #[default]
    Select,
    /// Press creates a pin inside the session rect
    Pin,
    /// Press rubber-bands a new boundary rect
    Boundary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// Keyboard modifiers accompanying a press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
}

/// The board photograph the scene is annotated over. Only its extent
/// matters here; rendering happens elsewhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Background {
    pub rect: Rect,
}

impl Background {
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, width, height),
        }
    }

    /// Background sized to the image at `path` without decoding its pixels.
    pub fn from_image_file(path: &Path) -> SceneResult<Self> {
        let (width, height) = image::image_dimensions(path)?;
        Ok(Self::from_size(width as f32, height as f32))
    }
}

/// The scene: background, annotations, and interaction state.
pub struct Scene {
    background: Background,
    elements: Vec<ElementItem>,
    points: Vec<PointComponent>,
    view_mode: ViewMode,
    tool: Tool,
    pub(crate) state: InteractionState,
    pub(crate) session: Option<EditSession>,
    observers: Observers,
    index: SpatialIndex,
    copied: Vec<ElementItem>,
    show_descriptions: bool,
    descriptions_backup: Option<bool>,
    next_component_id: ComponentId,
}

impl Scene {
    pub fn new(background: Background) -> Self {
        Self {
            background,
            elements: Vec::new(),
            points: Vec::new(),
            view_mode: ViewMode::Normal,
            tool: Tool::Select,
            state: InteractionState::Idle,
            session: None,
            observers: Observers::new(),
            index: SpatialIndex::new(),
            copied: Vec::new(),
            show_descriptions: true,
            descriptions_backup: None,
            next_component_id: 1,
        }
    }

    // ------------------------------------------------------------------
    // Background
    // ------------------------------------------------------------------

    pub fn background(&self) -> Background {
        self.background
    }

    pub fn set_background(&mut self, background: Background) {
        self.background = background;
    }

    // ------------------------------------------------------------------
    // Elements
    // ------------------------------------------------------------------

    pub fn elements(&self) -> &[ElementItem] {
        &self.elements
    }

    pub fn element(&self, index: usize) -> SceneResult<&ElementItem> {
        self.elements
            .get(index)
            .ok_or(SceneError::ElementNotFound(index))
    }

    pub(crate) fn element_mut(&mut self, index: usize) -> SceneResult<&mut ElementItem> {
        self.elements
            .get_mut(index)
            .ok_or(SceneError::ElementNotFound(index))
    }

    /// Adds an element and returns its index.
    pub fn add_element(&mut self, element: ElementItem) -> usize {
        self.elements.push(element);
        let index = self.elements.len() - 1;
        self.rebuild_index();
        self.emit(SceneEvent::ElementAdded { element: index });
        index
    }

    /// Removes the element at `index`; later elements shift down by one.
    pub fn remove_element(&mut self, index: usize) -> SceneResult<ElementItem> {
        if index >= self.elements.len() {
            return Err(SceneError::ElementNotFound(index));
        }
        let element = self.elements.remove(index);
        self.rebuild_index();
        self.emit(SceneEvent::ElementDeleted { element: index });
        Ok(element)
    }

    pub fn set_element_name(&mut self, index: usize, name: &str) -> SceneResult<()> {
        self.element_mut(index)?.set_name(name);
        Ok(())
    }

    pub fn select_element(&mut self, index: usize, exclusive: bool) -> SceneResult<()> {
        if exclusive {
            self.deselect_all();
        }
        self.element_mut(index)?.selected = true;
        Ok(())
    }

    pub fn selected_elements(&self) -> Vec<usize> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.selected)
            .map(|(index, _)| index)
            .collect()
    }

    // ------------------------------------------------------------------
    // Free points
    // ------------------------------------------------------------------

    pub fn points(&self) -> &[PointComponent] {
        &self.points
    }

    /// Inserts a free point at `number`; points numbered `number` and above
    /// shift up by one.
    pub fn add_point(&mut self, pos: Point, number: usize) {
        for point in &mut self.points {
            if point.number >= number {
                point.increment_number();
            }
        }
        self.points.push(PointComponent::new(pos, number));
        self.rebuild_index();
        self.emit(SceneEvent::PinAdded {
            element: None,
            pin: number,
            pos,
        });
    }

    /// Removes the free point numbered `number`; higher numbers shift down.
    pub fn remove_point(&mut self, number: usize) -> SceneResult<()> {
        let index = self
            .points
            .iter()
            .position(|p| p.number == number)
            .ok_or(SceneError::PointNotFound(number))?;
        self.points.remove(index);
        for point in &mut self.points {
            if point.number > number {
                point.decrement_number();
            }
        }
        self.rebuild_index();
        self.emit(SceneEvent::PinDeleted {
            element: None,
            pin: number,
        });
        Ok(())
    }

    /// Exclusively selects the free point numbered `number`.
    pub fn select_point(&mut self, number: usize) -> SceneResult<()> {
        if !self.points.iter().any(|p| p.number == number) {
            return Err(SceneError::PointNotFound(number));
        }
        self.deselect_all();
        for point in &mut self.points {
            if point.number == number {
                point.selected = true;
            }
        }
        self.emit(SceneEvent::PinSelected { index: number });
        Ok(())
    }

    pub(crate) fn deselect_all(&mut self) {
        for element in &mut self.elements {
            element.selected = false;
        }
        for point in &mut self.points {
            point.selected = false;
        }
    }

    // ------------------------------------------------------------------
    // Modes, tools, session
    // ------------------------------------------------------------------

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Switches between normal and edit mode.
    ///
    /// Entering edit mode decomposes the first selected element into a
    /// session working set (or starts an empty session) and hides description
    /// labels, remembering their previous visibility. Leaving edit mode
    /// commits the session and restores the labels.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> SceneResult<()> {
        if mode == self.view_mode {
            return Ok(());
        }
        match mode {
            ViewMode::Edit => {
                self.descriptions_backup = Some(self.show_descriptions);
                self.show_descriptions = false;
                let session = match self.selected_elements().first().copied() {
                    Some(index) => {
                        let element = self.element(index)?.clone();
                        EditSession::from_element(index, &element, &mut self.next_component_id)
                    }
                    None => EditSession::empty(),
                };
                self.session = Some(session);
                self.view_mode = ViewMode::Edit;
            }
            ViewMode::Normal => {
                self.commit_session()?;
                if let Some(visible) = self.descriptions_backup.take() {
                    self.show_descriptions = visible;
                }
                self.view_mode = ViewMode::Normal;
            }
        }
        Ok(())
    }

    /// Drops the session without committing and returns to normal mode.
    pub fn cancel_edit(&mut self) {
        self.session = None;
        self.state.reset();
        if let Some(visible) = self.descriptions_backup.take() {
            self.show_descriptions = visible;
        }
        self.view_mode = ViewMode::Normal;
    }

    /// Applies the finished session back to the scene.
    fn commit_session(&mut self) -> SceneResult<()> {
        self.state.reset();
        let Some(session) = self.session.take() else {
            return Ok(());
        };

        match (session.rect(), session.origin()) {
            // Edited an existing element: apply the minimal diff.
            (Some(rect), Some(index)) => {
                let diff = session.diff();
                for &pin in &diff.deleted {
                    self.element_mut(index)?.remove_pin(pin)?;
                    self.emit(SceneEvent::PinDeleted {
                        element: Some(index),
                        pin,
                    });
                }
                for (origin_pin, pos) in diff.moved {
                    // surviving pins shifted down past the deleted ones
                    let pin = origin_pin
                        - diff.deleted.iter().filter(|&&d| d < origin_pin).count();
                    self.element_mut(index)?.move_pin(pin, pos)?;
                    self.emit(SceneEvent::PinMoved {
                        element: Some(index),
                        pin,
                        pos,
                    });
                }
                for pos in diff.added {
                    let pin = self.element_mut(index)?.add_pin(pos);
                    self.emit(SceneEvent::PinAdded {
                        element: Some(index),
                        pin,
                        pos,
                    });
                }
                if self.element(index)?.scene_rect() != rect {
                    self.element_mut(index)?.update_rect(rect);
                    self.emit(SceneEvent::ElementPositionEdited {
                        element: index,
                        rect,
                    });
                }
                self.rebuild_index();
            }
            // From-scratch session: promote to a new element when it has
            // at least one pin, otherwise discard.
            (Some(_), None) => {
                if session.point_positions().is_empty() {
                    debug!("discarding session rect without pins");
                } else {
                    let name = unique_element_name(self.elements.iter().map(|e| e.name()));
                    let element = ElementItem::from_loose_components(&name, session.components())?;
                    self.add_element(element);
                }
            }
            // The element's boundary was deleted during the edit: the
            // element goes with it.
            (None, Some(index)) => {
                self.remove_element(index)?;
            }
            (None, None) => {
                if !session.is_empty() {
                    debug!("discarding session without a boundary rect");
                }
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Clipboard
    // ------------------------------------------------------------------

    /// Copies the selected elements. In normal mode only elements are
    /// copyable; free points are left alone.
    pub fn copy_selected(&mut self) {
        self.copied = self
            .elements
            .iter()
            .filter(|e| e.selected)
            .cloned()
            .collect();
    }

    /// Pastes the clipboard at `pos`.
    ///
    /// In normal mode the copied elements land with their mutual arrangement
    /// preserved, the group's top-left corner at `pos`. In edit mode the
    /// first copied element is decomposed into the session's working set;
    /// its rect replaces an existing session rect.
    pub fn paste(&mut self, pos: Point) -> SceneResult<()> {
        if self.copied.is_empty() {
            return Ok(());
        }
        match self.view_mode {
            ViewMode::Normal => {
                let anchor = self
                    .copied
                    .iter()
                    .map(|e| e.scene_rect().top_left())
                    .fold(Point::new(f32::INFINITY, f32::INFINITY), |acc, p| {
                        Point::new(acc.x.min(p.x), acc.y.min(p.y))
                    });
                let delta = pos - anchor;
                for copy in self.copied.clone() {
                    let mut element = copy;
                    element.translate(delta);
                    element.selected = false;
                    let name = element.name().to_string();
                    let rect = element.scene_rect();
                    self.elements.push(element);
                    let index = self.elements.len() - 1;
                    self.emit(SceneEvent::ElementPasted {
                        element: index,
                        name,
                        rect,
                    });
                }
                self.rebuild_index();
            }
            ViewMode::Edit => {
                let source = self.copied[0].clone();
                let delta = pos - source.scene_rect().top_left();
                let mut translated = source;
                translated.translate(delta);
                let pasted_rect = translated.scene_rect();
                let components = translated.to_loose_components(&mut self.next_component_id);
                let Some(session) = self.session.as_mut() else {
                    return Ok(());
                };
                // the pasted rect is subject to the same containment veto
                // as a mouse-drawn one: it may not exclude existing pins
                let keeps_existing = session
                    .point_positions()
                    .iter()
                    .all(|&p| pasted_rect.contains(p));
                let mut rect_accepted = false;
                for component in components {
                    if component.is_rect() {
                        if keeps_existing {
                            session.add(component);
                            rect_accepted = true;
                        } else {
                            debug!("discarding pasted rect that excludes existing pins");
                        }
                    } else {
                        session.add(component);
                    }
                }
                if rect_accepted {
                    session.evict_older_rects()?;
                }
                if let Some(rect) = session.rect() {
                    session.clamp_points_into(rect);
                }
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Descriptions
    // ------------------------------------------------------------------

    pub fn descriptions_visible(&self) -> bool {
        self.show_descriptions
    }

    pub fn show_descriptions(&mut self) {
        self.show_descriptions = true;
    }

    pub fn hide_descriptions(&mut self) {
        self.show_descriptions = false;
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Replaces the element list with the layout stored at `path`.
    /// Records without usable geometry are skipped rather than failing the
    /// whole load.
    pub fn load_layout(&mut self, path: &Path) -> SceneResult<()> {
        let layout = BoardLayout::load(path)?;
        let mut elements = Vec::with_capacity(layout.elements.len());
        for record in &layout.elements {
            match ElementItem::from_record(record) {
                Ok(element) => elements.push(element),
                Err(SceneError::MissingGeometry(_)) => {
                    warn!(name = record.name.as_str(), "skipping element record without geometry");
                }
                Err(err) => return Err(err),
            }
        }
        self.elements = elements;
        self.rebuild_index();
        Ok(())
    }

    pub fn save_layout(&self, path: &Path) -> SceneResult<()> {
        let layout = BoardLayout {
            elements: self.elements.iter().map(|e| e.to_record()).collect(),
        };
        layout.save(path)
    }

    // ------------------------------------------------------------------
    // Observers, index, internals
    // ------------------------------------------------------------------

    pub fn subscribe<F>(&mut self, callback: F) -> ObserverToken
    where
        F: FnMut(&SceneEvent) + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, token: ObserverToken) {
        self.observers.unsubscribe(token);
    }

    pub(crate) fn emit(&mut self, event: SceneEvent) {
        self.observers.emit(&event);
    }

    pub(crate) fn alloc_id(&mut self) -> ComponentId {
        let id = self.next_component_id;
        self.next_component_id += 1;
        id
    }

    pub(crate) fn rebuild_index(&mut self) {
        let entries: Vec<(HitTarget, Rect)> = self
            .elements
            .iter()
            .enumerate()
            .map(|(i, e)| (HitTarget::Element(i), e.scene_rect()))
            .chain(
                self.points
                    .iter()
                    .enumerate()
                    .map(|(i, p)| (HitTarget::Point(i), p.bounding_rect())),
            )
            .collect();
        self.index.rebuild(entries);
    }

    /// Topmost normal-mode target under `pos`, points before elements.
    pub(crate) fn hit_test(&self, pos: Point) -> Option<HitTarget> {
        self.index.query_point(pos).into_iter().next()
    }

    pub(crate) fn new_point_component(&mut self, pos: Point) -> Component {
        let id = self.alloc_id();
        Component::point(id, pos)
    }

    pub(crate) fn new_rect_component(&mut self, rect: Rect) -> Component {
        let id = self.alloc_id();
        Component::rect(id, rect)
    }
}
