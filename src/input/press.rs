//! Press handling: selection, operation starts, and creation tools.

use crate::constants::RESIZE_HANDLE_SIZE;
use crate::error::SceneResult;
use crate::events::SceneEvent;
use crate::geometry::{clamp_point_to_rect, Point, Rect};
use crate::input::InteractionState;
use crate::scene::{Modifiers, MouseButton, Scene, Tool, ViewMode};
use crate::spatial_index::HitTarget;

/// The fixed corner to resize against, when `pos` grabs a corner handle.
fn resize_anchor(rect: Rect, pos: Point) -> Option<Point> {
    let corners = [
        (rect.top_left(), rect.bottom_right()),
        (Point::new(rect.right(), rect.top()), Point::new(rect.left(), rect.bottom())),
        (Point::new(rect.left(), rect.bottom()), Point::new(rect.right(), rect.top())),
        (rect.bottom_right(), rect.top_left()),
    ];
    corners
        .into_iter()
        .find(|(corner, _)| {
            (pos.x - corner.x).abs() <= RESIZE_HANDLE_SIZE
                && (pos.y - corner.y).abs() <= RESIZE_HANDLE_SIZE
        })
        .map(|(_, opposite)| opposite)
}

impl Scene {
    /// Handles a pointer press at `pos`.
    pub fn press(&mut self, pos: Point, button: MouseButton, modifiers: Modifiers) -> SceneResult<()> {
        match self.view_mode() {
            ViewMode::Normal => self.press_normal(pos, button, modifiers),
            ViewMode::Edit => {
                if button == MouseButton::Left {
                    self.press_edit(pos)?;
                }
                Ok(())
            }
        }
    }

    fn press_normal(&mut self, pos: Point, button: MouseButton, modifiers: Modifiers) -> SceneResult<()> {
        let hit = self.hit_test(pos);

        if button == MouseButton::Right {
            if hit.is_none() {
                self.emit(SceneEvent::RightClickOnEmptyArea { pos });
            }
            return Ok(());
        }

        match hit {
            Some(HitTarget::Point(index)) => {
                let number = self.points()[index].number;
                self.select_point(number)?;
            }
            Some(HitTarget::Element(index)) => {
                if !modifiers.shift {
                    self.deselect_all();
                }
                let rect = {
                    let element = self.element_mut(index)?;
                    element.selected = true;
                    element.scene_rect()
                };
                self.state = InteractionState::DraggingElement {
                    element: index,
                    grab: pos - rect.top_left(),
                    rect_before: rect,
                };
            }
            None => self.deselect_all(),
        }
        Ok(())
    }

    fn press_edit(&mut self, pos: Point) -> SceneResult<()> {
        match self.tool() {
            Tool::Pin => self.start_point_creation(pos),
            Tool::Boundary => self.start_rect_creation(pos),
            Tool::Select => self.press_edit_select(pos),
        }
        Ok(())
    }

    /// Pin tool: a new point appears only inside the session rect and
    /// follows the cursor until release.
    fn start_point_creation(&mut self, pos: Point) {
        let Some(rect) = self.session.as_ref().and_then(|s| s.rect()) else {
            return;
        };
        if !rect.contains(pos) {
            return;
        }
        let component = self.new_point_component(clamp_point_to_rect(pos, rect));
        let id = component.id;
        if let Some(session) = self.session.as_mut() {
            session.add(component);
            session.select_only(id);
        }
        self.state = InteractionState::CreatingPoint { component: id };
    }

    /// Boundary tool: rubber-band a new rect from the press position.
    fn start_rect_creation(&mut self, pos: Point) {
        if self.session.is_none() {
            return;
        }
        let component = self.new_rect_component(Rect::from_corners(pos, pos));
        let id = component.id;
        if let Some(session) = self.session.as_mut() {
            session.add(component);
            session.select_only(id);
        }
        self.state = InteractionState::CreatingRect {
            component: id,
            origin: pos,
        };
    }

    fn press_edit_select(&mut self, pos: Point) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(id) = session.hit_test(pos) else {
            session.deselect_all();
            return;
        };

        let Some(component) = session.find(id) else {
            return;
        };

        if let Some(point) = component.as_point() {
            let grab = pos - point.position;
            session.select_only(id);
            self.state = InteractionState::DraggingPin { component: id, grab };
            return;
        }

        if let Some(rect_component) = component.as_rect() {
            let rect = rect_component.rect;
            let was_selected = component.selected;
            if was_selected {
                if let Some(anchor) = resize_anchor(rect, pos) {
                    self.state = InteractionState::Resizing { component: id, anchor };
                    return;
                }
            }
            let pins_before = session.point_snapshot();
            session.select_only(id);
            self.state = InteractionState::DraggingRect {
                component: id,
                grab: pos - rect.top_left(),
                rect_before: rect,
                pins_before,
            };
        }
    }
}
