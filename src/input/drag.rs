//! Move handling: live constraint enforcement while an operation is in
//! flight.
//!
//! Every branch re-applies its containment rule on each frame, so observers
//! sampling mid-drag never see a pin outside its rect or a rect outside the
//! background.

use crate::error::SceneResult;
use crate::geometry::{
    bounding_rect_of, clamp_point_to_rect, fit_rect_inside_background, translate_with_reference,
    Point, Rect,
};
use crate::input::InteractionState;
use crate::scene::Scene;
use crate::types::ComponentId;

impl Scene {
    /// Handles a pointer move to `pos`.
    pub fn move_to(&mut self, pos: Point) -> SceneResult<()> {
        let state = self.state.clone();
        match state {
            InteractionState::Idle => {}

            // Creation previews follow the cursor under the same
            // constraints as drags.
            InteractionState::CreatingPoint { component } => {
                self.drag_session_point(component, pos, Point::ZERO);
            }
            InteractionState::CreatingRect { component, origin } => {
                let clamped = clamp_point_to_rect(pos, self.background().rect);
                self.set_session_rect(component, Rect::from_corners(origin, clamped));
            }

            InteractionState::DraggingPin { component, grab } => {
                self.drag_session_point(component, pos, grab);
            }

            InteractionState::DraggingRect {
                component,
                grab,
                rect_before,
                pins_before,
            } => {
                let desired = rect_before.at_position(pos - grab);
                let fitted =
                    fit_rect_inside_background(rect_before, desired, self.background().rect);
                self.set_session_rect(component, fitted);
                // pins ride along rigidly, anchored to the rect corner
                for (id, before) in pins_before {
                    let carried = translate_with_reference(
                        before,
                        rect_before.top_left(),
                        fitted.top_left(),
                    );
                    self.set_session_point(id, carried);
                }
            }

            InteractionState::DraggingElement {
                element,
                grab,
                rect_before,
            } => {
                let desired = rect_before.at_position(pos - grab);
                let fitted =
                    fit_rect_inside_background(rect_before, desired, self.background().rect);
                let current = self.element(element)?.scene_rect();
                let delta = fitted.top_left() - current.top_left();
                self.element_mut(element)?.translate(delta);
                self.rebuild_index();
            }

            InteractionState::Resizing { component, anchor } => {
                let clamped = clamp_point_to_rect(pos, self.background().rect);
                let mut rect = Rect::from_corners(anchor, clamped);
                // a resize can never exclude the session's pins
                let pins = self
                    .session
                    .as_ref()
                    .map(|s| s.point_positions())
                    .unwrap_or_default();
                if !pins.is_empty() {
                    rect = rect.united(bounding_rect_of(&pins));
                }
                self.set_session_rect(component, rect);
            }
        }
        Ok(())
    }

    /// Moves a session point to `pos - grab`, clamped into the session rect.
    fn drag_session_point(&mut self, component: ComponentId, pos: Point, grab: Point) {
        let target = pos - grab;
        let clamped = match self.session.as_ref().and_then(|s| s.rect()) {
            Some(rect) => clamp_point_to_rect(target, rect),
            None => target,
        };
        self.set_session_point(component, clamped);
    }

    fn set_session_rect(&mut self, id: ComponentId, rect: Rect) {
        if let Some(session) = self.session.as_mut() {
            if let Some(r) = session.find_mut(id).and_then(|c| c.as_rect_mut()) {
                r.rect = rect;
            }
        }
    }

    fn set_session_point(&mut self, id: ComponentId, pos: Point) {
        if let Some(session) = self.session.as_mut() {
            if let Some(p) = session.find_mut(id).and_then(|c| c.as_point_mut()) {
                p.position = pos;
            }
        }
    }
}
