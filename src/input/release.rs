//! Release handling: finalizing the in-flight operation.

use crate::constants::MIN_BOUNDARY_SIZE;
use crate::error::SceneResult;
use crate::events::SceneEvent;
use crate::geometry::Point;
use crate::input::InteractionState;
use crate::scene::Scene;
use crate::types::ComponentId;
use tracing::debug;

impl Scene {
    /// Handles a pointer release at `pos`.
    pub fn release(&mut self, pos: Point) -> SceneResult<()> {
        self.move_to(pos)?;

        let state = self.state.clone();
        self.state.reset();

        match state {
            InteractionState::CreatingRect { component, .. } => {
                self.finish_rect_creation(component)?;
            }
            InteractionState::DraggingElement { element, .. } => {
                let rect = self.element(element)?.scene_rect();
                self.emit(SceneEvent::ElementPositionEdited { element, rect });
            }
            // points and drags are already in their final position
            _ => {}
        }
        Ok(())
    }

    /// Validates a freshly rubber-banded rect: degenerate rects and rects
    /// excluding an existing session pin are discarded; a surviving rect
    /// replaces the session's previous one.
    fn finish_rect_creation(&mut self, component: ComponentId) -> SceneResult<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        let Some(rect) = session.find(component).and_then(|c| c.as_rect()).map(|r| r.rect)
        else {
            return Ok(());
        };

        if rect.width < MIN_BOUNDARY_SIZE || rect.height < MIN_BOUNDARY_SIZE {
            session.remove_by_id(component);
            debug!("discarding degenerate boundary rect");
            return Ok(());
        }

        let excluded = session
            .point_positions()
            .iter()
            .any(|&p| !rect.contains(p));
        if excluded {
            session.remove_by_id(component);
            debug!("discarding boundary rect that excludes existing pins");
            return Ok(());
        }

        session.evict_older_rects()?;
        Ok(())
    }
}
