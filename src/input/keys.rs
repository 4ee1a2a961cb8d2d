//! Keyboard handling: deletion and cancellation.

use crate::error::SceneResult;
use crate::input::InteractionState;
use crate::scene::{Scene, ViewMode};

/// Keys the scene reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Delete,
    Escape,
}

impl Scene {
    /// Handles a key press.
    pub fn key_press(&mut self, key: Key) -> SceneResult<()> {
        match (self.view_mode(), key) {
            (ViewMode::Edit, Key::Delete) => self.delete_in_session(),
            (ViewMode::Edit, Key::Escape) => self.escape_in_session(),
            (ViewMode::Normal, Key::Delete) => self.delete_selected()?,
            (ViewMode::Normal, Key::Escape) => {
                self.state.reset();
                self.deselect_all();
            }
        }
        Ok(())
    }

    /// Deletes the selected session components. Deleting the boundary rect
    /// clears the whole working set; the commit then deletes the element.
    fn delete_in_session(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        for id in session.selected_ids() {
            let is_rect = session.find(id).map(|c| c.is_rect()).unwrap_or(false);
            if is_rect {
                let all: Vec<_> = session.components().iter().map(|c| c.id).collect();
                for component in all {
                    session.remove_by_id(component);
                }
            } else {
                session.remove_by_id(id);
            }
        }
        self.state.reset();
    }

    /// Escape aborts the in-flight operation if one exists, otherwise the
    /// whole edit.
    fn escape_in_session(&mut self) {
        let state = self.state.clone();
        match state {
            InteractionState::Idle => self.cancel_edit(),
            InteractionState::CreatingPoint { component }
            | InteractionState::CreatingRect { component, .. } => {
                if let Some(session) = self.session.as_mut() {
                    session.remove_by_id(component);
                }
                self.state.reset();
            }
            _ => self.state.reset(),
        }
    }

    /// Normal-mode delete: selected elements and selected free points.
    fn delete_selected(&mut self) -> SceneResult<()> {
        let mut elements = self.selected_elements();
        elements.sort_unstable_by(|a, b| b.cmp(a));
        for index in elements {
            self.remove_element(index)?;
        }

        let mut numbers: Vec<usize> = self
            .points()
            .iter()
            .filter(|p| p.selected)
            .map(|p| p.number)
            .collect();
        numbers.sort_unstable_by(|a, b| b.cmp(a));
        for number in numbers {
            self.remove_point(number)?;
        }
        Ok(())
    }
}
