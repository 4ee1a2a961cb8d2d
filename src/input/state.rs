//! Interaction state machine.
//!
//! One explicit enum instead of scattered "currently dragging" flags, so an
//! in-flight operation is always a single value and impossible combinations
//! (resizing while creating, two concurrent drags) cannot be represented.
//!
//! ## Transitions
//!
//! ```text
//! Idle -> CreatingPoint    (press with pin tool inside the session rect)
//! Idle -> CreatingRect     (press with boundary tool)
//! Idle -> DraggingPin      (press on a session point with select tool)
//! Idle -> DraggingRect     (press on the session rect body)
//! Idle -> Resizing         (press near a selected rect corner)
//! Idle -> DraggingElement  (normal-mode press on an element)
//!
//! Any  -> Idle             (release finalizes, Escape aborts)
//! ```

use crate::geometry::{Point, Rect};
use crate::types::ComponentId;

/// The current in-flight pointer operation.
#[derive(Clone, Debug, Default)]
pub enum InteractionState {
    /// No operation in flight
    #[default]
    Idle,

    /// A point component is being placed and follows the cursor
    CreatingPoint { component: ComponentId },

    /// A rect is being rubber-banded from `origin` to the cursor
    CreatingRect {
        component: ComponentId,
        origin: Point,
    },

    /// A session point is being dragged
    DraggingPin {
        component: ComponentId,
        /// Cursor offset from the point's position at grab time
        grab: Point,
    },

    /// The session rect is being dragged; pins ride along rigidly
    DraggingRect {
        component: ComponentId,
        /// Cursor offset from the rect's top-left corner at grab time
        grab: Point,
        rect_before: Rect,
        /// Point positions at grab time, keyed by component id
        pins_before: Vec<(ComponentId, Point)>,
    },

    /// A whole element is being dragged in normal mode
    DraggingElement {
        element: usize,
        grab: Point,
        rect_before: Rect,
    },

    /// The session rect is being resized by one corner; `anchor` is the
    /// opposite corner, which stays fixed
    Resizing {
        component: ComponentId,
        anchor: Point,
    },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_creating(&self) -> bool {
        matches!(self, Self::CreatingPoint { .. } | Self::CreatingRect { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(
            self,
            Self::DraggingPin { .. } | Self::DraggingRect { .. } | Self::DraggingElement { .. }
        )
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    /// The session component this operation is acting on, if any.
    pub fn active_component(&self) -> Option<ComponentId> {
        match self {
            Self::CreatingPoint { component }
            | Self::CreatingRect { component, .. }
            | Self::DraggingPin { component, .. }
            | Self::DraggingRect { component, .. }
            | Self::Resizing { component, .. } => Some(*component),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
