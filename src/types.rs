//! Core component model for the scene.
//!
//! Editable scene content is a closed set of component kinds: draggable
//! points (pins), resizable rectangles (element boundaries), and groups.
//! Behavior differences are expressed through [`Capabilities`] flags rather
//! than an inheritance chain; membership in an in-flight operation is tracked
//! by the interaction state machine, not by the component itself.

use crate::constants::PIN_RADIUS;
use crate::geometry::{union_rect, Point, Rect};
use serde::{Deserialize, Serialize};

/// Unique identifier for a component within one scene.
pub type ComponentId = u64;

/// What a component can do. Replaces subclass dispatch with flags
/// checked at the interaction seams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub draggable: bool,
    pub selectable: bool,
    /// Selecting this component deselects everything else by default
    pub unique_selection: bool,
}

impl Capabilities {
    /// Fully interactive: draggable, selectable, exclusive selection.
    pub const INTERACTIVE: Capabilities = Capabilities {
        draggable: true,
        selectable: true,
        unique_selection: true,
    };

    /// Inert content (labels, decorations).
    pub const STATIC: Capabilities = Capabilities {
        draggable: false,
        selectable: false,
        unique_selection: false,
    };
}

/// A draggable, selectable 2D position with an identifying number.
///
/// Free-standing points keep `number` dense across inserts and deletes;
/// points living inside an edit session are numbered only at commit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PointComponent {
    pub position: Point,
    pub number: usize,
    /// Visual radius in scene units; scale-dependent, not semantically load-bearing
    pub radius: f32,
    pub selected: bool,
}

impl PointComponent {
    pub fn new(position: Point, number: usize) -> Self {
        Self {
            position,
            number,
            radius: PIN_RADIUS,
            selected: false,
        }
    }

    /// Radius the renderer should draw at; selection enlarges the pin.
    pub fn visual_radius(&self) -> f32 {
        if self.selected {
            self.radius * crate::constants::SELECTED_PIN_SCALE
        } else {
            self.radius
        }
    }

    /// The box the point occupies for hit testing.
    pub fn bounding_rect(&self) -> Rect {
        Rect::new(
            self.position.x - self.radius,
            self.position.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }

    pub fn increment_number(&mut self) {
        self.number += 1;
    }

    pub fn decrement_number(&mut self) {
        self.number -= 1;
    }
}

/// A draggable, resizable axis-aligned rectangle in scene coordinates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RectComponent {
    pub rect: Rect,
}

impl RectComponent {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }
}

/// An ordered collection of child components treated as one unit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GroupComponent {
    pub children: Vec<Component>,
}

/// The closed set of component kinds. The interaction state machine
/// matches exhaustively over this.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ComponentKind {
    Point(PointComponent),
    Rect(RectComponent),
    Group(GroupComponent),
}

/// A component placed in the scene or in an edit session's working set.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    pub kind: ComponentKind,
    pub selected: bool,
    pub capabilities: Capabilities,
}

impl Component {
    pub fn point(id: ComponentId, position: Point) -> Self {
        Self {
            id,
            kind: ComponentKind::Point(PointComponent::new(position, 0)),
            selected: false,
            capabilities: Capabilities::INTERACTIVE,
        }
    }

    pub fn rect(id: ComponentId, rect: Rect) -> Self {
        Self {
            id,
            kind: ComponentKind::Rect(RectComponent::new(rect)),
            selected: false,
            capabilities: Capabilities::INTERACTIVE,
        }
    }

    pub fn group(id: ComponentId, children: Vec<Component>) -> Self {
        Self {
            id,
            kind: ComponentKind::Group(GroupComponent { children }),
            selected: false,
            capabilities: Capabilities::INTERACTIVE,
        }
    }

    pub fn is_point(&self) -> bool {
        matches!(self.kind, ComponentKind::Point(_))
    }

    pub fn is_rect(&self) -> bool {
        matches!(self.kind, ComponentKind::Rect(_))
    }

    pub fn as_point(&self) -> Option<&PointComponent> {
        match &self.kind {
            ComponentKind::Point(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_point_mut(&mut self) -> Option<&mut PointComponent> {
        match &mut self.kind {
            ComponentKind::Point(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_rect(&self) -> Option<&RectComponent> {
        match &self.kind {
            ComponentKind::Rect(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_rect_mut(&mut self) -> Option<&mut RectComponent> {
        match &mut self.kind {
            ComponentKind::Rect(r) => Some(r),
            _ => None,
        }
    }

    /// Scene-space bounding rectangle of this component.
    pub fn bounding_rect(&self) -> Rect {
        match &self.kind {
            ComponentKind::Point(p) => p.bounding_rect(),
            ComponentKind::Rect(r) => r.rect,
            ComponentKind::Group(g) => {
                let rects: Vec<Rect> = g.children.iter().map(|c| c.bounding_rect()).collect();
                if rects.is_empty() {
                    Rect::default()
                } else {
                    union_rect(&rects)
                }
            }
        }
    }

    /// Scene position: a point's center, or a rect's/group's top-left corner.
    pub fn scene_position(&self) -> Point {
        match &self.kind {
            ComponentKind::Point(p) => p.position,
            _ => self.bounding_rect().top_left(),
        }
    }

    pub fn contains_point(&self, pos: Point) -> bool {
        self.bounding_rect().contains(pos)
    }

    /// Moves the component by `delta`, carrying group children along.
    pub fn translate(&mut self, delta: Point) {
        match &mut self.kind {
            ComponentKind::Point(p) => p.position = p.position + delta,
            ComponentKind::Rect(r) => r.rect = r.rect.translated(delta),
            ComponentKind::Group(g) => {
                for child in &mut g.children {
                    child.translate(delta);
                }
            }
        }
    }

    /// Moves the component so its scene position lands at `pos`.
    pub fn set_position(&mut self, pos: Point) {
        let delta = pos - self.scene_position();
        self.translate(delta);
    }

    pub fn set_selected(&mut self, selected: bool) {
        if self.capabilities.selectable {
            self.selected = selected;
        }
    }
}
