//! Headless scene engine for annotating PCB component footprints over a
//! board photograph.
//!
//! The scene holds elements (a boundary rectangle plus numbered pins and a
//! description label) and free-standing points on top of a background image.
//! Pointer and keyboard input drive an explicit interaction state machine;
//! geometric constraints (pins stay inside their rect, rects stay on the
//! background, resizes never exclude pins) are enforced live on every frame.
//! Mutations fan out to observers as [`SceneEvent`]s, and layouts round-trip
//! through the shared JSON format of the inspection pipeline.

pub mod constants;
pub mod description;
pub mod element;
pub mod error;
pub mod events;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod scene;
pub mod session;
pub mod spatial_index;
pub mod types;

pub use description::{Description, LabelLayout};
pub use element::{unique_element_name, ElementItem, Pin};
pub use error::{SceneError, SceneResult};
pub use events::{ObserverToken, SceneEvent};
pub use geometry::{Point, Rect};
pub use input::{InteractionState, Key};
pub use layout::{BoardLayout, ElementRecord, PinRecord};
pub use scene::{Background, Modifiers, MouseButton, Scene, Tool, ViewMode};
pub use session::{EditSession, SessionDiff};
pub use types::{Capabilities, Component, ComponentId, ComponentKind, PointComponent};
