//! Element description labels.
//!
//! An element is labeled either with an icon (the ideal rendering of a
//! recognized component, rotated in quarter turns) or with its name as text.
//! The label itself is drawn by an external renderer; this module only
//! decides icon-vs-text and computes the rotation and uniform fit scale the
//! renderer should apply.

use crate::constants::{NOMINAL_CHAR_WIDTH, NOMINAL_TEXT_HEIGHT};
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Rotation and scale the renderer applies to a label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelLayout {
    /// Counter-clockwise rotation in degrees
    pub rotation_degrees: f32,
    /// Uniform scale fitting the label into the element rect
    pub scale: f32,
}

/// The description label attached to an element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Description {
    pub text: String,
    /// Path to the icon file, when one exists on disk
    pub icon: Option<PathBuf>,
    /// Placement rotation in quarter turns (0..=3)
    pub rotation: Option<u8>,
    pub visible: bool,
}

impl Description {
    /// Plain text label showing the element name.
    pub fn text(name: &str) -> Self {
        Self {
            text: name.to_string(),
            icon: None,
            rotation: None,
            visible: true,
        }
    }

    /// Icon label, degrading to text when the icon file is missing.
    pub fn with_icon(name: &str, icon: Option<PathBuf>, rotation: Option<u8>) -> Self {
        let icon = icon.filter(|path| path.exists());
        Self {
            text: name.to_string(),
            icon,
            rotation,
            visible: true,
        }
    }

    pub fn uses_icon(&self) -> bool {
        self.icon.is_some()
    }

    /// Computes how the label should be placed inside `rect`.
    ///
    /// Icons rotate by `rotation * 90°`. Text auto-rotates a quarter turn
    /// when the rect is taller than wide, and is scaled uniformly so its
    /// nominal extent fits the rect.
    pub fn layout(&self, rect: Rect) -> LabelLayout {
        if self.uses_icon() {
            let quarter = self.rotation.unwrap_or(0) % 4;
            return LabelLayout {
                rotation_degrees: -90.0 * quarter as f32,
                scale: 1.0,
            };
        }

        let rotated = rect.height > rect.width;
        let text_width = self.text.chars().count().max(1) as f32 * NOMINAL_CHAR_WIDTH;
        let (extent_w, extent_h) = if rotated {
            (NOMINAL_TEXT_HEIGHT, text_width)
        } else {
            (text_width, NOMINAL_TEXT_HEIGHT)
        };
        LabelLayout {
            rotation_degrees: if rotated { -90.0 } else { 0.0 },
            scale: (rect.width / extent_w).min(rect.height / extent_h),
        }
    }
}
