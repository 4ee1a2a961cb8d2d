//! Persisted board layout format.
//!
//! The on-disk shape is shared with the upstream inspection pipeline:
//! a single object holding an `elements` array. Each element carries its
//! pins (absolute scene coordinates plus arbitrary extra fields that must
//! round-trip untouched), a name, a rotation in quarter turns, and its
//! bounding rectangle in one of two historical forms:
//!
//! - `bounding_zone`: a corner pair `[[x0, y0], [x1, y1]]`
//! - `width`/`height`/`center`: dimensions around a center point, where an
//!   odd rotation swaps the width and height axes
//!
//! Readers accept either form; writers emit both so older consumers keep
//! working.

use crate::error::{SceneError, SceneResult};
use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// One pin inside a persisted element. Unknown fields (probe scores,
/// cluster ids, IV curves) pass through `extra` opaquely.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PinRecord {
    pub x: f32,
    pub y: f32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PinRecord {
    pub fn new(pos: Point) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            extra: Map::new(),
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One persisted element.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ElementRecord {
    #[serde(default)]
    pub pins: Vec<PinRecord>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_zone: Option<[[f32; 2]; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<[f32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg_file: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ElementRecord {
    /// Resolves the element's scene rectangle from whichever geometry form
    /// is present, preferring the corner pair.
    pub fn scene_rect(&self) -> SceneResult<Rect> {
        if let Some([[x0, y0], [x1, y1]]) = self.bounding_zone {
            return Ok(Rect::from_corners(Point::new(x0, y0), Point::new(x1, y1)));
        }

        if let (Some(width), Some(height), Some([cx, cy])) = (self.width, self.height, self.center)
        {
            // odd quadrant rotations swap the axes of the stored dimensions
            let odd = self.rotation.unwrap_or(0).rem_euclid(2) == 1;
            let (w, h) = if odd { (height, width) } else { (width, height) };
            return Ok(Rect::from_center(Point::new(cx, cy), w, h));
        }

        Err(SceneError::MissingGeometry(self.name.clone()))
    }
}

/// The whole persisted layout.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BoardLayout {
    #[serde(default)]
    pub elements: Vec<ElementRecord>,
}

impl BoardLayout {
    pub fn load(path: &Path) -> SceneResult<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, path: &Path) -> SceneResult<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }
}
