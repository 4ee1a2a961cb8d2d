//! Error types for scene operations.
//!
//! Contract errors (bad indices, malformed edit sessions) are kept distinct
//! from external-resource errors (IO, JSON) so callers can tell a programming
//! error from a bad file. Business-logic no-ops (vetoed rect creation,
//! promotion without a rect during commit) never surface here; they are
//! silently discarded by the interaction code.

use thiserror::Error;

/// Errors that can occur during scene operations
#[derive(Error, Debug)]
pub enum SceneError {
    /// No free-standing point carries the requested number
    #[error("no point with number {0}")]
    PointNotFound(usize),

    /// No element exists at the given index
    #[error("no element at index {0}")]
    ElementNotFound(usize),

    /// Pin lookup outside the element's dense index range
    #[error("pin index {index} out of range for element with {count} pins")]
    InvalidPinIndex { index: usize, count: usize },

    /// Promotion was attempted on components without a rectangle
    #[error("edited components contain no rectangle")]
    MissingRect,

    /// More rectangles in an edit session than the duplicate-eviction rule expects
    #[error("too many rectangles in edit session ({0})")]
    TooManyRects(usize),

    /// A layout record carries neither corner-pair nor center-form geometry
    #[error("element '{0}' carries no usable bounding geometry")]
    MissingGeometry(String),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Background image could not be read
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias for scene operations
pub type SceneResult<T> = Result<T, SceneError>;
