//! Crate-wide constants.
//!
//! Centralizes magic numbers and tuning values so interaction behavior
//! is adjustable in one place.

// ============================================================================
// Pin Rendering / Hit Testing
// ============================================================================

/// Default visual radius of a pin in scene units
pub const PIN_RADIUS: f32 = 4.0;

/// Radius multiplier applied to a selected pin
pub const SELECTED_PIN_SCALE: f32 = 2.5;

// ============================================================================
// Input Handling
// ============================================================================

/// Distance from a rect corner (in scene units) that counts as a resize grip
pub const RESIZE_HANDLE_SIZE: f32 = 8.0;

/// Minimum width/height for a mouse-drawn boundary to survive release
pub const MIN_BOUNDARY_SIZE: f32 = 2.0;

// ============================================================================
// Element Naming
// ============================================================================

/// Prefix for auto-generated element names (`UserElement_1`, `UserElement_2`, ...)
pub const USER_ELEMENT_PREFIX: &str = "UserElement_";

// ============================================================================
// Label Layout
// ============================================================================

/// Nominal glyph width used to estimate a text label's unscaled extent
pub const NOMINAL_CHAR_WIDTH: f32 = 7.0;

/// Nominal line height used to estimate a text label's unscaled extent
pub const NOMINAL_TEXT_HEIGHT: f32 = 14.0;

// ============================================================================
// Geometry
// ============================================================================

/// Tolerance for position comparisons when diffing an edit session
pub const POSITION_EPSILON: f32 = 1e-4;
