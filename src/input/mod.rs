//! Pointer and keyboard input.
//!
//! All input enters the scene through `press`, `move_to`, `release`, and
//! `key_press`, each in its own file. The handlers read and transition the
//! [`InteractionState`] machine; constraint enforcement happens live inside
//! the move handler so intermediate frames already satisfy the containment
//! rules.

mod drag;
mod keys;
mod press;
mod release;
pub mod state;

pub use keys::Key;
pub use state::InteractionState;
