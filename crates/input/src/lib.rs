//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The
//! simulation never sees key codes; any other input source (buttons, a script,
//! a test) can produce the same actions.

pub mod map;

pub use cubetris_types as types;

pub use map::{handle_key_event, should_quit};
