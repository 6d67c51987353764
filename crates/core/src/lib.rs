//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the whole 3D falling-blocks simulation: the occupancy
//! model, piece generation, gravity and collision, layer clearing and loss
//! detection. It has **no dependencies** on rendering, timing, input devices
//! or I/O:
//!
//! - **Deterministic**: the same seed replays the same game
//! - **Pure physics**: every rule in [`physics`] is a function over volumes
//! - **Copyable state**: a [`Volume`] is a fixed 128-cell value, snapshots are copies
//!
//! # Module Structure
//!
//! - [`volume`]: dense WIDTH x BUFFER_HEIGHT x DEPTH boolean field
//! - [`physics`]: collision, gravity, floor contact, lateral moves, clearing, loss
//! - [`pieces`]: the 11-template spawn catalog
//! - [`rng`]: seeded LCG usable wherever a [`rand::Rng`] is expected
//! - [`grid`]: landed/falling volumes plus score and lifecycle
//! - [`game_state`]: the tick/move state machine
//! - [`snapshot`]: immutable render view
//!
//! # Rules
//!
//! - A new piece appears in the two buffer rows above the visible stack.
//! - Each tick the piece drops one layer. It locks where it is once the next
//!   layer down is blocked or it is already on the floor.
//! - Full layers in the visible stack are removed, one point each.
//! - The game ends when a locked cell sits on the top visible layer or above.
//!
//! # Example
//!
//! ```
//! use cubetris_core::GameState;
//! use cubetris_types::Direction;
//!
//! let mut game = GameState::new(12345);
//! let snap = game.start();
//! assert!(snap.is_running());
//!
//! game.apply_move(Direction::Left);
//! for _ in 0..50 {
//!     game.tick();
//! }
//! assert!(game.pieces_spawned() > 1 || !game.is_running());
//! ```

pub mod game_state;
pub mod grid;
pub mod physics;
pub mod pieces;
pub mod rng;
pub mod snapshot;
pub mod volume;

pub use cubetris_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, TickEvent};
pub use grid::Grid;
pub use physics::{
    check_for_loss, clear_full_layers, collapse_layer, collides, has_floor_contact, shift_down,
    translate_lateral, union, LayerClear,
};
pub use pieces::{place, spawn, PieceTemplate, SpawnedPiece, TEMPLATES, TEMPLATE_COUNT};
pub use rng::SimpleRng;
pub use snapshot::RenderSnapshot;
pub use volume::{Coord, Volume};
