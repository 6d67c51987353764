//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the simulation core, the input layer and the host runtime alike.
//!
//! # Play Volume
//!
//! The game is played inside a small fixed box:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WIDTH` | 4 | Lateral extent along x |
//! | `DEPTH` | 4 | Lateral extent along z |
//! | `VISIBLE_HEIGHT` | 6 | Height of the playable stack |
//! | `BUFFER_HEIGHT` | 8 | Total height, including 2 spawn rows |
//! | `SPAWN_Y` | 6 | Bottom row of a freshly spawned piece |
//!
//! # Examples
//!
//! ```
//! use cubetris_types::{Axis, Direction, GameAction, Sign, WIDTH, BUFFER_HEIGHT};
//!
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir.axis(), Axis::X);
//! assert_eq!(dir.sign(), Sign::Negative);
//!
//! let action = GameAction::from_str("moveBackward").unwrap();
//! assert_eq!(action.direction(), Some(Direction::Backward));
//!
//! assert_eq!(WIDTH, 4);
//! assert_eq!(BUFFER_HEIGHT, 8);
//! ```

/// Lateral extent along the x axis
pub const WIDTH: usize = 4;

/// Lateral extent along the z axis
pub const DEPTH: usize = 4;

/// Height of the playable stack (y axis)
pub const VISIBLE_HEIGHT: usize = 6;

/// Total vertical extent of an occupancy volume.
///
/// Two rows above `VISIBLE_HEIGHT` give new pieces headroom to fall into view.
pub const BUFFER_HEIGHT: usize = 8;

/// Row that the lowest cell of a freshly spawned piece occupies
pub const SPAWN_Y: usize = 6;

/// Number of cells in one occupancy volume
pub const CELL_COUNT: usize = WIDTH * BUFFER_HEIGHT * DEPTH;

/// Default gravity period in milliseconds (one layer per second)
pub const TICK_MS: u64 = 1000;

/// Lateral axis a piece can be translated along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Z,
}

impl Axis {
    /// Number of cells along this axis
    pub fn extent(&self) -> usize {
        match self {
            Axis::X => WIDTH,
            Axis::Z => DEPTH,
        }
    }
}

/// Unit step along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Positive,
}

/// Player-driven lateral movement
///
/// - **Left** / **Right**: -x / +x
/// - **Forward** / **Backward**: -z / +z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Forward,
    Backward,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Backward,
    ];

    pub fn axis(&self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::X,
            Direction::Forward | Direction::Backward => Axis::Z,
        }
    }

    pub fn sign(&self) -> Sign {
        match self {
            Direction::Left | Direction::Forward => Sign::Negative,
            Direction::Right | Direction::Backward => Sign::Positive,
        }
    }

    /// The direction that undoes this one
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "forward" => Some(Direction::Forward),
            "backward" => Some(Direction::Backward),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

/// Simulation lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lifecycle {
    #[default]
    NotStarted,
    Running,
    GameOver,
}

/// Discrete events an input layer can feed into the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    Start,
    Restart,
    MoveLeft,
    MoveRight,
    MoveForward,
    MoveBackward,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameAction::Start),
            "restart" => Some(GameAction::Restart),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "moveforward" => Some(GameAction::MoveForward),
            "movebackward" => Some(GameAction::MoveBackward),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start => "start",
            GameAction::Restart => "restart",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveForward => "moveForward",
            GameAction::MoveBackward => "moveBackward",
        }
    }

    /// Lateral direction for move actions, `None` for lifecycle actions
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::MoveForward => Some(Direction::Forward),
            GameAction::MoveBackward => Some(Direction::Backward),
            GameAction::Start | GameAction::Restart => None,
        }
    }
}

impl From<Direction> for GameAction {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Left => GameAction::MoveLeft,
            Direction::Right => GameAction::MoveRight,
            Direction::Forward => GameAction::MoveForward,
            Direction::Backward => GameAction::MoveBackward,
        }
    }
}
