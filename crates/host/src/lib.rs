//! Host module - drives the simulation on behalf of a renderer
//!
//! The core crate only reacts to `tick` and `move` calls. This crate supplies
//! the rest of a host loop:
//!
//! - [`config`]: `CUBETRIS_*` environment configuration
//! - [`runtime`]: a tokio task owning the game, with gravity on an interval and
//!   player actions on a bounded channel
//! - [`observation`]: JSON line encoding of render snapshots
//!
//! # Environment Variables
//!
//! - `CUBETRIS_SEED`: piece generator seed (default: derived from the clock)
//! - `CUBETRIS_TICK_MS`: gravity period (default: 1000)
//! - `CUBETRIS_MAX_PENDING`: command queue capacity (default: 16)
//! - `CUBETRIS_AUTOSTART`: start a game immediately (default: true)
//! - `CUBETRIS_LOG`: print `[Host]` lines to stderr (default: true)
//!
//! # Example
//!
//! ```no_run
//! use cubetris_host::{Host, HostConfig};
//! use cubetris_types::GameAction;
//!
//! let mut host = Host::start(HostConfig::from_env()).unwrap();
//! host.send(GameAction::MoveLeft).unwrap();
//! while let Some(obs) = host.try_recv() {
//!     println!("{}", obs.to_json_line().unwrap());
//! }
//! let last = host.shutdown().unwrap();
//! println!("final score {}", last.score);
//! ```

pub mod config;
pub mod error;
pub mod observation;
pub mod runtime;

pub use cubetris_core as core;
pub use cubetris_types as types;

pub use config::HostConfig;
pub use error::HostError;
pub use observation::{LastEvent, LifecycleLower, Observation};
pub use runtime::{run_host, Host, HostCommand};
