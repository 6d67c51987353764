//! Cubetris (workspace facade crate).
//!
//! Re-exports the member crates under one name so binaries, tests and benches
//! can use `cubetris::{core,host,input,types}`.

pub use cubetris_core as core;
pub use cubetris_host as host;
pub use cubetris_input as input;
pub use cubetris_types as types;
