//! GYROSHOT headless runner.
//!
//! This crate runs the scene on its own thread and bridges controller input
//! to it through a command channel.

pub mod game_loop;
pub mod ipc;
pub mod state;

pub use gyroshot_core as core;
