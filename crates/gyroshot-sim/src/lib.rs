//! Simulation engine for GYROSHOT.
//!
//! Owns the entity store (a hecs world), maps controller input to aim, gates
//! weapon fire, spawns hostiles on a wall-clock schedule, integrates motion,
//! resolves collisions and produces SceneSnapshots for the presentation layer.

pub mod config;
pub mod engine;
pub mod input;
pub mod store;
pub mod systems;
pub mod weapon;
pub mod world_setup;

pub use config::{ConfigError, SimConfig};
pub use engine::Scene;
pub use gyroshot_core as core;
