//! Systems that operate on the entity store each frame.
//!
//! Systems are plain functions over the store (or its hecs `World`).
//! They do not own entity state; all of it lives in the store.

pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod snapshot;
pub mod spawner;
