//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of the scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenePhase {
    /// Frames and spawns are processed.
    #[default]
    Running,
    /// Spawner cancelled; frames are ignored until restart.
    Stopped,
}

/// Which bounding volume a hostile presents to projectiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionMode {
    /// Hostile box ignores its rotation.
    Aligned,
    /// Hostile box follows its accumulated rotation.
    #[default]
    Oriented,
}
