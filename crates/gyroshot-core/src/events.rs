//! Events emitted by the simulation for audio and UI feedback.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::components::HostileId;

/// Something noteworthy that happened during a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    /// The weapon fired from the given aim offset.
    ProjectileFired { aim: Vec2 },
    /// A hostile entered the scene.
    HostileSpawned { hostile: HostileId, position: Vec3 },
    /// A projectile destroyed a hostile; an explosion starts at `position`.
    HostileDestroyed { hostile: HostileId, position: Vec3 },
    /// An explosion finished.
    EffectExpired { position: Vec3 },
}
