//! ECS components for hecs entities.
//!
//! Components are plain data. Behavior lives in the simulation systems.
//! Spatial state uses the shared `Position`, `Velocity`, `Rotation` and
//! `HitBox` types from `types.rs`.

use std::fmt;
use std::time::Duration;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Identifier of a hostile. Allocated monotonically, never reused within a scene.
///
/// The numeric value also keys the hostile's weave phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HostileId(pub u64);

impl fmt::Display for HostileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{}", self.0)
    }
}

/// Marks an entity as a player projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Scene clock at the moment of firing.
    pub fired_at: Duration,
}

/// Marks an entity as a hostile unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hostile {
    pub id: HostileId,
}

/// An explosion effect. The entity's `Position` is the explosion origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effect {
    /// Scene clock at creation; the effect expires a fixed TTL later.
    pub created_at: Duration,
    /// Fixed at creation; never grows or shrinks.
    pub particles: Vec<Particle>,
}

/// One debris particle of an explosion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Euler angles (radians).
    pub rotation: Vec3,
    /// Per-axis spin rate (rad/s).
    pub spin: Vec3,
}
