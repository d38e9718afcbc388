//! Scene snapshot: the complete visible state handed to the presentation
//! layer after each frame.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::components::{HostileId, Particle};
use crate::enums::ScenePhase;
use crate::events::SceneEvent;
use crate::types::SimTime;

/// Complete scene state after a frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub time: SimTime,
    pub phase: ScenePhase,
    /// Reticle position.
    pub aim: Vec2,
    pub projectiles: Vec<ProjectileView>,
    pub hostiles: Vec<HostileView>,
    pub effects: Vec<EffectView>,
    pub events: Vec<SceneEvent>,
    pub score: ScoreView,
}

/// A projectile in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    /// Opaque key, stable for the projectile's lifetime.
    pub id: u64,
    pub position: Vec3,
    pub velocity: Vec3,
}

/// A live hostile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostileView {
    pub id: HostileId,
    pub position: Vec3,
    pub rotation: Vec3,
}

/// A running explosion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectView {
    /// Opaque key, stable for the effect's lifetime.
    pub id: u64,
    pub origin: Vec3,
    /// Fraction of the lifetime already elapsed (0.0 - 1.0).
    pub progress: f32,
    pub particles: Vec<Particle>,
}

/// Running tally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub hostiles_destroyed: u32,
    pub projectiles_fired: u32,
}
