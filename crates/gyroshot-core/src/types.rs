//! Fundamental spatial and timing types.
//!
//! Scene space follows the camera convention of the renderer:
//! x = right, y = up, z = toward the viewer. The player fires along -z.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// World-space position of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// Linear velocity in units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Euler angles (radians, XYZ order).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation(pub Vec3);

/// Collision half-extents of an entity's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitBox {
    pub half_extents: Vec3,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of frames stepped since the scene started.
    pub frame: u64,
    /// Sum of all frame deltas in seconds.
    pub elapsed_secs: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }
}

impl Rotation {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }
}

impl HitBox {
    pub fn new(half_extents: Vec3) -> Self {
        Self { half_extents }
    }
}

impl SimTime {
    /// Advance by one frame of `delta` seconds.
    pub fn advance(&mut self, delta: f32) {
        self.frame += 1;
        self.elapsed_secs += delta;
    }
}
