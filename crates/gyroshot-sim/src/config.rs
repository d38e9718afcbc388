//! Scene configuration.
//!
//! Every tunable lives here so tests and hosts can vary them without touching
//! the systems. Missing fields in a JSON file fall back to the defaults in
//! `gyroshot_core::constants`.

use std::path::Path;
use std::time::Duration;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use gyroshot_core::constants::*;
use gyroshot_core::enums::CollisionMode;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Configuration for starting a new scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for spawn positions and particle scatter. Same seed = same scene.
    pub seed: u64,

    pub shot_cooldown_ms: u64,
    pub projectile_speed: f32,
    pub projectile_spawn_depth: f32,
    pub projectile_depth_limit: f32,
    pub projectile_half_extents: [f32; 3],

    pub hostile_spawn_interval_ms: u64,
    pub hostile_spawn_band_x: f32,
    pub hostile_spawn_band_y: f32,
    pub hostile_start_depth: f32,
    pub hostile_start_rotation: [f32; 3],
    pub hostile_half_extents: [f32; 3],
    pub hostile_approach_speed: f32,
    pub hostile_drift_amplitude: f32,
    pub hostile_spin_rates: [f32; 3],

    pub effect_ttl_ms: u64,
    pub effect_particle_count: usize,
    pub effect_particle_spread: f32,
    pub effect_particle_spin: f32,

    pub aim_window_deg: f32,
    pub collision_mode: CollisionMode,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            shot_cooldown_ms: SHOT_COOLDOWN_MS,
            projectile_speed: PROJECTILE_SPEED,
            projectile_spawn_depth: PROJECTILE_SPAWN_DEPTH,
            projectile_depth_limit: PROJECTILE_DEPTH_LIMIT,
            projectile_half_extents: PROJECTILE_HALF_EXTENTS,
            hostile_spawn_interval_ms: HOSTILE_SPAWN_INTERVAL_MS,
            hostile_spawn_band_x: HOSTILE_SPAWN_BAND_X,
            hostile_spawn_band_y: HOSTILE_SPAWN_BAND_Y,
            hostile_start_depth: HOSTILE_START_DEPTH,
            hostile_start_rotation: HOSTILE_START_ROTATION,
            hostile_half_extents: HOSTILE_HALF_EXTENTS,
            hostile_approach_speed: HOSTILE_APPROACH_SPEED,
            hostile_drift_amplitude: HOSTILE_DRIFT_AMPLITUDE,
            hostile_spin_rates: HOSTILE_SPIN_RATES,
            effect_ttl_ms: EFFECT_TTL_MS,
            effect_particle_count: EFFECT_PARTICLE_COUNT,
            effect_particle_spread: EFFECT_PARTICLE_SPREAD,
            effect_particle_spin: EFFECT_PARTICLE_SPIN,
            aim_window_deg: AIM_WINDOW_DEG,
            collision_mode: CollisionMode::default(),
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject values that would stall or break the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        }

        if self.shot_cooldown_ms == 0 {
            return invalid("shot_cooldown_ms", "must be positive");
        }
        if self.hostile_spawn_interval_ms == 0 {
            return invalid("hostile_spawn_interval_ms", "must be positive");
        }
        if self.effect_ttl_ms == 0 {
            return invalid("effect_ttl_ms", "must be positive");
        }
        if !(self.projectile_speed > 0.0) {
            return invalid("projectile_speed", "must be positive");
        }
        if !(self.aim_window_deg > 0.0) {
            return invalid("aim_window_deg", "must be positive");
        }
        if self.hostile_spawn_band_x < 0.0 || self.hostile_spawn_band_y < 0.0 {
            return invalid("hostile_spawn_band", "must not be negative");
        }
        if self.effect_particle_spread < 0.0 {
            return invalid("effect_particle_spread", "must not be negative");
        }
        if self.projectile_half_extents.iter().any(|e| !(*e >= 0.0)) {
            return invalid("projectile_half_extents", "must not be negative");
        }
        if self.hostile_half_extents.iter().any(|e| !(*e >= 0.0)) {
            return invalid("hostile_half_extents", "must not be negative");
        }
        Ok(())
    }

    pub fn shot_cooldown(&self) -> Duration {
        Duration::from_millis(self.shot_cooldown_ms)
    }

    pub fn hostile_spawn_interval(&self) -> Duration {
        Duration::from_millis(self.hostile_spawn_interval_ms)
    }

    pub fn effect_ttl(&self) -> Duration {
        Duration::from_millis(self.effect_ttl_ms)
    }

    pub fn projectile_half_extents(&self) -> Vec3 {
        Vec3::from_array(self.projectile_half_extents)
    }

    pub fn hostile_half_extents(&self) -> Vec3 {
        Vec3::from_array(self.hostile_half_extents)
    }
}
