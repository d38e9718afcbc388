//! Scene constants and tuning defaults.
//!
//! These seed `SimConfig::default()`; a loaded configuration may override them.

use std::f32::consts::PI;

// --- Weapon ---

/// Minimum interval between successive shots (milliseconds).
pub const SHOT_COOLDOWN_MS: u64 = 150;

/// Projectile speed along the firing direction (units/s).
pub const PROJECTILE_SPEED: f32 = 15.0;

/// Depth at which projectiles leave the player's muzzle.
pub const PROJECTILE_SPAWN_DEPTH: f32 = 3.0;

/// Projectiles whose z falls below this depth are retired.
pub const PROJECTILE_DEPTH_LIMIT: f32 = -10.0;

/// Projectile collision half-extents: a thin beam two units long.
pub const PROJECTILE_HALF_EXTENTS: [f32; 3] = [0.02, 0.02, 1.0];

// --- Hostiles ---

/// Wall-clock interval between hostile spawns (milliseconds).
pub const HOSTILE_SPAWN_INTERVAL_MS: u64 = 2000;

/// Full width of the horizontal spawn band, centered on x = 0.
pub const HOSTILE_SPAWN_BAND_X: f32 = 10.0;

/// Full height of the vertical spawn band, centered on y = 0.
pub const HOSTILE_SPAWN_BAND_Y: f32 = 5.0;

/// Depth at which hostiles appear.
pub const HOSTILE_START_DEPTH: f32 = -10.0;

/// Initial Euler orientation of a new hostile (facing the player).
pub const HOSTILE_START_ROTATION: [f32; 3] = [0.0, PI, 0.0];

/// Hostile collision half-extents (cockpit plus wings).
pub const HOSTILE_HALF_EXTENTS: [f32; 3] = [0.4, 0.4, 0.4];

/// Approach speed toward the player along +z (units/s).
pub const HOSTILE_APPROACH_SPEED: f32 = 2.0;

/// Amplitude factor of the sinusoidal lateral weave.
pub const HOSTILE_DRIFT_AMPLITUDE: f32 = 0.5;

/// Spin rates about x, y, z (rad/s).
pub const HOSTILE_SPIN_RATES: [f32; 3] = [1.5, 2.0, 1.0];

// --- Effects ---

/// Lifetime of an explosion effect (milliseconds).
pub const EFFECT_TTL_MS: u64 = 1500;

/// Particles per explosion.
pub const EFFECT_PARTICLE_COUNT: usize = 15;

/// Full range of each particle velocity component, centered on zero.
pub const EFFECT_PARTICLE_SPREAD: f32 = 4.0;

/// Spin rate of every particle axis (rad/s).
pub const EFFECT_PARTICLE_SPIN: f32 = 2.0;

// --- Input ---

/// Angular window (degrees) mapped onto the full aim range.
pub const AIM_WINDOW_DEG: f32 = 24.0;

// --- Runner ---

/// Frame rate of the headless game loop (Hz).
pub const FRAME_RATE: u32 = 60;
