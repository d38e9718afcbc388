//! Entity factories: build fully-formed records for the store.
//!
//! All randomness flows through the caller's seeded `ChaCha8Rng`.

use std::time::Duration;

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gyroshot_core::components::Particle;

use crate::config::SimConfig;
use crate::store::{EffectRecord, HostileRecord};

/// A hostile at a random x/y inside the spawn bands, at the start depth.
pub fn hostile_record(rng: &mut ChaCha8Rng, config: &SimConfig) -> HostileRecord {
    let x = centered(rng, config.hostile_spawn_band_x);
    let y = centered(rng, config.hostile_spawn_band_y);

    HostileRecord {
        position: Vec3::new(x, y, config.hostile_start_depth),
        rotation: Vec3::from_array(config.hostile_start_rotation),
        half_extents: config.hostile_half_extents(),
    }
}

/// An explosion at `origin` with randomized particle velocities and orientations.
pub fn explosion_record(
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    origin: Vec3,
    now: Duration,
) -> EffectRecord {
    let spread = config.effect_particle_spread;
    let spin = Vec3::splat(config.effect_particle_spin);

    let particles = (0..config.effect_particle_count)
        .map(|_| Particle {
            position: origin,
            velocity: Vec3::new(
                centered(rng, spread),
                centered(rng, spread),
                centered(rng, spread),
            ),
            rotation: Vec3::new(
                rng.gen_range(0.0..std::f32::consts::PI),
                rng.gen_range(0.0..std::f32::consts::PI),
                rng.gen_range(0.0..std::f32::consts::PI),
            ),
            spin,
        })
        .collect();

    EffectRecord {
        origin,
        created_at: now,
        particles,
    }
}

/// Uniform sample in [-width/2, width/2).
fn centered(rng: &mut ChaCha8Rng, width: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * width
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_hostile_within_bands() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let config = SimConfig::default();
        for _ in 0..500 {
            let record = hostile_record(&mut rng, &config);
            assert!(record.position.x >= -5.0 && record.position.x < 5.0);
            assert!(record.position.y >= -2.5 && record.position.y < 2.5);
            assert_eq!(record.position.z, -10.0);
            assert_eq!(record.rotation, Vec3::new(0.0, std::f32::consts::PI, 0.0));
        }
    }

    #[test]
    fn test_explosion_particles() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let config = SimConfig::default();
        let origin = Vec3::new(1.0, 2.0, -3.0);
        let record = explosion_record(&mut rng, &config, origin, Duration::from_millis(40));

        assert_eq!(record.particles.len(), 15);
        assert_eq!(record.created_at, Duration::from_millis(40));
        for p in &record.particles {
            assert_eq!(p.position, origin);
            assert!(p.velocity.abs().max_element() <= 2.0);
            assert!(p.rotation.min_element() >= 0.0);
            assert!(p.rotation.max_element() < std::f32::consts::PI);
        }
    }
}
