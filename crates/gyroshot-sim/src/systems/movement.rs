//! Kinematic integration system.
//!
//! Projectiles: position += velocity * delta.
//! Hostiles: sinusoidal lateral weave, constant approach, constant spin.
//! Effect particles: position += velocity * delta, rotation += spin * delta.

use glam::Vec3;
use hecs::World;

use gyroshot_core::components::{Effect, Hostile};
use gyroshot_core::types::{Position, Rotation, Velocity};

use crate::config::SimConfig;

/// Integrate every entity carrying a Velocity.
pub fn run(world: &mut World, delta: f32) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.0 += vel.0 * delta;
    }
}

/// Advance hostile position and rotation.
///
/// The weave phase is `elapsed + id`, so hostiles spawned together still weave
/// out of step without storing a per-hostile phase.
pub fn run_hostiles(world: &mut World, config: &SimConfig, elapsed_secs: f32, delta: f32) {
    let spin = Vec3::from_array(config.hostile_spin_rates);

    for (_entity, (hostile, pos, rot)) in
        world.query_mut::<(&Hostile, &mut Position, &mut Rotation)>()
    {
        let phase = elapsed_secs + hostile.id.0 as f32;
        pos.0.x += phase.sin() * delta * config.hostile_drift_amplitude;
        pos.0.z += delta * config.hostile_approach_speed;
        rot.0 += spin * delta;
    }
}

/// Advance the debris of every running explosion.
pub fn run_particles(world: &mut World, delta: f32) {
    for (_entity, effect) in world.query_mut::<&mut Effect>() {
        for particle in &mut effect.particles {
            particle.position += particle.velocity * delta;
            particle.rotation += particle.spin * delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use gyroshot_core::components::{HostileId, Particle, Projectile};

    #[test]
    fn test_velocity_integration() {
        let mut world = World::new();
        let e = world.spawn((
            Projectile {
                fired_at: Duration::ZERO,
            },
            Position::new(0.0, 1.0, 3.0),
            Velocity::new(0.0, 0.0, -15.0),
        ));
        run(&mut world, 0.1);
        let pos = world.get::<&Position>(e).unwrap().0;
        assert!((pos - Vec3::new(0.0, 1.0, 1.5)).length() < 1e-5);
    }

    #[test]
    fn test_zero_delta_moves_nothing() {
        let mut world = World::new();
        let config = SimConfig::default();
        let p = world.spawn((Position::new(1.0, 2.0, 3.0), Velocity::new(4.0, 5.0, 6.0)));
        let h = world.spawn((
            Hostile { id: HostileId(3) },
            Position::new(0.0, 0.0, -10.0),
            Rotation::new(0.0, 1.0, 0.0),
        ));
        run(&mut world, 0.0);
        run_hostiles(&mut world, &config, 12.0, 0.0);
        assert_eq!(world.get::<&Position>(p).unwrap().0, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(world.get::<&Position>(h).unwrap().0, Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(world.get::<&Rotation>(h).unwrap().0, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_hostile_weave_approach_and_spin() {
        let mut world = World::new();
        let config = SimConfig::default();
        let h = world.spawn((
            Hostile { id: HostileId(2) },
            Position::new(0.0, 0.0, -10.0),
            Rotation::new(0.0, 0.0, 0.0),
        ));
        run_hostiles(&mut world, &config, 1.0, 0.5);

        let pos = world.get::<&Position>(h).unwrap().0;
        let expected_x = (1.0f32 + 2.0).sin() * 0.5 * 0.5;
        assert!((pos.x - expected_x).abs() < 1e-6);
        assert!((pos.z - -9.0).abs() < 1e-6);

        let rot = world.get::<&Rotation>(h).unwrap().0;
        assert!((rot - Vec3::new(0.75, 1.0, 0.5)).length() < 1e-6);
    }

    #[test]
    fn test_particles_move_and_spin() {
        let mut world = World::new();
        let e = world.spawn((
            Position::new(0.0, 0.0, 0.0),
            Effect {
                created_at: Duration::ZERO,
                particles: vec![Particle {
                    position: Vec3::ZERO,
                    velocity: Vec3::new(1.0, -2.0, 0.5),
                    rotation: Vec3::ZERO,
                    spin: Vec3::splat(2.0),
                }],
            },
        ));
        run_particles(&mut world, 0.25);
        let effect = world.get::<&Effect>(e).unwrap();
        assert_eq!(effect.particles.len(), 1);
        assert!((effect.particles[0].position - Vec3::new(0.25, -0.5, 0.125)).length() < 1e-6);
        assert!((effect.particles[0].rotation - Vec3::splat(0.5)).length() < 1e-6);
    }
}
