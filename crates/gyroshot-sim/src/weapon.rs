//! Weapon controller: cooldown-gated projectile spawning.

use std::time::Duration;

use glam::{Vec2, Vec3};
use log::debug;

use gyroshot_core::geometry::{normalize_or_forward, FORWARD};

use crate::config::SimConfig;
use crate::store::{EntityStore, ProjectileId, ProjectileRecord};

/// Fires projectiles from the aim position, at most once per cooldown.
#[derive(Debug, Clone)]
pub struct Weapon {
    cooldown: Duration,
    speed: f32,
    spawn_depth: f32,
    half_extents: Vec3,
    /// Firing direction before normalization. Always forward today; aim only
    /// moves the muzzle.
    direction: Vec3,
    last_fired: Option<Duration>,
}

impl Weapon {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            cooldown: config.shot_cooldown(),
            speed: config.projectile_speed,
            spawn_depth: config.projectile_spawn_depth,
            half_extents: config.projectile_half_extents(),
            direction: FORWARD,
            last_fired: None,
        }
    }

    /// Fire if `fire` is held and the cooldown has elapsed since the last shot.
    pub fn try_fire(
        &mut self,
        store: &mut EntityStore,
        fire: bool,
        aim: Vec2,
        now: Duration,
    ) -> Option<ProjectileId> {
        if !fire || !self.ready(now) {
            return None;
        }

        let velocity = normalize_or_forward(self.direction) * self.speed;
        let id = store.add_projectile(ProjectileRecord {
            position: Vec3::new(aim.x, aim.y, self.spawn_depth),
            velocity,
            half_extents: self.half_extents,
            fired_at: now,
        });
        self.last_fired = Some(now);
        debug!("projectile fired from ({:.2}, {:.2})", aim.x, aim.y);
        Some(id)
    }

    /// True if a shot at `now` would pass the cooldown gate.
    pub fn ready(&self, now: Duration) -> bool {
        match self.last_fired {
            None => true,
            // A clock that went backwards counts as zero elapsed.
            Some(last) => now.saturating_sub(last) >= self.cooldown,
        }
    }

    /// Forget the last shot so the next trigger pull fires immediately.
    pub fn reset(&mut self) {
        self.last_fired = None;
    }

    pub fn last_fired(&self) -> Option<Duration> {
        self.last_fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_no_fire_without_trigger() {
        let mut store = EntityStore::new();
        let mut weapon = Weapon::new(&SimConfig::default());
        assert!(weapon.try_fire(&mut store, false, Vec2::ZERO, ms(0)).is_none());
        assert_eq!(store.projectile_count(), 0);
        assert!(weapon.last_fired().is_none());
    }

    #[test]
    fn test_first_shot_is_immediate_then_cooldown() {
        let mut store = EntityStore::new();
        let mut weapon = Weapon::new(&SimConfig::default());

        assert!(weapon.try_fire(&mut store, true, Vec2::ZERO, ms(1000)).is_some());
        assert!(weapon.try_fire(&mut store, true, Vec2::ZERO, ms(1100)).is_none());
        assert!(weapon.try_fire(&mut store, true, Vec2::ZERO, ms(1149)).is_none());
        assert!(weapon.try_fire(&mut store, true, Vec2::ZERO, ms(1150)).is_some());
        assert_eq!(store.projectile_count(), 2);
    }

    #[test]
    fn test_projectile_spawns_at_aim_moving_forward() {
        let mut store = EntityStore::new();
        let mut weapon = Weapon::new(&SimConfig::default());
        let id = weapon
            .try_fire(&mut store, true, Vec2::new(1.5, -0.5), ms(0))
            .unwrap();

        let (pos, vel) = store.projectile_state(id).unwrap();
        assert_eq!(pos, Vec3::new(1.5, -0.5, 3.0));
        assert!((vel - Vec3::new(0.0, 0.0, -15.0)).length() < 1e-5);
    }

    #[test]
    fn test_zero_direction_falls_back_to_forward() {
        let mut store = EntityStore::new();
        let mut weapon = Weapon::new(&SimConfig::default());
        weapon.direction = Vec3::ZERO;
        let id = weapon.try_fire(&mut store, true, Vec2::ZERO, ms(0)).unwrap();
        let (_, vel) = store.projectile_state(id).unwrap();
        assert!((vel - Vec3::new(0.0, 0.0, -15.0)).length() < 1e-5);
    }

    #[test]
    fn test_unnormalized_direction_keeps_speed() {
        let mut store = EntityStore::new();
        let mut weapon = Weapon::new(&SimConfig::default());
        weapon.direction = Vec3::new(0.0, 3.0, -4.0);
        let id = weapon.try_fire(&mut store, true, Vec2::ZERO, ms(0)).unwrap();
        let (_, vel) = store.projectile_state(id).unwrap();
        assert!((vel.length() - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_reset_allows_immediate_fire() {
        let mut store = EntityStore::new();
        let mut weapon = Weapon::new(&SimConfig::default());
        weapon.try_fire(&mut store, true, Vec2::ZERO, ms(500));
        weapon.reset();
        assert!(weapon.try_fire(&mut store, true, Vec2::ZERO, ms(510)).is_some());
    }
}
