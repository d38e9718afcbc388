//! Collision system: projectile vs hostile overlap, hostile destruction and
//! explosion spawning.
//!
//! Resolution is "first match wins": each projectile destroys at most the
//! first overlapping hostile found, and a hostile claimed by one projectile is
//! not available to another in the same frame. No closest-first ordering.

use std::time::Duration;

use glam::Vec3;
use log::debug;
use rand_chacha::ChaCha8Rng;

use gyroshot_core::components::HostileId;
use gyroshot_core::enums::CollisionMode;
use gyroshot_core::events::SceneEvent;
use gyroshot_core::geometry::{Aabb, Obb};

use crate::config::SimConfig;
use crate::store::{EntityStore, ProjectileId};
use crate::world_setup;

/// A detected projectile/hostile overlap, pending application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub projectile: ProjectileId,
    pub hostile: HostileId,
    /// Hostile position before removal; the explosion origin.
    pub position: Vec3,
}

/// Detect overlaps, then remove both parties and spawn one explosion per hit.
///
/// Detection finishes before any removal, so no entity disappears while the
/// store is being iterated. Returns the number of hostiles destroyed.
pub fn run(
    store: &mut EntityStore,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    now: Duration,
    hits: &mut Vec<Hit>,
    events: &mut Vec<SceneEvent>,
) -> u32 {
    detect(store, config.collision_mode, hits);

    let mut destroyed = 0;
    for hit in hits.drain(..) {
        if !store.remove_hostile(hit.hostile) {
            continue;
        }
        store.remove_projectile(hit.projectile);
        store.add_effect(world_setup::explosion_record(rng, config, hit.position, now));

        debug!("hostile {} destroyed at {}", hit.hostile, hit.position);
        events.push(SceneEvent::HostileDestroyed {
            hostile: hit.hostile,
            position: hit.position,
        });
        destroyed += 1;
    }
    destroyed
}

/// Fill `hits` with at most one hit per projectile and per hostile.
pub fn detect(store: &EntityStore, mode: CollisionMode, hits: &mut Vec<Hit>) {
    hits.clear();

    let mut hostiles: Vec<(HostileId, Vec3, Obb, Aabb)> = Vec::new();
    store.for_each_hostile(|id, pos, rot, hit_box| {
        let obb = match mode {
            CollisionMode::Aligned => Obb::axis_aligned(pos.0, hit_box.half_extents),
            CollisionMode::Oriented => Obb::from_euler(pos.0, hit_box.half_extents, rot.0),
        };
        hostiles.push((id, pos.0, obb, obb.bounds()));
    });
    if hostiles.is_empty() {
        return;
    }
    // Store iteration order is arbitrary; sorting keeps a seeded run repeatable.
    hostiles.sort_by_key(|(id, ..)| *id);

    let mut projectiles: Vec<(ProjectileId, Obb)> = Vec::new();
    store.for_each_projectile(|id, pos, vel, hit_box| {
        projectiles.push((id, Obb::along(pos.0, hit_box.half_extents, vel.0)));
    });

    let mut claimed = vec![false; hostiles.len()];
    for (projectile, beam) in projectiles {
        let reach = beam.bounds();
        let found = hostiles.iter().enumerate().find(|(i, (_, _, obb, bounds))| {
            !claimed[*i] && bounds.intersects(&reach) && obb.intersects(&beam)
        });

        if let Some((i, (hostile, position, ..))) = found {
            claimed[i] = true;
            hits.push(Hit {
                projectile,
                hostile: *hostile,
                position: *position,
            });
        }
    }
}
