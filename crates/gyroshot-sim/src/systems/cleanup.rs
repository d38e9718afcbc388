//! Cleanup system: retires projectiles past the depth bound and expired
//! explosions.

use std::time::Duration;

use glam::Vec3;
use log::trace;

use gyroshot_core::events::SceneEvent;

use crate::store::{EffectId, EntityStore, ProjectileId};

/// Remove projectiles whose z fell below `depth_limit` and effects at least
/// `effect_ttl` old. Collects ids first so removal never overlaps iteration.
pub fn run(
    store: &mut EntityStore,
    depth_limit: f32,
    effect_ttl: Duration,
    now: Duration,
    events: &mut Vec<SceneEvent>,
) {
    let mut spent: Vec<ProjectileId> = Vec::new();
    store.for_each_projectile(|id, pos, _, _| {
        if pos.0.z < depth_limit {
            spent.push(id);
        }
    });
    for id in spent {
        store.remove_projectile(id);
    }

    let mut expired: Vec<(EffectId, Vec3)> = Vec::new();
    store.for_each_effect(|id, pos, effect| {
        if now.saturating_sub(effect.created_at) >= effect_ttl {
            expired.push((id, pos.0));
        }
    });
    for (id, position) in expired {
        if store.remove_effect(id) {
            trace!("effect at {position} expired");
            events.push(SceneEvent::EffectExpired { position });
        }
    }
}
