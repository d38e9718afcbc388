//! Snapshot system: reads the store and builds a complete SceneSnapshot.
//!
//! This system is read-only; it never modifies the store.

use std::time::Duration;

use glam::Vec2;

use gyroshot_core::enums::ScenePhase;
use gyroshot_core::events::SceneEvent;
use gyroshot_core::state::*;
use gyroshot_core::types::SimTime;

use crate::store::EntityStore;

/// Everything besides the store that the snapshot reports.
pub struct SnapshotContext<'a> {
    pub time: SimTime,
    pub phase: ScenePhase,
    pub aim: Vec2,
    pub now: Duration,
    pub effect_ttl: Duration,
    pub score: &'a ScoreView,
}

/// Build a SceneSnapshot from the current store contents.
pub fn build_snapshot(
    store: &EntityStore,
    ctx: SnapshotContext<'_>,
    events: Vec<SceneEvent>,
) -> SceneSnapshot {
    SceneSnapshot {
        time: ctx.time,
        phase: ctx.phase,
        aim: ctx.aim,
        projectiles: build_projectiles(store),
        hostiles: build_hostiles(store),
        effects: build_effects(store, ctx.now, ctx.effect_ttl),
        events,
        score: ctx.score.clone(),
    }
}

fn build_projectiles(store: &EntityStore) -> Vec<ProjectileView> {
    let mut views = Vec::with_capacity(store.projectile_count());
    store.for_each_projectile(|id, pos, vel, _| {
        views.push(ProjectileView {
            id: id.to_bits(),
            position: pos.0,
            velocity: vel.0,
        });
    });
    // Sort by id for stable output.
    views.sort_by_key(|v| v.id);
    views
}

fn build_hostiles(store: &EntityStore) -> Vec<HostileView> {
    let mut views = Vec::with_capacity(store.hostile_count());
    store.for_each_hostile(|id, pos, rot, _| {
        views.push(HostileView {
            id,
            position: pos.0,
            rotation: rot.0,
        });
    });
    views.sort_by_key(|v| v.id);
    views
}

fn build_effects(store: &EntityStore, now: Duration, ttl: Duration) -> Vec<EffectView> {
    let mut views = Vec::new();
    store.for_each_effect(|id, pos, effect| {
        let age = now.saturating_sub(effect.created_at);
        views.push(EffectView {
            id: id.to_bits(),
            origin: pos.0,
            progress: (age.as_secs_f32() / ttl.as_secs_f32()).clamp(0.0, 1.0),
            particles: effect.particles.clone(),
        });
    });
    views.sort_by_key(|v| v.id);
    views
}
