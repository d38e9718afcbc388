//! Entity store: the single authority over every live projectile, hostile
//! and effect.
//!
//! Entities live in one hecs `World`. Projectiles and effects are addressed by
//! typed wrappers around their hecs `Entity`; hostiles carry a monotonically
//! allocated `HostileId` that the store maps back to the entity. Systems may
//! mutate component data through `world_mut`, but every spawn and despawn goes
//! through the `add_*` / `remove_*` methods so the hostile index stays in sync.

use std::collections::HashMap;
use std::time::Duration;

use glam::Vec3;
use hecs::{Entity, World};

use gyroshot_core::components::{Effect, Hostile, HostileId, Particle, Projectile};
use gyroshot_core::types::{HitBox, Position, Rotation, Velocity};

/// Key of a live projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectileId(Entity);

/// Key of a live effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectId(Entity);

impl ProjectileId {
    /// Opaque numeric form for snapshots.
    pub fn to_bits(self) -> u64 {
        self.0.to_bits().get()
    }
}

impl EffectId {
    /// Opaque numeric form for snapshots.
    pub fn to_bits(self) -> u64 {
        self.0.to_bits().get()
    }
}

/// A fully-formed projectile ready for insertion.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileRecord {
    pub position: Vec3,
    pub velocity: Vec3,
    pub half_extents: Vec3,
    pub fired_at: Duration,
}

/// A fully-formed hostile ready for insertion. The store assigns its id.
#[derive(Debug, Clone, Copy)]
pub struct HostileRecord {
    pub position: Vec3,
    pub rotation: Vec3,
    pub half_extents: Vec3,
}

/// A fully-formed effect ready for insertion.
#[derive(Debug, Clone)]
pub struct EffectRecord {
    pub origin: Vec3,
    pub created_at: Duration,
    pub particles: Vec<Particle>,
}

/// Owns all entity collections.
pub struct EntityStore {
    world: World,
    hostiles: HashMap<HostileId, Entity>,
    next_hostile_id: u64,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            hostiles: HashMap::new(),
            next_hostile_id: 1,
        }
    }

    // --- Insertion ---

    pub fn add_projectile(&mut self, record: ProjectileRecord) -> ProjectileId {
        let entity = self.world.spawn((
            Projectile {
                fired_at: record.fired_at,
            },
            Position(record.position),
            Velocity(record.velocity),
            HitBox::new(record.half_extents),
        ));
        ProjectileId(entity)
    }

    pub fn add_hostile(&mut self, record: HostileRecord) -> HostileId {
        let id = HostileId(self.next_hostile_id);
        self.next_hostile_id += 1;

        let entity = self.world.spawn((
            Hostile { id },
            Position(record.position),
            Rotation(record.rotation),
            HitBox::new(record.half_extents),
        ));
        self.hostiles.insert(id, entity);
        id
    }

    pub fn add_effect(&mut self, record: EffectRecord) -> EffectId {
        let entity = self.world.spawn((
            Effect {
                created_at: record.created_at,
                particles: record.particles,
            },
            Position(record.origin),
        ));
        EffectId(entity)
    }

    // --- Removal (idempotent) ---

    /// Remove a projectile. Returns false if it was already gone.
    pub fn remove_projectile(&mut self, id: ProjectileId) -> bool {
        let is_projectile = self.world.get::<&Projectile>(id.0).is_ok();
        is_projectile && self.world.despawn(id.0).is_ok()
    }

    /// Remove a hostile. Returns false if it was already gone.
    pub fn remove_hostile(&mut self, id: HostileId) -> bool {
        match self.hostiles.remove(&id) {
            Some(entity) => self.world.despawn(entity).is_ok(),
            None => false,
        }
    }

    /// Remove an effect. Returns false if it was already gone.
    pub fn remove_effect(&mut self, id: EffectId) -> bool {
        let is_effect = self.world.get::<&Effect>(id.0).is_ok();
        is_effect && self.world.despawn(id.0).is_ok()
    }

    /// Drop every entity. Hostile ids keep counting so none is ever reused.
    pub fn clear(&mut self) {
        self.world.clear();
        self.hostiles.clear();
    }

    // --- Read views ---

    pub fn for_each_projectile(&self, mut f: impl FnMut(ProjectileId, &Position, &Velocity, &HitBox)) {
        for (entity, (_, pos, vel, hit_box)) in self
            .world
            .query::<(&Projectile, &Position, &Velocity, &HitBox)>()
            .iter()
        {
            f(ProjectileId(entity), pos, vel, hit_box);
        }
    }

    pub fn for_each_hostile(&self, mut f: impl FnMut(HostileId, &Position, &Rotation, &HitBox)) {
        for (_, (hostile, pos, rot, hit_box)) in self
            .world
            .query::<(&Hostile, &Position, &Rotation, &HitBox)>()
            .iter()
        {
            f(hostile.id, pos, rot, hit_box);
        }
    }

    pub fn for_each_effect(&self, mut f: impl FnMut(EffectId, &Position, &Effect)) {
        for (entity, (pos, effect)) in self.world.query::<(&Position, &Effect)>().iter() {
            f(EffectId(entity), pos, effect);
        }
    }

    pub fn projectile_count(&self) -> usize {
        self.world.query::<&Projectile>().iter().count()
    }

    pub fn hostile_count(&self) -> usize {
        self.hostiles.len()
    }

    pub fn effect_count(&self) -> usize {
        self.world.query::<&Effect>().iter().count()
    }

    pub fn contains_hostile(&self, id: HostileId) -> bool {
        self.hostiles.contains_key(&id)
    }

    /// Current position and rotation of a hostile.
    pub fn hostile_pose(&self, id: HostileId) -> Option<(Vec3, Vec3)> {
        let entity = *self.hostiles.get(&id)?;
        let pos = self.world.get::<&Position>(entity).ok()?.0;
        let rot = self.world.get::<&Rotation>(entity).ok()?.0;
        Some((pos, rot))
    }

    /// Current position and velocity of a projectile.
    pub fn projectile_state(&self, id: ProjectileId) -> Option<(Vec3, Vec3)> {
        self.world.get::<&Projectile>(id.0).ok()?;
        let pos = self.world.get::<&Position>(id.0).ok()?.0;
        let vel = self.world.get::<&Velocity>(id.0).ok()?.0;
        Some((pos, vel))
    }

    /// Origin, creation time and particle count of an effect.
    pub fn effect_state(&self, id: EffectId) -> Option<(Vec3, Duration, usize)> {
        let effect = self.world.get::<&Effect>(id.0).ok()?;
        let origin = self.world.get::<&Position>(id.0).ok()?.0;
        Some((origin, effect.created_at, effect.particles.len()))
    }

    /// Mutable component access for systems. Never spawn or despawn through it.
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
