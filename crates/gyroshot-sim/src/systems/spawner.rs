//! Hostile spawning system: one hostile per wall-clock interval.
//!
//! Driven by the scene clock, not by frame deltas, so spawn cadence is the
//! same at any frame rate.

use std::time::Duration;

use log::debug;
use rand_chacha::ChaCha8Rng;

use gyroshot_core::components::HostileId;
use gyroshot_core::events::SceneEvent;

use crate::config::SimConfig;
use crate::store::EntityStore;
use crate::world_setup;

/// Interval schedule for hostile spawns.
#[derive(Debug, Clone)]
pub struct HostileSpawner {
    interval: Duration,
    /// Clock value of the next spawn. `None` once cancelled.
    next_due: Option<Duration>,
}

impl HostileSpawner {
    /// Arm the spawner; the first hostile appears one interval after `start`.
    pub fn new(interval: Duration, start: Duration) -> Self {
        Self {
            interval,
            next_due: Some(start + interval),
        }
    }

    /// Spawn one hostile for every interval boundary `now` has reached.
    ///
    /// Calling this more than once for the same `now` spawns nothing extra.
    pub fn poll(
        &mut self,
        store: &mut EntityStore,
        rng: &mut ChaCha8Rng,
        config: &SimConfig,
        now: Duration,
        events: &mut Vec<SceneEvent>,
    ) -> Vec<HostileId> {
        let mut spawned = Vec::new();
        let Some(mut due) = self.next_due else {
            return spawned;
        };

        while now >= due {
            let record = world_setup::hostile_record(rng, config);
            let position = record.position;
            let id = store.add_hostile(record);
            debug!("hostile {id} spawned at {position}");
            events.push(SceneEvent::HostileSpawned {
                hostile: id,
                position,
            });
            spawned.push(id);
            due += self.interval;
        }

        self.next_due = Some(due);
        spawned
    }

    /// Stop all future spawns.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Re-arm from a new origin.
    pub fn restart(&mut self, now: Duration) {
        self.next_due = Some(now + self.interval);
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.next_due
    }
}
