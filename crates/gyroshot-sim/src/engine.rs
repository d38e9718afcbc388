//! Scene engine: the per-frame driver of the simulation.
//!
//! `Scene` owns the entity store, weapon, spawner and RNG, processes host
//! commands, runs the systems in order and produces `SceneSnapshot`s. It is
//! headless and never reads a clock itself: hosts pass the frame delta and the
//! wall-clock time since scene start, which keeps every run reproducible.

use std::collections::VecDeque;
use std::time::Duration;

use glam::Vec2;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gyroshot_core::commands::SceneCommand;
use gyroshot_core::components::HostileId;
use gyroshot_core::controls::ControlState;
use gyroshot_core::enums::ScenePhase;
use gyroshot_core::events::SceneEvent;
use gyroshot_core::state::{SceneSnapshot, ScoreView};
use gyroshot_core::types::SimTime;

use crate::config::SimConfig;
use crate::input;
use crate::store::EntityStore;
use crate::systems;
use crate::systems::collision::Hit;
use crate::systems::snapshot::SnapshotContext;
use crate::systems::spawner::HostileSpawner;
use crate::weapon::Weapon;

/// The simulation engine. Owns the entity store and all scene state.
pub struct Scene {
    config: SimConfig,
    store: EntityStore,
    weapon: Weapon,
    spawner: HostileSpawner,
    rng: ChaCha8Rng,
    time: SimTime,
    phase: ScenePhase,
    controls: Option<ControlState>,
    aim: Vec2,
    /// Latest wall-clock value seen. Never moves backwards.
    now: Duration,
    command_queue: VecDeque<SceneCommand>,
    hit_buffer: Vec<Hit>,
    events: Vec<SceneEvent>,
    score: ScoreView,
}

impl Scene {
    /// Create a scene whose clock starts at zero.
    pub fn new(config: SimConfig) -> Self {
        info!("scene started (seed {})", config.seed);
        Self {
            weapon: Weapon::new(&config),
            spawner: HostileSpawner::new(config.hostile_spawn_interval(), Duration::ZERO),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            store: EntityStore::new(),
            time: SimTime::default(),
            phase: ScenePhase::default(),
            controls: None,
            aim: Vec2::ZERO,
            now: Duration::ZERO,
            command_queue: VecDeque::new(),
            hit_buffer: Vec::new(),
            events: Vec::new(),
            score: ScoreView::default(),
            config,
        }
    }

    /// Queue a command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: SceneCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SceneCommand>) {
        self.command_queue.extend(commands);
    }

    /// Replace the latest control sample immediately.
    pub fn set_controls(&mut self, controls: Option<ControlState>) {
        self.controls = controls;
    }

    /// Run one rendered frame: commands, input, weapon, spawner, step.
    ///
    /// `delta` is seconds since the previous frame; `now` is the wall clock
    /// since scene start.
    pub fn frame(&mut self, delta: f32, now: Duration) -> SceneSnapshot {
        let now = self.observe_clock(now);
        self.process_commands(now);

        if self.phase == ScenePhase::Running {
            self.apply_controls(now);
            self.spawn_tick(now);
            self.step(delta, now);
        }

        self.snapshot()
    }

    /// Wall-clock spawn entry point. Safe to call from a separate timer as
    /// well as from `frame`; a given interval never spawns twice.
    pub fn spawn_tick(&mut self, now: Duration) -> Vec<HostileId> {
        if self.phase != ScenePhase::Running {
            return Vec::new();
        }
        let now = self.observe_clock(now);
        self.spawner.poll(
            &mut self.store,
            &mut self.rng,
            &self.config,
            now,
            &mut self.events,
        )
    }

    /// Advance the simulation by `delta` seconds.
    ///
    /// A zero delta moves nothing but still resolves collisions and expiry.
    /// Negative or non-finite deltas are treated as zero. A stopped scene
    /// stays frozen.
    pub fn step(&mut self, delta: f32, now: Duration) {
        if self.phase != ScenePhase::Running {
            return;
        }
        let delta = if delta.is_finite() && delta > 0.0 { delta } else { 0.0 };
        let now = self.observe_clock(now);
        self.time.advance(delta);

        let world = self.store.world_mut();
        systems::movement::run(world, delta);
        systems::movement::run_hostiles(world, &self.config, self.time.elapsed_secs, delta);
        systems::movement::run_particles(world, delta);

        let destroyed = systems::collision::run(
            &mut self.store,
            &mut self.rng,
            &self.config,
            now,
            &mut self.hit_buffer,
            &mut self.events,
        );
        self.score.hostiles_destroyed += destroyed;

        systems::cleanup::run(
            &mut self.store,
            self.config.projectile_depth_limit,
            self.config.effect_ttl(),
            now,
            &mut self.events,
        );
    }

    /// Build a snapshot of the current state, draining pending events.
    pub fn snapshot(&mut self) -> SceneSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.store,
            SnapshotContext {
                time: self.time,
                phase: self.phase,
                aim: self.aim,
                now: self.now,
                effect_ttl: self.config.effect_ttl(),
                score: &self.score,
            },
            events,
        )
    }

    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn aim(&self) -> Vec2 {
        self.aim
    }

    pub fn score(&self) -> &ScoreView {
        &self.score
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Read-only access to the entity store.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Mutable store access for staging test scenarios.
    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    fn observe_clock(&mut self, now: Duration) -> Duration {
        self.now = self.now.max(now);
        self.now
    }

    /// Input mapper then weapon. Skipped entirely without a control sample.
    fn apply_controls(&mut self, now: Duration) {
        let Some(controls) = self.controls else {
            return;
        };
        self.aim = input::aim_offset(controls.orientation, self.config.aim_window_deg);

        if self
            .weapon
            .try_fire(&mut self.store, controls.fire, self.aim, now)
            .is_some()
        {
            self.score.projectiles_fired += 1;
            self.events.push(SceneEvent::ProjectileFired { aim: self.aim });
        }
    }

    fn process_commands(&mut self, now: Duration) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, now);
        }
    }

    fn handle_command(&mut self, command: SceneCommand, now: Duration) {
        match command {
            SceneCommand::SetControls { controls } => {
                self.controls = controls;
            }
            SceneCommand::Stop => {
                if self.phase == ScenePhase::Running {
                    self.spawner.cancel();
                    self.phase = ScenePhase::Stopped;
                    info!(
                        "scene stopped after {} frames, {} hostiles destroyed",
                        self.time.frame, self.score.hostiles_destroyed
                    );
                }
            }
            SceneCommand::Restart => {
                self.store.clear();
                self.weapon.reset();
                self.spawner.restart(now);
                self.time = SimTime::default();
                self.score = ScoreView::default();
                self.aim = Vec2::ZERO;
                self.events.clear();
                self.phase = ScenePhase::Running;
                info!("scene restarted");
            }
        }
    }
}
