//! Game loop thread: drives the scene from the wall clock at 60Hz.
//!
//! The scene is created inside this thread and never leaves it. Commands
//! arrive via an `mpsc` channel; each frame's snapshot is stored in shared
//! state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::{debug, info};

use gyroshot_core::constants::FRAME_RATE;
use gyroshot_core::events::SceneEvent;
use gyroshot_core::state::SceneSnapshot;
use gyroshot_sim::{Scene, SimConfig};

use crate::state::GameLoopCommand;

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Longest delta fed to one frame. Keeps a single step's projectile travel
/// below the combined depth of a projectile and a hostile box.
const MAX_FRAME_DELTA: Duration = Duration::from_nanos(4 * 1_000_000_000 / FRAME_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the controller bridge to use.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<SceneSnapshot>>>,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("gyroshot-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<SceneSnapshot>>,
) {
    let mut scene = Scene::new(config);
    let started = Instant::now();
    let mut last_frame = Duration::ZERO;
    let mut next_frame_time = started;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Scene(cmd)) => scene.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!("game loop exiting after {} frames", scene.time().frame);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Run one frame against the wall clock
        let now = started.elapsed();
        let delta = frame_delta(now, last_frame);
        last_frame = now;
        let snapshot = scene.frame(delta, now);
        log_events(&snapshot.events);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind; skip ahead rather than run a burst of frames
            next_frame_time = now;
        }
    }
}

/// Seconds since the previous frame, capped at [`MAX_FRAME_DELTA`].
fn frame_delta(now: Duration, last_frame: Duration) -> f32 {
    now.saturating_sub(last_frame).min(MAX_FRAME_DELTA).as_secs_f32()
}

fn log_events(events: &[SceneEvent]) {
    for event in events {
        match event {
            SceneEvent::HostileSpawned { hostile, position } => {
                debug!("{hostile} spawned at {position}");
            }
            SceneEvent::HostileDestroyed { hostile, position } => {
                info!("{hostile} destroyed at {position}");
            }
            SceneEvent::ProjectileFired { .. } | SceneEvent::EffectExpired { .. } => {}
        }
    }
}
