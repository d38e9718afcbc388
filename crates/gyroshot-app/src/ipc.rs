//! Controller bridge: turns host requests and controller payloads into game
//! loop commands.
//!
//! A controller line is either a tagged scene command (`{"type": "Stop"}`),
//! a control sample (`{"a": true, "gyroscope": [..]}`), or `null` for a
//! disconnected controller.

use log::info;

use gyroshot_core::commands::SceneCommand;
use gyroshot_core::controls::ControlState;
use gyroshot_core::state::SceneSnapshot;
use gyroshot_sim::SimConfig;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(config: SimConfig, state: &AppState) -> Result<(), String> {
    state.attach(|snapshots| game_loop::spawn_game_loop(config, snapshots))?;
    info!("simulation started");
    Ok(())
}

/// Send a scene command to the simulation.
pub fn send_command(command: SceneCommand, state: &AppState) -> Result<(), String> {
    state.send(command)
}

/// Get the latest snapshot (for polling).
pub fn get_snapshot(state: &AppState) -> Result<Option<SceneSnapshot>, String> {
    state.latest()
}

/// Ask the game loop to exit. A loop that was never started is not an error.
pub fn stop_simulation(state: &AppState) -> Result<(), String> {
    if let Some(tx) = state.detach()? {
        // A loop that already exited has dropped its receiver.
        let _ = tx.send(GameLoopCommand::Shutdown);
        info!("simulation stopped");
    }
    Ok(())
}

/// Parse one controller line into a scene command.
pub fn parse_controller_line(line: &str) -> Result<SceneCommand, serde_json::Error> {
    // Control samples accept unknown fields, so tagged commands are tried first.
    if let Ok(command) = serde_json::from_str::<SceneCommand>(line) {
        return Ok(command);
    }
    let controls = serde_json::from_str::<Option<ControlState>>(line)?;
    Ok(SceneCommand::SetControls { controls })
}
