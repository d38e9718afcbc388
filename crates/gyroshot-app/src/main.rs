use std::io::{self, BufRead};
use std::path::Path;
use std::process::ExitCode;

use log::{error, info, warn};

use gyroshot_app::ipc;
use gyroshot_app::state::AppState;
use gyroshot_sim::SimConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => match SimConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                error!("could not load config from {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => SimConfig::default(),
    };

    let state = AppState::new();
    if let Err(e) = ipc::start_simulation(config, &state) {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = forward_controller_lines(&state) {
        error!("stdin closed with error: {e}");
    }

    match ipc::get_snapshot(&state) {
        Ok(Some(snapshot)) => info!(
            "final: {} frames, {} shots fired, {} hostiles destroyed",
            snapshot.time.frame, snapshot.score.projectiles_fired, snapshot.score.hostiles_destroyed
        ),
        Ok(None) => {}
        Err(e) => warn!("no final snapshot: {e}"),
    }

    if let Err(e) = ipc::stop_simulation(&state) {
        error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Forward controller lines from stdin until EOF.
fn forward_controller_lines(state: &AppState) -> io::Result<()> {
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match ipc::parse_controller_line(line) {
            Ok(command) => {
                if let Err(e) = ipc::send_command(command, state) {
                    warn!("{e}");
                    break;
                }
            }
            Err(e) => warn!("ignoring malformed controller line: {e}"),
        }
    }
    Ok(())
}
