//! Runner state shared between the controller bridge and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use gyroshot_core::commands::SceneCommand;
use gyroshot_core::state::SceneSnapshot;

/// Messages for the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    Scene(SceneCommand),
    Shutdown,
}

pub type SnapshotSlot = Arc<Mutex<Option<SceneSnapshot>>>;

/// The runner's handle on a game loop session.
///
/// A session is live while a sender is attached. The snapshot slot outlives
/// sessions so the last frame stays readable after shutdown.
#[derive(Default)]
pub struct AppState {
    session: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    latest_snapshot: SnapshotSlot,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.session.lock().map(|s| s.is_some()).unwrap_or(false)
    }

    /// Start a session with the sender returned by `spawn`, which receives
    /// the snapshot slot. Fails without calling `spawn` if one is live.
    pub fn attach(
        &self,
        spawn: impl FnOnce(SnapshotSlot) -> mpsc::Sender<GameLoopCommand>,
    ) -> Result<(), String> {
        let mut session = self.session.lock().map_err(|e| e.to_string())?;
        if session.is_some() {
            return Err("Simulation already running".into());
        }
        *session = Some(spawn(Arc::clone(&self.latest_snapshot)));
        Ok(())
    }

    /// End the session, returning its sender if one was live.
    pub fn detach(&self) -> Result<Option<mpsc::Sender<GameLoopCommand>>, String> {
        let mut session = self.session.lock().map_err(|e| e.to_string())?;
        Ok(session.take())
    }

    /// Forward a scene command to the live session.
    pub fn send(&self, command: SceneCommand) -> Result<(), String> {
        let session = self.session.lock().map_err(|e| e.to_string())?;
        let tx = session.as_ref().ok_or("Simulation not started")?;
        tx.send(GameLoopCommand::Scene(command))
            .map_err(|e| format!("Failed to send command: {e}"))
    }

    /// Most recent frame published by the game loop.
    pub fn latest(&self) -> Result<Option<SceneSnapshot>, String> {
        let slot = self.latest_snapshot.lock().map_err(|e| e.to_string())?;
        Ok(slot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = AppState::new();
        assert!(!state.is_running());
        assert!(state.latest().unwrap().is_none());
        assert!(state.detach().unwrap().is_none());
        assert!(state.send(SceneCommand::Stop).is_err());
    }

    #[test]
    fn test_attach_once_then_forward() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        state
            .attach(|slot| {
                *slot.lock().unwrap() = Some(SceneSnapshot::default());
                tx
            })
            .unwrap();
        assert!(state.is_running());
        assert!(state.latest().unwrap().is_some());

        let mut spawned_again = false;
        assert!(state
            .attach(|_| {
                spawned_again = true;
                mpsc::channel().0
            })
            .is_err());
        assert!(!spawned_again);

        state.send(SceneCommand::Restart).unwrap();
        assert!(matches!(
            rx.try_recv().unwrap(),
            GameLoopCommand::Scene(SceneCommand::Restart)
        ));

        assert!(state.detach().unwrap().is_some());
        assert!(!state.is_running());
        // The last snapshot survives the session.
        assert!(state.latest().unwrap().is_some());
    }
}
