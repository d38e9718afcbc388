//! Commands sent from the host to the scene.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::controls::ControlState;

/// All host actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneCommand {
    /// Replace the latest control sample. `None` means no controller is connected.
    SetControls { controls: Option<ControlState> },
    /// Cancel the spawn timer and stop processing frames.
    Stop,
    /// Clear all entities and re-arm the spawner from the current clock.
    Restart,
}
