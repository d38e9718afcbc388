//! Control samples delivered by the remote controller.
//!
//! The field aliases accept the controller's wire payload
//! (`a`, `gyroscope`, `acelerometer`) as well as the descriptive names.
//! Devices without a motion sensor report `null` axes; those read as 0.

use serde::{Deserialize, Deserializer, Serialize};

/// Latest state of the remote controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlState {
    /// Primary button held.
    #[serde(alias = "a")]
    pub fire: bool,
    /// Device orientation (alpha, beta, gamma) in degrees. Unbounded.
    #[serde(alias = "gyroscope", deserialize_with = "axes_or_zero")]
    pub orientation: [f32; 3],
    /// Device acceleration (x, y, z). Carried for consumers; the aim ignores it.
    #[serde(alias = "acelerometer", deserialize_with = "axes_or_zero")]
    pub acceleration: [f32; 3],
}

impl ControlState {
    /// A sample with the trigger held and the device level.
    pub fn firing() -> Self {
        Self {
            fire: true,
            ..Self::default()
        }
    }
}

/// Three sensor axes where `null` (whole array or single axis) reads as 0.
fn axes_or_zero<'de, D>(deserializer: D) -> Result<[f32; 3], D::Error>
where
    D: Deserializer<'de>,
{
    let axes = Option::<[Option<f32>; 3]>::deserialize(deserializer)?;
    Ok(axes.map_or([0.0; 3], |axes| axes.map(|v| v.unwrap_or(0.0))))
}
