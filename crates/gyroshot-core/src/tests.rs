#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use crate::commands::SceneCommand;
    use crate::components::HostileId;
    use crate::controls::ControlState;
    use crate::enums::*;
    use crate::events::SceneEvent;
    use crate::state::{HostileView, SceneSnapshot};
    use crate::types::SimTime;

    #[test]
    fn test_scene_phase_serde() {
        for v in [ScenePhase::Running, ScenePhase::Stopped] {
            let json = serde_json::to_string(&v).unwrap();
            let back: ScenePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_collision_mode_default_is_oriented() {
        assert_eq!(CollisionMode::default(), CollisionMode::Oriented);
        let back: CollisionMode = serde_json::from_str("\"Aligned\"").unwrap();
        assert_eq!(back, CollisionMode::Aligned);
    }

    /// Verify SceneCommand round-trips through serde (tagged union).
    #[test]
    fn test_scene_command_serde() {
        let commands = vec![
            SceneCommand::SetControls {
                controls: Some(ControlState::firing()),
            },
            SceneCommand::SetControls { controls: None },
            SceneCommand::Stop,
            SceneCommand::Restart,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: SceneCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_controls_accept_controller_payload() {
        let json = r#"{"a":true,"b":false,"acelerometer":[0.1,0.2,0.3],"gyroscope":[10,-20,5]}"#;
        let controls: ControlState = serde_json::from_str(json).unwrap();
        assert!(controls.fire);
        assert_eq!(controls.orientation, [10.0, -20.0, 5.0]);
        assert_eq!(controls.acceleration, [0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_controls_null_axes_read_as_zero() {
        let json = r#"{"a":true,"gyroscope":[null,null,null],"acelerometer":null}"#;
        let controls: ControlState = serde_json::from_str(json).unwrap();
        assert!(controls.fire, "fire flag must survive missing sensor data");
        assert_eq!(controls.orientation, [0.0; 3]);
        assert_eq!(controls.acceleration, [0.0; 3]);

        let controls: ControlState = serde_json::from_str(r#"{"gyroscope":[12.5,null,-3]}"#).unwrap();
        assert_eq!(controls.orientation, [12.5, 0.0, -3.0]);
    }

    #[test]
    fn test_controls_missing_fields_default() {
        let controls: ControlState = serde_json::from_str(r#"{"fire":true}"#).unwrap();
        assert!(controls.fire);
        assert_eq!(controls.orientation, [0.0; 3]);
    }

    #[test]
    fn test_scene_event_serde() {
        let events = vec![
            SceneEvent::ProjectileFired { aim: Vec2::new(0.5, -1.0) },
            SceneEvent::HostileSpawned {
                hostile: HostileId(3),
                position: Vec3::new(1.0, 2.0, -10.0),
            },
            SceneEvent::HostileDestroyed {
                hostile: HostileId(3),
                position: Vec3::new(1.0, 2.0, -4.0),
            },
            SceneEvent::EffectExpired { position: Vec3::ZERO },
        ];
        for e in &events {
            let json = serde_json::to_string(e).unwrap();
            let back: SceneEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*e, back);
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = SceneSnapshot {
            hostiles: vec![HostileView {
                id: HostileId(7),
                position: Vec3::new(0.0, 1.0, -9.0),
                rotation: Vec3::new(0.0, std::f32::consts::PI, 0.0),
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SceneSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.hostiles, snapshot.hostiles);
        assert_eq!(back.phase, ScenePhase::Running);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(0.5);
        time.advance(0.25);
        assert_eq!(time.frame, 2);
        assert!((time.elapsed_secs - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_hostile_id_display() {
        assert_eq!(HostileId(12).to_string(), "H12");
    }
}
