//! Input mapper: raw controller orientation to a 2D aim offset.

use glam::Vec2;

/// Wrap an angle in degrees into [-180, 180) using a floored modulo.
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = (angle + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid can round a tiny negative remainder up to exactly 360.
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Map orientation (alpha, beta, gamma in degrees) to an aim offset.
///
/// Yaw is negated so turning the device right moves the reticle right on a
/// forward-facing camera. Each axis is divided by half of `window_deg`, so the
/// result spans about [-2, 2] while the device stays within ±`window_deg`.
/// Gamma does not contribute. Pure: no smoothing, no memory of prior samples.
pub fn aim_offset(orientation: [f32; 3], window_deg: f32) -> Vec2 {
    let half_window = window_deg * 0.5;
    let x = -wrap_degrees(orientation[0]);
    let y = wrap_degrees(orientation[1]);
    Vec2::new(x / half_window, y / half_window)
}
