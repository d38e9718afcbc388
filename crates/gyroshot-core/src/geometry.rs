//! Bounding volumes and overlap tests.
//!
//! `Aabb` is the cheap axis-aligned test, used as a broad phase. `Obb` runs
//! the separating axis theorem over the 15 candidate axes of two oriented
//! boxes (3 face normals each, plus the 9 edge-edge cross products).

use glam::{EulerRot, Mat3, Vec3};
use serde::{Deserialize, Serialize};

/// Forward firing direction in scene space.
pub const FORWARD: Vec3 = Vec3::NEG_Z;

/// Added to rotation-matrix terms so near-parallel edges cannot produce a
/// false separating axis from a degenerate cross product.
const EPSILON: f32 = 1.0e-6;

/// Normalize `direction`, falling back to [`FORWARD`] when it has no length.
pub fn normalize_or_forward(direction: Vec3) -> Vec3 {
    direction.try_normalize().unwrap_or(FORWARD)
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// True if the boxes overlap. Touching faces count as overlap.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.cmple(other.max).all() && other.min.cmple(self.max).all()
    }
}

/// Oriented bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obb {
    pub center: Vec3,
    pub half_extents: Vec3,
    /// Local x, y, z axes in world space (unit length, mutually orthogonal).
    pub axes: [Vec3; 3],
}

impl Obb {
    /// Box aligned with the world axes.
    pub fn axis_aligned(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
            axes: [Vec3::X, Vec3::Y, Vec3::Z],
        }
    }

    /// Box rotated by XYZ Euler angles (radians).
    pub fn from_euler(center: Vec3, half_extents: Vec3, euler: Vec3) -> Self {
        let basis = Mat3::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z);
        Self {
            center,
            half_extents,
            axes: [basis.x_axis, basis.y_axis, basis.z_axis],
        }
    }

    /// Thin box whose local z axis follows `direction`.
    /// Used for projectiles, which are long along their travel axis.
    pub fn along(center: Vec3, half_extents: Vec3, direction: Vec3) -> Self {
        let z = normalize_or_forward(direction);
        let (x, y) = z.any_orthonormal_pair();
        Self {
            center,
            half_extents,
            axes: [x, y, z],
        }
    }

    /// World-space box enclosing this one.
    pub fn bounds(&self) -> Aabb {
        let e = self.half_extents;
        let reach = self.axes[0].abs() * e.x + self.axes[1].abs() * e.y + self.axes[2].abs() * e.z;
        Aabb::from_center(self.center, reach)
    }

    /// Separating axis test. Touching boxes count as overlapping.
    pub fn intersects(&self, other: &Obb) -> bool {
        let a = &self.axes;
        let b = &other.axes;
        let ea = self.half_extents.to_array();
        let eb = other.half_extents.to_array();

        // Rotation expressing `other` in `self`'s frame.
        let mut r = [[0.0f32; 3]; 3];
        let mut abs_r = [[0.0f32; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                r[i][j] = a[i].dot(b[j]);
                abs_r[i][j] = r[i][j].abs() + EPSILON;
            }
        }

        let d = other.center - self.center;
        let t = [d.dot(a[0]), d.dot(a[1]), d.dot(a[2])];

        // Face normals of self.
        for i in 0..3 {
            let ra = ea[i];
            let rb = eb[0] * abs_r[i][0] + eb[1] * abs_r[i][1] + eb[2] * abs_r[i][2];
            if t[i].abs() > ra + rb {
                return false;
            }
        }

        // Face normals of other.
        for j in 0..3 {
            let ra = ea[0] * abs_r[0][j] + ea[1] * abs_r[1][j] + ea[2] * abs_r[2][j];
            let rb = eb[j];
            let proj = t[0] * r[0][j] + t[1] * r[1][j] + t[2] * r[2][j];
            if proj.abs() > ra + rb {
                return false;
            }
        }

        // Edge cross products a[i] x b[j].
        for i in 0..3 {
            let (i1, i2) = ((i + 1) % 3, (i + 2) % 3);
            for j in 0..3 {
                let (j1, j2) = ((j + 1) % 3, (j + 2) % 3);
                let ra = ea[i1] * abs_r[i2][j] + ea[i2] * abs_r[i1][j];
                let rb = eb[j1] * abs_r[i][j2] + eb[j2] * abs_r[i][j1];
                let proj = t[i2] * r[i1][j] - t[i1] * r[i2][j];
                if proj.abs() > ra + rb {
                    return false;
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn test_normalize_zero_falls_back_to_forward() {
        assert_eq!(normalize_or_forward(Vec3::ZERO), FORWARD);
        let n = normalize_or_forward(Vec3::new(0.0, 0.0, -3.0));
        assert!((n - FORWARD).length() < 1e-6);
    }

    #[test]
    fn test_aabb_overlap_and_separation() {
        let a = Aabb::from_center(Vec3::ZERO, Vec3::splat(0.5));
        let b = Aabb::from_center(Vec3::new(0.9, 0.0, 0.0), Vec3::splat(0.5));
        let c = Aabb::from_center(Vec3::new(1.1, 0.0, 0.0), Vec3::splat(0.5));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        // Touching faces.
        let d = Aabb::from_center(Vec3::new(1.0, 0.0, 0.0), Vec3::splat(0.5));
        assert!(a.intersects(&d));
    }

    #[test]
    fn test_obb_matches_aabb_when_unrotated() {
        let half = Vec3::splat(0.5);
        for x in [0.0, 0.5, 0.99, 1.01, 2.0] {
            let center = Vec3::new(x, 0.2, -0.1);
            let obb = Obb::axis_aligned(Vec3::ZERO, half).intersects(&Obb::axis_aligned(center, half));
            let aabb = Aabb::from_center(Vec3::ZERO, half).intersects(&Aabb::from_center(center, half));
            assert_eq!(obb, aabb, "mismatch at x = {x}");
        }
    }

    #[test]
    fn test_obb_rotation_reaches_further() {
        // Unit cube rotated 45° about z has a corner at ~0.707 along x.
        let rotated = Obb::from_euler(Vec3::ZERO, Vec3::splat(0.5), Vec3::new(0.0, 0.0, FRAC_PI_4));
        let probe = Obb::axis_aligned(Vec3::new(0.65, 0.0, 0.0), Vec3::splat(0.05));
        assert!(rotated.intersects(&probe));

        let aligned = Obb::axis_aligned(Vec3::ZERO, Vec3::splat(0.5));
        assert!(!aligned.intersects(&probe));
    }

    #[test]
    fn test_bounds_enclose_rotated_box() {
        let rotated = Obb::from_euler(Vec3::new(1.0, 0.0, 0.0), Vec3::splat(0.5), Vec3::new(0.0, 0.0, FRAC_PI_4));
        let bounds = rotated.bounds();
        let reach = 0.5 * std::f32::consts::SQRT_2;
        assert!((bounds.max.x - (1.0 + reach)).abs() < 1e-5);
        assert!((bounds.min.y + reach).abs() < 1e-5);
        assert!((bounds.max.z - 0.5).abs() < 1e-5);

        let unrotated = Obb::axis_aligned(Vec3::ZERO, Vec3::new(0.02, 0.02, 1.0)).bounds();
        assert_eq!(unrotated, Aabb::from_center(Vec3::ZERO, Vec3::new(0.02, 0.02, 1.0)));
    }

    #[test]
    fn test_obb_rotated_pair() {
        // x reach: 0.707 for the z-rotated box, 0.5 for the x-rotated one.
        let a = Obb::from_euler(Vec3::ZERO, Vec3::splat(0.5), Vec3::new(0.0, 0.0, FRAC_PI_4));
        let b = Obb::from_euler(
            Vec3::new(1.3, 0.0, 0.0),
            Vec3::splat(0.5),
            Vec3::new(FRAC_PI_4, 0.0, 0.0),
        );
        assert!(!a.intersects(&b));

        let c = Obb::from_euler(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::splat(0.5),
            Vec3::new(FRAC_PI_4, 0.0, 0.0),
        );
        assert!(a.intersects(&c));
    }

    #[test]
    fn test_thin_box_along_direction() {
        let beam = Obb::along(Vec3::ZERO, Vec3::new(0.02, 0.02, 1.0), Vec3::new(0.0, 0.0, -15.0));
        // Long along z, thin along x.
        let ahead = Obb::axis_aligned(Vec3::new(0.0, 0.0, -1.3), Vec3::splat(0.4));
        let beside = Obb::axis_aligned(Vec3::new(0.5, 0.0, 0.0), Vec3::splat(0.4));
        assert!(ahead.intersects(&beam));
        assert!(!beside.intersects(&beam));
    }
}
