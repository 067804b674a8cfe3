//! Math types for Sonance

pub use glam::Vec3;

/// Maps an engine-space vector (right-handed, Y-up) into device axis
/// conventions by negating the Y and Z components.
pub fn to_device_space(v: Vec3) -> Vec3 {
    Vec3::new(v.x, -v.y, -v.z)
}

/// Derives the listener orientation pair from a facing angle in radians.
///
/// Forward is fixed to `(0, 0, -1)`; the up vector tilts with the angle
/// as `(sin angle, cos angle, 0)`, so an angle of zero means upright.
pub fn listener_orientation(angle: f32) -> (Vec3, Vec3) {
    let forward = Vec3::new(0.0, 0.0, -1.0);
    let up = Vec3::new(angle.sin(), angle.cos(), 0.0);
    (forward, up)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_device_space_negates_y_and_z() {
        let mapped = to_device_space(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(mapped, Vec3::new(1.0, -2.0, -3.0));
    }

    #[test]
    fn test_orientation_at_zero_is_upright() {
        let (forward, up) = listener_orientation(0.0);
        assert_eq!(forward, Vec3::new(0.0, 0.0, -1.0));
        assert!((up - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_orientation_quarter_turn() {
        let (forward, up) = listener_orientation(FRAC_PI_2);
        assert_eq!(forward, Vec3::new(0.0, 0.0, -1.0));
        assert!((up.x - 1.0).abs() < 1e-6);
        assert!(up.y.abs() < 1e-6);
        assert_eq!(up.z, 0.0);
    }
}
