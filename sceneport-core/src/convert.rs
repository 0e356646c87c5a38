//! Coordinate-system conversion.
//!
//! Scenes are authored in a right-handed Z-up system; the engine expects
//! forward = -Z, up = +Y. Positions, normals and collision offsets map
//! through the same axis swap. Quaternions are only re-ordered, not
//! axis-converted; the engine consumes the components as authored.

use glam::Vec3;

/// Map a source-space vector into engine space: `(x, y, z) -> (x, z, -y)`.
///
/// Valid for positions, directions and normals alike.
pub fn to_engine(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.z, -v.y)
}

/// Inverse of [`to_engine`]: `(x, y, z) -> (x, -z, y)`.
pub fn from_engine(v: Vec3) -> Vec3 {
    Vec3::new(v.x, -v.z, v.y)
}

/// Re-order a quaternion from the authoring tool's (w, x, y, z) layout into
/// the engine's (x, y, z, w) layout. Component values are left untouched.
pub fn quat_to_engine(q: [f32; 4]) -> [f32; 4] {
    [q[1], q[2], q[3], q[0]]
}

/// Half-extents of a collision volume, derived from its helper object's
/// scale: one half of each scale component.
pub fn half_extents(scale: Vec3) -> [f32; 3] {
    [scale.x / 2.0, scale.y / 2.0, scale.z / 2.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_swap_matches_convention() {
        assert_eq!(to_engine(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 3.0, -2.0));
    }

    #[test]
    fn axis_swap_round_trips() {
        let v = Vec3::new(0.5, -1.25, 7.0);
        assert_eq!(from_engine(to_engine(v)), v);
        assert_eq!(to_engine(from_engine(v)), v);
    }

    #[test]
    fn quaternion_reorders_w_last() {
        let q = [0.1, 0.2, 0.3, 0.4];
        assert_eq!(quat_to_engine(q), [0.2, 0.3, 0.4, 0.1]);
    }

    #[test]
    fn half_extents_are_exactly_half_scale() {
        assert_eq!(half_extents(Vec3::new(1.0, 2.0, 3.0)), [0.5, 1.0, 1.5]);
        assert_eq!(half_extents(Vec3::ONE), [0.5, 0.5, 0.5]);
    }
}
