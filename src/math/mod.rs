use glam::{DMat4, DQuat, DVec3};

pub mod intersect;
pub mod rotation;

pub use intersect::{ray_intersect_sphere, solve_quadratic_equation, Ray, Sphere};
pub use rotation::{
    euler_to_quaternion, is_angle, quaternion_to_euler, quaternions_are_equal, QUAT_EQ_EPSILON,
};

/// Builds a local matrix as `translation * rotation * scale`, column-major.
///
/// The order is fixed: against column vectors the scale applies first, then
/// the rotation, then the translation. Reordering changes every transform in
/// the tree.
pub fn compose_matrix(position: DVec3, rotation: DQuat, scale: DVec3) -> DMat4 {
    DMat4::from_translation(position) * DMat4::from_quat(rotation) * DMat4::from_scale(scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_matches_scale_rotation_translation() {
        let position = DVec3::new(1.0, -2.0, 3.0);
        let rotation = DQuat::from_rotation_y(0.7);
        let scale = DVec3::new(2.0, 1.0, 0.5);

        let composed = compose_matrix(position, rotation, scale);
        let expected = DMat4::from_scale_rotation_translation(scale, rotation, position);

        assert!(composed.abs_diff_eq(expected, 1e-12));
    }

    #[test]
    fn compose_applies_scale_before_translation() {
        let m = compose_matrix(
            DVec3::new(10.0, 0.0, 0.0),
            DQuat::IDENTITY,
            DVec3::splat(2.0),
        );

        // A point at x=1 is scaled to x=2, then translated to x=12.
        let p = m.transform_point3(DVec3::X);
        assert!(p.abs_diff_eq(DVec3::new(12.0, 0.0, 0.0), 1e-12));
    }
}
