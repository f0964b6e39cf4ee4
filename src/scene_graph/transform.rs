use glam::{DMat4, DQuat, DVec3};
use std::cell::{Cell, RefCell};

use crate::math::{compose_matrix, euler_to_quaternion, quaternion_to_euler};

/// Local position, rotation and scale of a scene node, with cached matrices.
///
/// The local matrix is rebuilt lazily behind a dirty flag. The world matrix
/// is a plain cache: it is written only by the hierarchy update pass and is
/// valid only immediately after that pass has covered the whole ancestor
/// chain. Setters never recompute anything eagerly.
#[derive(Debug, Clone)]
pub struct Transform {
    position: DVec3,
    rotation: DQuat,
    scale: DVec3,

    local_matrix: RefCell<DMat4>,
    world_matrix: RefCell<DMat4>,
    local_dirty: Cell<bool>,
}

impl Transform {
    pub fn new() -> Self {
        Self::from_translation(DVec3::ZERO)
    }

    pub fn from_translation(position: DVec3) -> Self {
        Self {
            position,
            rotation: DQuat::IDENTITY,
            scale: DVec3::ONE,
            local_matrix: RefCell::new(DMat4::IDENTITY),
            world_matrix: RefCell::new(DMat4::IDENTITY),
            local_dirty: Cell::new(true),
        }
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn set_position(&mut self, position: DVec3) {
        self.position = position;
        self.local_dirty.set(true);
    }

    pub fn translate(&mut self, delta: DVec3) {
        self.position += delta;
        self.local_dirty.set(true);
    }

    pub fn rotation(&self) -> DQuat {
        self.rotation
    }

    /// Stores the rotation normalized; the composition math assumes a unit
    /// quaternion.
    pub fn set_rotation(&mut self, rotation: DQuat) {
        self.rotation = rotation.normalize();
        self.local_dirty.set(true);
    }

    pub fn scale(&self) -> DVec3 {
        self.scale
    }

    /// Scale components must be nonzero; a zero component makes the world
    /// matrix singular and the view math downstream degenerate.
    pub fn set_scale(&mut self, scale: DVec3) {
        self.scale = scale;
        self.local_dirty.set(true);
    }

    /// Euler angles in degrees, YZX order (x = bank, y = heading, z = attitude).
    pub fn euler_angles(&self) -> DVec3 {
        quaternion_to_euler(self.rotation)
    }

    pub fn set_euler_angles(&mut self, eulers: DVec3) {
        self.set_rotation(euler_to_quaternion(eulers));
    }

    /// The `translation * rotation * scale` matrix, rebuilt on demand.
    pub fn local_matrix(&self) -> DMat4 {
        if self.local_dirty.get() {
            let matrix = compose_matrix(self.position, self.rotation, self.scale);
            self.local_matrix.replace(matrix);
            self.local_dirty.set(false);
        }
        *self.local_matrix.borrow()
    }

    /// The cached world matrix. Stale between a local mutation and the next
    /// hierarchy update pass.
    pub fn world_matrix(&self) -> DMat4 {
        *self.world_matrix.borrow()
    }

    pub(crate) fn set_world_matrix(&self, world_matrix: DMat4) {
        self.world_matrix.replace(world_matrix);
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_by_default() {
        let transform = Transform::new();
        assert_eq!(transform.position(), DVec3::ZERO);
        assert_eq!(transform.rotation(), DQuat::IDENTITY);
        assert_eq!(transform.scale(), DVec3::ONE);
        assert!(transform.local_matrix().abs_diff_eq(DMat4::IDENTITY, 0.0));
    }

    #[test]
    fn local_matrix_tracks_setters() {
        let mut transform = Transform::new();
        transform.set_position(DVec3::new(1.0, 2.0, 3.0));
        assert!(transform
            .local_matrix()
            .abs_diff_eq(DMat4::from_translation(DVec3::new(1.0, 2.0, 3.0)), 1e-12));

        transform.set_scale(DVec3::splat(2.0));
        let expected = DMat4::from_scale_rotation_translation(
            DVec3::splat(2.0),
            DQuat::IDENTITY,
            DVec3::new(1.0, 2.0, 3.0),
        );
        assert!(transform.local_matrix().abs_diff_eq(expected, 1e-12));
    }

    #[test]
    fn setters_do_not_touch_world_matrix() {
        let mut transform = Transform::new();
        transform.set_world_matrix(DMat4::from_translation(DVec3::X));

        transform.set_position(DVec3::new(5.0, 0.0, 0.0));

        // Stale by contract until the next update pass.
        assert!(transform
            .world_matrix()
            .abs_diff_eq(DMat4::from_translation(DVec3::X), 0.0));
    }

    #[test]
    fn rotation_is_normalized() {
        let mut transform = Transform::new();
        transform.set_rotation(DQuat::from_xyzw(0.0, 2.0, 0.0, 0.0));
        assert!((transform.rotation().length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn euler_angles_round_trip_through_rotation() {
        let mut transform = Transform::new();
        transform.set_euler_angles(DVec3::new(30.0, 45.0, 60.0));
        let recovered = transform.euler_angles();
        assert!(recovered.abs_diff_eq(DVec3::new(30.0, 45.0, 60.0), 1e-9));
    }
}
