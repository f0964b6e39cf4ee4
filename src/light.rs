use glam::Vec3;

/// A point light. Color only; its position in the world is whatever the
/// owning node's transform says it is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: Vec3,
}

impl PointLight {
    pub fn new(color: Vec3) -> Self {
        Self { color }
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self { color: Vec3::ONE }
    }
}
