use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Uniforms written once per frame.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable, Default)]
pub struct FrameUniforms {
    pub view_projection_matrix: Mat4,
    pub ambient_light: Vec3,
    _pad0: f32,
    pub point_light_position: Vec3,
    _pad1: f32,
    pub point_light_color: Vec3,
    _pad2: f32,
}

impl FrameUniforms {
    pub fn new(
        view_projection_matrix: Mat4,
        ambient_light: Vec3,
        point_light_position: Vec3,
        point_light_color: Vec3,
    ) -> Self {
        Self {
            view_projection_matrix,
            ambient_light,
            _pad0: 0.0,
            point_light_position,
            _pad1: 0.0,
            point_light_color,
            _pad2: 0.0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Uniforms written once per drawn object.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable, Default)]
pub struct ObjectUniforms {
    pub model_matrix: Mat4,
    pub object_color: Vec3,
    _pad0: f32,
    pub model_size: Vec3,
    _pad1: f32,
}

impl ObjectUniforms {
    pub fn new(model_matrix: Mat4, object_color: Vec3, model_size: Vec3) -> Self {
        Self {
            model_matrix,
            object_color,
            _pad0: 0.0,
            model_size,
            _pad1: 0.0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_blocks_have_std140_friendly_sizes() {
        assert_eq!(std::mem::size_of::<FrameUniforms>(), 64 + 3 * 16);
        assert_eq!(std::mem::size_of::<ObjectUniforms>(), 64 + 2 * 16);
    }

    #[test]
    fn byte_view_covers_the_whole_block() {
        let uniforms = ObjectUniforms::new(Mat4::IDENTITY, Vec3::ONE, Vec3::ONE);
        assert_eq!(
            uniforms.as_bytes().len(),
            std::mem::size_of::<ObjectUniforms>()
        );
    }
}
