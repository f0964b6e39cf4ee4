use glam::Vec3;

use crate::error::RenderError;
use crate::geometry::MeshData;
use crate::rendering::uniforms::{FrameUniforms, ObjectUniforms};

/// Opaque handle to an uploaded mesh, issued by the graphics binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawHandle(pub u32);

/// Opaque handle to a compiled shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Triangles,
    TriangleFan,
}

/// Screen rectangle for the on-screen rendering path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// The native graphics binding the renderer drives.
///
/// Everything GPU-shaped lives behind this trait: shader compilation, mesh
/// upload, uniform writes, draw calls and framebuffer readback. The binding
/// owns the resources behind the handles it hands out and releases them when
/// it is dropped, which the renderer ties to its own lifetime.
pub trait GraphicsContext {
    /// Compiles a vertex/fragment program exposing the library's fixed
    /// uniform interface (object color, ambient light, point light
    /// position/color, model matrix, view-projection matrix, model size).
    fn compile_program(
        &mut self,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<ProgramHandle, RenderError>;

    /// Uploads vertex, index and normal data once; the handle is reused for
    /// every subsequent draw of that mesh.
    fn create_draw_target(&mut self, mesh: &MeshData) -> Result<DrawHandle, RenderError>;

    fn clear(&mut self, background_color: Vec3);

    fn set_viewport(&mut self, viewport: Viewport);

    fn set_frame_uniforms(&mut self, program: ProgramHandle, uniforms: &FrameUniforms);

    fn set_object_uniforms(&mut self, program: ProgramHandle, uniforms: &ObjectUniforms);

    fn draw(&mut self, target: DrawHandle, primitive: PrimitiveKind);

    /// Reads the color buffer back to host memory. Off-screen path only.
    fn read_pixels(&mut self, components: u32, alignment: u32) -> Vec<u8>;
}
