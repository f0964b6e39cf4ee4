pub mod context;
pub mod renderer;
pub mod uniforms;

pub use context::{DrawHandle, GraphicsContext, PrimitiveKind, ProgramHandle, Viewport};
pub use renderer::Renderer;
pub use uniforms::{FrameUniforms, ObjectUniforms};
