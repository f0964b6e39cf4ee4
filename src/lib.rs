//! A minimal 3D scene graph with a single-pass forward renderer.
//!
//! Applications build a tree of [`Object3D`] nodes inside a [`Scene`], point
//! a camera node at it, and hand both to a [`Renderer`] each frame. The
//! renderer flattens the tree into drawables and lights and issues draw
//! calls through whatever [`GraphicsContext`] binding it was given.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod light;
pub mod math;
pub mod rendering;
pub mod scene_graph;

pub use camera::Projection;
pub use error::{CameraParameterError, HierarchyError, RenderError};
pub use geometry::{GeometryKind, MeshData};
pub use light::PointLight;
pub use rendering::{
    DrawHandle, FrameUniforms, GraphicsContext, ObjectUniforms, PrimitiveKind, ProgramHandle,
    Renderer, Viewport,
};
pub use scene_graph::{NodeKind, Object3D, ObjectId, RenderList, Scene, Transform};
