use std::collections::HashMap;

use glam::Vec3;

use crate::error::RenderError;
use crate::geometry::{
    create_circle, create_cube, create_icosahedron, create_plane, GeometryKind, MeshData,
};
use crate::rendering::context::{
    DrawHandle, GraphicsContext, PrimitiveKind, ProgramHandle, Viewport,
};
use crate::rendering::uniforms::{FrameUniforms, ObjectUniforms};
use crate::scene_graph::object3d::{NodeKind, ObjectId};
use crate::scene_graph::scene::Scene;

const VERTEX_SHADER: &str = include_str!("../../assets/shaders/simple.vert");
const FRAGMENT_SHADER: &str = include_str!("../../assets/shaders/simple.frag");

/// Single-pass forward renderer over a [`GraphicsContext`].
///
/// Construction compiles the shader program and uploads draw targets for the
/// built-in geometry kinds. The renderer owns the context, so dropping the
/// renderer releases every GPU resource with it.
pub struct Renderer<G: GraphicsContext> {
    ctx: G,
    program: ProgramHandle,
    draw_targets: HashMap<GeometryKind, DrawHandle>,
    viewport: Option<Viewport>,
}

impl<G: GraphicsContext> Renderer<G> {
    pub fn new(mut ctx: G) -> Result<Self, RenderError> {
        let program = ctx.compile_program(VERTEX_SHADER, FRAGMENT_SHADER)?;

        let mut draw_targets = HashMap::new();
        for (kind, mesh) in [
            (GeometryKind::Plane, create_plane()),
            (GeometryKind::Cube, create_cube()),
            (GeometryKind::Icosahedron, create_icosahedron()),
            (GeometryKind::Circle, create_circle()),
        ] {
            let target = ctx.create_draw_target(&mesh)?;
            draw_targets.insert(kind, target);
        }
        log::debug!("renderer ready: program and built-in draw targets created");

        Ok(Self {
            ctx,
            program,
            draw_targets,
            viewport: None,
        })
    }

    /// Uploads mesh data for a custom geometry kind. Nodes built with
    /// [`Object3D::custom_mesh`] under the same key draw with it.
    ///
    /// [`Object3D::custom_mesh`]: crate::scene_graph::object3d::Object3D::custom_mesh
    pub fn register_mesh(
        &mut self,
        key: impl Into<String>,
        mesh: &MeshData,
    ) -> Result<(), RenderError> {
        let target = self.ctx.create_draw_target(mesh)?;
        self.draw_targets
            .insert(GeometryKind::Custom(key.into()), target);
        Ok(())
    }

    /// Sets the screen rectangle for the on-screen path. Leave unset for
    /// off-screen rendering.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    /// Renders one frame of `scene` as seen through `camera`.
    ///
    /// The camera must be a camera node allocated in `scene`. If it has a
    /// parent its world matrix comes from the scene's update pass; a
    /// parentless camera sits outside the top-level set, so its subtree is
    /// refreshed here before the view matrix is taken.
    pub fn render(&mut self, scene: &Scene, camera: ObjectId) -> Result<(), RenderError> {
        if let Some(viewport) = self.viewport {
            self.ctx.set_viewport(viewport);
        }
        self.ctx.clear(scene.background_color);

        if scene.auto_update {
            scene.update_world_matrix();
        }

        let camera_object = scene.get_object(camera).ok_or(RenderError::UnknownObject)?;
        let projection = match &camera_object.kind {
            NodeKind::Camera(projection) => projection.clone(),
            _ => return Err(RenderError::NotACamera(camera_object.name.clone())),
        };
        if camera_object.parent_id().is_none() {
            scene.update_subtree(camera, glam::DMat4::IDENTITY);
        }

        let view_matrix = camera_object.transform.world_matrix().inverse();
        let view_projection = (projection.matrix() * view_matrix).as_mat4();

        let render_list = scene.render_list();

        let (light_position, light_color) = match render_list.point_lights.split_first() {
            Some((&first, rest)) => {
                if !rest.is_empty() {
                    log::debug!(
                        "{} point lights in scene; only the first is used",
                        render_list.point_lights.len()
                    );
                }
                let position = scene
                    .world_position(first)
                    .ok_or(RenderError::UnknownObject)?;
                let color = match &scene.get_object(first).ok_or(RenderError::UnknownObject)?.kind
                {
                    NodeKind::PointLight(light) => light.color,
                    _ => unreachable!("render list only collects point lights"),
                };
                (position.as_vec3(), color)
            }
            None => (Vec3::ZERO, Vec3::ZERO),
        };

        self.ctx.set_frame_uniforms(
            self.program,
            &FrameUniforms::new(
                view_projection,
                scene.ambient_light,
                light_position,
                light_color,
            ),
        );

        for &id in &render_list.geometry {
            let object = scene.get_object(id).ok_or(RenderError::UnknownObject)?;
            let (kind, color, size) = match &object.kind {
                NodeKind::Geometry { kind, color, size } => (kind, *color, *size),
                _ => unreachable!("render list only collects geometry"),
            };
            let target = *self
                .draw_targets
                .get(kind)
                .ok_or_else(|| RenderError::MissingDrawTarget(kind.name().to_string()))?;

            self.ctx.set_object_uniforms(
                self.program,
                &ObjectUniforms::new(object.transform.world_matrix().as_mat4(), color, size),
            );

            let primitive = match kind {
                GeometryKind::Circle => PrimitiveKind::TriangleFan,
                _ => PrimitiveKind::Triangles,
            };
            self.ctx.draw(target, primitive);
        }

        Ok(())
    }

    /// Reads the rendered color buffer back to host memory (RGB, tightly
    /// packed). Off-screen path only.
    pub fn current_image(&mut self) -> Vec<u8> {
        self.ctx.read_pixels(3, 1)
    }
}
