use glam::Vec3;
use id_arena::Id;

use crate::camera::Projection;
use crate::geometry::GeometryKind;
use crate::light::PointLight;
use crate::scene_graph::transform::Transform;

pub type ObjectId = Id<Object3D>;

/// What a node contributes to a frame, dispatched exhaustively by the
/// render-list walk and the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A pure transform node; contributes nothing drawable.
    Group,
    Geometry {
        kind: GeometryKind,
        color: Vec3,
        size: Vec3,
    },
    PointLight(PointLight),
    Camera(Projection),
}

/// A node in the scene tree: a local transform, a kind, and tree links.
///
/// The parent link is a non-owning arena id; the arena in [`Scene`] owns
/// every node. Names are free-form labels and not required to be unique.
///
/// [`Scene`]: crate::scene_graph::scene::Scene
pub struct Object3D {
    pub name: String,
    pub transform: Transform,
    pub kind: NodeKind,
    pub(crate) parent_id: Option<ObjectId>,
    pub(crate) child_ids: Vec<ObjectId>,
}

impl Object3D {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            name: String::new(),
            transform: Transform::new(),
            kind,
            parent_id: None,
            child_ids: Vec::new(),
        }
    }

    pub fn group() -> Self {
        Self::new(NodeKind::Group)
    }

    pub fn plane(width: f32, height: f32, color: Vec3) -> Self {
        Self::new(NodeKind::Geometry {
            kind: GeometryKind::Plane,
            color,
            size: Vec3::new(width, 1.0, height),
        })
    }

    pub fn cube(width: f32, height: f32, depth: f32, color: Vec3) -> Self {
        Self::new(NodeKind::Geometry {
            kind: GeometryKind::Cube,
            color,
            size: Vec3::new(width, height, depth),
        })
    }

    pub fn icosahedron(radius: f32, color: Vec3) -> Self {
        Self::new(NodeKind::Geometry {
            kind: GeometryKind::Icosahedron,
            color,
            size: Vec3::splat(radius),
        })
    }

    pub fn circle(radius: f32, color: Vec3) -> Self {
        Self::new(NodeKind::Geometry {
            kind: GeometryKind::Circle,
            color,
            size: Vec3::new(radius, 1.0, radius),
        })
    }

    pub fn custom_mesh(key: impl Into<String>, size: Vec3, color: Vec3) -> Self {
        Self::new(NodeKind::Geometry {
            kind: GeometryKind::Custom(key.into()),
            color,
            size,
        })
    }

    pub fn point_light(color: Vec3) -> Self {
        Self::new(NodeKind::PointLight(PointLight::new(color)))
    }

    pub fn camera(projection: Projection) -> Self {
        Self::new(NodeKind::Camera(projection))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn parent_id(&self) -> Option<ObjectId> {
        self.parent_id
    }

    pub fn child_ids(&self) -> &[ObjectId] {
        &self.child_ids
    }

    pub fn is_geometry(&self) -> bool {
        matches!(self.kind, NodeKind::Geometry { .. })
    }

    pub fn is_point_light(&self) -> bool {
        matches!(self.kind, NodeKind::PointLight(_))
    }

    pub fn is_camera(&self) -> bool {
        matches!(self.kind, NodeKind::Camera(_))
    }
}

impl Default for Object3D {
    fn default() -> Self {
        Self::group()
    }
}
