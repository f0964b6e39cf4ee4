use glam::Vec3;

/// The closed set of drawable mesh kinds the renderer can dispatch on.
///
/// Built-in kinds get their draw targets uploaded at renderer setup; a
/// `Custom` kind refers to mesh data registered under a key at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Plane,
    Cube,
    Icosahedron,
    Circle,
    Custom(String),
}

impl GeometryKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Plane => "plane",
            Self::Cube => "cube",
            Self::Icosahedron => "icosahedron",
            Self::Circle => "circle",
            Self::Custom(key) => key,
        }
    }
}

/// Mesh data in the flat layout the graphics binding uploads: positions and
/// normals as 3-float runs, indices as `u32`.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
    pub normals: Vec<f32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

const CIRCLE_SEGMENTS: u32 = 32;

/// A unit square in the XZ plane, normal +Y. Per-object width and height are
/// applied through the model-size uniform, so the data stays unit-sized.
pub fn create_plane() -> MeshData {
    let corners = [
        Vec3::new(-0.5, 0.0, -0.5),
        Vec3::new(-0.5, 0.0, 0.5),
        Vec3::new(0.5, 0.0, 0.5),
        Vec3::new(0.5, 0.0, -0.5),
    ];

    let mut mesh = MeshData {
        vertices: Vec::new(),
        indices: vec![0, 1, 2, 0, 2, 3],
        normals: Vec::new(),
    };
    for corner in corners {
        push_vec3(&mut mesh.vertices, corner);
        push_vec3(&mut mesh.normals, Vec3::Y);
    }
    mesh
}

/// A unit cube centered at the origin with per-face normals.
pub fn create_cube() -> MeshData {
    let mut mesh = MeshData {
        vertices: Vec::new(),
        indices: Vec::new(),
        normals: Vec::new(),
    };

    // (normal, tangent, bitangent) per face; corners wind counter-clockwise
    // seen from outside.
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];

    for (normal, tangent, bitangent) in faces {
        let base = mesh.vertex_count() as u32;
        let center = normal * 0.5;
        for (u, v) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            push_vec3(&mut mesh.vertices, center + tangent * u + bitangent * v);
            push_vec3(&mut mesh.normals, normal);
        }
        mesh.indices
            .extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// A unit-radius icosahedron; normals point radially, shared per vertex.
pub fn create_icosahedron() -> MeshData {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let corners = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];

    let mut mesh = MeshData {
        vertices: Vec::new(),
        indices: vec![
            0, 11, 5, 0, 5, 1, 0, 1, 7, 0, 7, 10, 0, 10, 11, //
            1, 5, 9, 5, 11, 4, 11, 10, 2, 10, 7, 6, 7, 1, 8, //
            3, 9, 4, 3, 4, 2, 3, 2, 6, 3, 6, 8, 3, 8, 9, //
            4, 9, 5, 2, 4, 11, 6, 2, 10, 8, 6, 7, 9, 8, 1,
        ],
        normals: Vec::new(),
    };
    for corner in corners {
        let unit = corner.normalize();
        push_vec3(&mut mesh.vertices, unit);
        push_vec3(&mut mesh.normals, unit);
    }
    mesh
}

/// A unit-radius disc in the XZ plane, normal +Y, laid out as a triangle
/// fan: center first, then the rim with a closing duplicate.
pub fn create_circle() -> MeshData {
    let mut mesh = MeshData {
        vertices: Vec::new(),
        indices: Vec::new(),
        normals: Vec::new(),
    };

    push_vec3(&mut mesh.vertices, Vec3::ZERO);
    push_vec3(&mut mesh.normals, Vec3::Y);
    for segment in 0..=CIRCLE_SEGMENTS {
        let angle = segment as f32 / CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
        push_vec3(
            &mut mesh.vertices,
            Vec3::new(angle.cos(), 0.0, -angle.sin()),
        );
        push_vec3(&mut mesh.normals, Vec3::Y);
    }
    mesh.indices.extend(0..mesh.vertex_count() as u32);
    mesh
}

fn push_vec3(buffer: &mut Vec<f32>, value: Vec3) {
    buffer.extend(value.to_array());
}
