pub mod object3d;
pub mod scene;
pub mod transform;

pub use object3d::{NodeKind, Object3D, ObjectId};
pub use scene::{RenderList, Scene};
pub use transform::Transform;
