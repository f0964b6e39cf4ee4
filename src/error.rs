use thiserror::Error;

/// Violations of the scene-graph tree invariants.
///
/// Every hierarchy operation checks its preconditions before touching any
/// state, so a returned error means the graph is exactly as it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("node does not belong to this scene")]
    UnknownNode,
    #[error("attaching would create a cycle (child is an ancestor of the parent)")]
    Cycle,
    #[error("node already has a parent; detach it first")]
    AlreadyParented,
    #[error("node is already a child of this parent")]
    DuplicateChild,
    #[error("node is not a child of this parent")]
    NotAChild,
    #[error("node is already a top-level member of the scene")]
    AlreadyRoot,
    #[error("node is not a top-level member of the scene")]
    NotARoot,
}

/// Invalid projection parameters, carrying the violated expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid camera parameter `{expr}`: {msg}")]
pub struct CameraParameterError {
    pub expr: String,
    pub msg: String,
}

impl CameraParameterError {
    pub fn new(expr: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            msg: msg.into(),
        }
    }
}

/// Failures raised while setting up or driving the graphics binding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("object is not part of the rendered scene")]
    UnknownObject,
    #[error("object `{0}` is not a camera")]
    NotACamera(String),
    #[error("no draw target registered for geometry kind `{0}`")]
    MissingDrawTarget(String),
    #[error("graphics context error: {0}")]
    Context(String),
}
