use glam::{DMat4, DQuat, DVec3, Vec3};
use id_arena::Arena;

use crate::error::HierarchyError;
use crate::scene_graph::object3d::{NodeKind, Object3D, ObjectId};

/// Per-frame partition of the reachable scene tree into drawables and
/// lights. Rebuilt by every [`Scene::render_list`] call, never stored.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    pub geometry: Vec<ObjectId>,
    pub point_lights: Vec<ObjectId>,
}

/// The scene: an arena of nodes, the ordered set of top-level roots, and the
/// frame-global settings.
///
/// There is no implicit root node; [`Scene::add`] inserts into the root set.
/// Nodes are allocated with [`Scene::add_object`] and wired up with
/// [`Scene::attach`] / [`Scene::detach`]. A node allocated but neither added
/// nor attached (a camera, typically) simply dangles outside the tree.
pub struct Scene {
    objects: Arena<Object3D>,
    roots: Vec<ObjectId>,
    pub background_color: Vec3,
    pub ambient_light: Vec3,
    /// When set, the renderer refreshes all world matrices at the start of
    /// every frame. Turn off to manage [`Scene::update_world_matrix`] calls
    /// by hand.
    pub auto_update: bool,
}

impl Scene {
    pub fn new(background_color: Vec3, ambient_light: Vec3) -> Self {
        Self {
            objects: Arena::new(),
            roots: Vec::new(),
            background_color,
            ambient_light,
            auto_update: true,
        }
    }

    /// Allocates a node in the scene's arena and returns its id. The node is
    /// not yet part of the tree.
    pub fn add_object(&mut self, object: Object3D) -> ObjectId {
        self.objects.alloc(object)
    }

    pub fn get_object(&self, id: ObjectId) -> Option<&Object3D> {
        self.objects.get(id)
    }

    pub fn get_object_mut(&mut self, id: ObjectId) -> Option<&mut Object3D> {
        self.objects.get_mut(id)
    }

    pub fn get_object_by_name(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .find(|(_, object)| object.name == name)
            .map(|(id, _)| id)
    }

    pub fn roots(&self) -> &[ObjectId] {
        &self.roots
    }

    /// Inserts a parentless node into the top-level set.
    pub fn add(&mut self, id: ObjectId) -> Result<(), HierarchyError> {
        let object = self.objects.get(id).ok_or(HierarchyError::UnknownNode)?;
        if object.parent_id.is_some() {
            return Err(HierarchyError::AlreadyParented);
        }
        if self.roots.contains(&id) {
            return Err(HierarchyError::AlreadyRoot);
        }
        self.roots.push(id);
        Ok(())
    }

    /// Removes a node from the top-level set. Its subtree stays intact.
    pub fn remove(&mut self, id: ObjectId) -> Result<(), HierarchyError> {
        if self.objects.get(id).is_none() {
            return Err(HierarchyError::UnknownNode);
        }
        let position = self
            .roots
            .iter()
            .position(|&root| root == id)
            .ok_or(HierarchyError::NotARoot)?;
        self.roots.remove(position);
        Ok(())
    }

    /// Makes `child` the last child of `parent`.
    ///
    /// All checks run before any mutation: a failed attach leaves parent and
    /// child exactly as they were.
    pub fn attach(&mut self, parent: ObjectId, child: ObjectId) -> Result<(), HierarchyError> {
        if self.objects.get(parent).is_none() {
            return Err(HierarchyError::UnknownNode);
        }
        let child_object = self.objects.get(child).ok_or(HierarchyError::UnknownNode)?;
        match child_object.parent_id {
            Some(existing) if existing == parent => return Err(HierarchyError::DuplicateChild),
            Some(_) => return Err(HierarchyError::AlreadyParented),
            None => {}
        }
        if self.roots.contains(&child) {
            return Err(HierarchyError::AlreadyRoot);
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(HierarchyError::Cycle);
        }

        self.objects
            .get_mut(parent)
            .expect("parent checked above")
            .child_ids
            .push(child);
        self.objects
            .get_mut(child)
            .expect("child checked above")
            .parent_id = Some(parent);
        Ok(())
    }

    /// Detaches a direct child from its parent, clearing the back-reference.
    pub fn detach(&mut self, parent: ObjectId, child: ObjectId) -> Result<(), HierarchyError> {
        if self.objects.get(parent).is_none() {
            return Err(HierarchyError::UnknownNode);
        }
        let child_object = self.objects.get(child).ok_or(HierarchyError::UnknownNode)?;
        if child_object.parent_id != Some(parent) {
            return Err(HierarchyError::NotAChild);
        }

        self.objects
            .get_mut(parent)
            .expect("parent checked above")
            .child_ids
            .retain(|&id| id != child);
        self.objects
            .get_mut(child)
            .expect("child checked above")
            .parent_id = None;
        Ok(())
    }

    /// Whether `node` appears on the ancestor chain of `of` (or is `of`).
    fn is_ancestor_or_self(&self, node: ObjectId, of: ObjectId) -> bool {
        let mut current = Some(of);
        while let Some(id) = current {
            if id == node {
                return true;
            }
            current = self.objects.get(id).and_then(|object| object.parent_id);
        }
        false
    }

    /// Recomputes every world matrix, top down, starting from the identity
    /// at each root.
    pub fn update_world_matrix(&self) {
        for &root in &self.roots {
            self.update_subtree(root, DMat4::IDENTITY);
        }
    }

    /// Recomputes world matrices for one subtree given its parent's world
    /// matrix. The renderer uses this directly for a parentless camera,
    /// which lives outside the top-level set.
    pub fn update_subtree(&self, id: ObjectId, parent_world_matrix: DMat4) {
        if let Some(object) = self.objects.get(id) {
            let world_matrix = parent_world_matrix * object.transform.local_matrix();
            object.transform.set_world_matrix(world_matrix);

            for &child_id in &object.child_ids {
                self.update_subtree(child_id, world_matrix);
            }
        }
    }

    /// Translation part of a node's cached world matrix. Only meaningful
    /// right after an update pass.
    pub fn world_position(&self, id: ObjectId) -> Option<DVec3> {
        self.objects
            .get(id)
            .map(|object| object.transform.world_matrix().w_axis.truncate())
    }

    pub fn set_position(&mut self, id: ObjectId, position: DVec3) {
        if let Some(object) = self.objects.get_mut(id) {
            object.transform.set_position(position);
        }
    }

    pub fn set_rotation(&mut self, id: ObjectId, rotation: DQuat) {
        if let Some(object) = self.objects.get_mut(id) {
            object.transform.set_rotation(rotation);
        }
    }

    pub fn set_euler_angles(&mut self, id: ObjectId, eulers: DVec3) {
        if let Some(object) = self.objects.get_mut(id) {
            object.transform.set_euler_angles(eulers);
        }
    }

    pub fn set_scale(&mut self, id: ObjectId, scale: DVec3) {
        if let Some(object) = self.objects.get_mut(id) {
            object.transform.set_scale(scale);
        }
    }

    /// Walks the tree depth-first in insertion order and partitions the
    /// reachable nodes into drawables and point lights. Groups and cameras
    /// are skipped; their subtrees are still visited. Does not mutate.
    pub fn render_list(&self) -> RenderList {
        let mut list = RenderList::default();
        for &root in &self.roots {
            self.collect_render_list(root, &mut list);
        }
        list
    }

    fn collect_render_list(&self, id: ObjectId, list: &mut RenderList) {
        if let Some(object) = self.objects.get(id) {
            match object.kind {
                NodeKind::Geometry { .. } => list.geometry.push(id),
                NodeKind::PointLight(_) => list.point_lights.push(id),
                NodeKind::Group | NodeKind::Camera(_) => {}
            }
            for &child_id in &object.child_ids {
                self.collect_render_list(child_id, list);
            }
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO)
    }
}
