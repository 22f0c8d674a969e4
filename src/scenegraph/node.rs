/// Scene node types for the editor's scene-graph mirror.
///
/// A SceneNode mirrors one object of the host's scene: a name, a local
/// TRS transform, display flags, and optional local-space bounds. Nodes
/// live in a SceneTree arena and are addressed by stable keys.

use glam::{EulerRot, Mat4, Quat, Vec3};
use slotmap::new_key_type;
use bitflags::bitflags;
use super::aabb::Aabb;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a SceneNode within a SceneTree.
    ///
    /// Keys remain valid even after other nodes are removed.
    /// A key becomes invalid only when its own node is removed.
    pub struct NodeKey;
}

// ===== FLAGS =====

bitflags! {
    /// Display flags for a scene node.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NodeFlags: u32 {
        /// Node is drawn by the renderer
        const VISIBLE = 1 << 0;
        /// Node is depth-tested (debug overlays clear this to draw on top)
        const DEPTH_TEST = 1 << 1;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        NodeFlags::VISIBLE | NodeFlags::DEPTH_TEST
    }
}

// ===== SCENE NODE =====

/// One node of the editor's scene-graph mirror.
///
/// Transforms are local to the parent node. Rotation is stored as XYZ
/// euler angles in radians (what a property panel edits), converted to a
/// quaternion only when a matrix is built.
#[derive(Debug, Clone)]
pub struct SceneNode {
    name: String,
    position: Vec3,
    rotation: Vec3,
    scale: Vec3,
    flags: NodeFlags,
    render_order: i32,
    bounds: Option<Aabb>,
    pub(super) parent: Option<NodeKey>,
    pub(super) children: Vec<NodeKey>,
}

impl SceneNode {
    pub(super) fn new(name: &str, parent: Option<NodeKey>) -> Self {
        Self {
            name: name.to_string(),
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            flags: NodeFlags::default(),
            render_order: 0,
            bounds: None,
            parent,
            children: Vec::new(),
        }
    }

    // ===== GETTERS =====

    /// Node name as shown in the editor outline.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Local position relative to the parent.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Local rotation as XYZ euler angles, in radians.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Local scale.
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Whether the node is drawn.
    pub fn visible(&self) -> bool {
        self.flags.contains(NodeFlags::VISIBLE)
    }

    /// Whether the node is depth-tested.
    pub fn depth_test(&self) -> bool {
        self.flags.contains(NodeFlags::DEPTH_TEST)
    }

    /// All display flags.
    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    /// Draw order within the same pass (higher draws later).
    pub fn render_order(&self) -> i32 {
        self.render_order
    }

    /// Local-space bounds, if the host supplied any.
    pub fn bounds(&self) -> Option<&Aabb> {
        self.bounds.as_ref()
    }

    /// Parent node key (`None` for the tree root).
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Child node keys, in creation order.
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// Local transform matrix (scale, then XYZ euler rotation, then translation).
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            ),
            self.position,
        )
    }

    // ===== SETTERS =====

    /// Rename the node.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Set the local position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set the local rotation (XYZ euler angles, radians).
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    /// Set the local scale.
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    /// Show or hide the node.
    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(NodeFlags::VISIBLE, visible);
    }

    /// Enable or disable depth testing.
    pub fn set_depth_test(&mut self, depth_test: bool) {
        self.flags.set(NodeFlags::DEPTH_TEST, depth_test);
    }

    /// Set the draw order within the same pass.
    pub fn set_render_order(&mut self, render_order: i32) {
        self.render_order = render_order;
    }

    /// Set or clear the local-space bounds.
    pub fn set_bounds(&mut self, bounds: Option<Aabb>) {
        self.bounds = bounds;
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
