/// SceneTree — arena of SceneNodes mirroring the host's scene graph.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys, the same
/// discipline the rendering engine applies to its render instances.
/// The tree always has a root node; every other node has a parent.

use slotmap::SlotMap;
use glam::Mat4;
use crate::error::Result;
use crate::{editor_bail, editor_err, editor_trace};
use super::aabb::Aabb;
use super::node::{SceneNode, NodeKey};

/// Editor-side scene tree.
///
/// Nodes are managed via stable keys (NodeKey). Keys remain valid even
/// after other nodes are removed.
pub struct SceneTree {
    nodes: SlotMap<NodeKey, SceneNode>,
    root: NodeKey,
}

impl SceneTree {
    /// Create a tree containing only a root node named "root".
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(SceneNode::new("root", None));
        Self { nodes, root }
    }

    /// Key of the root node. Always valid.
    pub fn root(&self) -> NodeKey {
        self.root
    }

    /// Create a node under `parent`.
    ///
    /// Returns a stable key that remains valid until the node is removed.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` does not refer to a live node.
    pub fn create_node(&mut self, parent: NodeKey, name: &str) -> Result<NodeKey> {
        if !self.nodes.contains_key(parent) {
            editor_bail!(InvalidNode, "nebula::SceneTree",
                "cannot create '{}': parent node is gone", name);
        }

        let key = self.nodes.insert(SceneNode::new(name, Some(parent)));
        self.nodes[parent].children.push(key);
        editor_trace!("nebula::SceneTree", "Created node '{}'", name);
        Ok(key)
    }

    /// Remove a node and its entire subtree.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is the root or does not refer to a live node.
    pub fn remove_node(&mut self, key: NodeKey) -> Result<()> {
        if key == self.root {
            editor_bail!(InvalidOperation, "nebula::SceneTree",
                "cannot remove the root node");
        }
        let node = self.nodes.get(key).ok_or_else(|| {
            editor_err!(InvalidNode, "nebula::SceneTree", "cannot remove: node is gone")
        })?;

        // Unlink from parent, then drop the subtree depth-first
        if let Some(parent) = node.parent {
            self.nodes[parent].children.retain(|&c| c != key);
        }
        self.remove_subtree(key);
        Ok(())
    }

    fn remove_subtree(&mut self, key: NodeKey) {
        if let Some(node) = self.nodes.remove(key) {
            editor_trace!("nebula::SceneTree", "Removed node '{}'", node.name());
            for child in node.children {
                self.remove_subtree(child);
            }
        }
    }

    /// Get a node by key.
    pub fn node(&self, key: NodeKey) -> Option<&SceneNode> {
        self.nodes.get(key)
    }

    /// Get a mutable node by key.
    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut SceneNode> {
        self.nodes.get_mut(key)
    }

    /// Number of live nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Child keys of a node, in creation order. `None` for a stale key.
    pub fn children_of(&self, key: NodeKey) -> Option<&[NodeKey]> {
        self.nodes.get(key).map(|node| node.children())
    }

    /// Iterate over all nodes (key, node).
    pub fn nodes(&self) -> impl Iterator<Item = (NodeKey, &SceneNode)> {
        self.nodes.iter()
    }

    /// World transform of a node: the product of local matrices from the
    /// root down to the node. Returns `None` for a stale key.
    pub fn world_matrix(&self, key: NodeKey) -> Option<Mat4> {
        let node = self.nodes.get(key)?;
        let local = node.local_matrix();
        match node.parent() {
            // Root's parent chain is empty; recursion depth = tree depth
            Some(parent) => Some(self.world_matrix(parent)? * local),
            None => Some(local),
        }
    }

    /// World-space bounds of a subtree: the union of every descendant's
    /// local bounds transformed by its world matrix.
    ///
    /// Returns `None` for a stale key or when no node in the subtree
    /// carries bounds.
    pub fn compute_bounds(&self, key: NodeKey) -> Option<Aabb> {
        let world = self.world_matrix(key)?;
        self.bounds_recursive(key, &world)
    }

    fn bounds_recursive(&self, key: NodeKey, world: &Mat4) -> Option<Aabb> {
        let node = self.nodes.get(key)?;
        let mut combined = node.bounds().map(|b| b.transformed(world));

        for &child in node.children() {
            let child_world = *world * self.nodes[child].local_matrix();
            if let Some(child_bounds) = self.bounds_recursive(child, &child_world) {
                combined = Some(match combined {
                    Some(b) => b.union(&child_bounds),
                    None => child_bounds,
                });
            }
        }

        combined
    }

    /// Remove everything except the root node.
    pub fn clear(&mut self) {
        let children: Vec<NodeKey> = self.nodes[self.root].children.drain(..).collect();
        for child in children {
            self.remove_subtree(child);
        }
    }
}

impl Default for SceneTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_tree_tests.rs"]
mod tests;
