/// AxisGridHelper — per-node axis and grid debug overlay.
///
/// Attaches two child visuals to an inspected node: a local-axes visual
/// and a ground grid. Both are drawn without depth testing so they stay
/// readable inside geometry, with the grid drawing before the axes.
/// A single visibility flag is mirrored onto both children; the
/// `visible`/`set_visible` pair is what a property-panel checkbox binds to.

use glam::Vec3;
use crate::error::Result;
use crate::editor_debug;
use crate::scenegraph::{SceneTree, NodeKey};

/// Grid draws first, axes on top of it
const GRID_RENDER_ORDER: i32 = 1;
const AXES_RENDER_ORDER: i32 = 2;

/// Axis/grid overlay attached to one scene-tree node.
///
/// Overlays start hidden; toggle with [`AxisGridHelper::set_visible`].
pub struct AxisGridHelper {
    axes: NodeKey,
    grid: NodeKey,
    visible: bool,
}

impl AxisGridHelper {
    /// Attach an axis/grid overlay under `parent`.
    ///
    /// `units` is the number of grid cells per side; the grid node is
    /// scaled to span that many units in X and Z.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` does not refer to a live node.
    pub fn attach(tree: &mut SceneTree, parent: NodeKey, units: u32) -> Result<Self> {
        let axes = tree.create_node(parent, "axes")?;
        {
            let node = tree.node_mut(axes).unwrap();
            node.set_visible(false);
            node.set_depth_test(false);
            node.set_render_order(AXES_RENDER_ORDER);
        }

        let grid = tree.create_node(parent, "grid")?;
        {
            let node = tree.node_mut(grid).unwrap();
            node.set_visible(false);
            node.set_depth_test(false);
            node.set_render_order(GRID_RENDER_ORDER);
            node.set_scale(Vec3::new(units as f32, 1.0, units as f32));
        }

        // Both children exist, so the parent is necessarily alive
        let parent_name = tree.node(parent).unwrap().name();
        editor_debug!("nebula::Gizmo", "Attached axis/grid overlay to '{}'", parent_name);
        Ok(Self { axes, grid, visible: false })
    }

    /// Whether the overlay is shown.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the overlay, mirroring the flag onto both child visuals.
    pub fn set_visible(&mut self, tree: &mut SceneTree, visible: bool) {
        self.visible = visible;
        if let Some(node) = tree.node_mut(self.axes) {
            node.set_visible(visible);
        }
        if let Some(node) = tree.node_mut(self.grid) {
            node.set_visible(visible);
        }
    }

    /// Key of the axes child node.
    pub fn axes(&self) -> NodeKey {
        self.axes
    }

    /// Key of the grid child node.
    pub fn grid(&self) -> NodeKey {
        self.grid
    }

    /// Remove both child visuals from the tree.
    ///
    /// The helper is consumed; stale children (already removed with their
    /// parent) are ignored.
    pub fn detach(self, tree: &mut SceneTree) {
        let _ = tree.remove_node(self.axes);
        let _ = tree.remove_node(self.grid);
    }
}

#[cfg(test)]
#[path = "axis_grid_tests.rs"]
mod tests;
