/// Scene dumping — indentation-prefixed text form of a subtree.
///
/// A debugging aid for the editor console: each node contributes a header
/// line (its name) plus its position, rotation, and scale, indented by
/// depth. Depth-first, children in creation order.

use glam::Vec3;
use crate::error::Result;
use crate::editor_bail;
use super::node::NodeKey;
use super::scene_tree::SceneTree;

const INDENT: &str = "  ";

fn format_vec3(v: Vec3) -> String {
    format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z)
}

/// Dump a subtree as text lines.
///
/// Every node contributes exactly four lines: its name, then `pos:`,
/// `rot:`, and `scl:` lines. Children are indented one level deeper.
///
/// # Errors
///
/// Returns an error if `key` does not refer to a live node.
pub fn dump_lines(tree: &SceneTree, key: NodeKey) -> Result<Vec<String>> {
    if tree.node(key).is_none() {
        editor_bail!(InvalidNode, "nebula::SceneTree", "cannot dump: node is gone");
    }

    let mut lines = Vec::new();
    dump_recursive(tree, key, 0, &mut lines);
    Ok(lines)
}

fn dump_recursive(tree: &SceneTree, key: NodeKey, depth: usize, lines: &mut Vec<String>) {
    // Key validity was checked at the root; children of live nodes are live
    let node = match tree.node(key) {
        Some(node) => node,
        None => return,
    };

    let indent = INDENT.repeat(depth);
    lines.push(format!("{}{}", indent, node.name()));
    lines.push(format!("{}{}pos: {}", indent, INDENT, format_vec3(node.position())));
    lines.push(format!("{}{}rot: {}", indent, INDENT, format_vec3(node.rotation())));
    lines.push(format!("{}{}scl: {}", indent, INDENT, format_vec3(node.scale())));

    for &child in node.children() {
        dump_recursive(tree, child, depth + 1, lines);
    }
}

/// Dump a subtree as a single newline-terminated string.
pub fn dump_string(tree: &SceneTree, key: NodeKey) -> Result<String> {
    let lines = dump_lines(tree, key)?;
    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
#[path = "dump_tests.rs"]
mod tests;
