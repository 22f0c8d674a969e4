//! Scene-graph mirror module
//!
//! A lightweight, non-owning mirror of the host editor's scene: named nodes
//! with local transforms, visibility flags, and optional local-space bounds.
//! The rendering engine owns the real scene; this tree exists so editor
//! tooling (outline dumps, debug overlays, camera framing) has something
//! cheap to traverse.

mod aabb;
mod node;
mod scene_tree;
mod dump;

pub use aabb::Aabb;
pub use node::{SceneNode, NodeKey, NodeFlags};
pub use scene_tree::SceneTree;
pub use dump::{dump_lines, dump_string};
