//! Debug gizmo module
//!
//! Debug overlays the editor attaches to scene-tree nodes. Gizmos own the
//! child nodes they create and mirror a single visibility toggle onto all
//! of them, so a property panel can bind one checkbox per overlay.

mod axis_grid;

pub use axis_grid::AxisGridHelper;
