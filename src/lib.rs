/*!
# Nebula Editor Kit

Presentation-layer helper utilities for a 3D scene editor.

The rendering engine owns the scene, cameras, fog, and render surface;
this crate provides the glue the editor shell needs around them:

- **Surface**: display-size / backing-store reconciliation
- **Gizmo**: axis/grid debug overlays with a single visibility toggle
- **Adapters**: property adapters (hex colors, degrees, coupled min/max,
  fog near/far) for a generic property-editing UI panel
- **Camera**: editor-side camera rig with bounding-box framing
- **Scenegraph**: lightweight scene mirror for outline dumps and bounds

Host-owned objects are reached through small traits (`DisplaySurface`,
`ColorTarget`, `FogTarget`); the kit holds only non-owning borrows for
the duration of a UI interaction.
*/

// Internal modules
pub mod error;
mod kit;
pub mod log;
pub mod surface;
pub mod scenegraph;
pub mod gizmo;
pub mod camera;
pub mod adapters;

// Main nebula namespace module
pub mod nebula {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger singleton access
    pub use crate::kit::EditorKit;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: editor_* macros are NOT re-exported here - they are crate-level
    }

    // Surface sub-module
    pub mod surface {
        pub use crate::surface::*;
    }

    // Scenegraph sub-module
    pub mod scenegraph {
        pub use crate::scenegraph::*;
    }

    // Gizmo sub-module
    pub mod gizmo {
        pub use crate::gizmo::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Adapters sub-module
    pub mod adapters {
        pub use crate::adapters::*;
    }
}

// Re-export math library at crate root
pub use glam;
