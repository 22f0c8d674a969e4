//! Camera module — editor-side camera rig and bounding-box framing.
//!
//! The rendering engine consumes matrices only; the rig holds the
//! high-level parameters (position, target, FOV, clip planes) the editor
//! UI edits, and builds view/projection matrices from them on demand.

mod camera_rig;

pub use camera_rig::CameraRig;
