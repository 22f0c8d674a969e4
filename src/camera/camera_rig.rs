/// CameraRig — high-level perspective camera parameters for the editor.
///
/// The rig is what the editor's property panel edits (FOV in a
/// degrees-adapter, near/far in a min/max-adapter) and what framing
/// repositions. View and projection matrices are built on demand and
/// handed to the rendering engine, which stores matrices only.

use glam::{Mat4, Vec3};
use crate::editor_warn;
use crate::scenegraph::Aabb;

/// Fraction of the bounding size used for the near plane when framing
const FRAME_NEAR_RATIO: f32 = 0.01;
/// Multiple of the bounding size used for the far plane when framing
const FRAME_FAR_RATIO: f32 = 100.0;
/// Clip-plane floor so a zero-size box never yields a degenerate projection
const MIN_NEAR: f32 = 1e-3;

/// Editor-side perspective camera.
#[derive(Debug, Clone)]
pub struct CameraRig {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    /// Vertical field of view, in radians
    fov_y: f32,
    near: f32,
    far: f32,
}

impl CameraRig {
    /// Create a rig at `position` looking at `target`, with a 45° vertical
    /// FOV and 0.1..1000 clip planes.
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
            fov_y: std::f32::consts::FRAC_PI_4,
            near: 0.1,
            far: 1000.0,
        }
    }

    // ===== GETTERS =====

    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Look-at target in world space.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Up vector.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Vertical field of view, in radians.
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Near clip plane distance.
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clip plane distance.
    pub fn far(&self) -> f32 {
        self.far
    }

    /// View matrix (right-handed look-at).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Projection matrix for the given viewport aspect ratio (width/height).
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far)
    }

    // ===== SETTERS =====

    /// Set the camera position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set the look-at target.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Set the up vector.
    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    /// Set the vertical field of view, in radians.
    pub fn set_fov_y(&mut self, fov_y: f32) {
        self.fov_y = fov_y;
    }

    /// Set the near clip plane distance.
    pub fn set_near(&mut self, near: f32) {
        self.near = near;
    }

    /// Set the far clip plane distance.
    pub fn set_far(&mut self, far: f32) {
        self.far = far;
    }

    // ===== FRAMING =====

    /// Reposition the rig so `bounds` fills the view.
    ///
    /// The standoff distance is the closed-form `(margin * |size|) / 2 /
    /// tan(fov_y / 2)`: the distance at which a sphere enclosing the box
    /// spans the vertical FOV, padded by `margin` (1.0 = exact fit, editors
    /// typically pass ~1.2). The camera keeps its current heading from the
    /// box center but leveled into the XZ plane, so framing never tilts
    /// the horizon. Near/far are rescaled to bracket the box and the
    /// target is moved to the box center.
    pub fn frame_bounds(&mut self, bounds: &Aabb, margin: f32) {
        let center = bounds.center();
        let size = bounds.size().length();
        if size == 0.0 {
            editor_warn!("nebula::CameraRig", "Framing zero-size bounds at {:?}", center);
        }

        let half_size = size * margin * 0.5;
        let distance = half_size / (self.fov_y * 0.5).tan();

        // Level the current heading; a camera directly above (or at) the
        // center has no usable heading, fall back to +Z
        let heading = ((self.position - center) * Vec3::new(1.0, 0.0, 1.0))
            .try_normalize()
            .unwrap_or(Vec3::Z);

        self.position = center + heading * distance;
        self.near = (size * FRAME_NEAR_RATIO).max(MIN_NEAR);
        self.far = (size * FRAME_FAR_RATIO).max(self.near * 2.0);
        self.target = center;
    }
}

#[cfg(test)]
#[path = "camera_rig_tests.rs"]
mod tests;
