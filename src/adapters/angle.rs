/// Degrees/radians adapter.
///
/// The rendering engine stores angles in radians; property panels edit
/// degrees. The adapter wraps one radians-valued property through a pair
/// of plain-fn accessors and converts at the boundary.

/// Degrees view of a radians-valued property.
///
/// # Example
///
/// ```
/// use nebula_editor_kit::nebula::adapters::DegRadAdapter;
/// use nebula_editor_kit::nebula::camera::CameraRig;
/// use nebula_editor_kit::glam::Vec3;
///
/// let mut rig = CameraRig::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
/// let mut fov = DegRadAdapter::new(&mut rig, CameraRig::fov_y, CameraRig::set_fov_y);
/// fov.set_degrees(60.0);
/// assert!((fov.degrees() - 60.0).abs() < 1e-4);
/// ```
pub struct DegRadAdapter<'a, T: ?Sized> {
    target: &'a mut T,
    get: fn(&T) -> f32,
    set: fn(&mut T, f32),
}

impl<'a, T: ?Sized> DegRadAdapter<'a, T> {
    /// Borrow `target`, wrapping the radians property exposed by
    /// `get`/`set`.
    pub fn new(target: &'a mut T, get: fn(&T) -> f32, set: fn(&mut T, f32)) -> Self {
        Self { target, get, set }
    }

    /// Current value, in degrees.
    pub fn degrees(&self) -> f32 {
        (self.get)(self.target).to_degrees()
    }

    /// Write a degrees value through as radians.
    pub fn set_degrees(&mut self, degrees: f32) {
        (self.set)(self.target, degrees.to_radians());
    }
}

#[cfg(test)]
#[path = "angle_tests.rs"]
mod tests;
