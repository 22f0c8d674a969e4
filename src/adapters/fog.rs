/// Fog adapter — coupled near/far distances plus hex color.
///
/// Linear fog fades from `near` to `far`; an inverted range makes the
/// renderer produce garbage, so the adapter keeps `near <= far` by
/// dragging the other distance along. The fog color rides through the
/// hex helpers so a color picker can bind to it directly.

use crate::error::Result;
use super::color::{ColorTarget, parse_hex, format_hex};

/// Seam to a linear fog owned by the rendering engine.
///
/// The fog's color is exposed through [`ColorTarget`].
pub trait FogTarget: ColorTarget {
    /// Distance at which fog starts.
    fn near(&self) -> f32;

    /// Set the fog start distance.
    fn set_near(&mut self, near: f32);

    /// Distance at which fog is fully opaque.
    fn far(&self) -> f32;

    /// Set the fog end distance.
    fn set_far(&mut self, far: f32);
}

/// Property-panel view of a [`FogTarget`].
///
/// After any setter: `near <= far`.
pub struct FogAdapter<'a> {
    target: &'a mut dyn FogTarget,
}

impl<'a> FogAdapter<'a> {
    /// Borrow `target` for the duration of a UI interaction.
    pub fn new(target: &'a mut dyn FogTarget) -> Self {
        Self { target }
    }

    /// Fog start distance.
    pub fn near(&self) -> f32 {
        self.target.near()
    }

    /// Set the fog start distance, pushing the end distance out if it
    /// would fall below the start.
    pub fn set_near(&mut self, near: f32) {
        self.target.set_near(near);
        if self.target.far() < near {
            self.target.set_far(near);
        }
    }

    /// Fog end distance.
    pub fn far(&self) -> f32 {
        self.target.far()
    }

    /// Set the fog end distance, pulling the start distance down to match
    /// if it would exceed the end.
    pub fn set_far(&mut self, far: f32) {
        self.target.set_far(far);
        if self.target.near() > far {
            self.target.set_near(far);
        }
    }

    /// Fog color as `#rrggbb`.
    pub fn hex_color(&self) -> String {
        format_hex(self.target.rgb())
    }

    /// Write a `#rrggbb` string through to the fog color.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::InvalidColor`] for malformed input;
    /// the fog is left untouched.
    pub fn set_hex_color(&mut self, hex: &str) -> Result<()> {
        let rgb = parse_hex(hex)?;
        self.target.set_rgb(rgb);
        Ok(())
    }
}

#[cfg(test)]
#[path = "fog_tests.rs"]
mod tests;
