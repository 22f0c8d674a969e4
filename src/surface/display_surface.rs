/// DisplaySurface — seam to the externally-owned render surface.
///
/// The editor presents its 3D viewport through a surface whose backing
/// store (physical pixels) can drift from the size it is presented at
/// (logical pixels × device pixel ratio): window moves between monitors,
/// DPI changes, panel resizes. Reconciliation is a single compare-and-resize;
/// no state is retained across calls.

use winit::dpi::{LogicalSize, PhysicalSize};
use crate::editor_debug;

/// Seam to a render surface owned by the host editor.
///
/// Implemented by the host over its swapchain/canvas. The kit never creates
/// or owns surfaces; it only reads sizes and requests resizes through this
/// trait.
pub trait DisplaySurface {
    /// Size the surface is presented at, in logical (display) pixels.
    fn presented_size(&self) -> LogicalSize<u32>;

    /// Device pixel ratio: physical pixels per logical pixel.
    fn scale_factor(&self) -> f64;

    /// Current backing-store size, in physical pixels.
    fn backing_size(&self) -> PhysicalSize<u32>;

    /// Resize the backing store to the given physical size.
    fn resize_backing(&mut self, size: PhysicalSize<u32>);
}

/// Backing size the surface should have: presented size scaled by the
/// device pixel ratio, truncated toward zero per axis.
///
/// Truncation (not rounding) matches canvas backing-store semantics:
/// a 639.5 px result must not allocate a 640 px store.
pub fn scaled_backing_size(presented: LogicalSize<u32>, scale_factor: f64) -> PhysicalSize<u32> {
    PhysicalSize::new(
        (presented.width as f64 * scale_factor) as u32,
        (presented.height as f64 * scale_factor) as u32,
    )
}

/// Reconcile the surface's backing store with its presented size.
///
/// Compares the current backing size against the presented size scaled by
/// the device pixel ratio and resizes only when they differ.
///
/// Returns `true` if a resize was performed, `false` if the backing store
/// was already up to date (in which case the surface is not touched).
pub fn resize_to_display(surface: &mut dyn DisplaySurface) -> bool {
    let target = scaled_backing_size(surface.presented_size(), surface.scale_factor());
    let current = surface.backing_size();

    let needs_resize = current != target;
    if needs_resize {
        editor_debug!(
            "nebula::Surface",
            "Resizing backing store {}x{} -> {}x{}",
            current.width, current.height, target.width, target.height
        );
        surface.resize_backing(target);
    }
    needs_resize
}

#[cfg(test)]
#[path = "display_surface_tests.rs"]
mod tests;
