//! Display surface module — backing-store / display-size reconciliation.
//!
//! The render surface is owned by the host editor and its rendering engine;
//! this module only compares sizes and asks the surface to resize when the
//! backing store has drifted from what is presented on screen.

mod display_surface;

pub use display_surface::{DisplaySurface, resize_to_display, scaled_backing_size};
