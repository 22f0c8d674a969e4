//! Property adapter module
//!
//! Adapters sit between a generic property-editing UI panel and objects
//! owned by the rendering engine. Each adapter borrows its target for the
//! duration of a UI interaction and exposes a paired getter/setter the
//! panel binds to, translating units (hex strings, degrees) and enforcing
//! coupling invariants (min/max gap, fog near <= far) on the way through.

mod color;
mod angle;
mod min_max;
mod fog;

pub use color::{ColorTarget, ColorAdapter, parse_hex, format_hex};
pub use angle::DegRadAdapter;
pub use min_max::MinMaxAdapter;
pub use fog::{FogTarget, FogAdapter};
