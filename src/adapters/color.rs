/// Hex color adapter — `#rrggbb` strings over linear RGB triples.
///
/// Color-picker widgets speak hex strings; the rendering engine's color
/// objects store float triples. The adapter converts at the boundary and
/// writes straight through to the wrapped object.

use crate::error::Result;
use crate::{editor_bail, editor_err};

/// Seam to a color owned by the rendering engine.
pub trait ColorTarget {
    /// Color channels in 0..=1.
    fn rgb(&self) -> [f32; 3];

    /// Overwrite the color channels (0..=1).
    fn set_rgb(&mut self, rgb: [f32; 3]);
}

/// Parse a `#rrggbb` string (leading `#` optional) into 0..=1 channels.
///
/// # Errors
///
/// Returns [`crate::error::Error::InvalidColor`] unless the input is exactly six hex
/// digits after the optional `#`.
pub fn parse_hex(hex: &str) -> Result<[f32; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        editor_bail!(InvalidColor, "nebula::Adapters",
            "expected 6 hex digits, got '{}'", hex);
    }

    let mut rgb = [0.0f32; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        let byte = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|_| editor_err!(InvalidColor, "nebula::Adapters",
                "non-hex digit in '{}'", hex))?;
        *channel = byte as f32 / 255.0;
    }
    Ok(rgb)
}

/// Format 0..=1 channels as a lowercase `#rrggbb` string.
///
/// Channels are clamped to 0..=1 and rounded to the nearest 8-bit value.
pub fn format_hex(rgb: [f32; 3]) -> String {
    let to_byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        to_byte(rgb[0]),
        to_byte(rgb[1]),
        to_byte(rgb[2])
    )
}

/// Hex-string view of a [`ColorTarget`] for a property panel.
pub struct ColorAdapter<'a> {
    target: &'a mut dyn ColorTarget,
}

impl<'a> ColorAdapter<'a> {
    /// Borrow `target` for the duration of a UI interaction.
    pub fn new(target: &'a mut dyn ColorTarget) -> Self {
        Self { target }
    }

    /// Current color as `#rrggbb`.
    pub fn hex(&self) -> String {
        format_hex(self.target.rgb())
    }

    /// Write a `#rrggbb` string through to the wrapped color.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::InvalidColor`] for malformed input; the wrapped
    /// color is left untouched.
    pub fn set_hex(&mut self, hex: &str) -> Result<()> {
        let rgb = parse_hex(hex)?;
        self.target.set_rgb(rgb);
        Ok(())
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
