use crate::error::Error;
use super::*;

/// Mock color object (the rendering engine owns the real ones)
struct MockColor {
    rgb: [f32; 3],
}

impl ColorTarget for MockColor {
    fn rgb(&self) -> [f32; 3] {
        self.rgb
    }

    fn set_rgb(&mut self, rgb: [f32; 3]) {
        self.rgb = rgb;
    }
}

// ============================================================================
// parse_hex
// ============================================================================

#[test]
fn test_parse_hex_basic_colors() {
    assert_eq!(parse_hex("#000000").unwrap(), [0.0, 0.0, 0.0]);
    assert_eq!(parse_hex("#ffffff").unwrap(), [1.0, 1.0, 1.0]);
    assert_eq!(parse_hex("#ff0000").unwrap(), [1.0, 0.0, 0.0]);
}

#[test]
fn test_parse_hex_without_prefix() {
    assert_eq!(parse_hex("00ff00").unwrap(), [0.0, 1.0, 0.0]);
}

#[test]
fn test_parse_hex_uppercase_digits() {
    assert_eq!(parse_hex("#FF00FF").unwrap(), [1.0, 0.0, 1.0]);
}

#[test]
fn test_parse_hex_mid_value() {
    let rgb = parse_hex("#808080").unwrap();
    let expected = 128.0 / 255.0;
    for channel in rgb {
        assert!((channel - expected).abs() < 1e-6);
    }
}

#[test]
fn test_parse_hex_wrong_length_fails() {
    assert!(matches!(parse_hex("#fff"), Err(Error::InvalidColor(_))));
    assert!(matches!(parse_hex("#ffffffff"), Err(Error::InvalidColor(_))));
    assert!(matches!(parse_hex(""), Err(Error::InvalidColor(_))));
}

#[test]
fn test_parse_hex_non_hex_digit_fails() {
    assert!(matches!(parse_hex("#zzzzzz"), Err(Error::InvalidColor(_))));
    assert!(matches!(parse_hex("#12345g"), Err(Error::InvalidColor(_))));
}

// ============================================================================
// format_hex
// ============================================================================

#[test]
fn test_format_hex_basic_colors() {
    assert_eq!(format_hex([0.0, 0.0, 0.0]), "#000000");
    assert_eq!(format_hex([1.0, 1.0, 1.0]), "#ffffff");
    assert_eq!(format_hex([1.0, 0.0, 0.0]), "#ff0000");
}

#[test]
fn test_format_hex_clamps_out_of_range() {
    assert_eq!(format_hex([2.0, -1.0, 0.0]), "#ff0000");
}

#[test]
fn test_format_hex_rounds_to_nearest_byte() {
    // 0.5 * 255 = 127.5 -> 128
    assert_eq!(format_hex([0.5, 0.5, 0.5]), "#808080");
}

#[test]
fn test_hex_round_trip() {
    for hex in ["#000000", "#ffffff", "#123456", "#abcdef", "#808080"] {
        assert_eq!(format_hex(parse_hex(hex).unwrap()), hex);
    }
}

// ============================================================================
// ColorAdapter
// ============================================================================

#[test]
fn test_adapter_reads_target() {
    let mut color = MockColor { rgb: [1.0, 0.0, 0.0] };
    let adapter = ColorAdapter::new(&mut color);
    assert_eq!(adapter.hex(), "#ff0000");
}

#[test]
fn test_adapter_writes_through() {
    let mut color = MockColor { rgb: [0.0, 0.0, 0.0] };
    {
        let mut adapter = ColorAdapter::new(&mut color);
        adapter.set_hex("#00ff80").unwrap();
    }
    assert_eq!(color.rgb[0], 0.0);
    assert_eq!(color.rgb[1], 1.0);
    assert!((color.rgb[2] - 128.0 / 255.0).abs() < 1e-6);
}

#[test]
fn test_adapter_rejects_bad_hex_and_keeps_target() {
    let mut color = MockColor { rgb: [0.25, 0.5, 0.75] };
    {
        let mut adapter = ColorAdapter::new(&mut color);
        assert!(adapter.set_hex("#nope!!").is_err());
    }
    assert_eq!(color.rgb, [0.25, 0.5, 0.75]);
}
