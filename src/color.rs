/// Color wheel lookup and HSV-like to hex conversion.

/// The 18 base colors, spaced evenly around the hue circle. A palette's
/// hue is an index into this table, never an interpolated angle.
/// Indexing with anything outside 0..18 is a caller bug and panics.
pub const WHEEL: [[u8; 3]; 18] = [
    [255, 0, 0],
    [255, 85, 0],
    [255, 170, 0],
    [255, 255, 0],
    [170, 255, 0],
    [85, 255, 0],
    [0, 255, 0],
    [0, 255, 85],
    [0, 255, 170],
    [0, 255, 255],
    [0, 170, 255],
    [0, 85, 255],
    [0, 0, 255],
    [85, 0, 255],
    [170, 0, 255],
    [255, 0, 255],
    [255, 0, 170],
    [255, 0, 85],
];

/// Convert a wheel index plus saturation/value percents into `#rrggbb`.
///
/// Desaturation first blends each channel toward white, then value scales
/// the result toward black. Both steps floor. At `s = v = 100` the output
/// is exactly the wheel's base triple. Channels are clamped to a byte at
/// format time; triples produced by the generator stay in range on their
/// own since saturation and value only ever drift downward from [70, 100].
pub fn hsv_to_hex(h: usize, s: f64, v: f64) -> String {
    let base = WHEEL[h];

    let desaturation = (100.0 - s) / 100.0;
    let lightness = v / 100.0;
    let channel = |c: u8| {
        let whitened = c as f64 + ((255.0 - c as f64) * desaturation).floor();
        (whitened * lightness).floor().clamp(0.0, 255.0) as u8
    };

    format!(
        "#{:02x}{:02x}{:02x}",
        channel(base[0]),
        channel(base[1]),
        channel(base[2])
    )
}

/// Validate if a string is a valid hex color (e.g., #rrggbb).
pub fn is_valid_hex(s: &str) -> bool {
    s.starts_with('#') && s.len() == 7 && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_saturation_and_value_returns_the_base_triple() {
        for (h, base) in WHEEL.iter().enumerate() {
            let expected = format!("#{:02x}{:02x}{:02x}", base[0], base[1], base[2]);
            assert_eq!(hsv_to_hex(h, 100.0, 100.0), expected);
        }
    }

    #[test]
    fn zero_value_is_black_for_any_hue_and_saturation() {
        for h in 0..WHEEL.len() {
            assert_eq!(hsv_to_hex(h, 100.0, 0.0), "#000000");
            assert_eq!(hsv_to_hex(h, 37.5, 0.0), "#000000");
        }
    }

    #[test]
    fn zero_saturation_at_full_value_is_white() {
        for h in 0..WHEEL.len() {
            assert_eq!(hsv_to_hex(h, 0.0, 100.0), "#ffffff");
        }
    }

    #[test]
    fn known_conversions() {
        assert_eq!(hsv_to_hex(0, 100.0, 100.0), "#ff0000");
        assert_eq!(hsv_to_hex(6, 100.0, 100.0), "#00ff00");
        assert_eq!(hsv_to_hex(0, 0.0, 100.0), "#ffffff");
        // floor(255 * 0.5) = 127 = 0x7f
        assert_eq!(hsv_to_hex(0, 100.0, 50.0), "#7f0000");
    }

    #[test]
    fn out_of_range_saturation_and_value_still_format_as_bytes() {
        // Reachable only by calling the conversion directly; the clamp
        // keeps the output well-formed instead of wrapping.
        assert!(is_valid_hex(&hsv_to_hex(0, 150.0, 120.0)));
        assert!(is_valid_hex(&hsv_to_hex(9, 250.0, 300.0)));
    }

    #[test]
    #[should_panic]
    fn out_of_range_hue_index_panics() {
        hsv_to_hex(18, 100.0, 100.0);
    }

    #[test]
    fn hex_validation() {
        assert!(is_valid_hex("#ff0000"));
        assert!(is_valid_hex("#AbCdEf"));
        assert!(!is_valid_hex("ff0000"));
        assert!(!is_valid_hex("#ff00"));
        assert!(!is_valid_hex("#gg0000"));
    }
}
