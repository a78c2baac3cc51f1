use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// Parse a #rrggbb string into a terminal color. Returns None for
/// anything that isn't six hex digits.
pub fn hex_to_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// A compact inline preview of a palette: one colored block per swatch.
pub fn swatch_spans(colors: &[String]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for color in colors {
        let style = match hex_to_color(color) {
            Some(c) => Style::default().fg(c),
            None => Style::default(),
        };
        spans.push(Span::styled("██", style));
        spans.push(Span::raw(" "));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_prefix() {
        assert_eq!(hex_to_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(hex_to_color("00ff55"), Some(Color::Rgb(0, 255, 85)));
        assert_eq!(hex_to_color(" #0000ff "), Some(Color::Rgb(0, 0, 255)));
    }

    #[test]
    fn rejects_malformed_values() {
        assert_eq!(hex_to_color("#ff00"), None);
        assert_eq!(hex_to_color("#gggggg"), None);
        assert_eq!(hex_to_color(""), None);
    }
}
