/// Linear RGB color. A `None` background means the surface stays transparent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb`. Returns `None` for anything else, including the
    /// `transparent` sentinel, which callers map to "no background".
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn parses_hex_triplet() {
        let c = Color::from_hex("#ff0080").expect("parse");
        assert!((c.r - 1.0).abs() < 1e-6);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_transparent_sentinel_and_garbage() {
        assert!(Color::from_hex("transparent").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("#zzzzzz").is_none());
    }

    #[test]
    fn rejects_multibyte_input_without_panicking() {
        // Six bytes but not six ASCII digits.
        assert!(Color::from_hex("#\u{20ac}\u{20ac}").is_none());
        assert!(Color::from_hex("#ffff\u{e9}").is_none());
    }
}
