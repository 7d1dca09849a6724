use serde::Serialize;

/// 8-bit RGB colour. Written to content streams as 0..1 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color(0x00, 0x00, 0x00);

    /// `Color::hex(0x1F3A5F)`.
    pub const fn hex(rgb: u32) -> Self {
        Color((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub fn components(self) -> [f32; 3] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        ]
    }
}

/// Named colour roles a template draws with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Palette {
    /// Headers, bands, names.
    pub primary: Color,
    /// Rules, bullets, dots, chips.
    pub accent: Color,
    /// Page background; white unless the template tints the paper.
    pub background: Color,
    /// Body copy.
    pub text: Color,
    /// Contact lines, footers, secondary text.
    pub muted: Color,
    /// Text drawn on top of `primary` fills.
    pub on_primary: Color,
    /// Card, chip and code-block fills.
    pub surface: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_splits_channels() {
        assert_eq!(Color::hex(0x1F3A5F), Color(0x1F, 0x3A, 0x5F));
        assert_eq!(Color::hex(0xFFFFFF), Color::WHITE);
    }

    #[test]
    fn test_components_are_normalised() {
        assert_eq!(Color::WHITE.components(), [1.0, 1.0, 1.0]);
        assert_eq!(Color::BLACK.components(), [0.0, 0.0, 0.0]);
    }
}
