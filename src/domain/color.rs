//! Fixed palette used by the renderer

/// RGB color with components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ShapeColor {
    /// Face fill color (CSS `lightblue`)
    pub const LIGHT_BLUE: ShapeColor = ShapeColor::from_rgb_u8(173, 216, 230);
    /// Outline color
    pub const BLACK: ShapeColor = ShapeColor::from_rgb_u8(0, 0, 0);
    /// Background color
    pub const WHITE: ShapeColor = ShapeColor::from_rgb_u8(255, 255, 255);

    /// Build a color from 8-bit channels
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Convert to image crate RGBA format (0-255)
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            255,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_round_trips_to_u8() {
        assert_eq!(ShapeColor::LIGHT_BLUE.to_rgba_u8(), [173, 216, 230, 255]);
        assert_eq!(ShapeColor::BLACK.to_rgba_u8(), [0, 0, 0, 255]);
        assert_eq!(ShapeColor::WHITE.to_rgba_u8(), [255, 255, 255, 255]);
    }
}
