/// An RGBA color with `f32` components in the `0.0..=1.0` range.
///
/// Chart colors arrive as 8-bit RGB triples from the editing surface; the
/// drawing surfaces receive this normalized form.
///
/// ```
/// use surfplot_render::Color;
///
/// let orange = Color::from_rgb_u8(255, 128, 0);
/// assert_eq!(orange.to_rgb_u8(), (255, 128, 0));
/// assert_eq!(Color::from((255, 0, 0)), Color::RED);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    /// Create a color from RGB components with full opacity (alpha = 1.0).
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit RGB values with full opacity.
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Convert back to 8-bit RGB, rounding each channel.
    pub fn to_rgb_u8(self) -> (u8, u8, u8) {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (quantize(self.r), quantize(self.g), quantize(self.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_rgb_u8(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_round_trip() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (12, 200, 99)] {
            assert_eq!(Color::from_rgb_u8(r, g, b).to_rgb_u8(), (r, g, b));
        }
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(Color::default(), Color::WHITE);
        assert_eq!(Color::from((0, 0, 0)), Color::BLACK);
    }
}
