//! RGBA color type and the palette's fixed color constants.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum). Colors that
/// come out of the palette (picks, config, resets) are always multiples of
/// 1/255 so they survive a trip through an 8-bit raster unchanged.
///
/// # Examples
///
/// ```
/// use popuppalette::draw::Color;
/// let orange = Color::from_rgba8(255, 128, 0, 255);
/// assert_eq!(orange.to_hex(), "#FF8000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components in the 0.0-1.0 range.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from 8-bit channel values.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Returns the color as 8-bit `[r, g, b, a]` channels, rounding to nearest.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    /// Snaps every channel onto the 8-bit grid.
    pub fn quantized(self) -> Self {
        let [r, g, b, a] = self.to_rgba8();
        Self::from_rgba8(r, g, b, a)
    }

    /// Same color with alpha forced to fully opaque.
    pub fn opaque(self) -> Self {
        Self { a: 1.0, ..self }
    }

    /// Decodes one Cairo `ARGB32` pixel (premultiplied, native endian).
    ///
    /// Color channels are un-premultiplied with rounding; a fully transparent
    /// pixel decodes to transparent black.
    pub fn from_argb32_premultiplied(pixel: u32) -> Self {
        let a = (pixel >> 24) as u8;
        let unpremultiply = |c: u8| -> u8 {
            if a == 0 {
                0
            } else {
                ((c as u32 * 255 + a as u32 / 2) / a as u32).min(255) as u8
            }
        };
        Self::from_rgba8(
            unpremultiply((pixel >> 16) as u8),
            unpremultiply((pixel >> 8) as u8),
            unpremultiply(pixel as u8),
            a,
        )
    }

    /// Interpolates between two colors on the 8-bit grid.
    ///
    /// `t` is clamped to 0.0-1.0; `t == 0.0` returns `self` and `t == 1.0`
    /// returns `other` exactly (after quantization).
    pub fn lerp_rgba8(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let from = self.to_rgba8();
        let to = other.to_rgba8();
        let mix = |i: usize| -> u8 {
            let a = from[i] as f64;
            let b = to[i] as f64;
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Color::from_rgba8(mix(0), mix(1), mix(2), mix(3))
    }

    /// Formats the color as `#RRGGBB` (alpha is not included).
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Perceived brightness (Rec. 601 weights), 0.0-1.0.
    pub fn luma(self) -> f64 {
        self.r * 0.299 + self.g * 0.587 + self.b * 0.114
    }
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Default foreground color restored by the reset button.
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Default background color restored by the reset button.
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Fully transparent color used to clear rasters.
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba8_round_trip_is_exact() {
        for value in [0u8, 1, 127, 128, 200, 254, 255] {
            let color = Color::from_rgba8(value, 255 - value, value / 2, 255);
            assert_eq!(color.to_rgba8(), [value, 255 - value, value / 2, 255]);
        }
    }

    #[test]
    fn unpremultiply_opaque_pixel_is_lossless() {
        let pixel: u32 = 0xFF_12_34_56;
        let color = Color::from_argb32_premultiplied(pixel);
        assert_eq!(color.to_rgba8(), [0x12, 0x34, 0x56, 0xFF]);
    }

    #[test]
    fn unpremultiply_half_alpha_restores_channels() {
        // 50% white premultiplied is 0x80 in every channel.
        let pixel: u32 = 0x80_80_80_80;
        let color = Color::from_argb32_premultiplied(pixel);
        assert_eq!(color.to_rgba8(), [255, 255, 255, 0x80]);
    }

    #[test]
    fn transparent_pixel_decodes_to_transparent_black() {
        assert_eq!(Color::from_argb32_premultiplied(0), TRANSPARENT);
    }

    #[test]
    fn lerp_hits_both_endpoints_exactly() {
        let top = Color::from_rgba8(10, 200, 30, 255);
        let bottom = Color::from_rgba8(250, 0, 90, 255);
        assert_eq!(top.lerp_rgba8(bottom, 0.0), top);
        assert_eq!(top.lerp_rgba8(bottom, 1.0), bottom);
        assert_eq!(top.lerp_rgba8(bottom, 0.5).to_rgba8(), [130, 100, 60, 255]);
    }

    #[test]
    fn hex_formatting_uses_uppercase_digits() {
        assert_eq!(WHITE.to_hex(), "#FFFFFF");
        assert_eq!(Color::from_rgba8(0x0a, 0xbc, 0x01, 255).to_hex(), "#0ABC01");
    }

    #[test]
    fn opaque_only_touches_alpha() {
        let c = Color::from_rgba8(1, 2, 3, 4).opaque();
        assert_eq!(c.to_rgba8(), [1, 2, 3, 255]);
    }
}
