/// RGBA color with premultiplied alpha, channels in `0.0..=1.0`.
///
/// Channels reach the surface unchanged. The default surface format is not
/// sRGB-encoded, so byte colors come out exactly as written.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self::from_premul(0.0, 0.0, 0.0, 0.0)
    }

    /// Opaque color from 8-bit channels, as found in color tables and hex
    /// literals.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8) -> Self {
        let unit = |v: u8| v as f32 / 255.0;
        Self::from_premul(unit(r), unit(g), unit(b), 1.0)
    }

    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Premultiplies straight-alpha channels, clamping each to `0..=1`.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self::from_premul(r.clamp(0.0, 1.0) * a, g.clamp(0.0, 1.0) * a, b.clamp(0.0, 1.0) * a, a)
    }

    /// Channels in shader order.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_channels_are_opaque_and_exact() {
        let c = Color::from_srgb_u8(255, 0, 51);
        assert_eq!(c, Color::from_premul(1.0, 0.0, 0.2, 1.0));
    }

    #[test]
    fn straight_alpha_is_premultiplied() {
        let c = Color::from_straight(1.0, 0.5, 2.0, 0.5);
        assert_eq!(c.to_array(), [0.5, 0.25, 0.5, 0.5]);
    }

    #[test]
    fn default_is_transparent() {
        assert_eq!(Color::default(), Color::transparent());
    }
}
