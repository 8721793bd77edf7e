//! Basic value types for rendering.

use std::fmt;
use std::str::FromStr;

/// A packed 32-bit color in `0xAARRGGBB` order with straight (non-premultiplied)
/// alpha.
///
/// Interpolation with [`lerp`](Self::lerp) blends each of the four 8-bit
/// channels independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(u32);

impl Color {
    /// Create a color from a packed `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb_u32(argb: u32) -> Self {
        Self(argb)
    }

    /// Create a color from 8-bit ARGB components.
    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    /// Create a color from a hex string.
    ///
    /// Accepts `#RRGGBB` (opaque) and `#AARRGGBB`; the leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            6 => u32::from_str_radix(hex, 16)
                .ok()
                .map(|rgb| Self(0xFF00_0000 | rgb)),
            8 => u32::from_str_radix(hex, 16).ok().map(Self),
            _ => None,
        }
    }

    /// The packed `0xAARRGGBB` value.
    #[inline]
    pub const fn to_argb_u32(self) -> u32 {
        self.0
    }

    /// Alpha channel.
    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Return a new color with modified alpha.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }

    /// Channel-wise linear interpolation between two colors.
    ///
    /// `t` is clamped to `0.0..=1.0`; `t == 0.0` yields `self` and `t == 1.0`
    /// yields `other` exactly.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |from: u8, to: u8| -> u8 {
            let from = f32::from(from);
            let to = f32::from(to);
            (from + (to - from) * t).round().clamp(0.0, 255.0) as u8
        };
        Self::from_argb(
            mix(self.alpha(), other.alpha()),
            mix(self.red(), other.red()),
            mix(self.green(), other.green()),
            mix(self.blue(), other.blue()),
        )
    }

    /// Format as `#AARRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:08X}", self.0)
    }

    // Common colors
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    pub const RED: Self = Self(0xFFFF_0000);
    pub const GREEN: Self = Self(0xFF00_FF00);
    pub const BLUE: Self = Self(0xFF00_00FF);
    pub const MAGENTA: Self = Self(0xFFFF_00FF);
    pub const GRAY: Self = Self(0xFF88_8888);
    pub const DARK_GRAY: Self = Self(0xFF44_4444);
    pub const LIGHT_GRAY: Self = Self(0xFFCC_CCCC);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// Error returned when parsing a [`Color`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| ParseColorError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let c = Color::from_argb(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.to_argb_u32(), 0x1122_3344);
        assert_eq!(c.alpha(), 0x11);
        assert_eq!(c.red(), 0x22);
        assert_eq!(c.green(), 0x33);
        assert_eq!(c.blue(), 0x44);
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#FF00FF"), Some(Color::MAGENTA));
        assert_eq!(Color::from_hex("AAAAAA"), Some(Color::from_argb_u32(0xFFAA_AAAA)));
        assert_eq!(Color::from_hex("#80FF0000"), Some(Color::from_argb(0x80, 0xFF, 0, 0)));
        assert_eq!(Color::from_hex("#FFF"), None);
        assert_eq!(Color::from_hex("#GGGGGG"), None);
        // Sign prefixes are not hex digits
        assert_eq!(Color::from_hex("#+12345"), None);
        assert_eq!(Color::from_hex("+1234567"), None);
        assert_eq!(Color::from_hex(""), None);
    }

    #[test]
    fn test_from_str_and_display() {
        let c: Color = "#aaaaaa".parse().unwrap();
        assert_eq!(c.to_string(), "#FFAAAAAA");
        assert_eq!(c.to_hex(), "#FFAAAAAA");
        assert!("nope".parse::<Color>().is_err());
    }

    #[test]
    fn test_lerp_endpoints() {
        let from = Color::from_hex("#AAAAAA").unwrap();
        let to = Color::MAGENTA;
        assert_eq!(from.lerp(to, 0.0), from);
        assert_eq!(from.lerp(to, 1.0), to);
        // Clamped outside the unit range
        assert_eq!(from.lerp(to, -1.0), from);
        assert_eq!(from.lerp(to, 2.0), to);
    }

    #[test]
    fn test_lerp_channelwise() {
        let from = Color::from_argb(0x00, 0x00, 0xFF, 0x10);
        let to = Color::from_argb(0xFF, 0xFF, 0x00, 0x10);
        let mid = from.lerp(to, 0.5);
        assert_eq!(mid.alpha(), 0x80);
        assert_eq!(mid.red(), 0x80);
        assert_eq!(mid.green(), 0x80);
        assert_eq!(mid.blue(), 0x10);
    }

    #[test]
    fn test_with_alpha() {
        let c = Color::MAGENTA.with_alpha(0x40);
        assert_eq!(c.to_argb_u32(), 0x40FF_00FF);
    }

    #[test]
    fn test_named_defaults() {
        assert_eq!(Color::LIGHT_GRAY.to_argb_u32(), 0xFFCC_CCCC);
        assert_eq!(Color::MAGENTA.to_argb_u32(), 0xFFFF_00FF);
    }
}
