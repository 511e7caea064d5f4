//! RGB colour type.

use std::fmt;

use crate::types::Hsb;

/// An RGB colour value.
///
/// Alpha is not carried: the conversion pipeline reads only the first three
/// channels of a pixel buffer and ignores any others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new colour from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Brightness of the colour as `max(r, g, b) / 255`.
    ///
    /// This is the cheap shortcut used for glyph selection. It agrees with
    /// the `v` component of [`Rgb::to_hsb`] but skips the hue and saturation
    /// work.
    pub fn brightness(self) -> f64 {
        f64::from(self.r.max(self.g).max(self.b)) / 255.0
    }

    /// Convert to Hue/Saturation/Brightness.
    pub fn to_hsb(self) -> Hsb {
        Hsb::from_rgb(self.r, self.g, self.b)
    }

    /// Convert to an RGB array.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_uses_max_channel() {
        assert_eq!(Rgb::new(255, 0, 0).brightness(), 1.0);
        assert_eq!(Rgb::new(0, 128, 64).brightness(), 128.0 / 255.0);
        assert_eq!(Rgb::BLACK.brightness(), 0.0);
        assert_eq!(Rgb::WHITE.brightness(), 1.0);
    }

    #[test]
    fn test_brightness_matches_hsb_value() {
        // The shortcut and the full conversion agree on v for any colour.
        for &(r, g, b) in &[(12, 200, 99), (255, 255, 0), (1, 2, 3), (0, 0, 0)] {
            let c = Rgb::new(r, g, b);
            assert_eq!(c.brightness(), c.to_hsb().v);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Rgb::new(255, 0, 0)), "#FF0000");
        assert_eq!(format!("{}", Rgb::new(0x1a, 0x1a, 0x2e)), "#1A1A2E");
    }

    #[test]
    fn test_from_array() {
        assert_eq!(Rgb::from([10, 20, 30]), Rgb::new(10, 20, 30));
        assert_eq!(Rgb::new(10, 20, 30).to_array(), [10, 20, 30]);
    }
}
