use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The HSV value component, `max(r, g, b) / 255`.
    #[inline]
    pub fn value(self) -> f64 {
        self.r.max(self.g).max(self.b) as f64 / 255.0
    }

    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_uses_brightest_channel() {
        assert_eq!(Color::BLACK.value(), 0.0);
        assert_eq!(Color::WHITE.value(), 1.0);
        assert_eq!(Color::new(10, 255, 30).value(), 1.0);
        assert!((Color::new(51, 0, 0).value() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(Color::new(255, 16, 0).to_string(), "#ff1000");
    }
}
