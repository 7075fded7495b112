//! CSS-style colors
//!
//! Colors are kept in the form the drawing surface consumes (a CSS color
//! string), so the canvas backend can pass them straight to `fillStyle`.

use std::fmt;

/// A color as understood by a 2D canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Opaque color, rendered as `#rrggbb`
    Rgb(u8, u8, u8),
    /// Color with alpha in [0, 1], rendered as `rgba(r, g, b, a)`
    Rgba(u8, u8, u8, f32),
    /// Hue in degrees, saturation and lightness in percent
    Hsl { hue: f32, saturation: f32, lightness: f32 },
}

impl Color {
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);

    /// Translucent black used behind the game over text
    pub const OVERLAY: Color = Color::Rgba(0, 0, 0, 0.7);

    /// Obstacle palette entry: any hue at 50% saturation and lightness
    pub fn from_hue(hue: f32) -> Self {
        Color::Hsl {
            hue: hue.rem_euclid(360.0),
            saturation: 50.0,
            lightness: 50.0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({}, {}%, {}%)", hue, saturation, lightness),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_strings() {
        assert_eq!(Color::GREEN.to_string(), "#00ff00");
        assert_eq!(Color::WHITE.to_string(), "#ffffff");
        assert_eq!(Color::OVERLAY.to_string(), "rgba(0, 0, 0, 0.7)");
        assert_eq!(Color::from_hue(120.0).to_string(), "hsl(120, 50%, 50%)");
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(Color::from_hue(370.0), Color::from_hue(10.0));
    }
}
