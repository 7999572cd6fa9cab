//! Color values and the interpolation rules shared by every rasterizer.

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use palette::{Hsl, IntoColor, Srgb};
use resvg::tiny_skia;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Color
// ============================================================================

/// An 8-bit straight-alpha color.
///
/// Serializes as a `#rrggbb` hex string, or `#rrggbbaa` when not opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with straight (non-premultiplied) alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Converts to an `image` pixel.
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }

    /// Converts to a tiny-skia paint color.
    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }

    /// Hue angle in degrees (0-360), ignoring alpha.
    pub fn hue(self) -> f32 {
        let rgb = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );
        let hsl: Hsl = rgb.into_color();
        hsl.hue.into_positive_degrees()
    }

    /// Blends every channel (alpha included) toward `end` by `t`, truncating.
    ///
    /// `t` is expected in `[0, 1]`; other values extrapolate.
    pub fn lerp(self, end: Self, t: f32) -> Self {
        let mix = |s: u8, e: u8| -> u8 { (s as f32 * (1.0 - t) + e as f32 * t) as u8 };
        Self {
            r: mix(self.r, end.r),
            g: mix(self.g, end.g),
            b: mix(self.b, end.b),
            a: mix(self.a, end.a),
        }
    }
}

impl From<Rgba<u8>> for Color {
    fn from(px: Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Self { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// Error returned when a color string is not `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {0:?}, expected #rrggbb or #rrggbbaa")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return Err(err());
        }
        let (rgb, alpha) = match hex.len() {
            6 => (hex, None),
            8 => (&hex[..6], Some(&hex[6..])),
            _ => return Err(err()),
        };

        let rgb: Srgb<u8> = rgb.parse().map_err(|_| err())?;
        let a = match alpha {
            Some(a) => u8::from_str_radix(a, 16).map_err(|_| err())?,
            None => 255,
        };
        Ok(Self::rgba(rgb.red, rgb.green, rgb.blue, a))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "jsonschema")]
impl schemars::JsonSchema for Color {
    fn schema_name() -> String {
        "Color".to_string()
    }

    fn json_schema(generator: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(generator)
    }
}

// ============================================================================
// Interpolation
// ============================================================================

/// Cubic ease `3t² - 2t³`.
pub fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// How the blend parameter is shaped before mixing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum Interpolation {
    #[default]
    Linear,
    /// Ease-in/ease-out, used where a hard midline would look unnatural.
    Smoothstep,
}

impl Interpolation {
    /// Maps a linear `t` onto this curve.
    pub fn remap(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::Smoothstep => smoothstep(t),
        }
    }
}

/// Two anchor colors and an interpolation mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSpec {
    pub start: Color,
    pub end: Color,
    pub mode: Interpolation,
}

impl GradientSpec {
    /// A gradient blending linearly from `start` to `end`.
    pub fn linear(start: Color, end: Color) -> Self {
        Self {
            start,
            end,
            mode: Interpolation::Linear,
        }
    }

    /// A gradient that eases in and out between `start` and `end`.
    pub fn smoothstep(start: Color, end: Color) -> Self {
        Self {
            start,
            end,
            mode: Interpolation::Smoothstep,
        }
    }

    /// Color at `t` in `[0, 1]`.
    pub fn at(&self, t: f32) -> Color {
        self.start.lerp(self.end, self.mode.remap(t))
    }
}

/// Colors pinned at t=0, t=0.5 and t=1, blended linearly within each half.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreeStopGradient {
    pub start: Color,
    pub mid: Color,
    pub end: Color,
}

impl ThreeStopGradient {
    /// Creates a gradient passing through `mid` at `t = 0.5`.
    pub fn new(start: Color, mid: Color, end: Color) -> Self {
        Self { start, mid, end }
    }

    /// Color at `t`: `start -> mid` over the first half, `mid -> end` over the second.
    pub fn at(&self, t: f32) -> Color {
        if t < 0.5 {
            self.start.lerp(self.mid, t * 2.0)
        } else {
            self.mid.lerp(self.end, (t - 0.5) * 2.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORANGE: Color = Color::rgb(255, 149, 0);
    const BLUE: Color = Color::rgb(0, 122, 255);
    const PURPLE: Color = Color::rgb(175, 82, 222);

    #[test]
    fn endpoints_are_exact_in_both_modes() {
        let pairs = [(ORANGE, BLUE), (BLUE, PURPLE), (Color::rgb(1, 2, 3), Color::rgb(254, 253, 252))];
        for (a, b) in pairs {
            for gradient in [GradientSpec::linear(a, b), GradientSpec::smoothstep(a, b)] {
                assert_eq!(gradient.at(0.0), a);
                assert_eq!(gradient.at(1.0), b);
            }
        }
    }

    #[test]
    fn smoothstep_matches_linear_at_midpoint() {
        assert_eq!(smoothstep(0.5), 0.5);
        assert_eq!(
            GradientSpec::smoothstep(ORANGE, BLUE).at(0.5),
            GradientSpec::linear(ORANGE, BLUE).at(0.5)
        );
    }

    #[test]
    fn smoothstep_eases_toward_endpoints() {
        assert!(smoothstep(0.1) < 0.1);
        assert!(smoothstep(0.9) > 0.9);
    }

    #[test]
    fn linear_blend_truncates_per_channel() {
        let mid = ORANGE.lerp(BLUE, 0.5);
        assert_eq!(mid, Color::rgb(127, 135, 127));
    }

    #[test]
    fn three_stop_gradient_hits_each_stop() {
        let gradient = ThreeStopGradient::new(ORANGE, PURPLE, BLUE);
        assert_eq!(gradient.at(0.0), ORANGE);
        assert_eq!(gradient.at(0.5), PURPLE);
        assert_eq!(gradient.at(1.0), BLUE);
    }

    #[test]
    fn hex_formatting_and_parsing() {
        assert_eq!(ORANGE.to_string(), "#ff9500");
        assert_eq!("#ff9500".parse::<Color>().unwrap(), ORANGE);
        assert_eq!("ff9500".parse::<Color>().unwrap(), ORANGE);

        let translucent = Color::rgba(0, 0, 0, 30);
        assert_eq!(translucent.to_string(), "#0000001e");
        assert_eq!("#0000001e".parse::<Color>().unwrap(), translucent);

        assert!("#ff95".parse::<Color>().is_err());
        assert!("#gg9500".parse::<Color>().is_err());
    }

    #[test]
    fn hue_separates_warm_and_cool() {
        assert!(ORANGE.hue() < 60.0);
        let blue_hue = BLUE.hue();
        assert!((200.0..230.0).contains(&blue_hue), "blue hue was {blue_hue}");
    }
}
