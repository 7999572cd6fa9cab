//! Serializable rendering profile.
//!
//! A [`LogoProfile`] holds every color, ratio and tuned constant the designs
//! use. Geometry is expressed as ratios of the canvas size, so the same
//! profile renders at any resolution.
//!
//! # Example
//!
//! ```
//! use aura_logo::{LogoProfile, CanvasSettings};
//!
//! let profile = LogoProfile::new().with_canvas(CanvasSettings {
//!     size: 512,
//!     ..CanvasSettings::default()
//! });
//!
//! let json = profile.to_json().unwrap();
//! let restored = LogoProfile::from_json(&json).unwrap();
//! assert_eq!(restored.canvas.size, 512);
//! ```
//!
//! Every field has a default, so partial JSON such as
//! `{ "canvas": { "size": 256 } }` is accepted.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{LogoError, Result};
use crate::glow::{BloomSpec, PointGlowSpec};

// ============================================================================
// Sections
// ============================================================================

/// Size and background of the base canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct CanvasSettings {
    /// Side length in pixels.
    pub size: u32,
    pub background: Color,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            size: 1024,
            background: Color::rgb(250, 250, 252),
        }
    }
}

impl CanvasSettings {
    /// `ratio` of the side length, truncated to whole pixels.
    pub fn px(&self, ratio: f32) -> f32 {
        (self.size as f32 * ratio).floor()
    }

    /// Center of the canvas on whole pixels.
    pub fn center(&self) -> f32 {
        (self.size / 2) as f32
    }
}

/// The warm/cool color scheme shared by all designs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct PaletteSettings {
    pub warm_orange: Color,
    pub warm_deep: Color,
    pub cool_blue: Color,
    pub cool_purple: Color,
    pub cool_teal: Color,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            warm_orange: Color::rgb(255, 149, 0),
            warm_deep: Color::rgb(255, 94, 58),
            cool_blue: Color::rgb(0, 122, 255),
            cool_purple: Color::rgb(175, 82, 222),
            cool_teal: Color::rgb(90, 200, 250),
        }
    }
}

/// Angular extent of one arc, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ArcSweep {
    pub start: f32,
    pub end: f32,
}

/// Design A: two facing arcs with a bloom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct DualArcSettings {
    pub radius_ratio: f32,
    pub width_ratio: f32,
    /// Warm arc over the top.
    pub upper: ArcSweep,
    /// Cool arc under the bottom.
    pub lower: ArcSweep,
    pub bloom: BloomSpec,
}

impl Default for DualArcSettings {
    fn default() -> Self {
        Self {
            radius_ratio: 0.35,
            width_ratio: 0.08,
            upper: ArcSweep {
                start: -160.0,
                end: -20.0,
            },
            lower: ArcSweep {
                start: 20.0,
                end: 160.0,
            },
            bloom: BloomSpec::new(20.0, 0.5),
        }
    }
}

/// Soft dark ring just inside the disc edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ShadowSettings {
    pub enabled: bool,
    pub color: Color,
    /// Ring width in pixels.
    pub width: f32,
    pub blur_radius: f32,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            color: Color::rgba(0, 0, 0, 30),
            width: 8.0,
            blur_radius: 10.0,
        }
    }
}

/// Design B: the warm/cool split disc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct SunsetSettings {
    pub radius_ratio: f32,
    /// How far the warm side shades toward the deep warm color at the bottom.
    pub warm_depth_mix: f32,
    /// How far the cool side shades toward blue at the bottom.
    pub cool_depth_mix: f32,
    /// Width of the anti-aliased rim, in pixels.
    pub edge_softness: f32,
    pub shadow: ShadowSettings,
}

impl Default for SunsetSettings {
    fn default() -> Self {
        Self {
            radius_ratio: 0.38,
            warm_depth_mix: 0.3,
            cool_depth_mix: 0.5,
            edge_softness: 2.0,
            shadow: ShadowSettings::default(),
        }
    }
}

/// Design C: the light trace curve with glowing ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct TraceSettings {
    /// Half the horizontal span, relative to the canvas.
    pub amplitude_ratio: f32,
    /// Vertical swing relative to the horizontal amplitude.
    pub vertical_ratio: f32,
    pub width_ratio: f32,
    pub steps: u32,
    /// Sine phase at the start of the curve, radians.
    pub phase: f32,
    /// Sine angle covered by the curve, radians.
    pub sweep: f32,
    pub bloom: BloomSpec,
    /// End-point glow radius relative to the canvas.
    pub glow_radius_ratio: f32,
    /// Ring settings for the end-point glows. The ring radius comes from
    /// `glow_radius_ratio` and is not read from JSON.
    pub point_glow: PointGlowSpec,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            amplitude_ratio: 0.25,
            vertical_ratio: 0.6,
            width_ratio: 0.045,
            steps: crate::raster::CURVE_STEPS,
            phase: -PI * 0.25,
            sweep: PI * 1.5,
            bloom: BloomSpec::new(25.0, 0.4),
            glow_radius_ratio: 0.08,
            point_glow: PointGlowSpec::default(),
        }
    }
}

/// Settings for the cropped variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct VariantSettings {
    /// Corner radius of the rounded variant relative to the canvas.
    pub corner_radius_ratio: f32,
}

impl Default for VariantSettings {
    fn default() -> Self {
        Self {
            corner_radius_ratio: 0.2237,
        }
    }
}

// ============================================================================
// LogoProfile
// ============================================================================

/// All rendering settings.
///
/// # JSON Format
///
/// ```json
/// {
///   "canvas": { "size": 1024, "background": "#fafafc" },
///   "palette": { "warmOrange": "#ff9500", ... },
///   "dualArcs": { "radiusRatio": 0.35, ... },
///   "sunset": { "radiusRatio": 0.38, ... },
///   "trace": { "amplitudeRatio": 0.25, ... },
///   "variants": { "cornerRadiusRatio": 0.2237 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct LogoProfile {
    pub canvas: CanvasSettings,
    pub palette: PaletteSettings,
    pub dual_arcs: DualArcSettings,
    pub sunset: SunsetSettings,
    pub trace: TraceSettings,
    pub variants: VariantSettings,
}

impl LogoProfile {
    /// Creates a profile with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the canvas size and background.
    pub fn with_canvas(mut self, canvas: CanvasSettings) -> Self {
        self.canvas = canvas;
        self
    }

    /// Shorthand for changing only the canvas size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.canvas.size = size;
        self
    }

    /// Sets the five design colors.
    pub fn with_palette(mut self, palette: PaletteSettings) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the dual-arc design settings.
    pub fn with_dual_arcs(mut self, settings: DualArcSettings) -> Self {
        self.dual_arcs = settings;
        self
    }

    /// Sets the sunset design settings.
    pub fn with_sunset(mut self, settings: SunsetSettings) -> Self {
        self.sunset = settings;
        self
    }

    /// Sets the light-trace design settings.
    pub fn with_trace(mut self, settings: TraceSettings) -> Self {
        self.trace = settings;
        self
    }

    /// Sets the cropped-variant settings.
    pub fn with_variants(mut self, settings: VariantSettings) -> Self {
        self.variants = settings;
        self
    }

    /// Checks settings that are not tied to a single shape.
    ///
    /// Shape geometry (radii, widths, sweeps) is validated by each rasterizer
    /// when the design is rendered.
    pub fn validate(&self) -> Result<()> {
        if self.canvas.size == 0 {
            return Err(LogoError::geometry("canvas", "size must be at least 1 pixel"));
        }
        let ratio = self.variants.corner_radius_ratio;
        if !(0.0..=0.5).contains(&ratio) {
            return Err(LogoError::geometry(
                "mask",
                format!("corner radius ratio must be within 0..=0.5, got {ratio}"),
            ));
        }
        Ok(())
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// JSON Schema describing the profile format.
    #[cfg(feature = "jsonschema")]
    pub fn json_schema_pretty() -> Result<String> {
        let schema = schemars::schema_for!(LogoProfile);
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}

// ============================================================================
// Tests
// ============================================================================
