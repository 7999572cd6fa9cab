//! Soft light effects: a blurred, dimmed copy of a shape ("bloom") and
//! radial glows anchored on single points.

use image::{imageops, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, Point};
use crate::color::Color;
use crate::error::{ensure_positive, LogoError, Result};
use crate::layer::fade;

// ============================================================================
// Bloom
// ============================================================================

/// A Gaussian blur followed by a global opacity reduction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct BloomSpec {
    /// Standard deviation of the blur, in pixels.
    pub blur_radius: f32,
    /// Share of the blurred layer kept after mixing with transparency (0-1).
    pub opacity: f32,
}

impl BloomSpec {
    /// Creates bloom settings.
    pub fn new(blur_radius: f32, opacity: f32) -> Self {
        Self {
            blur_radius,
            opacity,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("bloom", "blur radius", self.blur_radius)?;
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(LogoError::geometry(
                "bloom",
                format!("opacity must be within 0..=1, got {}", self.opacity),
            ));
        }
        Ok(())
    }
}

impl Default for BloomSpec {
    fn default() -> Self {
        Self::new(20.0, 0.5)
    }
}

/// Produces a soft halo matching the silhouette and colors of `layer`.
///
/// `layer` is left untouched; the result is a new buffer.
pub fn bloom(layer: &RgbaImage, spec: &BloomSpec) -> Result<RgbaImage> {
    spec.validate()?;
    log::debug!(
        "bloom: blur σ={} opacity={}",
        spec.blur_radius,
        spec.opacity
    );
    let blurred = imageops::blur(layer, spec.blur_radius);
    Ok(fade(&blurred, spec.opacity))
}

// ============================================================================
// Point glow
// ============================================================================

/// Concentric-ring radial glow settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct PointGlowSpec {
    /// Radius of the outermost ring, in pixels.
    ///
    /// Not serialized: designs derive it from the canvas size.
    #[serde(skip)]
    pub radius: u32,
    /// Alpha the rings approach at the center.
    pub peak_alpha: u8,
    /// Radius decrement between rings, in pixels.
    pub ring_step: u32,
    /// Blur applied to the finished rings.
    pub blur_radius: f32,
}

impl PointGlowSpec {
    pub fn validate(&self) -> Result<()> {
        if self.radius == 0 {
            return Err(LogoError::geometry("point glow", "radius must be at least 1"));
        }
        if self.ring_step == 0 {
            return Err(LogoError::geometry("point glow", "ring step must be at least 1"));
        }
        ensure_positive("point glow", "blur radius", self.blur_radius)
    }

    /// Alpha of the ring with radius `ring`: fades to zero at the outer edge.
    pub fn ring_alpha(&self, ring: u32) -> u8 {
        (self.peak_alpha as f32 * (1.0 - ring as f32 / self.radius as f32)) as u8
    }

    /// Ring radii from the outermost inward, stopping before zero.
    pub fn rings(&self) -> impl Iterator<Item = u32> {
        (1..=self.radius).rev().step_by(self.ring_step as usize)
    }
}

/// Renders glows of the given colors centered on each anchor into a new
/// `size x size` layer, then blurs it.
///
/// Each ring replaces the pixels beneath it, so every anchor gets a falloff
/// from `peak_alpha` near its center to transparent at `radius`.
pub fn point_glows(size: u32, anchors: &[(Point, Color)], spec: &PointGlowSpec) -> Result<RgbaImage> {
    spec.validate()?;
    let mut canvas = Canvas::new(size)?;
    for &(center, color) in anchors {
        log::debug!("point glow at {center:?} r={}", spec.radius);
        for ring in spec.rings() {
            canvas.replace_circle(center, ring as f32, color.with_alpha(spec.ring_alpha(ring)));
        }
    }
    Ok(imageops::blur(&canvas.into_image(), spec.blur_radius))
}

impl Default for PointGlowSpec {
    fn default() -> Self {
        Self {
            radius: 81,
            peak_alpha: 60,
            ring_step: 2,
            blur_radius: 15.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn bloom_leaves_source_untouched_and_dims_it() {
        let mut layer = RgbaImage::new(48, 48);
        for y in 16..32 {
            for x in 16..32 {
                layer.put_pixel(x, y, Rgba([255, 149, 0, 255]));
            }
        }
        let original = layer.clone();

        let halo = bloom(&layer, &BloomSpec::new(3.0, 0.5)).unwrap();
        assert_eq!(layer, original);

        // Inside the block the blur barely changes alpha, so the fade halves it.
        let center = halo.get_pixel(24, 24)[3];
        assert!((120..=128).contains(&center), "center alpha {center}");
        // Light spills past the silhouette.
        assert!(halo.get_pixel(33, 24)[3] > 0);
        assert_eq!(halo.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn bloom_rejects_bad_settings() {
        let layer = RgbaImage::new(4, 4);
        assert!(bloom(&layer, &BloomSpec::new(0.0, 0.5)).is_err());
        assert!(bloom(&layer, &BloomSpec::new(2.0, 1.5)).is_err());
    }

    #[test]
    fn ring_alpha_fades_outward() {
        let spec = PointGlowSpec::default();
        assert_eq!(spec.ring_alpha(spec.radius), 0);
        assert!(spec.ring_alpha(1) > spec.ring_alpha(40));
        assert!(spec.ring_alpha(1) <= spec.peak_alpha);
    }

    #[test]
    fn rings_step_inward_and_skip_zero() {
        let spec = PointGlowSpec {
            radius: 7,
            ring_step: 2,
            ..PointGlowSpec::default()
        };
        assert_eq!(spec.rings().collect::<Vec<_>>(), vec![7, 5, 3, 1]);
    }

    #[test]
    fn point_glow_is_brightest_at_the_anchor() {
        let spec = PointGlowSpec {
            radius: 16,
            peak_alpha: 60,
            ring_step: 2,
            blur_radius: 2.0,
        };
        let anchor = Point::new(32.0, 32.0);
        let glow = point_glows(64, &[(anchor, Color::rgb(0, 122, 255))], &spec).unwrap();

        let center = glow.get_pixel(32, 32)[3];
        let mid = glow.get_pixel(40, 32)[3];
        let outside = glow.get_pixel(60, 32)[3];
        assert!(center > mid, "center {center} mid {mid}");
        assert!(mid > outside);
        assert!(center <= 60);
        assert_eq!(glow.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn point_glow_rejects_zero_radius() {
        let spec = PointGlowSpec {
            radius: 0,
            ..PointGlowSpec::default()
        };
        assert!(point_glows(32, &[], &spec).is_err());
    }
}
