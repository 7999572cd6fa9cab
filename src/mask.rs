//! Shape masks and the cropped variants derived from a finished logo.

use image::{GrayImage, Luma, Rgba, RgbaImage};
use resvg::tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Transform};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{LogoError, Result};

/// Control point distance for approximating a quarter circle with a cubic.
const KAPPA: f32 = 0.552_284_8;

// ============================================================================
// Variant
// ============================================================================

/// A cropped rendition of a logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum Variant {
    /// Square with rounded corners, as used by app launchers with squircle icons.
    Rounded,
    /// Full inscribed circle.
    Circle,
}

impl Variant {
    /// Every variant, in output order.
    pub const ALL: [Variant; 2] = [Variant::Rounded, Variant::Circle];

    /// File name suffix for this variant.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Rounded => "rounded",
            Self::Circle => "circle",
        }
    }
}

// ============================================================================
// Mask
// ============================================================================

/// Shape a [`Mask`] is cut from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaskShape {
    /// The whole canvas with corners rounded to `corner_radius` pixels.
    RoundedRect { corner_radius: f32 },
    /// The circle inscribed in the canvas.
    Circle,
}

/// A single-channel visibility mask: 0 hides a pixel, 255 keeps it.
///
/// Masks are rasterized without anti-aliasing, so every value is 0 or 255.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask(GrayImage);

impl Mask {
    /// Rasterizes `shape` into a `size x size` mask.
    pub fn new(size: u32, shape: MaskShape) -> Result<Self> {
        let mut pixmap = Pixmap::new(size, size).ok_or(LogoError::Allocation {
            width: size,
            height: size,
        })?;

        let extent = size as f32;
        let path = match shape {
            MaskShape::RoundedRect { corner_radius } => rounded_rect_path(extent, corner_radius),
            MaskShape::Circle => {
                let half = extent / 2.0;
                PathBuilder::from_circle(half, half, half)
            }
        }
        .ok_or_else(|| LogoError::geometry("mask", format!("cannot build {shape:?} path")))?;

        let mut paint = Paint::default();
        paint.set_color(Color::rgb(255, 255, 255).to_skia());
        paint.anti_alias = false;
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

        let pixels = pixmap.pixels();
        let mask = GrayImage::from_fn(size, size, |x, y| {
            Luma([pixels[(y * size + x) as usize].alpha()])
        });
        log::debug!("built {shape:?} mask at {size}px");
        Ok(Self(mask))
    }

    /// A full-canvas mask with rounded corners.
    pub fn rounded_rect(size: u32, corner_radius: f32) -> Result<Self> {
        Self::new(size, MaskShape::RoundedRect { corner_radius })
    }

    /// The circle inscribed in a `size x size` canvas.
    pub fn circle(size: u32) -> Result<Self> {
        Self::new(size, MaskShape::Circle)
    }

    /// Edge length of the square mask.
    pub fn size(&self) -> u32 {
        self.0.width()
    }

    /// Mask value at `(x, y)`: 0 or 255.
    pub fn value(&self, x: u32, y: u32) -> u8 {
        self.0.get_pixel(x, y)[0]
    }

    /// The underlying single-channel buffer.
    pub fn as_image(&self) -> &GrayImage {
        &self.0
    }

    /// Copies `image` into a fresh transparent buffer, keeping only the
    /// pixels this mask covers. The input is not modified.
    pub fn apply(&self, image: &RgbaImage) -> Result<RgbaImage> {
        if image.dimensions() != self.0.dimensions() {
            return Err(LogoError::SizeMismatch {
                expected: self.size(),
                found_width: image.width(),
                found_height: image.height(),
            });
        }

        let mut out = RgbaImage::new(image.width(), image.height());
        for ((dst, src), m) in out.pixels_mut().zip(image.pixels()).zip(self.0.pixels()) {
            let m = m[0] as u16;
            if m == 0 {
                continue;
            }
            let [r, g, b, a] = src.0;
            *dst = Rgba([r, g, b, (a as u16 * m / 255) as u8]);
        }
        Ok(out)
    }
}

/// A `size x size` square with quarter-circle corners of `radius`.
fn rounded_rect_path(size: f32, radius: f32) -> Option<Path> {
    if !radius.is_finite() || radius < 0.0 {
        return None;
    }
    let r = radius.min(size / 2.0);
    if r == 0.0 {
        return Some(PathBuilder::from_rect(Rect::from_xywh(0.0, 0.0, size, size)?));
    }
    let k = r * KAPPA;
    let s = size;

    let mut pb = PathBuilder::new();
    pb.move_to(r, 0.0);
    pb.line_to(s - r, 0.0);
    pb.cubic_to(s - r + k, 0.0, s, r - k, s, r);
    pb.line_to(s, s - r);
    pb.cubic_to(s, s - r + k, s - r + k, s, s - r, s);
    pb.line_to(r, s);
    pb.cubic_to(r - k, s, 0.0, s - r + k, 0.0, s - r);
    pb.line_to(0.0, r);
    pb.cubic_to(0.0, r - k, r - k, 0.0, r, 0.0);
    pb.close();
    pb.finish()
}
