//! The split disc: warm on the left, cool on the right, darker toward the
//! bottom, with an anti-aliased rim.

use image::{Rgba, RgbaImage};
use rayon::prelude::*;

use crate::canvas::Point;
use crate::color::{Color, Interpolation};
use crate::error::{ensure_positive, LogoError, Result};

/// One half of the disc: a bright top color shading toward `deep` at the
/// bottom, reaching at most `depth_mix` of the way there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscSide {
    pub bright: Color,
    pub deep: Color,
    pub depth_mix: f32,
}

impl DiscSide {
    /// Color at vertical position `v` (0 = top edge, 1 = bottom edge).
    pub fn at(&self, v: f32) -> Color {
        self.bright.lerp(self.deep, v * self.depth_mix)
    }
}

/// A disc whose color blends from the warm side on the left to the cool side
/// on the right, each side deepening toward the bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscSpec {
    pub center: Point,
    pub radius: f32,
    /// Left side.
    pub warm: DiscSide,
    /// Right side.
    pub cool: DiscSide,
    /// Width of the anti-aliased band just inside the rim, in pixels.
    pub edge_softness: f32,
}

impl DiscSpec {
    /// Checks the radius, edge softness and both depth mixes.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("disc", "radius", self.radius)?;
        ensure_positive("disc", "edge softness", self.edge_softness)?;
        for (name, mix) in [("warm", self.warm.depth_mix), ("cool", self.cool.depth_mix)] {
            if !(0.0..=1.0).contains(&mix) {
                return Err(LogoError::geometry(
                    "disc",
                    format!("{name} depth mix must be within 0..=1, got {mix}"),
                ));
            }
        }
        Ok(())
    }

    /// The same disc with the two sides swapped.
    pub fn mirrored(&self) -> Self {
        Self {
            warm: self.cool,
            cool: self.warm,
            ..*self
        }
    }

    /// Evaluates the pixel at `(x, y)`, or `None` when it lies outside the disc.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        let dx = x as f32 - self.center.x;
        let dy = y as f32 - self.center.y;
        let dist = dx.hypot(dy);
        if dist > self.radius {
            return None;
        }

        let h = dx / self.radius;
        let t = Interpolation::Smoothstep.remap((h + 1.0) / 2.0);
        let v = (dy / self.radius + 1.0) / 2.0;

        let warm = self.warm.at(v);
        let cool = self.cool.at(v);
        let color = warm.lerp(cool, t);

        let alpha = if dist > self.radius - self.edge_softness {
            (255.0 * (self.radius - dist) / self.edge_softness).clamp(0.0, 255.0) as u8
        } else {
            255
        };

        Some(Rgba([color.r, color.g, color.b, alpha]))
    }
}

/// Paints the disc into `image`, leaving pixels outside it untouched.
///
/// Rows are independent and rendered in parallel.
pub fn draw_split_disc(image: &mut RgbaImage, spec: &DiscSpec) -> Result<()> {
    spec.validate()?;
    if image.width() == 0 || image.height() == 0 {
        return Ok(());
    }
    log::debug!("drawing split disc r={} at {:?}", spec.radius, spec.center);

    let stride = image.width() as usize * 4;
    let buf: &mut [u8] = image;
    buf.par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                if let Some(color) = spec.pixel(x as u32, y as u32) {
                    px.copy_from_slice(&color.0);
                }
            }
        });
    Ok(())
}
