//! Drawing surface backed by a tiny-skia pixmap.
//!
//! Rasterizers draw anti-aliased primitives into a [`Canvas`] and convert the
//! result into a straight-alpha [`RgbaImage`] before compositing.

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{
    BlendMode, FillRule, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform,
};

use crate::color::Color;
use crate::error::{LogoError, Result};

// ============================================================================
// Point
// ============================================================================

/// A position in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Creates a point from pixel coordinates.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The point at `degrees` on the circle of `radius` around `self`.
    ///
    /// Angles follow screen orientation: 0° points right, 90° points down.
    pub fn on_circle(self, radius: f32, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(self.x + radius * cos, self.y + radius * sin)
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

// ============================================================================
// Canvas
// ============================================================================

/// A square premultiplied drawing surface.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocates a fully transparent `size x size` canvas.
    pub fn new(size: u32) -> Result<Self> {
        let pixmap = Pixmap::new(size, size).ok_or(LogoError::Allocation {
            width: size,
            height: size,
        })?;
        Ok(Self { pixmap })
    }

    /// Allocates a canvas filled with `color`.
    pub fn filled(size: u32, color: Color) -> Result<Self> {
        let mut canvas = Self::new(size)?;
        canvas.pixmap.fill(color.to_skia());
        Ok(canvas)
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    /// The pixel center of the canvas (`size / 2` on both axes).
    pub fn center(&self) -> Point {
        let c = (self.size() / 2) as f32;
        Point::new(c, c)
    }

    /// Strokes a straight line with flat ends.
    pub fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x, from.y);
        pb.line_to(to.x, to.y);
        let Some(path) = pb.finish() else {
            return;
        };

        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint(color, BlendMode::SourceOver),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    /// Fills a circle, blending over existing pixels.
    pub fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.circle(center, radius, color, BlendMode::SourceOver);
    }

    /// Fills a circle, replacing the pixels it covers instead of blending.
    ///
    /// Successive calls with shrinking radii build a radial falloff where each
    /// ring keeps exactly the alpha it was drawn with.
    pub fn replace_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.circle(center, radius, color, BlendMode::Source);
    }

    /// Strokes a circle outline centered on `radius`.
    pub fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Color) {
        let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) else {
            return;
        };
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint(color, BlendMode::SourceOver),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    fn circle(&mut self, center: Point, radius: f32, color: Color, blend_mode: BlendMode) {
        let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(color, blend_mode),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Converts to a straight-alpha image.
    pub fn into_image(self) -> RgbaImage {
        pixmap_to_rgba_image(&self.pixmap)
    }
}

fn paint(color: Color, blend_mode: BlendMode) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = true;
    paint.blend_mode = blend_mode;
    paint
}

/// Converts a tiny-skia pixmap to an `RgbaImage`, undoing premultiplication.
pub(crate) fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let mut img = RgbaImage::new(width, pixmap.height());

    for (i, px) in pixmap.pixels().iter().enumerate() {
        let (r, g, b, a) = unpremultiply(px.red(), px.green(), px.blue(), px.alpha());
        let i = i as u32;
        img.put_pixel(i % width, i / width, Rgba([r, g, b, a]));
    }

    img
}

fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}
