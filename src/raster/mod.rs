//! Rasterizers that turn closed-form shapes into pixels.
//!
//! Arcs and curves are drawn as runs of short straight segments, each with its
//! own color, which stands in for a gradient stroke. The split disc is
//! evaluated per pixel.

pub mod arc;
pub mod curve;
pub mod disc;

pub use arc::{draw_gradient_arc, ArcSpec, ARC_STEPS};
pub use curve::{draw_curve, CurveEnds, CurveSpec, CURVE_STEPS};
pub use disc::{draw_split_disc, DiscSide, DiscSpec};

use crate::canvas::{Canvas, Point};
use crate::color::Color;

/// How far each segment (except the last) runs past its end point.
///
/// Flat-capped segments that only touch leave a faint anti-aliasing seam
/// where they meet; overlapping by more than a pixel diagonal hides it.
const SEAM_OVERLAP: f32 = 1.5;

/// One straight piece of a gradient stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub color: Color,
}

impl Segment {
    /// Length of the segment in pixels.
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }

    /// The end point pushed `by` pixels further along the segment direction.
    fn extended_end(&self, by: f32) -> Point {
        let len = self.length();
        if len <= f32::EPSILON {
            return self.to;
        }
        let scale = by / len;
        Point::new(
            self.to.x + (self.to.x - self.from.x) * scale,
            self.to.y + (self.to.y - self.from.y) * scale,
        )
    }
}

/// Draws consecutive segments at a common stroke width, in order.
pub(crate) fn draw_segments(canvas: &mut Canvas, segments: &[Segment], width: f32) {
    let last = segments.len().saturating_sub(1);
    for (i, segment) in segments.iter().enumerate() {
        let to = if i < last {
            segment.extended_end(SEAM_OVERLAP)
        } else {
            segment.to
        };
        canvas.stroke_line(segment.from, to, width, segment.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extended_end_follows_direction() {
        let seg = Segment {
            from: Point::new(0.0, 0.0),
            to: Point::new(3.0, 4.0),
            color: Color::TRANSPARENT,
        };
        let end = seg.extended_end(5.0);
        assert!((end.x - 6.0).abs() < 1e-4);
        assert!((end.y - 8.0).abs() < 1e-4);
    }

    #[test]
    fn degenerate_segment_is_not_extended() {
        let p = Point::new(2.0, 2.0);
        let seg = Segment { from: p, to: p, color: Color::TRANSPARENT };
        assert_eq!(seg.extended_end(SEAM_OVERLAP), p);
    }

    #[test]
    fn abutting_segments_leave_no_seam() {
        let mut canvas = Canvas::new(32).unwrap();
        let color = Color::rgb(0, 122, 255);
        let segments: Vec<Segment> = (0..8)
            .map(|i| Segment {
                from: Point::new(4.0 + i as f32 * 3.0, 16.0),
                to: Point::new(7.0 + i as f32 * 3.0, 16.0),
                color,
            })
            .collect();
        draw_segments(&mut canvas, &segments, 8.0);

        let img = canvas.into_image();
        for x in 5..27 {
            assert_eq!(img.get_pixel(x, 16).0[3], 255, "seam at x={x}");
        }
    }
}
