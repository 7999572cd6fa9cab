//! Gradient-stroked circular arcs.

use super::{draw_segments, Segment};
use crate::canvas::{Canvas, Point};
use crate::color::GradientSpec;
use crate::error::{ensure_positive, LogoError, Result};

/// Number of straight segments an arc is split into.
pub const ARC_STEPS: u32 = 200;

/// A stroked arc swept from `start_angle` to `end_angle` (degrees, screen
/// orientation) with its color running along `gradient`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    pub center: Point,
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub width: f32,
    pub gradient: GradientSpec,
}

impl ArcSpec {
    /// Checks that the arc can be drawn without degenerate or self-overlapping
    /// geometry.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("arc", "radius", self.radius)?;
        ensure_positive("arc", "width", self.width)?;
        if !(self.start_angle.is_finite() && self.end_angle.is_finite()) {
            return Err(LogoError::geometry("arc", "angles must be finite"));
        }
        if self.start_angle >= self.end_angle {
            return Err(LogoError::geometry(
                "arc",
                format!(
                    "start angle {} must be less than end angle {}",
                    self.start_angle, self.end_angle
                ),
            ));
        }
        if self.radius <= self.width / 2.0 {
            return Err(LogoError::geometry(
                "arc",
                format!(
                    "radius {} must exceed half the stroke width {}",
                    self.radius, self.width
                ),
            ));
        }
        Ok(())
    }

    /// Splits the arc into `steps` segments; segment `i` carries the
    /// gradient color at `t = i / steps`.
    pub fn segments(&self, steps: u32) -> Vec<Segment> {
        let sweep = self.end_angle - self.start_angle;
        (0..steps)
            .map(|i| {
                let t = i as f32 / steps as f32;
                let next_t = (i + 1) as f32 / steps as f32;
                Segment {
                    from: self.center.on_circle(self.radius, self.start_angle + sweep * t),
                    to: self.center.on_circle(self.radius, self.start_angle + sweep * next_t),
                    color: self.gradient.at(t),
                }
            })
            .collect()
    }
}

/// Draws `spec` onto `canvas` as [`ARC_STEPS`] opaque colored segments.
pub fn draw_gradient_arc(canvas: &mut Canvas, spec: &ArcSpec) -> Result<()> {
    spec.validate()?;
    let segments = spec.segments(ARC_STEPS);
    log::debug!(
        "drawing arc {}°..{}° r={} as {} segments",
        spec.start_angle,
        spec.end_angle,
        spec.radius,
        segments.len()
    );
    draw_segments(canvas, &segments, spec.width);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    const ORANGE: Color = Color::rgb(255, 149, 0);
    const DEEP: Color = Color::rgb(255, 94, 58);

    fn upper_arc(center: Point, radius: f32, width: f32) -> ArcSpec {
        ArcSpec {
            center,
            radius,
            start_angle: -160.0,
            end_angle: -20.0,
            width,
            gradient: GradientSpec::linear(ORANGE, DEEP),
        }
    }

    fn close(a: u8, b: u8, tolerance: u8) -> bool {
        a.abs_diff(b) <= tolerance
    }

    #[test]
    fn first_and_last_segments_carry_the_anchor_colors() {
        let spec = upper_arc(Point::new(512.0, 512.0), 358.0, 81.0);
        let segments = spec.segments(ARC_STEPS);
        assert_eq!(segments.len(), ARC_STEPS as usize);
        assert_eq!(segments[0].color, ORANGE);

        // One step short of t=1: within one interpolation step plus truncation.
        let last = segments[segments.len() - 1].color;
        let step = |a: u8, b: u8| (a.abs_diff(b) as f32 / ARC_STEPS as f32).ceil() as u8 + 1;
        assert!(close(last.r, DEEP.r, step(ORANGE.r, DEEP.r)));
        assert!(close(last.g, DEEP.g, step(ORANGE.g, DEEP.g)));
        assert!(close(last.b, DEEP.b, step(ORANGE.b, DEEP.b)));
    }

    #[test]
    fn segments_form_a_continuous_path_on_the_circle() {
        let center = Point::new(100.0, 100.0);
        let spec = upper_arc(center, 50.0, 10.0);
        let segments = spec.segments(ARC_STEPS);

        for pair in segments.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
        for seg in &segments {
            assert!((seg.from.distance(center) - 50.0).abs() < 1e-3);
        }
        let end = segments[segments.len() - 1].to;
        let expected = center.on_circle(50.0, -20.0);
        assert!(end.distance(expected) < 1e-3);
    }

    #[test]
    fn rejects_degenerate_geometry() {
        let center = Point::new(64.0, 64.0);
        let mut spec = upper_arc(center, 40.0, 10.0);
        spec.end_angle = spec.start_angle;
        assert!(spec.validate().is_err());

        let mut spec = upper_arc(center, 40.0, 10.0);
        spec.radius = 0.0;
        assert!(spec.validate().is_err());

        let mut spec = upper_arc(center, 40.0, 10.0);
        spec.width = -1.0;
        assert!(spec.validate().is_err());

        // Stroke wider than the diameter folds over the center.
        let spec = upper_arc(center, 10.0, 20.0);
        assert!(spec.validate().is_err());

        let mut canvas = Canvas::new(128).unwrap();
        assert!(draw_gradient_arc(&mut canvas, &spec).is_err());
    }

    #[test]
    fn drawn_arc_runs_from_start_color_to_end_color() {
        let size = 256;
        let center = Point::new(128.0, 128.0);
        let spec = upper_arc(center, 90.0, 20.0);
        let mut canvas = Canvas::new(size).unwrap();
        draw_gradient_arc(&mut canvas, &spec).unwrap();
        let img = canvas.into_image();

        // Mid-stroke, a little way in from each end.
        let near_start = center.on_circle(90.0, -157.0);
        let near_end = center.on_circle(90.0, -23.0);
        let px_start = img.get_pixel(near_start.x as u32, near_start.y as u32);
        let px_end = img.get_pixel(near_end.x as u32, near_end.y as u32);

        assert_eq!(px_start[3], 255);
        assert_eq!(px_end[3], 255);
        assert!(close(px_start[1], ORANGE.g, 4), "start green {}", px_start[1]);
        assert!(close(px_end[1], DEEP.g, 4), "end green {}", px_end[1]);

        // The hollow middle and the lower half stay empty.
        assert_eq!(img.get_pixel(128, 128)[3], 0);
        assert_eq!(img.get_pixel(128, 218)[3], 0);
    }
}
