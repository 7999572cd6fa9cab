//! A sine-shaped stroke swept left to right with a three-stop gradient.

use super::{draw_segments, Segment};
use crate::canvas::{Canvas, Point};
use crate::color::ThreeStopGradient;
use crate::error::{ensure_positive, LogoError, Result};

/// Default number of samples along the curve.
pub const CURVE_STEPS: u32 = 300;

/// Parametric curve `x(t) = cx - A + 2A·t`, `y(t) = cy + V·sin(t·sweep + phase)`
/// for `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSpec {
    pub center: Point,
    /// Half the horizontal span (`A`).
    pub amplitude: f32,
    /// Peak vertical displacement (`V`).
    pub vertical_amplitude: f32,
    pub width: f32,
    pub steps: u32,
    /// Phase offset of the sine, radians.
    pub phase: f32,
    /// Angle the sine advances over the whole curve, radians.
    pub sweep: f32,
    pub gradient: ThreeStopGradient,
}

impl CurveSpec {
    /// Checks that the curve can be drawn.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("curve", "amplitude", self.amplitude)?;
        ensure_positive("curve", "vertical amplitude", self.vertical_amplitude)?;
        ensure_positive("curve", "width", self.width)?;
        if self.steps == 0 {
            return Err(LogoError::geometry("curve", "steps must be at least 1"));
        }
        if !(self.phase.is_finite() && self.sweep.is_finite()) {
            return Err(LogoError::geometry("curve", "phase and sweep must be finite"));
        }
        Ok(())
    }

    /// The point on the curve at parameter `t`.
    pub fn sample(&self, t: f32) -> Point {
        let x = self.center.x - self.amplitude + self.amplitude * 2.0 * t;
        let y = self.center.y + self.vertical_amplitude * (t * self.sweep + self.phase).sin();
        Point::new(x, y)
    }

    /// `steps + 1` evenly spaced `(t, point)` samples covering `[0, 1]`.
    pub fn samples(&self) -> Vec<(f32, Point)> {
        (0..=self.steps)
            .map(|i| {
                let t = i as f32 / self.steps as f32;
                (t, self.sample(t))
            })
            .collect()
    }

    /// Segments between consecutive samples, colored at their starting `t`.
    pub fn segments(&self) -> Vec<Segment> {
        self.samples()
            .windows(2)
            .map(|pair| {
                let (t, from) = pair[0];
                let (_, to) = pair[1];
                Segment {
                    from,
                    to,
                    color: self.gradient.at(t),
                }
            })
            .collect()
    }

    /// Radius of the round end caps: half the stroke width, floored.
    pub fn cap_radius(&self) -> f32 {
        (self.width / 2.0).floor()
    }
}

/// The first and last sample points of a drawn curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveEnds {
    pub start: Point,
    pub end: Point,
}

/// Draws the curve followed by solid end caps in the first and last stop
/// colors. Returns the end points so glows can be anchored on them.
pub fn draw_curve(canvas: &mut Canvas, spec: &CurveSpec) -> Result<CurveEnds> {
    spec.validate()?;
    let segments = spec.segments();

    let longest = segments.iter().map(Segment::length).fold(0.0, f32::max);
    if longest > spec.width / 2.0 {
        log::warn!(
            "curve segments up to {longest:.1}px long for a {}px stroke; raise the step count to avoid faceting",
            spec.width
        );
    }
    log::debug!("drawing curve as {} segments", segments.len());
    draw_segments(canvas, &segments, spec.width);

    let ends = CurveEnds {
        start: spec.sample(0.0),
        end: spec.sample(1.0),
    };
    let cap = spec.cap_radius();
    canvas.fill_circle(ends.start, cap, spec.gradient.start);
    canvas.fill_circle(ends.end, cap, spec.gradient.end);
    Ok(ends)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use std::f32::consts::PI;

    const ORANGE: Color = Color::rgb(255, 149, 0);
    const PURPLE: Color = Color::rgb(175, 82, 222);
    const BLUE: Color = Color::rgb(0, 122, 255);

    fn trace(size: u32, phase: f32) -> CurveSpec {
        let c = (size / 2) as f32;
        let amplitude = size as f32 * 0.25;
        CurveSpec {
            center: Point::new(c, c),
            amplitude,
            vertical_amplitude: amplitude * 0.6,
            width: (size as f32 * 0.045).floor(),
            steps: CURVE_STEPS,
            phase,
            sweep: PI * 1.5,
            gradient: ThreeStopGradient::new(ORANGE, PURPLE, BLUE),
        }
    }

    #[test]
    fn endpoints_span_the_amplitude() {
        let spec = trace(1024, -PI * 0.25);
        let start = spec.sample(0.0);
        let end = spec.sample(1.0);
        assert!((start.x - (512.0 - 256.0)).abs() < 1e-3);
        assert!((end.x - (512.0 + 256.0)).abs() < 1e-3);
    }

    #[test]
    fn zero_phase_starts_on_the_center_line() {
        let spec = trace(1024, 0.0);
        let start = spec.sample(0.0);
        assert!((start.x - 256.0).abs() < 1e-3);
        assert!((start.y - 512.0).abs() < 1e-3);
    }

    #[test]
    fn samples_cover_the_unit_interval() {
        let spec = trace(256, -PI * 0.25);
        let samples = spec.samples();
        assert_eq!(samples.len(), CURVE_STEPS as usize + 1);
        assert_eq!(samples[0].0, 0.0);
        assert_eq!(samples[samples.len() - 1].0, 1.0);
    }

    #[test]
    fn segment_colors_follow_the_three_stops() {
        let spec = trace(256, -PI * 0.25);
        let segments = spec.segments();
        assert_eq!(segments.len(), CURVE_STEPS as usize);
        assert_eq!(segments[0].color, ORANGE);
        // t = 150/300 = 0.5 switches to the second half at its start color.
        assert_eq!(segments[150].color, PURPLE);
        let last = segments[segments.len() - 1].color;
        assert!(last.b.abs_diff(BLUE.b) <= 1 && last.r.abs_diff(BLUE.r) <= 2);
    }

    #[test]
    fn draws_caps_in_the_end_colors() {
        let size = 256;
        let spec = trace(size, -PI * 0.25);
        let mut canvas = Canvas::new(size).unwrap();
        let ends = draw_curve(&mut canvas, &spec).unwrap();
        let img = canvas.into_image();

        // Just behind the start point only the cap covers the pixel.
        let behind_start = img.get_pixel(ends.start.x as u32 - 3, ends.start.y as u32);
        assert_eq!(behind_start.0, [ORANGE.r, ORANGE.g, ORANGE.b, 255]);
        let past_end = img.get_pixel(ends.end.x as u32 + 3, ends.end.y as u32);
        assert_eq!(past_end.0, [BLUE.r, BLUE.g, BLUE.b, 255]);

        assert_eq!(img.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn rejects_invalid_specs() {
        let mut spec = trace(256, 0.0);
        spec.steps = 0;
        assert!(spec.validate().is_err());

        let mut spec = trace(256, 0.0);
        spec.amplitude = 0.0;
        assert!(spec.validate().is_err());

        let mut spec = trace(256, 0.0);
        spec.width = f32::NAN;
        let mut canvas = Canvas::new(256).unwrap();
        assert!(draw_curve(&mut canvas, &spec).is_err());
    }
}
