//! Design C: a single sine-shaped stroke with glowing end points.

use crate::canvas::Canvas;
use crate::color::ThreeStopGradient;
use crate::error::Result;
use crate::glow::{bloom, point_glows, PointGlowSpec};
use crate::layer::{LayerRole, LayerStack};
use crate::profile::LogoProfile;
use crate::raster::{draw_curve, CurveSpec};

/// The trace curve: orange through purple to blue, left to right.
pub fn curve_spec(profile: &LogoProfile) -> CurveSpec {
    let settings = &profile.trace;
    let palette = &profile.palette;
    let amplitude = profile.canvas.size as f32 * settings.amplitude_ratio;
    CurveSpec {
        center: super::center(profile),
        amplitude,
        vertical_amplitude: amplitude * settings.vertical_ratio,
        width: profile.canvas.px(settings.width_ratio),
        steps: settings.steps,
        phase: settings.phase,
        sweep: settings.sweep,
        gradient: ThreeStopGradient::new(
            palette.warm_orange,
            palette.cool_purple,
            palette.cool_blue,
        ),
    }
}

/// End-point glow settings with the radius scaled to the canvas.
pub fn point_glow_spec(profile: &LogoProfile) -> PointGlowSpec {
    PointGlowSpec {
        radius: profile.canvas.px(profile.trace.glow_radius_ratio) as u32,
        ..profile.trace.point_glow
    }
}

/// Background, curve bloom, end-point glows and the curve itself.
pub fn layers(profile: &LogoProfile) -> Result<LayerStack> {
    let size = profile.canvas.size;
    let spec = curve_spec(profile);

    let mut curve = Canvas::new(size)?;
    let ends = draw_curve(&mut curve, &spec)?;
    let curve = curve.into_image();
    let halo = bloom(&curve, &profile.trace.bloom)?;

    let anchors = [
        (ends.start, spec.gradient.start),
        (ends.end, spec.gradient.end),
    ];
    let glows = point_glows(size, &anchors, &point_glow_spec(profile))?;

    LayerStack::new(size)
        .with(LayerRole::Background, super::background(profile)?)?
        .with(LayerRole::Bloom, halo)?
        .with(LayerRole::PointGlow, glows)?
        .with(LayerRole::Shape, curve)
}
