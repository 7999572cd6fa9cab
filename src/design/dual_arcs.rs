//! Design A: two facing gradient arcs over a soft bloom.

use crate::canvas::Canvas;
use crate::color::GradientSpec;
use crate::error::Result;
use crate::glow::bloom;
use crate::layer::{LayerRole, LayerStack};
use crate::profile::LogoProfile;
use crate::raster::{draw_gradient_arc, ArcSpec};

/// The warm upper arc and the cool lower arc.
pub fn arc_specs(profile: &LogoProfile) -> [ArcSpec; 2] {
    let settings = &profile.dual_arcs;
    let palette = &profile.palette;
    let center = super::center(profile);
    let radius = profile.canvas.px(settings.radius_ratio);
    let width = profile.canvas.px(settings.width_ratio);

    [
        ArcSpec {
            center,
            radius,
            start_angle: settings.upper.start,
            end_angle: settings.upper.end,
            width,
            gradient: GradientSpec::linear(palette.warm_orange, palette.warm_deep),
        },
        ArcSpec {
            center,
            radius,
            start_angle: settings.lower.start,
            end_angle: settings.lower.end,
            width,
            gradient: GradientSpec::linear(palette.cool_blue, palette.cool_purple),
        },
    ]
}

/// Background, arc bloom and the arcs.
pub fn layers(profile: &LogoProfile) -> Result<LayerStack> {
    let size = profile.canvas.size;

    let mut arcs = Canvas::new(size)?;
    for spec in arc_specs(profile) {
        draw_gradient_arc(&mut arcs, &spec)?;
    }
    let arcs = arcs.into_image();
    let halo = bloom(&arcs, &profile.dual_arcs.bloom)?;

    LayerStack::new(size)
        .with(LayerRole::Background, super::background(profile)?)?
        .with(LayerRole::Bloom, halo)?
        .with(LayerRole::Shape, arcs)
}
