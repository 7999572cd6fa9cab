//! Design B: a disc split into a warm and a cool half, with a faint inner
//! shadow along its rim.

use image::{imageops, RgbaImage};

use crate::canvas::Canvas;
use crate::error::{ensure_positive, Result};
use crate::layer::{LayerRole, LayerStack};
use crate::profile::LogoProfile;
use crate::raster::{draw_split_disc, DiscSide, DiscSpec};

/// The split disc, sized and colored from `profile`.
pub fn disc_spec(profile: &LogoProfile) -> DiscSpec {
    let settings = &profile.sunset;
    let palette = &profile.palette;
    DiscSpec {
        center: super::center(profile),
        radius: profile.canvas.px(settings.radius_ratio),
        warm: DiscSide {
            bright: palette.warm_orange,
            deep: palette.warm_deep,
            depth_mix: settings.warm_depth_mix,
        },
        cool: DiscSide {
            bright: palette.cool_teal,
            deep: palette.cool_blue,
            depth_mix: settings.cool_depth_mix,
        },
        edge_softness: settings.edge_softness,
    }
}

/// The disc alone on a transparent layer.
pub fn disc_layer(profile: &LogoProfile) -> Result<RgbaImage> {
    let mut layer = Canvas::new(profile.canvas.size)?.into_image();
    draw_split_disc(&mut layer, &disc_spec(profile))?;
    Ok(layer)
}

/// A blurred dark ring lying just inside the disc edge.
pub fn shadow_layer(profile: &LogoProfile) -> Result<RgbaImage> {
    let shadow = &profile.sunset.shadow;
    ensure_positive("shadow", "width", shadow.width)?;
    ensure_positive("shadow", "blur radius", shadow.blur_radius)?;

    let radius = profile.canvas.px(profile.sunset.radius_ratio);
    let mut ring = Canvas::new(profile.canvas.size)?;
    ring.stroke_circle(
        super::center(profile),
        radius - shadow.width / 2.0,
        shadow.width,
        shadow.color,
    );
    Ok(imageops::blur(&ring.into_image(), shadow.blur_radius))
}

/// Background, disc and, when enabled, the inner shadow.
pub fn layers(profile: &LogoProfile) -> Result<LayerStack> {
    let mut stack = LayerStack::new(profile.canvas.size)
        .with(LayerRole::Background, super::background(profile)?)?
        .with(LayerRole::Shape, disc_layer(profile)?)?;
    if profile.sunset.shadow.enabled {
        stack.push(LayerRole::Shading, shadow_layer(profile)?)?;
    }
    Ok(stack)
}
