//! Per-pixel compositing of straight-alpha RGBA buffers.

use image::{Rgba, RgbaImage};

use crate::error::{LogoError, Result};

/// Composites `src` over `dest` in place (source over destination).
///
/// Both buffers must have identical dimensions.
pub fn composite_over(dest: &mut RgbaImage, src: &RgbaImage) -> Result<()> {
    ensure_same_size(dest, src)?;
    for (dst_pixel, src_pixel) in dest.pixels_mut().zip(src.pixels()) {
        *dst_pixel = alpha_blend(*src_pixel, *dst_pixel);
    }
    Ok(())
}

/// Returns `bottom` with `top` composited over it, leaving both untouched.
pub fn alpha_composite(bottom: &RgbaImage, top: &RgbaImage) -> Result<RgbaImage> {
    let mut out = bottom.clone();
    composite_over(&mut out, top)?;
    Ok(out)
}

/// Alpha blends two RGBA pixels (source over destination).
pub fn alpha_blend(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;

    let out_a = sa + da * (1.0 - sa);

    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend = |s: u8, d: u8| -> u8 {
        let sf = s as f32 / 255.0;
        let df = d as f32 / 255.0;
        let out = (sf * sa + df * da * (1.0 - sa)) / out_a;
        (out * 255.0).round() as u8
    };

    Rgba([
        blend(src[0], dst[0]),
        blend(src[1], dst[1]),
        blend(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

/// Mixes `image` with a fully transparent buffer: every channel is scaled by
/// `factor` and truncated.
pub fn fade(image: &RgbaImage, factor: f32) -> RgbaImage {
    let mut out = image.clone();
    for px in out.pixels_mut() {
        for c in px.0.iter_mut() {
            *c = (*c as f32 * factor) as u8;
        }
    }
    out
}

pub(crate) fn ensure_same_size(expected: &RgbaImage, found: &RgbaImage) -> Result<()> {
    if expected.dimensions() == found.dimensions() {
        Ok(())
    } else {
        Err(LogoError::SizeMismatch {
            expected: expected.width(),
            found_width: found.width(),
            found_height: found.height(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_source_replaces_destination() {
        let mut dest = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
        let src = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]));
        composite_over(&mut dest, &src).unwrap();
        assert_eq!(dest.get_pixel(1, 1).0, [0, 0, 255, 255]);
    }

    #[test]
    fn transparent_source_keeps_destination() {
        let bottom = RgbaImage::from_pixel(4, 4, Rgba([250, 250, 252, 255]));
        let top = RgbaImage::new(4, 4);
        let out = alpha_composite(&bottom, &top).unwrap();
        assert_eq!(out, bottom);
    }

    #[test]
    fn semi_transparent_source_mixes() {
        let mut dest = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
        let src = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 255, 128]));
        composite_over(&mut dest, &src).unwrap();
        let px = dest.get_pixel(0, 0);
        assert!(px[0] > 0, "Should have some red");
        assert!(px[2] > 0, "Should have some blue");
        assert_eq!(px[3], 255);
    }

    #[test]
    fn size_mismatch_is_rejected() {
        let mut dest = RgbaImage::new(4, 4);
        let src = RgbaImage::new(3, 4);
        assert!(matches!(
            composite_over(&mut dest, &src),
            Err(LogoError::SizeMismatch { expected: 4, found_width: 3, found_height: 4 })
        ));
    }

    #[test]
    fn fade_scales_every_channel() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([200, 101, 0, 255]));
        assert_eq!(fade(&img, 0.5).get_pixel(0, 0).0, [100, 50, 0, 127]);
    }
}
