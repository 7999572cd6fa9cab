//! Logo generation engine.

use rayon::prelude::*;

use crate::design::DesignKind;
use crate::error::Result;
use crate::logo::{Logo, LogoSet};
use crate::mask::{Mask, Variant};
use crate::profile::LogoProfile;

/// Renders designs and their cropped variants from a [`LogoProfile`].
///
/// Designs share no state, so [`render_many`](Self::render_many) renders
/// them in parallel.
///
/// # Example
///
/// ```
/// use aura_logo::{DesignKind, LogoGenerator, LogoProfile, Variant};
///
/// let generator = LogoGenerator::new(LogoProfile::new().with_size(64));
/// let logo = generator.render(DesignKind::SunsetSplit).unwrap();
///
/// let circle = logo.variant(Variant::Circle).unwrap();
/// assert_eq!(circle.get_pixel(0, 0)[3], 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogoGenerator {
    profile: LogoProfile,
}

impl LogoGenerator {
    /// Creates a generator rendering with `profile`.
    pub fn new(profile: LogoProfile) -> Self {
        Self { profile }
    }

    /// The settings every design is rendered with.
    pub fn profile(&self) -> &LogoProfile {
        &self.profile
    }

    /// The masks cut from every logo, in output order.
    pub fn variant_masks(&self) -> Result<Vec<(Variant, Mask)>> {
        let size = self.profile.canvas.size;
        let corner_radius = self
            .profile
            .canvas
            .px(self.profile.variants.corner_radius_ratio);
        Variant::ALL
            .iter()
            .map(|&variant| -> Result<_> {
                let mask = match variant {
                    Variant::Rounded => Mask::rounded_rect(size, corner_radius)?,
                    Variant::Circle => Mask::circle(size)?,
                };
                Ok((variant, mask))
            })
            .collect()
    }

    /// Renders one design and all of its variants.
    pub fn render(&self, kind: DesignKind) -> Result<Logo> {
        let base = kind.render(&self.profile)?;
        Logo::new(kind, base, &self.variant_masks()?)
    }

    /// Renders the given designs in parallel, keeping the order of their
    /// first appearance. Repeated kinds are rendered once.
    ///
    /// The first failing design aborts the whole run.
    pub fn render_many(&self, kinds: &[DesignKind]) -> Result<LogoSet> {
        self.profile.validate()?;
        let mut unique: Vec<DesignKind> = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            if !unique.contains(&kind) {
                unique.push(kind);
            }
        }
        let kinds = unique;
        let masks = self.variant_masks()?;
        log::info!(
            "rendering {} design(s) at {}px",
            kinds.len(),
            self.profile.canvas.size
        );
        let logos = kinds
            .par_iter()
            .map(|&kind| Logo::new(kind, kind.render(&self.profile)?, &masks))
            .collect::<Result<Vec<_>>>()?;
        Ok(LogoSet::from_logos(logos))
    }

    /// Renders every design.
    pub fn render_all(&self) -> Result<LogoSet> {
        self.render_many(&DesignKind::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> LogoGenerator {
        LogoGenerator::new(LogoProfile::new().with_size(64))
    }

    #[test]
    fn masks_follow_the_profile() {
        let masks = small().variant_masks().unwrap();
        assert_eq!(
            masks.iter().map(|(v, _)| *v).collect::<Vec<_>>(),
            Variant::ALL.to_vec()
        );
        // floor(64 * 0.2237) == 14: the corner is cut, the edge midpoint is kept.
        let (_, rounded) = &masks[0];
        assert_eq!(rounded.value(0, 0), 0);
        assert_eq!(rounded.value(32, 0), 255);
    }

    #[test]
    fn render_all_keeps_design_order() {
        let set = small().render_all().unwrap();
        let kinds: Vec<_> = set.iter().map(|logo| logo.kind).collect();
        assert_eq!(kinds, DesignKind::ALL.to_vec());
        assert_eq!(set.file_count(), 9);
    }

    #[test]
    fn repeated_designs_render_once() {
        let kinds = [
            DesignKind::LightTrace,
            DesignKind::DualArcs,
            DesignKind::LightTrace,
        ];
        let set = small().render_many(&kinds).unwrap();
        let rendered: Vec<_> = set.iter().map(|logo| logo.kind).collect();
        assert_eq!(rendered, vec![DesignKind::LightTrace, DesignKind::DualArcs]);
        assert_eq!(set.file_count(), 6);
    }

    #[test]
    fn circle_variant_is_transparent_in_the_corner() {
        let logo = small().render(DesignKind::SunsetSplit).unwrap();
        let circle = logo.variant(Variant::Circle).unwrap();
        assert_eq!(circle.get_pixel(0, 0)[3], 0);
        assert_eq!(circle.get_pixel(32, 32)[3], 255);
        assert_eq!(logo.base.get_pixel(0, 0)[3], 255);
    }

    #[test]
    fn render_many_aborts_on_invalid_profile() {
        let generator = LogoGenerator::new(LogoProfile::new().with_size(0));
        assert!(generator.render_many(&[DesignKind::DualArcs]).is_err());
    }

    #[test]
    fn default_generator_uses_the_default_profile() {
        let generator = LogoGenerator::default();
        assert_eq!(generator.profile(), &LogoProfile::default());
        assert_eq!(generator.profile().canvas.size, 1024);
    }
}
