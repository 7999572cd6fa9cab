//! Rendered logos and the sets they are grouped into.
//!
//! A [`Logo`] holds one design's composited base image together with every
//! cropped variant cut from it. A [`LogoSet`] gathers the logos of a run.

use image::RgbaImage;

use crate::design::DesignKind;
use crate::error::Result;
use crate::mask::{Mask, Variant};

/// One rendered design: the full square image plus its cropped variants.
#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    pub kind: DesignKind,
    /// The opaque full-canvas image.
    pub base: RgbaImage,
    /// Masked copies of `base`, in the order their masks were given.
    pub variants: Vec<(Variant, RgbaImage)>,
}

impl Logo {
    /// Cuts every mask out of `base`.
    ///
    /// Fails if any mask does not match the size of `base`.
    pub fn new(kind: DesignKind, base: RgbaImage, masks: &[(Variant, Mask)]) -> Result<Self> {
        let variants = masks
            .iter()
            .map(|(variant, mask)| -> Result<_> { Ok((*variant, mask.apply(&base)?)) })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            kind,
            base,
            variants,
        })
    }

    /// Returns the image of the given variant, if it was rendered.
    pub fn variant(&self, variant: Variant) -> Option<&RgbaImage> {
        self.variants
            .iter()
            .find(|(v, _)| *v == variant)
            .map(|(_, image)| image)
    }

    /// File name of the base image, e.g. `design_b_sunset.png`.
    pub fn file_name(&self) -> String {
        format!("{}.png", self.kind.file_stem())
    }

    /// File name of a variant, e.g. `design_b_sunset_circle.png`.
    pub fn variant_file_name(&self, variant: Variant) -> String {
        format!("{}_{}.png", self.kind.file_stem(), variant.suffix())
    }

    /// Every image of this logo paired with its file name, base first.
    pub fn files(&self) -> impl Iterator<Item = (String, &RgbaImage)> {
        std::iter::once((self.file_name(), &self.base)).chain(
            self.variants
                .iter()
                .map(|(variant, image)| (self.variant_file_name(*variant), image)),
        )
    }
}

/// The logos produced by one generator run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogoSet {
    pub logos: Vec<Logo>,
}

impl LogoSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self { logos: Vec::new() }
    }

    /// Creates a set from already rendered logos.
    pub fn from_logos(logos: Vec<Logo>) -> Self {
        Self { logos }
    }

    /// Adds a logo to the set.
    pub fn add_logo(&mut self, logo: Logo) {
        self.logos.push(logo);
    }

    /// Returns the number of logos in the set.
    pub fn len(&self) -> usize {
        self.logos.len()
    }

    /// Returns true if the set holds no logos.
    pub fn is_empty(&self) -> bool {
        self.logos.is_empty()
    }

    /// Finds the logo rendered for `kind`.
    pub fn get(&self, kind: DesignKind) -> Option<&Logo> {
        self.logos.iter().find(|logo| logo.kind == kind)
    }

    /// Returns an iterator over the logos.
    pub fn iter(&self) -> impl Iterator<Item = &Logo> {
        self.logos.iter()
    }

    /// Number of image files the set expands to.
    pub fn file_count(&self) -> usize {
        self.logos.iter().map(|logo| 1 + logo.variants.len()).sum()
    }
}

impl IntoIterator for LogoSet {
    type Item = Logo;
    type IntoIter = std::vec::IntoIter<Logo>;

    fn into_iter(self) -> Self::IntoIter {
        self.logos.into_iter()
    }
}

impl<'a> IntoIterator for &'a LogoSet {
    type Item = &'a Logo;
    type IntoIter = std::slice::Iter<'a, Logo>;

    fn into_iter(self) -> Self::IntoIter {
        self.logos.iter()
    }
}
