//! The three fixed logo schemes.
//!
//! Each design turns a [`LogoProfile`] into a [`LayerStack`]; compositing the
//! stack gives the finished base image:
//!
//! | Design | Layers (bottom to top) |
//! |--------|------------------------|
//! | A. Dual arcs | background, bloom, arcs |
//! | B. Sunset split | background, disc, inner shadow |
//! | C. Light trace | background, curve bloom, end-point glows, curve |

pub mod dual_arcs;
pub mod light_trace;
pub mod sunset;

use image::RgbaImage;

use crate::canvas::{Canvas, Point};
use crate::error::Result;
use crate::layer::LayerStack;
use crate::profile::LogoProfile;

/// Identifies one of the fixed designs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DesignKind {
    /// Two facing arcs, warm over the top and cool underneath.
    #[cfg_attr(feature = "clap", value(name = "a", alias = "dual-arcs"))]
    DualArcs,
    /// A disc split into a warm and a cool half.
    #[cfg_attr(feature = "clap", value(name = "b", alias = "sunset"))]
    SunsetSplit,
    /// A sine-shaped trace with glowing end points.
    #[cfg_attr(feature = "clap", value(name = "c", alias = "trace"))]
    LightTrace,
}

impl DesignKind {
    /// Every design, in file-name order.
    pub const ALL: [DesignKind; 3] = [Self::DualArcs, Self::SunsetSplit, Self::LightTrace];

    /// Base file name, without extension.
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::DualArcs => "design_a_dual_arcs",
            Self::SunsetSplit => "design_b_sunset",
            Self::LightTrace => "design_c_trace",
        }
    }

    /// Builds the layers of this design.
    pub fn layers(self, profile: &LogoProfile) -> Result<LayerStack> {
        profile.validate()?;
        match self {
            Self::DualArcs => dual_arcs::layers(profile),
            Self::SunsetSplit => sunset::layers(profile),
            Self::LightTrace => light_trace::layers(profile),
        }
    }

    /// Renders the composited base image of this design.
    pub fn render(self, profile: &LogoProfile) -> Result<RgbaImage> {
        let stack = self.layers(profile)?;
        let image = stack.composite()?;
        log::info!(
            "rendered {self:?} ({} layers, {}px)",
            stack.len(),
            stack.size()
        );
        Ok(image)
    }
}

/// The opaque base canvas every design sits on.
fn background(profile: &LogoProfile) -> Result<RgbaImage> {
    Ok(Canvas::filled(profile.canvas.size, profile.canvas.background)?.into_image())
}

fn center(profile: &LogoProfile) -> Point {
    let c = profile.canvas.center();
    Point::new(c, c)
}
