//! aura-logo: procedural app logo renderer
//!
//! This crate draws three fixed logo designs on a square canvas, adds bloom
//! and glow effects, and cuts rounded-square and circular variants out of
//! each result:
//!
//! - **A. Dual arcs**: a warm arc over the top and a cool arc underneath
//! - **B. Sunset split**: a disc with a warm left half and a cool right half
//! - **C. Light trace**: a sine-shaped stroke with glowing end points
//!
//! # Example
//!
//! ```no_run
//! use aura_logo::{LogoGenerator, LogoProfile};
//!
//! let generator = LogoGenerator::new(LogoProfile::default());
//! let logos = generator.render_all().unwrap();
//!
//! // design_a_dual_arcs.png, design_a_dual_arcs_rounded.png, ...
//! let written = logos.save("assets/icon").unwrap();
//! assert_eq!(written.len(), 9);
//! ```
//!
//! # Serializable Profiles
//!
//! Every size, color and effect strength lives in a [`LogoProfile`], which
//! round-trips through JSON. Missing fields keep their defaults:
//!
//! ```
//! use aura_logo::{Color, LogoProfile};
//!
//! let profile = LogoProfile::from_json(r##"{ "canvas": { "size": 256 } }"##).unwrap();
//! assert_eq!(profile.canvas.size, 256);
//! assert_eq!(profile.palette.cool_blue, Color::rgb(0, 122, 255));
//!
//! let json = profile.to_json().unwrap();
//! assert!(json.contains("\"coolBlue\":\"#007aff\""));
//! ```

pub mod canvas;
pub mod color;
pub mod design;
mod error;
mod export;
mod generator;
pub mod glow;
pub mod layer;
mod logo;
pub mod mask;
mod profile;
pub mod raster;

pub use canvas::{Canvas, Point};
pub use color::{Color, GradientSpec, Interpolation, ParseColorError, ThreeStopGradient};
pub use design::DesignKind;
pub use error::{LogoError, Result};
pub use generator::LogoGenerator;
pub use glow::{BloomSpec, PointGlowSpec};
pub use layer::{LayerRole, LayerStack};
pub use logo::{Logo, LogoSet};
pub use mask::{Mask, MaskShape, Variant};
pub use profile::{
    ArcSweep, CanvasSettings, DualArcSettings, LogoProfile, PaletteSettings, ShadowSettings,
    SunsetSettings, TraceSettings, VariantSettings,
};
