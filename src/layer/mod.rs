//! Layer stacking and compositing.
//!
//! Every design renders into a handful of same-sized layers, each tagged with
//! a [`LayerRole`]. The role alone decides the stacking order, so designs may
//! push layers in whatever order is convenient:
//!
//! ```text
//! ┌─────────────┐
//! │   Shading   │ ◄── inner shadows, drawn last
//! ├─────────────┤
//! │    Shape    │ ◄── the crisp geometry
//! ├─────────────┤
//! │  PointGlow  │ ◄── radial glows at anchor points
//! ├─────────────┤
//! │    Bloom    │ ◄── blurred copy of the shape
//! ├─────────────┤
//! │ Background  │ ◄── opaque base canvas
//! └─────────────┘
//! ```

pub mod composite;

pub use composite::{alpha_blend, alpha_composite, composite_over, fade};

use image::RgbaImage;

use crate::error::{LogoError, Result};

/// Position of a layer in the stack, bottom first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayerRole {
    Background,
    Bloom,
    PointGlow,
    Shape,
    Shading,
}

/// An ordered set of layers that composite into a single image.
///
/// Layers are owned by the stack until [`composite`](Self::composite), which
/// reads them and produces a fresh buffer.
#[derive(Debug, Clone)]
pub struct LayerStack {
    size: u32,
    layers: Vec<(LayerRole, RgbaImage)>,
}

impl LayerStack {
    /// Creates an empty stack of `size x size` layers.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            layers: Vec::new(),
        }
    }

    /// Edge length every layer must have.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of layers pushed so far.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns true if no layer was pushed.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Adds a layer. Layers with the same role keep their insertion order.
    pub fn push(&mut self, role: LayerRole, image: RgbaImage) -> Result<()> {
        if image.dimensions() != (self.size, self.size) {
            return Err(LogoError::SizeMismatch {
                expected: self.size,
                found_width: image.width(),
                found_height: image.height(),
            });
        }
        self.layers.push((role, image));
        Ok(())
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, role: LayerRole, image: RgbaImage) -> Result<Self> {
        self.push(role, image)?;
        Ok(self)
    }

    /// Composites all layers bottom to top into a new buffer.
    ///
    /// An empty stack yields a fully transparent image.
    pub fn composite(&self) -> Result<RgbaImage> {
        let mut order: Vec<&(LayerRole, RgbaImage)> = self.layers.iter().collect();
        order.sort_by_key(|(role, _)| *role);

        let mut out = RgbaImage::new(self.size, self.size);
        for (role, image) in order {
            log::debug!("compositing {role:?} layer");
            composite_over(&mut out, image)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(size: u32, px: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(size, size, Rgba(px))
    }

    #[test]
    fn empty_stack_is_transparent() {
        let out = LayerStack::new(4).composite().unwrap();
        assert!(out.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn role_order_wins_over_push_order() {
        let mut stack = LayerStack::new(4);
        stack.push(LayerRole::Shape, solid(4, [0, 0, 255, 255])).unwrap();
        stack.push(LayerRole::Background, solid(4, [255, 0, 0, 255])).unwrap();
        assert_eq!(stack.len(), 2);

        let out = stack.composite().unwrap();
        assert_eq!(out.get_pixel(0, 0).0, [0, 0, 255, 255]);
    }

    #[test]
    fn composite_does_not_consume_layers() {
        let stack = LayerStack::new(2)
            .with(LayerRole::Background, solid(2, [10, 20, 30, 255]))
            .unwrap();
        let first = stack.composite().unwrap();
        let second = stack.composite().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn wrong_sized_layer_is_rejected() {
        let mut stack = LayerStack::new(4);
        assert!(stack.push(LayerRole::Bloom, solid(5, [0; 4])).is_err());
        assert!(stack.is_empty());
    }
}
