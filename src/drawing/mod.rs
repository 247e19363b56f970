//! Immediate-mode raster output of shapes onto an [`RgbaImage`].

use {
  crate::geometry::{BoundingBox, Bounds, PixelSpace, P2},
  euclid::Box2D,
  image::{Pixel, Rgba, RgbaImage}
};


pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend);
}

/// A shape paired with the fill it is drawn with.
#[derive(Debug, Copy, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}
impl <S, T> BoundingBox for Texture<S, T> where S: BoundingBox {
  fn bounding_box(&self) -> Bounds { self.shape.bounding_box() } }

/// Maps canvas pixels to a `factor` times larger output raster.
#[derive(Debug, Copy, Clone)]
pub struct Scale<S> {
  pub shape: S,
  pub factor: f32
}
impl <S> Scale<S> {
  pub fn texture<T>(self, texture: T) -> Texture<Self, T> {
    Texture { shape: self, texture }
  }
}
impl <S> BoundingBox for Scale<S> where S: BoundingBox {
  /// Empty when the scaled box does not fit in `i32` (or `factor` is NaN).
  fn bounding_box(&self) -> Bounds {
    let bounds = self.shape.bounding_box();
    // pixel `p` covers `[p, p + 1)`, which scales to `[p * f, (p + 1) * f)`
    let min = (bounds.min.to_f32() * self.factor).floor().try_cast::<i32>();
    let max = (P2::new(bounds.max.x.saturating_add(1), bounds.max.y.saturating_add(1))
      .to_f32() * self.factor).ceil().try_cast::<i32>();
    match (min, max) {
      (Some(min), Some(max)) => Box2D::new(
        min,
        P2::new(max.x.saturating_sub(1), max.y.saturating_sub(1))
      ),
      _ => Box2D::new(P2::zero(), P2::new(-1, -1))
    }
  }
}

/// Fills the bounding box with a flat color, blended over the existing pixels.
impl <S> Draw<RgbaImage> for Texture<S, Rgba<u8>>
  where S: BoundingBox
{
  fn draw(&self, image: &mut RgbaImage) {
    let bounds = match clip(self.bounding_box(), image) {
      Some(x) => x,
      None => return // nothing on screen
    };

    itertools::iproduct!(bounds.y_range(), bounds.x_range())
      .for_each(|(y, x)| {
        image.get_pixel_mut(x as u32, y as u32).blend(&self.texture);
      });
  }
}

/// Inclusive bounds to the exclusive pixel box visible on `image`.
fn clip(bounds: Bounds, image: &RgbaImage) -> Option<Box2D<i32, PixelSpace>> {
  let (width, height) = image.dimensions();
  let screen = Box2D::new(
    P2::zero(),
    P2::new(width.min(i32::MAX as u32) as i32, height.min(i32::MAX as u32) as i32)
  );
  let max = P2::new(bounds.max.x.saturating_add(1), bounds.max.y.saturating_add(1));
  Box2D::new(bounds.min, max)
    .intersection(&screen)
}
