//! .
//!
//! The origin of coordinate system is in top-left corner. All coordinates are integer pixel
//! indices on the canvas of the owning [`Worker`](crate::worker::Worker).

use euclid::{Box2D, Point2D, Size2D};


/// Pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelSpace;

pub type P2 = Point2D<i32, PixelSpace>;

/// Axis-aligned pixel rectangle. Unlike the usual [`Box2D`] convention, `max` is *inclusive*:
/// it is the last covered pixel, so a single pixel has `min == max`.
pub type Bounds = Box2D<i32, PixelSpace>;

pub trait BoundingBox {
  fn bounding_box(&self) -> Bounds;
}

/// Sorted rectangle spanned by two arbitrary corners. Each axis is swapped independently.
pub fn normalize(p1: P2, p2: P2) -> Bounds {
  Box2D::new(p1.min(p2), p1.max(p2))
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis { X, Y }

impl Axis {
  pub fn other(self) -> Axis {
    match self {
      Axis::X => Axis::Y,
      Axis::Y => Axis::X
    }
  }

  pub fn of(self, point: P2) -> i32 {
    match self {
      Axis::X => point.x,
      Axis::Y => point.y
    }
  }

  pub fn of_mut(self, point: &mut P2) -> &mut i32 {
    match self {
      Axis::X => &mut point.x,
      Axis::Y => &mut point.y
    }
  }

  /// Canvas length along this axis.
  pub fn extent(self, size: Size2D<i32, PixelSpace>) -> i32 {
    match self {
      Axis::X => size.width,
      Axis::Y => size.height
    }
  }
}

/// Saturate every component of `point` into the canvas `[0, size)`.
pub fn clamp_to(point: P2, size: Size2D<i32, PixelSpace>) -> P2 {
  P2::new(
    point.x.clamp(0, size.width - 1),
    point.y.clamp(0, size.height - 1)
  )
}
