//! Line primitives and the closed [`Shape`] type the search loop works with.

use {
  crate::{
    geometry::{BoundingBox, Bounds},
    scanline::Scanline,
    worker::Worker
  },
  anyhow::bail,
  std::{fmt, str::FromStr}
};

mod line;
pub use line::{Line, Orientation, Vertical, Horizontal, VerticalLine, HorizontalLine};

/// Kind of primitive a [`Worker`] should generate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShapeType {
  VerticalLine,
  HorizontalLine
}

impl ShapeType {
  pub const ALL: [ShapeType; 2] = [ShapeType::VerticalLine, ShapeType::HorizontalLine];

  pub fn name(self) -> &'static str {
    match self {
      ShapeType::VerticalLine => "vertical-line",
      ShapeType::HorizontalLine => "horizontal-line"
    }
  }
}

impl fmt::Display for ShapeType {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for ShapeType {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match ShapeType::ALL.iter().find(|kind| kind.name() == s) {
      Some(kind) => Ok(*kind),
      None => bail!("unknown shape type: {:?}", s)
    }
  }
}

/// A primitive of any kind.
///
/// `Copy`/`Clone` produce a fully independent value, which is how the search loop
/// snapshots a shape before trying a mutation on it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Shape {
  VerticalLine(VerticalLine),
  HorizontalLine(HorizontalLine)
}

impl From<VerticalLine> for Shape {
  fn from(line: VerticalLine) -> Self { Shape::VerticalLine(line) }
}
impl From<HorizontalLine> for Shape {
  fn from(line: HorizontalLine) -> Self { Shape::HorizontalLine(line) }
}

impl Shape {
  /// Random shape of the given kind, entirely inside the worker's canvas.
  pub fn random(kind: ShapeType, worker: &mut Worker) -> Self {
    match kind {
      ShapeType::VerticalLine => VerticalLine::random(worker).into(),
      ShapeType::HorizontalLine => HorizontalLine::random(worker).into()
    }
  }

  pub fn kind(&self) -> ShapeType {
    match self {
      Shape::VerticalLine(_) => ShapeType::VerticalLine,
      Shape::HorizontalLine(_) => ShapeType::HorizontalLine
    }
  }

  /// Move to a nearby random configuration, in place. Never fails.
  pub fn mutate(&mut self, worker: &mut Worker) {
    match self {
      Shape::VerticalLine(line) => line.mutate(worker),
      Shape::HorizontalLine(line) => line.mutate(worker)
    }
  }

  /// Normalized bounds, `max` inclusive.
  pub fn bounds(&self) -> Bounds {
    match self {
      Shape::VerticalLine(line) => line.bounds(),
      Shape::HorizontalLine(line) => line.bounds()
    }
  }

  /// One opaque scanline per covered row, top to bottom.
  ///
  /// `lines` is cleared and refilled; its capacity is reused across calls, so the returned
  /// slice is only valid until the buffer is rasterized into again.
  pub fn rasterize<'a>(&self, lines: &'a mut Vec<Scanline>) -> &'a [Scanline] {
    let bounds = self.bounds();
    lines.clear();
    lines.extend((bounds.min.y..=bounds.max.y).map(|y| Scanline {
      y,
      x1: bounds.min.x,
      x2: bounds.max.x,
      alpha: Scanline::OPAQUE
    }));
    lines
  }

  /// SVG `<rect>` element. `attrs` is inserted verbatim and is expected to carry the fill.
  pub fn svg(&self, attrs: &str) -> String {
    let bounds = self.bounds();
    let w = bounds.max.x - bounds.min.x + 1;
    let h = bounds.max.y - bounds.min.y + 1;
    format!(
      "<rect {} x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" />",
      attrs, bounds.min.x, bounds.min.y, w, h)
  }

  #[cfg(feature = "drawing")]
  #[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
  pub fn texture<T>(self, texture: T) -> crate::drawing::Texture<Self, T> {
    crate::drawing::Texture { shape: self, texture }
  }

  /// Draw at `factor` times the canvas resolution.
  #[cfg(feature = "drawing")]
  #[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
  pub fn scale(self, factor: f32) -> crate::drawing::Scale<Self> {
    crate::drawing::Scale { shape: self, factor }
  }
}

impl BoundingBox for Shape {
  fn bounding_box(&self) -> Bounds { self.bounds() }
}
