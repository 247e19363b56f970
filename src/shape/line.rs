use {
  crate::{
    geometry::{self, Axis, BoundingBox, Bounds, P2},
    worker::Worker
  },
  std::{fmt::Debug, marker::PhantomData}
};

/// Which axis of a [`Line`] is kept thin.
pub trait Orientation: Debug + Copy + Clone + PartialEq + Eq {
  const THIN: Axis;
}

/// Thin along x: 1 to `thin_spread` pixels wide, any height.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Vertical;

/// Thin along y: 1 to `thin_spread` pixels tall, any width.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Horizontal;

impl Orientation for Vertical { const THIN: Axis = Axis::X; }
impl Orientation for Horizontal { const THIN: Axis = Axis::Y; }

/// Axis-biased line segment between two (unsorted) pixel endpoints.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Line<O> {
  pub p1: P2,
  pub p2: P2,
  orientation: PhantomData<O>
}

pub type VerticalLine = Line<Vertical>;
pub type HorizontalLine = Line<Horizontal>;

impl <O: Orientation> Line<O> {
  /// Line with the given endpoints, taken as is.
  pub fn new(p1: P2, p2: P2) -> Self {
    Line { p1, p2, orientation: PhantomData }
  }

  pub fn random(worker: &mut Worker) -> Self {
    let size = worker.size();
    let config = *worker.config();
    let (thin, long) = (O::THIN, O::THIN.other());

    let p1 = P2::new(worker.intn(size.width), worker.intn(size.height));
    let mut p2 = p1;
    let offset = worker.offset(config.thin_spread);
    *thin.of_mut(&mut p2) = thin_offset(thin.of(p1), offset, 1, thin.extent(size));
    *long.of_mut(&mut p2) = long.of(p1)
      .saturating_add(worker.offset(config.length_spread))
      .clamp(0, long.extent(size) - 1);

    Self::new(p1, p2)
  }

  /// Jitter one endpoint, then re-derive the other endpoint's thin coordinate from it.
  pub fn mutate(&mut self, worker: &mut Worker) {
    let size = worker.size();
    let config = *worker.config();
    let thin = O::THIN;

    let offset = worker.offset(config.thin_spread);
    let (moved, derived, direction) = if worker.coin() {
      (&mut self.p1, &mut self.p2, 1)
    } else {
      (&mut self.p2, &mut self.p1, -1)
    };
    let dx = worker.jitter(config.mutation_sigma);
    let dy = worker.jitter(config.mutation_sigma);
    *moved = geometry::clamp_to(P2::new(moved.x.saturating_add(dx), moved.y.saturating_add(dy)), size);
    *thin.of_mut(derived) = thin_offset(thin.of(*moved), offset, direction, thin.extent(size));
  }

  pub fn bounds(&self) -> Bounds {
    geometry::normalize(self.p1, self.p2)
  }
}

impl <O: Orientation> BoundingBox for Line<O> {
  fn bounding_box(&self) -> Bounds { self.bounds() }
}

/// Coordinate `offset` pixels from `anchor` in `direction`, inside `[0, extent)`.
///
/// Falls back to the opposite direction when the preferred one leaves the canvas, and to the
/// farther edge when both do, so the distance to `anchor` stays in `1..=offset` whenever
/// `extent >= 2`.
pub(super) fn thin_offset(anchor: i32, offset: i32, direction: i32, extent: i32) -> i32 {
  let max = extent - 1;
  let forward = anchor.saturating_add(direction * offset);
  let backward = anchor.saturating_sub(direction * offset);
  if (0..=max).contains(&forward) {
    forward
  } else if (0..=max).contains(&backward) {
    backward
  } else if max - anchor >= anchor {
    max
  } else {
    0
  }
}

