use {
  crate::{
    config::LineConfig,
    error::Result,
    geometry::PixelSpace,
    scanline::Scanline,
    shape::{Shape, ShapeType}
  },
  anyhow::{bail, Context},
  euclid::Size2D,
  rand::prelude::*,
  rand_distr::StandardNormal,
  rand_pcg::Pcg64
};


/// Private context of a single sequential search: canvas size, random source and
/// scanline scratch space.
///
/// A worker is never shared between two operations in flight. Run one worker per thread
/// to parallelize; nothing is shared between distinct workers.
#[derive(Debug, Clone)]
pub struct Worker {
  size: Size2D<i32, PixelSpace>,
  config: LineConfig,
  rng: Pcg64,
  lines: Vec<Scanline>
}

impl Worker {
  /// Worker with the default [`LineConfig`].
  pub fn new(width: u32, height: u32, seed: u64) -> Result<Self> {
    Self::with_config(width, height, seed, LineConfig::default())
  }

  pub fn with_config(width: u32, height: u32, seed: u64, config: LineConfig) -> Result<Self> {
    if width == 0 || height == 0 {
      bail!("canvas must be non-empty, got {}x{}", width, height);
    }
    let size = Size2D::new(
      i32::try_from(width).context("canvas width exceeds i32")?,
      i32::try_from(height).context("canvas height exceeds i32")?
    );
    config.validate().context("invalid line config")?;
    tracing::debug!(width, height, seed, ?config, "worker");

    Ok(Worker {
      size,
      config,
      rng: Pcg64::seed_from_u64(seed),
      // grown by the first rasterize, reused afterwards
      lines: Vec::new()
    })
  }

  pub fn size(&self) -> Size2D<i32, PixelSpace> { self.size }
  pub fn width(&self) -> i32 { self.size.width }
  pub fn height(&self) -> i32 { self.size.height }
  pub fn config(&self) -> &LineConfig { &self.config }

  /// Direct access to the random source, for collaborators that need draws of their own
  /// (e.g. acceptance tests in an annealing loop) from the same reproducible stream.
  pub fn rng(&mut self) -> &mut Pcg64 { &mut self.rng }

  /// Uniform in `[0, n)`.
  pub(crate) fn intn(&mut self, n: i32) -> i32 {
    self.rng.gen_range(0..n)
  }

  /// Uniform in `1..=spread`.
  pub(crate) fn offset(&mut self, spread: i32) -> i32 {
    self.rng.gen_range(1..=spread)
  }

  pub(crate) fn coin(&mut self) -> bool {
    self.rng.gen()
  }

  /// Gaussian displacement with standard deviation `sigma`, truncated toward zero.
  pub(crate) fn jitter(&mut self, sigma: f64) -> i32 {
    let z: f64 = self.rng.sample(StandardNormal);
    (z * sigma) as i32
  }

  pub fn random_shape(&mut self, kind: ShapeType) -> Shape {
    Shape::random(kind, self)
  }

  /// Rasterize into the worker's own scratch buffer. The slice borrows the worker, so it
  /// must be consumed before the worker is used again.
  pub fn rasterize(&mut self, shape: &Shape) -> &[Scanline] {
    shape.rasterize(&mut self.lines)
  }
}
