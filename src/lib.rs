//! Thin, axis-biased line primitives for stochastic image approximation.
//!
//! A canvas is covered by randomly generated line segments, each refined by local search:
//! the search loop clones a shape, mutates the clone, rasterizes it into scanlines, scores
//! them against a target image and keeps or discards the trial. This crate provides the
//! shapes and the per-search [`Worker`](worker::Worker) context; the search loop, scoring
//! and compositing belong to the caller.
//!
//! # Basic usage
//! ```
//! # use line_primitives::{error::Result, shape::ShapeType, worker::Worker};
//! # fn main() -> Result<()> {
//! // 256x256 canvas, reproducible from seed 0
//! let mut worker = Worker::new(256, 256, 0)?;
//! let mut lines = Vec::new();
//!
//! let best = worker.random_shape(ShapeType::VerticalLine);
//! let mut trial = best; // independent copy
//! trial.mutate(&mut worker);
//!
//! for line in trial.rasterize(&mut lines) {
//!   assert_eq!(line.alpha, 0xffff);
//!   assert!(line.x2 - line.x1 <= 4); // vertical lines stay thin along x
//! }
//! println!("{}", trial.svg("fill=\"#000\""));
//! #   Ok(())
//! # }
//! ```
//!
//! # Invariants
//! - Every endpoint lies in `[0, width) × [0, height)`. Out of range values are clamped,
//!   never rejected.
//! - Vertical lines are 1 to `thin_spread` pixels apart along x, horizontal lines along y,
//!   after generation and after any number of mutations. The long axis is free to grow up
//!   to the canvas size.
//! - Rasterization reuses the caller's buffer and covers every row of the normalized bounds
//!   at full opacity.
//!
//! # Parallelism
//! Shape operations are synchronous. A [`Worker`](worker::Worker) owns its random source
//! and scratch buffer, so parallel searches each get their own worker.
//!
//! With the `drawing` feature, shapes can also be drawn onto an `image::RgbaImage`:
//! ```ignore
//! shape.scale(4.0)
//!   .texture(Rgba([255, 0, 0, 128]))
//!   .draw(&mut image);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod config;
pub mod geometry;
pub mod scanline;
pub mod worker;
pub mod shape;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod drawing;
