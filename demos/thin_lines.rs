//! Random thin lines, one worker per rayon task, drawn to `out/thin_lines.png` and
//! listed as SVG elements in `out/thin_lines.svg`.

use {
  line_primitives::{
    error::{self, Result},
    drawing::Draw,
    shape::{Shape, ShapeType},
    worker::Worker
  },
  image::{Rgba, RgbaImage},
  rand::Rng,
  rayon::prelude::*,
  std::fmt::Write
};

const SIZE: u32 = 256;
const SCALE: f32 = 4.0;

fn main() {
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::DEBUG)
    .init();

  if let Err(e) = run() {
    error::display(&e);
    std::process::exit(1);
  }
}

fn run() -> Result<()> {
  let t0 = std::time::Instant::now();
  let shapes = (0..32u64).into_par_iter()
    .map(|seed| -> Result<Vec<(Shape, Rgba<u8>)>> {
      let mut worker = Worker::new(SIZE, SIZE, seed)?;
      let kind = ShapeType::ALL[seed as usize % ShapeType::ALL.len()];
      Ok((0..64)
        .map(|_| {
          let mut shape = worker.random_shape(kind);
          // a blind walk: the real search loop would score each trial
          for _ in 0..worker.rng().gen_range(0..32) {
            shape.mutate(&mut worker);
          }
          let rgb: [u8; 3] = worker.rng().gen();
          (shape, Rgba([rgb[0], rgb[1], rgb[2], 160]))
        })
        .collect::<Vec<_>>())
    })
    .collect::<Result<Vec<_>>>()?
    .into_iter()
    .flatten()
    .collect::<Vec<(Shape, Rgba<u8>)>>();
  tracing::info!(shapes = shapes.len(), elapsed_ms = t0.elapsed().as_millis() as u64, "generated");

  let side = (SIZE as f32 * SCALE) as u32;
  let mut image = RgbaImage::from_pixel(side, side, Rgba([255, 255, 255, 255]));
  let mut svg = String::new();
  for (shape, color) in &shapes {
    shape.scale(SCALE)
      .texture(*color)
      .draw(&mut image);
    let attrs = format!(
      "fill=\"#{:02x}{:02x}{:02x}\" fill-opacity=\"{:.3}\"",
      color.0[0], color.0[1], color.0[2], color.0[3] as f32 / 255.0);
    writeln!(svg, "{}", shape.svg(&attrs))?;
  }

  std::fs::create_dir_all("out")?;
  image.save("out/thin_lines.png")?;
  std::fs::write("out/thin_lines.svg", svg)?;
  tracing::info!(path = "out/thin_lines.png", "saved");
  Ok(())
}
