/// One fully covered run of pixels `x1..=x2` on row `y`.
///
/// `alpha` is a 16-bit fixed point opacity, `0xffff` meaning fully opaque.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Scanline {
  pub y: i32,
  pub x1: i32,
  pub x2: i32,
  pub alpha: u16
}

impl Scanline {
  pub const OPAQUE: u16 = 0xffff;

  /// Number of pixels covered by the run.
  pub fn len(&self) -> usize {
    (self.x2 - self.x1 + 1).max(0) as usize
  }

  pub fn is_empty(&self) -> bool {
    self.x2 < self.x1
  }
}
