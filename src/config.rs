use {
  crate::error::Result,
  anyhow::bail
};

/// Tuning constants shared by every line primitive of a [`Worker`](crate::worker::Worker).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineConfig {
  /// Largest offset between the endpoints along the thin axis. Offsets are drawn from
  /// `1..=thin_spread`.
  pub thin_spread: i32,
  /// Largest initial length along the long axis, drawn from `1..=length_spread`.
  pub length_spread: i32,
  /// Standard deviation of the gaussian endpoint jitter applied by `mutate`, in pixels.
  pub mutation_sigma: f64
}

impl Default for LineConfig {
  fn default() -> Self {
    LineConfig {
      thin_spread: 4,
      length_spread: 32,
      mutation_sigma: 16.0
    }}}

impl LineConfig {
  pub fn validate(&self) -> Result<()> {
    if self.thin_spread < 1 {
      bail!("thin_spread must be at least 1, got {}", self.thin_spread);
    }
    if self.length_spread < 1 {
      bail!("length_spread must be at least 1, got {}", self.length_spread);
    }
    if !self.mutation_sigma.is_finite() || self.mutation_sigma < 0.0 {
      bail!("mutation_sigma must be finite and non-negative, got {}", self.mutation_sigma);
    }
    Ok(())
  }
}
