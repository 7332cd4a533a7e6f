use rand::{Rng, RngCore};

use crate::core::{Path, Pipe, PipeDslError, PipeError, StageKind, StageSlot, upstream_current};

#[cfg(test)]
mod tests;

/// Keeps each upstream element with probability `bias`.
///
/// The caller supplies the random source. [`reset`](Pipe::reset) restarts the upstream but keeps
/// the generator state.
pub struct RandomFilterPipe<P, R>
where
  P: Pipe, {
  upstream: P,
  bias:     f64,
  rng:      R,
  slot:     StageSlot<P::Item>,
}

impl<P, R> RandomFilterPipe<P, R>
where
  P: Pipe,
  R: RngCore + Send,
{
  /// Creates a Bernoulli filter.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when `bias` is not within `[0, 1]`.
  pub fn new(upstream: P, bias: f64, rng: R) -> Result<Self, PipeDslError> {
    if !(0.0..=1.0).contains(&bias) {
      return Err(PipeDslError::invalid_argument("bias", "must be within [0, 1]"));
    }
    Ok(Self { upstream, bias, rng, slot: StageSlot::new() })
  }

  /// Returns the acceptance probability.
  #[must_use]
  pub const fn bias(&self) -> f64 {
    self.bias
  }
}

impl<P, R> Pipe for RandomFilterPipe<P, R>
where
  P: Pipe,
  R: RngCore + Send,
{
  type Item = P::Item;

  fn advance(&mut self) -> Result<bool, PipeError> {
    if self.slot.is_exhausted() {
      return Ok(false);
    }
    while self.upstream.advance()? {
      if self.rng.gen_bool(self.bias) {
        let value = upstream_current(&self.upstream)?.clone();
        return Ok(self.slot.emit_passthrough(value, self.upstream.path()));
      }
    }
    Ok(self.slot.exhaust())
  }

  fn current(&self) -> Option<&Self::Item> {
    self.slot.current()
  }

  fn reset(&mut self) {
    self.upstream.reset();
    self.slot.reset();
  }

  fn enable_path(&mut self, enabled: bool) {
    self.upstream.enable_path(enabled);
    self.slot.set_path_enabled(enabled);
  }

  fn path(&self) -> Option<&Path> {
    self.slot.path()
  }

  fn kind(&self) -> StageKind {
    StageKind::Filter
  }
}
