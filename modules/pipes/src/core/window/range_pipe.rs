use crate::core::{Path, Pipe, PipeDslError, PipeError, StageKind, StageSlot, upstream_current};


/// Forwards the elements whose zero-based index lies in `[low, high]`.
///
/// With an upper bound the stage stops pulling from upstream once past it, which makes it usable
/// on unbounded sequences.
pub struct RangePipe<P>
where
  P: Pipe, {
  upstream: P,
  low:      usize,
  high:     Option<usize>,
  index:    usize,
  slot:     StageSlot<P::Item>,
}

impl<P> RangePipe<P>
where
  P: Pipe,
{
  /// Creates an index window.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when `high` is lower than `low`.
  pub fn new(upstream: P, low: usize, high: Option<usize>) -> Result<Self, PipeDslError> {
    if high.is_some_and(|high| high < low) {
      return Err(PipeDslError::invalid_argument("high", "must not be lower than low"));
    }
    Ok(Self { upstream, low, high, index: 0, slot: StageSlot::new() })
  }
}

impl<P> Pipe for RangePipe<P>
where
  P: Pipe,
{
  type Item = P::Item;

  fn advance(&mut self) -> Result<bool, PipeError> {
    if self.slot.is_exhausted() {
      return Ok(false);
    }
    loop {
      if self.high.is_some_and(|high| self.index > high) || !self.upstream.advance()? {
        return Ok(self.slot.exhaust());
      }
      let index = self.index;
      self.index += 1;
      if index >= self.low {
        let value = upstream_current(&self.upstream)?.clone();
        return Ok(self.slot.emit_passthrough(value, self.upstream.path()));
      }
    }
  }

  fn current(&self) -> Option<&Self::Item> {
    self.slot.current()
  }

  fn reset(&mut self) {
    self.upstream.reset();
    self.index = 0;
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
    StageKind::Window
  }
}
