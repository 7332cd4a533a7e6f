use crate::core::{Path, Pipe, PipeError, StageKind, StageSlot, upstream_current};


/// Forwards the upstream elements whose path reaches `steps` entries back.
pub struct BackFilterPipe<P>
where
  P: Pipe, {
  upstream: P,
  steps:    usize,
  slot:     StageSlot<P::Item>,
}

impl<P> BackFilterPipe<P>
where
  P: Pipe,
{
  /// Creates a reachability filter and enables path recording upstream.
  #[must_use]
  pub fn new(mut upstream: P, steps: usize) -> Self {
    upstream.enable_path(true);
    Self { upstream, steps, slot: StageSlot::new() }
  }

  /// Returns the backtrack depth.
  #[must_use]
  pub const fn steps(&self) -> usize {
    self.steps
  }
}

impl<P> Pipe for BackFilterPipe<P>
where
  P: Pipe,
{
  type Item = P::Item;

  fn advance(&mut self) -> Result<bool, PipeError> {
    if self.slot.is_exhausted() {
      return Ok(false);
    }
    while self.upstream.advance()? {
      let path = self.upstream.path().ok_or(PipeError::PathDisabled)?;
      if path.reaches_back(self.steps) {
        let value = upstream_current(&self.upstream)?.clone();
        return Ok(self.slot.emit_passthrough(value, Some(path)));
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
    StageKind::Backtrack
  }
}
