use core::marker::PhantomData;

use crate::core::{Path, Pipe, PipeElement, PipeError, StageKind, StageSlot};

#[cfg(test)]
mod tests;

/// Replaces every upstream element with the value recorded `steps` entries back in its path.
///
/// `T` is the type of the recorded value. The emitted value is appended to the path like any
/// other produced value.
pub struct BackPipe<P, T>
where
  P: Pipe, {
  upstream: P,
  steps:    usize,
  slot:     StageSlot<T>,
  _marker:  PhantomData<fn() -> T>,
}

impl<P, T> BackPipe<P, T>
where
  P: Pipe,
  T: PipeElement,
{
  /// Creates a backtracking stage and enables path recording upstream.
  #[must_use]
  pub fn new(mut upstream: P, steps: usize) -> Self {
    upstream.enable_path(true);
    Self { upstream, steps, slot: StageSlot::new(), _marker: PhantomData }
  }

  /// Returns the backtrack depth.
  #[must_use]
  pub const fn steps(&self) -> usize {
    self.steps
  }
}

impl<P, T> Pipe for BackPipe<P, T>
where
  P: Pipe,
  T: PipeElement,
{
  type Item = T;

  fn advance(&mut self) -> Result<bool, PipeError> {
    if self.slot.is_exhausted() || !self.upstream.advance()? {
      return Ok(self.slot.exhaust());
    }
    let path = self.upstream.path().ok_or(PipeError::PathDisabled)?;
    let value = path.back::<T>(self.steps)?.clone();
    Ok(self.slot.emit_extended(value, Some(path)))
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
