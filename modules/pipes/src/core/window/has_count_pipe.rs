use crate::core::{Path, Pipe, PipeDslError, PipeError, StageKind, StageSlot};

#[cfg(test)]
mod tests;

/// Emits a single boolean telling whether the upstream element count lies in `[min, max]`.
///
/// Either bound may be open. The stage stops pulling as soon as the answer is known: once the
/// count exceeds `max`, or, without `max`, once `min` is reached. The emitted value starts a new
/// path.
pub struct HasCountPipe<P>
where
  P: Pipe, {
  upstream: P,
  min:      Option<usize>,
  max:      Option<usize>,
  count:    usize,
  answered: bool,
  slot:     StageSlot<bool>,
}

impl<P> HasCountPipe<P>
where
  P: Pipe,
{
  /// Creates a count check.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when both bounds are set and `min > max`.
  pub fn new(upstream: P, min: Option<usize>, max: Option<usize>) -> Result<Self, PipeDslError> {
    if min.zip(max).is_some_and(|(min, max)| min > max) {
      return Err(PipeDslError::invalid_argument("min", "must not exceed max"));
    }
    Ok(Self { upstream, min, max, count: 0, answered: false, slot: StageSlot::new() })
  }

  /// Returns the number of upstream elements pulled so far.
  #[must_use]
  pub const fn counted(&self) -> usize {
    self.count
  }

  fn decide(&mut self) -> Result<bool, PipeError> {
    let min = self.min.unwrap_or(0);
    loop {
      if self.max.is_some_and(|max| self.count > max) {
        return Ok(false);
      }
      if self.max.is_none() && self.count >= min {
        return Ok(true);
      }
      if !self.upstream.advance()? {
        return Ok(self.count >= min);
      }
      self.count += 1;
    }
  }
}

impl<P> Pipe for HasCountPipe<P>
where
  P: Pipe,
{
  type Item = bool;

  fn advance(&mut self) -> Result<bool, PipeError> {
    if self.slot.is_exhausted() || self.answered {
      return Ok(self.slot.exhaust());
    }
    let answer = self.decide()?;
    self.answered = true;
    Ok(self.slot.emit_with_path(answer, None))
  }

  fn current(&self) -> Option<&Self::Item> {
    self.slot.current()
  }

  fn reset(&mut self) {
    self.upstream.reset();
    self.count = 0;
    self.answered = false;
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
