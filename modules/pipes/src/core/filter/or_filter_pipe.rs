use alloc::vec::Vec;

use super::FilterBranch;
use crate::core::{Path, Pipe, PipeDslError, PipeError, StageKind, StageSlot, upstream_current};


/// Keeps the upstream elements for which at least one branch yields a result.
pub struct OrFilterPipe<P>
where
  P: Pipe, {
  upstream: P,
  branches: Vec<FilterBranch<P::Item>>,
  slot:     StageSlot<P::Item>,
}

impl<P> OrFilterPipe<P>
where
  P: Pipe,
{
  /// Creates a disjunction over `branches`.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when `branches` is empty.
  pub fn new(upstream: P, branches: Vec<FilterBranch<P::Item>>) -> Result<Self, PipeDslError> {
    if branches.is_empty() {
      return Err(PipeDslError::invalid_argument("branches", "must not be empty"));
    }
    Ok(Self { upstream, branches, slot: StageSlot::new() })
  }

  fn any_yields(&mut self, value: &P::Item) -> Result<bool, PipeError> {
    for branch in &mut self.branches {
      if branch.test(value)? {
        return Ok(true);
      }
    }
    Ok(false)
  }
}

impl<P> Pipe for OrFilterPipe<P>
where
  P: Pipe,
{
  type Item = P::Item;

  fn advance(&mut self) -> Result<bool, PipeError> {
    if self.slot.is_exhausted() {
      return Ok(false);
    }
    while self.upstream.advance()? {
      let value = upstream_current(&self.upstream)?.clone();
      if self.any_yields(&value)? {
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
