use alloc::{boxed::Box, sync::Arc, vec::Vec};

use spin::Mutex;

use super::{CopySplitConfig, copy_split_state::CopySplitState};
use crate::core::{Path, Pipe, PipeDslError, PipeElement, PipeError, StageKind, StageSlot, validate_positive_argument};


/// One sibling of a broadcast-copy group.
///
/// Every sibling observes every upstream element exactly once and in order, whatever the relative
/// pace of the siblings. Elements pulled by one sibling are buffered for the others, without
/// bound. Resetting any sibling restarts the shared upstream and empties every buffer; the other
/// siblings pick up the restart on their next advance, even once exhausted. Resetting a sibling
/// that has not yet picked up the latest restart joins it without restarting again.
pub struct CopyBranch<T> {
  state:      Arc<Mutex<CopySplitState<T>>>,
  sibling:    usize,
  generation: u64,
  slot:       StageSlot<T>,
}

impl<T> CopyBranch<T>
where
  T: PipeElement,
{
  /// Splits `upstream` into `fan_out` siblings using the default configuration.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when `fan_out` is zero.
  pub fn split<P>(upstream: P, fan_out: usize) -> Result<Vec<Self>, PipeDslError>
  where
    P: Pipe<Item = T> + 'static, {
    Self::split_with_config(upstream, fan_out, CopySplitConfig::default())
  }

  /// Splits `upstream` into `fan_out` siblings.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when `fan_out` is zero.
  pub fn split_with_config<P>(upstream: P, fan_out: usize, config: CopySplitConfig) -> Result<Vec<Self>, PipeDslError>
  where
    P: Pipe<Item = T> + 'static, {
    let fan_out = validate_positive_argument("fan_out", fan_out)?;
    let state = Arc::new(Mutex::new(CopySplitState::new(Box::new(upstream), fan_out, config)));
    Ok((0..fan_out).map(|sibling| Self { state: state.clone(), sibling, generation: 0, slot: StageSlot::new() }).collect())
  }

  /// Returns the position of this sibling in its group.
  #[must_use]
  pub const fn sibling(&self) -> usize {
    self.sibling
  }

  /// Returns the number of elements buffered for this sibling.
  #[must_use]
  pub fn buffered(&self) -> usize {
    self.state.lock().buffered(self.sibling)
  }
}

impl<T> Pipe for CopyBranch<T>
where
  T: PipeElement,
{
  type Item = T;

  fn advance(&mut self) -> Result<bool, PipeError> {
    let next = {
      let mut state = self.state.lock();
      if state.generation() != self.generation {
        self.generation = state.generation();
        self.slot.reset();
      }
      if self.slot.is_exhausted() {
        return Ok(false);
      }
      state.next_for(self.sibling)?
    };
    match next {
      | Some((value, path)) => Ok(self.slot.emit_with_path(value, path)),
      | None => Ok(self.slot.exhaust()),
    }
  }

  fn current(&self) -> Option<&Self::Item> {
    self.slot.current()
  }

  fn reset(&mut self) {
    let mut state = self.state.lock();
    // A sibling that has not caught up with the latest restart joins it instead of restarting again.
    self.generation = if state.generation() == self.generation { state.restart() } else { state.generation() };
    self.slot.reset();
  }

  fn enable_path(&mut self, enabled: bool) {
    self.state.lock().enable_path(enabled);
    self.slot.set_path_enabled(enabled);
  }

  fn path(&self) -> Option<&Path> {
    self.slot.path()
  }

  fn kind(&self) -> StageKind {
    StageKind::Branch
  }
}
