use alloc::{boxed::Box, sync::Arc, vec::Vec};

use spin::Mutex;

use super::sync_split_state::SyncSplitState;
use crate::core::{Path, Pipe, PipeDslError, PipeElement, PipeError, StageKind, StageSlot, validate_positive_argument};

#[cfg(test)]
mod tests;

/// One sibling of a synchronized split.
///
/// The shared upstream only advances once every sibling consumed the previous element. A sibling
/// asking again before the others caught up gets [`PipeError::WouldBlock`] and may retry later.
/// Resets restart the whole group the same way as [`CopyBranch`](super::CopyBranch).
pub struct SyncBranch<T> {
  state:      Arc<Mutex<SyncSplitState<T>>>,
  sibling:    usize,
  generation: u64,
  slot:       StageSlot<T>,
}

impl<T> SyncBranch<T>
where
  T: PipeElement,
{
  /// Splits `upstream` into `fan_out` synchronized siblings.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when `fan_out` is zero.
  pub fn split<P>(upstream: P, fan_out: usize) -> Result<Vec<Self>, PipeDslError>
  where
    P: Pipe<Item = T> + 'static, {
    let fan_out = validate_positive_argument("fan_out", fan_out)?;
    let state = Arc::new(Mutex::new(SyncSplitState::new(Box::new(upstream), fan_out)));
    Ok((0..fan_out).map(|sibling| Self { state: state.clone(), sibling, generation: 0, slot: StageSlot::new() }).collect())
  }

  /// Returns the position of this sibling in its group.
  #[must_use]
  pub const fn sibling(&self) -> usize {
    self.sibling
  }
}

impl<T> Pipe for SyncBranch<T>
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
