use alloc::{boxed::Box, vec, vec::Vec};

use crate::core::{Path, Pipe, PipeElement, PipeError, upstream_current};

/// Shared upstream and per-sibling "moved" flags of a synchronized split.
pub(crate) struct SyncSplitState<T> {
  upstream:   Box<dyn Pipe<Item = T>>,
  moved:      Vec<bool>,
  current:    Option<(T, Option<Path>)>,
  exhausted:  bool,
  generation: u64,
}

impl<T> SyncSplitState<T>
where
  T: PipeElement,
{
  pub(crate) fn new(upstream: Box<dyn Pipe<Item = T>>, fan_out: usize) -> Self {
    Self { upstream, moved: vec![false; fan_out], current: None, exhausted: false, generation: 0 }
  }

  /// Returns the shared element for `sibling`, advancing upstream once every sibling moved.
  ///
  /// # Errors
  ///
  /// Returns [`PipeError::WouldBlock`] when `sibling` already consumed the current element and
  /// some other sibling has not.
  pub(crate) fn next_for(&mut self, sibling: usize) -> Result<Option<(T, Option<Path>)>, PipeError> {
    if self.exhausted {
      return Ok(None);
    }
    let Some(current) = self.current.as_ref() else {
      return self.pull(sibling);
    };
    match self.moved.get(sibling) {
      | Some(false) => {
        let entry = current.clone();
        self.mark_moved(sibling);
        Ok(Some(entry))
      },
      | _ if self.moved.iter().all(|moved| *moved) => self.pull(sibling),
      | _ => {
        tracing::trace!(sibling, "sync split sibling waiting for the others");
        Err(PipeError::WouldBlock)
      },
    }
  }

  pub(crate) fn enable_path(&mut self, enabled: bool) {
    self.upstream.enable_path(enabled);
  }

  pub(crate) const fn generation(&self) -> u64 {
    self.generation
  }

  /// Restarts the shared upstream, clears every flag and returns the new generation.
  pub(crate) fn restart(&mut self) -> u64 {
    self.upstream.reset();
    self.moved.iter_mut().for_each(|moved| *moved = false);
    self.current = None;
    self.exhausted = false;
    self.generation += 1;
    self.generation
  }

  fn pull(&mut self, sibling: usize) -> Result<Option<(T, Option<Path>)>, PipeError> {
    if !self.upstream.advance()? {
      self.exhausted = true;
      self.current = None;
      return Ok(None);
    }
    let value = upstream_current(&*self.upstream)?.clone();
    let entry = (value, self.upstream.path().cloned());
    self.current = Some(entry.clone());
    self.moved.iter_mut().for_each(|moved| *moved = false);
    self.mark_moved(sibling);
    Ok(Some(entry))
  }

  fn mark_moved(&mut self, sibling: usize) {
    if let Some(moved) = self.moved.get_mut(sibling) {
      *moved = true;
    }
  }
}
