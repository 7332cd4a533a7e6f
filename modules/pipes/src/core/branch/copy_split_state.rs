use alloc::{boxed::Box, collections::VecDeque, vec::Vec};

use super::CopySplitConfig;
use crate::core::{Path, Pipe, PipeElement, PipeError, upstream_current};

/// Shared upstream and per-sibling FIFOs of a broadcast-copy group.
pub(crate) struct CopySplitState<T> {
  upstream:   Box<dyn Pipe<Item = T>>,
  queues:     Vec<VecDeque<(T, Option<Path>)>>,
  exhausted:  bool,
  generation: u64,
  config:     CopySplitConfig,
}

impl<T> CopySplitState<T>
where
  T: PipeElement,
{
  pub(crate) fn new(upstream: Box<dyn Pipe<Item = T>>, fan_out: usize, config: CopySplitConfig) -> Self {
    let queues = (0..fan_out).map(|_| VecDeque::new()).collect();
    Self { upstream, queues, exhausted: false, generation: 0, config }
  }

  /// Returns the next element for `sibling`, pulling from upstream when its FIFO is empty.
  pub(crate) fn next_for(&mut self, sibling: usize) -> Result<Option<(T, Option<Path>)>, PipeError> {
    if let Some(entry) = self.queues.get_mut(sibling).and_then(VecDeque::pop_front) {
      return Ok(Some(entry));
    }
    if self.exhausted {
      return Ok(None);
    }
    if !self.upstream.advance()? {
      self.exhausted = true;
      return Ok(None);
    }
    let value = upstream_current(&*self.upstream)?.clone();
    let path = self.upstream.path().cloned();
    let threshold = self.config.lag_warning_threshold();
    for (index, queue) in self.queues.iter_mut().enumerate() {
      if index == sibling {
        continue;
      }
      queue.push_back((value.clone(), path.clone()));
      if threshold == Some(queue.len()) {
        tracing::warn!(sibling = index, buffered = queue.len(), "copy split sibling is lagging behind");
      }
    }
    Ok(Some((value, path)))
  }

  pub(crate) fn buffered(&self, sibling: usize) -> usize {
    self.queues.get(sibling).map_or(0, VecDeque::len)
  }

  pub(crate) fn enable_path(&mut self, enabled: bool) {
    self.upstream.enable_path(enabled);
  }

  /// Returns the number of group restarts so far.
  pub(crate) const fn generation(&self) -> u64 {
    self.generation
  }

  /// Restarts the shared upstream, empties every FIFO and returns the new generation.
  pub(crate) fn restart(&mut self) -> u64 {
    self.upstream.reset();
    self.queues.iter_mut().for_each(VecDeque::clear);
    self.exhausted = false;
    self.generation += 1;
    self.generation
  }
}
