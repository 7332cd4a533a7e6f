use core::hash::Hash;

use super::SeenSet;
use crate::core::{Path, Pipe, PipeError, StageKind, StageSlot, upstream_current};


/// Emits each distinct element once, in order of first occurrence.
///
/// Distinctness is decided on a key derived from each element. Memory grows with the number of
/// distinct keys; [`reset`](Pipe::reset) forgets them.
pub struct DedupPipe<P, K, F>
where
  P: Pipe, {
  upstream: P,
  key_of:   F,
  seen:     SeenSet<K>,
  slot:     StageSlot<P::Item>,
}

impl<P> DedupPipe<P, P::Item, fn(&P::Item) -> P::Item>
where
  P: Pipe,
  P::Item: Eq + Hash,
{
  /// Deduplicates on the elements themselves.
  #[must_use]
  pub fn new(upstream: P) -> Self {
    Self::by_key(upstream, <P::Item as Clone>::clone as fn(&P::Item) -> P::Item)
  }
}

impl<P, K, F> DedupPipe<P, K, F>
where
  P: Pipe,
  K: Eq + Hash + Send,
  F: FnMut(&P::Item) -> K + Send,
{
  /// Deduplicates on the key returned by `key_of`.
  #[must_use]
  pub fn by_key(upstream: P, key_of: F) -> Self {
    Self { upstream, key_of, seen: SeenSet::new(), slot: StageSlot::new() }
  }
}

impl<P, K, F> Pipe for DedupPipe<P, K, F>
where
  P: Pipe,
  K: Eq + Hash + Send,
  F: FnMut(&P::Item) -> K + Send,
{
  type Item = P::Item;

  fn advance(&mut self) -> Result<bool, PipeError> {
    if self.slot.is_exhausted() {
      return Ok(false);
    }
    while self.upstream.advance()? {
      let value = upstream_current(&self.upstream)?;
      if self.seen.insert((self.key_of)(value)) {
        let value = value.clone();
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
    self.seen.clear();
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
