use core::hash::Hash;

use super::GroupCountTable;
use crate::core::{Path, Pipe, PipeError, StageKind, StageSlot, upstream_current};

#[cfg(test)]
mod tests;

/// Forwards every upstream element while counting occurrences per derived key.
pub struct GroupCountPipe<P, K, F>
where
  P: Pipe, {
  upstream: P,
  key_of:   F,
  table:    GroupCountTable<K>,
  slot:     StageSlot<P::Item>,
}

impl<P, K, F> GroupCountPipe<P, K, F>
where
  P: Pipe,
  K: Eq + Hash + Clone + Send,
  F: FnMut(&P::Item) -> K + Send,
{
  /// Creates a counting stage writing into `table`.
  #[must_use]
  pub const fn new(upstream: P, table: GroupCountTable<K>, key_of: F) -> Self {
    Self { upstream, key_of, table, slot: StageSlot::new() }
  }

  /// Returns the count table.
  #[must_use]
  pub const fn table(&self) -> &GroupCountTable<K> {
    &self.table
  }
}

impl<P, K, F> Pipe for GroupCountPipe<P, K, F>
where
  P: Pipe,
  K: Eq + Hash + Clone + Send,
  F: FnMut(&P::Item) -> K + Send,
{
  type Item = P::Item;

  fn advance(&mut self) -> Result<bool, PipeError> {
    if self.slot.is_exhausted() || !self.upstream.advance()? {
      return Ok(self.slot.exhaust());
    }
    let value = upstream_current(&self.upstream)?;
    self.table.increment((self.key_of)(value));
    let value = value.clone();
    Ok(self.slot.emit_passthrough(value, self.upstream.path()))
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
    StageKind::Aggregate
  }
}
