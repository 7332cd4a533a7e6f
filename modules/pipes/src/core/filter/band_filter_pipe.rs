use super::Band;
use crate::core::{Path, Pipe, PipeError, StageKind, StageSlot, upstream_current};


/// Keeps the upstream elements lying within a [`Band`].
pub struct BandFilterPipe<P>
where
  P: Pipe, {
  upstream: P,
  band:     Band<P::Item>,
  slot:     StageSlot<P::Item>,
}

impl<P> BandFilterPipe<P>
where
  P: Pipe,
  P::Item: PartialOrd,
{
  /// Creates a band filter.
  #[must_use]
  pub const fn new(upstream: P, band: Band<P::Item>) -> Self {
    Self { upstream, band, slot: StageSlot::new() }
  }

  /// Returns the accepted band.
  #[must_use]
  pub const fn band(&self) -> &Band<P::Item> {
    &self.band
  }
}

impl<P> Pipe for BandFilterPipe<P>
where
  P: Pipe,
  P::Item: PartialOrd,
{
  type Item = P::Item;

  fn advance(&mut self) -> Result<bool, PipeError> {
    if self.slot.is_exhausted() {
      return Ok(false);
    }
    while self.upstream.advance()? {
      let value = upstream_current(&self.upstream)?;
      if self.band.contains(value) {
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
