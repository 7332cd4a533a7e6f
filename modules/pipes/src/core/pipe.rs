use alloc::{boxed::Box, vec::Vec};

use super::{Path, PipeElement, PipeError, PipeIter, StageKind};

#[cfg(test)]
mod tests;

/// Pull-based sequence contract shared by every stage.
///
/// A pipe is advanced with [`advance`](Pipe::advance); when it reports `true`,
/// [`current`](Pipe::current) exposes the element until the next advance. Once a pipe reports
/// exhaustion it keeps doing so until [`reset`](Pipe::reset).
pub trait Pipe: Send {
  /// Element type produced by this stage.
  type Item: PipeElement;

  /// Moves to the next element.
  ///
  /// Returns `Ok(false)` once the sequence is exhausted.
  ///
  /// # Errors
  ///
  /// Returns a [`PipeError`] when the stage cannot produce its next element.
  fn advance(&mut self) -> Result<bool, PipeError>;

  /// Returns the element produced by the last successful advance.
  fn current(&self) -> Option<&Self::Item>;

  /// Restarts the sequence, propagating to every upstream stage.
  fn reset(&mut self);

  /// Toggles path recording for this stage and every upstream stage.
  fn enable_path(&mut self, enabled: bool);

  /// Returns the path of the current element when path recording is enabled.
  fn path(&self) -> Option<&Path>;

  /// Returns the stage tag.
  fn kind(&self) -> StageKind;

  /// Advances and returns a clone of the next element.
  ///
  /// # Errors
  ///
  /// Returns [`PipeError::NoSuchElement`] when the pipe is exhausted, or the error reported by
  /// [`advance`](Pipe::advance).
  fn try_next(&mut self) -> Result<Self::Item, PipeError> {
    if !self.advance()? {
      return Err(PipeError::NoSuchElement);
    }
    upstream_current(self).cloned()
  }

  /// Drains the remaining elements into a vector.
  ///
  /// # Errors
  ///
  /// Returns the first error reported while advancing.
  fn collect_values(&mut self) -> Result<Vec<Self::Item>, PipeError>
  where
    Self: Sized, {
    self.iter().collect()
  }

  /// Borrows the pipe as an [`Iterator`] of results.
  fn iter(&mut self) -> PipeIter<'_, Self>
  where
    Self: Sized, {
    PipeIter::new(self)
  }
}

impl<P> Pipe for Box<P>
where
  P: Pipe + ?Sized,
{
  type Item = P::Item;

  fn advance(&mut self) -> Result<bool, PipeError> {
    (**self).advance()
  }

  fn current(&self) -> Option<&Self::Item> {
    (**self).current()
  }

  fn reset(&mut self) {
    (**self).reset();
  }

  fn enable_path(&mut self, enabled: bool) {
    (**self).enable_path(enabled);
  }

  fn path(&self) -> Option<&Path> {
    (**self).path()
  }

  fn kind(&self) -> StageKind {
    (**self).kind()
  }
}

/// Reads the current element of a pipe that has just reported `true` from `advance`.
///
/// # Errors
///
/// Returns [`PipeError::MissingCurrent`] when the pipe does not expose an element.
pub(crate) fn upstream_current<P>(pipe: &P) -> Result<&P::Item, PipeError>
where
  P: Pipe + ?Sized, {
  pipe.current().ok_or(PipeError::MissingCurrent)
}
