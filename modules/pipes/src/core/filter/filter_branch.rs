use alloc::boxed::Box;

use crate::core::{Pipe, PipeElement, PipeError, source::FeedSource};


/// Sub-pipeline evaluated against one element at a time.
///
/// The sub-pipeline is built over a [`FeedSource`]; testing an element refills the feed with that
/// single element, resets the sub-pipeline and checks whether it yields at least one result.
pub struct FilterBranch<T> {
  feed:  FeedSource<T>,
  probe: Box<dyn BranchProbe>,
}

impl<T> FilterBranch<T>
where
  T: PipeElement,
{
  /// Builds a branch from a function wiring the sub-pipeline onto the provided feed.
  #[must_use]
  pub fn new<F, P>(build: F) -> Self
  where
    F: FnOnce(FeedSource<T>) -> P,
    P: Pipe + 'static, {
    let feed = FeedSource::new();
    let probe: Box<dyn BranchProbe> = Box::new(build(feed.clone()));
    Self { feed, probe }
  }

  /// Returns `true` when the sub-pipeline yields at least one result for `value`.
  ///
  /// # Errors
  ///
  /// Returns the error reported by the sub-pipeline.
  pub fn test(&mut self, value: &T) -> Result<bool, PipeError> {
    self.feed.clear();
    self.probe.restart();
    self.feed.push(value.clone());
    self.probe.yields()
  }
}

trait BranchProbe: Send {
  fn restart(&mut self);
  fn yields(&mut self) -> Result<bool, PipeError>;
}

impl<P> BranchProbe for P
where
  P: Pipe,
{
  fn restart(&mut self) {
    self.reset();
  }

  fn yields(&mut self) -> Result<bool, PipeError> {
    self.advance()
  }
}
