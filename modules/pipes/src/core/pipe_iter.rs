use super::{Pipe, PipeError};

/// Iterator adapter over a borrowed [`Pipe`].
///
/// Yields `Err` once and then stops when the pipe fails.
pub struct PipeIter<'a, P>
where
  P: Pipe, {
  pipe:   &'a mut P,
  failed: bool,
}

impl<'a, P> PipeIter<'a, P>
where
  P: Pipe,
{
  pub(crate) const fn new(pipe: &'a mut P) -> Self {
    Self { pipe, failed: false }
  }
}

impl<P> Iterator for PipeIter<'_, P>
where
  P: Pipe,
{
  type Item = Result<P::Item, PipeError>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.failed {
      return None;
    }
    match self.pipe.try_next() {
      | Ok(value) => Some(Ok(value)),
      | Err(PipeError::NoSuchElement) => None,
      | Err(error) => {
        self.failed = true;
        Some(Err(error))
      },
    }
  }
}
