use super::{ArrowError, ArrowStep};

/// Processing step of an [`Arrow`](super::Arrow).
pub trait ArrowLogic<In, Out>: Send {
  /// Processes one incoming message.
  ///
  /// # Errors
  ///
  /// Returns an [`ArrowError`] that the arrow reports on its error channel.
  fn process(&mut self, message: In) -> Result<ArrowStep<Out>, ArrowError>;

  /// Called once before the arrow signals completion.
  ///
  /// # Errors
  ///
  /// Returns an [`ArrowError`] that the arrow reports on its error channel.
  fn on_complete(&mut self) -> Result<(), ArrowError> {
    Ok(())
  }
}
