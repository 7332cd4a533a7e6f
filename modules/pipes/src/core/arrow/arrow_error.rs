//! Errors reported on the arrow error channel.

use alloc::string::String;

use crate::core::PipeDslError;

#[cfg(test)]
mod tests;

/// Failures raised while pushing messages through arrows.
///
/// These are never returned by `receive_message`; they are delivered as
/// [`ArrowEvent::Failed`](super::ArrowEvent::Failed).
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ArrowError {
  /// The processing step rejected a message.
  #[error("processing failed: {0}")]
  Processing(String),
  /// A subscriber failed while handling an event.
  #[error("delivery failed: {0}")]
  Delivery(String),
  /// A combine input queue reached its capacity.
  #[error("combine queue is full (capacity {capacity})")]
  BufferFull {
    /// Configured queue capacity.
    capacity: usize,
  },
  /// A message arrived after completion.
  #[error("arrow already completed")]
  Completed,
  /// The input channel was closed.
  #[error("input channel disconnected")]
  Disconnected,
  /// The background worker could not be started or joined.
  #[error("combine worker unavailable")]
  WorkerUnavailable,
  /// The arrow configuration was rejected.
  #[error("invalid configuration: {0}")]
  Config(#[from] PipeDslError),
}

impl ArrowError {
  /// Creates a processing error from any displayable reason.
  #[must_use]
  pub fn processing(reason: impl core::fmt::Display) -> Self {
    Self::Processing(alloc::format!("{reason}"))
  }

  /// Creates a delivery error from any displayable reason.
  #[must_use]
  pub fn delivery(reason: impl core::fmt::Display) -> Self {
    Self::Delivery(alloc::format!("{reason}"))
  }
}
