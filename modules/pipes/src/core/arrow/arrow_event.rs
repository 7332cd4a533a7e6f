use super::{ArrowChannel, ArrowError, ArrowId};


/// Event delivered to arrow observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrowEvent<T> {
  /// A processed message.
  Message {
    /// Arrow the message originated from.
    sender:  ArrowId,
    /// Processed value.
    payload: T,
  },
  /// The arrow completed.
  Completed {
    /// Completing arrow.
    sender: ArrowId,
  },
  /// The arrow reported a failure.
  Failed {
    /// Failing arrow.
    sender: ArrowId,
    /// Reported failure.
    error:  ArrowError,
  },
}

impl<T> ArrowEvent<T> {
  /// Returns the channel this event travels on.
  #[must_use]
  pub const fn channel(&self) -> ArrowChannel {
    match self {
      | Self::Message { .. } => ArrowChannel::Message,
      | Self::Completed { .. } => ArrowChannel::Completion,
      | Self::Failed { .. } => ArrowChannel::Error,
    }
  }

  /// Returns the sender of the event.
  #[must_use]
  pub const fn sender(&self) -> ArrowId {
    match self {
      | Self::Message { sender, .. } | Self::Completed { sender } | Self::Failed { sender, .. } => *sender,
    }
  }
}
