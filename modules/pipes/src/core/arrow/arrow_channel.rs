/// Delivery channel of an arrow event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowChannel {
  /// Processed messages.
  Message,
  /// End of the message sequence.
  Completion,
  /// Processing, delivery or completion failures.
  Error,
}
