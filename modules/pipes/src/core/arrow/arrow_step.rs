/// Outcome of processing one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrowStep<Out> {
  /// Deliver the value to the message subscribers.
  Forward(Out),
  /// Drop the message without delivering anything.
  Suppress,
}
