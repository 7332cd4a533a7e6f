/// Handle returned when subscribing to an arrow, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
  pub(crate) const fn new(value: u64) -> Self {
    Self(value)
  }

  /// Returns the raw identifier value.
  #[must_use]
  pub const fn value(self) -> u64 {
    self.0
  }
}
