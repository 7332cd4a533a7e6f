//! Arrow identifier.

use core::{fmt, sync::atomic::Ordering};

use portable_atomic::AtomicU64;

#[cfg(test)]
mod tests;

/// Unique identifier of an arrow, reported as the sender of the events it emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArrowId(u64);

impl ArrowId {
  /// Creates an identifier from a raw value.
  #[must_use]
  pub const fn new(value: u64) -> Self {
    Self(value)
  }

  /// Returns the raw identifier value.
  #[must_use]
  pub const fn value(self) -> u64 {
    self.0
  }

  /// Generates a monotonically increasing identifier.
  #[must_use]
  pub fn next() -> Self {
    static NEXT_ID: AtomicU64 = AtomicU64::new(1);
    Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
  }
}

impl fmt::Display for ArrowId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "arrow-{}", self.0)
  }
}
