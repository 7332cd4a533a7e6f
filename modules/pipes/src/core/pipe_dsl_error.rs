//! Construction-time validation errors.

#[cfg(test)]
mod tests;

/// Errors raised while composing stages.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum PipeDslError {
  /// A stage argument failed validation.
  #[error("invalid argument `{name}`: {reason}")]
  InvalidArgument {
    /// Argument name.
    name:   &'static str,
    /// Why the value was rejected.
    reason: &'static str,
  },
}

impl PipeDslError {
  /// Creates an invalid-argument error.
  #[must_use]
  pub const fn invalid_argument(name: &'static str, reason: &'static str) -> Self {
    Self::InvalidArgument { name, reason }
  }
}
