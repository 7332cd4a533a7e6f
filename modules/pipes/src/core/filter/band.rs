use crate::core::PipeDslError;


/// Inclusive `[lower, upper]` range over an ordered element type.
#[derive(Debug, Clone, PartialEq)]
pub struct Band<T> {
  lower: T,
  upper: T,
}

impl<T> Band<T>
where
  T: PartialOrd,
{
  /// Creates a band.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when `lower` is not less than or equal to `upper`.
  pub fn new(lower: T, upper: T) -> Result<Self, PipeDslError> {
    if lower.partial_cmp(&upper).is_none_or(|ordering| ordering.is_gt()) {
      return Err(PipeDslError::invalid_argument("band", "lower bound must not exceed upper bound"));
    }
    Ok(Self { lower, upper })
  }

  /// Returns `true` when `value` lies within the band.
  #[must_use]
  pub fn contains(&self, value: &T) -> bool {
    *value >= self.lower && *value <= self.upper
  }

  /// Returns the lower bound.
  #[must_use]
  pub const fn lower(&self) -> &T {
    &self.lower
  }

  /// Returns the upper bound.
  #[must_use]
  pub const fn upper(&self) -> &T {
    &self.upper
  }
}
