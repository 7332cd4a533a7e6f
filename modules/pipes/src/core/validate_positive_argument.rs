use super::PipeDslError;

/// Validates that the provided argument is greater than zero.
///
/// # Errors
///
/// Returns [`PipeDslError::InvalidArgument`] when `value == 0`.
pub(crate) const fn validate_positive_argument(name: &'static str, value: usize) -> Result<usize, PipeDslError> {
  if value == 0 {
    return Err(PipeDslError::invalid_argument(name, "must be greater than zero"));
  }
  Ok(value)
}
