#[cfg(test)]
mod tests;

const DEFAULT_LAG_WARNING_THRESHOLD: usize = 1024;

/// Configuration for broadcast-copy branch groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopySplitConfig {
  lag_warning_threshold: Option<usize>,
}

impl CopySplitConfig {
  /// Creates a configuration with the provided lag warning threshold.
  ///
  /// `None` disables the warning.
  #[must_use]
  pub const fn new(lag_warning_threshold: Option<usize>) -> Self {
    Self { lag_warning_threshold }
  }

  /// Returns the number of buffered elements at which a lagging sibling is reported.
  #[must_use]
  pub const fn lag_warning_threshold(&self) -> Option<usize> {
    self.lag_warning_threshold
  }

  /// Updates the lag warning threshold.
  #[must_use]
  pub const fn with_lag_warning_threshold(mut self, lag_warning_threshold: Option<usize>) -> Self {
    self.lag_warning_threshold = lag_warning_threshold;
    self
  }
}

impl Default for CopySplitConfig {
  fn default() -> Self {
    Self::new(Some(DEFAULT_LAG_WARNING_THRESHOLD))
  }
}
