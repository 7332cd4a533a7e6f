use alloc::string::String;

use crate::core::{PipeDslError, validate_positive_argument};

#[cfg(test)]
mod tests;

const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// Configuration shared by the combine arrows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineArrowConfig {
  queue_capacity: usize,
  worker_name:    Option<String>,
}

impl CombineArrowConfig {
  /// Creates a configuration with the provided per-input queue capacity.
  #[must_use]
  pub const fn new(queue_capacity: usize) -> Self {
    Self { queue_capacity, worker_name: None }
  }

  /// Returns the maximum number of unpaired messages kept per input.
  #[must_use]
  pub const fn queue_capacity(&self) -> usize {
    self.queue_capacity
  }

  /// Returns the name given to the background worker thread, if any.
  #[must_use]
  pub fn worker_name(&self) -> Option<&str> {
    self.worker_name.as_deref()
  }

  /// Updates the queue capacity.
  #[must_use]
  pub const fn with_queue_capacity(mut self, queue_capacity: usize) -> Self {
    self.queue_capacity = queue_capacity;
    self
  }

  /// Updates the worker thread name.
  #[must_use]
  pub fn with_worker_name(mut self, worker_name: impl Into<String>) -> Self {
    self.worker_name = Some(worker_name.into());
    self
  }

  /// Checks the configuration.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when the queue capacity is zero.
  pub const fn validate(&self) -> Result<(), PipeDslError> {
    match validate_positive_argument("queue_capacity", self.queue_capacity) {
      | Ok(_) => Ok(()),
      | Err(error) => Err(error),
    }
  }
}

impl Default for CombineArrowConfig {
  fn default() -> Self {
    Self::new(DEFAULT_QUEUE_CAPACITY)
  }
}
