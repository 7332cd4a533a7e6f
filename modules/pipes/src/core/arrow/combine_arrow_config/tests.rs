use crate::core::{PipeDslError, arrow::CombineArrowConfig};

#[test]
fn default_configuration() {
  let config = CombineArrowConfig::default();
  assert_eq!(config.queue_capacity(), 1024);
  assert_eq!(config.worker_name(), None);
  assert_eq!(config.validate(), Ok(()));
}

#[test]
fn builders_override_values() {
  let config = CombineArrowConfig::default().with_queue_capacity(8).with_worker_name("pairing");
  assert_eq!(config.queue_capacity(), 8);
  assert_eq!(config.worker_name(), Some("pairing"));
}

#[test]
fn zero_capacity_is_rejected() {
  let expected = PipeDslError::invalid_argument("queue_capacity", "must be greater than zero");
  assert_eq!(CombineArrowConfig::new(0).validate(), Err(expected));
}
