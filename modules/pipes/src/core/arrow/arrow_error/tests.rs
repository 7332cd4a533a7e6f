use crate::core::{PipeDslError, arrow::ArrowError};

#[test]
fn error_messages_are_stable() {
  assert_eq!(ArrowError::processing("bad input").to_string(), "processing failed: bad input");
  assert_eq!(ArrowError::delivery("observer gone").to_string(), "delivery failed: observer gone");
  assert_eq!(ArrowError::BufferFull { capacity: 4 }.to_string(), "combine queue is full (capacity 4)");
  assert_eq!(ArrowError::Completed.to_string(), "arrow already completed");
}

#[test]
fn dsl_errors_convert_into_config_errors() {
  let error: ArrowError = PipeDslError::invalid_argument("queue_capacity", "must be greater than zero").into();
  assert_eq!(error.to_string(), "invalid configuration: invalid argument `queue_capacity`: must be greater than zero");
}
