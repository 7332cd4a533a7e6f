use super::PipeDslError;

#[test]
fn invalid_argument_names_the_argument() {
  let error = PipeDslError::invalid_argument("fan_out", "must be greater than zero");
  assert_eq!(error.to_string(), "invalid argument `fan_out`: must be greater than zero");
}
