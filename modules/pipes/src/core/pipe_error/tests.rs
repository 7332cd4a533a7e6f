use super::PipeError;

#[test]
fn error_messages_are_stable() {
  assert_eq!(PipeError::NoSuchElement.to_string(), "no such element");
  assert_eq!(PipeError::TypeMismatch.to_string(), "path element type mismatch");
  assert_eq!(PipeError::WouldBlock.to_string(), "waiting for sibling consumers");
}
