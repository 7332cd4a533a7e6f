//! Runtime pipe errors.

#[cfg(test)]
mod tests;

/// Errors produced while advancing a pipe.
///
/// Exhaustion is not an error: [`Pipe::advance`](super::Pipe::advance) reports it as `Ok(false)`.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum PipeError {
  /// No element is available at the requested position.
  #[error("no such element")]
  NoSuchElement,
  /// A path entry holds a value of a different type than requested.
  #[error("path element type mismatch")]
  TypeMismatch,
  /// Path recording is disabled on the upstream chain.
  #[error("path recording is disabled")]
  PathDisabled,
  /// The sibling already consumed the shared element and must wait for the others.
  #[error("waiting for sibling consumers")]
  WouldBlock,
  /// An upstream stage reported an element without exposing it.
  #[error("upstream advanced without a current element")]
  MissingCurrent,
}
