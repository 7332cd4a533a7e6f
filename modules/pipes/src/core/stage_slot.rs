use super::{Path, PipeElement};


/// Current-element slot embedded in every stage.
///
/// Tracks the current value, its path snapshot, whether paths are recorded and whether the stage
/// has reported exhaustion.
pub(crate) struct StageSlot<T> {
  current:      Option<T>,
  path:         Option<Path>,
  path_enabled: bool,
  exhausted:    bool,
}

impl<T> StageSlot<T>
where
  T: PipeElement,
{
  pub(crate) const fn new() -> Self {
    Self { current: None, path: None, path_enabled: false, exhausted: false }
  }

  pub(crate) const fn current(&self) -> Option<&T> {
    self.current.as_ref()
  }

  pub(crate) const fn path(&self) -> Option<&Path> {
    if self.path_enabled { self.path.as_ref() } else { None }
  }

  pub(crate) const fn is_exhausted(&self) -> bool {
    self.exhausted
  }

  pub(crate) fn set_path_enabled(&mut self, enabled: bool) {
    self.path_enabled = enabled;
    if !enabled {
      self.path = None;
    }
  }

  /// Stores a freshly produced value, recording it on top of `upstream`.
  pub(crate) fn emit_extended(&mut self, value: T, upstream: Option<&Path>) -> bool {
    if self.path_enabled {
      self.path = Some(Path::extend_or_root(upstream, value.clone()));
    }
    self.current = Some(value);
    true
  }

  /// Stores a value that was produced upstream, exposing the upstream path unchanged.
  pub(crate) fn emit_passthrough(&mut self, value: T, upstream: Option<&Path>) -> bool {
    if self.path_enabled {
      self.path = match upstream {
        | Some(path) => Some(path.clone()),
        | None => Some(Path::root(value.clone())),
      };
    }
    self.current = Some(value);
    true
  }

  /// Stores a value together with a path captured earlier.
  pub(crate) fn emit_with_path(&mut self, value: T, path: Option<Path>) -> bool {
    if self.path_enabled {
      self.path = path.or_else(|| Some(Path::root(value.clone())));
    }
    self.current = Some(value);
    true
  }

  /// Marks the stage exhausted and clears the current element.
  pub(crate) fn exhaust(&mut self) -> bool {
    self.current = None;
    self.path = None;
    self.exhausted = true;
    false
  }

  pub(crate) fn reset(&mut self) {
    self.current = None;
    self.path = None;
    self.exhausted = false;
  }
}
