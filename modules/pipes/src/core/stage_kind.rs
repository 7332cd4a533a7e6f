/// Closed set of stage tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
  /// Sequence adapter wrapping an element source.
  Source,
  /// Stage producing a new value from each upstream element.
  Transform,
  /// Stage discarding upstream elements.
  Filter,
  /// Stage bounding the sequence by position or count.
  Window,
  /// Stage reading an earlier value from the recorded path.
  Backtrack,
  /// Stage collecting elements into a side-effect.
  Aggregate,
  /// Sibling handle sharing one upstream.
  Branch,
  /// Stage joining several upstream sequences.
  Merge,
  /// Linear chain of stages.
  Pipeline,
}

impl StageKind {
  /// Returns `true` when stages of this kind append a new path entry for each produced value.
  #[must_use]
  pub const fn contributes_path_entry(self) -> bool {
    matches!(self, Self::Source | Self::Transform | Self::Backtrack)
  }
}
