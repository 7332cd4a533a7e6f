/// Bound shared by every element that flows through a pipe or sits in a path.
///
/// Elements are cloned into path snapshots and sibling buffers, and pipes may be moved across
/// threads, hence the `Clone + Send + Sync + 'static` requirement.
pub trait PipeElement: Clone + Send + Sync + 'static {}

impl<T> PipeElement for T where T: Clone + Send + Sync + 'static {}
