use alloc::{boxed::Box, vec, vec::Vec};
use core::hash::Hash;

use rand::RngCore;

use super::{
  Path, Pipe, PipeDslError, PipeElement, PipeError, StageKind,
  aggregate::{AggregatePipe, GroupCountPipe, GroupCountTable, SideEffectBuffer, SideEffectPipe, StorePipe},
  backtrack::{BackFilterPipe, BackPipe},
  branch::{CopyBranch, CopySplitConfig, ExhaustMergePipe, FairMergePipe, SyncBranch},
  filter::{AndFilterPipe, Band, BandFilterPipe, DedupPipe, FilterBranch, FilterPipe, OrFilterPipe, RandomFilterPipe},
  source::IterSource,
  transform::{FlatMapPipe, IdentityPipe, MapPipe},
  window::{HasCountPipe, RangePipe, SkipPipe},
};


type BoxedPipe<T> = Box<dyn Pipe<Item = T>>;

/// Linear chain of stages where each stage pulls from the previous one.
///
/// Advancing the pipeline advances its last stage, which pulls exactly as much as it needs from
/// upstream. The kinds of the composed stages are kept in order and exposed by
/// [`stages`](Pipeline::stages).
///
/// # Examples
///
/// ```
/// use weft_pipes_rs::core::{Pipe, Pipeline};
///
/// let mut pipeline = Pipeline::from_values(vec![1_u32, 2, 3, 4, 5, 6]).skip(2).band(3, 5)?.dedup();
/// assert_eq!(pipeline.collect_values(), Ok(vec![3, 4, 5]));
/// # Ok::<(), weft_pipes_rs::core::PipeDslError>(())
/// ```
pub struct Pipeline<T> {
  tail:   BoxedPipe<T>,
  stages: Vec<StageKind>,
}

impl<T> Pipeline<T>
where
  T: PipeElement,
{
  /// Starts a pipeline from any pipe.
  #[must_use]
  pub fn from_pipe<P>(pipe: P) -> Self
  where
    P: Pipe<Item = T> + 'static, {
    let stages = vec![pipe.kind()];
    Self { tail: Box::new(pipe), stages }
  }

  /// Starts a pipeline over the provided values.
  #[must_use]
  pub fn from_values(values: Vec<T>) -> Self {
    Self::from_pipe(IterSource::from_values(values))
  }

  /// Starts a pipeline over a cloneable iterator.
  #[must_use]
  pub fn from_iter_source<I>(iter: I) -> Self
  where
    I: Iterator<Item = T> + Clone + Send + 'static, {
    Self::from_pipe(IterSource::new(iter))
  }

  /// Starts a pipeline over a single value.
  #[must_use]
  pub fn single(value: T) -> Self {
    Self::from_pipe(IterSource::single(value))
  }

  /// Joins pipelines with a round-robin merge.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when `pipelines` is empty.
  pub fn fair_merge(pipelines: Vec<Self>) -> Result<Self, PipeDslError> {
    Ok(Self::from_pipe(FairMergePipe::new(pipelines)?))
  }

  /// Joins pipelines by draining each of them in turn.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when `pipelines` is empty.
  pub fn exhaust_merge(pipelines: Vec<Self>) -> Result<Self, PipeDslError> {
    Ok(Self::from_pipe(ExhaustMergePipe::new(pipelines)?))
  }

  /// Returns the kinds of the composed stages, oldest first.
  #[must_use]
  pub fn stages(&self) -> &[StageKind] {
    &self.stages
  }

  /// Toggles path recording on the whole chain.
  #[must_use]
  pub fn with_path(mut self, enabled: bool) -> Self {
    self.tail.enable_path(enabled);
    self
  }

  /// Appends a custom stage built on top of the current tail.
  #[must_use]
  pub fn then<P, F>(self, build: F) -> Pipeline<P::Item>
  where
    F: FnOnce(BoxedPipe<T>) -> P,
    P: Pipe + 'static, {
    let Self { tail, mut stages } = self;
    let stage = build(tail);
    stages.push(stage.kind());
    Pipeline { tail: Box::new(stage), stages }
  }

  fn try_then<P, F>(self, build: F) -> Result<Pipeline<P::Item>, PipeDslError>
  where
    F: FnOnce(BoxedPipe<T>) -> Result<P, PipeDslError>,
    P: Pipe + 'static, {
    let Self { tail, mut stages } = self;
    let stage = build(tail)?;
    stages.push(stage.kind());
    Ok(Pipeline { tail: Box::new(stage), stages })
  }

  /// Forwards every element as a new path entry.
  #[must_use]
  pub fn identity(self) -> Self {
    self.then(IdentityPipe::new)
  }

  /// Applies `mapper` to every element.
  #[must_use]
  pub fn map<Out, F>(self, mapper: F) -> Pipeline<Out>
  where
    Out: PipeElement,
    F: FnMut(&T) -> Out + Send + 'static, {
    self.then(|tail| MapPipe::new(tail, mapper))
  }

  /// Expands every element into zero or more outputs.
  #[must_use]
  pub fn flat_map<I, F>(self, expander: F) -> Pipeline<I::Item>
  where
    I: IntoIterator + 'static,
    I::Item: PipeElement,
    F: FnMut(&T) -> I + Send + 'static, {
    self.then(|tail| FlatMapPipe::new(tail, expander))
  }

  /// Keeps the elements matching `predicate`.
  #[must_use]
  pub fn filter<F>(self, predicate: F) -> Self
  where
    F: FnMut(&T) -> bool + Send + 'static, {
    self.then(|tail| FilterPipe::new(tail, predicate))
  }

  /// Keeps the first occurrence of every distinct element.
  #[must_use]
  pub fn dedup(self) -> Self
  where
    T: Eq + Hash, {
    self.then(DedupPipe::new)
  }

  /// Keeps the first element of every distinct key.
  #[must_use]
  pub fn dedup_by_key<K, F>(self, key_of: F) -> Self
  where
    K: Eq + Hash + Send + 'static,
    F: FnMut(&T) -> K + Send + 'static, {
    self.then(|tail| DedupPipe::by_key(tail, key_of))
  }

  /// Keeps each element with probability `bias`.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when `bias` is not within `[0, 1]`.
  pub fn random_filter<R>(self, bias: f64, rng: R) -> Result<Self, PipeDslError>
  where
    R: RngCore + Send + 'static, {
    self.try_then(|tail| RandomFilterPipe::new(tail, bias, rng))
  }

  /// Keeps the elements within the inclusive `[lower, upper]` band.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when `lower` exceeds `upper`.
  pub fn band(self, lower: T, upper: T) -> Result<Self, PipeDslError>
  where
    T: PartialOrd, {
    let band = Band::new(lower, upper)?;
    Ok(self.then(|tail| BandFilterPipe::new(tail, band)))
  }

  /// Keeps the elements for which every branch yields.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when `branches` is empty.
  pub fn and_filter(self, branches: Vec<FilterBranch<T>>) -> Result<Self, PipeDslError> {
    self.try_then(|tail| AndFilterPipe::new(tail, branches))
  }

  /// Keeps the elements for which at least one branch yields.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when `branches` is empty.
  pub fn or_filter(self, branches: Vec<FilterBranch<T>>) -> Result<Self, PipeDslError> {
    self.try_then(|tail| OrFilterPipe::new(tail, branches))
  }

  /// Drops the first `count` elements.
  #[must_use]
  pub fn skip(self, count: usize) -> Self {
    self.then(|tail| SkipPipe::new(tail, count))
  }

  /// Keeps the elements whose index lies in `[low, high]`.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when `high` is lower than `low`.
  pub fn range(self, low: usize, high: Option<usize>) -> Result<Self, PipeDslError> {
    self.try_then(|tail| RangePipe::new(tail, low, high))
  }

  /// Replaces the sequence with one boolean telling whether its length lies in `[min, max]`.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when `min > max`.
  pub fn has_count(self, min: Option<usize>, max: Option<usize>) -> Result<Pipeline<bool>, PipeDslError> {
    self.try_then(|tail| HasCountPipe::new(tail, min, max))
  }

  /// Keeps the elements whose path reaches `steps` entries back.
  #[must_use]
  pub fn back_filter(self, steps: usize) -> Self {
    self.then(|tail| BackFilterPipe::new(tail, steps))
  }

  /// Replaces every element with the value of type `B` recorded `steps` entries back.
  #[must_use]
  pub fn back<B>(self, steps: usize) -> Pipeline<B>
  where
    B: PipeElement, {
    self.then(|tail| BackPipe::<_, B>::new(tail, steps))
  }

  /// Collects the whole sequence into `buffer` before replaying it.
  #[must_use]
  pub fn aggregate(self, buffer: SideEffectBuffer<T>) -> Self {
    self.then(|tail| AggregatePipe::with_buffer(tail, buffer))
  }

  /// Appends every element to `buffer` as it passes.
  #[must_use]
  pub fn store(self, buffer: SideEffectBuffer<T>) -> Self {
    self.then(|tail| StorePipe::new(tail, buffer))
  }

  /// Hands every element to `effect` as it passes.
  #[must_use]
  pub fn side_effect<F>(self, effect: F) -> Self
  where
    F: FnMut(&T) + Send + 'static, {
    self.then(|tail| SideEffectPipe::new(tail, effect))
  }

  /// Counts the elements per key in `table` as they pass.
  #[must_use]
  pub fn group_count<K, F>(self, table: GroupCountTable<K>, key_of: F) -> Self
  where
    K: Eq + Hash + Clone + Send + 'static,
    F: FnMut(&T) -> K + Send + 'static, {
    self.then(|tail| GroupCountPipe::new(tail, table, key_of))
  }

  /// Splits into `fan_out` pipelines that each observe the whole sequence.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when `fan_out` is zero.
  pub fn copy_split(self, fan_out: usize) -> Result<Vec<Self>, PipeDslError> {
    self.copy_split_with_config(fan_out, CopySplitConfig::default())
  }

  /// Splits into `fan_out` pipelines that each observe the whole sequence.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when `fan_out` is zero.
  pub fn copy_split_with_config(self, fan_out: usize, config: CopySplitConfig) -> Result<Vec<Self>, PipeDslError> {
    let Self { tail, stages } = self;
    let branches = CopyBranch::split_with_config(tail, fan_out, config)?;
    Ok(branches.into_iter().map(|branch| Self::branch_of(&stages, branch)).collect())
  }

  /// Splits into `fan_out` pipelines advancing the shared upstream in lockstep.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when `fan_out` is zero.
  pub fn sync_split(self, fan_out: usize) -> Result<Vec<Self>, PipeDslError> {
    let Self { tail, stages } = self;
    let branches = SyncBranch::split(tail, fan_out)?;
    Ok(branches.into_iter().map(|branch| Self::branch_of(&stages, branch)).collect())
  }

  fn branch_of<P>(stages: &[StageKind], branch: P) -> Self
  where
    P: Pipe<Item = T> + 'static, {
    let mut stages = stages.to_vec();
    stages.push(branch.kind());
    Self { tail: Box::new(branch), stages }
  }
}

impl<T> Pipe for Pipeline<T>
where
  T: PipeElement,
{
  type Item = T;

  fn advance(&mut self) -> Result<bool, PipeError> {
    self.tail.advance()
  }

  fn current(&self) -> Option<&Self::Item> {
    self.tail.current()
  }

  fn reset(&mut self) {
    self.tail.reset();
  }

  fn enable_path(&mut self, enabled: bool) {
    self.tail.enable_path(enabled);
  }

  fn path(&self) -> Option<&Path> {
    self.tail.path()
  }

  fn kind(&self) -> StageKind {
    StageKind::Pipeline
  }
}
