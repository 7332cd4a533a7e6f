//! Built-in arrow processing steps.

use core::hash::Hash;

use rand::{Rng, RngCore};

use super::{ArrowError, ArrowLogic, ArrowStep};
use crate::core::{
  aggregate::SideEffectBuffer,
  filter::{Band, SeenSet},
};

pub(crate) struct IdentityLogic;

impl<T> ArrowLogic<T, T> for IdentityLogic {
  fn process(&mut self, message: T) -> Result<ArrowStep<T>, ArrowError> {
    Ok(ArrowStep::Forward(message))
  }
}

pub(crate) struct MapLogic<F> {
  pub(crate) mapper: F,
}

impl<In, Out, F> ArrowLogic<In, Out> for MapLogic<F>
where
  F: FnMut(In) -> Out + Send,
{
  fn process(&mut self, message: In) -> Result<ArrowStep<Out>, ArrowError> {
    Ok(ArrowStep::Forward((self.mapper)(message)))
  }
}

pub(crate) struct TryMapLogic<F> {
  pub(crate) mapper: F,
}

impl<In, Out, F> ArrowLogic<In, Out> for TryMapLogic<F>
where
  F: FnMut(In) -> Result<Out, ArrowError> + Send,
{
  fn process(&mut self, message: In) -> Result<ArrowStep<Out>, ArrowError> {
    (self.mapper)(message).map(ArrowStep::Forward)
  }
}

pub(crate) struct FilterLogic<F> {
  pub(crate) predicate: F,
}

impl<T, F> ArrowLogic<T, T> for FilterLogic<F>
where
  F: FnMut(&T) -> bool + Send,
{
  fn process(&mut self, message: T) -> Result<ArrowStep<T>, ArrowError> {
    Ok(if (self.predicate)(&message) { ArrowStep::Forward(message) } else { ArrowStep::Suppress })
  }
}

pub(crate) struct DedupLogic<T> {
  pub(crate) seen: SeenSet<T>,
}

impl<T> ArrowLogic<T, T> for DedupLogic<T>
where
  T: Eq + Hash + Clone + Send,
{
  fn process(&mut self, message: T) -> Result<ArrowStep<T>, ArrowError> {
    Ok(if self.seen.insert(message.clone()) { ArrowStep::Forward(message) } else { ArrowStep::Suppress })
  }
}

pub(crate) struct SkipLogic {
  pub(crate) remaining: usize,
}

impl<T> ArrowLogic<T, T> for SkipLogic {
  fn process(&mut self, message: T) -> Result<ArrowStep<T>, ArrowError> {
    if self.remaining > 0 {
      self.remaining -= 1;
      return Ok(ArrowStep::Suppress);
    }
    Ok(ArrowStep::Forward(message))
  }
}

pub(crate) struct BandLogic<T> {
  pub(crate) band: Band<T>,
}

impl<T> ArrowLogic<T, T> for BandLogic<T>
where
  T: PartialOrd + Send,
{
  fn process(&mut self, message: T) -> Result<ArrowStep<T>, ArrowError> {
    Ok(if self.band.contains(&message) { ArrowStep::Forward(message) } else { ArrowStep::Suppress })
  }
}

pub(crate) struct RandomFilterLogic<R> {
  pub(crate) bias: f64,
  pub(crate) rng:  R,
}

impl<T, R> ArrowLogic<T, T> for RandomFilterLogic<R>
where
  R: RngCore + Send,
{
  fn process(&mut self, message: T) -> Result<ArrowStep<T>, ArrowError> {
    Ok(if self.rng.gen_bool(self.bias) { ArrowStep::Forward(message) } else { ArrowStep::Suppress })
  }
}

pub(crate) struct SideEffectLogic<F> {
  pub(crate) effect: F,
}

impl<T, F> ArrowLogic<T, T> for SideEffectLogic<F>
where
  F: FnMut(&T) + Send,
{
  fn process(&mut self, message: T) -> Result<ArrowStep<T>, ArrowError> {
    (self.effect)(&message);
    Ok(ArrowStep::Forward(message))
  }
}

pub(crate) struct StoreLogic<T> {
  pub(crate) buffer: SideEffectBuffer<T>,
}

impl<T> ArrowLogic<T, T> for StoreLogic<T>
where
  T: Clone + Send + Sync,
{
  fn process(&mut self, message: T) -> Result<ArrowStep<T>, ArrowError> {
    self.buffer.push(message.clone());
    Ok(ArrowStep::Forward(message))
  }
}
