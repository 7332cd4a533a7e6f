//! Arrow handle.

use alloc::{boxed::Box, sync::Arc};
use core::hash::Hash;

use rand::RngCore;
use spin::Mutex;

use super::{
  ArrowChannel, ArrowError, ArrowEvent, ArrowId, ArrowLogic, ArrowOutlet, ArrowStep, SubscriptionId,
  arrow_logics::{
    BandLogic, DedupLogic, FilterLogic, IdentityLogic, MapLogic, RandomFilterLogic, SideEffectLogic, SkipLogic,
    StoreLogic, TryMapLogic,
  },
};
use crate::core::{
  Pipe, PipeDslError, PipeElement, PipeError,
  aggregate::SideEffectBuffer,
  filter::{Band, SeenSet},
  upstream_current,
};

#[cfg(test)]
mod tests;

struct ArrowInner<In, Out> {
  logic:  Mutex<Box<dyn ArrowLogic<In, Out>>>,
  outlet: ArrowOutlet<Out>,
}

/// Push-driven processing stage.
///
/// Cloning an arrow yields another handle to the same stage. Messages are processed and delivered
/// on the calling thread; failures never surface as return values but as
/// [`ArrowEvent::Failed`] on the error channel.
pub struct Arrow<In, Out> {
  inner: Arc<ArrowInner<In, Out>>,
}

impl<In, Out> Clone for Arrow<In, Out> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<In, Out> Arrow<In, Out>
where
  In: PipeElement,
  Out: PipeElement,
{
  /// Creates an arrow driven by a custom processing step.
  #[must_use]
  pub fn from_logic<L>(logic: L) -> Self
  where
    L: ArrowLogic<In, Out> + 'static, {
    Self { inner: Arc::new(ArrowInner { logic: Mutex::new(Box::new(logic)), outlet: ArrowOutlet::new() }) }
  }

  /// Creates a transform arrow.
  #[must_use]
  pub fn map<F>(mapper: F) -> Self
  where
    F: FnMut(In) -> Out + Send + 'static, {
    Self::from_logic(MapLogic { mapper })
  }

  /// Creates a fallible transform arrow. Errors are reported on the error channel.
  #[must_use]
  pub fn try_map<F>(mapper: F) -> Self
  where
    F: FnMut(In) -> Result<Out, ArrowError> + Send + 'static, {
    Self::from_logic(TryMapLogic { mapper })
  }

  /// Returns the identifier used as sender of locally originated events.
  #[must_use]
  pub fn id(&self) -> ArrowId {
    self.inner.outlet.id()
  }

  /// Returns `true` once the arrow completed.
  #[must_use]
  pub fn is_completed(&self) -> bool {
    self.inner.outlet.is_completed()
  }

  /// Processes `message` and delivers the result to the message observers.
  ///
  /// The delivered sender is `sender` when provided, otherwise this arrow. Returns `false` when
  /// processing or delivery failed; the failure itself is reported on the error channel.
  pub fn receive_message(&self, sender: Option<ArrowId>, message: In) -> bool {
    let outlet = &self.inner.outlet;
    if outlet.is_completed() {
      outlet.fail(ArrowError::Completed);
      return false;
    }
    let step = self.inner.logic.lock().process(message);
    match step {
      | Ok(ArrowStep::Forward(output)) => outlet.deliver(sender.unwrap_or(outlet.id()), output),
      | Ok(ArrowStep::Suppress) => true,
      | Err(error) => {
        outlet.fail(error);
        false
      },
    }
  }

  /// Pushes a message originating from this arrow.
  pub fn push(&self, message: In) -> bool {
    self.receive_message(None, message)
  }

  /// Signals completion to the completion observers, once.
  pub fn complete(&self) {
    let outlet = &self.inner.outlet;
    if outlet.is_completed() {
      return;
    }
    let finished = self.inner.logic.lock().on_complete();
    if let Err(error) = finished {
      outlet.fail(error);
    }
    outlet.complete();
  }

  /// Subscribes an observer to one channel, or to all of them with `None`.
  pub fn subscribe<F>(&self, channel: Option<ArrowChannel>, observer: F) -> SubscriptionId
  where
    F: Fn(&ArrowEvent<Out>) -> Result<(), ArrowError> + Send + Sync + 'static, {
    self.inner.outlet.subscribe(channel, observer)
  }

  /// Subscribes to processed messages.
  pub fn on_message<F>(&self, observer: F) -> SubscriptionId
  where
    F: Fn(ArrowId, &Out) -> Result<(), ArrowError> + Send + Sync + 'static, {
    self.subscribe(Some(ArrowChannel::Message), move |event| match event {
      | ArrowEvent::Message { sender, payload } => observer(*sender, payload),
      | _ => Ok(()),
    })
  }

  /// Subscribes to completion.
  pub fn on_completed<F>(&self, observer: F) -> SubscriptionId
  where
    F: Fn(ArrowId) -> Result<(), ArrowError> + Send + Sync + 'static, {
    self.subscribe(Some(ArrowChannel::Completion), move |event| observer(event.sender()))
  }

  /// Subscribes to failures.
  pub fn on_error<F>(&self, observer: F) -> SubscriptionId
  where
    F: Fn(ArrowId, &ArrowError) -> Result<(), ArrowError> + Send + Sync + 'static, {
    self.subscribe(Some(ArrowChannel::Error), move |event| match event {
      | ArrowEvent::Failed { sender, error } => observer(*sender, error),
      | _ => Ok(()),
    })
  }

  /// Removes a subscription. Returns `false` when it was unknown.
  pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
    self.inner.outlet.unsubscribe(id)
  }

  /// Forwards messages and completion of this arrow into `next`.
  pub fn connect<Next>(&self, next: &Arrow<Out, Next>) -> SubscriptionId
  where
    Next: PipeElement, {
    let next = next.clone();
    self.subscribe(None, move |event| {
      match event {
        | ArrowEvent::Message { sender, payload } => {
          next.receive_message(Some(*sender), payload.clone());
        },
        | ArrowEvent::Completed { .. } => next.complete(),
        | ArrowEvent::Failed { .. } => {},
      }
      Ok(())
    })
  }

  /// Pushes every remaining element of `pipe` into this arrow, then completes it.
  ///
  /// Returns the number of elements pushed.
  ///
  /// # Errors
  ///
  /// Returns the error reported by `pipe`; the arrow is left open in that case.
  pub fn feed_from<P>(&self, pipe: &mut P) -> Result<usize, PipeError>
  where
    P: Pipe<Item = In>, {
    let mut pushed = 0;
    while pipe.advance()? {
      let message = upstream_current(pipe)?.clone();
      self.push(message);
      pushed += 1;
    }
    self.complete();
    Ok(pushed)
  }
}

impl<T> Arrow<T, T>
where
  T: PipeElement,
{
  /// Creates an arrow forwarding every message unchanged.
  #[must_use]
  pub fn identity() -> Self {
    Self::from_logic(IdentityLogic)
  }

  /// Creates an arrow forwarding the messages matching `predicate`.
  #[must_use]
  pub fn filter<F>(predicate: F) -> Self
  where
    F: FnMut(&T) -> bool + Send + 'static, {
    Self::from_logic(FilterLogic { predicate })
  }

  /// Creates an arrow forwarding the first occurrence of every distinct message.
  #[must_use]
  pub fn dedup() -> Self
  where
    T: Eq + Hash, {
    Self::from_logic(DedupLogic { seen: SeenSet::new() })
  }

  /// Creates an arrow dropping the first `count` messages.
  #[must_use]
  pub fn skip(count: usize) -> Self {
    Self::from_logic(SkipLogic { remaining: count })
  }

  /// Creates an arrow forwarding the messages within `band`.
  #[must_use]
  pub fn band(band: Band<T>) -> Self
  where
    T: PartialOrd, {
    Self::from_logic(BandLogic { band })
  }

  /// Creates an arrow forwarding each message with probability `bias`.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when `bias` is not within `[0, 1]`.
  pub fn random_filter<R>(bias: f64, rng: R) -> Result<Self, PipeDslError>
  where
    R: RngCore + Send + 'static, {
    if !(0.0..=1.0).contains(&bias) {
      return Err(PipeDslError::invalid_argument("bias", "must be within [0, 1]"));
    }
    Ok(Self::from_logic(RandomFilterLogic { bias, rng }))
  }

  /// Creates an arrow handing every message to `effect` before forwarding it.
  #[must_use]
  pub fn side_effect<F>(effect: F) -> Self
  where
    F: FnMut(&T) + Send + 'static, {
    Self::from_logic(SideEffectLogic { effect })
  }

  /// Creates an arrow appending every message to `buffer` before forwarding it.
  #[must_use]
  pub fn store(buffer: SideEffectBuffer<T>) -> Self {
    Self::from_logic(StoreLogic { buffer })
  }
}
