use alloc::{boxed::Box, collections::VecDeque, sync::Arc};

use spin::Mutex;

use super::{
  Arrow, ArrowChannel, ArrowError, ArrowEvent, ArrowId, ArrowOutlet, CombineArrowConfig, SubscriptionId,
};
use crate::core::{PipeDslError, PipeElement};

#[cfg(test)]
mod tests;

type Combiner<L, R, Out> = Box<dyn FnMut(L, R) -> Out + Send>;

struct CombineQueues<L, R> {
  left:            VecDeque<L>,
  right:           VecDeque<R>,
  left_completed:  bool,
  right_completed: bool,
}

enum Arrival<L, R> {
  Paired(L, R),
  Queued,
  Rejected,
}

struct CombineInner<L, R, Out> {
  queues:   Mutex<CombineQueues<L, R>>,
  combiner: Mutex<Combiner<L, R, Out>>,
  capacity: usize,
  outlet:   ArrowOutlet<Out>,
}

/// Arrow pairing messages arriving independently on a left and a right input.
///
/// A message is paired with the oldest unpaired message of the other input when there is one,
/// otherwise it waits in a bounded queue. Pairing preserves the arrival order of each input. The
/// arrow completes once both inputs completed.
pub struct CombineArrow<L, R, Out> {
  inner: Arc<CombineInner<L, R, Out>>,
}

impl<L, R, Out> Clone for CombineArrow<L, R, Out> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<L, R, Out> CombineArrow<L, R, Out>
where
  L: PipeElement,
  R: PipeElement,
  Out: PipeElement,
{
  /// Creates a combine arrow with the default configuration.
  #[must_use]
  pub fn new<F>(combiner: F) -> Self
  where
    F: FnMut(L, R) -> Out + Send + 'static, {
    Self::build(Box::new(combiner), CombineArrowConfig::default().queue_capacity())
  }

  /// Creates a combine arrow with the provided configuration.
  ///
  /// # Errors
  ///
  /// Returns [`PipeDslError::InvalidArgument`] when the configuration is invalid.
  pub fn with_config<F>(combiner: F, config: &CombineArrowConfig) -> Result<Self, PipeDslError>
  where
    F: FnMut(L, R) -> Out + Send + 'static, {
    config.validate()?;
    Ok(Self::build(Box::new(combiner), config.queue_capacity()))
  }

  fn build(combiner: Combiner<L, R, Out>, capacity: usize) -> Self {
    let queues =
      CombineQueues { left: VecDeque::new(), right: VecDeque::new(), left_completed: false, right_completed: false };
    Self {
      inner: Arc::new(CombineInner {
        queues: Mutex::new(queues),
        combiner: Mutex::new(combiner),
        capacity,
        outlet: ArrowOutlet::new(),
      }),
    }
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

  /// Returns the number of unpaired left messages.
  #[must_use]
  pub fn pending_left(&self) -> usize {
    self.inner.queues.lock().left.len()
  }

  /// Returns the number of unpaired right messages.
  #[must_use]
  pub fn pending_right(&self) -> usize {
    self.inner.queues.lock().right.len()
  }

  /// Receives a message on the left input.
  ///
  /// Returns `false` when the message was rejected or its pair could not be delivered.
  pub fn receive_left(&self, sender: Option<ArrowId>, message: L) -> bool {
    if self.reject_after_completion() {
      return false;
    }
    let arrival = {
      let mut queues = self.inner.queues.lock();
      match queues.right.pop_front() {
        | Some(right) => Arrival::Paired(message, right),
        | None if queues.left.len() >= self.inner.capacity => Arrival::Rejected,
        | None => {
          queues.left.push_back(message);
          Arrival::Queued
        },
      }
    };
    self.settle(sender, arrival)
  }

  /// Receives a message on the right input.
  ///
  /// Returns `false` when the message was rejected or its pair could not be delivered.
  pub fn receive_right(&self, sender: Option<ArrowId>, message: R) -> bool {
    if self.reject_after_completion() {
      return false;
    }
    let arrival = {
      let mut queues = self.inner.queues.lock();
      match queues.left.pop_front() {
        | Some(left) => Arrival::Paired(left, message),
        | None if queues.right.len() >= self.inner.capacity => Arrival::Rejected,
        | None => {
          queues.right.push_back(message);
          Arrival::Queued
        },
      }
    };
    self.settle(sender, arrival)
  }

  /// Marks the left input completed.
  pub fn complete_left(&self) {
    let both = {
      let mut queues = self.inner.queues.lock();
      queues.left_completed = true;
      queues.right_completed
    };
    if both {
      self.complete();
    }
  }

  /// Marks the right input completed.
  pub fn complete_right(&self) {
    let both = {
      let mut queues = self.inner.queues.lock();
      queues.right_completed = true;
      queues.left_completed
    };
    if both {
      self.complete();
    }
  }

  /// Completes the arrow, dropping unpaired messages.
  pub fn complete(&self) {
    let dropped = {
      let mut queues = self.inner.queues.lock();
      let dropped = (queues.left.len(), queues.right.len());
      queues.left.clear();
      queues.right.clear();
      dropped
    };
    if dropped != (0, 0) {
      tracing::debug!(arrow = %self.id(), left = dropped.0, right = dropped.1, "combine completed with unpaired messages");
    }
    self.inner.outlet.complete();
  }

  /// Feeds the messages and completion of `upstream` into the left input.
  pub fn attach_left<X>(&self, upstream: &Arrow<X, L>) -> SubscriptionId
  where
    X: PipeElement, {
    let combine = self.clone();
    upstream.subscribe(None, move |event| {
      match event {
        | ArrowEvent::Message { sender, payload } => {
          combine.receive_left(Some(*sender), payload.clone());
        },
        | ArrowEvent::Completed { .. } => combine.complete_left(),
        | ArrowEvent::Failed { .. } => {},
      }
      Ok(())
    })
  }

  /// Feeds the messages and completion of `upstream` into the right input.
  pub fn attach_right<X>(&self, upstream: &Arrow<X, R>) -> SubscriptionId
  where
    X: PipeElement, {
    let combine = self.clone();
    upstream.subscribe(None, move |event| {
      match event {
        | ArrowEvent::Message { sender, payload } => {
          combine.receive_right(Some(*sender), payload.clone());
        },
        | ArrowEvent::Completed { .. } => combine.complete_right(),
        | ArrowEvent::Failed { .. } => {},
      }
      Ok(())
    })
  }

  /// Subscribes an observer to one channel, or to all of them with `None`.
  pub fn subscribe<F>(&self, channel: Option<ArrowChannel>, observer: F) -> SubscriptionId
  where
    F: Fn(&ArrowEvent<Out>) -> Result<(), ArrowError> + Send + Sync + 'static, {
    self.inner.outlet.subscribe(channel, observer)
  }

  /// Removes a subscription. Returns `false` when it was unknown.
  pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
    self.inner.outlet.unsubscribe(id)
  }

  /// Forwards the combined messages and completion into `next`.
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

  fn reject_after_completion(&self) -> bool {
    let outlet = &self.inner.outlet;
    if outlet.is_completed() {
      outlet.fail(ArrowError::Completed);
      return true;
    }
    false
  }

  fn settle(&self, sender: Option<ArrowId>, arrival: Arrival<L, R>) -> bool {
    let outlet = &self.inner.outlet;
    match arrival {
      | Arrival::Paired(left, right) => {
        let combined = {
          let mut combiner = self.inner.combiner.lock();
          (combiner.as_mut())(left, right)
        };
        outlet.deliver(sender.unwrap_or(outlet.id()), combined)
      },
      | Arrival::Queued => true,
      | Arrival::Rejected => {
        tracing::warn!(arrow = %outlet.id(), capacity = self.inner.capacity, "combine queue overflow");
        outlet.fail(ArrowError::BufferFull { capacity: self.inner.capacity });
        false
      },
    }
  }
}
