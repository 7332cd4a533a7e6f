use alloc::{sync::Arc, vec::Vec};
use core::sync::atomic::Ordering;

use portable_atomic::AtomicBool;
use spin::Mutex;

use super::{ArrowChannel, ArrowError, ArrowEvent, ArrowId, ArrowObserver, ObserverList, SubscriptionId};


/// Output side shared by every arrow flavour: identity, observers and completion state.
pub(crate) struct ArrowOutlet<Out> {
  id:        ArrowId,
  observers: Mutex<ObserverList<Out>>,
  completed: AtomicBool,
}

impl<Out> ArrowOutlet<Out> {
  pub(crate) fn new() -> Self {
    Self { id: ArrowId::next(), observers: Mutex::new(ObserverList::new()), completed: AtomicBool::new(false) }
  }

  pub(crate) const fn id(&self) -> ArrowId {
    self.id
  }

  pub(crate) fn is_completed(&self) -> bool {
    self.completed.load(Ordering::Acquire)
  }

  pub(crate) fn subscribe<F>(&self, channel: Option<ArrowChannel>, observer: F) -> SubscriptionId
  where
    F: Fn(&ArrowEvent<Out>) -> Result<(), ArrowError> + Send + Sync + 'static, {
    self.observers.lock().subscribe(channel, Arc::new(observer))
  }

  pub(crate) fn unsubscribe(&self, id: SubscriptionId) -> bool {
    self.observers.lock().unsubscribe(id)
  }

  /// Delivers a processed message to the message observers.
  ///
  /// Observer failures are reported on the error channel; delivery continues with the next
  /// observer. Returns `false` when any observer failed.
  pub(crate) fn deliver(&self, sender: ArrowId, payload: Out) -> bool {
    let observers = self.snapshot(ArrowChannel::Message);
    let event = ArrowEvent::Message { sender, payload };
    let mut delivered = true;
    for observer in &observers {
      if let Err(error) = observer(&event) {
        delivered = false;
        self.fail(error);
      }
    }
    delivered
  }

  /// Reports a failure on the error channel.
  pub(crate) fn fail(&self, error: ArrowError) {
    tracing::debug!(arrow = %self.id, %error, "arrow failure reported on the error channel");
    let observers = self.snapshot(ArrowChannel::Error);
    let event = ArrowEvent::Failed { sender: self.id, error };
    for observer in &observers {
      if let Err(nested) = observer(&event) {
        tracing::warn!(arrow = %self.id, error = %nested, "arrow error observer failed");
      }
    }
  }

  /// Signals completion once. Returns `false` when the outlet had already completed.
  pub(crate) fn complete(&self) -> bool {
    if self.completed.swap(true, Ordering::AcqRel) {
      return false;
    }
    let observers = self.snapshot(ArrowChannel::Completion);
    let event = ArrowEvent::Completed { sender: self.id };
    for observer in &observers {
      if let Err(error) = observer(&event) {
        self.fail(error);
      }
    }
    true
  }

  fn snapshot(&self, channel: ArrowChannel) -> Vec<ArrowObserver<Out>> {
    self.observers.lock().snapshot(channel)
  }
}
