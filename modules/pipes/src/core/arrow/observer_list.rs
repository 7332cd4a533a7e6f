//! Ordered subscriber list.

use alloc::{sync::Arc, vec::Vec};
use core::sync::atomic::Ordering;

use portable_atomic::AtomicU64;

use super::{ArrowChannel, ArrowError, ArrowEvent, SubscriptionId};

#[cfg(test)]
mod tests;

/// Shared observer callback.
pub type ArrowObserver<T> = Arc<dyn Fn(&ArrowEvent<T>) -> Result<(), ArrowError> + Send + Sync>;

struct ObserverEntry<T> {
  id:       SubscriptionId,
  channel:  Option<ArrowChannel>,
  observer: ArrowObserver<T>,
}

impl<T> Clone for ObserverEntry<T> {
  fn clone(&self) -> Self {
    Self { id: self.id, channel: self.channel, observer: self.observer.clone() }
  }
}

/// Subscription-ordered list of observers, each listening to one channel or to all of them.
pub struct ObserverList<T> {
  entries: Vec<ObserverEntry<T>>,
  next_id: AtomicU64,
}

impl<T> ObserverList<T> {
  /// Creates an empty list.
  #[must_use]
  pub const fn new() -> Self {
    Self { entries: Vec::new(), next_id: AtomicU64::new(1) }
  }

  /// Appends an observer. `None` subscribes to every channel.
  pub fn subscribe(&mut self, channel: Option<ArrowChannel>, observer: ArrowObserver<T>) -> SubscriptionId {
    let id = SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
    self.entries.push(ObserverEntry { id, channel, observer });
    id
  }

  /// Removes an observer, keeping the order of the others. Returns `false` when it was unknown.
  pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
    match self.entries.iter().position(|entry| entry.id == id) {
      | Some(position) => {
        self.entries.remove(position);
        true
      },
      | None => false,
    }
  }

  /// Returns the observers listening to `channel`, in subscription order.
  #[must_use]
  pub fn snapshot(&self, channel: ArrowChannel) -> Vec<ArrowObserver<T>> {
    self
      .entries
      .iter()
      .filter(|entry| entry.channel.is_none_or(|listened| listened == channel))
      .map(|entry| entry.observer.clone())
      .collect()
  }

  /// Returns the number of observers.
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when nobody is subscribed.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl<T> Default for ObserverList<T> {
  fn default() -> Self {
    Self::new()
  }
}
