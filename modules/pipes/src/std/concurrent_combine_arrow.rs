//! Combine arrow pairing its inputs on a background thread.

extern crate std;


use alloc::{collections::VecDeque, format, sync::Arc};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, bounded, never, select};
use spin::Mutex;

use crate::core::{
  PipeElement,
  arrow::{Arrow, ArrowChannel, ArrowError, ArrowEvent, ArrowId, ArrowOutlet, CombineArrowConfig, SubscriptionId},
};

type Envelope<T> = (ArrowId, T);

struct ConcurrentCombineInner<L, R, Out> {
  left:   Mutex<Option<Sender<Envelope<L>>>>,
  right:  Mutex<Option<Sender<Envelope<R>>>>,
  worker: Mutex<Option<JoinHandle<()>>>,
  outlet: Arc<ArrowOutlet<Out>>,
}

/// Combine arrow whose pairing runs on a dedicated worker thread.
///
/// Each input is a bounded channel; senders block while it is full. The worker pairs values as
/// soon as both inputs have one available and delivers the combined value to the observers on the
/// worker thread. Once an input is closed and drained no further pair can form: the worker stops
/// and the arrow completes.
pub struct ConcurrentCombineArrow<L, R, Out> {
  inner: Arc<ConcurrentCombineInner<L, R, Out>>,
}

impl<L, R, Out> Clone for ConcurrentCombineArrow<L, R, Out> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<L, R, Out> ConcurrentCombineArrow<L, R, Out>
where
  L: PipeElement,
  R: PipeElement,
  Out: PipeElement,
{
  /// Spawns the worker thread.
  ///
  /// # Errors
  ///
  /// Returns [`ArrowError::Config`] when the configuration is invalid and
  /// [`ArrowError::WorkerUnavailable`] when the thread cannot be spawned.
  pub fn spawn<F>(combiner: F, config: &CombineArrowConfig) -> Result<Self, ArrowError>
  where
    F: FnMut(L, R) -> Out + Send + 'static, {
    config.validate()?;
    let (left_tx, left_rx) = bounded(config.queue_capacity());
    let (right_tx, right_rx) = bounded(config.queue_capacity());
    let outlet = Arc::new(ArrowOutlet::new());
    let name = config.worker_name().map_or_else(|| format!("weft-combine-{}", outlet.id().value()), Into::into);

    let worker_outlet = outlet.clone();
    let worker = thread::Builder::new()
      .name(name)
      .spawn(move || run_worker(combiner, left_rx, right_rx, &worker_outlet))
      .map_err(|_| ArrowError::WorkerUnavailable)?;
    tracing::debug!(arrow = %outlet.id(), "combine worker started");

    Ok(Self {
      inner: Arc::new(ConcurrentCombineInner {
        left: Mutex::new(Some(left_tx)),
        right: Mutex::new(Some(right_tx)),
        worker: Mutex::new(Some(worker)),
        outlet,
      }),
    })
  }

  /// Returns the identifier used as sender of locally originated events.
  #[must_use]
  pub fn id(&self) -> ArrowId {
    self.inner.outlet.id()
  }

  /// Returns `true` once the worker completed the arrow.
  #[must_use]
  pub fn is_completed(&self) -> bool {
    self.inner.outlet.is_completed()
  }

  /// Sends a value to the left input, blocking while its queue is full.
  ///
  /// # Errors
  ///
  /// Returns [`ArrowError::Disconnected`] when the input was closed or the worker stopped.
  pub fn send_left(&self, value: L) -> Result<(), ArrowError> {
    self.send_left_from(self.id(), value)
  }

  /// Sends a value to the right input, blocking while its queue is full.
  ///
  /// # Errors
  ///
  /// Returns [`ArrowError::Disconnected`] when the input was closed or the worker stopped.
  pub fn send_right(&self, value: R) -> Result<(), ArrowError> {
    self.send_right_from(self.id(), value)
  }

  /// Closes the left input.
  pub fn close_left(&self) {
    self.inner.left.lock().take();
  }

  /// Closes the right input.
  pub fn close_right(&self) {
    self.inner.right.lock().take();
  }

  /// Closes both inputs and waits for the worker to finish.
  ///
  /// Does nothing when called from an observer running on the worker thread.
  ///
  /// # Errors
  ///
  /// Returns [`ArrowError::WorkerUnavailable`] when the worker panicked.
  pub fn close(&self) -> Result<(), ArrowError> {
    self.close_left();
    self.close_right();
    let Some(worker) = self.inner.worker.lock().take() else {
      return Ok(());
    };
    if worker.thread().id() == thread::current().id() {
      return Ok(());
    }
    worker.join().map_err(|_| ArrowError::WorkerUnavailable)
  }

  /// Feeds the messages and completion of `upstream` into the left input.
  pub fn attach_left<X>(&self, upstream: &Arrow<X, L>) -> SubscriptionId
  where
    X: PipeElement, {
    let combine = self.clone();
    upstream.subscribe(None, move |event| match event {
      | ArrowEvent::Message { sender, payload } => combine.send_left_from(*sender, payload.clone()),
      | ArrowEvent::Completed { .. } => {
        combine.close_left();
        Ok(())
      },
      | ArrowEvent::Failed { .. } => Ok(()),
    })
  }

  /// Feeds the messages and completion of `upstream` into the right input.
  pub fn attach_right<X>(&self, upstream: &Arrow<X, R>) -> SubscriptionId
  where
    X: PipeElement, {
    let combine = self.clone();
    upstream.subscribe(None, move |event| match event {
      | ArrowEvent::Message { sender, payload } => combine.send_right_from(*sender, payload.clone()),
      | ArrowEvent::Completed { .. } => {
        combine.close_right();
        Ok(())
      },
      | ArrowEvent::Failed { .. } => Ok(()),
    })
  }

  /// Subscribes an observer to one channel, or to all of them with `None`.
  ///
  /// Observers run on the worker thread.
  pub fn subscribe<F>(&self, channel: Option<ArrowChannel>, observer: F) -> SubscriptionId
  where
    F: Fn(&ArrowEvent<Out>) -> Result<(), ArrowError> + Send + Sync + 'static, {
    self.inner.outlet.subscribe(channel, observer)
  }

  /// Removes a subscription. Returns `false` when it was unknown.
  pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
    self.inner.outlet.unsubscribe(id)
  }

  fn send_left_from(&self, sender: ArrowId, value: L) -> Result<(), ArrowError> {
    let channel = self.inner.left.lock().clone().ok_or(ArrowError::Disconnected)?;
    channel.send((sender, value)).map_err(|_| ArrowError::Disconnected)
  }

  fn send_right_from(&self, sender: ArrowId, value: R) -> Result<(), ArrowError> {
    let channel = self.inner.right.lock().clone().ok_or(ArrowError::Disconnected)?;
    channel.send((sender, value)).map_err(|_| ArrowError::Disconnected)
  }
}

fn run_worker<L, R, Out, F>(
  mut combiner: F,
  left_rx: Receiver<Envelope<L>>,
  right_rx: Receiver<Envelope<R>>,
  outlet: &ArrowOutlet<Out>,
) where
  F: FnMut(L, R) -> Out, {
  let mut lefts: VecDeque<L> = VecDeque::new();
  let mut rights: VecDeque<R> = VecDeque::new();
  let closed_left = never();
  let closed_right = never();
  let mut left_open = true;
  let mut right_open = true;

  while (left_open || !lefts.is_empty()) && (right_open || !rights.is_empty()) {
    let arrived = select! {
      recv(if left_open { &left_rx } else { &closed_left }) -> message => {
        match message {
          | Ok((sender, value)) => {
            lefts.push_back(value);
            Some(sender)
          },
          | Err(_) => {
            left_open = false;
            None
          },
        }
      }
      recv(if right_open { &right_rx } else { &closed_right }) -> message => {
        match message {
          | Ok((sender, value)) => {
            rights.push_back(value);
            Some(sender)
          },
          | Err(_) => {
            right_open = false;
            None
          },
        }
      }
    };
    // At most one pair forms per arrival; the arriving message names the sender.
    let Some(sender) = arrived else {
      continue;
    };
    if lefts.is_empty() || rights.is_empty() {
      continue;
    }
    if let (Some(left), Some(right)) = (lefts.pop_front(), rights.pop_front()) {
      outlet.deliver(sender, combiner(left, right));
    }
  }

  tracing::debug!(
    arrow = %outlet.id(),
    unpaired_left = lefts.len(),
    unpaired_right = rights.len(),
    "combine worker stopped"
  );
  drop(left_rx);
  drop(right_rx);
  outlet.complete();
}
