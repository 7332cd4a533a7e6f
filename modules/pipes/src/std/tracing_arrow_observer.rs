//! `tracing`-backed arrow observer for standard environments.

extern crate std;


use core::fmt::Debug;

use tracing::{Level, event};

use crate::core::{
  PipeElement,
  arrow::{Arrow, ArrowEvent, CombineArrow, SubscriptionId},
};

/// Forwards every event of an arrow to the `tracing` crate.
///
/// Messages are emitted at `DEBUG`, completions at `INFO` and failures at `WARN`.
pub struct TracingArrowObserver;

impl TracingArrowObserver {
  /// Default target name used in emitted events.
  pub const DEFAULT_TARGET: &'static str = "weft::arrow::event";

  /// Subscribes the observer to every channel of `arrow`.
  pub fn attach<In, Out>(arrow: &Arrow<In, Out>) -> SubscriptionId
  where
    In: PipeElement,
    Out: PipeElement + Debug, {
    arrow.subscribe(None, |event| {
      Self::record(event);
      Ok(())
    })
  }

  /// Subscribes the observer to every channel of a combine arrow.
  pub fn attach_combine<L, R, Out>(arrow: &CombineArrow<L, R, Out>) -> SubscriptionId
  where
    L: PipeElement,
    R: PipeElement,
    Out: PipeElement + Debug, {
    arrow.subscribe(None, |event| {
      Self::record(event);
      Ok(())
    })
  }

  /// Emits one `tracing` event describing `event`.
  pub fn record<Out>(event: &ArrowEvent<Out>)
  where
    Out: Debug, {
    match event {
      | ArrowEvent::Message { sender, payload } => {
        event!(
          target: TracingArrowObserver::DEFAULT_TARGET,
          Level::DEBUG,
          sender = %sender,
          payload = ?payload,
          "arrow message"
        );
      },
      | ArrowEvent::Completed { sender } => {
        event!(target: TracingArrowObserver::DEFAULT_TARGET, Level::INFO, sender = %sender, "arrow completed");
      },
      | ArrowEvent::Failed { sender, error } => {
        event!(target: TracingArrowObserver::DEFAULT_TARGET, Level::WARN, sender = %sender, error = %error, "arrow failed");
      },
    }
  }
}
