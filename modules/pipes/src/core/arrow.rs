//! Push-based counterparts of the pull stages.
//!
//! An arrow is driven from the outside: each received message is processed synchronously and the
//! result is delivered to the message subscribers in subscription order, on the caller's thread.
//! Completion and failures travel on their own channels.

mod arrow_channel;
mod arrow_error;
mod arrow_event;
mod arrow_id;
mod arrow_logic;
mod arrow_logics;
mod arrow_outlet;
mod arrow_step;
mod base;
mod combine_arrow;
mod combine_arrow_config;
mod observer_list;
mod subscription_id;

pub use arrow_channel::ArrowChannel;
pub use arrow_error::ArrowError;
pub use arrow_event::ArrowEvent;
pub use arrow_id::ArrowId;
pub use arrow_logic::ArrowLogic;
pub(crate) use arrow_outlet::ArrowOutlet;
pub use arrow_step::ArrowStep;
pub use base::Arrow;
pub use combine_arrow::CombineArrow;
pub use combine_arrow_config::CombineArrowConfig;
pub use observer_list::{ArrowObserver, ObserverList};
pub use subscription_id::SubscriptionId;
