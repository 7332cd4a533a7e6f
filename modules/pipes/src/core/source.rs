//! Sequence adapters turning plain element sources into pipes.

mod feed_source;
mod iter_source;

pub use feed_source::FeedSource;
pub use iter_source::IterSource;
