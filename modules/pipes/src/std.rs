//! Extensions that need the standard library.

mod concurrent_combine_arrow;
mod tracing_arrow_observer;

pub use concurrent_combine_arrow::ConcurrentCombineArrow;
pub use tracing_arrow_observer::TracingArrowObserver;
