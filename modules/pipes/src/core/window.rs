//! Stages bounding a sequence by position or by count.

mod has_count_pipe;
mod range_pipe;
mod skip_pipe;

pub use has_count_pipe::HasCountPipe;
pub use range_pipe::RangePipe;
pub use skip_pipe::SkipPipe;
