//! Stages reading earlier values from the recorded path.
//!
//! Both stages switch path recording on for their upstream chain when built. Disabling it later
//! makes them fail with [`PipeError::PathDisabled`](crate::core::PipeError::PathDisabled).

mod back_filter_pipe;
mod back_pipe;

pub use back_filter_pipe::BackFilterPipe;
pub use back_pipe::BackPipe;
