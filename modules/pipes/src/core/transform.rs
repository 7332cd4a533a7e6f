//! Stages producing new values from upstream elements.

mod flat_map_pipe;
mod identity_pipe;
mod map_pipe;

pub use flat_map_pipe::FlatMapPipe;
pub use identity_pipe::IdentityPipe;
pub use map_pipe::MapPipe;
