//! Stages collecting elements into caller-visible side-effects.

mod aggregate_pipe;
mod group_count_pipe;
mod group_count_table;
mod side_effect_buffer;
mod side_effect_pipe;
mod store_pipe;

pub use aggregate_pipe::AggregatePipe;
pub use group_count_pipe::GroupCountPipe;
pub use group_count_table::GroupCountTable;
pub use side_effect_buffer::SideEffectBuffer;
pub use side_effect_pipe::SideEffectPipe;
pub use store_pipe::StorePipe;
