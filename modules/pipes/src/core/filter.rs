//! Stages discarding upstream elements.
//!
//! Filters never produce a value of their own: a passing element keeps the path of the stage it
//! came from.

mod and_filter_pipe;
mod band;
mod band_filter_pipe;
mod dedup_pipe;
mod filter_branch;
mod filter_pipe;
mod or_filter_pipe;
mod random_filter_pipe;
mod seen_set;

pub use and_filter_pipe::AndFilterPipe;
pub use band::Band;
pub use band_filter_pipe::BandFilterPipe;
pub use dedup_pipe::DedupPipe;
pub use filter_branch::FilterBranch;
pub use filter_pipe::FilterPipe;
pub use or_filter_pipe::OrFilterPipe;
pub use random_filter_pipe::RandomFilterPipe;
pub use seen_set::SeenSet;
