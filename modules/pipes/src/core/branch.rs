//! Stages sharing one upstream between several consumers, and stages joining several upstreams.

mod copy_branch;
mod copy_split_config;
mod copy_split_state;
mod exhaust_merge_pipe;
mod fair_merge_pipe;
mod sync_branch;
mod sync_split_state;

pub use copy_branch::CopyBranch;
pub use copy_split_config::CopySplitConfig;
pub use exhaust_merge_pipe::ExhaustMergePipe;
pub use fair_merge_pipe::FairMergePipe;
pub use sync_branch::SyncBranch;
