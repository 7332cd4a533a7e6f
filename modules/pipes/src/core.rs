//! `no_std` traversal pipes and arrows.

/// Aggregation and side-effect stages.
pub mod aggregate;
/// Push-based arrows.
pub mod arrow;
/// Backtracking stages.
pub mod backtrack;
/// Branch and merge stages.
pub mod branch;
/// Filter stages.
pub mod filter;
/// Path snapshots.
mod path;
/// Pipe contract.
mod pipe;
/// Construction-time validation errors.
mod pipe_dsl_error;
/// Element bound shared by every stage.
mod pipe_element;
/// Runtime pipe errors.
mod pipe_error;
/// Iterator adapter over pipes.
mod pipe_iter;
/// Linear pipeline builder.
mod pipeline;
/// Sequence adapters.
pub mod source;
/// Stage tags.
mod stage_kind;
/// Current-element slot shared by stage implementations.
mod stage_slot;
/// Transform stages.
pub mod transform;
/// Positive argument validation.
mod validate_positive_argument;
/// Windowing stages.
pub mod window;

pub use path::{Path, PathValue};
pub use pipe::Pipe;
pub(crate) use pipe::upstream_current;
pub use pipe_dsl_error::PipeDslError;
pub use pipe_element::PipeElement;
pub use pipe_error::PipeError;
pub use pipe_iter::PipeIter;
pub use pipeline::Pipeline;
pub use stage_kind::StageKind;
pub(crate) use stage_slot::StageSlot;
pub(crate) use validate_positive_argument::validate_positive_argument;
