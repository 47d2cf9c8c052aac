//! docdex core: reference extraction, index writing, and the end-to-end
//! generate pipeline.

pub mod extract;
pub mod pipeline;
pub mod writer;

pub use extract::build_reference_index;
pub use pipeline::{IndexConfig, IndexResult, ProgressReporter, SilentProgress, run_index};
pub use writer::write_index;
