// Public API exports
pub mod document;
pub mod logging;
pub mod planner;
pub mod report;

// Re-export main types for convenience
pub use document::{DocumentDescriptor, DocumentError, DocumentMeta};
pub use planner::{Batch, BatchPlan, BatchPlanner, DEFAULT_BATCH_SIZE, PlanError};
pub use report::{PlanReport, WorkflowPreamble};
